use std::rc::Rc;

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::controller::ReceivablesSnapshot;
use crate::format::format_money;
use crate::forms::{open_invoices, preview_amount, PaymentForm, PaymentMode, PaymentPlan, VendorRef};
use crate::models::PaymentMethod;
use crate::views::shared::{
    bind_checkbox, bind_select, bind_text, icon_alert, icon_check, page_shell,
};

#[derive(Properties, PartialEq)]
pub struct PaymentsViewProps {
    pub snapshot: Rc<ReceivablesSnapshot>,
    pub busy: bool,
    pub receipt: Option<String>,
    pub on_submit: Callback<PaymentPlan>,
    pub on_dismiss_receipt: Callback<()>,
}

fn mode_key(mode: PaymentMode) -> &'static str {
    match mode {
        PaymentMode::Invoice => "invoice",
        PaymentMode::Vendor => "vendor",
    }
}

fn mode_from_key(key: &str) -> PaymentMode {
    match key {
        "vendor" => PaymentMode::Vendor,
        _ => PaymentMode::Invoice,
    }
}

#[function_component(PaymentsView)]
pub fn payments_view(props: &PaymentsViewProps) -> Html {
    let form = use_state(PaymentForm::default);
    let snapshot = &props.snapshot;

    let on_again = {
        let form = form.clone();
        let on_dismiss_receipt = props.on_dismiss_receipt.clone();
        Callback::from(move |_| {
            form.set(PaymentForm::default());
            on_dismiss_receipt.emit(());
        })
    };

    if let Some(message) = &props.receipt {
        return page_shell(
            "Process Payment",
            html! {},
            html! {
                <div class="max-w-2xl mx-auto bg-card rounded-xl shadow-sm border border-border p-8 text-center">
                    <div class="w-16 h-16 bg-green-100 text-green-600 rounded-full flex items-center justify-center mx-auto mb-4">
                        { icon_check() }
                    </div>
                    <h2 class="text-2xl font-bold text-foreground mb-2">{"Payment Recorded!"}</h2>
                    <p class="text-muted-foreground mb-6">{ message.clone() }</p>
                    <button onclick={on_again} class="px-6 py-2 bg-primary text-primary-foreground rounded-lg font-bold">{"Record another payment"}</button>
                </div>
            },
        );
    }

    let invoices = &snapshot.invoices;
    let plan = form.plan(invoices);
    let can_submit = form.can_submit(invoices) && !props.busy;
    let amount = preview_amount(&form.amount);
    let selected_invoice = form.invoice(invoices);
    let choices = open_invoices(invoices, &form.vendor_id);
    let payee = match &plan {
        Ok(PaymentPlan { vendor: VendorRef::New(vendor), .. }) => Some(vendor.name.clone()),
        _ => form.vendor(&snapshot.vendors).map(|v| v.name.clone()),
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            if let Ok(plan) = plan.clone() {
                on_submit.emit(plan);
            }
        })
    };

    // Picking an invoice pre-fills the full amount due.
    let on_invoice = {
        let form = form.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let id = select.value();
            let mut next = (*form).clone();
            if let Some(invoice) = snapshot.invoices.iter().find(|i| i.id == id) {
                next.amount = invoice.amount.round_dp(2).to_string();
            }
            next.invoice_id = id;
            form.set(next);
        })
    };

    let field_class = "w-full px-4 py-3 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary disabled:opacity-60";

    html! {
        { page_shell(
            "Process Payment",
            html! {},
            html! {
                <div class="bg-card rounded-xl shadow-sm border border-border p-6">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                        <div class="space-y-6">
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Payment Type"}</label>
                                <select onchange={bind_select(&form, |f, v| {
                                    f.mode = mode_from_key(&v);
                                    f.invoice_id.clear();
                                })} class={field_class}>
                                    <option value="invoice" selected={mode_key(form.mode) == "invoice"}>{"Pay a specific invoice"}</option>
                                    <option value="vendor" selected={mode_key(form.mode) == "vendor"}>{"General vendor payment"}</option>
                                </select>
                            </div>

                            <label class="flex items-center gap-2 text-sm text-muted-foreground">
                                <input type="checkbox" checked={form.creating_vendor} onchange={bind_checkbox(&form, |f, on| {
                                    f.creating_vendor = on;
                                    f.invoice_id.clear();
                                })} />
                                {"Pay a new vendor"}
                            </label>

                            { if form.creating_vendor {
                                html! {
                                    <div class="p-4 border rounded-lg space-y-3 bg-blue-50">
                                        <input type="text" placeholder="Vendor Name" value={form.new_vendor.name.clone()} oninput={bind_text(&form, |f, v| f.new_vendor.name = v)} class={field_class} />
                                        <input type="email" placeholder="Vendor Email" value={form.new_vendor.email.clone()} oninput={bind_text(&form, |f, v| f.new_vendor.email = v)} class={field_class} />
                                        <input type="text" placeholder="Phone (optional)" value={form.new_vendor.phone.clone()} oninput={bind_text(&form, |f, v| f.new_vendor.phone = v)} class={field_class} />
                                        { if form.mode == PaymentMode::Invoice {
                                            html! { <p class="text-xs text-muted-foreground">{"A new vendor has no invoices yet; switch to a general vendor payment."}</p> }
                                        } else { html! {} } }
                                    </div>
                                }
                            } else {
                                html! {
                                    <div>
                                        <label class="block text-sm font-medium text-foreground mb-2">{"Vendor"}</label>
                                        <select onchange={bind_select(&form, |f, v| {
                                            f.vendor_id = v;
                                            f.invoice_id.clear();
                                        })} class={field_class}>
                                            <option value="" selected={form.vendor_id.is_empty()}>{"Select vendor..."}</option>
                                            { for snapshot.vendors.iter().filter(|v| v.is_active).map(|vendor| html! {
                                                <option value={vendor.id.clone()} selected={form.vendor_id == vendor.id}>{ &vendor.name }</option>
                                            }) }
                                        </select>
                                    </div>
                                }
                            } }

                            { if form.mode == PaymentMode::Invoice && !form.creating_vendor {
                                html! {
                                    <div>
                                        <label class="block text-sm font-medium text-foreground mb-2">{"Invoice"}</label>
                                        <select onchange={on_invoice} class={field_class} disabled={form.vendor_id.is_empty()}>
                                            <option value="" selected={form.invoice_id.is_empty()}>{"Select invoice..."}</option>
                                            { for choices.iter().map(|invoice| html! {
                                                <option value={invoice.id.clone()} selected={form.invoice_id == invoice.id}>
                                                    { format!("{} - {} ({})", invoice.invoice_number, format_money(invoice.amount), invoice.status.label()) }
                                                </option>
                                            }) }
                                        </select>
                                        { if !form.vendor_id.is_empty() && choices.is_empty() {
                                            html! { <p class="mt-1 text-xs text-muted-foreground">{"This vendor has no open invoices."}</p> }
                                        } else { html! {} } }
                                    </div>
                                }
                            } else { html! {} } }

                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Amount"}</label>
                                <input type="text" inputmode="decimal" placeholder="0.00" value={form.amount.clone()} oninput={bind_text(&form, |f, v| f.amount = v)} class={field_class} />
                                { match form.overpayment(invoices) {
                                    Some(excess) => html! {
                                        <p class="mt-1 text-sm text-yellow-700 flex items-center gap-1">
                                            { icon_alert() }
                                            { format!("Exceeds the invoice amount by {}", format_money(excess)) }
                                        </p>
                                    },
                                    None => html! {},
                                } }
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Payment Method"}</label>
                                <select onchange={bind_select(&form, |f, v| f.method = PaymentMethod::from_key(&v).unwrap_or_default())} class={field_class}>
                                    { for PaymentMethod::ALL.into_iter().map(|method| html! {
                                        <option value={method.key()} selected={form.method == method}>{ method.label() }</option>
                                    }) }
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Notes (optional)"}</label>
                                <textarea rows="3" value={form.notes.clone()} oninput={bind_text(&form, |f, v| f.notes = v)} class={field_class}></textarea>
                            </div>
                        </div>

                        <div class="bg-secondary/40 rounded-xl p-6">
                            <h3 class="font-semibold text-foreground mb-4">{"Payment Summary"}</h3>
                            <dl class="space-y-3 text-sm">
                                <div class="flex justify-between">
                                    <dt class="text-muted-foreground">{"Vendor"}</dt>
                                    <dd class="text-foreground">{ payee.unwrap_or_else(|| "-".to_string()) }</dd>
                                </div>
                                <div class="flex justify-between">
                                    <dt class="text-muted-foreground">{"Invoice"}</dt>
                                    <dd class="text-foreground">
                                        { selected_invoice.map(|i| i.invoice_number.clone()).unwrap_or_else(|| "General payment".to_string()) }
                                    </dd>
                                </div>
                                { match selected_invoice {
                                    Some(invoice) => html! {
                                        <div class="flex justify-between">
                                            <dt class="text-muted-foreground">{"Amount Due"}</dt>
                                            <dd class="text-foreground">{ format_money(invoice.amount) }</dd>
                                        </div>
                                    },
                                    None => html! {},
                                } }
                                <div class="flex justify-between">
                                    <dt class="text-muted-foreground">{"Method"}</dt>
                                    <dd class="text-foreground">{ form.method.label() }</dd>
                                </div>
                                <div class="flex justify-between pt-3 border-t border-border">
                                    <dt class="font-semibold text-foreground">{"Total"}</dt>
                                    <dd class="font-bold text-green-600">{ format_money(amount) }</dd>
                                </div>
                            </dl>
                        </div>
                    </div>

                    <div class="mt-8 flex justify-center">
                        <button onclick={on_submit} disabled={!can_submit} class="px-8 py-3 bg-primary text-primary-foreground rounded-lg font-bold hover:opacity-90 disabled:opacity-50">
                            { if props.busy { "Processing..." } else { "Process Payment" } }
                        </button>
                    </div>
                </div>
            }
        ) }
    }
}
