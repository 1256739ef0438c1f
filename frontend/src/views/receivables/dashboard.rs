use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::aggregate::ReceivablesKpis;
use crate::controller::ReceivablesSnapshot;
use crate::filters::vendor_name;
use crate::format::format_money;
use crate::forms::VendorFields;
use crate::models::{short_date, InvoiceStatus, NewVendor};
use crate::views::shared::{bind_text, icon_plus, page_shell, Banner, StatCard, StatIcon};

#[derive(Properties, PartialEq)]
pub struct ReceivablesDashboardProps {
    pub snapshot: Rc<ReceivablesSnapshot>,
    pub busy: bool,
    pub receipt: Option<String>,
    pub on_add_vendor: Callback<NewVendor>,
    pub on_dismiss_receipt: Callback<()>,
}

pub(super) fn status_amount_class(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Paid => "font-semibold text-green-600",
        InvoiceStatus::Overdue => "font-semibold text-red-600",
        InvoiceStatus::Pending => "font-semibold text-yellow-600",
    }
}

#[function_component(ReceivablesDashboard)]
pub fn receivables_dashboard(props: &ReceivablesDashboardProps) -> Html {
    let show_add = use_state(|| false);
    let vendor_form = use_state(VendorFields::default);
    let form_error = use_state(|| None::<String>);

    let snapshot = &props.snapshot;
    let kpis = ReceivablesKpis::compute(&snapshot.vendors, &snapshot.invoices, Utc::now());

    let on_toggle_add = {
        let show_add = show_add.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            show_add.set(!*show_add);
            form_error.set(None);
        })
    };

    let on_submit = {
        let vendor_form = vendor_form.clone();
        let form_error = form_error.clone();
        let on_add_vendor = props.on_add_vendor.clone();
        Callback::from(move |_| match vendor_form.to_request() {
            Ok(request) => {
                form_error.set(None);
                vendor_form.set(VendorFields::default());
                on_add_vendor.emit(request);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        })
    };

    let on_dismiss = {
        let on_dismiss_receipt = props.on_dismiss_receipt.clone();
        Callback::from(move |_| on_dismiss_receipt.emit(()))
    };

    html! {
        { page_shell(
            "Dashboard",
            html! {
                <button onclick={on_toggle_add} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    { if *show_add { "Close" } else { "Add Vendor" } }
                </button>
            },
            html! {
                <>
                    { match &props.receipt {
                        Some(message) => html! { <Banner message={message.clone()} success={true} on_dismiss={on_dismiss} /> },
                        None => html! {},
                    } }

                    <div class="bg-gradient-to-r from-blue-800 to-blue-600 rounded-2xl p-8 text-white">
                        <h2 class="text-3xl font-bold mb-2">{"Welcome to Zava AR"}</h2>
                        <p class="text-blue-100">{"Here's an overview of your accounts receivable"}</p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Total Outstanding" value={format_money(kpis.total_outstanding)} icon={StatIcon::Dollar} />
                        <StatCard title="Collected This Month" value={format_money(kpis.collected_this_month)} icon={StatIcon::TrendingUp} />
                        <StatCard title="Active Vendors" value={kpis.active_vendors.to_string()} icon={StatIcon::Users} />
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <StatCard title="Pending Invoices" value={kpis.pending_count.to_string()} hint={"Awaiting payment".to_string()} icon={StatIcon::Clock} />
                        <StatCard title="Overdue" value={kpis.overdue_count.to_string()} hint={format_money(kpis.overdue_amount)} icon={StatIcon::Clock} />
                        <StatCard title="Paid This Month" value={kpis.paid_this_month_count.to_string()} hint={format_money(kpis.collected_this_month)} icon={StatIcon::Check} />
                        <StatCard title="Vendors" value={kpis.active_vendors.to_string()} hint={format!("of {} total", kpis.vendor_count)} icon={StatIcon::Users} />
                    </div>

                    {
                        if *show_add {
                            html! {
                                <div class="bg-card rounded-[10px] p-6 border border-border">
                                    <h3 class="font-bold text-foreground text-lg mb-4">{"New vendor"}</h3>
                                    <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                                        <input placeholder="Vendor name" value={vendor_form.name.clone()} oninput={bind_text(&vendor_form, |f, v| f.name = v)} class="p-2 border rounded" />
                                        <input type="email" placeholder="Email" value={vendor_form.email.clone()} oninput={bind_text(&vendor_form, |f, v| f.email = v)} class="p-2 border rounded" />
                                        <input placeholder="Phone (optional)" value={vendor_form.phone.clone()} oninput={bind_text(&vendor_form, |f, v| f.phone = v)} class="p-2 border rounded" />
                                        <button onclick={on_submit} class="bg-accent text-white px-4 rounded disabled:opacity-50" disabled={props.busy}>
                                            { if props.busy { "Saving..." } else { "Add" } }
                                        </button>
                                    </div>
                                    { match &*form_error {
                                        Some(msg) => html! { <p class="text-sm text-red-500 mt-2">{ msg.clone() }</p> },
                                        None => html! {},
                                    } }
                                </div>
                            }
                        } else { html! {} }
                    }

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="p-6 border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Recent Invoices"}</h3>
                        </div>
                        <div class="divide-y divide-border">
                            { for snapshot.invoices.iter().take(5).map(|invoice| html! {
                                <div key={invoice.id.clone()} class="p-6 flex items-center justify-between hover:bg-muted/30 transition-colors">
                                    <div>
                                        <p class="font-medium text-foreground">{ &invoice.invoice_number }</p>
                                        <p class="text-sm text-muted-foreground">{ vendor_name(&snapshot.vendors, &invoice.vendor_id) }</p>
                                    </div>
                                    <div class="text-right">
                                        <p class={status_amount_class(invoice.status)}>{ format_money(invoice.amount) }</p>
                                        <p class="text-sm text-muted-foreground">{ format!("Due {}", short_date(&invoice.due_date)) }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
