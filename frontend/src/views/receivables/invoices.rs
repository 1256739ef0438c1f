use std::rc::Rc;

use yew::prelude::*;

use crate::aggregate::{status_count, status_total};
use crate::controller::ReceivablesSnapshot;
use crate::filters::{choice, vendor_name, InvoiceFilter};
use crate::format::format_money;
use crate::models::{short_date, InvoiceStatus};
use crate::views::shared::{bind_select, bind_text, icon_file, page_shell};

use super::dashboard::status_amount_class;

#[derive(Properties, PartialEq)]
pub struct InvoicesViewProps {
    pub snapshot: Rc<ReceivablesSnapshot>,
}

fn status_badge(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Paid => "px-2 py-1 rounded-full text-xs bg-green-100 text-green-800",
        InvoiceStatus::Pending => "px-2 py-1 rounded-full text-xs bg-yellow-100 text-yellow-800",
        InvoiceStatus::Overdue => "px-2 py-1 rounded-full text-xs bg-red-100 text-red-800",
    }
}

fn summary_card(status: InvoiceStatus, count: usize, total: String) -> Html {
    let tone = match status {
        InvoiceStatus::Paid => "text-green-600",
        InvoiceStatus::Pending => "text-yellow-600",
        InvoiceStatus::Overdue => "text-red-600",
    };
    html! {
        <div class="bg-card rounded-[10px] p-6 border border-border">
            <p class="text-sm text-muted-foreground">{ format!("{} Invoices", status.label()) }</p>
            <p class={classes!("text-2xl", "font-bold", tone)}>{ total }</p>
            <p class="text-xs text-muted-foreground">{ format!("{} invoices", count) }</p>
        </div>
    }
}

#[function_component(InvoicesView)]
pub fn invoices_view(props: &InvoicesViewProps) -> Html {
    let filter = use_state(InvoiceFilter::default);

    let snapshot = &props.snapshot;
    let invoices = &snapshot.invoices;
    let visible = filter.apply(invoices, &snapshot.vendors);

    let select_class = "px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    html! {
        { page_shell(
            "Invoice Management",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        <input
                            type="text"
                            placeholder="Search invoices..."
                            value={filter.search.clone()}
                            oninput={bind_text(&filter, |f, v| f.search = v)}
                            class={select_class}
                        />
                        <select onchange={bind_select(&filter, |f, v| f.vendor_id = choice(&v))} class={select_class}>
                            <option value="all" selected={filter.vendor_id.is_none()}>{"All Vendors"}</option>
                            { for snapshot.vendors.iter().map(|vendor| html! {
                                <option value={vendor.id.clone()} selected={filter.vendor_id.as_deref() == Some(vendor.id.as_str())}>{ &vendor.name }</option>
                            }) }
                        </select>
                        <select onchange={bind_select(&filter, |f, v| f.status = InvoiceStatus::from_label(&v))} class={select_class}>
                            <option value="all" selected={filter.status.is_none()}>{"All Statuses"}</option>
                            { for InvoiceStatus::ALL.into_iter().map(|status| html! {
                                <option value={status.label()} selected={filter.status == Some(status)}>{ status.label() }</option>
                            }) }
                        </select>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        { for [InvoiceStatus::Paid, InvoiceStatus::Pending, InvoiceStatus::Overdue].into_iter().map(|status| {
                            summary_card(status, status_count(invoices, status), format_money(status_total(invoices, status)))
                        }) }
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="divide-y divide-border">
                            { if visible.is_empty() {
                                html! { <p class="p-8 text-center text-muted-foreground">{"No invoices found matching your filters."}</p> }
                            } else {
                                html! {
                                    <>
                                        { for visible.iter().map(|invoice| html! {
                                            <div key={invoice.id.clone()} class="p-6 flex items-center justify-between hover:bg-muted/30 transition-colors">
                                                <div class="flex items-center gap-4">
                                                    <div class="w-10 h-10 rounded-lg bg-blue-50 text-blue-600 flex items-center justify-center">{ icon_file() }</div>
                                                    <div>
                                                        <h3 class="font-semibold text-foreground">{ &invoice.invoice_number }</h3>
                                                        <p class="text-sm text-muted-foreground">{ vendor_name(&snapshot.vendors, &invoice.vendor_id) }</p>
                                                        <p class="text-xs text-muted-foreground">{ invoice.description() }</p>
                                                    </div>
                                                </div>
                                                <div class="text-right">
                                                    <p class={status_amount_class(invoice.status)}>{ format_money(invoice.amount) }</p>
                                                    <div class="flex items-center justify-end gap-2 text-sm text-muted-foreground">
                                                        <span>{ format!("Due {}", short_date(&invoice.due_date)) }</span>
                                                        <span class={status_badge(invoice.status)}>{ invoice.status.label() }</span>
                                                    </div>
                                                    { match invoice.paid_date.as_deref() {
                                                        Some(paid) => html! { <p class="text-xs text-green-700">{ format!("Paid {}", short_date(paid)) }</p> },
                                                        None => html! {},
                                                    } }
                                                </div>
                                            </div>
                                        }) }
                                    </>
                                }
                            }}
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
