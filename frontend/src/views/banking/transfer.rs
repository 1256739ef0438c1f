use std::rc::Rc;

use yew::prelude::*;

use crate::controller::BankingSnapshot;
use crate::format::format_money;
use crate::forms::{preview_amount, Destination, TransferForm, TransferPlan};
use crate::models::AccountKind;
use crate::views::shared::{
    bind_checkbox, bind_select, bind_text, icon_alert, icon_arrow_right, icon_check, page_shell,
};

#[derive(Properties, PartialEq)]
pub struct TransferViewProps {
    pub snapshot: Rc<BankingSnapshot>,
    pub busy: bool,
    pub receipt: Option<String>,
    pub on_submit: Callback<TransferPlan>,
    pub on_dismiss_receipt: Callback<()>,
}

fn destination_from_key(key: &str) -> Destination {
    match key {
        "new" => Destination::NewAccount,
        "external" => Destination::External,
        _ => Destination::Existing,
    }
}

#[function_component(TransferView)]
pub fn transfer_view(props: &TransferViewProps) -> Html {
    let form = use_state(TransferForm::default);
    let accounts = &props.snapshot.accounts;

    let on_again = {
        let form = form.clone();
        let on_dismiss_receipt = props.on_dismiss_receipt.clone();
        Callback::from(move |_| {
            form.set(TransferForm::default());
            on_dismiss_receipt.emit(());
        })
    };

    if let Some(message) = &props.receipt {
        return page_shell(
            "Transfer Money",
            html! {},
            html! {
                <div class="max-w-2xl mx-auto bg-card rounded-xl shadow-sm border border-border p-8 text-center">
                    <div class="w-16 h-16 bg-green-100 text-green-600 rounded-full flex items-center justify-center mx-auto mb-4">
                        { icon_check() }
                    </div>
                    <h2 class="text-2xl font-bold text-foreground mb-2">{"Transfer Successful!"}</h2>
                    <p class="text-muted-foreground mb-6">{ message.clone() }</p>
                    <button onclick={on_again} class="px-6 py-2 bg-primary text-primary-foreground rounded-lg font-bold">{"Make another transfer"}</button>
                </div>
            },
        );
    }

    let plan = form.plan(accounts);
    let can_submit = form.can_submit(accounts) && !props.busy;
    let amount = preview_amount(&form.amount);
    let source = form.source(accounts);
    let target_label = match form.destination {
        Destination::Existing => form.target(accounts).map(|a| format!("To: {}", a.name)),
        Destination::NewAccount => Some(form.new_account_name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| format!("To New Account: {}", name)),
        Destination::External => Some(form.recipient.name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| format!("To: {}", name)),
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| {
            if let Ok(plan) = plan.clone() {
                on_submit.emit(plan);
            }
        })
    };

    let field_class = "w-full px-4 py-3 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary disabled:opacity-60";
    let destination_key = match form.destination {
        Destination::Existing => "existing",
        Destination::NewAccount => "new",
        Destination::External => "external",
    };

    html! {
        { page_shell(
            "Transfer Money",
            html! {},
            html! {
                <div class="bg-card rounded-xl shadow-sm border border-border p-6">
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                        <div class="space-y-6">
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"From Account"}</label>
                                <select onchange={bind_select(&form, |f, v| f.from_account = v)} class={field_class}>
                                    <option value="" selected={form.from_account.is_empty()}>{"Select account..."}</option>
                                    { for accounts.iter().map(|account| html! {
                                        <option value={account.id.clone()} selected={form.from_account == account.id}>
                                            { format!("{} - {}", account.name, format_money(account.balance)) }
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Send To"}</label>
                                <select onchange={bind_select(&form, |f, v| f.destination = destination_from_key(&v))} class={field_class}>
                                    <option value="existing" selected={destination_key == "existing"}>{"One of my accounts"}</option>
                                    <option value="new" selected={destination_key == "new"}>{"A new account"}</option>
                                    <option value="external" selected={destination_key == "external"}>{"Someone at another bank"}</option>
                                </select>
                            </div>

                            { match form.destination {
                                Destination::Existing => html! {
                                    <select onchange={bind_select(&form, |f, v| f.to_account = v)} class={field_class}>
                                        <option value="" selected={form.to_account.is_empty()}>{"Select an existing account..."}</option>
                                        { for accounts.iter().filter(|a| a.id != form.from_account).map(|account| html! {
                                            <option value={account.id.clone()} selected={form.to_account == account.id}>{ &account.name }</option>
                                        }) }
                                    </select>
                                },
                                Destination::NewAccount => html! {
                                    <div class="p-4 border rounded-lg space-y-3 bg-blue-50">
                                        <input type="text" placeholder="New Account Name" value={form.new_account_name.clone()} oninput={bind_text(&form, |f, v| f.new_account_name = v)} class={field_class} />
                                        <select onchange={bind_select(&form, |f, v| f.new_account_kind = AccountKind::from_key(&v).unwrap_or_default())} class={field_class}>
                                            { for AccountKind::openable().into_iter().map(|kind| html! {
                                                <option value={kind.key()} selected={form.new_account_kind == kind}>{ kind.label() }</option>
                                            }) }
                                        </select>
                                        { if accounts.iter().any(|a| a.name.eq_ignore_ascii_case(form.new_account_name.trim())) {
                                            html! { <p class="text-xs text-yellow-700">{"You already have an account with this name; pick it from your accounts to avoid a duplicate."}</p> }
                                        } else { html! {} } }
                                    </div>
                                },
                                Destination::External => html! {
                                    <div class="p-4 border rounded-lg space-y-3 bg-slate-50">
                                        <input type="text" placeholder="Recipient Name" value={form.recipient.name.clone()} oninput={bind_text(&form, |f, v| f.recipient.name = v)} class={field_class} />
                                        <input type="text" placeholder="Account Number" value={form.recipient.account_number.clone()} oninput={bind_text(&form, |f, v| f.recipient.account_number = v)} class={field_class} />
                                        <input type="text" placeholder="Routing Number" value={form.recipient.routing_number.clone()} oninput={bind_text(&form, |f, v| f.recipient.routing_number = v)} class={field_class} />
                                        <input type="text" placeholder="Bank Name" value={form.recipient.bank_name.clone()} oninput={bind_text(&form, |f, v| f.recipient.bank_name = v)} class={field_class} />
                                    </div>
                                },
                            } }

                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Amount"}</label>
                                <input type="text" inputmode="decimal" placeholder="0.00" value={form.amount.clone()} oninput={bind_text(&form, |f, v| f.amount = v)} class={field_class} />
                                { if form.insufficient_funds(accounts) {
                                    html! { <p class="mt-1 text-sm text-red-600 flex items-center gap-1">{ icon_alert() }{"Insufficient funds"}</p> }
                                } else { html! {} } }
                            </div>

                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Description (optional)"}</label>
                                <input type="text" value={form.description.clone()} oninput={bind_text(&form, |f, v| f.description = v)} class={field_class} />
                            </div>

                            <label class="flex items-center gap-2 text-sm text-muted-foreground">
                                <input type="checkbox" checked={form.destination == Destination::NewAccount} onchange={bind_checkbox(&form, |f, on| {
                                    f.destination = if on { Destination::NewAccount } else { Destination::Existing };
                                })} />
                                {"Create a new account for this transfer"}
                            </label>
                        </div>

                        <div class="bg-secondary/40 rounded-xl p-6">
                            <h3 class="font-semibold text-foreground mb-4">{"Transfer Summary"}</h3>
                            <div class="space-y-4">
                                { match source {
                                    Some(account) => html! {
                                        <div class="flex items-center justify-between p-4 bg-card rounded-lg">
                                            <p>{ format!("From: {}", account.name) }</p>
                                            <span class="text-red-600">{ format!("-{}", format_money(amount)) }</span>
                                        </div>
                                    },
                                    None => html! {},
                                } }
                                <div class="flex justify-center text-muted-foreground">{ icon_arrow_right() }</div>
                                { match target_label {
                                    Some(label) => html! {
                                        <div class="flex items-center justify-between p-4 bg-card rounded-lg">
                                            <p>{ label }</p>
                                            <span class="text-green-600">{ format!("+{}", format_money(amount)) }</span>
                                        </div>
                                    },
                                    None => html! {},
                                } }
                            </div>
                        </div>
                    </div>

                    <div class="mt-8 flex justify-center">
                        <button onclick={on_submit} disabled={!can_submit} class="px-8 py-3 bg-primary text-primary-foreground rounded-lg font-bold hover:opacity-90 disabled:opacity-50">
                            { if props.busy { "Processing..." } else { "Complete Transfer" } }
                        </button>
                    </div>
                </div>
            }
        ) }
    }
}
