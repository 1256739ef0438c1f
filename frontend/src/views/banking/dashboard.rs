use std::rc::Rc;

use chrono::Utc;
use yew::prelude::*;

use crate::aggregate::BankingKpis;
use crate::controller::BankingSnapshot;
use crate::forms::AccountForm;
use crate::format::{format_money, format_signed};
use crate::models::{short_date, AccountKind, NewAccount, TransactionKind};
use crate::views::shared::{
    bind_select, bind_text, icon_credit_card, icon_piggy_bank, icon_plus, icon_trending_down,
    icon_trending_up, page_shell, Banner, StatCard, StatIcon,
};

#[derive(Properties, PartialEq)]
pub struct BankingDashboardProps {
    pub snapshot: Rc<BankingSnapshot>,
    pub busy: bool,
    pub receipt: Option<String>,
    pub on_open_account: Callback<NewAccount>,
    pub on_dismiss_receipt: Callback<()>,
}

fn account_icon(kind: AccountKind) -> Html {
    match kind {
        AccountKind::Checking => html! { <span class="text-blue-600">{ icon_credit_card() }</span> },
        AccountKind::Savings => html! { <span class="text-green-600">{ icon_piggy_bank() }</span> },
        AccountKind::Credit => html! { <span class="text-red-600">{ icon_credit_card() }</span> },
    }
}

fn kind_badge(kind: TransactionKind) -> (&'static str, Html) {
    match kind {
        TransactionKind::Payment => ("p-2 rounded-full bg-red-100 text-red-600", icon_trending_down()),
        TransactionKind::Withdrawal => ("p-2 rounded-full bg-orange-100 text-orange-600", icon_trending_down()),
        TransactionKind::Transfer => ("p-2 rounded-full bg-blue-100 text-blue-600", icon_trending_up()),
        TransactionKind::Deposit => ("p-2 rounded-full bg-green-100 text-green-600", icon_trending_up()),
    }
}

#[function_component(BankingDashboard)]
pub fn banking_dashboard(props: &BankingDashboardProps) -> Html {
    let show_open = use_state(|| false);
    let form = use_state(AccountForm::default);
    let form_error = use_state(|| None::<String>);

    let snapshot = &props.snapshot;
    let kpis = BankingKpis::compute(&snapshot.accounts, &snapshot.transactions, Utc::now());

    let on_toggle_open = {
        let show_open = show_open.clone();
        let form_error = form_error.clone();
        Callback::from(move |_| {
            show_open.set(!*show_open);
            form_error.set(None);
        })
    };

    let on_submit = {
        let form = form.clone();
        let form_error = form_error.clone();
        let on_open_account = props.on_open_account.clone();
        Callback::from(move |_| match form.to_request() {
            Ok(request) => {
                form_error.set(None);
                form.set(AccountForm::default());
                on_open_account.emit(request);
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
                <button onclick={on_toggle_open} class="flex items-center gap-2 bg-primary text-primary-foreground px-4 py-2 rounded-xl font-bold text-sm hover:opacity-90 transition-all">
                    { icon_plus() }
                    { if *show_open { "Close" } else { "Open Account" } }
                </button>
            },
            html! {
                <>
                    { match &props.receipt {
                        Some(message) => html! { <Banner message={message.clone()} success={true} on_dismiss={on_dismiss} /> },
                        None => html! {},
                    } }

                    <div class="bg-gradient-to-r from-blue-800 to-blue-600 rounded-2xl p-8 text-white">
                        <h2 class="text-3xl font-bold mb-2">{"Welcome back!"}</h2>
                        <p class="text-blue-100">{"Here's an overview of your financial activity"}</p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Total Balance" value={format_money(kpis.total_balance)} icon={StatIcon::Dollar} />
                        <StatCard title="Monthly Spending" value={format_money(kpis.monthly_spending)} icon={StatIcon::TrendingDown} />
                        <StatCard title="Active Accounts" value={kpis.active_accounts.to_string()} icon={StatIcon::Shield} />
                    </div>

                    {
                        if *show_open {
                            html! {
                                <div class="bg-card rounded-[10px] p-6 border border-border">
                                    <h3 class="font-bold text-foreground text-lg mb-4">{"Open a new account"}</h3>
                                    <div class="grid grid-cols-1 md:grid-cols-4 gap-3">
                                        <input placeholder="Account name" value={form.name.clone()} oninput={bind_text(&form, |f, v| f.name = v)} class="p-2 border rounded" />
                                        <select onchange={bind_select(&form, |f, v| f.kind = AccountKind::from_key(&v).unwrap_or_default())} class="p-2 border rounded">
                                            { for [AccountKind::Checking, AccountKind::Savings, AccountKind::Credit].into_iter().map(|kind| html! {
                                                <option value={kind.key()} selected={form.kind == kind}>{ kind.label() }</option>
                                            }) }
                                        </select>
                                        <input placeholder="Opening balance (optional)" value={form.opening_balance.clone()} oninput={bind_text(&form, |f, v| f.opening_balance = v)} class="p-2 border rounded" />
                                        <button onclick={on_submit} class="bg-accent text-white px-4 rounded disabled:opacity-50" disabled={props.busy}>
                                            { if props.busy { "Saving..." } else { "Open" } }
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

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for snapshot.accounts.iter().map(|account| html! {
                            <div key={account.id.clone()} class="bg-card rounded-xl shadow-sm border border-border p-6 hover:shadow-md transition-shadow">
                                <div class="flex items-center gap-3 mb-4">
                                    { account_icon(account.account_type) }
                                    <div>
                                        <h3 class="font-semibold text-foreground">{ &account.name }</h3>
                                        <p class="text-sm text-muted-foreground">{ account.masked_number() }</p>
                                    </div>
                                </div>
                                <div class="text-right">
                                    <p class="text-2xl font-bold text-foreground">{ format_money(account.balance) }</p>
                                    <p class="text-sm text-muted-foreground">{ format!("{} Account", account.account_type.label()) }</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="p-6 border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Recent Transactions"}</h3>
                        </div>
                        <div class="divide-y divide-border">
                            { if snapshot.transactions.is_empty() {
                                html! { <p class="p-6 text-center text-muted-foreground">{"No transactions yet."}</p> }
                            } else {
                                html! {
                                    <>
                                        { for snapshot.transactions.iter().take(5).map(|tx| {
                                            let (badge_class, badge_icon) = kind_badge(tx.kind);
                                            let amount_class = if tx.is_outflow() { "font-semibold text-red-600" } else { "font-semibold text-green-600" };
                                            html! {
                                                <div key={tx.id.clone()} class="p-6 flex items-center justify-between hover:bg-muted/30 transition-colors">
                                                    <div class="flex items-center gap-4">
                                                        <div class={badge_class}>{ badge_icon }</div>
                                                        <div>
                                                            <p class="font-medium text-foreground">{ tx.description() }</p>
                                                            <p class="text-sm text-muted-foreground">{ tx.category() }</p>
                                                        </div>
                                                    </div>
                                                    <div class="text-right">
                                                        <p class={amount_class}>{ format_signed(tx.amount, tx.is_outflow()) }</p>
                                                        <p class="text-sm text-muted-foreground">{ short_date(tx.created_at()) }</p>
                                                    </div>
                                                </div>
                                            }
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
