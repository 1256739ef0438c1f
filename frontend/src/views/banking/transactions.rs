use std::rc::Rc;

use yew::prelude::*;

use crate::aggregate::kind_total;
use crate::controller::BankingSnapshot;
use crate::filters::{account_name, categories, choice, kinds, TransactionFilter};
use crate::format::{format_money, format_signed};
use crate::models::{short_date, TransactionKind, TransactionStatus};
use crate::views::shared::{bind_select, bind_text, page_shell, StatCard, StatIcon};

#[derive(Properties, PartialEq)]
pub struct TransactionsViewProps {
    pub snapshot: Rc<BankingSnapshot>,
}

fn amount_class(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Payment | TransactionKind::Withdrawal => "text-lg font-semibold text-red-600",
        TransactionKind::Deposit => "text-lg font-semibold text-green-600",
        TransactionKind::Transfer => "text-lg font-semibold text-blue-600",
    }
}

fn status_class(status: TransactionStatus) -> &'static str {
    match status {
        TransactionStatus::Completed => "px-2 py-1 rounded-full text-xs bg-green-100 text-green-800",
        TransactionStatus::Pending => "px-2 py-1 rounded-full text-xs bg-yellow-100 text-yellow-800",
        TransactionStatus::Failed => "px-2 py-1 rounded-full text-xs bg-red-100 text-red-800",
    }
}

#[function_component(TransactionsView)]
pub fn transactions_view(props: &TransactionsViewProps) -> Html {
    let filter = use_state(TransactionFilter::default);

    let snapshot = &props.snapshot;
    let transactions = &snapshot.transactions;
    let visible = filter.apply(transactions);
    let category_options = categories(transactions);
    let kind_options = kinds(transactions);

    let select_class = "px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    html! {
        { page_shell(
            "Transaction History",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                        <input
                            type="text"
                            placeholder="Search transactions..."
                            value={filter.search.clone()}
                            oninput={bind_text(&filter, |f, v| f.search = v)}
                            class={select_class}
                        />
                        <select onchange={bind_select(&filter, |f, v| f.account_id = choice(&v))} class={select_class}>
                            <option value="all" selected={filter.account_id.is_none()}>{"All Accounts"}</option>
                            { for snapshot.accounts.iter().map(|account| html! {
                                <option value={account.id.clone()} selected={filter.account_id.as_deref() == Some(account.id.as_str())}>{ &account.name }</option>
                            }) }
                        </select>
                        <select onchange={bind_select(&filter, |f, v| f.kind = TransactionKind::from_key(&v))} class={select_class}>
                            <option value="all" selected={filter.kind.is_none()}>{"All Types"}</option>
                            { for kind_options.into_iter().map(|kind| html! {
                                <option value={kind.key()} selected={filter.kind == Some(kind)} class="capitalize">{ kind.key() }</option>
                            }) }
                        </select>
                        <select onchange={bind_select(&filter, |f, v| f.category = choice(&v))} class={select_class}>
                            <option value="all" selected={filter.category.is_none()}>{"All Categories"}</option>
                            { for category_options.into_iter().map(|category| {
                                let selected = filter.category.as_deref() == Some(category.as_str());
                                html! { <option value={category.clone()} selected={selected}>{ category }</option> }
                            }) }
                        </select>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                        <StatCard title="Total Income" value={format_money(kind_total(transactions, TransactionKind::Deposit))} icon={StatIcon::TrendingUp} />
                        <StatCard title="Total Expenses" value={format_money(kind_total(transactions, TransactionKind::Payment))} icon={StatIcon::TrendingDown} />
                        <StatCard title="Total Transfers" value={format_money(kind_total(transactions, TransactionKind::Transfer))} icon={StatIcon::Dollar} />
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="divide-y divide-border">
                            { if visible.is_empty() {
                                html! { <p class="p-8 text-center text-muted-foreground">{"No transactions found matching your filters."}</p> }
                            } else {
                                html! {
                                    <>
                                        { for visible.iter().map(|tx| html! {
                                            <div key={tx.id.clone()} class="p-6 flex items-center justify-between hover:bg-muted/30 transition-colors">
                                                <div>
                                                    <h3 class="font-semibold text-foreground">{ tx.description() }</h3>
                                                    <div class="flex items-center gap-2 text-sm text-muted-foreground">
                                                        <span>{ tx.category() }</span>
                                                        <span>{"•"}</span>
                                                        <span>{ account_name(&snapshot.accounts, tx.from_account_id.as_deref().unwrap_or_default()) }</span>
                                                        { match tx.to_account_id.as_deref() {
                                                            Some(to) => html! {
                                                                <>
                                                                    <span>{"→"}</span>
                                                                    <span>{ account_name(&snapshot.accounts, to) }</span>
                                                                </>
                                                            },
                                                            None => html! {},
                                                        } }
                                                    </div>
                                                </div>
                                                <div class="text-right">
                                                    <p class={amount_class(tx.kind)}>{ format_signed(tx.amount, tx.is_outflow()) }</p>
                                                    <div class="flex items-center justify-end gap-2 text-sm text-muted-foreground">
                                                        <span>{ short_date(tx.created_at()) }</span>
                                                        <span class={status_class(tx.status)}>{ tx.status.key() }</span>
                                                    </div>
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
