use std::rc::Rc;

use chrono::Utc;
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::aggregate::{
    monthly_trend, over_budget, savings_rate, share, spending_by_category, total_balance,
    SavingsHealth,
};
use crate::controller::BankingSnapshot;
use crate::format::{format_money, format_percent};
use crate::views::shared::{page_shell, progress_bar, StatCard, StatIcon};

const PALETTE: [&str; 6] = [
    "bg-blue-500",
    "bg-emerald-500",
    "bg-amber-500",
    "bg-red-500",
    "bg-violet-500",
    "bg-orange-500",
];

#[derive(Properties, PartialEq)]
pub struct BankingAnalyticsProps {
    pub snapshot: Rc<BankingSnapshot>,
}

#[function_component(BankingAnalytics)]
pub fn banking_analytics(props: &BankingAnalyticsProps) -> Html {
    let snapshot = &props.snapshot;
    let categories = spending_by_category(&snapshot.transactions);
    let trend = monthly_trend(&snapshot.transactions, Utc::now());
    let current = trend.last();

    let income = current.map(|m| m.income).unwrap_or(Decimal::ZERO);
    let expenses = current.map(|m| m.expenses).unwrap_or(Decimal::ZERO);
    let rate = current.map(savings_rate).unwrap_or(0.0);
    let health = SavingsHealth::from_rate(rate);
    let budget_note = match current {
        Some(month) if over_budget(month) => "Consider reducing expenses",
        _ => "On track",
    };

    let category_total: Decimal = categories.iter().map(|c| c.amount).sum();
    let top_category = categories.first().map(|c| c.amount).unwrap_or(Decimal::ZERO);
    let trend_peak = trend
        .iter()
        .map(|m| m.income.max(m.expenses))
        .max()
        .unwrap_or(Decimal::ZERO);

    html! {
        { page_shell(
            "Analytics",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <StatCard title="Net Worth" value={format_money(total_balance(&snapshot.accounts))} icon={StatIcon::Dollar} />
                        <StatCard title="Monthly Income" value={format_money(income)} icon={StatIcon::TrendingUp} />
                        <StatCard title="Monthly Expenses" value={format_money(expenses)} icon={StatIcon::TrendingDown} />
                        <StatCard title="Savings Rate" value={format_percent(rate, 1)} icon={StatIcon::Target} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-4">{"Spending by Category"}</h3>
                            { if categories.is_empty() {
                                html! { <p class="text-sm text-muted-foreground">{"No payments recorded yet."}</p> }
                            } else {
                                html! {
                                    <div class="space-y-3">
                                        { for categories.iter().take(6).enumerate().map(|(idx, item)| html! {
                                            <div class="flex items-center gap-3 text-sm">
                                                <span class={classes!("w-3", "h-3", "rounded-full", PALETTE[idx % PALETTE.len()])}></span>
                                                <span class="flex-1 truncate text-foreground">{ &item.category }</span>
                                                <span class="text-muted-foreground">{ format_percent(share(item.amount, category_total), 1) }</span>
                                            </div>
                                        }) }
                                    </div>
                                }
                            }}
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-4">{"Category Breakdown"}</h3>
                            <div class="space-y-3">
                                { for categories.iter().take(6).map(|item| html! {
                                    <div class="flex flex-col gap-1 text-sm">
                                        <div class="flex items-center justify-between">
                                            <span class="text-foreground">{ &item.category }</span>
                                            <span class="text-muted-foreground">{ format_money(item.amount) }</span>
                                        </div>
                                        { progress_bar(share(item.amount, top_category), "bg-blue-500") }
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-foreground text-lg mb-4">{"Income vs Expenses Trend"}</h3>
                        <table class="w-full text-left border-collapse text-sm">
                            <thead>
                                <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-4 py-3 font-bold">{"Month"}</th>
                                    <th class="px-4 py-3 font-bold">{"Income"}</th>
                                    <th class="px-4 py-3 font-bold">{"Expenses"}</th>
                                    <th class="px-4 py-3 font-bold text-right">{"Net"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { for trend.iter().map(|month| html! {
                                    <tr key={format!("{}-{}", month.year, month.month)}>
                                        <td class="px-4 py-3 text-foreground">{ &month.label }</td>
                                        <td class="px-4 py-3">
                                            <div class="text-green-700">{ format_money(month.income) }</div>
                                            { progress_bar(share(month.income, trend_peak), "bg-emerald-500") }
                                        </td>
                                        <td class="px-4 py-3">
                                            <div class="text-red-700">{ format_money(month.expenses) }</div>
                                            { progress_bar(share(month.expenses, trend_peak), "bg-red-500") }
                                        </td>
                                        <td class={if month.net.is_sign_negative() { "px-4 py-3 text-right text-red-600" } else { "px-4 py-3 text-right text-blue-600" }}>
                                            { format_money(month.net) }
                                        </td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-foreground text-lg mb-4">{"Financial Insights"}</h3>
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <div class="bg-blue-50 rounded-lg p-4">
                                <h4 class="font-medium text-blue-900 mb-2">{"Top Spending Category"}</h4>
                                <p class="text-blue-700">
                                    { match categories.first() {
                                        Some(top) => format!("{} - {}", top.category, format_money(top.amount)),
                                        None => "No spending yet".to_string(),
                                    } }
                                </p>
                            </div>
                            <div class="bg-green-50 rounded-lg p-4">
                                <h4 class="font-medium text-green-900 mb-2">{"Savings Rate"}</h4>
                                <p class="text-green-700">{ format!("{} - {}", health.label(), format_percent(rate, 1)) }</p>
                            </div>
                            <div class="bg-yellow-50 rounded-lg p-4">
                                <h4 class="font-medium text-yellow-900 mb-2">{"Monthly Budget"}</h4>
                                <p class="text-yellow-700">{ budget_note }</p>
                            </div>
                        </div>
                    </div>
                </>
            }
        ) }
    }
}
