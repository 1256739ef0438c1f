use std::rc::Rc;

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;

use crate::aggregate::{
    aging_report, average_payment_terms, days_sales_outstanding, share, vendor_exposures,
    AgingBucket, ReceivablesKpis, RiskTier,
};
use crate::controller::ReceivablesSnapshot;
use crate::format::{format_money, format_percent};
use crate::views::shared::{page_shell, progress_bar, StatCard, StatIcon};

#[derive(Properties, PartialEq)]
pub struct ReceivablesAnalyticsProps {
    pub snapshot: Rc<ReceivablesSnapshot>,
}

fn aging_fill(bucket: AgingBucket) -> &'static str {
    match bucket {
        AgingBucket::Current => "bg-emerald-500",
        AgingBucket::Days1To30 => "bg-yellow-500",
        AgingBucket::Days31To60 => "bg-orange-500",
        AgingBucket::Days61To90 => "bg-red-500",
        AgingBucket::Over90 => "bg-red-800",
    }
}

fn risk_badge(risk: RiskTier) -> &'static str {
    match risk {
        RiskTier::Low => "px-2 py-1 rounded-full text-xs bg-green-100 text-green-800",
        RiskTier::Medium => "px-2 py-1 rounded-full text-xs bg-yellow-100 text-yellow-800",
        RiskTier::High => "px-2 py-1 rounded-full text-xs bg-red-100 text-red-800",
    }
}

#[function_component(ReceivablesAnalytics)]
pub fn receivables_analytics(props: &ReceivablesAnalyticsProps) -> Html {
    let snapshot = &props.snapshot;
    let now = Utc::now();
    let kpis = ReceivablesKpis::compute(&snapshot.vendors, &snapshot.invoices, now);
    let aging = aging_report(&snapshot.invoices, now);
    let aging_total = aging.total();
    let exposures = vendor_exposures(&snapshot.vendors, &snapshot.invoices);
    let dso = days_sales_outstanding(&snapshot.invoices)
        .round()
        .to_i64()
        .unwrap_or_default();
    let terms = average_payment_terms(&snapshot.vendors).round();
    let high_risk: Vec<_> = exposures.iter().filter(|e| e.risk == RiskTier::High).collect();
    let top_outstanding = exposures.first().map(|e| e.outstanding).unwrap_or_default();

    html! {
        { page_shell(
            "AR Analytics",
            html! {},
            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        <StatCard title="Total Outstanding" value={format_money(kpis.total_outstanding)} icon={StatIcon::Dollar} />
                        <StatCard title="Overdue Amount" value={format_money(kpis.overdue_amount)} hint={format!("{} invoices", kpis.overdue_count)} icon={StatIcon::Clock} />
                        <StatCard title="Days Sales Outstanding" value={format!("{} days", dso)} icon={StatIcon::Target} />
                        <StatCard title="Collected This Month" value={format_money(kpis.collected_this_month)} icon={StatIcon::TrendingUp} />
                    </div>

                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-4">{"Aging Report"}</h3>
                            <div class="space-y-3">
                                { for aging.iter().map(|(bucket, amount)| html! {
                                    <div class="flex flex-col gap-1 text-sm">
                                        <div class="flex items-center justify-between">
                                            <span class="text-foreground">{ bucket.label() }</span>
                                            <span class="text-muted-foreground">
                                                { format!("{} ({})", format_money(amount), format_percent(share(amount, aging_total), 1)) }
                                            </span>
                                        </div>
                                        { progress_bar(share(amount, aging_total), aging_fill(bucket)) }
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="bg-card rounded-[10px] p-6 border border-border">
                            <h3 class="font-bold text-foreground text-lg mb-4">{"Top Vendors by Outstanding"}</h3>
                            <div class="space-y-3">
                                { for exposures.iter().take(5).map(|exposure| html! {
                                    <div class="flex flex-col gap-1 text-sm">
                                        <div class="flex items-center justify-between">
                                            <span class="text-foreground">{ &exposure.vendor.name }</span>
                                            <span class="text-muted-foreground">{ format_money(exposure.outstanding) }</span>
                                        </div>
                                        { progress_bar(share(exposure.outstanding, top_outstanding), "bg-blue-500") }
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class="bg-card rounded-[10px] p-6 border border-border">
                        <h3 class="font-bold text-foreground text-lg mb-4">{"Collection Performance"}</h3>
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                            <div>
                                <p class="text-2xl font-bold text-blue-600">{ kpis.active_vendors }</p>
                                <p class="text-sm text-muted-foreground">{"Active Vendors"}</p>
                            </div>
                            <div>
                                <p class="text-2xl font-bold text-red-600">{ kpis.overdue_count }</p>
                                <p class="text-sm text-muted-foreground">{"Overdue Invoices"}</p>
                            </div>
                            <div>
                                <p class="text-2xl font-bold text-foreground">{ format!("{} days", terms) }</p>
                                <p class="text-sm text-muted-foreground">{"Avg Payment Terms"}</p>
                            </div>
                            <div>
                                <p class="text-2xl font-bold text-orange-600">{ format_percent(kpis.overdue_rate(), 0) }</p>
                                <p class="text-sm text-muted-foreground">{"Overdue Rate"}</p>
                            </div>
                        </div>
                    </div>

                    <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                        <div class="p-6 border-b border-border">
                            <h3 class="font-bold text-foreground text-lg">{"Vendor Risk"}</h3>
                        </div>
                        { if high_risk.is_empty() {
                            html! { <p class="p-6 text-sm text-muted-foreground">{"No vendors are close to their credit limit."}</p> }
                        } else { html! {} } }
                        <table class="w-full text-left border-collapse text-sm">
                            <thead>
                                <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                                    <th class="px-4 py-3 font-bold">{"Vendor"}</th>
                                    <th class="px-4 py-3 font-bold">{"Invoices"}</th>
                                    <th class="px-4 py-3 font-bold">{"Outstanding"}</th>
                                    <th class="px-4 py-3 font-bold">{"Overdue"}</th>
                                    <th class="px-4 py-3 font-bold">{"Credit Limit"}</th>
                                    <th class="px-4 py-3 font-bold text-right">{"Risk"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                { for exposures.iter().map(|exposure| html! {
                                    <tr key={exposure.vendor.id.clone()}>
                                        <td class="px-4 py-3 text-foreground">{ &exposure.vendor.name }</td>
                                        <td class="px-4 py-3">{ exposure.total_invoices }</td>
                                        <td class="px-4 py-3">{ format_money(exposure.outstanding) }</td>
                                        <td class="px-4 py-3 text-red-600">{ format_money(exposure.overdue) }</td>
                                        <td class="px-4 py-3">{ format_money(exposure.vendor.credit_limit) }</td>
                                        <td class="px-4 py-3 text-right"><span class={risk_badge(exposure.risk)}>{ exposure.risk.label() }</span></td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </>
            }
        ) }
    }
}
