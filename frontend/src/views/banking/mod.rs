mod analytics;
mod dashboard;
mod transactions;
mod transfer;

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpBackend;
use crate::config::{AppSettings, ApiConfig};
use crate::controller::{
    load_banking, run_open_account, run_transfer, BankingSnapshot, DashboardAction,
    DashboardState, Phase,
};
use crate::forms::TransferPlan;
use crate::models::NewAccount;
use crate::views::shared::{error_panel, loading_panel, Banner};
use crate::views::Page;

use analytics::BankingAnalytics;
use dashboard::BankingDashboard;
use transactions::TransactionsView;
use transfer::TransferView;

#[derive(Properties, PartialEq)]
pub struct BankingAppProps {
    pub page: Page,
}

#[function_component(BankingApp)]
pub fn banking_app(props: &BankingAppProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let base_url = settings
        .as_ref()
        .map(|s| s.api_config().banking)
        .unwrap_or_else(|| ApiConfig::default().banking);
    let state = use_reducer(DashboardState::<BankingSnapshot>::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |base_url: &String| {
                let backend = HttpBackend::new(base_url.clone());
                state.dispatch(DashboardAction::LoadStarted);
                spawn_local(async move {
                    let action = load_banking(&backend).await;
                    state.dispatch(action);
                });
                || ()
            },
            base_url.clone(),
        );
    }

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                state.dispatch(DashboardAction::DismissReceipt);
                || ()
            },
            props.page,
        );
    }

    let on_transfer = {
        let state = state.clone();
        let base_url = base_url.clone();
        Callback::from(move |plan: TransferPlan| {
            let state = state.clone();
            let backend = HttpBackend::new(base_url.clone());
            state.dispatch(DashboardAction::MutationStarted);
            spawn_local(async move {
                let action = run_transfer(&backend, plan).await;
                state.dispatch(action);
            });
        })
    };

    let on_open_account = {
        let state = state.clone();
        let base_url = base_url.clone();
        Callback::from(move |account: NewAccount| {
            let state = state.clone();
            let backend = HttpBackend::new(base_url.clone());
            state.dispatch(DashboardAction::MutationStarted);
            spawn_local(async move {
                let action = run_open_account(&backend, account).await;
                state.dispatch(action);
            });
        })
    };

    let on_dismiss_receipt = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(DashboardAction::DismissReceipt))
    };
    let on_dismiss_error = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(DashboardAction::DismissError))
    };

    let snapshot: Rc<BankingSnapshot> = match (state.phase(), state.snapshot.clone()) {
        (Phase::Ready, Some(snapshot)) => snapshot,
        (Phase::Failed, _) => return error_panel(state.error.as_deref().unwrap_or_default()),
        _ => return loading_panel("Loading Banking Data..."),
    };

    let busy = state.busy;
    let receipt = state.receipt.clone();
    let content = match props.page {
        Page::Dashboard => html! {
            <BankingDashboard
                snapshot={snapshot}
                busy={busy}
                receipt={receipt}
                on_open_account={on_open_account}
                on_dismiss_receipt={on_dismiss_receipt}
            />
        },
        Page::Records => html! { <TransactionsView snapshot={snapshot} /> },
        Page::Payments => html! {
            <TransferView
                snapshot={snapshot}
                busy={busy}
                receipt={receipt}
                on_submit={on_transfer}
                on_dismiss_receipt={on_dismiss_receipt}
            />
        },
        Page::Analytics => html! { <BankingAnalytics snapshot={snapshot} /> },
        Page::Sessions | Page::Settings => html! {},
    };

    html! {
        <div class="space-y-4">
            { match &state.error {
                Some(message) => html! {
                    <div class="px-6 pt-6">
                        <Banner message={message.clone()} on_dismiss={on_dismiss_error} />
                    </div>
                },
                None => html! {},
            } }
            { content }
        </div>
    }
}
