mod analytics;
mod dashboard;
mod invoices;
mod payments;

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::HttpBackend;
use crate::config::{AppSettings, ApiConfig};
use crate::controller::{
    load_receivables, run_add_vendor, run_payment, DashboardAction, DashboardState, Phase,
    ReceivablesSnapshot,
};
use crate::forms::PaymentPlan;
use crate::models::NewVendor;
use crate::views::shared::{error_panel, loading_panel, Banner};
use crate::views::Page;

use analytics::ReceivablesAnalytics;
use dashboard::ReceivablesDashboard;
use invoices::InvoicesView;
use payments::PaymentsView;

#[derive(Properties, PartialEq)]
pub struct ReceivablesAppProps {
    pub page: Page,
}

#[function_component(ReceivablesApp)]
pub fn receivables_app(props: &ReceivablesAppProps) -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let base_url = settings
        .as_ref()
        .map(|s| s.api_config().receivables)
        .unwrap_or_else(|| ApiConfig::default().receivables);
    let state = use_reducer(DashboardState::<ReceivablesSnapshot>::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |base_url: &String| {
                let backend = HttpBackend::new(base_url.clone());
                state.dispatch(DashboardAction::LoadStarted);
                spawn_local(async move {
                    let action = load_receivables(&backend).await;
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

    let on_payment = {
        let state = state.clone();
        let base_url = base_url.clone();
        Callback::from(move |plan: PaymentPlan| {
            let state = state.clone();
            let backend = HttpBackend::new(base_url.clone());
            state.dispatch(DashboardAction::MutationStarted);
            spawn_local(async move {
                let action = run_payment(&backend, plan).await;
                state.dispatch(action);
            });
        })
    };

    let on_add_vendor = {
        let state = state.clone();
        let base_url = base_url.clone();
        Callback::from(move |vendor: NewVendor| {
            let state = state.clone();
            let backend = HttpBackend::new(base_url.clone());
            state.dispatch(DashboardAction::MutationStarted);
            spawn_local(async move {
                let action = run_add_vendor(&backend, vendor).await;
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

    let snapshot: Rc<ReceivablesSnapshot> = match (state.phase(), state.snapshot.clone()) {
        (Phase::Ready, Some(snapshot)) => snapshot,
        (Phase::Failed, _) => return error_panel(state.error.as_deref().unwrap_or_default()),
        _ => return loading_panel("Loading Accounts Receivable Data..."),
    };

    let busy = state.busy;
    let receipt = state.receipt.clone();
    let content = match props.page {
        Page::Dashboard => html! {
            <ReceivablesDashboard
                snapshot={snapshot}
                busy={busy}
                receipt={receipt}
                on_add_vendor={on_add_vendor}
                on_dismiss_receipt={on_dismiss_receipt}
            />
        },
        Page::Records => html! { <InvoicesView snapshot={snapshot} /> },
        Page::Payments => html! {
            <PaymentsView
                snapshot={snapshot}
                busy={busy}
                receipt={receipt}
                on_submit={on_payment}
                on_dismiss_receipt={on_dismiss_receipt}
            />
        },
        Page::Analytics => html! { <ReceivablesAnalytics snapshot={snapshot} /> },
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
