mod aggregate;
mod api;
mod chat;
mod config;
mod controller;
mod error;
mod filters;
mod format;
mod forms;
mod models;
mod session_admin;
mod views;

use yew::prelude::*;

use config::{load_settings, save_settings, AppSettings, DashboardKind};
use views::banking::BankingApp;
use views::chat::ChatWidget;
use views::receivables::ReceivablesApp;
use views::sessions::SessionsView;
use views::settings::SettingsView;
use views::shared::{
    icon_arrow_right, icon_bar_chart, icon_close, icon_credit_card, icon_history,
    icon_layout_grid, icon_list, icon_message, icon_settings,
};
use views::Page;

#[derive(Properties, PartialEq)]
struct LayoutProps {
    children: Children,
    active_page: Page,
    dashboard: DashboardKind,
    on_select: Callback<Page>,
}

#[function_component(Layout)]
fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="flex h-screen bg-background">
            <div class="hidden md:flex">
                <Sidebar active_page={props.active_page} dashboard={props.dashboard} on_select={props.on_select.clone()} />
            </div>

            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto">
                    { for props.children.iter() }
                </main>
            </div>
        </div>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let dashboard = settings.as_ref().map(|s| s.dashboard).unwrap_or_default();

    let on_switch = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let Some(kind) = DashboardKind::from_key(&input.value()) else {
                    return;
                };
                let next = AppSettings {
                    dashboard: kind,
                    ..(**settings).clone()
                };
                tracing::info!(dashboard = kind.key(), "switching dashboard");
                save_settings(&next);
                settings.set(next);
            }
        })
    };

    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <span class="text-[#173E63] font-bold">{ dashboard.label() }</span>
            <select onchange={on_switch} aria-label="Dashboard" class="px-3 py-2 bg-white border border-border rounded-lg text-sm text-[#173E63]">
                { for [DashboardKind::Banking, DashboardKind::Receivables].into_iter().map(|kind| html! {
                    <option value={kind.key()} selected={kind == dashboard}>{ kind.label() }</option>
                }) }
            </select>
        </header>
    }
}

fn page_icon(page: Page, dashboard: DashboardKind) -> Html {
    match (page, dashboard) {
        (Page::Dashboard, _) => icon_layout_grid(),
        (Page::Records, _) => icon_list(),
        (Page::Payments, DashboardKind::Banking) => icon_arrow_right(),
        (Page::Payments, DashboardKind::Receivables) => icon_credit_card(),
        (Page::Analytics, _) => icon_bar_chart(),
        (Page::Sessions, _) => icon_history(),
        (Page::Settings, _) => icon_settings(),
    }
}

#[derive(Properties, PartialEq)]
struct SidebarProps {
    active_page: Page,
    dashboard: DashboardKind,
    on_select: Callback<Page>,
}

#[function_component(Sidebar)]
fn sidebar(props: &SidebarProps) -> Html {
    let brand = match props.dashboard {
        DashboardKind::Banking => "Zava",
        DashboardKind::Receivables => "Zava AR",
    };

    html! {
        <div class="w-[220px] h-screen bg-[#D8E1E8] p-4 flex flex-col">
            <div class="flex items-center gap-3 px-2 mb-8">
                <div class="w-12 h-12 bg-[#173E63] rounded-full flex items-center justify-center text-white font-black text-xl">
                    {"Z"}
                </div>
                <span class="text-[#173E63] text-2xl font-black tracking-tight">{ brand }</span>
            </div>

            <div class="flex-1 bg-[#173E63] rounded-[24px] flex flex-col py-6 px-3 shadow-lg">
                <nav class="flex-1 space-y-2">
                    { for Page::ALL.into_iter().map(|page| {
                        let class_name = if page == props.active_page {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium bg-[#B2CBDE] text-[#173E63] w-full"
                        } else {
                            "flex items-center gap-3 px-4 py-3 rounded-xl transition-all text-[13px] font-medium text-slate-300 hover:bg-white/5 hover:text-white w-full"
                        };
                        let on_select = props.on_select.clone();

                        html! {
                            <button type="button" class={class_name} onclick={Callback::from(move |_| on_select.emit(page))}>
                                <span class="shrink-0">{ page_icon(page, props.dashboard) }</span>
                                <span class="truncate whitespace-nowrap text-left">{ page.label(props.dashboard) }</span>
                            </button>
                        }
                    }) }
                </nav>
            </div>
        </div>
    }
}

#[function_component(App)]
fn app() -> Html {
    let active_page = use_state(|| Page::Dashboard);
    let settings = use_state(load_settings);
    let chat_open = use_state(|| false);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };
    let on_toggle_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_| chat_open.set(!*chat_open))
    };
    let on_close_chat = {
        let chat_open = chat_open.clone();
        Callback::from(move |_| chat_open.set(false))
    };

    let dashboard = settings.dashboard;
    let page = *active_page;
    let content = if page.uses_snapshot() {
        match dashboard {
            DashboardKind::Banking => html! { <BankingApp page={page} /> },
            DashboardKind::Receivables => html! { <ReceivablesApp page={page} /> },
        }
    } else if page == Page::Sessions {
        html! { <SessionsView /> }
    } else {
        html! { <SettingsView /> }
    };

    html! {
        <ContextProvider<UseStateHandle<AppSettings>> context={settings}>
            <Layout active_page={page} dashboard={dashboard} on_select={on_select}>
                { content }
            </Layout>

            { if *chat_open {
                html! { <ChatWidget key={dashboard.key()} dashboard={dashboard} on_close={on_close_chat} /> }
            } else { html! {} } }

            <button
                type="button"
                onclick={on_toggle_chat}
                aria-label="Toggle assistant"
                class="fixed bottom-6 right-6 w-14 h-14 rounded-full bg-[#173E63] text-white shadow-lg flex items-center justify-center hover:opacity-90 z-50"
            >
                { if *chat_open { icon_close() } else { icon_message() } }
            </button>
        </ContextProvider<UseStateHandle<AppSettings>>>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
