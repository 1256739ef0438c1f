use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAnchorElement;
use yew::prelude::*;

use crate::api::HttpBackend;
use crate::config::{AppSettings, ApiConfig};
use crate::error::ApiError;
use crate::models::short_datetime;
use crate::session_admin::{
    clear_history, delete_session, describe_failure, download_href, export_session,
    load_directory, ExportSummary, SessionDirectory, CONFIRM_CLEAR_HISTORY,
    CONFIRM_DELETE_SESSION,
};
use crate::views::shared::{
    icon_download, icon_refresh, icon_trash, loading_panel, page_shell, Banner,
};

#[derive(Clone, Copy, PartialEq)]
enum Connection {
    Checking,
    Online,
    Offline,
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn save_file(file_name: &str, document: &str) {
    let anchor = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.create_element("a").ok())
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok());
    match anchor {
        Some(anchor) => {
            anchor.set_href(&download_href(document));
            anchor.set_download(file_name);
            anchor.click();
        }
        None => tracing::warn!(file_name, "could not create download link"),
    }
}

#[function_component(SessionsView)]
pub fn sessions_view() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let base_url = settings
        .as_ref()
        .map(|s| s.api_config().analytics)
        .unwrap_or_else(|| ApiConfig::default().analytics);

    let directory = use_state(|| None::<SessionDirectory>);
    let connection = use_state(|| Connection::Checking);
    let error = use_state(|| None::<String>);
    let last_export = use_state(|| None::<(String, ExportSummary)>);
    let busy = use_state(|| false);
    let reload_tick = use_state(|| 0u32);

    // Applies the outcome of any call that returns a fresh directory.
    let settle = {
        let directory = directory.clone();
        let connection = connection.clone();
        let error = error.clone();
        let busy = busy.clone();
        Callback::from(move |(action, outcome): (&'static str, Result<SessionDirectory, ApiError>)| {
            busy.set(false);
            match outcome {
                Ok(next) => {
                    directory.set(Some(next));
                    connection.set(Connection::Online);
                    error.set(None);
                }
                Err(err) => {
                    if err.is_connectivity() {
                        connection.set(Connection::Offline);
                    }
                    error.set(Some(describe_failure(action, &err)));
                }
            }
        })
    };

    {
        let settle = settle.clone();
        let connection = connection.clone();
        use_effect_with_deps(
            move |(base_url, _): &(String, u32)| {
                let backend = HttpBackend::new(base_url.clone());
                connection.set(Connection::Checking);
                spawn_local(async move {
                    let outcome = load_directory(&backend).await;
                    settle.emit(("load chat sessions", outcome));
                });
                || ()
            },
            (base_url.clone(), *reload_tick),
        );
    }

    let on_refresh = {
        let reload_tick = reload_tick.clone();
        Callback::from(move |_| reload_tick.set(*reload_tick + 1))
    };

    let on_clear_all = {
        let settle = settle.clone();
        let busy = busy.clone();
        let directory = directory.clone();
        let base_url = base_url.clone();
        Callback::from(move |_| {
            if !confirm(CONFIRM_CLEAR_HISTORY) {
                return;
            }
            busy.set(true);
            let settle = settle.clone();
            let current = (*directory).clone().unwrap_or_default();
            let backend = HttpBackend::new(base_url.clone());
            spawn_local(async move {
                let outcome = clear_history(&backend, &current).await;
                settle.emit(("clear chat history", outcome));
            });
        })
    };

    let on_delete = {
        let settle = settle.clone();
        let busy = busy.clone();
        let directory = directory.clone();
        let base_url = base_url.clone();
        Callback::from(move |session_id: String| {
            if !confirm(CONFIRM_DELETE_SESSION) {
                return;
            }
            busy.set(true);
            let settle = settle.clone();
            let current = (*directory).clone().unwrap_or_default();
            let backend = HttpBackend::new(base_url.clone());
            spawn_local(async move {
                let outcome = delete_session(&backend, &current, &session_id).await;
                settle.emit(("delete session", outcome));
            });
        })
    };

    let on_export = {
        let error = error.clone();
        let last_export = last_export.clone();
        let directory = directory.clone();
        let base_url = base_url.clone();
        Callback::from(move |session_id: String| {
            let Some(session) = directory
                .as_ref()
                .and_then(|d| d.sessions.iter().find(|s| s.session_id == session_id))
                .cloned()
            else {
                return;
            };
            let error = error.clone();
            let last_export = last_export.clone();
            let backend = HttpBackend::new(base_url.clone());
            spawn_local(async move {
                match export_session(&backend, &session).await {
                    Ok(exported) => {
                        save_file(&exported.file_name, &exported.document);
                        last_export.set(Some((exported.file_name, exported.summary)));
                    }
                    Err(err) => error.set(Some(describe_failure("export session", &err))),
                }
            });
        })
    };

    let on_dismiss_error = {
        let error = error.clone();
        Callback::from(move |_| error.set(None))
    };
    let on_dismiss_export = {
        let last_export = last_export.clone();
        Callback::from(move |_| last_export.set(None))
    };

    let (dot, status) = match *connection {
        Connection::Checking => ("w-2 h-2 rounded-full bg-yellow-400", "Checking..."),
        Connection::Online => ("w-2 h-2 rounded-full bg-green-500", "Connected"),
        Connection::Offline => ("w-2 h-2 rounded-full bg-red-500", "Disconnected"),
    };

    let actions = html! {
        <div class="flex items-center gap-3">
            <span class="flex items-center gap-2 text-sm text-muted-foreground">
                <span class={dot}></span>{ status }
            </span>
            <button onclick={on_refresh} class="flex items-center gap-2 px-3 py-2 rounded-lg border border-border text-sm hover:bg-muted/40">
                { icon_refresh() }{"Refresh"}
            </button>
            <button onclick={on_clear_all} disabled={*busy} class="flex items-center gap-2 px-3 py-2 rounded-lg bg-red-600 text-white text-sm disabled:opacity-50">
                { icon_trash() }{"Clear All"}
            </button>
        </div>
    };

    let body = match &*directory {
        None if error.is_none() => loading_panel("Loading chat sessions..."),
        None => html! {},
        Some(directory) => html! {
            <>
                <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
                    <div class="p-6 border-b border-border">
                        <h3 class="font-bold text-foreground text-lg">{ format!("Sessions ({})", directory.sessions.len()) }</h3>
                    </div>
                    { if directory.sessions.is_empty() {
                        html! { <p class="p-8 text-center text-muted-foreground">{"No chat sessions recorded yet."}</p> }
                    } else {
                        html! {
                            <div class="divide-y divide-border">
                                { for directory.sessions.iter().map(|session| {
                                    let id = session.session_id.clone();
                                    let export_id = id.clone();
                                    let on_export = on_export.clone();
                                    let on_delete = on_delete.clone();
                                    html! {
                                        <div key={id.clone()} class="p-6 flex items-center justify-between">
                                            <div>
                                                <p class="font-semibold text-foreground">{ session.display_title() }</p>
                                                <p class="text-xs text-muted-foreground">{ format!("{} • {}", session.user_id, id) }</p>
                                                { match session.updated_at.as_deref().or(session.created_at.as_deref()) {
                                                    Some(ts) => html! { <p class="text-xs text-muted-foreground">{ format!("Last active {}", short_datetime(ts)) }</p> },
                                                    None => html! {},
                                                } }
                                            </div>
                                            <div class="flex items-center gap-2">
                                                <button onclick={Callback::from(move |_| on_export.emit(export_id.clone()))} class="p-2 rounded-lg border border-border hover:bg-muted/40" aria-label="Export session">
                                                    { icon_download() }
                                                </button>
                                                <button onclick={Callback::from(move |_| on_delete.emit(id.clone()))} disabled={*busy} class="p-2 rounded-lg border border-red-200 text-red-600 hover:bg-red-50 disabled:opacity-50" aria-label="Delete session">
                                                    { icon_trash() }
                                                </button>
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        }
                    } }
                </div>

                <div class="bg-card rounded-[10px] p-6 border border-border">
                    <h3 class="font-bold text-foreground text-lg mb-4">{"Registered Tools"}</h3>
                    { match &directory.tools_error {
                        Some(message) => html! { <p class="text-sm text-yellow-700 mb-3">{ message.clone() }</p> },
                        None => html! {},
                    } }
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                        { for directory.tools.iter().map(|tool| html! {
                            <div key={tool.id.clone()} class="p-4 rounded-lg border border-border">
                                <div class="flex items-center justify-between">
                                    <span class="font-medium text-foreground">{ &tool.name }</span>
                                    <span class={if tool.is_active { "text-xs text-green-700" } else { "text-xs text-muted-foreground" }}>
                                        { if tool.is_active { "active" } else { "inactive" } }
                                    </span>
                                </div>
                                <p class="text-sm text-muted-foreground">{ tool.description.clone().unwrap_or_default() }</p>
                                <p class="text-xs text-muted-foreground">{ format!("v{} • {}¢ per call", tool.version, tool.cost_per_call_cents) }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </>
        },
    };

    html! {
        { page_shell(
            "Chat Sessions",
            actions,
            html! {
                <>
                    { match &*error {
                        Some(message) => html! { <Banner message={message.clone()} on_dismiss={on_dismiss_error} /> },
                        None => html! {},
                    } }
                    { match &*last_export {
                        Some((file_name, summary)) => html! {
                            <Banner
                                success={true}
                                message={format!(
                                    "Saved {}: {} user and {} assistant messages, {} tool calls, {} tool errors, {} failed tool runs.",
                                    file_name,
                                    summary.user_messages,
                                    summary.assistant_messages,
                                    summary.tool_calls,
                                    summary.tool_errors,
                                    summary.failed_tool_runs,
                                )}
                                on_dismiss={on_dismiss_export}
                            />
                        },
                        None => html! {},
                    } }
                    { body }
                </>
            }
        ) }
    }
}
