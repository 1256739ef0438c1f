use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::HttpBackend;
use crate::chat::{answer, ChatTranscript};
use crate::config::{AppSettings, DashboardKind};
use crate::models::ChatRole;
use crate::views::shared::{icon_close, icon_send};

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub dashboard: DashboardKind,
    pub on_close: Callback<()>,
}

/// Floating assistant panel. The transcript lives only as long as the widget.
#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let dashboard = props.dashboard;
    let transcript = use_state(|| ChatTranscript::new(dashboard));
    let input = use_state(String::new);
    let waiting = use_state(|| false);
    let settings = use_context::<UseStateHandle<AppSettings>>();

    let api = settings.map(|s| s.api_config()).unwrap_or_default();
    let base_url = match dashboard {
        DashboardKind::Banking => api.banking,
        DashboardKind::Receivables => api.receivables,
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let field: HtmlInputElement = e.target_unchecked_into();
            input.set(field.value());
        })
    };

    let on_send = {
        let transcript = transcript.clone();
        let input = input.clone();
        let waiting = waiting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *waiting {
                return;
            }
            let Some(next) = transcript.with_user(&input) else {
                return;
            };
            transcript.set(next.clone());
            input.set(String::new());
            waiting.set(true);

            let transcript = transcript.clone();
            let waiting = waiting.clone();
            let backend = HttpBackend::new(base_url.clone());
            spawn_local(async move {
                let reply = answer(&backend, &next).await;
                transcript.set(next.with_reply(reply));
                waiting.set(false);
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let title = match dashboard {
        DashboardKind::Banking => "Banking Assistant",
        DashboardKind::Receivables => "AR Assistant",
    };

    html! {
        <div class="fixed bottom-24 right-6 w-96 max-w-[calc(100vw-3rem)] h-[32rem] bg-card border border-border rounded-2xl shadow-2xl flex flex-col z-50">
            <div class="flex items-center justify-between px-4 py-3 border-b border-border bg-primary text-primary-foreground rounded-t-2xl">
                <span class="font-bold text-sm">{ title }</span>
                <button type="button" onclick={on_close} aria-label="Close chat" class="opacity-80 hover:opacity-100">{ icon_close() }</button>
            </div>
            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                { for transcript.messages().iter().enumerate().map(|(idx, message)| {
                    let (row, bubble) = match message.role {
                        ChatRole::User => ("flex justify-end", "max-w-[80%] rounded-2xl px-4 py-2 text-sm bg-primary text-primary-foreground whitespace-pre-wrap"),
                        ChatRole::Assistant => ("flex justify-start", "max-w-[80%] rounded-2xl px-4 py-2 text-sm bg-secondary text-foreground whitespace-pre-wrap"),
                    };
                    html! {
                        <div key={idx} class={row}>
                            <div class={bubble}>{ &message.content }</div>
                        </div>
                    }
                }) }
                { if *waiting {
                    html! {
                        <div class="flex justify-start">
                            <div class="rounded-2xl px-4 py-2 bg-secondary text-muted-foreground text-sm animate-pulse">{"Typing..."}</div>
                        </div>
                    }
                } else { html! {} } }
            </div>
            <form onsubmit={on_send} class="flex items-center gap-2 p-3 border-t border-border">
                <input
                    type="text"
                    placeholder="Ask me anything..."
                    value={(*input).clone()}
                    oninput={on_input}
                    class="flex-1 px-3 py-2 bg-input border border-input rounded-lg text-sm text-foreground focus:outline-none focus:ring-2 focus:ring-primary"
                />
                <button type="submit" disabled={*waiting || input.trim().is_empty()} class="p-2 bg-primary text-primary-foreground rounded-lg disabled:opacity-50" aria-label="Send">
                    { icon_send() }
                </button>
            </form>
        </div>
    }
}
