use yew::prelude::*;

use crate::config::{save_settings, AppSettings, DashboardKind};
use crate::views::shared::{bind_text, page_shell};

#[derive(Clone, Default, PartialEq)]
struct UrlDraft {
    banking: String,
    receivables: String,
    analytics: String,
}

impl UrlDraft {
    fn from_settings(settings: &AppSettings) -> Self {
        Self {
            banking: settings.banking_api.clone().unwrap_or_default(),
            receivables: settings.receivables_api.clone().unwrap_or_default(),
            analytics: settings.analytics_api.clone().unwrap_or_default(),
        }
    }

    fn apply(&self, settings: &AppSettings) -> AppSettings {
        AppSettings {
            dashboard: settings.dashboard,
            banking_api: AppSettings::override_from(&self.banking),
            receivables_api: AppSettings::override_from(&self.receivables),
            analytics_api: AppSettings::override_from(&self.analytics),
        }
    }
}

#[function_component(SettingsView)]
pub fn settings_view() -> Html {
    let settings = use_context::<UseStateHandle<AppSettings>>();
    let current = settings.as_deref().cloned().unwrap_or_default();
    let draft = use_state(|| UrlDraft::from_settings(&current));
    let saved = use_state(|| false);

    let on_dashboard_change = {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            if let Some(settings) = settings.as_ref() {
                let input: web_sys::HtmlSelectElement = e.target_unchecked_into();
                let next = AppSettings {
                    dashboard: DashboardKind::from_key(&input.value()).unwrap_or_default(),
                    ..(**settings).clone()
                };
                save_settings(&next);
                settings.set(next);
            }
        })
    };

    let on_save = {
        let settings = settings.clone();
        let draft = draft.clone();
        let saved = saved.clone();
        Callback::from(move |_| {
            if let Some(settings) = settings.as_ref() {
                let next = draft.apply(settings);
                save_settings(&next);
                tracing::info!(?next, "settings saved");
                draft.set(UrlDraft::from_settings(&next));
                settings.set(next);
                saved.set(true);
            }
        })
    };

    let on_reset = {
        let draft = draft.clone();
        let saved = saved.clone();
        Callback::from(move |_| {
            draft.set(UrlDraft::default());
            saved.set(false);
        })
    };

    let resolved = current.api_config();
    let field_class = "w-full px-4 py-2 bg-input border border-input rounded-lg text-foreground focus:outline-none focus:ring-2 focus:ring-primary";

    html! {
        { page_shell(
            "Settings",
            html! {},
            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div class="bg-card rounded-lg p-6 border border-border">
                        <h2 class="text-xl font-bold text-foreground mb-6">{"Dashboard"}</h2>
                        <label class="block text-sm font-medium text-foreground mb-2">{"Line of business"}</label>
                        <select onchange={on_dashboard_change} class={field_class}>
                            { for [DashboardKind::Banking, DashboardKind::Receivables].into_iter().map(|kind| html! {
                                <option value={kind.key()} selected={current.dashboard == kind}>{ kind.label() }</option>
                            }) }
                        </select>
                        <p class="text-xs text-muted-foreground mt-2">{"Switching reloads the dashboard data and restarts the assistant chat."}</p>
                    </div>

                    <div class="bg-card rounded-lg p-6 border border-border">
                        <h2 class="text-xl font-bold text-foreground mb-6">{"Service URLs"}</h2>
                        <div class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Banking API"}</label>
                                <input type="url" placeholder={resolved.banking.clone()} value={draft.banking.clone()} oninput={bind_text(&draft, |d, v| d.banking = v)} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Receivables API"}</label>
                                <input type="url" placeholder={resolved.receivables.clone()} value={draft.receivables.clone()} oninput={bind_text(&draft, |d, v| d.receivables = v)} class={field_class} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-foreground mb-2">{"Analytics API"}</label>
                                <input type="url" placeholder={resolved.analytics.clone()} value={draft.analytics.clone()} oninput={bind_text(&draft, |d, v| d.analytics = v)} class={field_class} />
                            </div>
                            <p class="text-xs text-muted-foreground">{"Leave a field blank to use the built-in address."}</p>
                            <div class="flex items-center gap-3">
                                <button onclick={on_save} class="px-4 py-2 bg-primary text-primary-foreground rounded-lg font-bold text-sm">{"Save"}</button>
                                <button onclick={on_reset} class="px-4 py-2 border border-border rounded-lg text-sm">{"Clear overrides"}</button>
                                { if *saved { html! { <span class="text-sm text-green-700">{"Saved"}</span> } } else { html! {} } }
                            </div>
                        </div>
                    </div>
                </div>
            }
        ) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_clear_overrides_and_keep_the_dashboard() {
        let settings = AppSettings {
            dashboard: DashboardKind::Receivables,
            banking_api: Some("http://old/api".into()),
            ..AppSettings::default()
        };
        let draft = UrlDraft {
            banking: "  ".into(),
            receivables: "http://ar.local/api/".into(),
            analytics: String::new(),
        };
        let next = draft.apply(&settings);
        assert_eq!(next.dashboard, DashboardKind::Receivables);
        assert_eq!(next.banking_api, None);
        assert_eq!(next.receivables_api.as_deref(), Some("http://ar.local/api"));
        assert_eq!(UrlDraft::from_settings(&next).receivables, "http://ar.local/api");
    }
}
