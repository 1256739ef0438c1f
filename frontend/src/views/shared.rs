use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

pub fn loading_panel(label: &'static str) -> Html {
    html! {
        <div class="text-center p-8 text-muted-foreground">{ label }</div>
    }
}

pub fn error_panel(message: &str) -> Html {
    html! {
        <div class="text-center p-8 text-red-600 bg-red-50 rounded-lg">{ message.to_string() }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BannerProps {
    pub message: String,
    #[prop_or_default]
    pub success: bool,
    pub on_dismiss: Callback<()>,
}

#[function_component(Banner)]
pub fn banner(props: &BannerProps) -> Html {
    let class_name = if props.success {
        "flex items-start justify-between gap-4 rounded-lg border border-green-200 bg-green-50 px-4 py-3 text-sm text-green-800"
    } else {
        "flex items-start justify-between gap-4 rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
    };
    let on_dismiss = props.on_dismiss.clone();

    html! {
        <div class={class_name} role="status">
            <div class="flex items-center gap-2">
                { if props.success { icon_check() } else { icon_alert() } }
                <span>{ props.message.clone() }</span>
            </div>
            <button type="button" class="font-bold opacity-70 hover:opacity-100" aria-label="Dismiss" onclick={Callback::from(move |_| on_dismiss.emit(()))}>
                { "×" }
            </button>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum StatIcon {
    Dollar,
    TrendingUp,
    TrendingDown,
    Shield,
    Users,
    Clock,
    Check,
    Target,
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: &'static str,
    pub value: String,
    #[prop_or_default]
    pub hint: Option<String>,
    pub icon: StatIcon,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-card p-6 rounded-[10px] shadow-sm border border-border flex justify-between items-start">
            <div>
                <p class="text-muted-foreground text-[10px] font-bold mb-1 tracking-widest uppercase">{ props.title }</p>
                <h3 class="text-2xl font-bold text-[#1D617A] tracking-tight">{ props.value.clone() }</h3>
                { match &props.hint {
                    Some(hint) => html! { <p class="text-xs text-muted-foreground mt-1">{ hint.clone() }</p> },
                    None => html! {},
                } }
            </div>
            <div class="p-3 bg-[#eef4f9] rounded-[10px]">
                {
                    match props.icon {
                        StatIcon::Dollar => icon_dollar(),
                        StatIcon::TrendingUp => icon_trending_up(),
                        StatIcon::TrendingDown => icon_trending_down(),
                        StatIcon::Shield => icon_shield(),
                        StatIcon::Users => icon_users(),
                        StatIcon::Clock => icon_clock(),
                        StatIcon::Check => icon_check(),
                        StatIcon::Target => icon_target(),
                    }
                }
            </div>
        </div>
    }
}

pub fn progress_bar(percent: f64, fill_class: &'static str) -> Html {
    let width = percent.clamp(0.0, 100.0);
    html! {
        <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
            <div class={classes!("h-full", fill_class)} style={format!("width: {:.1}%", width)}></div>
        </div>
    }
}

pub fn bind_text<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    apply: fn(&mut T, String),
) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
            area.value()
        } else {
            return;
        };
        let mut next = (*state).clone();
        apply(&mut next, value);
        state.set(next);
    })
}

pub fn bind_select<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    apply: fn(&mut T, String),
) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, select.value());
        state.set(next);
    })
}

pub fn bind_checkbox<T: Clone + 'static>(
    state: &UseStateHandle<T>,
    apply: fn(&mut T, bool),
) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*state).clone();
        apply(&mut next, input.checked());
        state.set(next);
    })
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_layout_grid() -> Html {
    icon_base("M3 3h8v8H3zM13 3h8v8h-8zM3 13h8v8H3zM13 13h8v8h-8z")
}
pub fn icon_list() -> Html {
    icon_base("M8 6h13M8 12h13M8 18h13M3 6h.01M3 12h.01M3 18h.01")
}
pub fn icon_arrow_right() -> Html {
    icon_base("M5 12h14M12 5l7 7-7 7")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
pub fn icon_history() -> Html {
    icon_base("M3 12a9 9 0 109-9 9.75 9.75 0 00-6.74 2.74L3 8M3 3v5h5M12 7v5l4 2")
}
pub fn icon_settings() -> Html {
    icon_base("M12 1v3M12 20v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M1 12h3M20 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1")
}
pub fn icon_credit_card() -> Html {
    icon_base("M3 7h18v10H3zM3 11h18")
}
pub fn icon_piggy_bank() -> Html {
    icon_base("M19 10c0-3.3-3.1-6-7-6s-7 2.7-7 6c0 1.9 1 3.6 2.6 4.7L8 19h3v-2h2v2h3l.4-4.3C18 13.6 19 11.9 19 10zM16 9h.01")
}
pub fn icon_dollar() -> Html {
    icon_base("M12 1v22M17 5H9.5a3.5 3.5 0 000 7h5a3.5 3.5 0 010 7H6")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_trending_down() -> Html {
    icon_base("M3 7l6 6 4-4 7 7")
}
pub fn icon_shield() -> Html {
    icon_base("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")
}
pub fn icon_users() -> Html {
    icon_base("M17 21v-2a4 4 0 00-4-4H5a4 4 0 00-4 4v2M9 11a4 4 0 100-8 4 4 0 000 8zM23 21v-2a4 4 0 00-3-3.87")
}
pub fn icon_clock() -> Html {
    icon_base("M12 22a10 10 0 100-20 10 10 0 000 20zM12 6v6l4 2")
}
pub fn icon_check() -> Html {
    icon_base("M20 6L9 17l-5-5")
}
pub fn icon_alert() -> Html {
    icon_base("M12 22a10 10 0 100-20 10 10 0 000 20zM12 8v4M12 16h.01")
}
pub fn icon_target() -> Html {
    icon_base("M12 12m-9 0a9 9 0 1018 0 9 9 0 10-18 0")
}
pub fn icon_file() -> Html {
    icon_base("M14 2H6a2 2 0 00-2 2v16a2 2 0 002 2h12a2 2 0 002-2V8zM14 2v6h6")
}
pub fn icon_message() -> Html {
    icon_base("M21 15a2 2 0 01-2 2H7l-4 4V5a2 2 0 012-2h14a2 2 0 012 2z")
}
pub fn icon_close() -> Html {
    icon_base("M18 6L6 18M6 6l12 12")
}
pub fn icon_plus() -> Html {
    icon_base("M12 5v14M5 12h14")
}
pub fn icon_refresh() -> Html {
    icon_base("M23 4v6h-6M1 20v-6h6M3.51 9a9 9 0 0114.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0020.49 15")
}
pub fn icon_download() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M7 10l5 5 5-5M12 15V3")
}
pub fn icon_trash() -> Html {
    icon_base("M3 6h18M19 6l-1 14a2 2 0 01-2 2H8a2 2 0 01-2-2L5 6M10 11v6M14 11v6M9 6V4h6v2")
}
pub fn icon_send() -> Html {
    icon_base("M22 2L11 13M22 2l-7 20-4-9-9-4 20-7z")
}
