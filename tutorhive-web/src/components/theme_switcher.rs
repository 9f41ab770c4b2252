use gloo_storage::{LocalStorage, Storage};
use web_sys::window;
use yew::{Callback, Classes, Html, Properties, function_component, html, use_effect_with, use_state};
use yew_icons::{Icon, IconId};

const THEME_KEY: &str = "tutorhive.theme";

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

fn apply_theme(theme: &str) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("data-theme", theme);
    }
}

/// daisyUI theme toggle. The chosen theme is persisted and wins over the
/// system preference on the next visit.
#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let current_theme = use_state(|| "light".to_string());

    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |()| {
            let stored: Option<String> = LocalStorage::get(THEME_KEY).ok();
            let theme = stored.unwrap_or_else(|| {
                let system_prefers_dark = window()
                    .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
                    .flatten()
                    .is_some_and(|media_query| media_query.matches());
                if system_prefers_dark { "dark" } else { "light" }.to_string()
            });
            apply_theme(&theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let new_theme = if *current_theme == "dark" { "light" } else { "dark" };
            apply_theme(new_theme);
            let _ = LocalStorage::set(THEME_KEY, new_theme.to_string());
            current_theme.set(new_theme.to_string());
        })
    };

    // Sun in dark mode (switch to light), moon in light mode.
    let theme_icon = match current_theme.as_str() {
        "light" => IconId::HeroiconsSolidMoon,
        _ => IconId::HeroiconsSolidSun,
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label="Toggle theme"
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
