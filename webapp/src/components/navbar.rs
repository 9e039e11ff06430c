use dioxus::prelude::*;

use tracing::debug;

use shop::theme;
use shop::theme::Theme;

use crate::common::storage::set_local_storage;

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    theme_signal: Signal<Theme>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut theme_signal = props.theme_signal;

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo", style: "display: flex; align-items: center;",
                    span { style: "font-size: 1.5rem; margin-right: 8px;", "🎶" }
                    span { style: "font-weight: 600; font-size: 1.25rem;", "Groove Haven Records" }
                }

                nav { class: "nav-links",
                    a { class: "nav-link", href: "#gallery", "This Week's Crates" }
                    a { class: "nav-link", href: "#game", "Guess & Win" }
                    a { class: "nav-link", href: "#contact", "Contact" }
                }

                button {
                    class: "theme-toggle",
                    onclick: move |_| {
                        let switched = theme_signal().flip();

                        theme_signal.set(switched);
                        set_local_storage::<String>(theme::STORAGE_KEY, switched.into());

                        debug!("theme switched to {switched:?}");
                    },
                    "{theme_signal().icon()}"
                }
            }
        }
    }
}
