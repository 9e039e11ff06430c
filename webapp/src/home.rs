use dioxus::prelude::*;

use shop::theme;
use shop::theme::Theme;

use crate::common::storage::try_local_storage;
use crate::components::contact::ContactSection;
use crate::components::gallery::GallerySection;
use crate::components::game::GameSection;
use crate::components::navbar::NavBar;

#[component]
pub fn ShopHome() -> Element {
    // the stored preference survives reloads; an unset or mangled value
    // simply reads as light
    let theme_signal =
        use_signal(|| Theme::from(try_local_storage::<String>(theme::STORAGE_KEY)));

    rsx! {
        div {
            class: if theme_signal().is_dark() { "home-container dark-mode" } else { "home-container" },

            NavBar { theme_signal }

            // Hero section
            section { class: "hero",
                div { class: "container",
                    div { class: "hero-content",
                        h1 { class: "hero-title", "Groove Haven Records" }
                        p { class: "hero-subtitle",
                            "Rare pressings, fresh reissues, and the warmest sound in town"
                        }
                        div { class: "hero-actions",
                            a { href: "#gallery", class: "btn btn-primary btn-lg", "Browse the Crates" }
                            a { href: "#contact", class: "btn btn-secondary btn-lg", "Get in Touch" }
                        }
                    }
                }
            }

            GallerySection {}

            GameSection {}

            ContactSection {}

            // Footer
            footer { class: "home-footer",
                div { class: "container",
                    p { "Groove Haven Records • Every pressing inspected by hand" }
                }
            }
        }
    }
}
