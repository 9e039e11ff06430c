use dioxus::prelude::*;

use shop::catalog;
use shop::catalog::VinylRecord;

#[derive(Clone, PartialEq, Props)]
struct VinylButtonProps {
    selection_signal: Signal<String>,
    record: &'static VinylRecord,
}

#[component]
fn VinylButton(props: VinylButtonProps) -> Element {
    let mut selection_signal = props.selection_signal;
    let record = props.record;

    rsx! {
        button {
            class: if selection_signal() == record.id { "vinyl-btn active" } else { "vinyl-btn" },
            onclick: move |_| selection_signal.set(record.id.to_string()),
            "{record.title}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct VinylDetailProps {
    record: &'static VinylRecord,
}

#[component]
fn VinylDetail(props: VinylDetailProps) -> Element {
    let record = props.record;

    rsx! {
        div { class: "vinyl-item card",
            div { class: "vinyl-art", "{record.art}" }
            div { class: "vinyl-info",
                h3 { class: "vinyl-title", "{record.title}" }
                p { class: "vinyl-artist", "{record.artist} ({record.year})" }
                p { class: "vinyl-price", "${record.price}" }
                p { class: "vinyl-blurb", "{record.blurb}" }
            }
        }
    }
}

#[component]
pub fn GallerySection() -> Element {
    let selection_signal = use_signal(|| String::from(catalog::default_selection()));

    rsx! {
        section { class: "gallery-section", id: "gallery",
            div { class: "container",
                h2 { class: "section-title", "This Week's Crates" }
                p { class: "section-lede", "Four picks from the floor, rotated every Friday." }

                div { class: "vinyl-nav",
                    for record in catalog::CATALOG.iter() {
                        VinylButton { key: "{record.id}", selection_signal, record }
                    }
                }

                div { class: "vinyl-display",
                    // an unknown id simply keeps the panel empty rather than
                    // tearing down the section
                    if let Some(record) = catalog::find(&selection_signal()) {
                        VinylDetail { record }
                    }
                }
            }
        }
    }
}
