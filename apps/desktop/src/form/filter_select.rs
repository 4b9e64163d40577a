//! Multi-select filter control — selected tags render as removable chips,
//! the dropdown lists the fixed three options.

use dioxus::prelude::*;

use jsonsift_core::tags::FilterTag;

use crate::state::{DROPDOWN_OPEN, FORM};

#[component]
pub fn FilterSelect() -> Element {
    let selection: Vec<FilterTag> = FORM.read().selection().to_vec();
    let open = *DROPDOWN_OPEN.read();

    rsx! {
        div {
            class: "filter-field",

            span { class: "filter-label", "MULTI FILTER" }

            div {
                class: "filter-control",

                // Chip strip doubles as the dropdown toggle
                div {
                    class: if open { "filter-chips open" } else { "filter-chips" },
                    onclick: move |_| {
                        let open = *DROPDOWN_OPEN.read();
                        *DROPDOWN_OPEN.write() = !open;
                    },

                    if selection.is_empty() {
                        span { class: "filter-placeholder", "Select filters..." }
                    }

                    for tag in selection.clone() {
                        span {
                            class: "chip",
                            "{tag.option_label()}"
                            button {
                                class: "chip-remove",
                                onclick: move |e: Event<MouseData>| {
                                    e.stop_propagation();
                                    FORM.write().remove_filter(tag);
                                },
                                "\u{00D7}"
                            }
                        }
                    }

                    span { class: "filter-caret", if open { "\u{25B4}" } else { "\u{25BE}" } }
                }

                if open {
                    div {
                        class: "filter-menu",
                        for tag in FilterTag::ALL {
                            FilterOption { tag }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterOption(tag: FilterTag) -> Element {
    let selected = FORM.read().is_selected(tag);

    rsx! {
        div {
            class: if selected { "filter-option selected" } else { "filter-option" },
            onclick: move |_| {
                FORM.write().toggle_filter(tag);
            },
            span { class: "filter-option-mark", if selected { "\u{2713}" } else { "" } }
            span { class: "filter-option-label", "{tag.option_label()}" }
        }
    }
}
