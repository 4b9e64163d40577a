//! Error text region and the filtered-response card.
//!
//! Exactly one of the two is ever visible: the controller clears the display
//! on failure and the error on success.

use dioxus::prelude::*;

use crate::state::FORM;

#[component]
pub fn ErrorText() -> Element {
    let error = FORM.read().error().to_string();

    if error.is_empty() {
        return rsx! {
            div { class: "error-text hidden" }
        };
    }

    rsx! {
        div {
            class: "error-text",
            "{error}"
        }
    }
}

#[component]
pub fn ResultCard() -> Element {
    let rows: Vec<(&'static str, String)> = FORM
        .read()
        .display()
        .iter()
        .map(|entry| (entry.label, entry.value_text()))
        .collect();

    if rows.is_empty() {
        return rsx! {
            div { class: "result-card hidden" }
        };
    }

    rsx! {
        div {
            class: "result-card",

            span { class: "result-card-title", "Filtered Response" }

            for (label, value) in rows {
                div {
                    class: "result-row",
                    span { class: "result-label", "{label}:" }
                    span { class: "result-value", "{value}" }
                }
            }
        }
    }
}
