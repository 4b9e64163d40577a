//! Free-text JSON input field.
//!
//! Text is accepted unconditionally; validation happens on submit.

use dioxus::prelude::*;

use crate::form::submit::dispatch_submit;
use crate::state::FORM;

#[component]
pub fn JsonInput() -> Element {
    let value = FORM.read().input().to_string();
    let has_text = !value.is_empty();

    rsx! {
        div {
            class: "input-field",

            span { class: "input-label", "API INPUT" }

            div {
                class: "input-row",

                input {
                    class: "json-input",
                    r#type: "text",
                    placeholder: "{{\"data\":[\"1\",\"a\",\"B\",\"2\"]}}",
                    value: "{value}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        FORM.write().set_input(e.value());
                    },
                    onkeydown: move |e: Event<KeyboardData>| {
                        if e.key() == Key::Enter {
                            dispatch_submit();
                        }
                    },
                }

                if has_text {
                    button {
                        class: "input-clear",
                        onclick: move |_| {
                            FORM.write().set_input("");
                        },
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
