//! Form panel — JSON input field, multi-select filter control, submit button.

mod filter_select;
mod json_input;
mod submit;

use dioxus::prelude::*;
use filter_select::FilterSelect;
use json_input::JsonInput;
use submit::SubmitButton;

#[component]
pub fn FormPanel() -> Element {
    rsx! {
        div {
            class: "form-panel",
            JsonInput {}
            FilterSelect {}
            SubmitButton {}
        }
    }
}
