//! Root application component — single-column form layout.

use dioxus::prelude::*;

use crate::form::FormPanel;
use crate::results::{ErrorText, ResultCard};

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div {
            class: "app-shell",

            // Titlebar (drag region)
            div {
                class: "titlebar",
                span { class: "titlebar-title", "jsonsift" }
            }

            div {
                class: "content-area",

                FormPanel {}

                // Visible only while an error is set
                ErrorText {}

                // Visible only after a successful submission with filters
                ResultCard {}
            }
        }
    }
}
