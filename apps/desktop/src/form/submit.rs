//! Submit button and the async dispatch of the network call.

use dioxus::prelude::*;
use tracing::debug;

use crate::state::{CLIENT, FORM};

#[component]
pub fn SubmitButton() -> Element {
    rsx! {
        button {
            class: "submit-button",
            onclick: move |_| dispatch_submit(),
            "Submit"
        }
    }
}

/// Validate the form, then fire the request.
///
/// Validation failures settle synchronously inside `begin_submit` and no
/// request goes out. Otherwise the POST runs on a spawned task and its
/// completion is fed back into the controller, which drops it if a newer
/// submit has superseded it in the meantime.
pub(crate) fn dispatch_submit() {
    let Some(pending) = FORM.write().begin_submit() else {
        return;
    };
    debug!(generation = pending.generation, "dispatching submission");
    spawn(async move {
        let completion = CLIENT.submit(&pending.body).await;
        FORM.write().finish_submit(pending.generation, completion);
    });
}
