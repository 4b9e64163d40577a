//! Global application state using Dioxus signals.

use std::sync::LazyLock;

use dioxus::prelude::*;
use jsonsift_core::client::Client;
use jsonsift_core::controller::FormController;

/// The form controller — single writer for all form state.
pub static FORM: GlobalSignal<FormController> = Signal::global(FormController::new);

/// Whether the filter dropdown menu is open.
pub static DROPDOWN_OPEN: GlobalSignal<bool> = Signal::global(|| false);

/// One submit client for the process, reused across submissions.
pub static CLIENT: LazyLock<Client> = LazyLock::new(Client::new);
