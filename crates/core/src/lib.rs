//! jsonsift — a single-page JSON filter form.
//!
//! The user pastes JSON containing a `data` array, picks filter tags, and
//! submits; the crate posts `{ data, filter }` to the remote endpoint and
//! projects the selected fields of the response into a display-ready list.
//! This crate is the UI-free core: parsing and validation, the error
//! taxonomy, the HTTP client, and the form controller state machine. The
//! desktop front-end lives in `apps/desktop`.
//!
//! # Modules
//!
//! - [`tags`] — The fixed filter-tag enumeration and its name table
//! - [`request`] — Input parsing/validation and the outbound request body
//! - [`response`] — Service response model and selection projection
//! - [`client`] — The `reqwest` submit call and its completion mapping
//! - [`controller`] — The form controller owning the page's state cells
//! - [`error`] — Submit failure taxonomy

pub mod client;
pub mod controller;
pub mod error;
pub mod request;
pub mod response;
pub mod tags;
