//! The form controller: the page's state cells and the submit cycle.
//!
//! Owns everything behind the page — raw input text, the filter selection,
//! and the settled outcome (display rows XOR error string). The UI layer is
//! the single writer; there is no locking because no other context touches
//! the state. A submission is split in two so the controller stays sans-IO:
//! [`FormController::begin_submit`] validates and hands out the wire body,
//! the caller performs the POST, and [`FormController::finish_submit`]
//! applies the [`Completion`].

use tracing::debug;

use crate::client::Completion;
use crate::error::SubmitError;
use crate::request::{parse_input, SubmitBody};
use crate::response::{project, DisplayEntry, DisplayResult};
use crate::tags::FilterTag;

/// A submission that passed validation and is ready to go out.
///
/// Carries the generation token tying the eventual [`Completion`] back to
/// this submit; completions from superseded generations are discarded, so
/// when submissions overlap the most recently submitted one wins regardless
/// of arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmit {
    pub generation: u64,
    pub body: SubmitBody,
}

/// All transient state behind the page.
///
/// Everything starts empty on load; exactly one of display/error is
/// non-empty after a submission settles, and both are only replaced by the
/// next settled submission. Nothing is persisted.
#[derive(Debug, Default)]
pub struct FormController {
    raw_input: String,
    selection: Vec<FilterTag>,
    display: DisplayResult,
    error: String,
    generation: u64,
    /// Selection as of the accepted submit. A selection edit during flight
    /// affects the next cycle, not the in-flight one.
    submitted_selection: Vec<FilterTag>,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.raw_input
    }

    /// Current selection in click order (the chips preserve it).
    pub fn selection(&self) -> &[FilterTag] {
        &self.selection
    }

    pub fn display(&self) -> &[DisplayEntry] {
        &self.display
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_selected(&self, tag: FilterTag) -> bool {
        self.selection.contains(&tag)
    }

    /// Replace the raw input. No validation happens until submit.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.raw_input = text.into();
    }

    /// Replace the filter selection, keeping the first occurrence of a
    /// repeated tag.
    pub fn set_filters(&mut self, tags: Vec<FilterTag>) {
        self.selection.clear();
        for tag in tags {
            if !self.selection.contains(&tag) {
                self.selection.push(tag);
            }
        }
    }

    /// Add a tag if absent, remove it if present (a dropdown option click).
    pub fn toggle_filter(&mut self, tag: FilterTag) {
        match self.selection.iter().position(|&t| t == tag) {
            Some(idx) => {
                self.selection.remove(idx);
            }
            None => self.selection.push(tag),
        }
    }

    /// Remove a tag (a chip dismissal).
    pub fn remove_filter(&mut self, tag: FilterTag) {
        self.selection.retain(|&t| t != tag);
    }

    /// Validate the current input and open a new submit cycle.
    ///
    /// On a parse or schema failure the error outcome is recorded here and
    /// `None` comes back — no request must be made. On success the caller
    /// owns dispatching the returned body and feeding the completion back
    /// through [`FormController::finish_submit`] with the same generation.
    pub fn begin_submit(&mut self) -> Option<PendingSubmit> {
        match parse_input(&self.raw_input) {
            Ok(parsed) => {
                self.generation += 1;
                self.submitted_selection = self.selection.clone();
                debug!(generation = self.generation, "submission validated");
                Some(PendingSubmit {
                    generation: self.generation,
                    body: parsed.into_body(&self.submitted_selection),
                })
            }
            Err(err) => {
                self.settle(Err(err));
                None
            }
        }
    }

    /// Deliver the completion for the submission opened with `generation`.
    ///
    /// Completions from superseded generations are dropped.
    pub fn finish_submit(&mut self, generation: u64, completion: Completion) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale completion");
            return;
        }
        match completion {
            Completion::Success(response) => {
                self.settle(Ok(project(&response, &self.submitted_selection)));
            }
            Completion::HttpError(status) => self.settle(Err(SubmitError::Server { status })),
            Completion::Transport => self.settle(Err(SubmitError::Network)),
            Completion::Setup(msg) => self.settle(Err(SubmitError::Setup(msg))),
        }
    }

    fn settle(&mut self, outcome: Result<DisplayResult, SubmitError>) {
        match outcome {
            Ok(display) => {
                self.display = display;
                self.error.clear();
            }
            Err(err) => {
                self.display.clear();
                self.error = err.user_message();
            }
        }
    }
}
