//! Submit failure taxonomy.
//!
//! Five ways a submission can fail, none of which escape the submit path:
//! each is folded into the single user-visible error string by
//! [`SubmitError::user_message`]. The display result and the error string
//! are mutually exclusive; settling a submission sets exactly one of them.

use thiserror::Error;

/// Everything that can go wrong between hitting submit and rendering a result.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input parsed, but the `data` field is missing or not an array.
    #[error("{0}")]
    Schema(String),

    /// The endpoint answered with a non-success status.
    #[error("server returned {status}")]
    Server { status: String },

    /// The request went out and nothing came back.
    #[error("no response from server")]
    Network,

    /// The request could not be built or dispatched.
    #[error("{0}")]
    Setup(String),
}

impl SubmitError {
    /// Render the error string shown in the UI.
    ///
    /// Server and transport failures carry the `API Error:` prefix;
    /// everything that failed before a response was possible uses `Error:`.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Server { status } => format!("API Error: {status}"),
            SubmitError::Network => "API Error: No response from server".to_string(),
            SubmitError::Parse(err) => format!("Error: {err}"),
            SubmitError::Schema(msg) | SubmitError::Setup(msg) => format!("Error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_embed_the_status_text() {
        let err = SubmitError::Server { status: "Internal Server Error".into() };
        assert_eq!(err.user_message(), "API Error: Internal Server Error");
    }

    #[test]
    fn network_error_is_the_fixed_string() {
        assert_eq!(SubmitError::Network.user_message(), "API Error: No response from server");
    }

    #[test]
    fn local_failures_use_the_error_prefix() {
        let parse = SubmitError::Parse(serde_json::from_str::<serde_json::Value>("nope").unwrap_err());
        assert!(parse.user_message().starts_with("Error: "));

        let schema = SubmitError::Schema("data field is required".into());
        assert_eq!(schema.user_message(), "Error: data field is required");

        let setup = SubmitError::Setup("relative URL without a base".into());
        assert_eq!(setup.user_message(), "Error: relative URL without a base");
    }
}
