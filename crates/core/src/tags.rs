//! The fixed filter-tag enumeration and its name table.
//!
//! Each tag carries three names: the option label shown in the multi-select
//! (which is also what goes into the outbound `filter` array), the service
//! response field it projects, and the label of its row in the result card.
//! Declaration order is the canonical display order; everything that needs a
//! stable order walks [`FilterTag::ALL`].

use serde::{Deserialize, Serialize};

/// One of the three selectable filter options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterTag {
    Alphabets,
    Numbers,
    #[serde(rename = "Highest lowercase alphabet")]
    HighestLowercase,
}

impl FilterTag {
    /// All tags in display order.
    pub const ALL: [FilterTag; 3] =
        [FilterTag::Alphabets, FilterTag::Numbers, FilterTag::HighestLowercase];

    /// The option label shown in the multi-select and sent on the wire.
    pub fn option_label(self) -> &'static str {
        match self {
            FilterTag::Alphabets => "Alphabets",
            FilterTag::Numbers => "Numbers",
            FilterTag::HighestLowercase => "Highest lowercase alphabet",
        }
    }

    /// The response field this tag projects out of the service response.
    pub fn response_field(self) -> &'static str {
        match self {
            FilterTag::Alphabets => "Alphabets",
            FilterTag::Numbers => "Numbers",
            FilterTag::HighestLowercase => "HighestLowercaseAlphabet",
        }
    }

    /// The label of this tag's row in the result card. Fixed to the response
    /// field name.
    pub fn display_label(self) -> &'static str {
        self.response_field()
    }

    /// Look a tag up by its option label.
    pub fn from_option_label(label: &str) -> Option<FilterTag> {
        FilterTag::ALL.into_iter().find(|tag| tag.option_label() == label)
    }
}
