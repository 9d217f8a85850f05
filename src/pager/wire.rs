//! Wire form of the pagination envelope metadata.

use serde::{Deserialize, Serialize};

/// `{"has_next": true, "next_cursor": "..."}` or `{"has_next": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfoWire {
    pub has_next: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
