//! Validation between [`PageInfoWire`] and [`PageInfo`].

use super::wire::PageInfoWire;
use super::PageInfo;
use thiserror::Error;

/// A page envelope whose metadata contradicts itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageInfoError {
    #[error("has_next is true but next_cursor is missing")]
    MissingCursor,
}

impl TryFrom<PageInfoWire> for PageInfo {
    type Error = PageInfoError;

    fn try_from(wire: PageInfoWire) -> Result<Self, Self::Error> {
        match (wire.has_next, wire.next_cursor) {
            (true, Some(cursor)) => Ok(PageInfo::Next { cursor }),
            (true, None) => Err(PageInfoError::MissingCursor),
            // A stray cursor on the last page is ignored.
            (false, _) => Ok(PageInfo::Last),
        }
    }
}

impl From<PageInfo> for PageInfoWire {
    fn from(info: PageInfo) -> Self {
        match info {
            PageInfo::Next { cursor } => PageInfoWire {
                has_next: true,
                next_cursor: Some(cursor),
            },
            PageInfo::Last => PageInfoWire {
                has_next: false,
                next_cursor: None,
            },
        }
    }
}
