//! Domains: the hostnames allowed to load the project's web fonts.

pub mod client;
pub mod wire;

use crate::pager::{Page, PageInfo, PageMeta};
use serde::{Deserialize, Serialize};

pub use crate::pager::PagerInput as ListInput;

/// Endpoint path for the domains resource.
pub const PATH: &str = "/domains";

/// Metadata of a `GET /domains` page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainsMeta {
    #[serde(flatten)]
    pub page: PageInfo,
    pub project_id: String,
}

impl PageMeta for DomainsMeta {
    fn page_info(&self) -> &PageInfo {
        &self.page
    }
}

/// One page of registered domain names.
pub type ListResult = Page<String, DomainsMeta>;

/// Response of `POST /domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddResult {
    pub domains: Vec<String>,
}
