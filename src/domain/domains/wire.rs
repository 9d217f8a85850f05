//! Wire types for domain requests.

use serde::Serialize;

/// Body of `POST /domains` and `DELETE /domains`.
#[derive(Debug, Clone, Serialize)]
pub struct DomainsRequest<'a> {
    pub domains: Vec<&'a str>,
}

impl<'a> DomainsRequest<'a> {
    pub fn new<S: AsRef<str>>(domains: &'a [S]) -> Self {
        Self {
            domains: domains.iter().map(AsRef::as_ref).collect(),
        }
    }
}
