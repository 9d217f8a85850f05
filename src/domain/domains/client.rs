//! Domains sub-client: list, add, delete.

use crate::client::MorisawaFontsWebFont;
use crate::domain::domains::wire::DomainsRequest;
use crate::domain::domains::{AddResult, ListInput, ListResult, PATH};
use crate::error::Result;
use crate::http::ClientOptions;
use crate::pager::Pager;

/// Sub-client for domain operations.
pub struct Domains<'a> {
    pub(crate) client: &'a MorisawaFontsWebFont,
}

impl<'a> Domains<'a> {
    /// Paginated list of domains registered to the project.
    ///
    /// ```rust,ignore
    /// let mut items = client.domains().list(ListInput::new(), None).into_items();
    /// while let Some(domain) = items.try_next().await? {
    ///     println!("{}", domain.value);
    /// }
    /// ```
    pub fn list(&self, input: ListInput, options: Option<ClientOptions>) -> Pager<ListResult> {
        self.client.http.get_list(PATH, input, options)
    }

    /// Add domains to the project.
    pub async fn add<S: AsRef<str>>(
        &self,
        domains: &[S],
        options: Option<&ClientOptions>,
    ) -> Result<AddResult> {
        let body = DomainsRequest::new(domains);
        self.client.http.post(PATH, Some(&body), options).await
    }

    /// Remove domains from the project.
    pub async fn delete<S: AsRef<str>>(
        &self,
        domains: &[S],
        options: Option<&ClientOptions>,
    ) -> Result<()> {
        let body = DomainsRequest::new(domains);
        self.client.http.delete(PATH, Some(&body), options).await
    }
}
