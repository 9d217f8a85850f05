//! Stats sub-clients: `stats().pv()` and `stats().pv().domains()`.

use crate::client::MorisawaFontsWebFont;
use crate::domain::stats::{
    PvDomainsInput, PvDomainsResult, PvInput, PvResult, PV_DOMAINS_PATH, PV_PATH,
};
use crate::error::Result;
use crate::http::{ClientOptions, SearchParams};
use crate::pager::Pager;

/// Sub-client for statistics.
pub struct Stats<'a> {
    pub(crate) client: &'a MorisawaFontsWebFont,
}

impl<'a> Stats<'a> {
    pub fn pv(&self) -> Pv<'a> {
        Pv {
            client: self.client,
        }
    }
}

/// Page view statistics.
pub struct Pv<'a> {
    pub(crate) client: &'a MorisawaFontsWebFont,
}

impl<'a> Pv<'a> {
    /// Total page views of the project over a month range.
    pub async fn get(&self, input: PvInput, options: Option<&ClientOptions>) -> Result<PvResult> {
        let params = SearchParams::from(input);
        self.client.http.get(PV_PATH, Some(&params), options).await
    }

    pub fn domains(&self) -> PvDomains<'a> {
        PvDomains {
            client: self.client,
        }
    }
}

/// Page view statistics broken down by domain.
pub struct PvDomains<'a> {
    pub(crate) client: &'a MorisawaFontsWebFont,
}

impl<'a> PvDomains<'a> {
    pub fn list(
        &self,
        input: PvDomainsInput,
        options: Option<ClientOptions>,
    ) -> Pager<PvDomainsResult> {
        self.client.http.get_list(PV_DOMAINS_PATH, input, options)
    }
}
