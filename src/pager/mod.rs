//! Cursor pagination: `Pager` and the page envelope types.
//!
//! Every list endpoint answers with `{"result": [...], "meta": {...}}` where
//! `meta` carries `has_next`/`next_cursor` plus endpoint-specific fields. A
//! [`Pager`] walks those pages strictly in order, one request at a time.

mod convert;
pub mod wire;

use crate::error::{Error, Result};
use crate::http::{Client, ClientOptions, SearchParams};

use futures_util::{Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

pub use convert::PageInfoError;

/// Query parameter carrying the cursor of the next page.
pub const CURSOR_PARAM: &str = "cursor";

/// Query parameter bounding the page size.
pub const LIMIT_PARAM: &str = "limit";

// ─── Envelope ────────────────────────────────────────────────────────────────

/// Whether another page follows, and where it starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "wire::PageInfoWire", into = "wire::PageInfoWire")]
pub enum PageInfo {
    Next { cursor: String },
    Last,
}

impl PageInfo {
    pub fn has_next(&self) -> bool {
        matches!(self, PageInfo::Next { .. })
    }

    pub fn next_cursor(&self) -> Option<&str> {
        match self {
            PageInfo::Next { cursor } => Some(cursor),
            PageInfo::Last => None,
        }
    }
}

/// Page metadata that exposes the pagination discriminant.
///
/// Endpoint metas embed a [`PageInfo`] with `#[serde(flatten)]` and return it here.
pub trait PageMeta {
    fn page_info(&self) -> &PageInfo;
}

impl PageMeta for PageInfo {
    fn page_info(&self) -> &PageInfo {
        self
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T, M = PageInfo> {
    pub result: Vec<T>,
    pub meta: M,
}

/// What a [`Pager`] needs from a page: its items and its metadata.
pub trait Paginated: DeserializeOwned {
    type Item;
    type Meta: PageMeta + Clone;

    fn meta(&self) -> &Self::Meta;

    fn into_parts(self) -> (Vec<Self::Item>, Self::Meta);
}

impl<T, M> Paginated for Page<T, M>
where
    T: DeserializeOwned,
    M: PageMeta + Clone + DeserializeOwned,
{
    type Item = T;
    type Meta = M;

    fn meta(&self) -> &M {
        &self.meta
    }

    fn into_parts(self) -> (Vec<T>, M) {
        (self.result, self.meta)
    }
}

/// One element of a page, paired with that page's metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedItem<T, M = PageInfo> {
    pub value: T,
    pub meta: M,
}

/// Pagination parameters shared by every list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerInput {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl PagerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub(crate) fn write_to(&self, params: &mut SearchParams) {
        params.insert_opt(LIMIT_PARAM, self.limit);
        params.insert_opt(CURSOR_PARAM, self.cursor.clone());
    }
}

impl From<PagerInput> for SearchParams {
    fn from(input: PagerInput) -> Self {
        let mut params = SearchParams::new();
        input.write_to(&mut params);
        params
    }
}

// ─── Pager ───────────────────────────────────────────────────────────────────

/// Stateful walk over a cursor-paginated list.
///
/// Owns its cursor and "more pages" flag; nothing is shared between pagers,
/// so any number of them may run against one [`Client`] concurrently.
///
/// ```rust,ignore
/// let mut pager = client.domains().list(PagerInput::new().limit(100), None);
/// while pager.has_next_page() {
///     let page = pager.next_page().await?;
///     println!("{:?}", page.result);
/// }
/// ```
#[derive(Debug)]
pub struct Pager<P> {
    client: Client,
    path: String,
    params: SearchParams,
    overrides: Option<ClientOptions>,
    has_next: bool,
    _page: PhantomData<fn() -> P>,
}

impl<P: Paginated> Pager<P> {
    pub fn new(
        client: Client,
        path: impl Into<String>,
        params: SearchParams,
        overrides: Option<ClientOptions>,
    ) -> Self {
        Self {
            client,
            path: path.into(),
            params,
            overrides,
            has_next: true,
            _page: PhantomData,
        }
    }

    /// Whether another page may be fetched. No I/O.
    pub fn has_next_page(&self) -> bool {
        self.has_next
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters for the next fetch, cursor included.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Fetch the next page and advance the cursor.
    ///
    /// Fails with [`Error::PaginationExhausted`] once the last page has been
    /// returned; a failed fetch leaves the pager where it was.
    pub async fn next_page(&mut self) -> Result<P> {
        if !self.has_next {
            return Err(Error::PaginationExhausted);
        }

        let page: P = self
            .client
            .get(&self.path, Some(&self.params), self.overrides.as_ref())
            .await?;

        match page.meta().page_info() {
            PageInfo::Next { cursor } => {
                tracing::trace!(path = %self.path, cursor = %cursor, "Advancing pager");
                self.params.insert(CURSOR_PARAM, cursor.clone());
            }
            PageInfo::Last => {
                tracing::trace!(path = %self.path, "Pager reached last page");
                self.has_next = false;
            }
        }

        Ok(page)
    }

    /// Remaining pages, in order. The pager keeps its state when the stream is dropped.
    pub fn pages(&mut self) -> impl Stream<Item = Result<P>> + '_ {
        async_stream::try_stream! {
            while self.has_next {
                let page = self.next_page().await?;
                yield page;
            }
        }
    }

    /// Owning form of [`Pager::pages`].
    pub fn into_pages(mut self) -> impl Stream<Item = Result<P>> {
        async_stream::try_stream! {
            while self.has_next {
                let page = self.next_page().await?;
                yield page;
            }
        }
    }

    /// Remaining items, page by page, each paired with its page's metadata.
    pub fn items(&mut self) -> impl Stream<Item = Result<PagedItem<P::Item, P::Meta>>> + '_ {
        async_stream::try_stream! {
            while self.has_next {
                let (values, meta) = self.next_page().await?.into_parts();
                for value in values {
                    yield PagedItem { value, meta: meta.clone() };
                }
            }
        }
    }

    /// Owning form of [`Pager::items`].
    pub fn into_items(mut self) -> impl Stream<Item = Result<PagedItem<P::Item, P::Meta>>> {
        async_stream::try_stream! {
            while self.has_next {
                let (values, meta) = self.next_page().await?.into_parts();
                for value in values {
                    yield PagedItem { value, meta: meta.clone() };
                }
            }
        }
    }

    /// Drain every remaining item into a `Vec`.
    pub async fn collect_items(&mut self) -> Result<Vec<PagedItem<P::Item, P::Meta>>> {
        self.items().try_collect().await
    }
}
