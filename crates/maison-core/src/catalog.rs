// ── Public catalog browser ──
//
// Storefront listing with server-side search, brand filter, and
// pagination. Page changes reuse the last search actually performed,
// not whatever is typed but not yet submitted.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};

use maison_api::{
    CommentInput, MessageResponse, PaginationInfo, PerfumeDetail, PerfumeQuery, PerfumeSummary,
};

use crate::config::CATALOG_PAGE_LIMIT;
use crate::error::CoreError;
use crate::gateway::Gateway;
use crate::store::Slot;
use crate::stream::SnapshotStream;
use crate::validation;

/// The storefront page currently shown, with the filters that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub perfumes: Vec<PerfumeSummary>,
    pub pagination: PaginationInfo,
    pub search: String,
    pub brand: String,
}

impl CatalogPage {
    fn initial(limit: u32) -> Self {
        Self {
            perfumes: Vec::new(),
            pagination: PaginationInfo::initial(limit),
            search: String::new(),
            brand: String::new(),
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.search.is_empty() || !self.brand.is_empty()
    }
}

/// Counts one browse as in flight until dropped, including when the
/// browse future is cancelled mid-request.
struct InFlight<'a>(&'a watch::Sender<usize>);

impl<'a> InFlight<'a> {
    fn begin(counter: &'a watch::Sender<usize>) -> Self {
        counter.send_modify(|n| *n += 1);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|n| *n = n.saturating_sub(1));
    }
}

pub struct Catalog<G: Gateway> {
    gateway: G,
    limit: u32,
    page: Slot<CatalogPage>,
    brand_names: Slot<Vec<String>>,
    in_flight: watch::Sender<usize>,
}

impl<G: Gateway> Catalog<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_limit(gateway, CATALOG_PAGE_LIMIT)
    }

    pub fn with_limit(gateway: G, limit: u32) -> Self {
        let (in_flight, _) = watch::channel(0);
        Self {
            gateway,
            limit,
            page: Slot::new(CatalogPage::initial(limit)),
            brand_names: Slot::new(Vec::new()),
            in_flight,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn page(&self) -> Arc<CatalogPage> {
        self.page.get()
    }

    /// Brand names offered by the brand filter.
    pub fn brand_names(&self) -> Arc<Vec<String>> {
        self.brand_names.get()
    }

    pub fn is_loading(&self) -> bool {
        *self.in_flight.borrow() > 0
    }

    pub fn subscribe(&self) -> SnapshotStream<CatalogPage> {
        SnapshotStream::new(self.page.subscribe())
    }

    // ── Browsing ─────────────────────────────────────────────────────

    /// Fetch one page with the given filters. Perfumes and pagination
    /// are replaced together. An unfiltered first page also refreshes
    /// the brand filter's options.
    pub async fn browse(
        &self,
        page: u32,
        search: &str,
        brand: &str,
    ) -> Result<Arc<CatalogPage>, CoreError> {
        let _in_flight = InFlight::begin(&self.in_flight);
        self.fetch(page, search, brand).await
    }

    async fn fetch(
        &self,
        page: u32,
        search: &str,
        brand: &str,
    ) -> Result<Arc<CatalogPage>, CoreError> {
        let mut query = PerfumeQuery::page(page, self.limit);
        if !search.is_empty() {
            query = query.with_search(search);
        }
        if !brand.is_empty() {
            query = query.with_brand(brand);
        }

        let response = self.gateway.browse_perfumes(&query).await?;
        debug!(
            page = response.pagination.current_page,
            count = response.perfumes.len(),
            "catalog page loaded"
        );
        self.page.replace(CatalogPage {
            perfumes: response.perfumes,
            pagination: response.pagination,
            search: search.to_owned(),
            brand: brand.to_owned(),
        });

        if page == 1 && search.is_empty() && brand.is_empty() {
            match self.gateway.list_brands().await {
                Ok(brands) => self
                    .brand_names
                    .replace(brands.into_iter().map(|b| b.brand_name).collect()),
                Err(e) => warn!(error = %e, "failed to load brand filter options"),
            }
        }
        Ok(self.page.get())
    }

    /// Go to `page` with the filters of the page shown. The page already
    /// shown issues no request.
    pub async fn change_page(&self, page: u32) -> Result<Arc<CatalogPage>, CoreError> {
        let current = self.page.get();
        if page == current.pagination.current_page {
            return Ok(current);
        }
        self.browse(page, &current.search, &current.brand).await
    }

    /// Submit a search (and brand filter). Always starts at page 1.
    pub async fn search(&self, term: &str, brand: &str) -> Result<Arc<CatalogPage>, CoreError> {
        self.browse(1, term.trim(), brand).await
    }

    pub async fn clear_filters(&self) -> Result<Arc<CatalogPage>, CoreError> {
        self.browse(1, "", "").await
    }

    // ── Detail and reviews ───────────────────────────────────────────

    pub async fn perfume(&self, id: &str) -> Result<PerfumeDetail, CoreError> {
        Ok(self.gateway.get_perfume(id).await?)
    }

    /// Post a review after validating rating and content.
    pub async fn add_review(
        &self,
        perfume_id: &str,
        rating: u8,
        content: &str,
    ) -> Result<MessageResponse, CoreError> {
        let errors = validation::review_form(rating, content);
        if !errors.is_valid() {
            return Err(CoreError::ValidationFailed { errors });
        }
        let comment = CommentInput {
            rating,
            content: content.trim().to_owned(),
        };
        Ok(self.gateway.add_comment(perfume_id, &comment).await?)
    }
}
