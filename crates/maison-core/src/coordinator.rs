// ── Dashboard data coordinator ──
//
// Single source of truth for what has been loaded, what is loading,
// and what the server last returned. Every fetch catches its own
// failure; mutations re-sync (create/update) or filter locally
// (delete), then refresh the aggregate stats.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use maison_api::{Brand, BrandInput, Perfume, PerfumeDetail, PerfumeQuery};

use crate::config::DASHBOARD_PAGE_LIMIT;
use crate::error::CoreError;
use crate::gateway::Gateway;
use crate::model::{MutableResource, Notice, PerfumeForm, ResourceTag};
use crate::store::{DashboardStore, LoadKey, PerfumeListing};
use crate::validation;

const NOTICE_CHANNEL_SIZE: usize = 64;

/// Who the dashboard is running for, and how it pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardOptions {
    /// Non-admin coordinators never fetch and refuse mutations.
    pub is_admin: bool,
    /// Perfume table page size.
    pub page_limit: u32,
}

impl DashboardOptions {
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            page_limit: DASHBOARD_PAGE_LIMIT,
        }
    }
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            is_admin: false,
            page_limit: DASHBOARD_PAGE_LIMIT,
        }
    }
}

/// Orchestrates gateway calls into the [`DashboardStore`].
///
/// Cheaply cloneable via `Arc`. Per resource tag the lifecycle is
/// `NotLoaded -> Loading -> Loaded` on success and
/// `NotLoaded -> Loading -> NotLoaded` on failure; only a success adds
/// the tag to the loaded set, so a failed tab is retried on the next
/// visit.
pub struct Coordinator<G: Gateway> {
    inner: Arc<CoordinatorInner<G>>,
}

struct CoordinatorInner<G> {
    gateway: G,
    store: DashboardStore,
    options: DashboardOptions,
    notices: broadcast::Sender<Notice>,
}

impl<G: Gateway> Clone for Coordinator<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Gateway> Coordinator<G> {
    pub fn new(gateway: G, options: DashboardOptions) -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CHANNEL_SIZE);
        Self {
            inner: Arc::new(CoordinatorInner {
                gateway,
                store: DashboardStore::new(options.page_limit),
                options,
                notices,
            }),
        }
    }

    pub fn store(&self) -> &DashboardStore {
        &self.inner.store
    }

    pub fn gateway(&self) -> &G {
        &self.inner.gateway
    }

    pub fn is_admin(&self) -> bool {
        self.inner.options.is_admin
    }

    pub fn page_limit(&self) -> u32 {
        self.inner.options.page_limit
    }

    /// Subscribe to user-visible outcomes (mutation results, failures).
    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.inner.notices.subscribe()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Initial admin load: aggregate stats plus the default tab.
    pub async fn mount(&self) {
        if !self.is_admin() {
            debug!("dashboard mounted for non-admin, skipping loads");
            return;
        }
        tokio::join!(
            self.fetch_stats(),
            self.load_tab_data(ResourceTag::default())
        );
    }

    /// Lazy-load a tab's collection if it has never loaded successfully.
    pub async fn load_tab_data(&self, tag: ResourceTag) {
        if !self.is_admin() {
            return;
        }
        if self.inner.store.is_loaded(tag) {
            debug!(%tag, "tab already loaded");
            return;
        }
        match tag {
            ResourceTag::Members => self.fetch_members().await,
            ResourceTag::Brands => self.fetch_brands().await,
            ResourceTag::Perfumes => self.fetch_perfumes(1).await,
        }
    }

    // ── Fetches (never fail outward) ─────────────────────────────────

    pub async fn fetch_stats(&self) {
        let store = &self.inner.store;
        let _loading = store.begin(LoadKey::Stats);
        match self.inner.gateway.get_stats().await {
            Ok(stats) => store.stats.replace(stats),
            Err(e) => {
                warn!(error = %e, "failed to fetch dashboard stats");
                self.notify(Notice::error("Failed to load dashboard stats"));
            }
        }
    }

    pub async fn fetch_members(&self) {
        let store = &self.inner.store;
        let _loading = store.begin(LoadKey::Resource(ResourceTag::Members));
        match self.inner.gateway.list_members().await {
            Ok(members) => {
                debug!(count = members.len(), "members loaded");
                store.members.replace(members);
                store.mark_loaded(ResourceTag::Members);
            }
            Err(e) => self.fetch_failed(ResourceTag::Members, &e),
        }
    }

    pub async fn fetch_brands(&self) {
        let store = &self.inner.store;
        let _loading = store.begin(LoadKey::Resource(ResourceTag::Brands));
        match self.inner.gateway.list_brands().await {
            Ok(brands) => {
                debug!(count = brands.len(), "brands loaded");
                store.brands.replace(brands);
                store.mark_loaded(ResourceTag::Brands);
            }
            Err(e) => self.fetch_failed(ResourceTag::Brands, &e),
        }
    }

    /// Fetch one unfiltered perfume page.
    pub async fn fetch_perfumes(&self, page: u32) {
        self.fetch_perfume_page(page, "").await;
    }

    /// Move the perfume table to `page`, keeping the current search.
    /// Requesting the page already shown issues no request.
    pub async fn change_perfume_page(&self, page: u32) {
        if !self.is_admin() {
            return;
        }
        let listing = self.inner.store.perfumes_snapshot();
        if page == listing.pagination.current_page {
            return;
        }
        self.fetch_perfume_page(page, &listing.search).await;
    }

    /// Bring the perfume listing to `(page, search)` unless it already
    /// shows exactly that.
    pub async fn fetch_perfume_view(&self, page: u32, search: &str) {
        if !self.is_admin() {
            return;
        }
        if self.inner.store.perfumes_snapshot().matches(page, search) {
            return;
        }
        self.fetch_perfume_page(page, search).await;
    }

    /// Re-fetch the page and search currently shown.
    pub async fn refresh_perfumes(&self) {
        let listing = self.inner.store.perfumes_snapshot();
        self.fetch_perfume_page(listing.pagination.current_page, &listing.search)
            .await;
    }

    async fn fetch_perfume_page(&self, page: u32, search: &str) {
        let store = &self.inner.store;
        let _loading = store.begin(LoadKey::Resource(ResourceTag::Perfumes));

        let mut query = PerfumeQuery::page(page, self.page_limit());
        if !search.is_empty() {
            query = query.with_search(search);
        }

        match self.inner.gateway.list_perfumes(&query).await {
            Ok(response) => {
                debug!(
                    page = response.pagination.current_page,
                    total_pages = response.pagination.total_pages,
                    "perfumes loaded"
                );
                store.perfumes.replace(PerfumeListing {
                    perfumes: response.perfumes,
                    pagination: response.pagination,
                    search: search.to_owned(),
                });
                store.mark_loaded(ResourceTag::Perfumes);
            }
            Err(e) => self.fetch_failed(ResourceTag::Perfumes, &e),
        }
    }

    /// Fetch brands only if none have ever been loaded (perfume form
    /// needs them for its brand picker).
    pub async fn ensure_brands_loaded(&self) {
        let store = &self.inner.store;
        if store.brands_snapshot().is_empty() && !store.is_loaded(ResourceTag::Brands) {
            self.fetch_brands().await;
        }
    }

    /// Full perfume record for the edit form. Failures become an error
    /// notice and `None`.
    pub async fn perfume_details(&self, id: &str) -> Option<PerfumeDetail> {
        match self.inner.gateway.get_perfume(id).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                warn!(id, error = %e, "failed to fetch perfume details");
                self.notify(Notice::error("Failed to load perfume details"));
                None
            }
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Create a brand, or rename `editing` when given. On success the
    /// brand list and stats are re-fetched from the server.
    pub async fn submit_brand(&self, name: &str, editing: Option<&str>) -> Result<Brand, CoreError> {
        if !self.is_admin() {
            return Err(CoreError::NotAdmin);
        }
        let errors = validation::brand_form(name);
        if !errors.is_valid() {
            return Err(CoreError::ValidationFailed { errors });
        }

        let input = BrandInput {
            brand_name: name.trim().to_owned(),
        };
        let gateway = &self.inner.gateway;
        let (brand, message) = match editing {
            Some(id) => (
                gateway.update_brand(id, &input).await?,
                "Maison updated successfully.",
            ),
            None => (
                gateway.create_brand(&input).await?,
                "Maison added to registry.",
            ),
        };
        info!(id = %brand.id, brand_name = %brand.brand_name, "brand saved");
        self.notify(Notice::success(message));

        tokio::join!(self.fetch_brands(), self.fetch_stats());
        Ok(brand)
    }

    /// Create a perfume, or update `editing` when given. On success the
    /// current perfume page and stats are re-fetched.
    pub async fn submit_perfume(
        &self,
        form: &PerfumeForm,
        editing: Option<&str>,
    ) -> Result<Perfume, CoreError> {
        if !self.is_admin() {
            return Err(CoreError::NotAdmin);
        }
        let payload = form.to_payload()?;

        let gateway = &self.inner.gateway;
        let (perfume, message) = match editing {
            Some(id) => (
                gateway.update_perfume(id, &payload).await?,
                "Fragrance updated successfully.",
            ),
            None => (
                gateway.create_perfume(&payload).await?,
                "Fragrance added to collection.",
            ),
        };
        info!(id = %perfume.id, perfume_name = %perfume.perfume_name, "perfume saved");
        self.notify(Notice::success(message));

        tokio::join!(self.refresh_perfumes(), self.fetch_stats());
        Ok(perfume)
    }

    /// Delete a brand or perfume.
    ///
    /// On success the record is dropped from the in-memory collection
    /// (no re-fetch) and stats are refreshed. On failure nothing changes
    /// and an error notice is published. Returns whether it succeeded.
    pub async fn delete(&self, resource: MutableResource, id: &str) -> bool {
        let result = if self.is_admin() {
            let deleted = match resource {
                MutableResource::Brand => self.inner.gateway.delete_brand(id).await,
                MutableResource::Perfume => self.inner.gateway.delete_perfume(id).await,
            };
            deleted.map_err(CoreError::from)
        } else {
            Err(CoreError::NotAdmin)
        };

        if let Err(e) = result {
            warn!(%resource, id, error = %e, "delete failed");
            self.notify(Notice::error(format!(
                "Failed to remove {resource}. Please try again."
            )));
            return false;
        }

        let store = &self.inner.store;
        let message = match resource {
            MutableResource::Brand => {
                store.brands.update(|brands| brands.retain(|b| b.id != id));
                "Maison removed from registry."
            }
            MutableResource::Perfume => {
                store
                    .perfumes
                    .update(|listing| listing.perfumes.retain(|p| p.id != id));
                "Fragrance removed from collection."
            }
        };
        info!(%resource, id, "deleted");
        self.notify(Notice::success(message));

        self.fetch_stats().await;
        true
    }

    // ── Helpers ──────────────────────────────────────────────────────

    fn fetch_failed(&self, tag: ResourceTag, err: &maison_api::Error) {
        warn!(%tag, error = %err, "fetch failed, keeping previous data");
        self.notify(Notice::error(format!("Failed to load {tag}")));
    }

    fn notify(&self, notice: Notice) {
        // No subscribers is fine.
        let _ = self.inner.notices.send(notice);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{LoadingStates, NoticeLevel};
    use crate::test_support::{FakeGateway, brand};
    use maison_api::{Concentration, TargetAudience};

    fn admin() -> Coordinator<FakeGateway> {
        Coordinator::new(FakeGateway::new(), DashboardOptions::admin())
    }

    fn form() -> PerfumeForm {
        PerfumeForm {
            perfume_name: "Aventus".into(),
            uri: "https://img.example.com/a.jpg".into(),
            price: "320".into(),
            concentration: Concentration::Edp,
            description: "Smoky pineapple and birch".into(),
            ingredients: "pineapple, birch".into(),
            volume: "100".into(),
            target_audience: TargetAudience::Male,
            brand: "b1".into(),
        }
    }

    // ── Mount ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn admin_mount_loads_stats_and_members_only() {
        let c = admin();
        c.mount().await;

        let gw = c.gateway();
        assert_eq!(gw.count("get_stats"), 1);
        assert_eq!(gw.count("list_members"), 1);
        assert_eq!(gw.count("list_brands"), 0);
        assert_eq!(gw.count("list_perfumes"), 0);
        assert_eq!(c.store().loading_states(), LoadingStates::default());
        assert!(!c.store().stats_loading());
        assert_eq!(c.store().loaded_tabs(), vec![ResourceTag::Members]);
        assert_eq!(c.store().stats().perfumes_count, 30);
        assert_eq!(c.store().members_snapshot().len(), 1);
    }

    #[tokio::test]
    async fn non_admin_never_fetches() {
        let c = Coordinator::new(FakeGateway::new(), DashboardOptions::default());
        c.mount().await;
        c.load_tab_data(ResourceTag::Brands).await;
        c.fetch_perfume_view(2, "").await;

        assert!(c.gateway().calls().is_empty());
        assert!(c.store().loaded_tabs().is_empty());
    }

    // ── Lazy loading ─────────────────────────────────────────────────

    #[tokio::test]
    async fn repeated_tab_loads_hit_gateway_once() {
        let c = admin();
        for _ in 0..3 {
            c.load_tab_data(ResourceTag::Brands).await;
        }
        assert_eq!(c.gateway().count("list_brands"), 1);
        assert!(c.store().is_loaded(ResourceTag::Brands));
    }

    #[tokio::test]
    async fn failed_load_is_retried_on_next_visit() {
        let c = admin();
        let mut notices = c.subscribe_notices();
        c.gateway().fail("list_brands");

        c.load_tab_data(ResourceTag::Brands).await;
        assert_eq!(c.gateway().count("list_brands"), 1);
        assert!(!c.store().is_loaded(ResourceTag::Brands));
        assert!(!c.store().loading_states().brands);
        assert!(c.store().brands_snapshot().is_empty());
        let notice = notices.try_recv().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Failed to load brands");

        c.gateway().recover("list_brands");
        c.load_tab_data(ResourceTag::Brands).await;
        assert_eq!(c.gateway().count("list_brands"), 2);
        assert!(c.store().is_loaded(ResourceTag::Brands));
        assert_eq!(c.store().brands_snapshot().len(), 2);
    }

    #[tokio::test]
    async fn failed_refetch_keeps_previous_collection() {
        let c = admin();
        c.load_tab_data(ResourceTag::Brands).await;
        c.gateway().fail("list_brands");

        c.fetch_brands().await;
        assert_eq!(c.store().brands_snapshot().len(), 2);
        assert!(!c.store().loading_states().brands);
    }

    #[tokio::test]
    async fn one_resource_failing_leaves_others_alone() {
        let c = admin();
        c.gateway().fail("list_members");
        tokio::join!(
            c.load_tab_data(ResourceTag::Members),
            c.load_tab_data(ResourceTag::Brands)
        );
        assert!(!c.store().is_loaded(ResourceTag::Members));
        assert!(c.store().is_loaded(ResourceTag::Brands));
        assert_eq!(c.store().loading_states(), LoadingStates::default());
    }

    #[tokio::test]
    async fn loading_flag_is_up_only_while_in_flight() {
        let c = admin();
        let gate = c.gateway().gate("list_members");
        let mut loading = c.store().subscribe_loading();

        let task = tokio::spawn({
            let c = c.clone();
            async move { c.load_tab_data(ResourceTag::Members).await }
        });
        loading.wait_for(|s| s.members).await.unwrap();
        assert!(!c.store().is_loaded(ResourceTag::Members));

        gate.add_permits(1);
        task.await.unwrap();
        assert!(!c.store().loading_states().members);
        assert!(c.store().is_loaded(ResourceTag::Members));
    }

    // ── Perfume pagination ───────────────────────────────────────────

    #[tokio::test]
    async fn perfumes_tab_then_page_two() {
        let c = admin();
        c.load_tab_data(ResourceTag::Perfumes).await;
        c.change_perfume_page(2).await;

        assert_eq!(
            c.gateway().calls(),
            vec![
                "list_perfumes(1,10,,)".to_owned(),
                "list_perfumes(2,10,,)".to_owned(),
            ]
        );
        let listing = c.store().perfumes_snapshot();
        assert_eq!(listing.pagination.current_page, 2);
        assert_eq!(listing.perfumes[0].id, "p2");
    }

    #[tokio::test]
    async fn same_page_change_is_a_no_op() {
        let c = admin();
        c.load_tab_data(ResourceTag::Perfumes).await;
        c.change_perfume_page(1).await;
        assert_eq!(c.gateway().count("list_perfumes"), 1);
    }

    #[tokio::test]
    async fn page_change_keeps_search() {
        let c = admin();
        c.fetch_perfume_view(1, "rose").await;
        c.change_perfume_page(3).await;
        assert_eq!(
            c.gateway().calls(),
            vec![
                "list_perfumes(1,10,rose,)".to_owned(),
                "list_perfumes(3,10,rose,)".to_owned(),
            ]
        );
        assert_eq!(c.store().perfumes_snapshot().search, "rose");
    }

    #[tokio::test]
    async fn view_fetch_skips_when_listing_matches() {
        let c = admin();
        // Initial listing already describes page 1 with no search.
        c.fetch_perfume_view(1, "").await;
        assert_eq!(c.gateway().count("list_perfumes"), 0);

        c.fetch_perfume_view(2, "").await;
        c.fetch_perfume_view(2, "").await;
        assert_eq!(c.gateway().count("list_perfumes"), 1);
    }

    #[tokio::test]
    async fn concurrent_page_fetches_never_tear() {
        let c = admin();
        let gate = c.gateway().gate("list_perfumes");

        let a = tokio::spawn({
            let c = c.clone();
            async move { c.fetch_perfumes(2).await }
        });
        let b = tokio::spawn({
            let c = c.clone();
            async move { c.fetch_perfumes(3).await }
        });
        gate.add_permits(2);
        a.await.unwrap();
        b.await.unwrap();

        let listing = c.store().perfumes_snapshot();
        let page = listing.pagination.current_page;
        assert!(page == 2 || page == 3);
        assert_eq!(listing.perfumes[0].id, format!("p{page}"));
        assert!(!c.store().loading_states().perfumes);
    }

    // ── Mutations ────────────────────────────────────────────────────

    #[tokio::test]
    async fn delete_brand_filters_locally_and_refreshes_stats() {
        let c = admin();
        let mut notices = c.subscribe_notices();
        c.load_tab_data(ResourceTag::Brands).await;

        assert!(c.delete(MutableResource::Brand, "b1").await);

        let brands = c.store().brands_snapshot();
        assert!(brands.iter().all(|b| b.id != "b1"));
        assert_eq!(brands.len(), 1);
        assert_eq!(c.gateway().count("list_brands"), 1);
        assert_eq!(c.gateway().count("get_stats"), 1);
        assert_eq!(
            notices.try_recv().unwrap(),
            Notice::success("Maison removed from registry.")
        );
    }

    #[tokio::test]
    async fn delete_perfume_filters_current_page() {
        let c = admin();
        c.load_tab_data(ResourceTag::Perfumes).await;

        assert!(c.delete(MutableResource::Perfume, "p1").await);
        let listing = c.store().perfumes_snapshot();
        assert!(listing.perfumes.is_empty());
        assert_eq!(listing.pagination.current_page, 1);
        assert_eq!(c.gateway().count("list_perfumes"), 1);
        assert_eq!(c.gateway().count("get_stats"), 1);
    }

    #[tokio::test]
    async fn failed_delete_returns_false_and_changes_nothing() {
        let c = admin();
        let mut notices = c.subscribe_notices();
        c.load_tab_data(ResourceTag::Brands).await;
        c.gateway().fail("delete_brand");

        assert!(!c.delete(MutableResource::Brand, "b1").await);

        assert_eq!(c.store().brands_snapshot().len(), 2);
        assert_eq!(c.gateway().count("get_stats"), 0);
        assert_eq!(
            notices.try_recv().unwrap(),
            Notice::error("Failed to remove brand. Please try again.")
        );
    }

    #[tokio::test]
    async fn create_brand_resyncs_from_server() {
        let c = admin();
        c.load_tab_data(ResourceTag::Brands).await;

        let created = c.submit_brand("  Byredo ", None).await.unwrap();
        assert_eq!(created.brand_name, "BYREDO");

        assert_eq!(c.gateway().count("create_brand(Byredo)"), 1);
        assert_eq!(c.gateway().count("list_brands"), 2);
        assert_eq!(c.gateway().count("get_stats"), 1);
        assert_eq!(
            *c.store().brands_snapshot(),
            vec![
                brand("b3", "BYREDO"),
                brand("b1", "Creed"),
                brand("b2", "Diptyque")
            ]
        );
    }

    #[tokio::test]
    async fn update_brand_uses_editing_id() {
        let c = admin();
        let mut notices = c.subscribe_notices();
        c.submit_brand("Creed Paris", Some("b1")).await.unwrap();

        assert_eq!(c.gateway().count("update_brand(b1,Creed Paris)"), 1);
        assert_eq!(c.store().brands_snapshot()[0].brand_name, "Creed Paris");
        assert_eq!(c.gateway().count("get_stats"), 1);
        assert_eq!(
            notices.try_recv().unwrap(),
            Notice::success("Maison updated successfully.")
        );
    }

    #[tokio::test]
    async fn invalid_brand_never_reaches_gateway() {
        let c = admin();
        let err = c.submit_brand("   ", None).await.unwrap_err();
        assert!(err.field_errors().is_some());
        assert!(c.gateway().calls().is_empty());
    }

    #[tokio::test]
    async fn failed_create_propagates_without_resync() {
        let c = admin();
        c.gateway().fail("create_brand");
        let err = c.submit_brand("Byredo", None).await.unwrap_err();
        assert!(matches!(err, CoreError::Api { status: Some(500), .. }));
        assert_eq!(c.gateway().count("list_brands"), 0);
        assert_eq!(c.gateway().count("get_stats"), 0);
    }

    #[tokio::test]
    async fn non_admin_mutations_are_refused() {
        let c = Coordinator::new(FakeGateway::new(), DashboardOptions::default());
        assert!(matches!(
            c.submit_brand("Byredo", None).await,
            Err(CoreError::NotAdmin)
        ));
        assert!(matches!(
            c.submit_perfume(&form(), None).await,
            Err(CoreError::NotAdmin)
        ));
        assert!(!c.delete(MutableResource::Brand, "b1").await);
        assert!(c.gateway().calls().is_empty());
    }

    #[tokio::test]
    async fn perfume_update_refetches_current_view() {
        let c = admin();
        c.fetch_perfume_view(2, "rose").await;

        c.submit_perfume(&form(), Some("p2rose")).await.unwrap();

        assert_eq!(c.gateway().count("update_perfume(p2rose)"), 1);
        assert_eq!(c.gateway().count("list_perfumes(2,10,rose,)"), 2);
        assert_eq!(c.gateway().count("get_stats"), 1);
    }

    #[tokio::test]
    async fn perfume_create_notice() {
        let c = admin();
        let mut notices = c.subscribe_notices();
        c.submit_perfume(&form(), None).await.unwrap();
        assert_eq!(c.gateway().count("create_perfume(Aventus)"), 1);
        assert_eq!(c.gateway().count("get_stats"), 1);
        assert_eq!(
            notices.try_recv().unwrap(),
            Notice::success("Fragrance added to collection.")
        );
    }

    #[tokio::test]
    async fn members_fetch_never_touches_stats() {
        let c = admin();
        c.fetch_members().await;
        c.fetch_members().await;
        assert_eq!(c.gateway().count("get_stats"), 0);
    }

    // ── Details and brand preloading ─────────────────────────────────

    #[tokio::test]
    async fn details_failure_is_none_with_notice() {
        let c = admin();
        let mut notices = c.subscribe_notices();
        c.gateway().fail("get_perfume");

        assert!(c.perfume_details("p1").await.is_none());
        assert_eq!(
            notices.try_recv().unwrap(),
            Notice::error("Failed to load perfume details")
        );
    }

    #[tokio::test]
    async fn details_success() {
        let c = admin();
        let detail = c.perfume_details("p9").await.unwrap();
        assert_eq!(detail.perfume.id, "p9");
    }

    #[tokio::test]
    async fn ensure_brands_loaded_fetches_once() {
        let c = admin();
        c.ensure_brands_loaded().await;
        c.ensure_brands_loaded().await;
        assert_eq!(c.gateway().count("list_brands"), 1);
    }
}
