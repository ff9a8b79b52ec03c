// Binds addressable view state to the coordinator.
//
// Two effects:
//   tab effect      deps: tab  -> load_tab_data(tab), members and brands
//   perfume effect  runs while the perfumes tab is active and the held
//                   listing is not the requested (page, q)
// The perfume effect is compared against the store, not against the last
// request, so asking for a page or search that failed to load asks again.
// A non-perfumes tab never reaches the perfume effect's fetch.

use std::collections::BTreeMap;

use tracing::debug;

use maison_api::{Brand, Member, Perfume};

use super::filter;
use super::pager::{PageItem, page_window};
use super::sort::{SortField, SortState};
use super::state::ViewState;
use crate::coordinator::Coordinator;
use crate::gateway::Gateway;
use crate::model::ResourceTag;

/// View-state synchronizer for one dashboard session.
pub struct ViewSync<G: Gateway> {
    coordinator: Coordinator<G>,
    state: ViewState,
    history: Vec<ViewState>,
    sorts: BTreeMap<ResourceTag, SortState>,
    tab_deps: Option<ResourceTag>,
}

impl<G: Gateway> ViewSync<G> {
    pub fn new(coordinator: Coordinator<G>, initial: ViewState) -> Self {
        Self {
            coordinator,
            state: initial,
            history: Vec::new(),
            sorts: BTreeMap::new(),
            tab_deps: None,
        }
    }

    /// Start from a URL query string.
    pub fn from_location(coordinator: Coordinator<G>, query: &str) -> Self {
        Self::new(coordinator, ViewState::from_query(query))
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn coordinator(&self) -> &Coordinator<G> {
        &self.coordinator
    }

    /// Current state as a URL query string.
    pub fn location(&self) -> String {
        self.state.to_query()
    }

    // ── Transitions ──────────────────────────────────────────────────

    /// First render: aggregate stats plus the effects for the initial state.
    pub async fn mount(&mut self) {
        let coordinator = self.coordinator.clone();
        tokio::join!(
            async {
                if coordinator.is_admin() {
                    coordinator.fetch_stats().await;
                }
            },
            self.run_effects()
        );
    }

    pub async fn select_tab(&mut self, tab: ResourceTag) {
        let next = self.state.with_tab(tab);
        self.transition(next).await;
    }

    pub async fn set_page(&mut self, page: u32) {
        let next = self.state.with_page(page);
        self.transition(next).await;
    }

    pub async fn set_search(&mut self, search: &str) {
        let next = self.state.with_search(search);
        self.transition(next).await;
    }

    /// Jump to an arbitrary location (link, reload).
    pub async fn navigate(&mut self, query: &str) {
        self.transition(ViewState::from_query(query)).await;
    }

    /// Return to the previous location. `false` when there is none.
    pub async fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        self.state = previous;
        self.run_effects().await;
        true
    }

    async fn transition(&mut self, next: ViewState) {
        if next == self.state {
            self.retry().await;
            return;
        }
        debug!(from = %self.state.to_query(), to = %next.to_query(), "view state changed");
        let previous = std::mem::replace(&mut self.state, next);
        self.history.push(previous);
        self.run_effects().await;
    }

    async fn run_effects(&mut self) {
        let tab = self.state.tab;
        if self.tab_deps != Some(tab) {
            self.tab_deps = Some(tab);
            if tab != ResourceTag::Perfumes {
                self.coordinator.load_tab_data(tab).await;
            }
        }
        if tab == ResourceTag::Perfumes {
            self.sync_perfumes().await;
        }
    }

    /// Same location requested again: reload whatever failed to load.
    async fn retry(&self) {
        match self.state.tab {
            ResourceTag::Perfumes => self.sync_perfumes().await,
            tab => self.coordinator.load_tab_data(tab).await,
        }
    }

    /// Bring the perfume listing to the requested page and search. The
    /// first unfiltered page goes through the lazy tab load, since the
    /// empty listing already claims it.
    async fn sync_perfumes(&self) {
        let page = self.state.page;
        let search = self.state.search.as_str();
        let first_page = page == 1 && search.is_empty();
        if first_page && !self.coordinator.store().is_loaded(ResourceTag::Perfumes) {
            self.coordinator.load_tab_data(ResourceTag::Perfumes).await;
        } else {
            self.coordinator.fetch_perfume_view(page, search).await;
        }
    }

    // ── Sorting ──────────────────────────────────────────────────────

    pub fn sort(&self, tab: ResourceTag) -> SortState {
        self.sorts.get(&tab).copied().unwrap_or_default()
    }

    pub fn set_sort(&mut self, tab: ResourceTag, sort: SortState) {
        self.sorts.insert(tab, sort);
    }

    /// Header click on the active tab's table.
    pub fn select_sort(&mut self, field: SortField) {
        self.sorts.entry(self.state.tab).or_default().select(field);
    }

    // ── Derived rows ─────────────────────────────────────────────────

    /// Loaded members matching the search, in sort order.
    pub fn visible_members(&self) -> Vec<Member> {
        let snapshot = self.coordinator.store().members_snapshot();
        let mut rows = filter::members(&snapshot, &self.state.search);
        self.sort(ResourceTag::Members).sort_members(&mut rows);
        rows
    }

    pub fn visible_brands(&self) -> Vec<Brand> {
        let snapshot = self.coordinator.store().brands_snapshot();
        let mut rows = filter::brands(&snapshot, &self.state.search);
        self.sort(ResourceTag::Brands).sort_brands(&mut rows);
        rows
    }

    /// The loaded perfume page in sort order. Search already happened
    /// server-side.
    pub fn visible_perfumes(&self) -> Vec<Perfume> {
        let mut rows = self.coordinator.store().perfumes_snapshot().perfumes.clone();
        self.sort(ResourceTag::Perfumes).sort_perfumes(&mut rows);
        rows
    }

    pub fn page_items(&self) -> Vec<PageItem> {
        let pagination = self.coordinator.store().pagination();
        page_window(pagination.current_page, pagination.total_pages)
    }
}
