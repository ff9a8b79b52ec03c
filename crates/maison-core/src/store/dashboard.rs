// ── Dashboard store ──
//
// Collections, pagination, stats, the loaded-tab set, and in-flight
// counters. Mutated only by the coordinator's completion handlers.

use std::sync::Arc;

use dashmap::DashSet;
use tokio::sync::watch;

use maison_api::{Brand, DashboardStats, Member, PaginationInfo, Perfume};

use super::slot::Slot;
use crate::model::{LoadingStates, ResourceTag};
use crate::stream::SnapshotStream;

/// The perfume page currently held in memory.
///
/// Perfumes, pagination, and the search that produced them come from one
/// response and are always replaced together.
#[derive(Debug, Clone, PartialEq)]
pub struct PerfumeListing {
    pub perfumes: Vec<Perfume>,
    pub pagination: PaginationInfo,
    pub search: String,
}

impl PerfumeListing {
    pub(crate) fn initial(limit: u32) -> Self {
        Self {
            perfumes: Vec::new(),
            pagination: PaginationInfo::initial(limit),
            search: String::new(),
        }
    }

    /// Whether this listing already answers `(page, search)`.
    pub fn matches(&self, page: u32, search: &str) -> bool {
        self.pagination.current_page == page && self.search == search
    }
}

/// What an in-flight counter is counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadKey {
    Resource(ResourceTag),
    Stats,
}

#[derive(Debug, Clone, Copy, Default)]
struct InFlight {
    members: usize,
    brands: usize,
    perfumes: usize,
    stats: usize,
}

impl InFlight {
    fn counter(&mut self, key: LoadKey) -> &mut usize {
        match key {
            LoadKey::Resource(ResourceTag::Members) => &mut self.members,
            LoadKey::Resource(ResourceTag::Brands) => &mut self.brands,
            LoadKey::Resource(ResourceTag::Perfumes) => &mut self.perfumes,
            LoadKey::Stats => &mut self.stats,
        }
    }

    fn loading_states(&self) -> LoadingStates {
        LoadingStates {
            members: self.members > 0,
            brands: self.brands > 0,
            perfumes: self.perfumes > 0,
        }
    }
}

/// Owned dashboard state.
///
/// Reads are wait-free snapshots. Loading flags are derived from
/// per-key in-flight counters, so a flag stays up while any request
/// for that key is outstanding, and drops in the guard's `Drop`
/// regardless of how the request ended.
pub struct DashboardStore {
    pub(crate) members: Slot<Vec<Member>>,
    pub(crate) brands: Slot<Vec<Brand>>,
    pub(crate) perfumes: Slot<PerfumeListing>,
    pub(crate) stats: Slot<DashboardStats>,
    loaded: DashSet<ResourceTag>,
    in_flight: watch::Sender<InFlight>,
    loading: watch::Sender<LoadingStates>,
    stats_loading: watch::Sender<bool>,
}

impl DashboardStore {
    pub fn new(page_limit: u32) -> Self {
        let (in_flight, _) = watch::channel(InFlight::default());
        let (loading, _) = watch::channel(LoadingStates::default());
        let (stats_loading, _) = watch::channel(false);

        Self {
            members: Slot::new(Vec::new()),
            brands: Slot::new(Vec::new()),
            perfumes: Slot::new(PerfumeListing::initial(page_limit)),
            stats: Slot::new(DashboardStats::default()),
            loaded: DashSet::new(),
            in_flight,
            loading,
            stats_loading,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn members_snapshot(&self) -> Arc<Vec<Member>> {
        self.members.get()
    }

    pub fn brands_snapshot(&self) -> Arc<Vec<Brand>> {
        self.brands.get()
    }

    pub fn perfumes_snapshot(&self) -> Arc<PerfumeListing> {
        self.perfumes.get()
    }

    pub fn pagination(&self) -> PaginationInfo {
        self.perfumes.get().pagination
    }

    pub fn stats(&self) -> DashboardStats {
        *self.stats.get()
    }

    pub fn loading_states(&self) -> LoadingStates {
        *self.loading.borrow()
    }

    pub fn stats_loading(&self) -> bool {
        *self.stats_loading.borrow()
    }

    pub fn is_loaded(&self, tag: ResourceTag) -> bool {
        self.loaded.contains(&tag)
    }

    /// Loaded tags in a stable order.
    pub fn loaded_tabs(&self) -> Vec<ResourceTag> {
        let mut tags: Vec<ResourceTag> = self.loaded.iter().map(|t| *t).collect();
        tags.sort();
        tags
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_members(&self) -> SnapshotStream<Vec<Member>> {
        SnapshotStream::new(self.members.subscribe())
    }

    pub fn subscribe_brands(&self) -> SnapshotStream<Vec<Brand>> {
        SnapshotStream::new(self.brands.subscribe())
    }

    pub fn subscribe_perfumes(&self) -> SnapshotStream<PerfumeListing> {
        SnapshotStream::new(self.perfumes.subscribe())
    }

    pub fn subscribe_stats(&self) -> SnapshotStream<DashboardStats> {
        SnapshotStream::new(self.stats.subscribe())
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<LoadingStates> {
        self.loading.subscribe()
    }

    // ── Mutation (coordinator only) ──────────────────────────────────

    pub(crate) fn mark_loaded(&self, tag: ResourceTag) {
        self.loaded.insert(tag);
    }

    /// Raise the loading flag for `key` until the guard drops.
    pub(crate) fn begin(&self, key: LoadKey) -> LoadingGuard<'_> {
        self.adjust(key, true);
        LoadingGuard { store: self, key }
    }

    fn adjust(&self, key: LoadKey, up: bool) {
        self.in_flight.send_modify(|counts| {
            let counter = counts.counter(key);
            *counter = if up {
                counter.saturating_add(1)
            } else {
                counter.saturating_sub(1)
            };
            let states = counts.loading_states();
            self.loading.send_if_modified(|current| {
                let changed = *current != states;
                *current = states;
                changed
            });
            let stats_busy = counts.stats > 0;
            self.stats_loading.send_if_modified(|current| {
                let changed = *current != stats_busy;
                *current = stats_busy;
                changed
            });
        });
    }
}

/// Holds one unit of "in flight" for a key.
pub(crate) struct LoadingGuard<'a> {
    store: &'a DashboardStore,
    key: LoadKey,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.adjust(self.key, false);
    }
}
