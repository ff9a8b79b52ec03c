//! Data coordination layer between `maison-api` and UI consumers (CLI).
//!
//! - **[`Coordinator`]**: Owns the admin dashboard's in-memory collections
//!   (members, brands, perfumes), per-resource loading flags, the loaded-tab
//!   set, perfume pagination, and aggregate stats. Lazy-loads a resource the
//!   first time its tab is shown, re-syncs after create/update, filters
//!   locally after delete.
//!
//! - **[`ViewSync`]**: Binds the addressable view state (tab, page, search)
//!   to the coordinator through dependency-tracked effects, and round-trips
//!   that state through a URL query string.
//!
//! - **[`Catalog`]**: Storefront browsing: server-side search, brand filter
//!   and pagination over the public perfume listing, plus reviews.
//!
//! - **[`validation`]**: Field rules and whole-form validity for every form
//!   that feeds the gateway.
//!
//! All network access goes through the [`Gateway`] trait, implemented for
//! [`maison_api::ApiClient`].

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod gateway;
pub mod model;
pub mod store;
pub mod stream;
pub mod validation;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use catalog::{Catalog, CatalogPage};
pub use config::{ClientConfig, TlsVerification};
pub use coordinator::{Coordinator, DashboardOptions};
pub use error::CoreError;
pub use gateway::Gateway;
pub use model::{LoadingStates, MutableResource, Notice, NoticeLevel, PerfumeForm, ResourceTag};
pub use store::{DashboardStore, PerfumeListing};
pub use stream::{SnapshotStream, SnapshotWatchStream};
pub use validation::FormErrors;
pub use view::{PageItem, SortField, SortOrder, SortState, ViewState, ViewSync, page_window};

// Wire types are the canonical schema; re-export them for consumers.
pub use maison_api::{
    ApiClient, AuthResponse, AuthUser, Brand, BrandRef, Comment, Concentration, DashboardStats,
    Member, MemberProfile, MessageResponse, PaginationInfo, PasswordChange, Perfume,
    PerfumeDetail, PerfumePage, PerfumeSummary, ProfileUpdate, RegisterRequest, TargetAudience,
};

#[cfg(test)]
pub(crate) mod test_support;
