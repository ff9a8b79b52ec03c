// ── View-state synchronization ──
//
// Addressable view state (tab, page, search) and the effects that keep
// the coordinator in step with it, plus the client-side helpers the
// tables use: filtering, sorting, and the pagination window.

pub mod filter;
mod pager;
mod sort;
mod state;
mod sync;

pub use pager::{PageItem, page_window};
pub use sort::{SortField, SortOrder, SortState};
pub use state::ViewState;
pub use sync::ViewSync;
