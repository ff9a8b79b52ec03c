// ── Dashboard state storage ──
//
// Owned, observable state for the admin dashboard. Every value sits
// behind a `watch` channel so consumers can snapshot or subscribe, and
// every replacement is a single send (no field-by-field merging).

mod dashboard;
mod slot;

pub use dashboard::{DashboardStore, PerfumeListing};
pub(crate) use dashboard::LoadKey;
pub(crate) use slot::Slot;
