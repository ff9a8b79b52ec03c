//! Dashboard counters.

use maison_core::DashboardStats;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Session;
use super::util;

pub(crate) fn stats_detail(s: &DashboardStats) -> String {
    [
        format!("Members:        {}", s.members_count),
        format!("Maisons:        {}", s.brands_count),
        format!("Fragrances:     {}", s.perfumes_count),
        format!("Active members: {}", s.active_clients_count),
    ]
    .join("\n")
}

pub async fn handle(session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let coordinator = session.coordinator()?;
    let mut notices = coordinator.subscribe_notices();

    coordinator.fetch_stats().await;
    util::settle(&mut notices, global)?;

    let stats = coordinator.store().stats();
    let out = output::render_single(global.output, &stats, stats_detail, |s| {
        format!(
            "{} {} {} {}",
            s.members_count, s.brands_count, s.perfumes_count, s.active_clients_count
        )
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
