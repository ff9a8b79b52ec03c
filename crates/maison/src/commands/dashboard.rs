//! Administrator dashboard: one view location rendered as stats plus
//! the active tab's table.

use serde::Serialize;

use maison_core::{
    Brand, DashboardStats, Member, PaginationInfo, Perfume, ResourceTag, ViewState, ViewSync,
};

use crate::cli::{DashboardArgs, GlobalOpts, OutputFormat, TabArg};
use crate::error::CliError;

use super::util;
use super::{Session, brands, members, perfumes, stats};

impl From<TabArg> for ResourceTag {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Members => Self::Members,
            TabArg::Brands => Self::Brands,
            TabArg::Perfumes => Self::Perfumes,
        }
    }
}

/// What the dashboard shows for one location.
#[derive(Debug, Serialize)]
struct DashboardView {
    location: String,
    stats: DashboardStats,
    tab: ResourceTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<Vec<Member>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brands: Option<Vec<Brand>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    perfumes: Option<Vec<Perfume>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<PaginationInfo>,
}

/// `--view` first, then the explicit flags in tab, search, page order so
/// each one's reset rules apply.
fn initial_state(args: &DashboardArgs) -> ViewState {
    let mut state = ViewState::from_query(args.view.as_deref().unwrap_or_default());
    if let Some(tab) = args.tab {
        state = state.with_tab(tab.into());
    }
    if let Some(ref search) = args.search {
        state = state.with_search(search.trim());
    }
    if let Some(page) = args.page {
        state = state.with_page(page);
    }
    state
}

fn table_detail(view: &DashboardView, global: &GlobalOpts) -> Result<String, CliError> {
    let table = if let Some(ref rows) = view.members {
        members::render(rows, global)?
    } else if let Some(ref rows) = view.brands {
        brands::render(rows, global)?
    } else if let Some(ref rows) = view.perfumes {
        perfumes::render(rows, global)?
    } else {
        String::new()
    };

    let mut out = format!(
        "{}\n\nLocation: ?{}\n{}",
        stats::stats_detail(&view.stats),
        view.location,
        table
    );
    if let Some(ref pagination) = view.pagination {
        out.push('\n');
        out.push_str(&util::pager_line(pagination));
    }
    Ok(out)
}

pub async fn handle(args: DashboardArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let sort = util::parse_sort(args.sort.as_deref())?;
    let coordinator = session.coordinator()?;
    let mut notices = coordinator.subscribe_notices();

    let mut sync = ViewSync::new(coordinator.clone(), initial_state(&args));
    if let Some(sort) = sort {
        sync.set_sort(sync.state().tab, sort);
    }
    sync.mount().await;
    util::settle(&mut notices, global)?;

    let tab = sync.state().tab;
    let view = DashboardView {
        location: sync.location(),
        stats: coordinator.store().stats(),
        tab,
        members: (tab == ResourceTag::Members).then(|| sync.visible_members()),
        brands: (tab == ResourceTag::Brands).then(|| sync.visible_brands()),
        perfumes: (tab == ResourceTag::Perfumes).then(|| sync.visible_perfumes()),
        pagination: (tab == ResourceTag::Perfumes).then(|| coordinator.store().pagination()),
    };

    let out = match global.output {
        OutputFormat::Table => table_detail(&view, global)?,
        _ => crate::output::render_single(
            global.output,
            &view,
            |_| String::new(),
            |v| v.location.clone(),
        )?,
    };
    crate::output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    fn args(argv: &[&str]) -> DashboardArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Command::Dashboard(args) => args,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn view_location_is_parsed() {
        let state = initial_state(&args(&["maison", "dashboard", "--view", "tab=perfumes&page=3&q=oud"]));
        assert_eq!(state.tab, ResourceTag::Perfumes);
        assert_eq!(state.page, 3);
        assert_eq!(state.search, "oud");
    }

    #[test]
    fn tab_flag_resets_page_and_search() {
        let state = initial_state(&args(&[
            "maison", "dashboard", "--view", "tab=perfumes&page=3&q=oud", "--tab", "brands",
        ]));
        assert_eq!(state.tab, ResourceTag::Brands);
        assert_eq!(state.page, 1);
        assert!(state.search.is_empty());
    }

    #[test]
    fn page_flag_applies_after_search() {
        let state = initial_state(&args(&[
            "maison", "dashboard", "--tab", "perfumes", "--search", "rose", "--page", "2",
        ]));
        assert_eq!(state.page, 2);
        assert_eq!(state.search, "rose");
    }
}
