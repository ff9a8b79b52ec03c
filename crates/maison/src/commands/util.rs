//! Shared helpers for command handlers.

use tokio::sync::broadcast::{self, error::TryRecvError};

use maison_core::{Notice, NoticeLevel, PageItem, PaginationInfo, SortState, page_window};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)
}

/// Map a dialoguer / rpassword failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Prompt(e.to_string())
}

// ── Notices ──────────────────────────────────────────────────────────

/// Everything published since the receiver was created.
pub fn drain_notices(rx: &mut broadcast::Receiver<Notice>) -> Vec<Notice> {
    let mut notices = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(notice) => notices.push(notice),
            Err(TryRecvError::Lagged(_)) => {}
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    notices
}

/// Print pending notices. Returns the first error message, if any.
pub fn report(rx: &mut broadcast::Receiver<Notice>, global: &GlobalOpts) -> Option<String> {
    let notices = drain_notices(rx);
    output::print_notices(&notices, global);
    notices
        .into_iter()
        .find(|n| n.level == NoticeLevel::Error)
        .map(|n| n.message)
}

/// Print pending notices and fail on the first error notice. Used after
/// fetches, which never return errors themselves.
pub fn settle(rx: &mut broadcast::Receiver<Notice>, global: &GlobalOpts) -> Result<(), CliError> {
    match report(rx, global) {
        Some(message) => Err(CliError::OperationFailed { message }),
        None => Ok(()),
    }
}

// ── Tables ───────────────────────────────────────────────────────────

pub fn parse_sort(spec: Option<&str>) -> Result<Option<SortState>, CliError> {
    spec.map(|s| {
        SortState::parse(s).ok_or_else(|| CliError::Validation {
            field: "sort".into(),
            reason: format!("expected field[:asc|desc], got '{s}'"),
        })
    })
    .transpose()
}

/// Pager line such as `‹ 1 … 4 [5] 6 … 12 ›  (118 total)`.
pub fn pager_line(pagination: &PaginationInfo) -> String {
    let items: Vec<String> = page_window(pagination.current_page, pagination.total_pages)
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == pagination.current_page => format!("[{n}]"),
            PageItem::Page(n) => n.to_string(),
            PageItem::Gap => "…".to_owned(),
        })
        .collect();
    let prev = if pagination.has_prev_page { "‹ " } else { "" };
    let next = if pagination.has_next_page { " ›" } else { "" };
    format!(
        "{prev}{}{next}  ({} total)",
        items.join(" "),
        pagination.total_count
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use maison_core::{SortField, SortOrder};

    use super::*;

    fn pagination(current: u32, total: u32) -> PaginationInfo {
        PaginationInfo {
            current_page: current,
            total_pages: total,
            total_count: 118,
            limit: 10,
            has_next_page: current < total,
            has_prev_page: current > 1,
        }
    }

    #[test]
    fn pager_marks_current_and_gaps() {
        assert_eq!(pager_line(&pagination(5, 12)), "‹ 1 … 4 [5] 6 … 12 ›  (118 total)");
        assert_eq!(pager_line(&pagination(1, 2)), "[1] 2 ›  (118 total)");
    }

    #[test]
    fn sort_flag_parsing() {
        assert_eq!(parse_sort(None).unwrap(), None);
        assert_eq!(
            parse_sort(Some("price:desc")).unwrap(),
            Some(SortState::new(SortField::Price, SortOrder::Desc))
        );
        assert!(parse_sort(Some("colour")).is_err());
    }

    #[test]
    fn drain_collects_in_order() {
        let (tx, mut rx) = broadcast::channel(8);
        tx.send(Notice::success("a")).unwrap();
        tx.send(Notice::error("b")).unwrap();
        let notices = drain_notices(&mut rx);
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[1].message, "b");
        assert!(drain_notices(&mut rx).is_empty());
    }
}
