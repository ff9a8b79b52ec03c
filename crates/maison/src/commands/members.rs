//! Member (collector) handlers.

use tabled::Tabled;

use maison_core::{Member, ResourceTag, view::filter};

use crate::cli::{GlobalOpts, MembersArgs, MembersCommand};
use crate::error::CliError;
use crate::output;

use super::Session;
use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct MemberRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Born")]
    year_of_birth: i32,
    #[tabled(rename = "Gender")]
    gender: &'static str,
    #[tabled(rename = "Admin")]
    admin: &'static str,
}

impl From<&Member> for MemberRow {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            email: m.email.clone(),
            year_of_birth: m.year_of_birth,
            gender: if m.is_male { "Male" } else { "Female" },
            admin: if m.is_admin { "yes" } else { "" },
        }
    }
}

pub(crate) fn render(members: &[Member], global: &GlobalOpts) -> Result<String, CliError> {
    output::render_list(
        global.output,
        members,
        |m| MemberRow::from(m),
        |m| m.id.clone(),
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: MembersArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let coordinator = session.coordinator()?;
    let mut notices = coordinator.subscribe_notices();

    match args.command {
        MembersCommand::List(table) => {
            let sort = util::parse_sort(table.sort.as_deref())?;
            coordinator.load_tab_data(ResourceTag::Members).await;
            util::settle(&mut notices, global)?;

            let snapshot = coordinator.store().members_snapshot();
            let mut rows = filter::members(&snapshot, table.filter.as_deref().unwrap_or_default());
            sort.unwrap_or_default().sort_members(&mut rows);

            output::print_output(&render(&rows, global)?, global.quiet);
            Ok(())
        }
    }
}
