//! Maison (brand) handlers.

use tabled::Tabled;

use maison_core::{Brand, MutableResource, ResourceTag, view::filter};

use crate::cli::{BrandsArgs, BrandsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::Session;
use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct BrandRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Maison")]
    name: String,
}

impl From<&Brand> for BrandRow {
    fn from(b: &Brand) -> Self {
        Self {
            id: b.id.clone(),
            name: b.brand_name.clone(),
        }
    }
}

pub(crate) fn render(brands: &[Brand], global: &GlobalOpts) -> Result<String, CliError> {
    output::render_list(
        global.output,
        brands,
        |b| BrandRow::from(b),
        |b| b.id.clone(),
    )
}

fn render_saved(brand: &Brand, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(
        global.output,
        brand,
        |b| format!("{} ({})", b.brand_name, b.id),
        |b| b.id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: BrandsArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let coordinator = session.coordinator()?;
    let mut notices = coordinator.subscribe_notices();

    match args.command {
        BrandsCommand::List(table) => {
            let sort = util::parse_sort(table.sort.as_deref())?;
            coordinator.load_tab_data(ResourceTag::Brands).await;
            util::settle(&mut notices, global)?;

            let snapshot = coordinator.store().brands_snapshot();
            let mut rows = filter::brands(&snapshot, table.filter.as_deref().unwrap_or_default());
            sort.unwrap_or_default().sort_brands(&mut rows);

            output::print_output(&render(&rows, global)?, global.quiet);
            Ok(())
        }

        BrandsCommand::Create { name } => {
            let brand = coordinator.submit_brand(&name, None).await?;
            util::report(&mut notices, global);
            render_saved(&brand, global)
        }

        BrandsCommand::Update { id, name } => {
            let brand = coordinator.submit_brand(&name, Some(&id)).await?;
            util::report(&mut notices, global);
            render_saved(&brand, global)
        }

        BrandsCommand::Delete { id } => {
            if !util::confirm(
                &format!("Remove maison '{id}' from the registry?"),
                global.yes,
            )? {
                return Ok(());
            }
            if coordinator.delete(MutableResource::Brand, &id).await {
                util::report(&mut notices, global);
                Ok(())
            } else {
                util::settle(&mut notices, global)
            }
        }
    }
}
