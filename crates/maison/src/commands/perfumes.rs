//! Fragrance handlers.

use tabled::Tabled;

use maison_core::{
    ApiClient, Concentration, Coordinator, MutableResource, Perfume, PerfumeForm, ResourceTag,
    TargetAudience, view::filter,
};

use crate::cli::{GlobalOpts, OutputFormat, PerfumeFields, PerfumesArgs, PerfumesCommand};
use crate::error::CliError;
use crate::output;

use super::Session;
use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct PerfumeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fragrance")]
    name: String,
    #[tabled(rename = "Maison")]
    brand: String,
    #[tabled(rename = "Conc.")]
    concentration: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&Perfume> for PerfumeRow {
    fn from(p: &Perfume) -> Self {
        Self {
            id: p.id.clone(),
            name: p.perfume_name.clone(),
            brand: p.brand_name.clone(),
            concentration: p.concentration.clone().unwrap_or_default(),
            volume: p.volume.map(|v| format!("{v} ml")).unwrap_or_default(),
            price: output::price(p.price),
        }
    }
}

pub(crate) fn render(perfumes: &[Perfume], global: &GlobalOpts) -> Result<String, CliError> {
    output::render_list(
        global.output,
        perfumes,
        |p| PerfumeRow::from(p),
        |p| p.id.clone(),
    )
}

fn render_saved(perfume: &Perfume, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(
        global.output,
        perfume,
        |p| format!("{} by {} ({})", p.perfume_name, p.brand_name, p.id),
        |p| p.id.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Form building ───────────────────────────────────────────────────

/// Overlay the given flags onto `form`. Enum fields are parsed here;
/// everything else is validated by the coordinator on submit.
fn apply_fields(form: &mut PerfumeForm, fields: PerfumeFields) -> Result<(), CliError> {
    if let Some(v) = fields.name {
        form.perfume_name = v;
    }
    if let Some(v) = fields.image_url {
        form.uri = v;
    }
    if let Some(v) = fields.price {
        form.price = v;
    }
    if let Some(v) = fields.volume {
        form.volume = v;
    }
    if let Some(v) = fields.description {
        form.description = v;
    }
    if let Some(v) = fields.ingredients {
        form.ingredients = v;
    }
    if let Some(v) = fields.brand {
        form.brand = v;
    }
    if let Some(v) = fields.concentration {
        form.concentration = v.parse::<Concentration>().map_err(|_| CliError::Validation {
            field: "concentration".into(),
            reason: format!("expected EDP, EDT, Extrait, or Cologne, got '{v}'"),
        })?;
    }
    if let Some(v) = fields.audience {
        form.target_audience = v.parse::<TargetAudience>().map_err(|_| CliError::Validation {
            field: "audience".into(),
            reason: format!("expected unisex, male, or female, got '{v}'"),
        })?;
    }
    Ok(())
}

/// Accept a maison name where an id is expected.
async fn resolve_brand(coordinator: &Coordinator<ApiClient>, form: &mut PerfumeForm) {
    if form.brand.trim().is_empty() {
        return;
    }
    coordinator.ensure_brands_loaded().await;
    let brands = coordinator.store().brands_snapshot();
    if brands.iter().any(|b| b.id == form.brand) {
        return;
    }
    let wanted = form.brand.trim().to_lowercase();
    if let Some(brand) = brands.iter().find(|b| b.brand_name.to_lowercase() == wanted) {
        form.brand.clone_from(&brand.id);
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(args: PerfumesArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let coordinator = session.coordinator()?;
    let mut notices = coordinator.subscribe_notices();

    match args.command {
        PerfumesCommand::List {
            page,
            search,
            table,
        } => {
            let sort = util::parse_sort(table.sort.as_deref())?;
            let page = page.max(1);
            let search = search.as_deref().unwrap_or_default().trim();
            // The empty listing already claims page 1 unfiltered, so that
            // view goes through the tab load like the dashboard does.
            if page == 1 && search.is_empty() {
                coordinator.load_tab_data(ResourceTag::Perfumes).await;
            } else {
                coordinator.fetch_perfume_view(page, search).await;
            }
            util::settle(&mut notices, global)?;

            let listing = coordinator.store().perfumes_snapshot();
            let mut rows = filter::perfumes(
                &listing.perfumes,
                table.filter.as_deref().unwrap_or_default(),
            );
            sort.unwrap_or_default().sort_perfumes(&mut rows);

            output::print_output(&render(&rows, global)?, global.quiet);
            if global.output == OutputFormat::Table && !global.quiet {
                eprintln!("{}", util::pager_line(&listing.pagination));
            }
            Ok(())
        }

        PerfumesCommand::Create(fields) => {
            let mut form = PerfumeForm::default();
            apply_fields(&mut form, fields)?;
            resolve_brand(&coordinator, &mut form).await;

            let perfume = coordinator.submit_perfume(&form, None).await?;
            util::report(&mut notices, global);
            render_saved(&perfume, global)
        }

        PerfumesCommand::Update { id, fields } => {
            let Some(detail) = coordinator.perfume_details(&id).await else {
                util::report(&mut notices, global);
                return Err(CliError::NotFound {
                    message: format!("fragrance '{id}' could not be loaded"),
                    list_command: "perfumes list".into(),
                });
            };
            let mut form = PerfumeForm::from_perfume(&detail.perfume);
            apply_fields(&mut form, fields)?;
            resolve_brand(&coordinator, &mut form).await;

            let perfume = coordinator.submit_perfume(&form, Some(&id)).await?;
            util::report(&mut notices, global);
            render_saved(&perfume, global)
        }

        PerfumesCommand::Delete { id } => {
            if !util::confirm(
                &format!("Remove fragrance '{id}' from the collection?"),
                global.yes,
            )? {
                return Ok(());
            }
            if coordinator.delete(MutableResource::Perfume, &id).await {
                util::report(&mut notices, global);
                Ok(())
            } else {
                util::settle(&mut notices, global)
            }
        }
    }
}
