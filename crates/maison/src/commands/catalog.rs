//! Public catalog handlers: browse, detail, review.

use std::fmt::Write as _;

use tabled::Tabled;

use maison_core::{PerfumeDetail, PerfumeSummary};

use crate::cli::{CatalogArgs, GlobalOpts, OutputFormat, ReviewArgs};
use crate::error::CliError;
use crate::output;

use super::Session;
use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Fragrance")]
    name: String,
    #[tabled(rename = "Maison")]
    brand: String,
    #[tabled(rename = "Conc.")]
    concentration: String,
    #[tabled(rename = "For")]
    audience: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl From<&PerfumeSummary> for CatalogRow {
    fn from(p: &PerfumeSummary) -> Self {
        Self {
            id: p.id.clone(),
            name: p.perfume_name.clone(),
            brand: p.brand_name.clone(),
            concentration: p.concentration.clone().unwrap_or_default(),
            audience: p.target_audience.clone(),
            price: output::price(p.price),
        }
    }
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn browse(args: CatalogArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let catalog = session.catalog();
    let search = args.search.as_deref().unwrap_or_default().trim();
    let brand = args.brand.as_deref().unwrap_or_default();
    let page = catalog.browse(args.page.max(1), search, brand).await?;

    let out = output::render_list(
        global.output,
        &page.perfumes,
        |p| CatalogRow::from(p),
        |p| p.id.clone(),
    )?;
    output::print_output(&out, global.quiet);

    if global.output == OutputFormat::Table && !global.quiet {
        if page.perfumes.is_empty() {
            eprintln!("No fragrances match these filters.");
        }
        eprintln!("{}", util::pager_line(&page.pagination));
        let brands = catalog.brand_names();
        if !brands.is_empty() {
            eprintln!("Maisons: {}", brands.join(", "));
        }
    }
    Ok(())
}

fn perfume_detail(detail: &PerfumeDetail) -> String {
    let p = &detail.perfume;
    let mut out = String::new();
    let _ = writeln!(out, "{} by {}", p.perfume_name, p.brand_name);
    let _ = writeln!(out, "ID:            {}", p.id);
    if let Some(ref c) = p.concentration {
        let _ = writeln!(out, "Concentration: {c}");
    }
    let _ = writeln!(out, "For:           {}", p.target_audience);
    if p.price.is_some() {
        let _ = writeln!(out, "Price:         {}", output::price(p.price));
    }
    if let Some(volume) = p.volume {
        let _ = writeln!(out, "Volume:        {volume} ml");
    }
    let _ = writeln!(out, "Image:         {}", p.image_uri);
    if let Some(ref d) = p.description {
        let _ = writeln!(out, "\n{d}");
    }
    if let Some(ref i) = p.ingredients {
        let _ = writeln!(out, "\nNotes: {i}");
    }

    match detail.average_rating() {
        Some(avg) => {
            let _ = writeln!(out, "\nReviews ({}, avg {avg:.1}/5):", detail.comments.len());
            for c in &detail.comments {
                let stars = "★".repeat(usize::from(c.rating));
                let _ = writeln!(out, "  {stars} {}: {}", c.author.name, c.content);
            }
        }
        None => {
            let _ = writeln!(out, "\nNo reviews yet.");
        }
    }
    out.trim_end().to_owned()
}

pub async fn show(id: &str, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    let detail = session.catalog().perfume(id).await?;
    let out = output::render_single(global.output, &detail, perfume_detail, |d| d.perfume.id.clone())?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn review(args: ReviewArgs, session: &Session, global: &GlobalOpts) -> Result<(), CliError> {
    session.require_token()?;
    let response = session
        .catalog()
        .add_review(&args.id, args.rating, &args.content)
        .await?;
    if !global.quiet {
        eprintln!("{}", response.message);
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn detail(comments: serde_json::Value) -> PerfumeDetail {
        serde_json::from_value(serde_json::json!({
            "_id": "p1", "perfumeName": "Aventus", "uri": "https://img/a.jpg",
            "targetAudience": "male", "brand": { "_id": "b1", "brandName": "Creed" },
            "price": 320, "volume": 100, "concentration": "EDP",
            "comments": comments
        }))
        .unwrap()
    }

    #[test]
    fn detail_without_reviews() {
        let text = perfume_detail(&detail(serde_json::json!([])));
        assert!(text.starts_with("Aventus by Creed"));
        assert!(text.contains("Price:         $320.00"));
        assert!(text.ends_with("No reviews yet."));
    }

    #[test]
    fn detail_with_reviews_shows_average() {
        let d = detail(serde_json::json!([
            { "_id": "c1", "rating": 5, "content": "Iconic", "author": { "_id": "m1", "name": "Ana" } },
            { "_id": "c2", "rating": 4, "content": "Smoky", "author": { "_id": "m2", "name": "Bo" } }
        ]));
        let text = perfume_detail(&d);
        assert!(text.contains("Reviews (2, avg 4.5/5):"));
        assert!(text.contains("★★★★★ Ana: Iconic"));
    }
}
