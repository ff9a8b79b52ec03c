// Catalog API wire types
//
// The server is a document store that is loose about field names: ids come
// as `_id`, perfume names sometimes as `name`, brands either as an id or as
// an embedded document. All of that is normalized here, once, so consumers
// only ever see the canonical shapes below. Serialization always emits the
// canonical camelCase names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// ── Members ──────────────────────────────────────────────────────────

/// A registered collector, as listed by `GET /collectors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename(deserialize = "YOB"), alias = "yearOfBirth", default)]
    pub year_of_birth: i32,
    /// `gender: true` on the wire means male.
    #[serde(rename(deserialize = "gender"), alias = "isMale", default)]
    pub is_male: bool,
    #[serde(default)]
    pub is_admin: bool,
}

/// The signed-in member's own profile (`GET /members/profile`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename(deserialize = "YOB"), alias = "yearOfBirth", default)]
    pub year_of_birth: i32,
    #[serde(rename(deserialize = "gender"), alias = "isMale", default)]
    pub is_male: bool,
}

/// Partial profile update. Absent fields are left untouched server-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "YOB", skip_serializing_if = "Option::is_none")]
    pub year_of_birth: Option<i32>,
    #[serde(rename = "gender", skip_serializing_if = "Option::is_none")]
    pub is_male: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Aggregate counters shown on the admin dashboard.
///
/// Computed by the server; never derived from collection lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub members_count: u64,
    #[serde(default)]
    pub brands_count: u64,
    #[serde(default)]
    pub perfumes_count: u64,
    #[serde(default)]
    pub active_clients_count: u64,
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(rename = "YOB")]
    pub year_of_birth: i32,
    #[serde(rename = "gender")]
    pub is_male: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    pub access_token: String,
    pub user: AuthUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Generic `{ "message": "..." }` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

// ── Brands ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub brand_name: String,
}

/// Body for brand create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInput {
    pub brand_name: String,
}

/// A perfume's brand: either a bare id or the embedded brand document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrandRef {
    Embedded(Brand),
    Id(String),
}

impl BrandRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Embedded(b) => &b.id,
            Self::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Embedded(b) => Some(&b.brand_name),
            Self::Id(_) => None,
        }
    }
}

// ── Perfumes ─────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Concentration {
    #[default]
    #[serde(rename = "EDP")]
    #[strum(to_string = "EDP")]
    Edp,
    #[serde(rename = "EDT")]
    #[strum(to_string = "EDT")]
    Edt,
    Extrait,
    Cologne,
}

impl Concentration {
    pub fn label(self) -> &'static str {
        match self {
            Self::Edp => "Eau de Parfum",
            Self::Edt => "Eau de Toilette",
            Self::Extrait => "Extrait de Parfum",
            Self::Cologne => "Cologne",
        }
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TargetAudience {
    #[default]
    Unisex,
    Male,
    Female,
}

impl TargetAudience {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unisex => "Unisex",
            Self::Male => "Masculine",
            Self::Female => "Feminine",
        }
    }
}

/// Every field the server may send for a perfume, in any projection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPerfume {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    #[serde(default)]
    perfume_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, alias = "imageUri")]
    uri: Option<String>,
    #[serde(default)]
    target_audience: Option<String>,
    #[serde(default)]
    brand_name: Option<String>,
    #[serde(default)]
    brand: Option<BrandRef>,
    #[serde(default)]
    concentration: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    volume: Option<u32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    ingredients: Option<String>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl RawPerfume {
    fn display_name(&mut self) -> String {
        self.perfume_name
            .take()
            .or_else(|| self.name.take())
            .unwrap_or_default()
    }

    fn resolved_brand_name(&mut self) -> String {
        self.brand_name
            .take()
            .or_else(|| {
                self.brand
                    .as_ref()
                    .and_then(BrandRef::name)
                    .map(str::to_owned)
            })
            .unwrap_or_default()
    }
}

/// Storefront list projection (`GET /perfumes` on the public catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPerfume")]
pub struct PerfumeSummary {
    pub id: String,
    pub perfume_name: String,
    pub image_uri: String,
    pub target_audience: String,
    pub brand_name: String,
    pub concentration: Option<String>,
    pub price: Option<f64>,
}

impl From<RawPerfume> for PerfumeSummary {
    fn from(mut raw: RawPerfume) -> Self {
        Self {
            perfume_name: raw.display_name(),
            brand_name: raw.resolved_brand_name(),
            id: raw.id,
            image_uri: raw.uri.unwrap_or_default(),
            target_audience: raw.target_audience.unwrap_or_default(),
            concentration: raw.concentration,
            price: raw.price,
        }
    }
}

/// Admin projection: the list item plus everything the edit form needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawPerfume")]
pub struct Perfume {
    pub id: String,
    pub perfume_name: String,
    pub image_uri: String,
    pub target_audience: String,
    pub brand_name: String,
    pub concentration: Option<String>,
    pub price: Option<f64>,
    pub volume: Option<u32>,
    pub description: Option<String>,
    pub ingredients: Option<String>,
    pub brand: Option<BrandRef>,
}

impl From<RawPerfume> for Perfume {
    fn from(mut raw: RawPerfume) -> Self {
        Self {
            perfume_name: raw.display_name(),
            brand_name: raw.resolved_brand_name(),
            id: raw.id,
            image_uri: raw.uri.unwrap_or_default(),
            target_audience: raw.target_audience.unwrap_or_default(),
            concentration: raw.concentration,
            price: raw.price,
            volume: raw.volume,
            description: raw.description,
            ingredients: raw.ingredients,
            brand: raw.brand,
        }
    }
}

/// Detail projection (`GET /perfumes/:id`) with its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPerfume")]
pub struct PerfumeDetail {
    #[serde(flatten)]
    pub perfume: Perfume,
    pub comments: Vec<Comment>,
}

impl From<RawPerfume> for PerfumeDetail {
    fn from(mut raw: RawPerfume) -> Self {
        let comments = std::mem::take(&mut raw.comments);
        Self {
            perfume: Perfume::from(raw),
            comments,
        }
    }
}

impl PerfumeDetail {
    /// Mean review rating, or `None` when there are no reviews.
    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    pub fn average_rating(&self) -> Option<f64> {
        if self.comments.is_empty() {
            return None;
        }
        let total: u32 = self.comments.iter().map(|c| u32::from(c.rating)).sum();
        Some(f64::from(total) / self.comments.len() as f64)
    }
}

/// Body for perfume create and update. Price and volume are numeric here
/// even though the edit form collects them as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfumePayload {
    pub perfume_name: String,
    pub uri: String,
    pub price: f64,
    pub concentration: Concentration,
    pub description: String,
    pub ingredients: String,
    pub volume: u32,
    pub target_audience: TargetAudience,
    /// Brand id.
    pub brand: String,
}

// ── Reviews ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    pub rating: u8,
    pub content: String,
    pub author: CommentAuthor,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    #[serde(rename(deserialize = "_id"), alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentInput {
    pub rating: u8,
    pub content: String,
}

// ── Pagination ───────────────────────────────────────────────────────

/// Server-computed pagination block. Never computed client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub limit: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PaginationInfo {
    /// Placeholder shown before the first page arrives.
    pub fn initial(limit: u32) -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_count: 0,
            limit,
            has_next_page: false,
            has_prev_page: false,
        }
    }
}

/// One page of perfumes plus its pagination block, from a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerfumePage<T> {
    pub perfumes: Vec<T>,
    pub pagination: PaginationInfo,
}

/// Query for `GET /perfumes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfumeQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub brand_name: Option<String>,
}

impl PerfumeQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            search: None,
            brand_name: None,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_brand(mut self, brand_name: impl Into<String>) -> Self {
        self.brand_name = Some(brand_name.into());
        self
    }

    /// Query pairs in wire order; empty search/brand values are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_owned()));
        }
        if let Some(brand) = self.brand_name.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("brandName", brand.to_owned()));
        }
        pairs
    }
}
