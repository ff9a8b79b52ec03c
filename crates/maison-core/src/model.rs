// ── Domain-level types owned by the core ──
//
// Wire records live in `maison_api`; this module holds what the
// dashboard itself reasons about: resource tags, loading flags, user
// notices, and the perfume edit form.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use maison_api::{Concentration, Perfume, PerfumePayload, TargetAudience};

use crate::error::CoreError;
use crate::validation;

/// Identifies one in-memory collection and its endpoint family.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ResourceTag {
    #[default]
    Members,
    Brands,
    Perfumes,
}

/// Per-resource "request in flight" flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadingStates {
    pub members: bool,
    pub brands: bool,
    pub perfumes: bool,
}

impl LoadingStates {
    pub fn get(&self, tag: ResourceTag) -> bool {
        match tag {
            ResourceTag::Members => self.members,
            ResourceTag::Brands => self.brands,
            ResourceTag::Perfumes => self.perfumes,
        }
    }

    pub fn any(&self) -> bool {
        self.members || self.brands || self.perfumes
    }
}

// ── Notices ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-visible outcome (toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

// ── Mutations ────────────────────────────────────────────────────────

/// The two resource kinds the dashboard can create, edit, and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MutableResource {
    Brand,
    Perfume,
}

impl MutableResource {
    pub fn tag(self) -> ResourceTag {
        match self {
            Self::Brand => ResourceTag::Brands,
            Self::Perfume => ResourceTag::Perfumes,
        }
    }
}

/// Perfume edit form as the user fills it in: every field is text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfumeForm {
    pub perfume_name: String,
    pub uri: String,
    pub price: String,
    pub concentration: Concentration,
    pub description: String,
    pub ingredients: String,
    pub volume: String,
    pub target_audience: TargetAudience,
    /// Brand id.
    pub brand: String,
}

impl PerfumeForm {
    /// Pre-fill the form from an existing perfume.
    pub fn from_perfume(perfume: &Perfume) -> Self {
        Self {
            perfume_name: perfume.perfume_name.clone(),
            uri: perfume.image_uri.clone(),
            price: perfume.price.map(|p| p.to_string()).unwrap_or_default(),
            concentration: perfume
                .concentration
                .as_deref()
                .and_then(|c| c.parse().ok())
                .unwrap_or_default(),
            description: perfume.description.clone().unwrap_or_default(),
            ingredients: perfume.ingredients.clone().unwrap_or_default(),
            volume: perfume.volume.map(|v| v.to_string()).unwrap_or_default(),
            target_audience: perfume.target_audience.parse().unwrap_or_default(),
            brand: perfume
                .brand
                .as_ref()
                .map(|b| b.id().to_owned())
                .unwrap_or_default(),
        }
    }

    /// Validate and convert into the wire payload (numeric price/volume).
    pub fn to_payload(&self) -> Result<PerfumePayload, CoreError> {
        let errors = validation::perfume_form(self);
        if !errors.is_valid() {
            return Err(CoreError::ValidationFailed { errors });
        }
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|e| CoreError::Internal(format!("price: {e}")))?;
        let volume = self
            .volume
            .trim()
            .parse::<u32>()
            .map_err(|e| CoreError::Internal(format!("volume: {e}")))?;

        Ok(PerfumePayload {
            perfume_name: self.perfume_name.trim().to_owned(),
            uri: self.uri.trim().to_owned(),
            price,
            concentration: self.concentration,
            description: self.description.trim().to_owned(),
            ingredients: self.ingredients.trim().to_owned(),
            volume,
            target_audience: self.target_audience,
            brand: self.brand.clone(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use maison_api::BrandRef;

    use super::*;

    fn valid_form() -> PerfumeForm {
        PerfumeForm {
            perfume_name: "Aventus".into(),
            uri: "https://img.example.com/a.jpg".into(),
            price: " 320.5 ".into(),
            concentration: Concentration::Edp,
            description: "Smoky pineapple and birch".into(),
            ingredients: "pineapple, birch".into(),
            volume: "100".into(),
            target_audience: TargetAudience::Male,
            brand: "b1".into(),
        }
    }

    #[test]
    fn resource_tag_parses_and_displays_lowercase() {
        assert_eq!("Perfumes".parse::<ResourceTag>().unwrap(), ResourceTag::Perfumes);
        assert_eq!(ResourceTag::Brands.to_string(), "brands");
        assert_eq!(ResourceTag::default(), ResourceTag::Members);
    }

    #[test]
    fn payload_converts_numeric_fields() {
        let payload = valid_form().to_payload().unwrap();
        assert!((payload.price - 320.5).abs() < f64::EPSILON);
        assert_eq!(payload.volume, 100);
        assert_eq!(payload.brand, "b1");
    }

    #[test]
    fn invalid_form_reports_field_errors() {
        let mut form = valid_form();
        form.volume = "0".into();
        form.description = "short".into();
        let err = form.to_payload().unwrap_err();
        let errors = err.field_errors().unwrap();
        assert!(errors.get("volume").is_some());
        assert!(errors.get("description").is_some());
        assert!(errors.get("price").is_none());
    }

    #[test]
    fn form_prefills_from_perfume() {
        let perfume = Perfume {
            id: "p1".into(),
            perfume_name: "Oud Wood".into(),
            image_uri: "https://img/oud.jpg".into(),
            target_audience: "unisex".into(),
            brand_name: "Tom Ford".into(),
            concentration: Some("EDT".into()),
            price: Some(250.0),
            volume: Some(50),
            description: None,
            ingredients: Some("oud".into()),
            brand: Some(BrandRef::Id("b4".into())),
        };
        let form = PerfumeForm::from_perfume(&perfume);
        assert_eq!(form.price, "250");
        assert_eq!(form.volume, "50");
        assert_eq!(form.concentration, Concentration::Edt);
        assert_eq!(form.brand, "b4");
        assert_eq!(form.description, "");
    }
}
