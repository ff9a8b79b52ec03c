// Table sort state and client-side ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use maison_api::{Brand, Member, Perfume};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flip(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Column a table can be ordered by. Fields a table does not have fall
/// back to ordering by name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SortField {
    #[default]
    Name,
    Email,
    #[strum(to_string = "yearOfBirth", serialize = "year")]
    YearOfBirth,
    Brand,
    Price,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}

impl SortState {
    pub fn new(sort_by: SortField, sort_order: SortOrder) -> Self {
        Self {
            sort_by,
            sort_order,
        }
    }

    /// Header click: same field flips the order, another field starts
    /// ascending.
    pub fn select(&mut self, field: SortField) {
        if self.sort_by == field {
            self.sort_order = self.sort_order.flip();
        } else {
            self.sort_by = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Parse `field` or `field:asc|desc`.
    pub fn parse(spec: &str) -> Option<Self> {
        let (field, order) = match spec.split_once(':') {
            Some((field, order)) => (field, order.parse().ok()?),
            None => (spec, SortOrder::Asc),
        };
        Some(Self::new(field.trim().parse().ok()?, order))
    }

    pub fn sort_members(&self, members: &mut [Member]) {
        members.sort_by(|a, b| {
            let ord = match self.sort_by {
                SortField::Email => a.email.cmp(&b.email),
                SortField::YearOfBirth => a.year_of_birth.cmp(&b.year_of_birth),
                _ => caseless(&a.name, &b.name),
            };
            self.sort_order.apply(ord)
        });
    }

    pub fn sort_brands(&self, brands: &mut [Brand]) {
        brands.sort_by(|a, b| self.sort_order.apply(caseless(&a.brand_name, &b.brand_name)));
    }

    pub fn sort_perfumes(&self, perfumes: &mut [Perfume]) {
        perfumes.sort_by(|a, b| {
            let ord = match self.sort_by {
                SortField::Brand => caseless(&a.brand_name, &b.brand_name),
                SortField::Price => a
                    .price
                    .unwrap_or_default()
                    .total_cmp(&b.price.unwrap_or_default()),
                _ => caseless(&a.perfume_name, &b.perfume_name),
            };
            self.sort_order.apply(ord)
        });
    }
}

fn caseless(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
