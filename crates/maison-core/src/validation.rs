// ── Client-side form validation ──
//
// Field rules return `None` when the value is acceptable and a
// user-facing message otherwise. Form validators collect the messages
// per field; a form is valid when no field has one. Nothing here
// touches the network.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use serde::Serialize;
use url::Url;

use crate::model::PerfumeForm;

const MIN_YEAR_OF_BIRTH: i32 = 1900;
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Field name to message, for every field that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field`'s rule outcome (a `None` outcome records nothing).
    pub fn check(&mut self, field: &'static str, outcome: Option<String>) -> &mut Self {
        if let Some(message) = outcome {
            self.0.insert(field, message);
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    value.trim().is_empty().then(|| message.to_owned())
}

// ── Field rules ──────────────────────────────────────────────────────

pub fn email(value: &str) -> Option<String> {
    if let Some(msg) = required(value, "Email is required") {
        return Some(msg);
    }
    let well_formed = !value.chars().any(char::is_whitespace)
        && value.split_once('@').is_some_and(|(local, domain)| {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        });
    (!well_formed).then(|| "Invalid email format".to_owned())
}

pub fn password(value: &str) -> Option<String> {
    value.is_empty().then(|| "Password is required".to_owned())
}

pub fn name(value: &str) -> Option<String> {
    required(value, "Name is required")
}

pub fn year_of_birth(value: &str) -> Option<String> {
    year_of_birth_in(value, chrono::Utc::now().year())
}

/// Year-of-birth rule against an explicit current year.
pub fn year_of_birth_in(value: &str, current_year: i32) -> Option<String> {
    if let Some(msg) = required(value, "Year of birth is required") {
        return Some(msg);
    }
    let Ok(year) = value.trim().parse::<i32>() else {
        return Some("Invalid year".to_owned());
    };
    if year < MIN_YEAR_OF_BIRTH {
        return Some(format!("Year must be {MIN_YEAR_OF_BIRTH} or later"));
    }
    if year > current_year {
        return Some("Year cannot be in the future".to_owned());
    }
    None
}

pub fn brand_name(value: &str) -> Option<String> {
    required(value, "Brand name is required")
}

pub fn perfume_name(value: &str) -> Option<String> {
    required(value, "Fragrance name is required")
}

pub fn image_url(value: &str) -> Option<String> {
    if let Some(msg) = required(value, "Image URL is required") {
        return Some(msg);
    }
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(_) => Some("URL must start with http:// or https://".to_owned()),
        Err(_) => Some("Invalid URL format".to_owned()),
    }
}

pub fn price(value: &str) -> Option<String> {
    if let Some(msg) = required(value, "Price is required") {
        return Some(msg);
    }
    match value.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p >= 0.0 => None,
        _ => Some("Price must be a positive number".to_owned()),
    }
}

pub fn volume(value: &str) -> Option<String> {
    if let Some(msg) = required(value, "Volume is required") {
        return Some(msg);
    }
    match value.trim().parse::<u32>() {
        Ok(v) if v > 0 => None,
        _ => Some("Volume must be a positive whole number".to_owned()),
    }
}

pub fn brand_id(value: &str) -> Option<String> {
    required(value, "Maison is required")
}

pub fn description(value: &str) -> Option<String> {
    if let Some(msg) = required(value, "Description is required") {
        return Some(msg);
    }
    (value.trim().chars().count() < MIN_DESCRIPTION_CHARS).then(|| {
        format!("Description must be at least {MIN_DESCRIPTION_CHARS} characters")
    })
}

pub fn ingredients(value: &str) -> Option<String> {
    required(value, "Ingredients are required")
}

pub fn rating(value: u8) -> Option<String> {
    (!(1..=5).contains(&value)).then(|| "Rating must be between 1 and 5".to_owned())
}

pub fn review_content(value: &str) -> Option<String> {
    required(value, "Review content is required")
}

// ── Forms ────────────────────────────────────────────────────────────

pub fn login_form(email_value: &str, password_value: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    errors
        .check("email", email(email_value))
        .check("password", password(password_value));
    errors
}

pub fn register_form(
    name_value: &str,
    email_value: &str,
    password_value: &str,
    year_value: &str,
) -> FormErrors {
    let mut errors = FormErrors::new();
    errors
        .check("name", name(name_value))
        .check("email", email(email_value))
        .check("password", password(password_value))
        .check("yearOfBirth", year_of_birth(year_value));
    errors
}

/// Profile edit: name and year of birth.
pub fn profile_form(name_value: &str, year_value: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    errors
        .check("name", name(name_value))
        .check("yearOfBirth", year_of_birth(year_value));
    errors
}

pub fn brand_form(brand_name_value: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    errors.check("brandName", brand_name(brand_name_value));
    errors
}

pub fn perfume_form(form: &PerfumeForm) -> FormErrors {
    let mut errors = FormErrors::new();
    errors
        .check("perfumeName", perfume_name(&form.perfume_name))
        .check("uri", image_url(&form.uri))
        .check("price", price(&form.price))
        .check("volume", volume(&form.volume))
        .check("brand", brand_id(&form.brand))
        .check("description", description(&form.description))
        .check("ingredients", ingredients(&form.ingredients));
    errors
}

pub fn review_form(rating_value: u8, content: &str) -> FormErrors {
    let mut errors = FormErrors::new();
    errors
        .check("rating", rating(rating_value))
        .check("content", review_content(content));
    errors
}
