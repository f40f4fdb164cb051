//! Registration input validation and WhatsApp number normalization.
//!
//! Both are pure functions: no store access, no clock.

use serde::Serialize;

use crate::domains::tukang::data::RegisterTukangInput;
use crate::domains::tukang::models::Skill;

pub const NAME_MAX_CHARS: usize = 100;
pub const CITY_MAX_CHARS: usize = 50;
pub const WHATSAPP_MIN_CHARS: usize = 10;
pub const WHATSAPP_MAX_CHARS: usize = 15;

/// Country prefix every stored WhatsApp number starts with.
pub const CANONICAL_PREFIX: &str = "+62";

/// One failing field and why.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All field failures of a single registration attempt (never empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Registration input that passed validation; text fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTukang {
    pub name: String,
    pub skills: Skill,
    pub city: String,
    /// Trimmed but not yet normalized.
    pub whatsapp_number: String,
}

fn required<'a>(
    field: &str,
    value: Option<&'a str>,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    if value.is_none() {
        errors.push(FieldError::new(field, "field required"));
    }
    value
}

fn check_text(field: &str, value: &str, max_chars: usize, errors: &mut Vec<FieldError>) {
    let len = value.chars().count();
    if len == 0 {
        errors.push(FieldError::new(field, "must not be empty"));
    } else if len > max_chars {
        errors.push(FieldError::new(
            field,
            format!("must be at most {} characters", max_chars),
        ));
    }
}

/// Validate a registration request, collecting every failing field.
pub fn validate_registration(
    input: &RegisterTukangInput,
) -> Result<ValidatedTukang, ValidationErrors> {
    let mut errors = Vec::new();

    let name = required("name", input.name.as_deref(), &mut errors).map(str::trim);
    if let Some(name) = name {
        check_text("name", name, NAME_MAX_CHARS, &mut errors);
    }

    let skills = required("skills", input.skills.as_deref(), &mut errors).and_then(|raw| {
        match raw.parse::<Skill>() {
            Ok(skill) => Some(skill),
            Err(_) => {
                let allowed: Vec<&str> = Skill::ALL.iter().map(Skill::label).collect();
                errors.push(FieldError::new(
                    "skills",
                    format!("must be one of: {}", allowed.join(", ")),
                ));
                None
            }
        }
    });

    let city = required("city", input.city.as_deref(), &mut errors).map(str::trim);
    if let Some(city) = city {
        check_text("city", city, CITY_MAX_CHARS, &mut errors);
    }

    // Length bounds apply to the number as submitted; trimming only feeds normalization.
    let raw_whatsapp = required("whatsapp_number", input.whatsapp_number.as_deref(), &mut errors);
    let whatsapp = raw_whatsapp.map(str::trim);
    if let Some(number) = raw_whatsapp {
        let len = number.chars().count();
        if !(WHATSAPP_MIN_CHARS..=WHATSAPP_MAX_CHARS).contains(&len) {
            errors.push(FieldError::new(
                "whatsapp_number",
                format!(
                    "must be between {} and {} characters",
                    WHATSAPP_MIN_CHARS, WHATSAPP_MAX_CHARS
                ),
            ));
        }
    }

    match (name, skills, city, whatsapp) {
        (Some(name), Some(skills), Some(city), Some(whatsapp)) if errors.is_empty() => {
            Ok(ValidatedTukang {
                name: name.to_string(),
                skills,
                city: city.to_string(),
                whatsapp_number: whatsapp.to_string(),
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

/// Rewrite a trimmed WhatsApp number into canonical `+62` form.
///
/// A leading `0` is replaced by `+62`; any other number lacking `+62` gets it
/// prepended verbatim. A bare `62...` therefore becomes `+6262...`.
pub fn normalize_whatsapp_number(number: &str) -> String {
    if let Some(rest) = number.strip_prefix('0') {
        format!("{}{}", CANONICAL_PREFIX, rest)
    } else if number.starts_with(CANONICAL_PREFIX) {
        number.to_string()
    } else {
        format!("{}{}", CANONICAL_PREFIX, number)
    }
}
