use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::TukangId;
use crate::kernel::{Document, StorageError};

/// Collection holding tukang documents.
pub const TUKANG_COLLECTION: &str = "tukang";

/// Skill category, serialized with the labels the public API uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Skill {
    #[serde(rename = "Listrik")]
    Electrical,
    #[serde(rename = "Cat")]
    Painting,
    #[serde(rename = "Bangunan")]
    Construction,
    #[serde(rename = "Servis AC")]
    AcService,
    #[serde(rename = "Lainnya")]
    Other,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Electrical,
        Skill::Painting,
        Skill::Construction,
        Skill::AcService,
        Skill::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Skill::Electrical => "Listrik",
            Skill::Painting => "Cat",
            Skill::Construction => "Bangunan",
            Skill::AcService => "Servis AC",
            Skill::Other => "Lainnya",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Skill {
    type Err = String;

    /// Exact, case-sensitive match against the labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Skill::ALL
            .into_iter()
            .find(|skill| skill.label() == s)
            .ok_or_else(|| format!("Invalid skill: {}", s))
    }
}

/// Tukang model - a registered tradesperson in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tukang {
    pub id: TukangId,
    pub name: String,
    pub skills: Skill,
    pub city: String,
    /// Always in canonical `+62` form.
    pub whatsapp_number: String,
    pub created_at: DateTime<Utc>,
}

/// Stored shape of a tukang. Every field is text in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TukangDocument {
    id: String,
    name: String,
    skills: String,
    city: String,
    whatsapp_number: String,
    created_at: String,
}

/// Timestamp format shared by documents and API responses.
///
/// Fixed precision keeps lexical order equal to chronological order.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parses RFC 3339 timestamps, plus offset-less ISO-8601 ones read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

impl Tukang {
    /// Encode into the store's document representation.
    pub fn to_document(&self) -> Result<Document, StorageError> {
        let doc = TukangDocument {
            id: self.id.to_string(),
            name: self.name.clone(),
            skills: self.skills.label().to_string(),
            city: self.city.clone(),
            whatsapp_number: self.whatsapp_number.clone(),
            created_at: format_timestamp(&self.created_at),
        };

        match serde_json::to_value(doc)? {
            Value::Object(map) => Ok(map),
            other => Err(StorageError::MalformedDocument {
                id: self.id.to_string(),
                reason: format!("encoded to non-object {}", other),
            }),
        }
    }

    /// Decode a stored document, rejecting anything that does not fit the schema.
    pub fn from_document(document: Document) -> Result<Self, StorageError> {
        let id_hint = document
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("<unknown>")
            .to_string();
        let malformed = |reason: String| StorageError::MalformedDocument {
            id: id_hint.clone(),
            reason,
        };

        let doc: TukangDocument =
            serde_json::from_value(Value::Object(document)).map_err(|e| malformed(e.to_string()))?;

        let id = TukangId::parse(&doc.id).map_err(|e| malformed(format!("invalid id: {}", e)))?;
        let skills = doc.skills.parse::<Skill>().map_err(malformed)?;
        let created_at = parse_timestamp(&doc.created_at)
            .ok_or_else(|| malformed(format!("invalid created_at `{}`", doc.created_at)))?;

        Ok(Self {
            id,
            name: doc.name,
            skills,
            city: doc.city,
            whatsapp_number: doc.whatsapp_number,
            created_at,
        })
    }
}
