use serde::{Deserialize, Serialize};

use crate::domains::tukang::models::{format_timestamp, Skill, Tukang};

pub const REGISTERED_MESSAGE: &str = "Tukang berhasil didaftarkan";
pub const DELETED_MESSAGE: &str = "Tukang berhasil dihapus";

/// Tukang as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TukangData {
    pub id: String,
    pub name: String,
    pub skills: Skill,
    pub city: String,
    pub whatsapp_number: String,
    /// RFC 3339, microsecond precision, UTC
    pub created_at: String,
}

impl From<Tukang> for TukangData {
    fn from(tukang: Tukang) -> Self {
        Self {
            id: tukang.id.to_string(),
            name: tukang.name,
            skills: tukang.skills,
            city: tukang.city,
            whatsapp_number: tukang.whatsapp_number,
            created_at: format_timestamp(&tukang.created_at),
        }
    }
}

/// Input for registering a new tukang.
///
/// Fields are optional so that a missing field is reported by validation
/// alongside every other failing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterTukangInput {
    pub name: Option<String>,
    pub skills: Option<String>,
    pub city: Option<String>,
    pub whatsapp_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterTukangResult {
    pub success: bool,
    pub message: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTukangResult {
    pub success: bool,
    pub message: String,
}
