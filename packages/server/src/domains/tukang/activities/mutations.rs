//! Tukang mutation activities
//!
//! Register and delete. No update exists: a registered
//! tukang is immutable until removed.

use chrono::{SubsecRound, Utc};
use tracing::info;

use crate::common::TukangId;
use crate::domains::tukang::data::{
    DeleteTukangResult, RegisterTukangInput, RegisterTukangResult, DELETED_MESSAGE,
    REGISTERED_MESSAGE,
};
use crate::domains::tukang::errors::{TukangError, TukangResult};
use crate::domains::tukang::models::{Tukang, TUKANG_COLLECTION};
use crate::domains::tukang::validation::{normalize_whatsapp_number, validate_registration};
use crate::kernel::ServerDeps;

/// Register a new tukang and return its freshly issued id.
pub async fn register_tukang(
    input: RegisterTukangInput,
    deps: &ServerDeps,
) -> TukangResult<RegisterTukangResult> {
    let validated = validate_registration(&input)?;

    let tukang = Tukang {
        id: TukangId::new(),
        name: validated.name,
        skills: validated.skills,
        city: validated.city,
        whatsapp_number: normalize_whatsapp_number(&validated.whatsapp_number),
        // Stored timestamps carry microseconds; truncate so the record reads back equal.
        created_at: Utc::now().trunc_subsecs(6),
    };

    info!(tukang_id = %tukang.id, skills = %tukang.skills, city = %tukang.city, "Registering tukang");

    deps.store
        .insert_one(TUKANG_COLLECTION, tukang.to_document()?)
        .await?;

    info!(tukang_id = %tukang.id, "Tukang registered");

    Ok(RegisterTukangResult {
        success: true,
        message: REGISTERED_MESSAGE.to_string(),
        id: tukang.id.to_string(),
    })
}

/// Remove a tukang by id. Removing an unknown id is `NotFound`.
pub async fn delete_tukang(id: &str, deps: &ServerDeps) -> TukangResult<DeleteTukangResult> {
    let deleted = deps.store.delete_one(TUKANG_COLLECTION, id).await?;

    if deleted == 0 {
        info!(tukang_id = %id, "Delete requested for unknown tukang");
        return Err(TukangError::NotFound);
    }

    info!(tukang_id = %id, "Tukang deleted");

    Ok(DeleteTukangResult {
        success: true,
        message: DELETED_MESSAGE.to_string(),
    })
}
