//! REST endpoints for the tukang directory.
//!
//! POST   /api/tukang       register
//! GET    /api/tukang       list, newest first
//! GET    /api/tukang/:id   fetch one
//! DELETE /api/tukang/:id   remove

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    Json,
};

use crate::domains::tukang::activities;
use crate::domains::tukang::{
    DeleteTukangResult, RegisterTukangInput, RegisterTukangResult, TukangData,
};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;

pub async fn register_tukang_handler(
    Extension(state): Extension<AxumAppState>,
    payload: Result<Json<RegisterTukangInput>, JsonRejection>,
) -> Result<Json<RegisterTukangResult>, ApiError> {
    let Json(input) = payload?;
    let result = activities::register_tukang(input, &state.deps).await?;
    Ok(Json(result))
}

pub async fn list_tukang_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<TukangData>>, ApiError> {
    let tukang = activities::list_tukang(&state.deps).await?;
    Ok(Json(tukang.into_iter().map(TukangData::from).collect()))
}

pub async fn get_tukang_handler(
    Extension(state): Extension<AxumAppState>,
    Path(tukang_id): Path<String>,
) -> Result<Json<TukangData>, ApiError> {
    let tukang = activities::get_tukang(&tukang_id, &state.deps).await?;
    Ok(Json(tukang.into()))
}

pub async fn delete_tukang_handler(
    Extension(state): Extension<AxumAppState>,
    Path(tukang_id): Path<String>,
) -> Result<Json<DeleteTukangResult>, ApiError> {
    let result = activities::delete_tukang(&tukang_id, &state.deps).await?;
    Ok(Json(result))
}
