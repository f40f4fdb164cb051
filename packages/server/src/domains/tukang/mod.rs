//! Tukang domain - directory of registered tradespeople

pub mod activities;
pub mod data;
pub mod errors;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use data::{DeleteTukangResult, RegisterTukangInput, RegisterTukangResult, TukangData};
pub use errors::{TukangError, TukangResult};
pub use models::{Skill, Tukang, TUKANG_COLLECTION};
pub use validation::{FieldError, ValidationErrors};
