// HTTP routes
pub mod health;
pub mod tukang;

pub use health::*;
pub use tukang::*;
