pub mod tukang;

pub use tukang::*;
