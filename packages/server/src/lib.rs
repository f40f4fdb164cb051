// Jasa Tukang Hemat - API Core
//
// Directory of local tradespeople (tukang): register, list, fetch and remove.
// Domains hold the business rules; the kernel holds infrastructure (document
// store adapters, dependency container); the server maps it all onto HTTP.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
