pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use api::build_app;
pub use crate::core::errors::PostboardError;
pub use crate::core::services::PostboardService;
pub use infrastructure::storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
