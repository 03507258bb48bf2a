//! PostgreSQL adapters

mod fact_repository;
mod history_repository;

pub use fact_repository::PgFactRepository;
pub use history_repository::PgHistoryRepository;
