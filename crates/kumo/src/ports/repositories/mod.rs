//! Repository Ports

mod fact_repository;
mod history_repository;

pub use fact_repository::FactRepository;
pub use history_repository::HistoryRepository;
