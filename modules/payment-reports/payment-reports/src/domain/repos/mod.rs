pub mod reports_repo;

pub use reports_repo::ReportsRepository;
