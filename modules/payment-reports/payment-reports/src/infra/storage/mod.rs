//! Infrastructure storage layer - SeaORM entities and report queries.
//!
//! ## Architecture
//!
//! This module contains ALL SeaORM-specific code and database operations:
//! - `entity/` - SeaORM entity definitions (companies, users, personal info, payments)
//! - `predicate.rs` - Optional-equality predicate builder for filtered reports
//! - `mapper.rs` - Projection rows and their conversion into SDK models
//! - `reports_sea_repo.rs` - `ReportsRepository` implementation
//! - `db.rs` - Connection bootstrap and error helpers
//!
//! ## Layering Rules
//!
//! The infrastructure layer:
//! - **Contains**: ALL query building and column references
//! - **Uses**: `payment_reports_sdk` contract types as the domain model
//! - **Never**: computes means or decides whether a result is "no data"

pub mod db;
pub mod entity;
pub mod mapper;
pub mod predicate;
pub mod reports_sea_repo;

pub use reports_sea_repo::OrmReportsRepository;
