//! Catalog service integration tests.
//!
//! Runs the service against a real `JsonFileStore` and a `CatalogLoader`
//! reading CSV and image fixtures from a temporary directory.

mod support;
mod scenario;
mod seeding;
mod concurrency;
