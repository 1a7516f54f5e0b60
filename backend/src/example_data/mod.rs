//! Startup wiring for example data seeding.

mod config;
mod startup;

pub use config::ExampleDataSettings;
pub use startup::{StartupSeedingError, seed_example_companies_on_startup};
