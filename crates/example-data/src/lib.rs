//! Deterministic example company data generation for demonstration purposes.
//!
//! This crate provides tools for generating believable, reproducible company
//! data from a JSON seed registry. It is designed to be independent of
//! backend domain types to avoid circular dependencies.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading seed registries from JSON files
//! - Deterministic company generation using named seeds
//! - Configurable location, skill, and benefit pools
//!
//! # Example
//!
//! ```
//! use example_data::{SeedRegistry, generate_example_companies};
//!
//! let json = r#"{
//!     "version": 1,
//!     "locations": ["Bangalore", "Pune"],
//!     "skills": ["Rust", "SQL"],
//!     "benefits": ["Health Insurance"],
//!     "seeds": [{"name": "test-seed", "seed": 42, "companyCount": 3}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let companies = generate_example_companies(&registry, seed_def).expect("generation succeeds");
//!
//! assert_eq!(companies.len(), 3);
//! ```

mod error;
mod generator;
mod registry;
mod seed;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_example_companies;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::CompanySeed;
