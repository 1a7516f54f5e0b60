//! Seed registry types and JSON parsing.
//!
//! This module defines the seed registry structure that holds named seed
//! definitions and the string pools generated companies draw from. The
//! registry is loaded from JSON and provides deterministic seed lookups.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A seed registry containing named seeds and generation pools.
///
/// The registry is loaded from a JSON file and provides access to seed
/// definitions and the location, skill, and benefit pools that generated
/// companies can reference.
///
/// # Example
///
/// ```
/// use example_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "locations": ["Bangalore"],
///     "skills": ["Rust"],
///     "benefits": ["Health Insurance"],
///     "seeds": [{"name": "test", "seed": 42, "companyCount": 5}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    locations: Vec<String>,
    skills: Vec<String>,
    benefits: Vec<String>,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - Any of the pools is empty
    /// - The seeds array is empty
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        // Validate version
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        // Each pool must offer at least one entry so generation has
        // something to draw from.
        if raw.locations.is_empty() {
            return Err(RegistryError::EmptyLocations);
        }
        if raw.skills.is_empty() {
            return Err(RegistryError::EmptySkills);
        }
        if raw.benefits.is_empty() {
            return Err(RegistryError::EmptyBenefits);
        }

        // Validate seeds
        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let seeds = raw
            .seeds
            .into_iter()
            .map(|s| SeedDefinition {
                name: s.name,
                seed: s.seed,
                company_count: s.company_count,
            })
            .collect();

        Ok(Self {
            version: raw.version,
            locations: raw.locations,
            skills: raw.skills,
            benefits: raw.benefits,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the available location names.
    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Returns the available skill names.
    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Returns the available benefit names.
    #[must_use]
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed definition for deterministic company generation.
///
/// Each seed has a unique name, an RNG seed value, and a company count that
/// determines how many companies to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    company_count: usize,
}

impl SeedDefinition {
    /// Constructs a definition directly, bypassing registry parsing.
    ///
    /// Callers use this to apply a company count override while keeping the
    /// registry's seed value.
    #[must_use]
    pub const fn new(name: String, seed: u64, company_count: usize) -> Self {
        Self {
            name,
            seed,
            company_count,
        }
    }

    /// Returns the seed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of companies to generate.
    #[must_use]
    pub const fn company_count(&self) -> usize {
        self.company_count
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    locations: Vec<String>,
    skills: Vec<String>,
    benefits: Vec<String>,
    seeds: Vec<RawSeedDefinition>,
}

/// Raw JSON representation of a seed definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    company_count: usize,
}
