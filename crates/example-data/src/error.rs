//! Error types for the example-data crate.
//!
//! This module defines semantic error enums for registry parsing and company
//! generation, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
///
/// These errors cover file I/O, JSON parsing, schema validation, and seed
/// lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no location names to draw from.
    #[error("registry contains no locations")]
    EmptyLocations,

    /// The registry contains no skill names to draw from.
    #[error("registry contains no skills")]
    EmptySkills,

    /// The registry contains no benefit names to draw from.
    #[error("registry contains no benefits")]
    EmptyBenefits,

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur during company generation.
///
/// These errors indicate failures in the generation process itself, such as
/// missing registry pools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The registry contains no location names for selection.
    #[error("registry contains no locations for selection")]
    NoLocations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_io_formats_correctly() {
        let err = RegistryError::IoError {
            path: PathBuf::from("/tmp/seeds.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read registry file at '/tmp/seeds.json': file not found"
        );
    }

    #[test]
    fn registry_error_parse_formats_correctly() {
        let err = RegistryError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid registry JSON: unexpected token");
    }

    #[test]
    fn registry_error_version_formats_correctly() {
        let err = RegistryError::UnsupportedVersion {
            expected: 1,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "unsupported registry version: expected 1, found 2"
        );
    }

    #[test]
    fn registry_error_empty_pools_format_correctly() {
        assert_eq!(
            RegistryError::EmptyLocations.to_string(),
            "registry contains no locations"
        );
        assert_eq!(
            RegistryError::EmptySkills.to_string(),
            "registry contains no skills"
        );
        assert_eq!(
            RegistryError::EmptyBenefits.to_string(),
            "registry contains no benefits"
        );
    }

    #[test]
    fn registry_error_empty_seeds_formats_correctly() {
        let err = RegistryError::EmptySeeds;
        assert_eq!(err.to_string(), "registry contains no seed definitions");
    }

    #[test]
    fn registry_error_seed_not_found_formats_correctly() {
        let err = RegistryError::SeedNotFound {
            name: "copper-lynx".to_owned(),
        };
        assert_eq!(err.to_string(), "seed 'copper-lynx' not found in registry");
    }

    #[test]
    fn generation_error_no_locations_formats_correctly() {
        let err = GenerationError::NoLocations;
        assert_eq!(
            err.to_string(),
            "registry contains no locations for selection"
        );
    }
}
