//! Startup seeding orchestration.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use example_data::{
    CompanySeed, GenerationError, RegistryError, SeedDefinition, SeedRegistry,
    generate_example_companies,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ports::{CompanySeedStore, CompanySeedStoreError, SeedingOutcome};
use crate::domain::{Company, CompanyDraft, CompanyId, CompanyValidationError, Headcount, SalaryBand};
use crate::example_data::config::ExampleDataSettings;
use crate::outbound::persistence::{DbPool, DieselCompanySeedStore};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Registry file could not be read.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Registry parsing or lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
    /// Company generation failed.
    #[error("example data generation failed: {0}")]
    Generation(#[from] GenerationError),
    /// A generated company failed domain validation.
    #[error("generated company failed validation: {0}")]
    InvalidCompany(#[from] CompanyValidationError),
    /// Persistence adapter failed while seeding.
    #[error("example data persistence error: {0}")]
    Store(#[from] CompanySeedStoreError),
    /// Seed name must not be empty.
    #[error("seed name must not be empty")]
    EmptySeedName,
}

/// Apply example companies on startup when enabled.
///
/// Skips silently (returning `Ok(None)`) when seeding is disabled or when no
/// database pool is configured; the second case is logged as a warning since
/// it usually means `DATABASE_URL` went missing from the deployment.
///
/// # Examples
///
/// ```rust,no_run
/// use backend::example_data::{ExampleDataSettings, seed_example_companies_on_startup};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings {
///     enabled: false,
///     seed_name: Some("copper-lynx".to_string()),
///     count: None,
///     registry_path: None,
/// };
/// let outcome = seed_example_companies_on_startup(&settings, None).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_companies_on_startup(
    settings: &ExampleDataSettings,
    db_pool: Option<&DbPool>,
) -> Result<Option<SeedingOutcome>, StartupSeedingError> {
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let seed_name = settings.seed_name().trim();
    if seed_name.is_empty() {
        return Err(StartupSeedingError::EmptySeedName);
    }

    let Some(db_pool) = db_pool else {
        warn!(
            seed_name,
            "example data seeding enabled but DATABASE_URL is missing; skipping"
        );
        return Ok(None);
    };

    let registry_path = settings.registry_path();
    let registry = load_registry(&registry_path)?;

    let store = DieselCompanySeedStore::new(db_pool.clone());
    let outcome = apply_seed(&store, &registry, seed_name, settings.count).await?;

    match outcome {
        SeedingOutcome::Applied { inserted } => {
            info!(seed_name, inserted, "example data seeding applied");
        }
        SeedingOutcome::AlreadySeeded { existing } => {
            info!(
                seed_name,
                existing, "companies already present; seeding skipped"
            );
        }
    }

    Ok(Some(outcome))
}

/// Generate companies for the named seed and insert them if the store is
/// empty.
///
/// The count override replaces the registry's `companyCount` while keeping
/// the seed value, so overridden runs stay deterministic.
async fn apply_seed(
    store: &dyn CompanySeedStore,
    registry: &SeedRegistry,
    seed_name: &str,
    count_override: Option<usize>,
) -> Result<SeedingOutcome, StartupSeedingError> {
    let seed_def = registry.find_seed(seed_name)?;

    let existing = store.count().await?;
    if existing > 0 {
        return Ok(SeedingOutcome::AlreadySeeded { existing });
    }

    let company_count = count_override.unwrap_or(seed_def.company_count());
    let seed_def = SeedDefinition::new(seed_def.name().to_owned(), seed_def.seed(), company_count);

    let seeds = generate_example_companies(registry, &seed_def)?;
    let mut companies = Vec::with_capacity(seeds.len());
    for seed in seeds {
        companies.push(convert_seed_company(seed)?);
    }

    let inserted = store.insert_companies(&companies).await?;
    Ok(SeedingOutcome::Applied { inserted })
}

fn convert_seed_company(seed: CompanySeed) -> Result<Company, CompanyValidationError> {
    let headcount = seed
        .headcount
        .map(|count| Headcount::new(i64::from(count)))
        .transpose()?;
    let salary_band = seed
        .salary_base
        .map(|base| SalaryBand::new(base, seed.salary_bonus));

    Ok(Company::new(
        CompanyId::from_uuid(seed.id),
        CompanyDraft {
            name: seed.name,
            location: seed.location,
            headcount,
            salary_band,
            benefits: seed.benefits,
            skills: seed.skills,
        },
    ))
}

fn load_registry(path: &Path) -> Result<SeedRegistry, StartupSeedingError> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| StartupSeedingError::RegistryRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "registry path must be a file",
            ),
        })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|source| {
        StartupSeedingError::RegistryRead {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let payload =
        dir.read(Path::new(file_name))
            .map_err(|source| StartupSeedingError::RegistryRead {
                path: path.to_path_buf(),
                source,
            })?;
    let contents =
        String::from_utf8(payload).map_err(|source| StartupSeedingError::RegistryRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, source),
        })?;
    Ok(SeedRegistry::from_json(&contents)?)
}
