//! Deterministic company generation from seed definitions.
//!
//! This module provides the core generation function that produces
//! reproducible company data from a seed registry. The same seed value always
//! produces identical output.

use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::locales::EN;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

use crate::error::GenerationError;
use crate::registry::{SeedDefinition, SeedRegistry};
use crate::seed::CompanySeed;

/// Presence ratio for company names (9 in 10 records carry one).
const NAME_PRESENCE: (u32, u32) = (9, 10);

/// Presence ratio for locations.
const LOCATION_PRESENCE: (u32, u32) = (17, 20);

/// Presence ratio for headcounts.
const HEADCOUNT_PRESENCE: (u32, u32) = (4, 5);

/// Presence ratio for salary bands.
const SALARY_PRESENCE: (u32, u32) = (3, 4);

/// Presence ratio for a bonus component within a salary band.
const BONUS_PRESENCE: (u32, u32) = (1, 2);

/// Smallest generated headcount.
const HEADCOUNT_MIN: u32 = 3;

/// Largest generated headcount; spans the small, medium, and large tiers.
const HEADCOUNT_MAX: u32 = 20_000;

/// Smallest generated base salary in whole rupees.
const SALARY_BASE_MIN: i64 = 300_000;

/// Largest generated base salary in whole rupees.
const SALARY_BASE_MAX: i64 = 6_000_000;

/// Smallest generated bonus in whole rupees.
const SALARY_BONUS_MIN: i64 = 25_000;

/// Largest generated bonus in whole rupees.
const SALARY_BONUS_MAX: i64 = 900_000;

/// Minimum number of benefits to assign to a company.
const MIN_BENEFITS: usize = 0;

/// Maximum number of benefits to assign to a company.
const MAX_BENEFITS: usize = 4;

/// Minimum number of skills to assign to a company.
const MIN_SKILLS: usize = 0;

/// Maximum number of skills to assign to a company.
const MAX_SKILLS: usize = 5;

/// Generates example companies from a seed definition.
///
/// Uses the seed's `seed` value to initialise a deterministic RNG, ensuring
/// identical output for the same seed definition. The generated companies
/// have:
///
/// - Unique UUIDs (deterministically generated)
/// - Fabricated names for most records, with a deterministic fraction left
///   unnamed so fallback rendering has data to exercise
/// - Locations drawn from the registry pool
/// - Headcounts spanning all three size tiers
/// - Salary bands in whole rupees, sometimes with a bonus component
/// - Benefit and skill subsets from the registry pools
///
/// # Errors
///
/// Returns [`GenerationError`] if the registry has no locations (required
/// for company generation).
///
/// # Example
///
/// ```
/// use example_data::{SeedRegistry, generate_example_companies};
///
/// let json = r#"{
///     "version": 1,
///     "locations": ["Bangalore"],
///     "skills": ["Rust"],
///     "benefits": ["Health Insurance"],
///     "seeds": [{"name": "test", "seed": 42, "companyCount": 3}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid");
/// let seed_def = registry.find_seed("test").expect("found");
/// let companies = generate_example_companies(&registry, seed_def).expect("generated");
///
/// assert_eq!(companies.len(), 3);
/// // Same seed produces identical companies
/// let companies2 = generate_example_companies(&registry, seed_def).expect("generated");
/// assert_eq!(companies, companies2);
/// ```
pub fn generate_example_companies(
    registry: &SeedRegistry,
    seed_def: &SeedDefinition,
) -> Result<Vec<CompanySeed>, GenerationError> {
    // Require at least one location to draw from
    if registry.locations().is_empty() {
        return Err(GenerationError::NoLocations);
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut companies = Vec::with_capacity(seed_def.company_count());

    for _ in 0..seed_def.company_count() {
        companies.push(generate_single_company(&mut rng, registry));
    }

    Ok(companies)
}

/// Generates a single company with the provided RNG.
///
/// Every field draws from the RNG in a fixed order so the sequence stays
/// reproducible across runs.
fn generate_single_company(rng: &mut ChaCha8Rng, registry: &SeedRegistry) -> CompanySeed {
    // Generate deterministic UUID from RNG
    let id = Uuid::from_u128(rng.random());

    let name: Option<String> =
        flip(rng, NAME_PRESENCE).then(|| CompanyName(EN).fake_with_rng(rng));

    let location = flip(rng, LOCATION_PRESENCE).then(|| pick_one(rng, registry.locations()));

    let headcount = flip(rng, HEADCOUNT_PRESENCE)
        .then(|| rng.random_range(HEADCOUNT_MIN..=HEADCOUNT_MAX));

    // A bonus never appears without a base.
    let salary_base = flip(rng, SALARY_PRESENCE)
        .then(|| rng.random_range(SALARY_BASE_MIN..=SALARY_BASE_MAX));
    let salary_bonus = salary_base.and_then(|_| {
        flip(rng, BONUS_PRESENCE).then(|| rng.random_range(SALARY_BONUS_MIN..=SALARY_BONUS_MAX))
    });

    let benefits = select_subset(rng, registry.benefits(), MIN_BENEFITS, MAX_BENEFITS);
    let skills = select_subset(rng, registry.skills(), MIN_SKILLS, MAX_SKILLS);

    CompanySeed {
        id,
        name,
        location,
        headcount,
        salary_base,
        salary_bonus,
        benefits,
        skills,
    }
}

/// Draws against a `(numerator, denominator)` presence ratio.
fn flip(rng: &mut ChaCha8Rng, ratio: (u32, u32)) -> bool {
    rng.random_ratio(ratio.0, ratio.1)
}

/// Picks a single entry from a non-empty pool.
fn pick_one(rng: &mut ChaCha8Rng, pool: &[String]) -> String {
    let index = rng.random_range(0..pool.len());
    pool.get(index).cloned().unwrap_or_default()
}

/// Selects a deterministic subset of names from the provided slice.
///
/// The selection count is determined by the RNG state, bounded by `min_count`
/// and `max_count`. If the source slice has fewer elements than `max_count`,
/// all elements may be selected.
fn select_subset(
    rng: &mut ChaCha8Rng,
    pool: &[String],
    min_count: usize,
    max_count: usize,
) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }

    // Clamp bounds to available entries
    let clamped_min = min_count.min(pool.len());
    let clamped_max = max_count.min(pool.len());

    // Determine count (handle case where min == max)
    let count = if clamped_min == clamped_max {
        clamped_min
    } else {
        rng.random_range(clamped_min..=clamped_max)
    };

    // Shuffle and take the first `count` elements
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    shuffled
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rstest::{fixture, rstest};

    use super::*;

    /// Generates companies from the named seed and asserts a predicate holds
    /// for all of them.
    ///
    /// # Panics
    ///
    /// Panics if the seed is not found, generation fails, or the predicate
    /// returns `false` for any company.
    fn assert_all_companies<F>(registry: &SeedRegistry, seed_name: &str, predicate: F)
    where
        F: Fn(&CompanySeed) -> bool,
    {
        let seed_def = registry.find_seed(seed_name).expect("seed should be found");
        let companies =
            generate_example_companies(registry, seed_def).expect("generation should succeed");

        for company in &companies {
            assert!(predicate(company), "Predicate failed for company: {company:?}");
        }
    }

    const TEST_REGISTRY_JSON: &str = r#"{
        "version": 1,
        "locations": ["Bangalore", "Pune", "Chennai", "Hyderabad"],
        "skills": ["Rust", "SQL", "Kubernetes", "Go", "Python", "React"],
        "benefits": ["Health Insurance", "Stock Options", "Remote Work", "Gym Membership"],
        "seeds": [
            {"name": "test-seed", "seed": 42, "companyCount": 40},
            {"name": "small-seed", "seed": 123, "companyCount": 2}
        ]
    }"#;

    #[fixture]
    fn test_registry() -> SeedRegistry {
        SeedRegistry::from_json(TEST_REGISTRY_JSON).expect("valid test registry")
    }

    #[rstest]
    fn generates_correct_company_count(test_registry: SeedRegistry) {
        let seed_def = test_registry.find_seed("test-seed").expect("seed found");
        let companies =
            generate_example_companies(&test_registry, seed_def).expect("generated");

        assert_eq!(companies.len(), 40);
    }

    #[rstest]
    fn generation_is_deterministic(test_registry: SeedRegistry) {
        let seed_def = test_registry.find_seed("test-seed").expect("seed found");

        let companies1 =
            generate_example_companies(&test_registry, seed_def).expect("generated");
        let companies2 =
            generate_example_companies(&test_registry, seed_def).expect("generated");

        assert_eq!(companies1, companies2);
    }

    #[rstest]
    fn different_seeds_produce_different_companies(test_registry: SeedRegistry) {
        let seed1 = test_registry.find_seed("test-seed").expect("seed found");
        let seed2 = test_registry.find_seed("small-seed").expect("seed found");

        let companies1 = generate_example_companies(&test_registry, seed1).expect("generated");
        let companies2 = generate_example_companies(&test_registry, seed2).expect("generated");

        // Different seeds should produce different first company IDs
        assert_ne!(
            companies1.first().map(|c| c.id),
            companies2.first().map(|c| c.id)
        );
    }

    #[rstest]
    fn generated_ids_are_unique(test_registry: SeedRegistry) {
        let seed_def = test_registry.find_seed("test-seed").expect("seed found");
        let companies =
            generate_example_companies(&test_registry, seed_def).expect("generated");

        let ids: HashSet<_> = companies.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), companies.len());
    }

    #[rstest]
    fn locations_come_from_the_registry_pool(test_registry: SeedRegistry) {
        let pool: HashSet<_> = test_registry.locations().iter().collect();

        assert_all_companies(&test_registry, "test-seed", |company| {
            company
                .location
                .as_ref()
                .is_none_or(|location| pool.contains(location))
        });
    }

    #[rstest]
    fn skills_are_a_subset_of_the_registry(test_registry: SeedRegistry) {
        let pool: HashSet<_> = test_registry.skills().iter().collect();

        assert_all_companies(&test_registry, "test-seed", |company| {
            company.skills.iter().all(|skill| pool.contains(skill))
        });
    }

    #[rstest]
    fn benefits_are_a_subset_of_the_registry(test_registry: SeedRegistry) {
        let pool: HashSet<_> = test_registry.benefits().iter().collect();

        assert_all_companies(&test_registry, "test-seed", |company| {
            company
                .benefits
                .iter()
                .all(|benefit| pool.contains(benefit))
        });
    }

    #[rstest]
    fn bonus_never_appears_without_a_base(test_registry: SeedRegistry) {
        assert_all_companies(&test_registry, "test-seed", |company| {
            company.salary_bonus.is_none() || company.salary_base.is_some()
        });
    }

    #[rstest]
    fn headcounts_stay_in_the_generated_range(test_registry: SeedRegistry) {
        assert_all_companies(&test_registry, "test-seed", |company| {
            company
                .headcount
                .is_none_or(|count| (HEADCOUNT_MIN..=HEADCOUNT_MAX).contains(&count))
        });
    }

    #[rstest]
    fn some_fields_are_omitted(test_registry: SeedRegistry) {
        let seed_def = test_registry.find_seed("test-seed").expect("seed found");
        let companies =
            generate_example_companies(&test_registry, seed_def).expect("generated");

        // With 40 companies and the documented presence ratios, every
        // optional field goes missing somewhere in the batch.
        assert!(companies.iter().any(|c| c.name.is_none()));
        assert!(companies.iter().any(|c| c.headcount.is_none()));
        assert!(companies.iter().any(|c| c.salary_base.is_none()));
    }

    #[rstest]
    fn skill_counts_respect_the_bounds(test_registry: SeedRegistry) {
        assert_all_companies(&test_registry, "test-seed", |company| {
            company.skills.len() <= MAX_SKILLS
        });
    }

    #[test]
    fn select_subset_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pool: Vec<String> = (0..10).map(|i| format!("entry-{i}")).collect();

        for _ in 0..100 {
            let subset = select_subset(&mut rng, &pool, 2, 5);
            assert!(subset.len() >= 2, "Subset too small: {}", subset.len());
            assert!(subset.len() <= 5, "Subset too large: {}", subset.len());
        }
    }

    #[test]
    fn select_subset_handles_empty_slice() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pool: Vec<String> = vec![];

        let subset = select_subset(&mut rng, &pool, 1, 3);
        assert!(subset.is_empty());
    }

    #[test]
    fn select_subset_clamps_to_available() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pool = vec!["one".to_owned(), "two".to_owned()];

        // Request more than available
        let subset = select_subset(&mut rng, &pool, 5, 10);
        assert!(subset.len() <= 2);
    }
}
