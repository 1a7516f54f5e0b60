//! Write-side port used exclusively by out-of-band seeding.
//!
//! The HTTP surface is read-only; the only writers are the startup seeding
//! hook and the standalone seeding binary, both of which go through this
//! port. Keeping it separate from [`super::CompanyRepository`] makes the
//! read-only contract of the query surface visible in the type system.

use async_trait::async_trait;

use crate::domain::Company;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by company seed store adapters.
    pub enum CompanySeedStoreError {
        /// Store connection could not be established.
        Connection { message: String } =>
            "company seeding connection failed: {message}",
        /// Insert or count failed during execution.
        Query { message: String } =>
            "company seeding query failed: {message}",
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingOutcome {
    /// The store was empty and the given number of companies were inserted.
    Applied { inserted: usize },
    /// The store already held rows; nothing was written.
    AlreadySeeded { existing: u64 },
}

/// Port for populating the companies collection.
///
/// Implementations must insert the batch atomically: a partial seed is worse
/// than no seed because reruns refuse to touch a non-empty store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanySeedStore: Send + Sync {
    /// Number of companies currently stored.
    async fn count(&self) -> Result<u64, CompanySeedStoreError>;

    /// Insert the generated companies in one transaction.
    async fn insert_companies(
        &self,
        companies: &[Company],
    ) -> Result<usize, CompanySeedStoreError>;
}
