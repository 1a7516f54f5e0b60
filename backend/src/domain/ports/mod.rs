//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod company_repository;
mod company_seed_store;

#[cfg(test)]
pub use company_repository::MockCompanyRepository;
pub use company_repository::{
    CompanyRepository, CompanyRepositoryError, FixtureCompanyRepository, HeadcountRange,
    TOP_PAID_MAX_LIMIT, TopPaidQuery,
};
#[cfg(test)]
pub use company_seed_store::MockCompanySeedStore;
pub use company_seed_store::{CompanySeedStore, CompanySeedStoreError, SeedingOutcome};
