//! PostgreSQL-backed company seeding adapter.
//!
//! Implements the `CompanySeedStore` port. The batch insert runs inside a
//! single transaction so a failed seed leaves the table untouched and a
//! rerun starts from a clean slate.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::Company;
use crate::domain::ports::{CompanySeedStore, CompanySeedStoreError};

use super::diesel_helpers::{map_diesel_error_message, map_pool_error_message};
use super::models::NewCompanyRow;
use super::pool::{DbPool, PoolError};
use super::schema::companies;

/// Diesel-backed implementation of the company seed store.
#[derive(Clone)]
pub struct DieselCompanySeedStore {
    pool: DbPool,
}

impl DieselCompanySeedStore {
    /// Create a new seed store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CompanySeedStoreError {
    CompanySeedStoreError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> CompanySeedStoreError {
    CompanySeedStoreError::query(map_diesel_error_message(error, "company seeding"))
}

/// Flatten a domain entity into an insertable row.
///
/// The headcount column is narrower than the domain type, so values past the
/// column range are rejected here rather than truncated into a wrong figure.
fn company_to_new_row(company: &Company) -> Result<NewCompanyRow, CompanySeedStoreError> {
    let headcount = company
        .headcount()
        .map(|count| i32::try_from(count.get()))
        .transpose()
        .map_err(|_| CompanySeedStoreError::query("headcount overflows the storage column"))?;

    Ok(NewCompanyRow {
        id: *company.id().as_uuid(),
        name: company.name().map(ToOwned::to_owned),
        location: company.location().map(ToOwned::to_owned),
        headcount,
        salary_base: company.salary_band().map(|band| band.base()),
        salary_bonus: company.salary_band().and_then(|band| band.bonus()),
        benefits: company.benefits().to_vec(),
        skills: company.skills().to_vec(),
    })
}

#[async_trait]
impl CompanySeedStore for DieselCompanySeedStore {
    async fn count(&self) -> Result<u64, CompanySeedStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = companies::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(total)
            .map_err(|_| CompanySeedStoreError::query("count returned a negative total"))
    }

    async fn insert_companies(
        &self,
        companies_to_insert: &[Company],
    ) -> Result<usize, CompanySeedStoreError> {
        let rows = companies_to_insert
            .iter()
            .map(company_to_new_row)
            .collect::<Result<Vec<_>, _>>()?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let inserted = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(companies::table)
                        .values(&rows)
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(inserted)
    }
}
