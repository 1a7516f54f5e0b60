//! PostgreSQL-backed company read adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::{PgArrayExpressionMethods, PgTextExpressionMethods};
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    CompanyRepository, CompanyRepositoryError, HeadcountRange, TopPaidQuery,
};
use crate::domain::{Company, CompanyDraft, CompanyId, Headcount, SalaryBand};

use super::diesel_helpers::{
    collect_rows, escape_like_pattern, map_diesel_error_message, map_pool_error_message,
    saturate_to_i32,
};
use super::models::CompanyRow;
use super::pool::{DbPool, PoolError};
use super::schema::companies;

/// Diesel-backed implementation of the company read port.
///
/// Holds a pool handle injected at construction; there is no module-level
/// connection state, so tests and tools wire their own pools.
#[derive(Clone)]
pub struct DieselCompanyRepository {
    pool: DbPool,
}

impl DieselCompanyRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CompanyRepositoryError {
    CompanyRepositoryError::connection(map_pool_error_message(error))
}

fn map_diesel_error(error: diesel::result::Error) -> CompanyRepositoryError {
    CompanyRepositoryError::query(map_diesel_error_message(error, "company read"))
}

/// Convert a stored row into the domain entity.
///
/// A row with a bonus but no base salary cannot occur (table constraint), so
/// the band maps directly off the base column. Conversion failures surface
/// as query errors: they mean the store holds data the domain rejects.
pub(crate) fn row_to_company(row: CompanyRow) -> Result<Company, String> {
    let headcount = row
        .headcount
        .map(|count| Headcount::new(i64::from(count)))
        .transpose()
        .map_err(|e| e.to_string())?;
    let salary_band = row
        .salary_base
        .map(|base| SalaryBand::new(base, row.salary_bonus));

    Ok(Company::new(
        CompanyId::from_uuid(row.id),
        CompanyDraft {
            name: row.name,
            location: row.location,
            headcount,
            salary_band,
            benefits: row.benefits,
            skills: row.skills,
        },
    ))
}

fn convert(rows: Vec<CompanyRow>) -> Result<Vec<Company>, CompanyRepositoryError> {
    collect_rows(
        rows.into_iter().map(row_to_company),
        CompanyRepositoryError::query,
    )
}

#[async_trait]
impl CompanyRepository for DieselCompanyRepository {
    async fn find_by_headcount_range(
        &self,
        range: HeadcountRange,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // NULL headcounts fail both comparisons and drop out, matching the
        // behaviour of a range predicate over a missing document field.
        let mut query = companies::table
            .select(CompanyRow::as_select())
            .filter(companies::headcount.ge(saturate_to_i32(range.min)))
            .into_boxed();
        if let Some(max) = range.max {
            query = query.filter(companies::headcount.le(saturate_to_i32(max)));
        }

        let rows: Vec<CompanyRow> = query
            .order_by(companies::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert(rows)
    }

    async fn find_top_paid(
        &self,
        query: TopPaidQuery,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Postgres sorts NULLs first under DESC; ordering on IS NULL first
        // pushes missing salaries to the tail, and the id column breaks ties
        // so repeated reads return identical slices.
        let rows: Vec<CompanyRow> = companies::table
            .select(CompanyRow::as_select())
            .order_by(companies::salary_base.is_null())
            .then_order_by(companies::salary_base.desc())
            .then_order_by(companies::id)
            .limit(query.limit())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert(rows)
    }

    async fn find_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let pattern = format!("%{}%", escape_like_pattern(location));
        let rows: Vec<CompanyRow> = companies::table
            .select(CompanyRow::as_select())
            .filter(companies::location.ilike(pattern))
            .order_by(companies::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert(rows)
    }

    async fn find_by_skill(&self, skill: &str) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CompanyRow> = companies::table
            .select(CompanyRow::as_select())
            .filter(companies::skills.contains(vec![skill.to_owned()]))
            .order_by(companies::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert(rows)
    }

    async fn find_by_benefit(
        &self,
        benefit: &str,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CompanyRow> = companies::table
            .select(CompanyRow::as_select())
            .filter(companies::benefits.contains(vec![benefit.to_owned()]))
            .order_by(companies::id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        convert(rows)
    }

    async fn count(&self) -> Result<u64, CompanyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = companies::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        u64::try_from(total)
            .map_err(|_| CompanyRepositoryError::query("count returned a negative total"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    fn bare_row() -> CompanyRow {
        CompanyRow {
            id: Uuid::new_v4(),
            name: None,
            location: None,
            headcount: None,
            salary_base: None,
            salary_bonus: None,
            benefits: Vec::new(),
            skills: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn row_with_only_an_id_converts_to_an_unspecified_company() {
        let row = bare_row();
        let id = row.id;

        let company = row_to_company(row).expect("conversion succeeds");

        assert_eq!(*company.id().as_uuid(), id);
        assert_eq!(company.name(), None);
        assert_eq!(company.salary_band(), None);
        assert!(company.benefits().is_empty());
    }

    #[rstest]
    fn row_fields_map_onto_the_domain_entity() {
        let mut row = bare_row();
        row.name = Some("Acme Systems".to_owned());
        row.location = Some("Bangalore".to_owned());
        row.headcount = Some(1200);
        row.salary_base = Some(2_400_000);
        row.salary_bonus = Some(200_000);
        row.skills = vec!["Rust".to_owned()];

        let company = row_to_company(row).expect("conversion succeeds");

        assert_eq!(company.headcount().map(|h| h.get()), Some(1200));
        let band = company.salary_band().expect("salary band present");
        assert_eq!(band.base(), 2_400_000);
        assert_eq!(band.bonus(), Some(200_000));
    }

    #[rstest]
    fn negative_stored_headcount_is_a_conversion_error() {
        let mut row = bare_row();
        row.headcount = Some(-5);

        let err = row_to_company(row).expect_err("negative headcount must fail");
        assert!(err.contains("negative"));
    }
}
