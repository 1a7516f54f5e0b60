//! Read-side port for company analytics queries.
//!
//! Every query operation exposed over HTTP passes through this port, keeping
//! persistence details behind the hexagonal boundary. Inbound adapters
//! consume plain domain types without coupling to Diesel or any specific
//! data store.

use async_trait::async_trait;

use crate::domain::{Company, Error};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading from the companies collection.
    pub enum CompanyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "company read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "company read query failed: {message}",
    }
}

/// Largest number of companies a top-paid query may return.
///
/// Callers asking for more are clamped here rather than rejected, so the
/// bound is part of the query type's contract instead of handler-level
/// validation.
pub const TOP_PAID_MAX_LIMIT: i64 = 50;

/// Inclusive headcount bounds for range queries.
///
/// No ordering invariant is imposed on the bounds: a range whose `min`
/// exceeds `max` is a valid query that matches nothing. Companies without a
/// headcount never match a range query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadcountRange {
    /// Lower bound; queries omitting it use zero.
    pub min: i64,
    /// Upper bound; `None` leaves the range unbounded above.
    pub max: Option<i64>,
}

/// Validated request for the top-paid ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopPaidQuery {
    limit: i64,
}

impl TopPaidQuery {
    /// Build a query, clamping the requested limit into `0..=TOP_PAID_MAX_LIMIT`.
    #[must_use]
    pub fn new(limit: i64) -> Self {
        Self {
            limit: limit.clamp(0, TOP_PAID_MAX_LIMIT),
        }
    }

    /// The clamped row limit.
    #[must_use]
    pub const fn limit(&self) -> i64 {
        self.limit
    }
}

/// Port for reading companies.
///
/// All list operations return at most one store round-trip's worth of rows
/// and an empty vector when nothing matches; "no results" is never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Companies whose headcount lies inside the inclusive range.
    async fn find_by_headcount_range(
        &self,
        range: HeadcountRange,
    ) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Highest-paying companies by base salary.
    ///
    /// Ordering is total and therefore stable across calls: base salary
    /// descending, companies without a base salary last, ties broken by id
    /// ascending.
    async fn find_top_paid(
        &self,
        query: TopPaidQuery,
    ) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Companies whose location contains the term, case-insensitively.
    async fn find_by_location(
        &self,
        location: &str,
    ) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Companies listing the skill verbatim in their hiring criteria.
    async fn find_by_skill(&self, skill: &str) -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Companies offering the benefit verbatim.
    async fn find_by_benefit(&self, benefit: &str)
    -> Result<Vec<Company>, CompanyRepositoryError>;

    /// Exact number of stored companies, counted per call.
    async fn count(&self) -> Result<u64, CompanyRepositoryError>;
}

impl From<CompanyRepositoryError> for Error {
    fn from(err: CompanyRepositoryError) -> Self {
        // Store failures of any kind surface as the generic internal error;
        // the full context survives in the message for server-side logging.
        Error::internal(err.to_string())
    }
}

/// Fixture implementation for runs without a configured database.
///
/// Serves the empty collection: every lookup returns no rows and the count
/// is zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCompanyRepository;

#[async_trait]
impl CompanyRepository for FixtureCompanyRepository {
    async fn find_by_headcount_range(
        &self,
        _range: HeadcountRange,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_top_paid(
        &self,
        _query: TopPaidQuery,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_location(
        &self,
        _location: &str,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_skill(&self, _skill: &str) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_by_benefit(
        &self,
        _benefit: &str,
    ) -> Result<Vec<Company>, CompanyRepositoryError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<u64, CompanyRepositoryError> {
        Ok(0)
    }
}
