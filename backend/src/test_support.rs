//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled when the
//! `test-support` feature is enabled, which the crate's own dev-dependency
//! on itself turns on for test builds.

pub mod companies {
    //! In-memory double for the company read port.
    //!
    //! Mirrors the ordering and matching semantics of the Diesel adapter so
    //! integration suites can assert end-to-end behaviour without a running
    //! PostgreSQL instance: identical inputs produce identically ordered
    //! responses from either implementation.

    use std::cmp::Ordering;

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::Company;
    use crate::domain::ports::{
        CompanyRepository, CompanyRepositoryError, HeadcountRange, TopPaidQuery,
    };

    /// Company read port backed by an in-memory collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use backend::domain::{Company, CompanyDraft, CompanyId};
    /// use backend::test_support::companies::InMemoryCompanyRepository;
    ///
    /// let company = Company::new(CompanyId::random(), CompanyDraft::default());
    /// let repository = InMemoryCompanyRepository::new(vec![company]);
    /// ```
    #[derive(Debug, Clone, Default)]
    pub struct InMemoryCompanyRepository {
        companies: Vec<Company>,
    }

    impl InMemoryCompanyRepository {
        /// Build a repository serving the given companies.
        #[must_use]
        pub fn new(companies: Vec<Company>) -> Self {
            Self { companies }
        }

        /// Build a repository serving no companies at all.
        #[must_use]
        pub fn empty() -> Self {
            Self::default()
        }

        fn collect_sorted_by_id(&self, predicate: impl Fn(&Company) -> bool) -> Vec<Company> {
            let mut matches: Vec<Company> = self
                .companies
                .iter()
                .filter(|company| predicate(company))
                .cloned()
                .collect();
            matches.sort_by_key(|company| *company.id().as_uuid());
            matches
        }
    }

    fn compare_for_top_paid(a: &Company, b: &Company) -> Ordering {
        let a_base = a.salary_band().map(|band| band.base());
        let b_base = b.salary_band().map(|band| band.base());
        let by_id = |a: &Company, b: &Company| -> Ordering {
            let a_id: Uuid = *a.id().as_uuid();
            a_id.cmp(b.id().as_uuid())
        };
        match (a_base, b_base) {
            // Highest base first; missing salaries sort after every present one.
            (Some(a_val), Some(b_val)) => b_val.cmp(&a_val).then_with(|| by_id(a, b)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => by_id(a, b),
        }
    }

    #[async_trait]
    impl CompanyRepository for InMemoryCompanyRepository {
        async fn find_by_headcount_range(
            &self,
            range: HeadcountRange,
        ) -> Result<Vec<Company>, CompanyRepositoryError> {
            Ok(self.collect_sorted_by_id(|company| {
                // A missing headcount fails both comparisons, as NULL does in SQL.
                company.headcount().is_some_and(|count| {
                    let count = i64::from(count.get());
                    count >= range.min && range.max.is_none_or(|max| count <= max)
                })
            }))
        }

        async fn find_top_paid(
            &self,
            query: TopPaidQuery,
        ) -> Result<Vec<Company>, CompanyRepositoryError> {
            let mut ranked: Vec<Company> = self.companies.clone();
            ranked.sort_by(compare_for_top_paid);
            ranked.truncate(usize::try_from(query.limit()).unwrap_or(0));
            Ok(ranked)
        }

        async fn find_by_location(
            &self,
            location: &str,
        ) -> Result<Vec<Company>, CompanyRepositoryError> {
            let needle = location.to_lowercase();
            Ok(self.collect_sorted_by_id(|company| {
                company
                    .location()
                    .is_some_and(|haystack| haystack.to_lowercase().contains(&needle))
            }))
        }

        async fn find_by_skill(
            &self,
            skill: &str,
        ) -> Result<Vec<Company>, CompanyRepositoryError> {
            Ok(self.collect_sorted_by_id(|company| {
                company.skills().iter().any(|entry| entry == skill)
            }))
        }

        async fn find_by_benefit(
            &self,
            benefit: &str,
        ) -> Result<Vec<Company>, CompanyRepositoryError> {
            Ok(self.collect_sorted_by_id(|company| {
                company.benefits().iter().any(|entry| entry == benefit)
            }))
        }

        async fn count(&self) -> Result<u64, CompanyRepositoryError> {
            Ok(self.companies.len() as u64)
        }
    }
}
