//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain read port and remain testable without I/O. Every
//! assembly (production pool, fixture fallback, test double) injects its own
//! implementation; nothing reads a process-wide client.

use std::sync::Arc;

use crate::domain::ports::CompanyRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub companies: Arc<dyn CompanyRepository>,
}

impl HttpState {
    /// Construct state over the given company read port.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::FixtureCompanyRepository;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureCompanyRepository));
    /// let _companies = state.companies.clone();
    /// ```
    pub fn new(companies: Arc<dyn CompanyRepository>) -> Self {
        Self { companies }
    }
}
