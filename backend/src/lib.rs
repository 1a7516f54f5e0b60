//! Backend library modules.

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(feature = "test-support")]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware, re-exported for server assembly.
pub use middleware::Trace;
