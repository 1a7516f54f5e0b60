//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (companies, health)
//! - **Schemas**: Wire types from the inbound layer ([`CompanyBody`] and its
//!   envelopes) so the document stays decoupled from domain types
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::companies::{
    CompanyBody, CountBody, HiringCriteriaBody, ItemsBody, SalaryBandBody,
};
use crate::inbound::http::error::ErrorBody;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Companies backend API",
        description = "Read-only HTTP interface for company analytics and health probes.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::companies::list_by_headcount_range,
        crate::inbound::http::companies::list_top_paid,
        crate::inbound::http::companies::count_companies,
        crate::inbound::http::companies::list_by_location,
        crate::inbound::http::companies::list_by_skill,
        crate::inbound::http::companies::list_by_benefit,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CompanyBody,
        SalaryBandBody,
        HiringCriteriaBody,
        ItemsBody,
        CountBody,
        ErrorBody
    )),
    tags(
        (name = "companies", description = "Read-only company analytics"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_company_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let company_schema = schemas.get("CompanyBody").expect("CompanyBody schema");

        assert_object_schema_has_field(company_schema, "id");
        assert_object_schema_has_field(company_schema, "salaryBand");
        assert_object_schema_has_field(company_schema, "hiringCriteria");
    }

    #[test]
    fn openapi_error_schema_has_error_field() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("ErrorBody").expect("ErrorBody schema");

        assert_object_schema_has_field(error_schema, "error");
    }

    #[test]
    fn openapi_registers_every_company_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/companies/headcount-range",
            "/api/companies/top-paid",
            "/api/companies/count",
            "/api/companies/by-location/{location}",
            "/api/companies/by-skill/{skill}",
            "/api/companies/benefit/{benefit}",
        ] {
            assert!(paths.contains_key(path), "missing path '{path}'");
        }
    }
}
