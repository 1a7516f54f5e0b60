//! Company analytics read endpoints.
//!
//! ```text
//! GET /api/companies/headcount-range
//! GET /api/companies/top-paid
//! GET /api/companies/count
//! GET /api/companies/by-location/{location}
//! GET /api/companies/by-skill/{skill}
//! GET /api/companies/benefit/{benefit}
//! ```
//!
//! Numeric query parameters arrive as raw strings and are parsed through
//! [`crate::inbound::http::validation`] so a malformed value yields this
//! API's 400 envelope rather than the extractor default.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::Company;
use crate::domain::ports::{HeadcountRange, TopPaidQuery};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_optional_int_param, require_path_segment,
};

/// Lower bound applied when a range query omits `min`.
const DEFAULT_MIN_HEADCOUNT: i64 = 0;

/// Rows returned by the top-paid ranking when `limit` is omitted.
const DEFAULT_TOP_PAID_LIMIT: i64 = 5;

/// Wire form of a salary band.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBandBody {
    /// Fixed base component in whole rupees.
    #[schema(example = 2_400_000)]
    pub base: i64,
    /// Variable bonus component, omitted when not advertised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<i64>,
}

/// Wire form of the hiring criteria envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HiringCriteriaBody {
    /// Skills a candidate is expected to bring.
    pub skills: Vec<String>,
}

/// Wire form of a company document.
///
/// Every field other than `id` may be absent; absent fields are omitted from
/// the JSON rather than serialized as `null`, and empty collections are
/// treated as absent.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyBody {
    /// Stable identifier.
    pub id: Uuid,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form location text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Number of employees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headcount: Option<u32>,
    /// Advertised salary band.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_band: Option<SalaryBandBody>,
    /// Offered benefits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub benefits: Vec<String>,
    /// Hiring criteria, omitted when no skills are listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hiring_criteria: Option<HiringCriteriaBody>,
}

impl From<Company> for CompanyBody {
    fn from(company: Company) -> Self {
        let skills = company.skills().to_vec();
        let hiring_criteria = if skills.is_empty() {
            None
        } else {
            Some(HiringCriteriaBody { skills })
        };
        Self {
            id: *company.id().as_uuid(),
            name: company.name().map(ToOwned::to_owned),
            location: company.location().map(ToOwned::to_owned),
            headcount: company.headcount().map(|count| count.get()),
            salary_band: company.salary_band().map(|band| SalaryBandBody {
                base: band.base(),
                bonus: band.bonus(),
            }),
            benefits: company.benefits().to_vec(),
            hiring_criteria,
        }
    }
}

/// Envelope wrapping company collections.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ItemsBody {
    /// Matching companies, possibly empty.
    pub items: Vec<CompanyBody>,
}

/// Envelope for the collection count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CountBody {
    /// Number of stored companies.
    #[schema(example = 42)]
    pub total: u64,
}

fn items_body(companies: Vec<Company>) -> ItemsBody {
    ItemsBody {
        items: companies.into_iter().map(CompanyBody::from).collect(),
    }
}

/// Raw query parameters for the headcount range endpoint.
#[derive(Debug, Deserialize)]
pub struct HeadcountRangeParams {
    min: Option<String>,
    max: Option<String>,
}

/// Raw query parameters for the top-paid endpoint.
#[derive(Debug, Deserialize)]
pub struct TopPaidParams {
    limit: Option<String>,
}

/// List companies whose headcount falls inside an inclusive range.
#[utoipa::path(
    get,
    path = "/api/companies/headcount-range",
    params(
        ("min" = Option<i64>, Query, description = "Inclusive lower bound; defaults to 0"),
        ("max" = Option<i64>, Query, description = "Inclusive upper bound; unbounded when absent")
    ),
    responses(
        (status = 200, description = "Matching companies", body = ItemsBody),
        (status = 400, description = "Malformed bound", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["companies"],
    operation_id = "listCompaniesByHeadcountRange"
)]
#[get("/companies/headcount-range")]
pub async fn list_by_headcount_range(
    state: web::Data<HttpState>,
    params: web::Query<HeadcountRangeParams>,
) -> ApiResult<web::Json<ItemsBody>> {
    let min = parse_optional_int_param(params.min.as_deref(), FieldName::new("min"))?
        .unwrap_or(DEFAULT_MIN_HEADCOUNT);
    let max = parse_optional_int_param(params.max.as_deref(), FieldName::new("max"))?;
    let companies = state
        .companies
        .find_by_headcount_range(HeadcountRange { min, max })
        .await?;
    Ok(web::Json(items_body(companies)))
}

/// List the highest-paying companies by base salary.
#[utoipa::path(
    get,
    path = "/api/companies/top-paid",
    params(
        ("limit" = Option<i64>, Query, description = "Rows to return; defaults to 5, capped at 50")
    ),
    responses(
        (status = 200, description = "Ranked companies", body = ItemsBody),
        (status = 400, description = "Malformed limit", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["companies"],
    operation_id = "listTopPaidCompanies"
)]
#[get("/companies/top-paid")]
pub async fn list_top_paid(
    state: web::Data<HttpState>,
    params: web::Query<TopPaidParams>,
) -> ApiResult<web::Json<ItemsBody>> {
    let limit = parse_optional_int_param(params.limit.as_deref(), FieldName::new("limit"))?
        .unwrap_or(DEFAULT_TOP_PAID_LIMIT);
    let companies = state.companies.find_top_paid(TopPaidQuery::new(limit)).await?;
    Ok(web::Json(items_body(companies)))
}

/// Count the stored companies.
#[utoipa::path(
    get,
    path = "/api/companies/count",
    responses(
        (status = 200, description = "Collection size", body = CountBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["companies"],
    operation_id = "countCompanies"
)]
#[get("/companies/count")]
pub async fn count_companies(state: web::Data<HttpState>) -> ApiResult<web::Json<CountBody>> {
    let total = state.companies.count().await?;
    Ok(web::Json(CountBody { total }))
}

/// List companies whose location contains the given term.
#[utoipa::path(
    get,
    path = "/api/companies/by-location/{location}",
    params(
        ("location" = String, Path, description = "Case-insensitive substring of the location")
    ),
    responses(
        (status = 200, description = "Matching companies", body = ItemsBody),
        (status = 400, description = "Blank location", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["companies"],
    operation_id = "listCompaniesByLocation"
)]
#[get("/companies/by-location/{location}")]
pub async fn list_by_location(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemsBody>> {
    let location = require_path_segment(&path.into_inner(), FieldName::new("location"))?;
    let companies = state.companies.find_by_location(&location).await?;
    Ok(web::Json(items_body(companies)))
}

/// List companies whose hiring criteria include the given skill.
#[utoipa::path(
    get,
    path = "/api/companies/by-skill/{skill}",
    params(
        ("skill" = String, Path, description = "Exact skill to match, case-sensitively")
    ),
    responses(
        (status = 200, description = "Matching companies", body = ItemsBody),
        (status = 400, description = "Blank skill", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["companies"],
    operation_id = "listCompaniesBySkill"
)]
#[get("/companies/by-skill/{skill}")]
pub async fn list_by_skill(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemsBody>> {
    let skill = require_path_segment(&path.into_inner(), FieldName::new("skill"))?;
    let companies = state.companies.find_by_skill(&skill).await?;
    Ok(web::Json(items_body(companies)))
}

/// List companies offering the given benefit.
///
/// The route segment is `benefit`, not `by-benefit`; clients already depend
/// on the shorter form.
#[utoipa::path(
    get,
    path = "/api/companies/benefit/{benefit}",
    params(
        ("benefit" = String, Path, description = "Exact benefit to match, case-sensitively")
    ),
    responses(
        (status = 200, description = "Matching companies", body = ItemsBody),
        (status = 400, description = "Blank benefit", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["companies"],
    operation_id = "listCompaniesByBenefit"
)]
#[get("/companies/benefit/{benefit}")]
pub async fn list_by_benefit(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ItemsBody>> {
    let benefit = require_path_segment(&path.into_inner(), FieldName::new("benefit"))?;
    let companies = state.companies.find_by_benefit(&benefit).await?;
    Ok(web::Json(items_body(companies)))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::ports::{CompanyRepositoryError, MockCompanyRepository};
    use crate::domain::{CompanyDraft, CompanyId, Headcount, SalaryBand};

    use super::*;

    fn sample_company() -> Company {
        Company::new(
            CompanyId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid fixture id"),
            CompanyDraft {
                name: Some("Acme Systems".to_owned()),
                location: Some("Bangalore".to_owned()),
                headcount: Headcount::new(1200).ok(),
                salary_band: Some(SalaryBand::new(2_400_000, Some(200_000))),
                benefits: vec!["Health Insurance".to_owned()],
                skills: vec!["Rust".to_owned(), "SQL".to_owned()],
            },
        )
    }

    fn test_app(
        repository: MockCompanyRepository,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(Arc::new(repository));
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api")
                .service(list_by_headcount_range)
                .service(list_top_paid)
                .service(count_companies)
                .service(list_by_location)
                .service(list_by_skill)
                .service(list_by_benefit),
        )
    }

    async fn get_json(repository: MockCompanyRepository, uri: &str) -> (actix_web::http::StatusCode, Value) {
        let app = actix_test::init_service(test_app(repository)).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("JSON body");
        (status, value)
    }

    #[actix_web::test]
    async fn headcount_range_defaults_min_to_zero() {
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_by_headcount_range()
            .withf(|range| *range == HeadcountRange { min: 0, max: None })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let (status, value) = get_json(repository, "/api/companies/headcount-range").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(value, serde_json::json!({"items": []}));
    }

    #[actix_web::test]
    async fn headcount_range_passes_both_bounds() {
        let company = sample_company();
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_by_headcount_range()
            .withf(|range| {
                *range == HeadcountRange {
                    min: 100,
                    max: Some(2000),
                }
            })
            .times(1)
            .returning(move |_| Ok(vec![company.clone()]));

        let (status, value) =
            get_json(repository, "/api/companies/headcount-range?min=100&max=2000").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        let items = value["items"].as_array().expect("items array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Acme Systems");
    }

    #[rstest]
    #[case("/api/companies/headcount-range?min=abc", "min must be an integer")]
    #[case("/api/companies/headcount-range?max=12.5", "max must be an integer")]
    #[case("/api/companies/headcount-range?min=", "min must be an integer")]
    #[case("/api/companies/top-paid?limit=five", "limit must be an integer")]
    #[actix_web::test]
    async fn malformed_numeric_parameters_are_rejected(
        #[case] uri: &str,
        #[case] expected_message: &str,
    ) {
        let (status, value) = get_json(MockCompanyRepository::new(), uri).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some(expected_message)
        );
    }

    #[actix_web::test]
    async fn negative_range_bounds_are_passed_through() {
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_by_headcount_range()
            .withf(|range| {
                *range == HeadcountRange {
                    min: -10,
                    max: Some(-1),
                }
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let (status, _) =
            get_json(repository, "/api/companies/headcount-range?min=-10&max=-1").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn top_paid_defaults_the_limit_to_five() {
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_top_paid()
            .withf(|query| query.limit() == 5)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let (status, _) = get_json(repository, "/api/companies/top-paid").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
    }

    #[rstest]
    #[case("500", 50)]
    #[case("-3", 0)]
    #[case("7", 7)]
    #[actix_web::test]
    async fn top_paid_clamps_the_limit_silently(#[case] raw: &str, #[case] expected: i64) {
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_top_paid()
            .withf(move |query| query.limit() == expected)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let uri = format!("/api/companies/top-paid?limit={raw}");
        let (status, _) = get_json(repository, &uri).await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn count_reports_the_store_total() {
        let mut repository = MockCompanyRepository::new();
        repository.expect_count().times(1).returning(|| Ok(42));

        let (status, value) = get_json(repository, "/api/companies/count").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(value, serde_json::json!({"total": 42}));
    }

    #[actix_web::test]
    async fn location_lookup_passes_the_trimmed_segment() {
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_by_location()
            .withf(|location| location == "Pune")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let (status, _) =
            get_json(repository, "/api/companies/by-location/%20Pune%20").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
    }

    #[rstest]
    #[case("/api/companies/by-location/%20%20", "location must not be blank")]
    #[case("/api/companies/by-skill/%20", "skill must not be blank")]
    #[case("/api/companies/benefit/%20", "benefit must not be blank")]
    #[actix_web::test]
    async fn blank_path_segments_are_rejected(#[case] uri: &str, #[case] expected_message: &str) {
        let (status, value) = get_json(MockCompanyRepository::new(), uri).await;

        assert_eq!(status, actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(
            value.get("error").and_then(Value::as_str),
            Some(expected_message)
        );
    }

    #[actix_web::test]
    async fn skill_lookup_hits_the_skill_port() {
        let company = sample_company();
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_by_skill()
            .withf(|skill| skill == "Rust")
            .times(1)
            .returning(move |_| Ok(vec![company.clone()]));

        let (status, value) = get_json(repository, "/api/companies/by-skill/Rust").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
        assert_eq!(value["items"][0]["hiringCriteria"]["skills"][0], "Rust");
    }

    #[actix_web::test]
    async fn benefit_lookup_uses_the_short_route_segment() {
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_find_by_benefit()
            .withf(|benefit| benefit == "Health Insurance")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let (status, _) =
            get_json(repository, "/api/companies/benefit/Health%20Insurance").await;

        assert_eq!(status, actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn store_failures_surface_the_generic_body() {
        let mut repository = MockCompanyRepository::new();
        repository
            .expect_count()
            .times(1)
            .returning(|| Err(CompanyRepositoryError::query("relation does not exist")));

        let (status, value) = get_json(repository, "/api/companies/count").await;

        assert_eq!(status, actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(value, serde_json::json!({"error": "Internal Server Error"}));
    }

    #[rstest]
    fn company_with_all_fields_serializes_camel_case() {
        let body = CompanyBody::from(sample_company());
        let value = serde_json::to_value(body).expect("serializable body");

        assert_eq!(value["id"], "3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert_eq!(value["salaryBand"]["base"], 2_400_000);
        assert_eq!(value["salaryBand"]["bonus"], 200_000);
        assert_eq!(value["hiringCriteria"]["skills"][1], "SQL");
        assert_eq!(value["benefits"][0], "Health Insurance");
    }

    #[rstest]
    fn sparse_company_serializes_to_its_id_alone() {
        let company = Company::new(CompanyId::random(), CompanyDraft::default());
        let value = serde_json::to_value(CompanyBody::from(company)).expect("serializable body");

        let object = value.as_object().expect("JSON object");
        assert_eq!(object.len(), 1, "only the id key should be present");
        assert!(object.contains_key("id"));
    }

    #[rstest]
    fn bonusless_band_omits_the_bonus_key() {
        let company = Company::new(
            CompanyId::random(),
            CompanyDraft {
                salary_band: Some(SalaryBand::new(900_000, None)),
                ..CompanyDraft::default()
            },
        );
        let value = serde_json::to_value(CompanyBody::from(company)).expect("serializable body");

        assert_eq!(value["salaryBand"]["base"], 900_000);
        assert!(value["salaryBand"].get("bonus").is_none());
    }
}
