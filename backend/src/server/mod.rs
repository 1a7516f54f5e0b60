//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use tracing::warn;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::ports::{CompanyRepository, FixtureCompanyRepository};
use backend::inbound::http::companies::{
    count_companies, list_by_benefit, list_by_headcount_range, list_by_location, list_by_skill,
    list_top_paid,
};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::DieselCompanyRepository;

/// Select the company read port for this run.
///
/// Database-backed when a pool is configured; otherwise the fixture serving
/// an empty collection, so the HTTP surface stays available for smoke tests
/// against a storeless deployment.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let companies: Arc<dyn CompanyRepository> = match &config.db_pool {
        Some(pool) => Arc::new(DieselCompanyRepository::new(pool.clone())),
        None => {
            warn!("no database pool configured; serving the empty fixture collection");
            Arc::new(FixtureCompanyRepository)
        }
    };
    web::Data::new(HttpState::new(companies))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api")
        .service(list_by_headcount_range)
        .service(list_top_paid)
        .service(count_companies)
        .service(list_by_location)
        .service(list_by_skill)
        .service(list_by_benefit);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] with the bind address and optional pool.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or registering
/// metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig {
        bind_addr,
        db_pool: _,
        workers,
    } = config;

    #[cfg(feature = "metrics")]
    let prometheus = PrometheusMetricsBuilder::new("companies")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("configure Prometheus metrics: {e}")))?;

    let mut server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    });
    if let Some(workers) = workers {
        server = server.workers(workers);
    }
    let server = server.bind(bind_addr)?.run();

    health_state.mark_ready();
    Ok(server)
}
