//! The query surface: routes, request handlers and the envelope translation
//! between catalog results and HTTP responses.

use crate::app_state::{AppState, SharedAppState};
use crate::cli::CommandLineArgs;
use crate::error::ShowcaseError;
use crate::metrics;
use crate::models::{Actor, AggregateStats, ApiStatus, Envelope, ServiceInfo};

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderValue,
    routing::get,
    Json, Router,
};

use tower::{Layer, ServiceBuilder};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;

/// The app service type, a router with trailing slashes normalised.
pub type Service = NormalizePath<Router>;

/// Return the [Service] for the given arguments and catalog.
pub fn service(args: &CommandLineArgs, catalog: Catalog) -> Service {
    let state = Arc::new(AppState::new(args, catalog));
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Return the API router with all endpoints and middleware layers.
///
/// The catalog travels in the shared state rather than a module-level
/// singleton, so tests can route against alternative datasets.
pub fn router(state: SharedAppState) -> Router {
    let cors = cors_layer(&state.args.cors_origins);
    Router::new()
        .route("/", get(root))
        .route("/actors", get(list_actors))
        .route("/actors/:id", get(get_actor))
        .route("/actors/country/:country", get(list_actors_by_country))
        .route("/actors/oscar-winners", get(list_award_winners))
        .route("/stats", get(get_stats))
        .route("/api/status", get(api_status))
        .route("/metrics", get(metrics::metrics_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .on_request(metrics::request_counter)
                        .on_response(metrics::record_response_metrics),
                )
                .layer(cors),
        )
}

/// Return a CORS layer allowing the configured origins.
///
/// All headers and methods needed for simple GET exchanges are allowed. An
/// empty list or a "*" entry falls back to a fully permissive layer.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Liveness and service information.
async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::new())
}

/// Static health payload enumerating the available endpoints.
async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus::new())
}

/// List all actors in the catalog.
async fn list_actors(
    State(state): State<SharedAppState>,
) -> Result<Json<Envelope<Vec<Actor>>>, ShowcaseError> {
    let actors = state.catalog.list_all()?.to_vec();
    let message = format!("Retrieved {} actors", actors.len());
    Ok(Json(Envelope::list(actors, message)))
}

/// Look up a single actor by identifier.
///
/// A missing record is reported as a successful exchange carrying a failure
/// envelope: HTTP 200 with `success` false and a descriptive message. Only a
/// malformed identifier surfaces as a transport-level error.
async fn get_actor(
    State(state): State<SharedAppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Actor>>, ShowcaseError> {
    let id: i64 = id
        .parse()
        .map_err(|_| ShowcaseError::InvalidActorId { id: id.clone() })?;
    let envelope = match state.catalog.get_by_id(id)? {
        Some(actor) => Envelope::single(actor.clone(), format!("Actor with id {} found", id)),
        None => Envelope::missing(format!("Actor with id {} not found", id)),
    };
    Ok(Json(envelope))
}

/// List actors from a given country, matched case-insensitively.
async fn list_actors_by_country(
    State(state): State<SharedAppState>,
    Path(country): Path<String>,
) -> Result<Json<Envelope<Vec<Actor>>>, ShowcaseError> {
    let actors: Vec<Actor> = state
        .catalog
        .filter_by_country(&country)?
        .into_iter()
        .cloned()
        .collect();
    let message = if actors.is_empty() {
        format!("No actors found for country '{}'", country)
    } else {
        format!("Retrieved {} actors from '{}'", actors.len(), country)
    };
    Ok(Json(Envelope::list(actors, message)))
}

/// List actors with at least one Academy Award.
async fn list_award_winners(State(state): State<SharedAppState>) -> Json<Envelope<Vec<Actor>>> {
    let winners: Vec<Actor> = state
        .catalog
        .filter_award_winners()
        .into_iter()
        .cloned()
        .collect();
    let message = format!("Retrieved {} Oscar winners", winners.len());
    Json(Envelope::list(winners, message))
}

/// Summary statistics over the catalog, computed fresh per request.
async fn get_stats(State(state): State<SharedAppState>) -> Json<Envelope<AggregateStats>> {
    let stats = state.catalog.compute_stats();
    Json(Envelope::single(stats, "Catalog statistics computed"))
}

#[cfg(test)]
mod tests {
    // https://github.com/tokio-rs/axum/blob/main/examples/testing/src/main.rs

    use super::*;
    use crate::test_utils;

    use axum::{
        body::Body,
        http::{self, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt; // for `oneshot` and `ready`

    fn test_router(catalog: Catalog) -> Router {
        let state = Arc::new(AppState::new(&test_utils::get_test_args(), catalog));
        router(state)
    }

    // Make a oneshot GET request against a router over the showcase dataset.
    async fn get(uri: &str) -> Response {
        test_router(Catalog::showcase())
            .oneshot(
                Request::builder()
                    .method(http::Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    // Jump through the hoops to get the body as a string.
    async fn body_string(response: Response) -> String {
        String::from_utf8(
            hyper::body::to_bytes(response.into_body())
                .await
                .unwrap()
                .to_vec(),
        )
        .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[tokio::test]
    async fn root_info() {
        let response = get("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let info: ServiceInfo = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(info.message, "Actor Showcase API");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn api_status_payload() {
        let response = get("/api/status").await;
        assert_eq!(response.status(), StatusCode::OK);
        let status: ApiStatus = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(status.status, "ok");
        assert!(status.endpoints.contains(&"/actors".to_string()));
    }

    #[tokio::test]
    async fn list_all_actors() {
        let response = get("/actors").await;
        assert_eq!(response.status(), StatusCode::OK);
        let envelope: Envelope<Vec<Actor>> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.count, Some(10));
        assert_eq!(envelope.data.unwrap().len(), 10);
        assert!(envelope.error.is_none());
    }

    #[tokio::test]
    async fn list_actors_uses_injected_catalog() {
        let response = test_router(test_utils::get_test_catalog())
            .oneshot(
                Request::builder()
                    .method(http::Method::GET)
                    .uri("/actors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let envelope: Envelope<Vec<Actor>> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(envelope.count, Some(3));
    }

    #[tokio::test]
    async fn get_actor_present() {
        let response = get("/actors/1").await;
        assert_eq!(response.status(), StatusCode::OK);
        let envelope: Envelope<Actor> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(envelope.success);
        let actor = envelope.data.unwrap();
        assert_eq!(actor.id, 1);
        assert_eq!(actor.name, "Meryl Streep");
    }

    #[tokio::test]
    async fn get_actor_absent_is_http_ok() {
        let response = get("/actors/999").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], Value::Bool(false));
        assert!(json.get("data").is_none());
        assert!(json.get("error").is_none());
        assert_eq!(json["message"], "Actor with id 999 not found");
    }

    #[tokio::test]
    async fn get_actor_non_numeric_id() {
        let response = get("/actors/abc").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], Value::Bool(false));
        assert_eq!(json["message"], "invalid actor id 'abc'");
        assert_eq!(json["error"], "invalid argument");
    }

    #[tokio::test]
    async fn get_actor_non_positive_id() {
        let response = get("/actors/0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "invalid argument");
    }

    #[tokio::test]
    async fn list_actors_by_country_case_insensitive() {
        for uri in ["/actors/country/uk", "/actors/country/UK"] {
            let response = get(uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            let envelope: Envelope<Vec<Actor>> =
                serde_json::from_str(&body_string(response).await).unwrap();
            assert!(envelope.success);
            assert_eq!(envelope.count, Some(2));
            assert!(envelope
                .data
                .unwrap()
                .iter()
                .all(|actor| actor.country == "UK"));
        }
    }

    #[tokio::test]
    async fn list_actors_by_country_no_match() {
        let response = get("/actors/country/Narnia").await;
        assert_eq!(response.status(), StatusCode::OK);
        let envelope: Envelope<Vec<Actor>> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.count, Some(0));
        assert_eq!(envelope.message, "No actors found for country 'Narnia'");
    }

    #[tokio::test]
    async fn list_award_winners_subset() {
        let response = get("/actors/oscar-winners").await;
        assert_eq!(response.status(), StatusCode::OK);
        let envelope: Envelope<Vec<Actor>> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.count, Some(7));
        assert!(envelope.data.unwrap().iter().all(|actor| actor.oscars > 0));
    }

    #[tokio::test]
    async fn stats_showcase_values() {
        let response = get("/stats").await;
        assert_eq!(response.status(), StatusCode::OK);
        let envelope: Envelope<AggregateStats> =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert!(envelope.success);
        let stats = envelope.data.unwrap();
        assert_eq!(stats.total_actors, 10);
        assert_eq!(stats.total_oscars, 14);
        assert_eq!(stats.unique_countries, 6);
        assert!((stats.average_oscars - 1.4).abs() < 1e-9);
    }

    #[tokio::test]
    async fn metrics_exposition() {
        let response = get("/metrics").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route() {
        let response = get("/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cors_allows_configured_origin() {
        let response = test_router(Catalog::showcase())
            .oneshot(
                Request::builder()
                    .method(http::Method::GET)
                    .uri("/actors")
                    .header(http::header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            response
                .headers()
                .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:5173"
        );
    }
}
