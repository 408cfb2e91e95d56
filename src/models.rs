//! Data types and associated functions and methods

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

/// An actor record in the catalog.
///
/// All fields are validated at construction time via [Actor::new]; records are
/// never mutated afterwards.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct Actor {
    /// Unique identifier of the actor
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: u32,
    /// Full name
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters"))]
    pub name: String,
    /// Year of birth
    #[validate(range(min = 1850, max = 2020, message = "birth_year must be plausible"))]
    pub birth_year: i32,
    /// Country of origin or residence
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
    /// Number of Academy Awards won
    pub oscars: u32,
}

impl Actor {
    /// Return a validated Actor.
    ///
    /// # Arguments
    ///
    /// * `id`: Unique positive identifier
    /// * `name`: Full name, non-empty
    /// * `birth_year`: Year of birth, within a plausible historical range
    /// * `country`: Country name, non-empty
    /// * `oscars`: Number of Academy Awards won
    pub fn new(
        id: u32,
        name: &str,
        birth_year: i32,
        country: &str,
        oscars: u32,
    ) -> Result<Self, ValidationErrors> {
        let actor = Actor {
            id,
            name: name.to_string(),
            birth_year,
            country: country.to_string(),
            oscars,
        };
        actor.validate()?;
        Ok(actor)
    }
}

/// Summary statistics derived from the catalog.
///
/// Computed fresh on each request; never stored. Field names form the wire
/// contract consumed by the dashboard.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Number of records in the catalog
    pub total_actors: usize,
    /// Sum of awards across all records
    pub total_oscars: u64,
    /// Number of distinct countries
    pub unique_countries: usize,
    /// Distinct country names, in no particular order
    pub countries: Vec<String>,
    /// Mean award count per actor, 0.0 for an empty catalog
    pub average_oscars: f64,
}

/// The uniform response envelope returned by every data-bearing endpoint.
///
/// Optional fields are omitted from the serialised JSON when absent. `count`
/// is populated only on list-returning exchanges.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct Envelope<T> {
    /// Whether the exchange produced the requested data
    pub success: bool,
    /// The payload, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable description of the outcome
    pub message: String,
    /// Human-readable error text, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of elements in a list payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> Envelope<T> {
    /// Return a successful envelope wrapping a single payload.
    pub fn single(data: T, message: impl Into<String>) -> Self {
        Envelope {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            count: None,
        }
    }

    /// Return an envelope signalling a missing record: the exchange succeeds
    /// at the transport level but the envelope reports failure.
    ///
    /// Used for the single-record lookup when no record matches, with no
    /// error raised to the transport layer.
    pub fn missing(message: impl Into<String>) -> Self {
        Envelope {
            success: false,
            data: None,
            message: message.into(),
            error: None,
            count: None,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Return a successful envelope wrapping a list payload and its count.
    pub fn list(data: Vec<T>, message: impl Into<String>) -> Self {
        let count = data.len();
        Envelope {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            count: Some(count),
        }
    }
}

/// Liveness and service information payload served at the API root.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ServiceInfo {
    /// Service name
    pub message: String,
    /// Crate version
    pub version: String,
    /// Pointer to the status endpoint
    pub docs: String,
}

impl ServiceInfo {
    /// Return the static service information payload.
    pub fn new() -> Self {
        ServiceInfo {
            message: "Actor Showcase API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            docs: "/api/status".to_string(),
        }
    }
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Static health payload enumerating the available endpoints.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ApiStatus {
    /// Health indicator, always "ok" while the process is serving
    pub status: String,
    /// Service name
    pub service: String,
    /// Paths served by this API
    pub endpoints: Vec<String>,
}

impl ApiStatus {
    /// Return the static health payload.
    pub fn new() -> Self {
        ApiStatus {
            status: "ok".to_string(),
            service: "actor-showcase".to_string(),
            endpoints: [
                "/",
                "/actors",
                "/actors/{id}",
                "/actors/country/{country}",
                "/actors/oscar-winners",
                "/stats",
                "/api/status",
                "/metrics",
            ]
            .iter()
            .map(|endpoint| endpoint.to_string())
            .collect(),
        }
    }
}

impl Default for ApiStatus {
    fn default() -> Self {
        Self::new()
    }
}
