//! Terminal dashboard for the actor showcase API.
//!
//! Fetches the actor list and the aggregate statistics over HTTP and renders
//! them as text. Each fetch is independent: a failed call produces a local
//! warning and the remaining sections still render. There are no retries.

use actor_showcase::models::{Actor, AggregateStats, ApiStatus, Envelope};

use clap::Parser;
use hyper::client::HttpConnector;
use hyper::{body, Client, StatusCode, Uri};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Actor showcase dashboard command line interface
#[derive(Debug, Parser)]
struct CommandLineArgs {
    /// Base URL of the actor showcase API
    #[arg(long, default_value = "http://localhost:8000", env = "SHOWCASE_API_URL")]
    api_url: String,
}

/// Dashboard fetch error type
#[derive(Debug, Error)]
enum DashboardError {
    /// The API base URL or a derived endpoint URL is malformed
    #[error("invalid API URL")]
    InvalidUri(#[from] hyper::http::uri::InvalidUri),

    /// The HTTP exchange itself failed
    #[error("request failed")]
    Http(#[from] hyper::Error),

    /// The API answered with an unexpected status
    #[error("unexpected response status {status}")]
    Status { status: StatusCode },

    /// The response body was not the expected JSON shape
    #[error("response is not valid JSON")]
    Json(#[from] serde_json::Error),
}

/// Fetch a URL and deserialise the JSON response body.
async fn fetch_json<T: DeserializeOwned>(
    client: &Client<HttpConnector>,
    url: &str,
) -> Result<T, DashboardError> {
    let uri: Uri = url.parse()?;
    let response = client.get(uri).await?;
    if !response.status().is_success() {
        return Err(DashboardError::Status {
            status: response.status(),
        });
    }
    let bytes = body::to_bytes(response.into_body()).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Unwrap an envelope, treating `success` false as absent data.
fn envelope_data<T>(envelope: Envelope<T>) -> Option<T> {
    if envelope.success {
        envelope.data
    } else {
        None
    }
}

/// Render one actor as a fixed-width table row.
fn format_actor_row(actor: &Actor) -> String {
    let oscars = if actor.oscars > 0 {
        format!("{}", actor.oscars)
    } else {
        "-".to_string()
    };
    format!(
        "{:<4} {:<22} {:<13} {:>6} {:>7}",
        actor.id, actor.name, actor.country, actor.birth_year, oscars
    )
}

/// Render the actor table section.
fn render_actors(actors: &[Actor]) {
    println!("Actors");
    println!(
        "{:<4} {:<22} {:<13} {:>6} {:>7}",
        "id", "name", "country", "born", "oscars"
    );
    for actor in actors {
        println!("{}", format_actor_row(actor));
    }
    println!("Showing {} actors from the API", actors.len());
}

/// Render the statistics section.
fn render_stats(stats: &AggregateStats) {
    println!("Statistics");
    println!("  total actors:    {}", stats.total_actors);
    println!("  total oscars:    {}", stats.total_oscars);
    println!("  countries:       {}", stats.unique_countries);
    println!("  average oscars:  {:.1}", stats.average_oscars);
    println!("Countries");
    for country in &stats.countries {
        println!("  - {}", country);
    }
}

#[tokio::main]
async fn main() {
    let args = CommandLineArgs::parse();
    let client = Client::new();

    println!("Actor Showcase dashboard ({})", args.api_url);
    println!();

    match fetch_json::<ApiStatus>(&client, &format!("{}/api/status", args.api_url)).await {
        Ok(status) => println!("API status: {}", status.status),
        Err(err) => println!("warning: API not available: {}", err),
    }
    println!();

    match fetch_json::<Envelope<Vec<Actor>>>(&client, &format!("{}/actors", args.api_url)).await {
        Ok(envelope) => match envelope_data(envelope) {
            Some(actors) => render_actors(&actors),
            None => println!("warning: no actors found"),
        },
        Err(err) => println!("warning: could not fetch actors: {}", err),
    }
    println!();

    match fetch_json::<Envelope<AggregateStats>>(&client, &format!("{}/stats", args.api_url)).await
    {
        Ok(envelope) => match envelope_data(envelope) {
            Some(stats) => render_stats(&stats),
            None => println!("warning: no statistics available"),
        },
        Err(err) => println!("warning: could not fetch statistics: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_row_with_awards() {
        let actor = Actor::new(1, "Meryl Streep", 1949, "USA", 3).unwrap();
        let row = format_actor_row(&actor);
        assert!(row.starts_with("1    Meryl Streep"));
        assert!(row.ends_with("3"));
    }

    #[test]
    fn format_row_without_awards() {
        let actor = Actor::new(10, "Glenn Close", 1947, "USA", 0).unwrap();
        let row = format_actor_row(&actor);
        assert!(row.ends_with("-"));
    }

    #[test]
    fn envelope_data_respects_success_flag() {
        let present = Envelope::single(1, "found");
        assert_eq!(envelope_data(present), Some(1));
        let absent = Envelope::<i32>::missing("not found");
        assert_eq!(envelope_data(absent), None);
    }
}
