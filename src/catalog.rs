//! The actor catalog: an immutable, process-scoped collection of actor
//! records and the pure query operations over it.
//!
//! The catalog is constructed once at startup and injected into the
//! application state, so tests can substitute alternative datasets.

use std::collections::HashSet;

use validator::Validate;

use crate::error::ShowcaseError;
use crate::models::{Actor, AggregateStats};

/// The immutable collection of actor records.
///
/// No create, update or delete operations exist; every method is a pure read.
#[derive(Debug)]
pub struct Catalog {
    actors: Vec<Actor>,
}

impl Catalog {
    /// Return a new Catalog from a set of records.
    ///
    /// Each record is validated and identifiers must be unique across the
    /// collection. This is the only place these invariants are enforced; the
    /// query operations assume them.
    pub fn new(actors: Vec<Actor>) -> Result<Self, ShowcaseError> {
        let mut seen = HashSet::new();
        for actor in &actors {
            actor.validate()?;
            if !seen.insert(actor.id) {
                return Err(ShowcaseError::DuplicateActorId { id: actor.id });
            }
        }
        Ok(Catalog { actors })
    }

    /// Return the hard-coded showcase dataset served by default.
    pub fn showcase() -> Self {
        let records = [
            (1, "Meryl Streep", 1949, "USA", 3),
            (2, "Daniel Day-Lewis", 1957, "UK", 3),
            (3, "Kate Winslet", 1975, "UK", 1),
            (4, "Jack Nicholson", 1937, "USA", 3),
            (5, "Penélope Cruz", 1974, "Spain", 1),
            (6, "Song Kang-ho", 1967, "South Korea", 0),
            (7, "Marion Cotillard", 1975, "France", 1),
            (8, "Gong Li", 1965, "China", 0),
            (9, "Tom Hanks", 1956, "USA", 2),
            (10, "Glenn Close", 1947, "USA", 0),
        ];
        let actors = records
            .iter()
            .map(|(id, name, birth_year, country, oscars)| {
                Actor::new(*id, name, *birth_year, country, *oscars)
                    .expect("showcase record is valid")
            })
            .collect();
        Self::new(actors).expect("showcase dataset is valid")
    }

    /// Return all records in the catalog.
    ///
    /// Fails with [ShowcaseError::EmptyCatalog] if the collection is empty.
    /// This is defensive; the showcase dataset is never empty.
    pub fn list_all(&self) -> Result<&[Actor], ShowcaseError> {
        if self.actors.is_empty() {
            return Err(ShowcaseError::EmptyCatalog);
        }
        Ok(&self.actors)
    }

    /// Return the record with the given identifier, or `None` if no record
    /// matches. Absence is a normal outcome, not an error.
    ///
    /// Fails with [ShowcaseError::InvalidActorId] if `id` is not positive.
    pub fn get_by_id(&self, id: i64) -> Result<Option<&Actor>, ShowcaseError> {
        if id < 1 {
            return Err(ShowcaseError::InvalidActorId { id: id.to_string() });
        }
        Ok(self.actors.iter().find(|actor| i64::from(actor.id) == id))
    }

    /// Return all records whose country matches `country`, case-insensitively.
    /// An empty result is a normal outcome, not an error.
    ///
    /// Fails with [ShowcaseError::EmptyCountry] if `country` is empty.
    pub fn filter_by_country(&self, country: &str) -> Result<Vec<&Actor>, ShowcaseError> {
        if country.is_empty() {
            return Err(ShowcaseError::EmptyCountry);
        }
        let needle = country.to_lowercase();
        Ok(self
            .actors
            .iter()
            .filter(|actor| actor.country.to_lowercase() == needle)
            .collect())
    }

    /// Return all records with at least one Academy Award.
    pub fn filter_award_winners(&self) -> Vec<&Actor> {
        self.actors.iter().filter(|actor| actor.oscars > 0).collect()
    }

    /// Compute summary statistics over the catalog.
    ///
    /// A single pass plus a distinct-country reduction; recomputed on every
    /// call and never stored. The average is 0.0 for an empty catalog.
    pub fn compute_stats(&self) -> AggregateStats {
        let total_actors = self.actors.len();
        let total_oscars: u64 = self.actors.iter().map(|actor| u64::from(actor.oscars)).sum();
        let mut seen = HashSet::new();
        let countries: Vec<String> = self
            .actors
            .iter()
            .filter(|actor| seen.insert(actor.country.as_str()))
            .map(|actor| actor.country.clone())
            .collect();
        let average_oscars = if total_actors > 0 {
            total_oscars as f64 / total_actors as f64
        } else {
            0.0
        };
        AggregateStats {
            total_actors,
            total_oscars,
            unique_countries: countries.len(),
            countries,
            average_oscars,
        }
    }
}
