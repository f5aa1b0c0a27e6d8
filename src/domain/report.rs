//! Comparison between a "chosen branch" distance and the nearest branch,
//! and the customer-facing messages built from it.

use crate::domain::distance::Nearest;
use crate::domain::{Address, City};
use rand::distr::{Distribution, Uniform, uniform};

/// Source of the stand-in distance to the customer's chosen branch.
pub trait MockDistance: Send + Sync {
    fn draw(&self) -> f64;
}

#[derive(Debug, thiserror::Error)]
pub enum MockRangeError {
    #[error("Mock distance bounds must be finite, got [{min_km}, {max_km}]")]
    NonFinite { min_km: f64, max_km: f64 },

    #[error("Mock distance cannot be negative, got lower bound {0}")]
    Negative(f64),

    #[error("Mock distance lower bound {min_km} is greater than upper bound {max_km}")]
    Inverted { min_km: f64, max_km: f64 },

    #[error("Mock distance range cannot be sampled")]
    Sampler(#[source] uniform::Error),
}

/// Uniform draw in an inclusive kilometer range.
#[derive(Debug, Clone, Copy)]
pub struct UniformMock {
    distribution: Uniform<f64>,
}

impl UniformMock {
    /// Bounds must be finite, non-negative and ordered. The sampler is built
    /// here so an unusable range fails at start-up rather than per request.
    pub fn new(min_km: f64, max_km: f64) -> Result<Self, MockRangeError> {
        if !min_km.is_finite() || !max_km.is_finite() || !(max_km - min_km).is_finite() {
            return Err(MockRangeError::NonFinite { min_km, max_km });
        }
        if min_km < 0.0 {
            return Err(MockRangeError::Negative(min_km));
        }
        if min_km > max_km {
            return Err(MockRangeError::Inverted { min_km, max_km });
        }

        let distribution =
            Uniform::new_inclusive(min_km, max_km).map_err(MockRangeError::Sampler)?;

        Ok(Self { distribution })
    }
}

impl MockDistance for UniformMock {
    fn draw(&self) -> f64 {
        self.distribution.sample(&mut rand::rng())
    }
}

/// Always returns the same distance.
#[derive(Debug, Clone, Copy)]
pub struct FixedMock(pub f64);

impl MockDistance for FixedMock {
    fn draw(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The chosen branch is farther than the nearest one.
    Farther,
    Nearest,
}

impl Outcome {
    /// Strictly greater is "farther"; a tie counts as already at the nearest.
    pub fn compare(chosen_branch_km: f64, closest_km: f64) -> Self {
        if chosen_branch_km > closest_km {
            Self::Farther
        } else {
            Self::Nearest
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct BranchReport {
    pub city: City,
    pub closest_address: Address,
    pub closest_distance_km: f64,
    pub chosen_branch_distance_km: f64,
    pub outcome: Outcome,
}

impl BranchReport {
    pub fn new(city: City, nearest: Nearest<'_>, chosen_branch_distance_km: f64) -> Self {
        Self {
            city,
            closest_address: nearest.branch.address.clone(),
            closest_distance_km: nearest.distance_km,
            chosen_branch_distance_km,
            outcome: Outcome::compare(chosen_branch_distance_km, nearest.distance_km),
        }
    }

    /// Message lines, meant to be separated by line breaks when rendered.
    pub fn message_lines(&self) -> Vec<String> {
        match self.outcome {
            Outcome::Farther => vec![
                format!(
                    "La distanza da {} alla Filiale scelta è {:.2} km, maggiore della distanza \
                     alla filiale più vicina ({:.2} km per {}). ",
                    self.city,
                    self.chosen_branch_distance_km,
                    self.closest_distance_km,
                    self.closest_address
                ),
                "Gentile Cliente,".to_string(),
                format!(
                    "Le ricordiamo che la sua filiale più vicina è {}. Prenoti subito un \
                     appuntamento per il contratto di Relax Banking.",
                    self.closest_address
                ),
            ],
            Outcome::Nearest => vec![format!(
                "Distanza dalla tua città ({}) alla filiale più vicina è {:.2} km per {}.",
                self.city, self.closest_distance_km, self.closest_address
            )],
        }
    }

    pub fn message(&self) -> String {
        self.message_lines().join("\n")
    }
}
