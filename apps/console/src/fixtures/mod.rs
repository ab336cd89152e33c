//! Demo-data generators for the dashboard. Everything here is pure over an
//! injected [`rand::Rng`], so a fixed seed reproduces the same records.

pub mod issues;
pub mod notifications;

use rand::Rng;
use thiserror::Error;
use time::Duration;
use uuid::Uuid;

pub use issues::{generate_issues, random_issue};
pub use notifications::generate_notifications;

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://picsum.photos";

/// Geographic bounding box the generated issues fall into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl GeoBounds {
    /// Vijayawada urban area, the demo municipality.
    pub const VIJAYAWADA: GeoBounds = GeoBounds {
        lat_min: 16.48,
        lat_max: 16.52,
        lng_min: 80.63,
        lng_max: 80.67,
    };
}

/// Tuning knobs of the generators. The defaults reproduce the demo
/// constants the dashboard ships with.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub bounds: GeoBounds,
    pub distance_min_km: f64,
    pub distance_max_km: f64,
    /// How far back an issue submission may date.
    pub submission_window: Duration,
    /// How far back a notification timestamp may date.
    pub notification_window: Duration,
    /// Chance that a notification is tied to an issue.
    pub issue_related_probability: f64,
    /// Chance that a notification starts out read.
    pub read_probability: f64,
    pub max_questions: usize,
    pub image_base_url: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            bounds: GeoBounds::VIJAYAWADA,
            distance_min_km: 0.5,
            distance_max_km: 10.0,
            submission_window: Duration::days(30),
            notification_window: Duration::days(3),
            issue_related_probability: 0.8,
            read_probability: 0.3,
            max_questions: 3,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeneratorConfigError {
    #[error("latitude bounds are inverted: {min} > {max}")]
    InvertedLatBounds { min: f64, max: f64 },
    #[error("longitude bounds are inverted: {min} > {max}")]
    InvertedLngBounds { min: f64, max: f64 },
    #[error("distance range is inverted: {min} > {max}")]
    InvertedDistanceRange { min: f64, max: f64 },
    #[error("{name} window must be positive")]
    EmptyWindow { name: &'static str },
    #[error("{name} must be within 0.0..=1.0, got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), GeneratorConfigError> {
        if self.bounds.lat_min > self.bounds.lat_max {
            return Err(GeneratorConfigError::InvertedLatBounds {
                min: self.bounds.lat_min,
                max: self.bounds.lat_max,
            });
        }
        if self.bounds.lng_min > self.bounds.lng_max {
            return Err(GeneratorConfigError::InvertedLngBounds {
                min: self.bounds.lng_min,
                max: self.bounds.lng_max,
            });
        }
        if self.distance_min_km > self.distance_max_km {
            return Err(GeneratorConfigError::InvertedDistanceRange {
                min: self.distance_min_km,
                max: self.distance_max_km,
            });
        }
        if self.submission_window <= Duration::ZERO {
            return Err(GeneratorConfigError::EmptyWindow { name: "submission" });
        }
        if self.notification_window <= Duration::ZERO {
            return Err(GeneratorConfigError::EmptyWindow {
                name: "notification",
            });
        }
        for (name, value) in [
            (
                "issue_related_probability",
                self.issue_related_probability,
            ),
            ("read_probability", self.read_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneratorConfigError::ProbabilityOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Stable placeholder-image URL for a given seed.
    pub(crate) fn image_url(&self, seed: Uuid) -> String {
        format!(
            "{}/seed/{}/400/400",
            self.image_base_url.trim_end_matches('/'),
            seed
        )
    }
}

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Uniform pick from a non-empty slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty());
    &items[rng.random_range(0..items.len())]
}

pub(crate) fn uppercase_code<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Version-4 UUID drawn from the injected RNG rather than OS entropy, so
/// seeded runs stay reproducible.
pub(crate) fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random()).into_uuid()
}
