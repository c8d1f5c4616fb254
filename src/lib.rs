pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod rng;
pub mod severity;
pub mod simulator;
pub mod snapshot;
pub mod trend;
pub mod web;

pub use catalog::{Catalog, CatalogKind, LocationEntry};
pub use dashboard::{Dashboard, DashboardFrame};
pub use error::TrackerError;
pub use severity::{classify, SeverityTier};
pub use simulator::{generate_reading, EnvironmentalReading};
pub use trend::{generate_trend, TrendPoint};
