//! Client library for the joboard job-listing aggregator.
//!
//! Two pieces compose the whole client: the [`loader::JobLoader`] issues a
//! one-shot fetch against the aggregator endpoint, and the
//! [`board::JobBoard`] holds the working set plus filter selection and
//! republishes a derived, ordered view on every change. A failed load never
//! crashes anything: the board installs the configured fallback and flags
//! degraded mode.

pub mod board;
pub mod config;
pub mod demo;
pub mod display;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod sources;

pub use board::{BoardView, JobBoard, LoadStatus};
pub use config::{AppConfig, FallbackPolicy};
pub use error::LoadError;
pub use filter::{Choice, FilterMode, Selection};
pub use loader::JobLoader;
pub use model::{JobId, JobPosting};
pub use sources::{SourceBadge, SourceCatalog};
