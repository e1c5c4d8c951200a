pub mod error;
pub mod sites;
pub mod variant;
pub mod observer;
pub mod engine;
pub mod driver;
pub mod config;
pub mod pairs;

pub use config::SaturationConfig;
pub use driver::{saturate_sizes, RunReport, SaturationReport};
pub use engine::Engine;
pub use error::{DomainError, InvariantViolation};
pub use observer::{Observer, Recorder, Silent, Step, StepRecord};
pub use variant::{Outcome, Variant};
