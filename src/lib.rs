//! Pacific Islands full-time/part-time employment: parses one SPC
//! extract and reshapes it into the five dashboard views.
pub mod config;
pub mod dataset;
pub mod error;
pub mod geo;
pub mod index;
pub mod loader;
pub mod output;
pub mod projections;
pub mod session;
pub mod types;
pub mod util;

pub use config::{AppConfig, Vocabulary};
pub use dataset::Dataset;
pub use error::{AppError, Result};
pub use loader::LoadReport;
pub use session::{DataCache, SelectionSlot, Ticket};
