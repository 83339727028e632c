// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod engine;
pub mod ingest;
pub mod lexicon;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod telemetry;

// Text analytics core (normalize, tokenize, syllables, readability, sentiment)
pub mod analyze;

// ---- Re-exports for stable public API ----
pub use crate::analyze::analyze;
pub use crate::api::create_router;
pub use crate::lexicon::{Lexicon, Lexicons};
pub use crate::record::{DocumentReport, MetricsRecord};
