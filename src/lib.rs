//! CertAssist: certificate information fulfillment core
//!
//! Custom fulfillment logic for a conversational assistant that answers
//! questions about government-issued certificates (passports, driving
//! licenses, ration cards, …).
//!
//! ## Architecture
//!
//! - **Knowledge Store**: static JSON fact table, loaded once, read-only
//! - **Fact Handlers**: one lookup/format routine per question topic
//! - **Normalizer**: spelling correction and synonym-to-concept folding
//!   applied to utterances before intent classification
//!
//! The host dialogue runtime decides which handler to invoke and supplies
//! the tracked certificate identifier; this crate only looks facts up and
//! renders them.

pub mod config;
pub mod handlers;
pub mod knowledge;
pub mod normalize;
pub mod types;

// Re-export the host-facing surface
pub use config::RuntimeConfig;
pub use handlers::{dispatch, HandlerResponse, StateEvent, Topic};
pub use knowledge::{KnowledgeError, KnowledgeStore};
pub use normalize::{ConceptTable, Normalizer};
pub use types::{CertificateRecord, FieldValue};
