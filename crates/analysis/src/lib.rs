//! StonkGaze Analysis Crate
//!
//! Turns free-form webpage text into a structured trade recommendation by
//! prompting a generative completion service. The persona dial (0-100)
//! selects how unhinged the instruction template is; the reply is parsed
//! into a [`Recommendation`] the market-data layer can act on.
//!
//! The completion service is an opaque collaborator: this crate only cares
//! that it accepts a system prompt and returns a JSON object with a ticker,
//! an asset type and optionally a forecast.

pub mod engine;
pub mod error;
pub mod prompt;
pub mod types;

pub use engine::{AnalysisEngine, OpenAiChatEngine, OpenAiConfig, DEFAULT_API_BASE};
pub use error::AnalysisError;
pub use prompt::{temperature_for, PersonaTier};
pub use types::Recommendation;
