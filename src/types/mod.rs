//! Wire types for the Gemini `generateContent` API.

pub mod content;
mod request;
mod response;

pub use content::{Content, InlineData, Part};
pub use request::{GenerateContentRequest, GenerationConfig, GoogleSearch, ImageConfig, Tool};
pub use response::{
    Candidate, GenerateContentResponse, GroundingChunk, GroundingMetadata, WebChunk,
};
