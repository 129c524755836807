//! Generative model clients.

pub mod gemini;

pub use gemini::GeminiModel;
