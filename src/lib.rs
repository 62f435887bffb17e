//! mmquery — natural-language email search → MailMate toolbar query.
//!
//! The binary is a thin shell over two layers: the model-backed translator in
//! [`translator`] and the interactive loop in [`repl`]. The rule-based core
//! lives in `mmquery-core` and the model backends in `mmquery-model`.
//!
//! # Architecture
//!
//! ```text
//! CLI / REPL ──► Translator ──► QueryModel (Gemini, OpenAI-compatible)
//!                    │
//!                    └── on any failure ──► rule-based Builder
//! ```

pub mod repl;
pub mod translator;

pub use translator::Translator;
