//! Shared types for the rewrite pipeline.
//!
//! Kept serde-serializable so consumers (the CLI's JSON mode, a TTS
//! frontend that wants to audit replacements) can emit them directly.

use serde::Serialize;

/// Which pipeline pass produced a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PassKind {
    Year,
    Month,
    Day,
    Fraction,
    Percent,
    Celsius,
    Number,
}

/// One span the pipeline rewrote.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteChange {
    pub pass: PassKind,
    pub matched: String,
    pub replacement: String,
}

/// Result of running the full pipeline over one input.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteOutcome {
    pub text: String,
    pub changes: Vec<RewriteChange>,
}
