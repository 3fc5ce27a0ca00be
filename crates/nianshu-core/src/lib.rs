//! nianshu-core — Numeral verbalization for Chinese TTS.
//!
//! Rewrites Arabic-numeral spans in running text into spoken-form Chinese
//! (一百二十三, 百分之五十, …) so a speech frontend reads numbers the way
//! a human would. No async runtime, no I/O, no platform dependencies.

pub mod error;
pub mod rewrite;
pub mod split;
pub mod types;
pub mod verbalize;

pub use error::VerbalizeError;
pub use rewrite::{rewrite, verbalize_numerals};
