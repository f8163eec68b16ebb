//! Keyword-driven privacy-risk scoring for consent notices.
//!
//! - [`rules`] — the canonical rule tables (keywords, weights, caps) as static data.
//! - [`retention`] — retention-period tiering, including the "N년" duration scan.
//! - [`scorer`] — entry point that evaluates every rule and builds the
//!   score, label and explanatory bullets.

pub mod retention;
pub mod rules;
pub mod scorer;

pub use scorer::{evaluate, score};
