//! Report renderers for analysis results.
//!
//! - [`terminal`] — colored summary box plus a per-signal breakdown table; respects `--quiet`.

pub mod terminal;
