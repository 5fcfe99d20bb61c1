//! Backtracking parser-combinator engine
//!
//! The engine is built around [`Parser`], a clonable wrapper over a scanner
//! function from cursor state to an optional value. Primitives (`lit`, `pat`,
//! `balanced`, `int`, `double`) and combinators (`zip`, `first`, `any`,
//! `optional`, `map`, `flat_map`) compose by ordinary function calls; failure
//! is `None` and drives alternation, never an error value.
//!
//! The central invariant: every combinator that can fail after partially
//! advancing the cursor restores it to the pre-attempt checkpoint on failure.
//! Cursors are plain `Copy` positions, so a checkpoint is just a copy.

pub mod combinators;
pub mod parser;

pub use combinators::{
    always, any, balanced, balanced_ws, double, first, first_of, int, lit, lit_opt, lit_ws,
    optional, pat, pat_ws, zip, zip3, zip4, zip5, zip6, zip7, zip8,
};
pub use parser::Parser;
