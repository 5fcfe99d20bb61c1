//! Declaration grammar built on the combinator engine
//!
//! The grammar recognizes a structural subset of Swift-like declarations:
//! enough to extract a declaration's shape (name, arguments, return, kind)
//! without a full-language grammar or type checker. `lexical` holds the
//! reusable token-level parsers; `declarations` composes them into the three
//! declaration shapes and the top-level dispatcher.

pub mod declarations;
pub mod lexical;
