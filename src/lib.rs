//! # blockdoc
//!
//! Given the lines of a source file and a cursor line, blockdoc recognizes
//! the declaration that begins at or after the cursor (a function or
//! initializer, a type container, or a property) and synthesizes a
//! documentation-comment template for it, with `<#...#>` placeholder tags
//! the user can tab through.
//!
//! The crate is a backtracking parser-combinator engine ([`parse`]) over a
//! multi-line character stream ([`source`]), a declaration grammar built on
//! it ([`grammar`]), and a comment synthesizer ([`comment`]). A separate
//! shallow scanner ([`marks`]) produces `// MARK:` section comments. The
//! two [`api`] entry points never fail: anything the grammar cannot
//! classify degrades to a generic one-line template.

pub mod api;
pub mod comment;
pub mod grammar;
pub mod marks;
pub mod parse;
pub mod source;

pub use api::{generate_block_comment, generate_mark_comment, parse_declaration};
pub use comment::Commentary;
pub use grammar::declarations::Declaration;
pub use source::Source;
