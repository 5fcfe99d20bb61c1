//! Token-level parsers for the declaration grammar
//!
//! All of these are plain compositions of the engine's primitives. Balanced
//! spans do the heavy lifting: tuples, arrays, closures, strings, and generic
//! clauses are each consumed as opaque delimiter-matched text, which is what
//! keeps the grammar small.

use serde::Serialize;

use crate::parse::{
    any, balanced, balanced_ws, double, first, first_of, int, lit, lit_ws, optional, pat, pat_ws,
    zip, zip3, Parser,
};

/// Declaration modifiers recognized ahead of a declaration keyword, in match
/// order. Parenthesized variants are atomic and must precede their bare
/// prefixes.
pub(crate) const MODIFIERS: &[&str] = &[
    "static",
    "final",
    "mutating",
    "override",
    "convenience",
    "required",
    "weak",
    "dynamic",
    "open",
    "public",
    "internal",
    "fileprivate(set)",
    "fileprivate",
    "private(set)",
    "private",
];

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parser for identifiers such as property, struct, and enum names as well
/// as argument labels.
pub fn identifier() -> Parser<String> {
    pat(is_identifier_char)
}

/// Identifier variant that accepts dotted names such as `Swift.Codable`;
/// used for supertype and conformance names.
pub fn dotted_identifier() -> Parser<String> {
    pat(|c| is_identifier_char(c) || c == '.')
}

/// A balanced `<...>` clause attached directly to a name.
pub fn generic_clause() -> Parser<String> {
    balanced_ws('<', '>', false)
}

/// An identifier with an optional attached generic clause, kept in the
/// resulting spelling (`Array<Int>` stays `Array<Int>`).
pub fn type_identifier() -> Parser<String> {
    zip(identifier(), optional(generic_clause())).map(|(name, clause)| match clause {
        Some(clause) => format!("{name}{clause}"),
        None => name,
    })
}

/// Parser for attributes that start with `@`, with an optional attached
/// argument list; the argument text is consumed but not retained.
pub fn attribute() -> Parser<String> {
    zip3(
        lit("@"),
        pat_ws(false, is_identifier_char),
        optional(balanced_ws('(', ')', false)),
    )
    .map(|(at, name, _)| format!("{at}{name}"))
}

/// Parser for a possibly-empty run of attributes and declaration modifiers,
/// separated by single raw spaces.
pub fn modifiers() -> Parser<Vec<String>> {
    let mut alternatives = vec![attribute()];
    alternatives.extend(MODIFIERS.iter().map(|modifier| lit(modifier)));
    any(first(alternatives), lit_ws(" ", false))
}

/// Parser for an array type or literal; the interior is opaque.
pub fn array_type() -> Parser<String> {
    balanced('[', ']')
}

/// Parser for a tuple type or argument list; the interior is opaque.
pub fn tuple_type() -> Parser<String> {
    balanced('(', ')')
}

/// Parser for a closure body used as a default value.
pub fn closure_value() -> Parser<String> {
    balanced('{', '}')
}

/// Parser for a string literal; escaped quotes are handled by the balanced
/// scan.
pub fn string_value() -> Parser<String> {
    balanced('"', '"')
}

/// Recursion limit for the mutually recursive `types`/`closure` rules.
/// Past it the closure alternative drops out and a chain of arrows reads as
/// a bare tuple, which degrades the result instead of growing the stack.
const MAX_TYPE_DEPTH: usize = 128;

/// Parser for type spellings.
///
/// Order is significant: a closure type must be tried before a bare tuple,
/// else `(Int) -> Void` would be recognized as just `(Int)`. The
/// alternatives are built lazily because `closure` refers back to `types`.
pub fn types() -> Parser<String> {
    types_at(0)
}

/// Parser for a closure type spelling; the result is the calling tuple, a
/// canonical `->`, and the result type.
pub fn closure() -> Parser<String> {
    closure_at(0)
}

fn types_at(depth: usize) -> Parser<String> {
    first_of(move || {
        let mut alternatives = Vec::new();
        if depth < MAX_TYPE_DEPTH {
            alternatives.push(closure_at(depth + 1));
        }
        alternatives.push(array_type());
        alternatives.push(tuple_type());
        alternatives.push(type_identifier());
        alternatives
    })
}

fn closure_at(depth: usize) -> Parser<String> {
    zip3(tuple_type(), lit("->"), types_at(depth))
        .map(|(args, _, result)| format!("{args}->{result}"))
}

/// A parsed type spelling with the trailing optional marker split off.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Type {
    pub spec: String,
    pub optional: bool,
}

impl Type {
    /// Parser for any type specification, with support for a directly
    /// attached `?`.
    pub fn parser() -> Parser<Type> {
        zip(types(), optional(lit_ws("?", false))).map(|(spec, question)| Type {
            spec,
            optional: question.is_some(),
        })
    }

    /// The full spelling, with the optional marker re-attached.
    pub fn spelling(&self) -> String {
        if self.optional {
            format!("{}?", self.spec)
        } else {
            self.spec.clone()
        }
    }
}

/// Parser for function names. Strips generic clauses and anything after the
/// first whitespace, so operator spellings like `==` survive while
/// `foo<T: Equatable>` reports `foo`.
pub fn function_name() -> Parser<String> {
    pat(|c| c != '(').map(|name| match name.find(|c: char| c.is_whitespace() || c == '<') {
        Some(index) => name[..index].to_string(),
        None => name,
    })
}

/// Parser that recognizes a default value structurally; the content is never
/// retained, it only needs to be consumed so parsing can continue past it.
pub fn value() -> Parser<()> {
    first(vec![
        string_value().forget(),
        tuple_type().forget(),
        array_type().forget(),
        closure_value().forget(),
        // double before int so `1.5` is consumed whole
        double().forget(),
        int().forget(),
        lit("true").forget(),
        lit("false").forget(),
    ])
}

/// Parser for a default value assignment on an argument, reduced to its
/// presence.
pub fn default_value() -> Parser<bool> {
    optional(zip(lit("="), value())).map(|assignment| assignment.is_some())
}
