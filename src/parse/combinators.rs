//! Primitives and combinators for building parsers
//!
//! Everything here is built on [`capture`]: skip whitespace if asked, probe
//! forward with a scanning closure, and commit the cursor only when the
//! probed text passes a check. Failed attempts leave the cursor exactly
//! where it started, which is what lets [`first`] try alternatives cleanly
//! and lets the grammar's top level fall through to its generic fallback.

use crate::parse::Parser;
use crate::source::Cursor;

/// Nesting levels beyond this make [`balanced`] fail rather than recurse
/// into pathological input.
const MAX_NESTING_DEPTH: usize = 128;

/// Scan over text and capture the result.
///
/// Skips leading whitespace when `skip_ws` is set, runs `scan` on a probe
/// cursor, and hands the covered text to `check`. The cursor is advanced
/// only if `check` produces a value; otherwise it is left untouched.
pub(crate) fn capture<'s, A>(
    it: &mut Cursor<'s>,
    skip_ws: bool,
    scan: impl FnOnce(&mut Cursor<'s>),
    check: impl FnOnce(&str) -> Option<A>,
) -> Option<A> {
    let mut start = *it;
    if skip_ws {
        start.skip_while(char::is_whitespace);
    }
    let mut probe = start;
    scan(&mut probe);
    let value = check(&start.span(&probe))?;
    *it = probe;
    Some(value)
}

/// Parser for a literal value, skipping leading whitespace.
pub fn lit(text: &str) -> Parser<String> {
    lit_opt(text, false, true)
}

/// Parser for a literal value with explicit whitespace handling.
pub fn lit_ws(text: &str, skip_ws: bool) -> Parser<String> {
    lit_opt(text, false, skip_ws)
}

/// Parser for a literal value.
///
/// Consumes exactly the literal's length in characters and succeeds iff they
/// equal `text`, or unconditionally when `optional` is set, which models a
/// separator that is assumed present regardless of what is actually there.
pub fn lit_opt(text: &str, optional: bool, skip_ws: bool) -> Parser<String> {
    let text = text.to_string();
    let count = text.chars().count();
    Parser::new(move |it| {
        capture(
            it,
            skip_ws,
            |probe| probe.skip_count(count),
            |covered| {
                if covered == text || optional {
                    Some(text.clone())
                } else {
                    None
                }
            },
        )
    })
}

/// Parser for a maximal non-empty run of characters in a class.
pub fn pat(cond: impl Fn(char) -> bool + Send + Sync + 'static) -> Parser<String> {
    pat_ws(true, cond)
}

/// Parser for a character-class run with explicit whitespace handling.
pub fn pat_ws(skip_ws: bool, cond: impl Fn(char) -> bool + Send + Sync + 'static) -> Parser<String> {
    Parser::new(move |it| {
        capture(
            it,
            skip_ws,
            |probe| probe.skip_while(&cond),
            |covered| {
                if covered.is_empty() {
                    None
                } else {
                    Some(covered.to_string())
                }
            },
        )
    })
}

/// Parser that always matches without consuming any text.
pub fn always<A: Clone + Send + Sync + 'static>(value: A) -> Parser<A> {
    Parser::new(move |_| Some(value.clone()))
}

/// Parser for decimal integer values.
pub fn int() -> Parser<i64> {
    Parser::new(|it| {
        capture(
            it,
            true,
            |probe| probe.skip_while(|c| c.is_ascii_digit()),
            |covered| covered.parse().ok(),
        )
    })
}

/// Parser for floating-point values.
pub fn double() -> Parser<f64> {
    Parser::new(|it| {
        capture(
            it,
            true,
            |probe| probe.skip_while(|c| c.is_ascii_digit() || c == '.'),
            |covered| covered.parse().ok(),
        )
    })
}

/// Parser that returns the first success among the alternatives, tried in
/// the given order against independent checkpoints.
///
/// Order is the tie-break mechanism: an alternative that would also match is
/// never consulted once an earlier one succeeds.
pub fn first<A: 'static>(parsers: Vec<Parser<A>>) -> Parser<A> {
    Parser::new(move |it| scan_first(&parsers, it))
}

/// Like [`first`], but the alternatives are built each time the parser runs.
///
/// This one level of indirection is what breaks construction-time recursion
/// between mutually recursive rules.
pub fn first_of<A: 'static>(
    alternatives: impl Fn() -> Vec<Parser<A>> + Send + Sync + 'static,
) -> Parser<A> {
    Parser::new(move |it| scan_first(&alternatives(), it))
}

fn scan_first<A: 'static>(parsers: &[Parser<A>], it: &mut Cursor<'_>) -> Option<A> {
    for p in parsers {
        let mut attempt = *it;
        if let Some(value) = p.scan(&mut attempt) {
            *it = attempt;
            return Some(value);
        }
    }
    None
}

/// Parser for zero or more matches of `p` separated by `separated_by`.
///
/// Always succeeds, possibly with an empty collection. A separator that is
/// not followed by another match is left unconsumed.
pub fn any<A: 'static, S: 'static>(p: Parser<A>, separated_by: Parser<S>) -> Parser<Vec<A>> {
    Parser::new(move |it| {
        let mut matches = Vec::new();
        let mut committed = *it;
        let mut next_start = *it;
        loop {
            let mut attempt = next_start;
            let Some(value) = p.scan(&mut attempt) else {
                break;
            };
            matches.push(value);
            committed = attempt;
            let mut after_separator = attempt;
            if separated_by.scan(&mut after_separator).is_none() {
                break;
            }
            next_start = after_separator;
        }
        *it = committed;
        Some(matches)
    })
}

/// Parser for an optional item; always succeeds.
pub fn optional<A: 'static>(p: Parser<A>) -> Parser<Option<A>> {
    Parser::new(move |it| {
        let mut attempt = *it;
        match p.scan(&mut attempt) {
            Some(value) => {
                *it = attempt;
                Some(Some(value))
            }
            None => Some(None),
        }
    })
}

/// Parser for a span between a pair of delimiters, skipping leading
/// whitespace.
pub fn balanced(open: char, close: char) -> Parser<String> {
    balanced_ws(open, close, true)
}

/// Parser for a span between a pair of delimiters.
///
/// Tracks nesting of the same pair so the interior never needs its own
/// grammar, and treats a backslash as an escape that makes the following
/// character inert. The returned span includes both delimiters. Fails,
/// restoring the cursor, when the input ends before the span closes or the
/// nesting exceeds [`MAX_NESTING_DEPTH`].
pub fn balanced_ws(open: char, close: char, skip_ws: bool) -> Parser<String> {
    Parser::new(move |it| {
        let original = *it;
        if skip_ws {
            it.skip_while(char::is_whitespace);
        }
        let start = *it;
        if it.next() != Some(open) {
            *it = original;
            return None;
        }

        let mut depth = 1usize;
        let mut escaped = false;
        while depth > 0 {
            let Some(c) = it.next() else {
                break;
            };
            if escaped {
                escaped = false;
                continue;
            }
            if c == '\\' {
                escaped = true;
            } else if c == close {
                depth -= 1;
            } else if c == open {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    *it = original;
                    return None;
                }
            }
        }

        if depth != 0 {
            *it = original;
            return None;
        }
        Some(start.span(it))
    })
}

/// Parser that succeeds iff both parsers match in sequence on the same
/// advancing cursor; restores the cursor on any failure.
pub fn zip<A: 'static, B: 'static>(a: Parser<A>, b: Parser<B>) -> Parser<(A, B)> {
    Parser::new(move |it| {
        let original = *it;
        let Some(va) = a.scan(it) else {
            *it = original;
            return None;
        };
        let Some(vb) = b.scan(it) else {
            *it = original;
            return None;
        };
        Some((va, vb))
    })
}

pub fn zip3<A: 'static, B: 'static, C: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
) -> Parser<(A, B, C)> {
    zip(a, zip(b, c)).map(|(a, (b, c))| (a, b, c))
}

pub fn zip4<A: 'static, B: 'static, C: 'static, D: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
) -> Parser<(A, B, C, D)> {
    zip(a, zip3(b, c, d)).map(|(a, (b, c, d))| (a, b, c, d))
}

pub fn zip5<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
) -> Parser<(A, B, C, D, E)> {
    zip(a, zip4(b, c, d, e)).map(|(a, (b, c, d, e))| (a, b, c, d, e))
}

pub fn zip6<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static, F: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
    f: Parser<F>,
) -> Parser<(A, B, C, D, E, F)> {
    zip(a, zip5(b, c, d, e, f)).map(|(a, (b, c, d, e, f))| (a, b, c, d, e, f))
}

pub fn zip7<A: 'static, B: 'static, C: 'static, D: 'static, E: 'static, F: 'static, G: 'static>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
    f: Parser<F>,
    g: Parser<G>,
) -> Parser<(A, B, C, D, E, F, G)> {
    zip(a, zip6(b, c, d, e, f, g)).map(|(a, (b, c, d, e, f, g))| (a, b, c, d, e, f, g))
}

#[allow(clippy::type_complexity)]
pub fn zip8<
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
    E: 'static,
    F: 'static,
    G: 'static,
    H: 'static,
>(
    a: Parser<A>,
    b: Parser<B>,
    c: Parser<C>,
    d: Parser<D>,
    e: Parser<E>,
    f: Parser<F>,
    g: Parser<G>,
    h: Parser<H>,
) -> Parser<(A, B, C, D, E, F, G, H)> {
    zip(a, zip7(b, c, d, e, f, g, h)).map(|(a, (b, c, d, e, f, g, h))| (a, b, c, d, e, f, g, h))
}
