//! The core parser type
//!
//! A [`Parser`] wraps a scanner: a function that reads characters from a
//! [`Cursor`] and either produces a value, leaving the cursor just past the
//! consumed text, or produces `None`. Combinators that run several scanners
//! in sequence snapshot the cursor first and restore it when a later step
//! fails, so a failed attempt is invisible to the next alternative.

use std::sync::Arc;

use crate::source::{Cursor, Source};

/// A scanner/parser that converts input characters into an instance of `A`.
pub struct Parser<A> {
    scanner: Arc<dyn for<'s> Fn(&mut Cursor<'s>) -> Option<A> + Send + Sync>,
}

impl<A> Clone for Parser<A> {
    fn clone(&self) -> Self {
        Self {
            scanner: Arc::clone(&self.scanner),
        }
    }
}

impl<A: 'static> Parser<A> {
    /// Wrap a scanner function.
    pub fn new(
        scanner: impl for<'s> Fn(&mut Cursor<'s>) -> Option<A> + Send + Sync + 'static,
    ) -> Self {
        Self {
            scanner: Arc::new(scanner),
        }
    }

    /// A parser that never matches.
    pub fn never() -> Self {
        Self::new(|_| None)
    }

    /// Run the scanner at the cursor's position.
    ///
    /// On success the cursor is advanced past the consumed text. On failure
    /// the cursor position is whatever the scanner left; callers that need
    /// atomicity snapshot the cursor first.
    pub fn scan(&self, it: &mut Cursor<'_>) -> Option<A> {
        (self.scanner)(it)
    }

    /// Attempt to parse a source, skipping leading whitespace.
    pub fn parse(&self, source: &Source) -> Option<A> {
        let mut it = source.cursor();
        it.skip_while(char::is_whitespace);
        self.scan(&mut it)
    }

    /// Attempt to parse a single string. Only used for testing.
    pub fn parse_str(&self, text: &str) -> Option<A> {
        self.parse(&Source::new(vec![text.to_string()], 0))
    }

    /// Transform the parsed value.
    pub fn map<B: 'static>(self, f: impl Fn(A) -> B + Send + Sync + 'static) -> Parser<B> {
        Parser::new(move |it| self.scan(it).map(&f))
    }

    /// Replace the parsed value with a fixed one.
    pub fn to<B: Clone + Send + Sync + 'static>(self, value: B) -> Parser<B> {
        self.map(move |_| value.clone())
    }

    /// Discard the parsed value.
    pub fn forget(self) -> Parser<()> {
        self.map(|_| ())
    }

    /// Chain a dependent parser produced from the first result.
    ///
    /// Restores the cursor to the pre-attempt checkpoint if either this
    /// parser or the produced parser fails.
    pub fn flat_map<B: 'static>(
        self,
        f: impl Fn(A) -> Parser<B> + Send + Sync + 'static,
    ) -> Parser<B> {
        Parser::new(move |it| {
            let original = *it;
            match self.scan(it).map(&f).and_then(|next| next.scan(it)) {
                Some(value) => Some(value),
                None => {
                    *it = original;
                    None
                }
            }
        })
    }
}
