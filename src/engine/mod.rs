// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Text matching primitives the dialect grammar is composed from.
//!
//! Rules are plain `nom` parsers over a located [`Span`]. A rule either
//! succeeds and advances, or fails without consuming anything; `alt`
//! recovers from a failure by trying the next alternative.

mod combinator;
mod error;
mod span;

pub use combinator::{comma_separated, is_word_char, keyword, non, parenthesized, quoted, ws, ws1};
pub use error::{GrammarError, PResult};
pub use span::{Fragment, Reach, Span};

#[cfg(test)]
pub(crate) fn span(source: &str) -> Span<'_> {
	Reach::default().span(source)
}
