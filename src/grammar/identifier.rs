// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	bytes::complete::{take_till1, take_while1},
	combinator::map,
};

use crate::engine::{Fragment, PResult, Span, comma_separated, is_word_char, parenthesized, quoted};

/// A quoted identifier (any run of characters other than its delimiter) or
/// an unquoted one (word characters only). Quotes are stripped, case is kept.
pub(crate) fn parse_identifier(input: Span) -> PResult<Fragment> {
	map(alt((parse_quoted_identifier, parse_unquoted_identifier)), Fragment::from).parse(input)
}

/// `( identifier, ... )`
pub(crate) fn parse_identifier_list(input: Span) -> PResult<Vec<Fragment>> {
	parenthesized(comma_separated(parse_identifier)).parse(input)
}

fn parse_quoted_identifier(input: Span) -> PResult<Span> {
	quoted(|delimiter| take_till1(move |c: char| c == delimiter)).parse(input)
}

fn parse_unquoted_identifier(input: Span) -> PResult<Span> {
	take_while1(is_word_char).parse(input)
}
