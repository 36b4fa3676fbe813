// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	bytes::complete::tag_no_case,
	character::complete::{anychar, char, multispace0, multispace1},
	combinator::{not, recognize},
	error::{ErrorKind, ParseError},
	multi::{many0_count, separated_list1},
	sequence::{delimited, pair, preceded},
};

use crate::engine::{GrammarError, PResult, Span};

pub fn is_word_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}

/// Zero or more whitespace characters.
pub fn ws(input: Span) -> PResult<Span> {
	multispace0(input)
}

/// One or more whitespace characters.
pub fn ws1(input: Span) -> PResult<Span> {
	multispace1(input)
}

/// `word` ignoring case, not followed by a word character. A failure is
/// reported where the word starts.
fn word<'a>(word: &'static str) -> impl Parser<Span<'a>, Output = Span<'a>, Error = GrammarError<'a>> {
	move |input: Span<'a>| -> PResult<'a, Span<'a>> {
		let matched: PResult<'a, Span<'a>> = tag_no_case(word).parse(input.clone());
		let (rest, matched) = matched?;
		if rest.fragment().starts_with(is_word_char) {
			return Err(nom::Err::Error(GrammarError::from_error_kind(input, ErrorKind::Tag)));
		}
		Ok((rest, matched))
	}
}

/// Case-insensitive keyword. Words separated by a space in `words` match
/// any run of whitespace in the input, and every word must end on a word
/// boundary: `keyword("key")` does not match `KEYS`.
pub fn keyword<'a>(words: &'static str) -> impl Parser<Span<'a>, Output = Span<'a>, Error = GrammarError<'a>> {
	recognize(move |input: Span<'a>| -> PResult<'a, ()> {
		let mut rest = input;
		for (index, part) in words.split(' ').enumerate() {
			if index > 0 {
				(rest, _) = ws1(rest)?;
			}
			(rest, _) = word(part).parse(rest)?;
		}
		Ok((rest, ()))
	})
}

/// Everything up to, but not including, the first match of `terminator`.
/// Matches the rest of the input when `terminator` never matches.
pub fn non<'a, P>(terminator: P) -> impl Parser<Span<'a>, Output = Span<'a>, Error = GrammarError<'a>>
where
	P: Parser<Span<'a>, Error = GrammarError<'a>>,
{
	recognize(many0_count(preceded(not(terminator), anychar)))
}

/// `inner` wrapped in single quotes, double quotes or backticks. `inner` is
/// built for the delimiter in use; the delimiters are stripped.
pub fn quoted<'a, F, P>(inner: F) -> impl Parser<Span<'a>, Output = Span<'a>, Error = GrammarError<'a>>
where
	F: Fn(char) -> P,
	P: Parser<Span<'a>, Output = Span<'a>, Error = GrammarError<'a>>,
{
	alt((
		delimited(char('\''), inner('\''), char('\'')),
		delimited(char('"'), inner('"'), char('"')),
		delimited(char('`'), inner('`'), char('`')),
	))
}

pub fn parenthesized<'a, P>(
	inner: P,
) -> impl Parser<Span<'a>, Output = <P as Parser<Span<'a>>>::Output, Error = GrammarError<'a>>
where
	P: Parser<Span<'a>, Error = GrammarError<'a>>,
{
	delimited(pair(char('('), ws), inner, pair(ws, char(')')))
}

pub fn comma_separated<'a, P>(
	item: P,
) -> impl Parser<Span<'a>, Output = Vec<<P as Parser<Span<'a>>>::Output>, Error = GrammarError<'a>>
where
	P: Parser<Span<'a>, Error = GrammarError<'a>>,
{
	separated_list1(delimited(ws, char(','), ws), item)
}
