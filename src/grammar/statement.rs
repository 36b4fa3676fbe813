// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Statements that are recognized as a whole and kept as text.

use nom::{
	Parser,
	branch::alt,
	character::complete::{char, none_of},
	combinator::{map, recognize},
	multi::many0_count,
	sequence::{pair, terminated},
};

use crate::{
	engine::{Fragment, GrammarError, PResult, Span, keyword, non, ws, ws1},
	grammar::{ast::AstUse, identifier::parse_identifier, literal::parse_text},
};

/// Free text up to the statement terminator. Quoted strings are skipped
/// whole, so a `;` inside a string does not end the statement.
pub(crate) fn parse_body(input: Span) -> PResult<Span> {
	recognize(many0_count(alt((recognize(parse_text), recognize(none_of(";'\"`")))))).parse(input)
}

/// `USE name ;`
pub(crate) fn parse_use(input: Span) -> PResult<AstUse> {
	let (rest, (token, _, database, _, _)) = (keyword("use"), ws1, parse_identifier, ws, char(';')).parse(input)?;

	Ok((
		rest,
		AstUse {
			token: token.into(),
			database,
		},
	))
}

/// `SET ... ;`
pub(crate) fn parse_set(input: Span) -> PResult<Fragment> {
	discarded(keyword("set")).parse(input)
}

/// `DROP TABLE ... ;`
pub(crate) fn parse_drop_table(input: Span) -> PResult<Fragment> {
	discarded(keyword("drop table")).parse(input)
}

/// `CREATE {DATABASE|SCHEMA} ... ;`
pub(crate) fn parse_create_database(input: Span) -> PResult<Fragment> {
	discarded(recognize((keyword("create"), ws1, alt((keyword("database"), keyword("schema")))))).parse(input)
}

/// `INSERT ... ;`
pub(crate) fn parse_insert(input: Span) -> PResult<Fragment> {
	discarded(keyword("insert")).parse(input)
}

/// `DELIMITER` through the end of the line. The new delimiter is not
/// honored; statements keep ending at `;`.
pub(crate) fn parse_delimiter(input: Span) -> PResult<Fragment> {
	map(recognize(pair(keyword("delimiter"), non(char('\n')))), |text| Fragment::from(text).trim_end())
		.parse(input)
}

/// A bare `;`.
pub(crate) fn parse_empty(input: Span) -> PResult<Fragment> {
	map(recognize(char(';')), Fragment::from).parse(input)
}

/// `introducer` and the text after it up to `;`. The fragment excludes the
/// terminator.
fn discarded<'a, P>(introducer: P) -> impl Parser<Span<'a>, Output = Fragment<'a>, Error = GrammarError<'a>>
where
	P: Parser<Span<'a>, Output = Span<'a>, Error = GrammarError<'a>>,
{
	map(terminated(recognize(pair(introducer, parse_body)), char(';')), |text: Span<'a>| {
		Fragment::from(text).trim_end()
	})
}
