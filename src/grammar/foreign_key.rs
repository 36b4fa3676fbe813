// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	combinator::{map, opt},
	sequence::preceded,
};

use crate::{
	engine::{Fragment, GrammarError, PResult, Span, keyword, ws, ws1},
	grammar::{
		ast::{AstForeignKey, AstReference},
		identifier::{parse_identifier, parse_identifier_list},
		index::parse_constraint,
	},
};

/// `[CONSTRAINT [symbol]] FOREIGN KEY [name] (columns) reference`
pub(crate) fn parse_foreign_key(input: Span) -> PResult<AstForeignKey> {
	let (rest, (constraint, token, name, _, columns, _, reference)) = (
		opt(parse_constraint),
		keyword("foreign key"),
		opt(preceded(ws1, parse_identifier)),
		ws,
		parse_identifier_list,
		ws,
		parse_reference,
	)
		.parse(input)?;

	Ok((
		rest,
		AstForeignKey {
			token: token.into(),
			constraint: constraint.flatten(),
			name,
			columns,
			reference,
		},
	))
}

/// `REFERENCES table [(columns)] [MATCH type] [ON DELETE action] [ON UPDATE action]`
///
/// The two `ON` clauses may come in either order, each at most once.
pub(crate) fn parse_reference(input: Span) -> PResult<AstReference> {
	let (rest, (token, _, table, columns, _, (on_delete, on_update))) = (
		keyword("references"),
		ws,
		parse_identifier,
		opt(preceded(ws, parse_identifier_list)),
		opt(preceded(ws, parse_match)),
		alt((
			map((parse_on("on update"), opt(parse_on("on delete"))), |(on_update, on_delete)| {
				(on_delete, Some(on_update))
			}),
			(opt(parse_on("on delete")), opt(parse_on("on update"))),
		)),
	)
		.parse(input)?;

	Ok((
		rest,
		AstReference {
			token: token.into(),
			table,
			columns: columns.unwrap_or_default(),
			on_delete,
			on_update,
		},
	))
}

fn parse_match(input: Span) -> PResult<Span> {
	preceded((keyword("match"), ws1), alt((keyword("full"), keyword("partial"), keyword("simple")))).parse(input)
}

/// `ON DELETE action` or `ON UPDATE action`, after optional whitespace.
fn parse_on<'a>(event: &'static str) -> impl Parser<Span<'a>, Output = Fragment<'a>, Error = GrammarError<'a>> {
	preceded((ws, keyword(event), ws1), parse_reference_option)
}

fn parse_reference_option(input: Span) -> PResult<Fragment> {
	map(
		alt((
			keyword("restrict"),
			keyword("cascade"),
			keyword("set null"),
			keyword("set default"),
			keyword("no action"),
		)),
		Fragment::from,
	)
	.parse(input)
}
