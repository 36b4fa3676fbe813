// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Primary key, unique key and index definitions of a `CREATE TABLE` body.

use nom::{
	Parser,
	branch::alt,
	combinator::{map, not, opt, value},
	sequence::{delimited, preceded, terminated},
};

use crate::{
	engine::{Fragment, PResult, Span, comma_separated, keyword, parenthesized, ws, ws1},
	grammar::{
		ast::{AstIndex, AstIndexAlgorithm, AstIndexKind, AstKeyPart, AstPrimaryKey, AstUniqueKey},
		identifier::parse_identifier,
		literal::parse_literal,
	},
};

/// `[USING] {BTREE|HASH|RTREE}`
pub(crate) fn parse_algorithm(input: Span) -> PResult<AstIndexAlgorithm> {
	preceded(
		opt(terminated(keyword("using"), ws1)),
		alt((
			value(AstIndexAlgorithm::BTree, keyword("btree")),
			value(AstIndexAlgorithm::Hash, keyword("hash")),
			value(AstIndexAlgorithm::RTree, keyword("rtree")),
		)),
	)
	.parse(input)
}

/// `CONSTRAINT [symbol]` followed by whitespace. Yields the symbol.
pub(crate) fn parse_constraint(input: Span) -> PResult<Option<Fragment>> {
	delimited(keyword("constraint"), opt(preceded((ws1, not(parse_constraint_keyword)), parse_identifier)), ws1)
		.parse(input)
}

fn parse_constraint_keyword(input: Span) -> PResult<Span> {
	alt((keyword("primary"), keyword("unique"), keyword("foreign"))).parse(input)
}

/// `column [(length)] [ASC|DESC]`
fn parse_key_part(input: Span) -> PResult<AstKeyPart> {
	let (rest, (column, values, direction)) = (
		parse_identifier,
		opt(preceded(ws, parenthesized(comma_separated(parse_literal)))),
		opt(preceded(ws, alt((keyword("asc"), keyword("desc"))))),
	)
		.parse(input)?;

	Ok((
		rest,
		AstKeyPart {
			column,
			values: values.unwrap_or_default(),
			direction: direction.map(Fragment::from),
		},
	))
}

fn parse_key_parts(input: Span) -> PResult<Vec<AstKeyPart>> {
	parenthesized(comma_separated(parse_key_part)).parse(input)
}

/// An index name, which must not be mistaken for an algorithm hint.
fn parse_index_name(input: Span) -> PResult<Fragment> {
	preceded((ws1, not(parse_algorithm)), parse_identifier).parse(input)
}

/// `[CONSTRAINT [symbol]] PRIMARY KEY [algorithm] (key parts) [algorithm]`
pub(crate) fn parse_primary_key(input: Span) -> PResult<AstPrimaryKey> {
	let (rest, (constraint, token, algorithm_before, _, columns, algorithm_after)) = (
		opt(parse_constraint),
		keyword("primary key"),
		opt(preceded(ws1, parse_algorithm)),
		ws,
		parse_key_parts,
		opt(preceded(ws, parse_algorithm)),
	)
		.parse(input)?;

	Ok((
		rest,
		AstPrimaryKey {
			token: token.into(),
			constraint: constraint.flatten(),
			algorithm_before,
			columns,
			algorithm_after,
		},
	))
}

/// `[CONSTRAINT [symbol]] UNIQUE [KEY|INDEX] [name] [algorithm] (key parts) [algorithm]`
pub(crate) fn parse_unique_key(input: Span) -> PResult<AstUniqueKey> {
	let (rest, (constraint, token, _, name, algorithm_before, _, columns, algorithm_after)) = (
		opt(parse_constraint),
		keyword("unique"),
		opt(preceded(ws1, alt((keyword("key"), keyword("index"))))),
		opt(parse_index_name),
		opt(preceded(ws1, parse_algorithm)),
		ws,
		parse_key_parts,
		opt(preceded(ws, parse_algorithm)),
	)
		.parse(input)?;

	Ok((
		rest,
		AstUniqueKey {
			token: token.into(),
			constraint: constraint.flatten(),
			name,
			algorithm_before,
			columns,
			algorithm_after,
		},
	))
}

/// `{KEY|INDEX} [name] [algorithm] (key parts) [algorithm]` or
/// `{FULLTEXT|SPATIAL} [KEY|INDEX] [name] (key parts)`
pub(crate) fn parse_index(input: Span) -> PResult<AstIndex> {
	alt((parse_plain_index, parse_special_index)).parse(input)
}

fn parse_plain_index(input: Span) -> PResult<AstIndex> {
	let (rest, (token, name, algorithm_before, _, columns, algorithm_after)) = (
		alt((keyword("key"), keyword("index"))),
		opt(parse_index_name),
		opt(preceded(ws1, parse_algorithm)),
		ws,
		parse_key_parts,
		opt(preceded(ws, parse_algorithm)),
	)
		.parse(input)?;

	Ok((
		rest,
		AstIndex {
			token: token.into(),
			kind: AstIndexKind::Key,
			name,
			algorithm_before,
			columns,
			algorithm_after,
		},
	))
}

fn parse_special_index(input: Span) -> PResult<AstIndex> {
	let (rest, ((kind, token), _, name, _, columns)) = (
		alt((
			map(keyword("fulltext"), |token| (AstIndexKind::FullText, token)),
			map(keyword("spatial"), |token| (AstIndexKind::Spatial, token)),
		)),
		opt(preceded(ws1, alt((keyword("index"), keyword("key"))))),
		opt(parse_index_name),
		ws,
		parse_key_parts,
	)
		.parse(input)?;

	Ok((
		rest,
		AstIndex {
			token: token.into(),
			kind,
			name,
			algorithm_before: None,
			columns,
			algorithm_after: None,
		},
	))
}
