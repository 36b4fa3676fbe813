// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	bytes::complete::take_while1,
	combinator::{map, opt, value},
	multi::many0,
	sequence::{pair, preceded},
};

use crate::{
	engine::{Fragment, PResult, Span, comma_separated, is_word_char, keyword, parenthesized, ws, ws1},
	grammar::{
		ast::{AstDataType, AstField, AstFieldQualifier, AstTypeModifier},
		comment::{parse_comment, parse_comments},
		foreign_key::parse_reference,
		identifier::parse_identifier,
		literal::{parse_default_value, parse_literal, parse_temporal_function, parse_text},
	},
};

/// `[comments] name type [qualifier...] [ON UPDATE function] [qualifier...]
/// [COMMENT 'text'] [reference] [comment]`
pub(crate) fn parse_field(input: Span) -> PResult<AstField> {
	let (rest, (comments, name, _, data_type, mut qualifiers, on_update, more, comment, reference, trailing_comment)) =
		(
			parse_comments,
			parse_identifier,
			ws,
			parse_data_type,
			many0(preceded(ws, parse_field_qualifier)),
			opt(preceded((ws, keyword("on update"), ws1), parse_temporal_function)),
			many0(preceded(ws, parse_field_qualifier)),
			opt(preceded(ws, parse_comment_clause)),
			opt(preceded(ws, parse_reference)),
			opt(preceded(ws, parse_comment)),
		)
			.parse(input)?;

	qualifiers.extend(more);

	Ok((
		rest,
		AstField {
			comments,
			name,
			data_type,
			qualifiers,
			on_update: on_update.map(Fragment::from),
			comment,
			reference,
			trailing_comment,
		},
	))
}

/// `name [(value, ...)] [UNSIGNED|BINARY|ZEROFILL ...]`
pub(crate) fn parse_data_type(input: Span) -> PResult<AstDataType> {
	let (rest, (name, values, modifiers)) = (
		take_while1(is_word_char),
		opt(preceded(ws, parenthesized(comma_separated(parse_literal)))),
		many0(preceded(ws, parse_type_modifier)),
	)
		.parse(input)?;

	Ok((
		rest,
		AstDataType {
			name: name.into(),
			values: values.unwrap_or_default(),
			modifiers,
		},
	))
}

fn parse_type_modifier(input: Span) -> PResult<AstTypeModifier> {
	alt((
		value(AstTypeModifier::Unsigned, keyword("unsigned")),
		value(AstTypeModifier::Binary, keyword("binary")),
		value(AstTypeModifier::Zerofill, keyword("zerofill")),
	))
	.parse(input)
}

/// Field qualifiers, most specific first: `UNIQUE KEY` must be tried
/// before `KEY`, and `NOT NULL` before `NULL`.
pub(crate) fn parse_field_qualifier(input: Span) -> PResult<AstFieldQualifier> {
	alt((
		map(keyword("not null"), |token| AstFieldQualifier::NotNull(token.into())),
		map(keyword("null"), |token| AstFieldQualifier::Null(token.into())),
		map(keyword("primary key"), |token| AstFieldQualifier::PrimaryKey(token.into())),
		map(keyword("auto increment"), |token| AstFieldQualifier::AutoIncrement(token.into())),
		map(keyword("auto_increment"), |token| AstFieldQualifier::AutoIncrement(token.into())),
		map(pair(keyword("character set"), preceded(ws1, parse_identifier)), |(token, name)| {
			AstFieldQualifier::CharacterSet {
				token: token.into(),
				name,
			}
		}),
		map(pair(keyword("collate"), preceded(ws1, parse_identifier)), |(token, name)| AstFieldQualifier::Collate {
			token: token.into(),
			name,
		}),
		map(pair(keyword("default"), preceded(ws1, parse_default_value)), |(token, value)| AstFieldQualifier::Default {
			token: token.into(),
			value,
		}),
		map(keyword("unique key"), |token| AstFieldQualifier::UniqueKey(token.into())),
		map(keyword("unique index"), |token| AstFieldQualifier::UniqueIndex(token.into())),
		map(keyword("key"), |token| AstFieldQualifier::Key(token.into())),
		map(keyword("index"), |token| AstFieldQualifier::Index(token.into())),
	))
	.parse(input)
}

/// `COMMENT 'text'`, yielding the text without quotes.
fn parse_comment_clause(input: Span) -> PResult<Fragment> {
	map(preceded((keyword("comment"), ws), parse_text), Fragment::from).parse(input)
}
