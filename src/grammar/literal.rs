// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	bytes::complete::{take_while, take_while1},
	character::complete::{anychar, char, digit0, digit1, one_of, satisfy},
	combinator::{map, not, opt, recognize},
	multi::many0_count,
	sequence::pair,
};

use crate::{
	engine::{GrammarError, PResult, Span, is_word_char, keyword, parenthesized, quoted, ws},
	grammar::ast::AstLiteral,
};

/// A bit-value or hexadecimal literal, a number, a quoted string, or `NULL`.
/// Text is kept exactly as written.
pub(crate) fn parse_literal(input: Span) -> PResult<AstLiteral> {
	alt((
		map(parse_bits, |bits| AstLiteral::Bits(bits.into())),
		map(parse_number, |number| AstLiteral::Number(number.into())),
		map(parse_text, |text| AstLiteral::Text(text.into())),
		map(keyword("null"), |token| AstLiteral::Null(token.into())),
	))
	.parse(input)
}

/// The value of a `DEFAULT` clause: a literal or a temporal function.
pub(crate) fn parse_default_value(input: Span) -> PResult<AstLiteral> {
	alt((parse_literal, map(parse_temporal_function, |function| AstLiteral::Function(function.into())))).parse(input)
}

/// `CURRENT_TIMESTAMP [([precision])]` and its synonyms.
pub(crate) fn parse_temporal_function(input: Span) -> PResult<Span> {
	alt((
		recognize((
			alt((keyword("current_timestamp"), keyword("localtimestamp"), keyword("localtime"))),
			opt((ws, parenthesized(opt(digit1)))),
		)),
		recognize((keyword("now"), ws, parenthesized(opt(digit1)))),
	))
	.parse(input)
}

/// `b'01'`, `x'ff'`, `0b01` or `0xff`.
pub(crate) fn parse_bits(input: Span) -> PResult<Span> {
	alt((
		recognize((one_of("bB"), char('\''), take_while(is_bit), char('\''))),
		recognize((one_of("xX"), char('\''), take_while(is_hex_digit), char('\''))),
		recognize((char('0'), char('b'), take_while1(is_bit), not(satisfy(is_word_char)))),
		recognize((char('0'), char('x'), take_while1(is_hex_digit), not(satisfy(is_word_char)))),
	))
	.parse(input)
}

fn is_bit(c: char) -> bool {
	c == '0' || c == '1'
}

fn is_hex_digit(c: char) -> bool {
	c.is_ascii_hexdigit()
}

/// `[+|-] (digits [. digits] | . digits) [(e|E) [+|-] digits]`
pub(crate) fn parse_number(input: Span) -> PResult<Span> {
	recognize((
		opt(one_of("+-")),
		alt((recognize(pair(digit1, opt(pair(char('.'), digit0)))), recognize(pair(char('.'), digit1)))),
		opt((one_of("eE"), opt(one_of("+-")), digit1)),
	))
	.parse(input)
}

/// Content of a quoted string without its delimiters. A backslash escapes
/// the character after it; escapes are not decoded.
pub(crate) fn parse_text(input: Span) -> PResult<Span> {
	quoted(text_content).parse(input)
}

fn text_content<'a>(delimiter: char) -> impl Parser<Span<'a>, Output = Span<'a>, Error = GrammarError<'a>> {
	recognize(many0_count(alt((
		recognize(pair(char('\\'), anychar)),
		recognize(satisfy(move |c: char| c != delimiter && c != '\\')),
	))))
}
