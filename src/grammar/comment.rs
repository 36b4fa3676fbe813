// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	bytes::complete::tag,
	character::complete::char,
	combinator::{eof, map, recognize},
	multi::many0,
	sequence::{pair, terminated},
};

use crate::engine::{Fragment, PResult, Span, non, ws};

/// `#` or `--` through the end of the line. The line break is consumed but
/// is not part of the comment; a comment may also end the input.
pub(crate) fn parse_comment(input: Span) -> PResult<Fragment> {
	map(
		terminated(
			recognize(pair(alt((tag("#"), tag("--"))), non(char('\n')))),
			alt((recognize(char('\n')), eof)),
		),
		Fragment::from,
	)
	.parse(input)
}

/// Any number of line comments, each followed by optional whitespace.
pub(crate) fn parse_comments(input: Span) -> PResult<Vec<Fragment>> {
	many0(terminated(parse_comment, ws)).parse(input)
}

/// `/* ... */`
pub(crate) fn parse_block_comment(input: Span) -> PResult<Fragment> {
	map(recognize((tag("/*"), non(tag("*/")), tag("*/"))), Fragment::from).parse(input)
}
