// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	IResult,
	error::{ErrorKind, ParseError},
};

use crate::engine::Span;

pub type PResult<'a, O> = IResult<Span<'a>, O, GrammarError<'a>>;

/// Local failure of a grammar rule.
///
/// Failures are plain values that `alt` recovers from by backtracking.
/// Creating one records its offset in the [`Reach`](crate::engine::Reach)
/// of the input, which is how the furthest failure of a whole parse call
/// is known once every alternative is exhausted.
#[derive(Debug, Clone)]
pub struct GrammarError<'a> {
	pub input: Span<'a>,
	pub kind: ErrorKind,
}

impl GrammarError<'_> {
	pub fn offset(&self) -> usize {
		self.input.location_offset()
	}
}

impl<'a> ParseError<Span<'a>> for GrammarError<'a> {
	fn from_error_kind(input: Span<'a>, kind: ErrorKind) -> Self {
		input.extra.record(input.location_offset());
		Self {
			input,
			kind,
		}
	}

	fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
		other
	}

	fn or(self, other: Self) -> Self {
		if other.offset() >= self.offset() {
			other
		} else {
			self
		}
	}
}
