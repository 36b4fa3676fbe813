// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{cell::Cell, rc::Rc};

use nom_locate::LocatedSpan;

/// Input of every grammar rule. The extra slot carries the furthest-failure
/// tracker of the parse call the span was cut from.
pub type Span<'a> = LocatedSpan<&'a str, Reach>;

/// Furthest offset at which any rule failed during one parse call.
///
/// Cloning shares the tracker, so every span sliced from the same input
/// reports into the same cell.
#[derive(Debug, Clone, Default)]
pub struct Reach(Rc<Cell<usize>>);

impl Reach {
	pub fn span<'a>(&self, source: &'a str) -> Span<'a> {
		LocatedSpan::new_extra(source, self.clone())
	}

	pub fn furthest(&self) -> usize {
		self.0.get()
	}

	pub(crate) fn record(&self, offset: usize) {
		if offset > self.0.get() {
			self.0.set(offset);
		}
	}
}

/// A piece of the source text captured by the grammar, detached from the
/// parse call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
	/// The offset relative to the start of the input. It starts at 0.
	pub offset: usize,
	/// The line of the fragment. It starts at line 1.
	pub line: u32,
	/// The column of the fragment in characters. It starts at 1.
	pub column: u32,
	pub text: &'a str,
}

impl<'a> Fragment<'a> {
	pub fn text(&self) -> &'a str {
		self.text
	}

	/// The same fragment without trailing whitespace.
	pub fn trim_end(self) -> Self {
		Self {
			text: self.text.trim_end(),
			..self
		}
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}
}

impl<'a> From<Span<'a>> for Fragment<'a> {
	fn from(value: Span<'a>) -> Self {
		Self {
			offset: value.location_offset(),
			line: value.location_line(),
			column: value.get_utf8_column() as u32,
			text: *value.fragment(),
		}
	}
}

impl PartialEq<&str> for Fragment<'_> {
	fn eq(&self, other: &&str) -> bool {
		self.text == *other
	}
}
