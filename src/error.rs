// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("syntax error at {position}: unexpected {found}")]
	Syntax {
		position: Position,
		found: String,
	},

	#[error("no statements in input")]
	Empty,
}

impl Error {
	/// A syntax error at `offset` of `source`, quoting what was found there.
	pub(crate) fn syntax(source: &str, offset: usize) -> Self {
		let position = Position::locate(source, offset);
		let rest = &source[position.offset..];

		let found = if rest.is_empty() {
			"end of input".to_string()
		} else {
			let excerpt: String = rest.chars().take_while(|c| *c != '\n').take(EXCERPT_LEN).collect();
			format!("'{}'", excerpt)
		};

		Error::Syntax {
			position,
			found,
		}
	}
}

const EXCERPT_LEN: usize = 16;

fn floor_char_boundary(source: &str, mut offset: usize) -> usize {
	while !source.is_char_boundary(offset) {
		offset -= 1;
	}
	offset
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
	/// Byte offset into the input. It starts at 0.
	pub offset: usize,
	/// It starts at 1.
	pub line: u32,
	/// Column in characters. It starts at 1.
	pub column: u32,
}

impl Position {
	/// Locates `offset` in `source`. An offset past the end or inside a
	/// character is moved back to the nearest character boundary.
	pub fn locate(source: &str, offset: usize) -> Self {
		let offset = floor_char_boundary(source, offset.min(source.len()));
		let before = &source[..offset];
		let line = before.matches('\n').count() as u32 + 1;
		let line_start = before.rfind('\n').map(|index| index + 1).unwrap_or(0);
		let column = before[line_start..].chars().count() as u32 + 1;

		Self {
			offset,
			line,
			column,
		}
	}
}

impl Display for Position {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.line, self.column)
	}
}
