// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The schema extracted from a dump. Values own their strings and are not
//! modified after the transform builds them.

use std::fmt::{self, Display, Formatter, Write};

use serde::{Serialize, Serializer};

use crate::engine::is_word_char;

/// An interpreted top level statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
	/// `USE name`
	Database(Database),
	CreateTable(Table),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Database {
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
	pub name: String,
	pub fields: Vec<Field>,
	pub indices: Vec<Index>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
	pub name: String,
	/// Lower case.
	#[serde(rename = "type")]
	pub type_name: String,
	#[serde(rename = "values")]
	pub type_params: Vec<Literal>,
	/// In source order.
	pub qualifiers: Vec<Qualifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Qualifier {
	NotNull,
	Null,
	PrimaryKey,
	AutoIncrement,
	UniqueKey,
	CharacterSet(String),
	Collate(String),
	Default(Literal),
}

impl Display for Qualifier {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Qualifier::NotNull => f.write_str("NOT NULL"),
			Qualifier::Null => f.write_str("NULL"),
			Qualifier::PrimaryKey => f.write_str("PRIMARY KEY"),
			Qualifier::AutoIncrement => f.write_str("AUTO_INCREMENT"),
			Qualifier::UniqueKey => f.write_str("UNIQUE KEY"),
			Qualifier::CharacterSet(name) => {
				f.write_str("CHARACTER SET ")?;
				write_name(f, name)
			}
			Qualifier::Collate(name) => {
				f.write_str("COLLATE ")?;
				write_name(f, name)
			}
			Qualifier::Default(value) => write!(f, "DEFAULT {}", value),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
	/// First column of the index.
	pub column: String,
	pub name: Option<String>,
	pub primary: bool,
	#[serde(rename = "type")]
	pub index_type: Option<IndexType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexAlgorithm {
	BTree,
	Hash,
	RTree,
}

impl IndexAlgorithm {
	pub fn as_str(&self) -> &'static str {
		match self {
			IndexAlgorithm::BTree => "btree",
			IndexAlgorithm::Hash => "hash",
			IndexAlgorithm::RTree => "rtree",
		}
	}
}

/// Either an algorithm hint or one of the dialect's special index kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexType {
	Algorithm(IndexAlgorithm),
	FullText,
	Spatial,
}

impl IndexType {
	pub fn as_str(&self) -> &'static str {
		match self {
			IndexType::Algorithm(algorithm) => algorithm.as_str(),
			IndexType::FullText => "fulltext",
			IndexType::Spatial => "spatial",
		}
	}
}

impl Display for IndexType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for IndexType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

/// Writes a name bare when it is a single word, otherwise quoted with a
/// delimiter it does not contain.
fn write_name(f: &mut Formatter<'_>, name: &str) -> fmt::Result {
	if !name.is_empty() && name.chars().all(is_word_char) {
		return f.write_str(name);
	}
	let delimiter = ['`', '"', '\''].into_iter().find(|delimiter| !name.contains(*delimiter)).unwrap_or('`');
	write!(f, "{delimiter}{name}{delimiter}")
}

/// Writes string content as a quoted literal. Escapes in `text` are kept as
/// they are, so the content reads back unchanged.
fn write_text(f: &mut Formatter<'_>, text: &str) -> fmt::Result {
	if has_unescaped(text, '\'') && !has_unescaped(text, '"') {
		return write!(f, "\"{}\"", text);
	}

	f.write_char('\'')?;
	let mut chars = text.chars();
	while let Some(c) = chars.next() {
		match c {
			'\\' => match chars.next() {
				Some(escaped) => {
					f.write_char('\\')?;
					f.write_char(escaped)?;
				}
				None => f.write_str("\\\\")?,
			},
			'\'' => f.write_str("\\'")?,
			c => f.write_char(c)?,
		}
	}
	f.write_char('\'')
}

fn has_unescaped(text: &str, delimiter: char) -> bool {
	let mut chars = text.chars();
	while let Some(c) = chars.next() {
		if c == '\\' {
			chars.next();
		} else if c == delimiter {
			return true;
		}
	}
	false
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
	/// String content with escapes kept as written.
	Str(String),
	/// Numeric text exactly as written.
	Number(String),
	/// Bit-value or hexadecimal literal exactly as written.
	Bits(String),
	/// Temporal function call exactly as written, e.g. `CURRENT_TIMESTAMP`.
	Function(String),
	Null,
}

impl Display for Literal {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Literal::Str(text) => write_text(f, text),
			Literal::Number(text) | Literal::Bits(text) | Literal::Function(text) => f.write_str(text),
			Literal::Null => f.write_str("NULL"),
		}
	}
}

impl Serialize for Literal {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			Literal::Str(text) | Literal::Number(text) | Literal::Bits(text) | Literal::Function(text) => {
				serializer.serialize_str(text)
			}
			Literal::Null => serializer.serialize_none(),
		}
	}
}
