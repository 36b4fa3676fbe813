// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Concrete parse tree. Every node keeps the fragments it was matched from;
//! nothing is normalized yet.

use crate::engine::Fragment;

#[derive(Debug, Clone, PartialEq)]
pub enum AstStatement<'a> {
	Comment(Fragment<'a>),
	BlockComment(Fragment<'a>),
	Use(AstUse<'a>),
	Set(Fragment<'a>),
	DropTable(Fragment<'a>),
	CreateDatabase(Fragment<'a>),
	CreateTable(AstCreateTable<'a>),
	AlterTable(AstAlterTable<'a>),
	Insert(Fragment<'a>),
	Delimiter(Fragment<'a>),
	Empty(Fragment<'a>),
}

impl<'a> AstStatement<'a> {
	/// Short name of the statement form, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			AstStatement::Comment(_) => "comment",
			AstStatement::BlockComment(_) => "block comment",
			AstStatement::Use(_) => "use",
			AstStatement::Set(_) => "set",
			AstStatement::DropTable(_) => "drop table",
			AstStatement::CreateDatabase(_) => "create database",
			AstStatement::CreateTable(_) => "create table",
			AstStatement::AlterTable(_) => "alter table",
			AstStatement::Insert(_) => "insert",
			AstStatement::Delimiter(_) => "delimiter",
			AstStatement::Empty(_) => "empty",
		}
	}

	pub fn as_use(&self) -> &AstUse<'a> {
		if let AstStatement::Use(result) = self {
			result
		} else {
			panic!("not use")
		}
	}

	pub fn as_create_table(&self) -> &AstCreateTable<'a> {
		if let AstStatement::CreateTable(result) = self {
			result
		} else {
			panic!("not create table")
		}
	}

	pub fn as_alter_table(&self) -> &AstAlterTable<'a> {
		if let AstStatement::AlterTable(result) = self {
			result
		} else {
			panic!("not alter table")
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstUse<'a> {
	pub token: Fragment<'a>,
	pub database: Fragment<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstCreateTable<'a> {
	pub token: Fragment<'a>,
	pub temporary: bool,
	pub if_not_exists: bool,
	pub name: Fragment<'a>,
	pub definitions: Vec<AstCreateDefinition<'a>>,
	/// Table options between the closing parenthesis and the terminator,
	/// e.g. `ENGINE=InnoDB DEFAULT CHARSET=utf8`.
	pub options: Option<Fragment<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstCreateDefinition<'a> {
	PrimaryKey(AstPrimaryKey<'a>),
	UniqueKey(AstUniqueKey<'a>),
	ForeignKey(AstForeignKey<'a>),
	Index(AstIndex<'a>),
	Field(AstField<'a>),
	Comment(Fragment<'a>),
}

impl<'a> AstCreateDefinition<'a> {
	pub fn as_primary_key(&self) -> &AstPrimaryKey<'a> {
		if let AstCreateDefinition::PrimaryKey(result) = self {
			result
		} else {
			panic!("not primary key")
		}
	}

	pub fn as_unique_key(&self) -> &AstUniqueKey<'a> {
		if let AstCreateDefinition::UniqueKey(result) = self {
			result
		} else {
			panic!("not unique key")
		}
	}

	pub fn as_foreign_key(&self) -> &AstForeignKey<'a> {
		if let AstCreateDefinition::ForeignKey(result) = self {
			result
		} else {
			panic!("not foreign key")
		}
	}

	pub fn as_index(&self) -> &AstIndex<'a> {
		if let AstCreateDefinition::Index(result) = self {
			result
		} else {
			panic!("not index")
		}
	}

	pub fn as_field(&self) -> &AstField<'a> {
		if let AstCreateDefinition::Field(result) = self {
			result
		} else {
			panic!("not field")
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstIndexAlgorithm {
	BTree,
	Hash,
	RTree,
}

/// One column of an index column list: `name [(length)] [ASC|DESC]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AstKeyPart<'a> {
	pub column: Fragment<'a>,
	pub values: Vec<AstLiteral<'a>>,
	pub direction: Option<Fragment<'a>>,
}

/// `[CONSTRAINT [symbol]] PRIMARY KEY [algorithm] (key parts) [algorithm]`
#[derive(Debug, Clone, PartialEq)]
pub struct AstPrimaryKey<'a> {
	pub token: Fragment<'a>,
	pub constraint: Option<Fragment<'a>>,
	pub algorithm_before: Option<AstIndexAlgorithm>,
	pub columns: Vec<AstKeyPart<'a>>,
	pub algorithm_after: Option<AstIndexAlgorithm>,
}

/// `[CONSTRAINT [symbol]] UNIQUE [KEY|INDEX] [name] [algorithm] (key parts) [algorithm]`
#[derive(Debug, Clone, PartialEq)]
pub struct AstUniqueKey<'a> {
	pub token: Fragment<'a>,
	pub constraint: Option<Fragment<'a>>,
	pub name: Option<Fragment<'a>>,
	pub algorithm_before: Option<AstIndexAlgorithm>,
	pub columns: Vec<AstKeyPart<'a>>,
	pub algorithm_after: Option<AstIndexAlgorithm>,
}

/// `[CONSTRAINT [symbol]] FOREIGN KEY [name] (columns) reference`
#[derive(Debug, Clone, PartialEq)]
pub struct AstForeignKey<'a> {
	pub token: Fragment<'a>,
	pub constraint: Option<Fragment<'a>>,
	pub name: Option<Fragment<'a>>,
	pub columns: Vec<Fragment<'a>>,
	pub reference: AstReference<'a>,
}

/// `REFERENCES table [(columns)] [MATCH ...] [ON DELETE action] [ON UPDATE action]`
#[derive(Debug, Clone, PartialEq)]
pub struct AstReference<'a> {
	pub token: Fragment<'a>,
	pub table: Fragment<'a>,
	pub columns: Vec<Fragment<'a>>,
	pub on_delete: Option<Fragment<'a>>,
	pub on_update: Option<Fragment<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstIndexKind {
	Key,
	FullText,
	Spatial,
}

/// `{KEY|INDEX} [name] [algorithm] (key parts) [algorithm]` and
/// `{FULLTEXT|SPATIAL} [KEY|INDEX] [name] (key parts)`
#[derive(Debug, Clone, PartialEq)]
pub struct AstIndex<'a> {
	pub token: Fragment<'a>,
	pub kind: AstIndexKind,
	pub name: Option<Fragment<'a>>,
	pub algorithm_before: Option<AstIndexAlgorithm>,
	pub columns: Vec<AstKeyPart<'a>>,
	pub algorithm_after: Option<AstIndexAlgorithm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstField<'a> {
	pub comments: Vec<Fragment<'a>>,
	pub name: Fragment<'a>,
	pub data_type: AstDataType<'a>,
	pub qualifiers: Vec<AstFieldQualifier<'a>>,
	/// The function of an `ON UPDATE` clause.
	pub on_update: Option<Fragment<'a>>,
	/// Text of the `COMMENT '...'` clause, without quotes.
	pub comment: Option<Fragment<'a>>,
	pub reference: Option<AstReference<'a>>,
	pub trailing_comment: Option<Fragment<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstDataType<'a> {
	pub name: Fragment<'a>,
	pub values: Vec<AstLiteral<'a>>,
	pub modifiers: Vec<AstTypeModifier>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AstTypeModifier {
	Unsigned,
	Binary,
	Zerofill,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstFieldQualifier<'a> {
	NotNull(Fragment<'a>),
	Null(Fragment<'a>),
	PrimaryKey(Fragment<'a>),
	AutoIncrement(Fragment<'a>),
	CharacterSet {
		token: Fragment<'a>,
		name: Fragment<'a>,
	},
	Collate {
		token: Fragment<'a>,
		name: Fragment<'a>,
	},
	Default {
		token: Fragment<'a>,
		value: AstLiteral<'a>,
	},
	UniqueKey(Fragment<'a>),
	UniqueIndex(Fragment<'a>),
	Key(Fragment<'a>),
	Index(Fragment<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstLiteral<'a> {
	/// Content of a quoted string, without the quotes and with escapes kept
	/// as written.
	Text(Fragment<'a>),
	/// Numeric text exactly as written.
	Number(Fragment<'a>),
	/// Bit-value or hexadecimal literal exactly as written, e.g. `b'0'`.
	Bits(Fragment<'a>),
	/// Temporal function call exactly as written, e.g. `CURRENT_TIMESTAMP(6)`.
	/// Only a column default takes one.
	Function(Fragment<'a>),
	Null(Fragment<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstAlterTable<'a> {
	pub token: Fragment<'a>,
	pub table: Fragment<'a>,
	pub specifications: Vec<AstAlterSpecification<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstAlterSpecification<'a> {
	AddForeignKey(AstForeignKey<'a>),
	/// Any other specification, kept as text.
	Other(Fragment<'a>),
}
