// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The MySQL schema dump dialect.
//!
//! [`parse`] turns a whole input into the concrete parse tree. Statements
//! are tried in a fixed order and the first that matches wins; a statement
//! that matches none of them fails the whole input.

mod alter;
pub mod ast;
mod comment;
mod create_table;
mod field;
mod foreign_key;
mod identifier;
mod index;
mod literal;
mod statement;

use nom::{
	Parser,
	branch::alt,
	combinator::{all_consuming, map},
	multi::many1,
	sequence::{preceded, terminated},
};
use tracing::debug;

use crate::{
	Error, Result,
	engine::{PResult, Reach, Span, ws},
	grammar::{
		alter::parse_alter_table,
		ast::AstStatement,
		comment::{parse_block_comment, parse_comment},
		create_table::parse_create_table,
		statement::{
			parse_create_database, parse_delimiter, parse_drop_table, parse_empty, parse_insert, parse_set,
			parse_use,
		},
	},
};

pub fn parse(source: &str) -> Result<Vec<AstStatement<'_>>> {
	let reach = Reach::default();

	match all_consuming(parse_statements).parse(reach.span(source)) {
		Ok((_, statements)) => {
			debug!(statements = statements.len(), "matched statements");
			Ok(statements)
		}
		Err(_) if source.trim().is_empty() => Err(Error::Empty),
		Err(_) => {
			let error = Error::syntax(source, reach.furthest());
			debug!(%error, "no statement matched");
			Err(error)
		}
	}
}

fn parse_statements(input: Span) -> PResult<Vec<AstStatement>> {
	preceded(ws, many1(terminated(parse_statement, ws))).parse(input)
}

fn parse_statement(input: Span) -> PResult<AstStatement> {
	alt((
		map(parse_comment, AstStatement::Comment),
		map(parse_block_comment, AstStatement::BlockComment),
		map(parse_use, AstStatement::Use),
		map(parse_set, AstStatement::Set),
		map(parse_drop_table, AstStatement::DropTable),
		map(parse_create_database, AstStatement::CreateDatabase),
		map(parse_create_table, AstStatement::CreateTable),
		map(parse_alter_table, AstStatement::AlterTable),
		map(parse_insert, AstStatement::Insert),
		map(parse_delimiter, AstStatement::Delimiter),
		map(parse_empty, AstStatement::Empty),
	))
	.parse(input)
}
