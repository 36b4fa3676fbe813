// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Lowering of the concrete parse tree into the schema model.
//!
//! Only `USE` and `CREATE TABLE` produce a [`Statement`]; every other
//! statement form is dropped.

mod qualifier;
mod table;

pub use qualifier::canonicalize;
use tracing::trace;

use crate::{
	grammar::ast::{AstLiteral, AstStatement},
	model::{Database, Literal, Statement},
};

struct Transformer {}

pub fn transform(statements: Vec<AstStatement<'_>>) -> Vec<Statement> {
	Transformer::transform(statements)
}

impl Transformer {
	fn transform(statements: Vec<AstStatement<'_>>) -> Vec<Statement> {
		let mut result = Vec::with_capacity(statements.len());

		for statement in statements {
			match statement {
				AstStatement::Use(node) => result.push(Statement::Database(Database {
					name: node.database.text().to_string(),
				})),
				AstStatement::CreateTable(node) => {
					result.push(Statement::CreateTable(Self::transform_create_table(node)))
				}
				node => trace!(kind = node.kind(), "statement dropped"),
			}
		}

		result
	}

	fn transform_literal(literal: &AstLiteral<'_>) -> Literal {
		match literal {
			AstLiteral::Text(text) => Literal::Str(text.text().to_string()),
			AstLiteral::Number(number) => Literal::Number(number.text().to_string()),
			AstLiteral::Bits(bits) => Literal::Bits(bits.text().to_string()),
			AstLiteral::Function(function) => Literal::Function(function.text().to_string()),
			AstLiteral::Null(_) => Literal::Null,
		}
	}
}
