// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	character::complete::{char, none_of},
	combinator::{map, recognize},
	multi::{many0_count, many1_count},
	sequence::{delimited, preceded},
};

use crate::{
	engine::{Fragment, PResult, Span, comma_separated, keyword, ws, ws1},
	grammar::{
		ast::{AstAlterSpecification, AstAlterTable},
		foreign_key::parse_foreign_key,
		identifier::parse_identifier,
		literal::parse_text,
	},
};

/// `ALTER TABLE name specification, ... ;`
pub(crate) fn parse_alter_table(input: Span) -> PResult<AstAlterTable> {
	let (rest, (token, _, table, _, specifications, _, _)) = (
		keyword("alter table"),
		ws1,
		parse_identifier,
		ws1,
		comma_separated(parse_alter_specification),
		ws,
		char(';'),
	)
		.parse(input)?;

	Ok((
		rest,
		AstAlterTable {
			token: token.into(),
			table,
			specifications,
		},
	))
}

/// `ADD [CONSTRAINT [symbol]] FOREIGN KEY ...`, or any other specification
/// kept as text.
fn parse_alter_specification(input: Span) -> PResult<AstAlterSpecification> {
	alt((
		map(preceded((keyword("add"), ws1), parse_foreign_key), AstAlterSpecification::AddForeignKey),
		map(parse_other_specification, |text| AstAlterSpecification::Other(Fragment::from(text).trim_end())),
	))
	.parse(input)
}

/// Text up to the next top level `,` or `;`. Parenthesized groups and
/// quoted strings are taken whole.
fn parse_other_specification(input: Span) -> PResult<Span> {
	recognize(many1_count(alt((recognize(parse_text), parse_group, recognize(none_of(",;()'\"`")))))).parse(input)
}

fn parse_group(input: Span) -> PResult<Span> {
	recognize(delimited(
		char('('),
		many0_count(alt((recognize(parse_text), parse_group, recognize(none_of("()'\"`"))))),
		char(')'),
	))
	.parse(input)
}

#[cfg(test)]
mod tests {
	use crate::{
		engine::span,
		grammar::{ast::AstAlterSpecification, alter::parse_alter_table},
	};

	#[test]
	fn test_alter_table_add_foreign_key() {
		let input = "ALTER TABLE `table1` ADD FOREIGN KEY (`column1`) REFERENCES `table2` (`id`);";
		let (rest, result) = parse_alter_table(span(input)).unwrap();
		assert!(rest.fragment().is_empty());
		assert_eq!(result.table.text(), "table1");

		let AstAlterSpecification::AddForeignKey(foreign_key) = &result.specifications[0] else { panic!() };
		assert_eq!(foreign_key.columns[0].text(), "column1");
		assert_eq!(foreign_key.reference.table.text(), "table2");
	}

	#[test]
	fn test_alter_table_with_constraint() {
		let input = "alter table t1 add constraint fk_t2 foreign key (t2_id) references t2 (id) on delete cascade;";
		let (_, result) = parse_alter_table(span(input)).unwrap();
		let AstAlterSpecification::AddForeignKey(foreign_key) = &result.specifications[0] else { panic!() };
		assert_eq!(foreign_key.constraint.unwrap().text(), "fk_t2");
		assert_eq!(foreign_key.reference.on_delete.unwrap().text(), "cascade");
	}

	#[test]
	fn test_alter_table_update_action_first() {
		let input = "ALTER TABLE t ADD FOREIGN KEY (a) REFERENCES u (b) ON UPDATE CASCADE ON DELETE CASCADE;";
		let (rest, result) = parse_alter_table(span(input)).unwrap();
		assert!(rest.fragment().is_empty());
		assert_eq!(result.specifications.len(), 1);

		let AstAlterSpecification::AddForeignKey(foreign_key) = &result.specifications[0] else { panic!() };
		assert_eq!(foreign_key.reference.on_update.unwrap().text(), "CASCADE");
		assert_eq!(foreign_key.reference.on_delete.unwrap().text(), "CASCADE");
	}

	#[test]
	fn test_alter_table_other_specifications() {
		let input = "ALTER TABLE t ADD INDEX i (a, b), DROP COLUMN c , ADD COLUMN d VARCHAR(8) DEFAULT 'x,y';";
		let (rest, result) = parse_alter_table(span(input)).unwrap();
		assert!(rest.fragment().is_empty());

		let texts: Vec<&str> = result
			.specifications
			.iter()
			.map(|specification| match specification {
				AstAlterSpecification::Other(text) => text.text(),
				AstAlterSpecification::AddForeignKey(_) => panic!(),
			})
			.collect();
		assert_eq!(texts, vec!["ADD INDEX i (a, b)", "DROP COLUMN c", "ADD COLUMN d VARCHAR(8) DEFAULT 'x,y'"]);
	}

	#[test]
	fn test_alter_table_rejects() {
		assert!(parse_alter_table(span("ALTER TABLE t;")).is_err());
		assert!(parse_alter_table(span("ALTER TABLE t ADD INDEX (a")).is_err());
		assert!(parse_alter_table(span("ALTER TABLE t DROP COLUMN c")).is_err());
	}
}
