// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use nom::{
	Parser,
	branch::alt,
	character::complete::char,
	combinator::{map, opt},
	multi::many0_count,
	sequence::{delimited, preceded, terminated},
};

use crate::{
	engine::{Fragment, GrammarError, PResult, Span, comma_separated, keyword, parenthesized, ws, ws1},
	grammar::{
		ast::{AstCreateDefinition, AstCreateTable},
		comment::{parse_comment, parse_comments},
		field::parse_field,
		foreign_key::parse_foreign_key,
		identifier::parse_identifier,
		index::{parse_index, parse_primary_key, parse_unique_key},
		statement::parse_body,
	},
};

/// `CREATE [TEMPORARY] TABLE [IF NOT EXISTS] name ( definition, ... ) [options] ;`
pub(crate) fn parse_create_table(input: Span) -> PResult<AstCreateTable> {
	let (rest, (token, temporary, _, _, if_not_exists, _, name, _, definitions, options, _)) = (
		keyword("create"),
		opt(preceded(ws1, keyword("temporary"))),
		ws1,
		keyword("table"),
		opt(preceded(ws1, keyword("if not exists"))),
		ws,
		parse_identifier,
		ws,
		parenthesized(terminated(
			comma_separated(parse_create_definition),
			many0_count(preceded(ws, parse_comment)),
		)),
		preceded(ws, parse_body),
		char(';'),
	)
		.parse(input)?;

	let options = Fragment::from(options).trim_end();

	Ok((
		rest,
		AstCreateTable {
			token: token.into(),
			temporary: temporary.is_some(),
			if_not_exists: if_not_exists.is_some(),
			name,
			definitions,
			options: (!options.is_empty()).then_some(options),
		},
	))
}

/// Definitions inside a `CREATE TABLE` body, most specific first. Key and
/// index definitions are tried before fields so that `KEY (...)` is not
/// read as a column named `KEY`.
fn parse_create_definition(input: Span) -> PResult<AstCreateDefinition> {
	alt((
		map(commented(parse_primary_key), AstCreateDefinition::PrimaryKey),
		map(commented(parse_unique_key), AstCreateDefinition::UniqueKey),
		map(commented(parse_foreign_key), AstCreateDefinition::ForeignKey),
		map(commented(parse_index), AstCreateDefinition::Index),
		map(parse_field, AstCreateDefinition::Field),
		map(parse_comment, AstCreateDefinition::Comment),
	))
	.parse(input)
}

/// A key definition with the comments in front of it and a line comment
/// after it skipped.
fn commented<'a, P>(
	definition: P,
) -> impl Parser<Span<'a>, Output = <P as Parser<Span<'a>>>::Output, Error = GrammarError<'a>>
where
	P: Parser<Span<'a>, Error = GrammarError<'a>>,
{
	delimited(parse_comments, definition, opt(preceded(ws, parse_comment)))
}

#[cfg(test)]
mod tests {
	use crate::{
		engine::span,
		grammar::{
			ast::{AstCreateDefinition, AstIndexKind},
			create_table::{parse_create_definition, parse_create_table},
		},
	};

	#[test]
	fn test_create_table() {
		let input = "CREATE TABLE `table1` (\n  `column1` INTEGER(11) NOT NULL AUTO INCREMENT,\n  `column2` VARCHAR(255) NOT NULL,\n  PRIMARY KEY (`column1`)\n);";
		let (rest, result) = parse_create_table(span(input)).unwrap();
		assert!(rest.fragment().is_empty());
		assert_eq!(result.token.text(), "CREATE");
		assert!(!result.temporary);
		assert!(!result.if_not_exists);
		assert_eq!(result.name.text(), "table1");
		assert_eq!(result.definitions.len(), 3);
		assert_eq!(result.definitions[0].as_field().name.text(), "column1");
		assert_eq!(result.definitions[1].as_field().name.text(), "column2");
		assert_eq!(result.definitions[2].as_primary_key().columns[0].column.text(), "column1");
		assert_eq!(result.options, None);
	}

	#[test]
	fn test_create_table_prefixes() {
		let (_, result) = parse_create_table(span("CREATE TEMPORARY TABLE IF NOT EXISTS t (a INT);")).unwrap();
		assert!(result.temporary);
		assert!(result.if_not_exists);
		assert_eq!(result.name.text(), "t");

		let (_, result) = parse_create_table(span("create table if not exists `t`(a INT) ;")).unwrap();
		assert!(!result.temporary);
		assert!(result.if_not_exists);
	}

	#[test]
	fn test_create_table_options() {
		let (_, result) =
			parse_create_table(span("CREATE TABLE t (a INT) ENGINE=InnoDB DEFAULT CHARSET=utf8 ;")).unwrap();
		assert_eq!(result.options.unwrap().text(), "ENGINE=InnoDB DEFAULT CHARSET=utf8");

		let (_, result) = parse_create_table(span("CREATE TABLE t (a INT) COMMENT='x;y';")).unwrap();
		assert_eq!(result.options.unwrap().text(), "COMMENT='x;y'");
	}

	#[test]
	fn test_create_table_rejects() {
		for input in [
			"CREATE TABLE t ();",
			"CREATE TABLE t (a INT,);",
			"CREATE TABLE t (a INT)",
			"CREATE TABLE (a INT);",
			"CREATE TABLES t (a INT);",
			"CREATE TABLE t (a INT NOT NULLABLE);",
		] {
			assert!(parse_create_table(span(input)).is_err(), "input = {}", input);
		}
	}

	#[test]
	fn test_constraints() {
		let input = "CREATE TABLE t (\n  a INT,\n  UNIQUE KEY u (a),\n  CONSTRAINT fk FOREIGN KEY (a) REFERENCES t2 (id)\n);";
		let (_, result) = parse_create_table(span(input)).unwrap();
		assert_eq!(result.definitions[1].as_unique_key().name.unwrap().text(), "u");

		let foreign_key = result.definitions[2].as_foreign_key();
		assert_eq!(foreign_key.constraint.unwrap().text(), "fk");
		assert_eq!(foreign_key.reference.table.text(), "t2");
	}

	#[test]
	fn test_comment_after_comma_belongs_to_next_field() {
		let (_, result) = parse_create_table(span("CREATE TABLE t (\n  a INT, -- b\n  b INT\n);")).unwrap();
		assert_eq!(result.definitions.len(), 2);
		assert_eq!(result.definitions[0].as_field().trailing_comment, None);
		assert_eq!(result.definitions[1].as_field().comments[0].text(), "-- b");
	}

	#[test]
	fn test_create_definition_precedence() {
		let cases = [
			("PRIMARY KEY (a)", "primary key"),
			("CONSTRAINT pk PRIMARY KEY (a)", "primary key"),
			("UNIQUE KEY u (a)", "unique key"),
			("CONSTRAINT u UNIQUE (a)", "unique key"),
			("FOREIGN KEY (a) REFERENCES t (b)", "foreign key"),
			("CONSTRAINT fk FOREIGN KEY (a) REFERENCES t (b)", "foreign key"),
			("KEY k (a)", "index"),
			("INDEX (a)", "index"),
			("FULLTEXT f (a)", "index"),
			("key_name INT", "field"),
			("primary_key INT", "field"),
			("unique_id INT", "field"),
			("`key` INT", "field"),
			("index_col VARCHAR(10)", "field"),
			("-- comment\n", "comment"),
		];

		for (input, expected) in cases {
			let (rest, result) = parse_create_definition(span(input)).unwrap();
			let kind = match result {
				AstCreateDefinition::PrimaryKey(_) => "primary key",
				AstCreateDefinition::UniqueKey(_) => "unique key",
				AstCreateDefinition::ForeignKey(_) => "foreign key",
				AstCreateDefinition::Index(_) => "index",
				AstCreateDefinition::Field(_) => "field",
				AstCreateDefinition::Comment(_) => "comment",
			};
			assert_eq!(kind, expected, "input = {}", input);
			assert!(rest.fragment().is_empty(), "input = {}", input);
		}
	}

	#[test]
	fn test_comment_after_key_definition() {
		let input = "CREATE TABLE t (\n  a INT,\n  PRIMARY KEY (a) -- pk\n, KEY k (a) # idx\n,\n  \
			UNIQUE KEY u (a) -- unique\n  , FOREIGN KEY (a) REFERENCES u (id) -- fk\n, b INT\n);";
		let (rest, result) = parse_create_table(span(input)).unwrap();
		assert!(rest.fragment().is_empty());

		let kinds: Vec<&str> = result
			.definitions
			.iter()
			.map(|definition| match definition {
				AstCreateDefinition::PrimaryKey(_) => "primary key",
				AstCreateDefinition::UniqueKey(_) => "unique key",
				AstCreateDefinition::ForeignKey(_) => "foreign key",
				AstCreateDefinition::Index(_) => "index",
				AstCreateDefinition::Field(_) => "field",
				AstCreateDefinition::Comment(_) => "comment",
			})
			.collect();
		assert_eq!(kinds, vec!["field", "primary key", "index", "unique key", "foreign key", "field"]);
		assert_eq!(result.definitions[5].as_field().name.text(), "b");
	}

	#[test]
	fn test_comments_inside_body() {
		let input = "CREATE TABLE t (\n  -- id\n  id INT -- the id\n, # keys\n  KEY k (id)\n  -- end\n);";
		let (rest, result) = parse_create_table(span(input)).unwrap();
		assert!(rest.fragment().is_empty());
		assert_eq!(result.definitions.len(), 2);

		let field = result.definitions[0].as_field();
		assert_eq!(field.comments[0].text(), "-- id");
		assert_eq!(field.trailing_comment.unwrap().text(), "-- the id");

		let index = result.definitions[1].as_index();
		assert_eq!(index.kind, AstIndexKind::Key);
		assert_eq!(index.name.unwrap().text(), "k");
	}
}
