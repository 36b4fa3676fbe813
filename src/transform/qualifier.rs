// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::{grammar::ast::AstFieldQualifier, model::Qualifier, transform::Transformer};

/// Maps a field qualifier as written to its canonical kind. A bare `KEY` or
/// `INDEX` means `PRIMARY KEY`; `UNIQUE KEY` and `UNIQUE INDEX` both mean
/// `UNIQUE KEY`.
pub fn canonicalize(qualifier: &AstFieldQualifier<'_>) -> Qualifier {
	match qualifier {
		AstFieldQualifier::NotNull(_) => Qualifier::NotNull,
		AstFieldQualifier::Null(_) => Qualifier::Null,
		AstFieldQualifier::PrimaryKey(_) | AstFieldQualifier::Key(_) | AstFieldQualifier::Index(_) => {
			Qualifier::PrimaryKey
		}
		AstFieldQualifier::AutoIncrement(_) => Qualifier::AutoIncrement,
		AstFieldQualifier::UniqueKey(_) | AstFieldQualifier::UniqueIndex(_) => Qualifier::UniqueKey,
		AstFieldQualifier::CharacterSet {
			name,
			..
		} => Qualifier::CharacterSet(name.text().to_string()),
		AstFieldQualifier::Collate {
			name,
			..
		} => Qualifier::Collate(name.text().to_string()),
		AstFieldQualifier::Default {
			value,
			..
		} => Qualifier::Default(Transformer::transform_literal(value)),
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		grammar::{self, ast::AstFieldQualifier},
		model::{Literal, Qualifier},
		transform::canonicalize,
	};

	fn qualifiers(source: &str) -> Vec<Qualifier> {
		let statements = grammar::parse(source).unwrap();
		let field = statements[0].as_create_table().definitions[0].as_field();
		field.qualifiers.iter().map(canonicalize).collect()
	}

	#[test]
	fn test_canonical_kinds() {
		let cases = [
			("NOT NULL", Qualifier::NotNull),
			("NULL", Qualifier::Null),
			("PRIMARY KEY", Qualifier::PrimaryKey),
			("KEY", Qualifier::PrimaryKey),
			("INDEX", Qualifier::PrimaryKey),
			("AUTO INCREMENT", Qualifier::AutoIncrement),
			("auto_increment", Qualifier::AutoIncrement),
			("UNIQUE KEY", Qualifier::UniqueKey),
			("UNIQUE INDEX", Qualifier::UniqueKey),
			("CHARACTER SET utf8", Qualifier::CharacterSet("utf8".to_string())),
			("COLLATE utf8_general_ci", Qualifier::Collate("utf8_general_ci".to_string())),
			("DEFAULT '0'", Qualifier::Default(Literal::Str("0".to_string()))),
			("DEFAULT NULL", Qualifier::Default(Literal::Null)),
			("DEFAULT b'0'", Qualifier::Default(Literal::Bits("b'0'".to_string()))),
			("DEFAULT CURRENT_TIMESTAMP", Qualifier::Default(Literal::Function("CURRENT_TIMESTAMP".to_string()))),
		];

		for (qualifier, expected) in cases {
			let source = format!("CREATE TABLE t (c VARCHAR(8) {});", qualifier);
			assert_eq!(qualifiers(&source), vec![expected], "qualifier = {}", qualifier);
		}
	}

	#[test]
	fn test_keyword_case_does_not_matter() {
		assert_eq!(qualifiers("CREATE TABLE t (c INT not null Key);"), vec![Qualifier::NotNull, Qualifier::PrimaryKey]);
		assert_eq!(qualifiers("CREATE TABLE t (c INT NoT NuLl KEY);"), vec![Qualifier::NotNull, Qualifier::PrimaryKey]);
	}

	#[test]
	fn test_canonicalize_is_idempotent() {
		let cases = [
			"NOT NULL KEY UNIQUE INDEX AUTO INCREMENT DEFAULT 1 COLLATE utf8_bin",
			"DEFAULT \"it's\"",
			"DEFAULT 'it\\'s'",
			"DEFAULT 'say \"hi\"'",
			"DEFAULT 'it\\'s \"both\"'",
			"DEFAULT \"it's \\\"both\\\"\"",
			"DEFAULT ''",
			"DEFAULT b'0' NULL",
			"DEFAULT current_timestamp(6)",
			"CHARACTER SET `big five` COLLATE `utf8 bin`",
			"COLLATE \"a`b\"",
		];

		for qualifier in cases {
			let original = qualifiers(&format!("CREATE TABLE t (c INT {});", qualifier));

			let rendered: Vec<String> = original.iter().map(ToString::to_string).collect();
			let source = format!("CREATE TABLE t (c INT {});", rendered.join(" "));
			assert_eq!(qualifiers(&source), original, "qualifier = {}", qualifier);
		}
	}

	#[test]
	fn test_canonicalize_is_deterministic() {
		let statements = grammar::parse("CREATE TABLE t (c INT INDEX);").unwrap();
		let qualifier: &AstFieldQualifier = &statements[0].as_create_table().definitions[0].as_field().qualifiers[0];
		assert_eq!(canonicalize(qualifier), canonicalize(qualifier));
	}
}
