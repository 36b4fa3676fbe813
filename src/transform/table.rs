// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tracing::trace;

use crate::{
	grammar::ast::{
		AstCreateDefinition, AstCreateTable, AstField, AstIndex, AstIndexAlgorithm, AstIndexKind, AstKeyPart,
		AstPrimaryKey,
	},
	model::{Field, Index, IndexAlgorithm, IndexType, Table},
	transform::{Transformer, canonicalize},
};

impl Transformer {
	pub(crate) fn transform_create_table(node: AstCreateTable<'_>) -> Table {
		let table = node.name.text();
		let mut fields = Vec::new();
		let mut indices = Vec::new();

		for definition in node.definitions {
			match definition {
				AstCreateDefinition::Field(field) => fields.push(Self::transform_field(field)),
				AstCreateDefinition::PrimaryKey(key) => indices.push(Self::transform_primary_key(key)),
				AstCreateDefinition::Index(index) => indices.push(Self::transform_index(index)),
				AstCreateDefinition::UniqueKey(key) => {
					trace!(table, name = key.name.map(|name| name.text()), "unique key not lowered")
				}
				AstCreateDefinition::ForeignKey(key) => {
					trace!(table, references = key.reference.table.text(), "foreign key not lowered")
				}
				AstCreateDefinition::Comment(_) => {}
			}
		}

		Table {
			name: table.to_string(),
			fields,
			indices,
		}
	}

	fn transform_field(field: AstField<'_>) -> Field {
		Field {
			name: field.name.text().to_string(),
			type_name: field.data_type.name.text().to_lowercase(),
			type_params: field.data_type.values.iter().map(Self::transform_literal).collect(),
			qualifiers: field.qualifiers.iter().map(canonicalize).collect(),
		}
	}

	fn transform_primary_key(key: AstPrimaryKey<'_>) -> Index {
		Index {
			column: Self::first_column(&key.columns),
			name: None,
			primary: true,
			index_type: Self::merge_algorithm(key.algorithm_before, key.algorithm_after).map(IndexType::Algorithm),
		}
	}

	fn transform_index(index: AstIndex<'_>) -> Index {
		let index_type = match index.kind {
			AstIndexKind::Key => {
				Self::merge_algorithm(index.algorithm_before, index.algorithm_after).map(IndexType::Algorithm)
			}
			AstIndexKind::FullText => Some(IndexType::FullText),
			AstIndexKind::Spatial => Some(IndexType::Spatial),
		};

		Index {
			column: Self::first_column(&index.columns),
			name: index.name.map(|name| name.text().to_string()),
			primary: false,
			index_type,
		}
	}

	/// Key part lists are matched with `comma_separated`, so they are never
	/// empty.
	fn first_column(columns: &[AstKeyPart<'_>]) -> String {
		columns[0].column.text().to_string()
	}

	/// The algorithm after the column list overrides the one before it.
	fn merge_algorithm(
		before: Option<AstIndexAlgorithm>,
		after: Option<AstIndexAlgorithm>,
	) -> Option<IndexAlgorithm> {
		after.or(before).map(|algorithm| match algorithm {
			AstIndexAlgorithm::BTree => IndexAlgorithm::BTree,
			AstIndexAlgorithm::Hash => IndexAlgorithm::Hash,
			AstIndexAlgorithm::RTree => IndexAlgorithm::RTree,
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		grammar,
		model::{Field, Index, IndexAlgorithm, IndexType, Literal, Qualifier, Statement, Table},
		transform::transform,
	};

	fn table(source: &str) -> Table {
		let mut result = transform(grammar::parse(source).unwrap());
		assert_eq!(result.len(), 1);
		match result.remove(0) {
			Statement::CreateTable(table) => table,
			statement => panic!("not a table: {:?}", statement),
		}
	}

	#[test]
	fn test_fields_and_primary_key() {
		let result = table(
			"CREATE TABLE `table1` (\n  `column1` INTEGER(11) NOT NULL AUTO INCREMENT,\n  `column2` VARCHAR(255) NOT NULL,\n  PRIMARY KEY (`column1`)\n);",
		);

		assert_eq!(
			result,
			Table {
				name: "table1".to_string(),
				fields: vec![
					Field {
						name: "column1".to_string(),
						type_name: "integer".to_string(),
						type_params: vec![Literal::Number("11".to_string())],
						qualifiers: vec![Qualifier::NotNull, Qualifier::AutoIncrement],
					},
					Field {
						name: "column2".to_string(),
						type_name: "varchar".to_string(),
						type_params: vec![Literal::Number("255".to_string())],
						qualifiers: vec![Qualifier::NotNull],
					},
				],
				indices: vec![Index {
					column: "column1".to_string(),
					name: None,
					primary: true,
					index_type: None,
				}],
			}
		);
	}

	#[test]
	fn test_type_name_is_lower_case() {
		let result = table("CREATE TABLE t (c VarChar(8), d BIGINT UNSIGNED);");
		assert_eq!(result.fields[0].type_name, "varchar");
		assert_eq!(result.fields[1].type_name, "bigint");
		assert!(result.fields[1].qualifiers.is_empty());
	}

	#[test]
	fn test_primary_key_algorithm_position() {
		let before = table("CREATE TABLE t (c INT, PRIMARY KEY BTREE (c));");
		let after = table("CREATE TABLE t (c INT, PRIMARY KEY (c) BTREE);");
		let using = table("CREATE TABLE t (c INT, PRIMARY KEY USING BTREE (c));");

		assert_eq!(before.indices[0].index_type, Some(IndexType::Algorithm(IndexAlgorithm::BTree)));
		assert_eq!(before, after);
		assert_eq!(before, using);
	}

	#[test]
	fn test_trailing_algorithm_wins() {
		let result = table("CREATE TABLE t (c INT, KEY i USING HASH (c) USING BTREE);");
		assert_eq!(result.indices[0].index_type, Some(IndexType::Algorithm(IndexAlgorithm::BTree)));
	}

	#[test]
	fn test_named_index() {
		let cases = [
			("KEY index1 (`column1`)", None),
			("KEY index1 USING BTREE (`column1`)", Some(IndexType::Algorithm(IndexAlgorithm::BTree))),
			("KEY index1 (`column1`) USING BTREE", Some(IndexType::Algorithm(IndexAlgorithm::BTree))),
			("INDEX index1 (`column1`) USING RTREE", Some(IndexType::Algorithm(IndexAlgorithm::RTree))),
			("FULLTEXT index1 (`column1`)", Some(IndexType::FullText)),
			("SPATIAL index1 (`column1`)", Some(IndexType::Spatial)),
		];

		for (definition, index_type) in cases {
			let result = table(&format!("CREATE TABLE `table1` (`column1` INTEGER, {});", definition));
			assert_eq!(
				result.indices,
				vec![Index {
					column: "column1".to_string(),
					name: Some("index1".to_string()),
					primary: false,
					index_type,
				}],
				"definition = {}",
				definition
			);
		}
	}

	#[test]
	fn test_unnamed_index() {
		let result = table("CREATE TABLE t (a INT, b INT, KEY (b, a));");
		assert_eq!(
			result.indices,
			vec![Index {
				column: "b".to_string(),
				name: None,
				primary: false,
				index_type: None,
			}]
		);
	}

	#[test]
	fn test_every_key_produces_an_index() {
		let result = table("CREATE TABLE t (a INT, b TEXT, PRIMARY KEY (a, b), FULLTEXT (b), INDEX USING HASH (b, a));");
		let columns: Vec<(&str, bool)> =
			result.indices.iter().map(|index| (index.column.as_str(), index.primary)).collect();
		assert_eq!(columns, vec![("a", true), ("b", false), ("b", false)]);
	}

	#[test]
	fn test_unique_and_foreign_keys_are_skipped() {
		let result = table(
			"CREATE TABLE t (\n  a INT,\n  b INT,\n  UNIQUE KEY u (a),\n  CONSTRAINT fk FOREIGN KEY (b) REFERENCES u (id),\n  KEY k (b)\n);",
		);
		assert_eq!(result.fields.len(), 2);
		assert_eq!(result.indices.len(), 1);
		assert_eq!(result.indices[0].name.as_deref(), Some("k"));
	}

	#[test]
	fn test_definition_order_is_kept() {
		let result = table("CREATE TABLE t (z INT, KEY k2 (y), y INT, KEY k1 (z), -- tail\n a INT);");
		let fields: Vec<&str> = result.fields.iter().map(|field| field.name.as_str()).collect();
		let indices: Vec<Option<&str>> = result.indices.iter().map(|index| index.name.as_deref()).collect();
		assert_eq!(fields, vec!["z", "y", "a"]);
		assert_eq!(indices, vec![Some("k2"), Some("k1")]);
	}
}
