// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Schema extraction from MySQL schema dumps.
//!
//! This crate provides:
//! - Text matching primitives via the [`engine`] module
//! - The dump dialect and its concrete parse tree via the [`grammar`] module
//! - Lowering into the schema model via the [`transform`] module
//! - The schema model itself via the [`model`] module
//!
//! Most callers only need [`parse`].

pub mod engine;
pub mod error;
pub mod grammar;
pub mod model;
pub mod transform;

pub use error::{Error, Position, Result};
pub use model::{Database, Field, Index, IndexAlgorithm, IndexType, Literal, Qualifier, Statement, Table};
use tracing::instrument;

/// Parse a schema dump into its interpreted statements, in source order.
///
/// Only `USE` and `CREATE TABLE` produce a [`Statement`]. Every other
/// recognized statement is consumed and dropped. A statement that is not
/// recognized fails the whole input.
///
/// # Example
///
/// ```
/// let statements = scheman::parse("USE shop;\nSET NAMES utf8;\nCREATE TABLE t (id INT NOT NULL);").unwrap();
/// assert_eq!(statements.len(), 2);
/// ```
#[instrument(name = "scheman::parse", level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Vec<Statement>> {
	let statements = grammar::parse(source)?;
	Ok(transform::transform(statements))
}
