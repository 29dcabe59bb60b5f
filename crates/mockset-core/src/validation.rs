use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::SchemaSpec;

/// Validate a schema before any generation job is started.
///
/// This checks:
/// - schema name and column presence
/// - duplicate column names and duplicate column orders
/// - delimiter/quote characters differ and are ASCII
/// - bounds ordering and floors on columns that carry bounds
///
/// Bound *presence* for bounded types is deliberately not checked here;
/// a bounded column without bounds fails at generation time.
pub fn validate_schema(schema: &SchemaSpec) -> Result<()> {
    if schema.name.trim().is_empty() {
        return Err(Error::InvalidSchema("schema name is empty".to_string()));
    }

    if schema.columns.is_empty() {
        return Err(Error::InvalidSchema(format!(
            "schema '{}' has no columns",
            schema.name
        )));
    }

    if schema.delimiter == schema.quotechar {
        return Err(Error::InvalidSchema(format!(
            "schema '{}': quote character must not be the same as the column separator",
            schema.name
        )));
    }
    for (label, ch) in [("delimiter", schema.delimiter), ("quotechar", schema.quotechar)] {
        if !ch.is_ascii() {
            return Err(Error::InvalidSchema(format!(
                "schema '{}': {label} '{ch}' is not an ASCII character",
                schema.name
            )));
        }
    }

    let mut names = BTreeSet::new();
    let mut orders = BTreeSet::new();
    for column in &schema.columns {
        if column.name.trim().is_empty() {
            return Err(Error::InvalidSchema(format!(
                "schema '{}' has a column with an empty name",
                schema.name
            )));
        }
        if !names.insert(column.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate column name: {}.{}",
                schema.name, column.name
            )));
        }
        if !orders.insert(column.order) {
            return Err(Error::InvalidSchema(format!(
                "duplicate column order {} on {}.{}",
                column.order, schema.name, column.name
            )));
        }
        validate_bounds(schema, column)?;
    }

    Ok(())
}

fn validate_bounds(schema: &SchemaSpec, column: &crate::schema::ColumnSpec) -> Result<()> {
    if let (Some(minimal), Some(maximal)) = (column.minimal, column.maximal) {
        if minimal > maximal {
            return Err(Error::InvalidSchema(format!(
                "{}.{}: minimal must be less than or equal to maximal",
                schema.name, column.name
            )));
        }
    }

    for (label, bound) in [("minimal", column.minimal), ("maximal", column.maximal)] {
        if let Some(value) = bound {
            if value < 0 {
                return Err(Error::InvalidSchema(format!(
                    "{}.{}: {label} must not be negative",
                    schema.name, column.name
                )));
            }
        }
    }

    let length_driven = column
        .builtin_type()
        .map(|data_type| data_type.bounds_are_length())
        .unwrap_or(false);
    if length_driven {
        if let Some(minimal) = column.minimal {
            if minimal < 1 {
                return Err(Error::InvalidSchema(format!(
                    "{}.{}: minimal length must be at least 1",
                    schema.name, column.name
                )));
            }
        }
    }

    Ok(())
}
