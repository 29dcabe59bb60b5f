use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::DataType;

/// Declarative description of one output column.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ColumnSpec {
    /// Column name, unique within a schema; used as the header field and as
    /// the row key.
    pub name: String,
    /// Semantic type identifier (e.g. `integer`, `full_name`).
    pub data_type: String,
    /// Inclusive lower bound, required only by bounded types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimal: Option<i64>,
    /// Inclusive upper bound, required only by bounded types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximal: Option<i64>,
    /// Position in the output header; ascending, ties broken by declaration
    /// order.
    pub order: u32,
}

impl ColumnSpec {
    /// The built-in catalog entry for this column's type, if any.
    pub fn builtin_type(&self) -> Option<DataType> {
        DataType::resolve(&self.data_type)
    }
}

/// Declarative description of an entire data set row shape.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaSpec {
    /// Display name; also the base of the generated file name.
    pub name: String,
    /// Columns, at least one.
    pub columns: Vec<ColumnSpec>,
    /// Field separator for the output file.
    pub delimiter: char,
    /// Quote character for fields that require quoting; must differ from
    /// the delimiter.
    pub quotechar: char,
}

impl SchemaSpec {
    /// Column names in header order (ascending `order`, stable ties).
    pub fn column_headers(&self) -> Vec<&str> {
        let mut columns: Vec<&ColumnSpec> = self.columns.iter().collect();
        columns.sort_by_key(|column| column.order);
        columns.into_iter().map(|column| column.name.as_str()).collect()
    }

    /// Return a copy with columns sorted into header order, sequential
    /// `order` values reassigned, and bounds nulled out on columns whose
    /// type does not take them.
    ///
    /// Upstream schema storage is expected to hand the engine schemas in
    /// this shape; collaborators that allow order ties or stray bounds call
    /// this before validation.
    pub fn normalized(&self) -> SchemaSpec {
        let mut columns = self.columns.clone();
        columns.sort_by_key(|column| column.order);
        for (index, column) in columns.iter_mut().enumerate() {
            column.order = index as u32 + 1;
            let keeps_bounds = column
                .builtin_type()
                .map(|data_type| data_type.has_bounds())
                .unwrap_or(true);
            if !keeps_bounds {
                column.minimal = None;
                column.maximal = None;
            }
        }
        SchemaSpec {
            name: self.name.clone(),
            columns,
            delimiter: self.delimiter,
            quotechar: self.quotechar,
        }
    }
}
