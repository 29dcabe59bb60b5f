use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in semantic types with a generation routine shipped in the engine.
///
/// A [`crate::ColumnSpec`] references a type by its string identifier rather
/// than by this enum, so registries may accept additional names at runtime;
/// this catalog describes the constraint contract of the built-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Integer,
    Word,
    Sentence,
    Text,
    FullName,
    Job,
    Email,
    DomainName,
    PhoneNumber,
    CompanyName,
    Address,
    Date,
}

impl DataType {
    /// All built-in types, in display order.
    pub const ALL: [DataType; 12] = [
        DataType::Integer,
        DataType::Word,
        DataType::Sentence,
        DataType::Text,
        DataType::FullName,
        DataType::Job,
        DataType::Email,
        DataType::DomainName,
        DataType::PhoneNumber,
        DataType::CompanyName,
        DataType::Address,
        DataType::Date,
    ];

    /// Canonical identifier used in schema files and registry lookups.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Word => "word",
            DataType::Sentence => "sentence",
            DataType::Text => "text",
            DataType::FullName => "full_name",
            DataType::Job => "job",
            DataType::Email => "email",
            DataType::DomainName => "domain_name",
            DataType::PhoneNumber => "phone_number",
            DataType::CompanyName => "company_name",
            DataType::Address => "address",
            DataType::Date => "date",
        }
    }

    /// Three-letter short code for compact storage and admin displays.
    pub fn code(&self) -> &'static str {
        match self {
            DataType::Integer => "INT",
            DataType::Word => "WRD",
            DataType::Sentence => "SNT",
            DataType::Text => "TXT",
            DataType::FullName => "FNM",
            DataType::Job => "JOB",
            DataType::Email => "EML",
            DataType::DomainName => "DMN",
            DataType::PhoneNumber => "PHN",
            DataType::CompanyName => "CMN",
            DataType::Address => "ADR",
            DataType::Date => "DTE",
        }
    }

    /// Whether the type requires caller-supplied `minimal`/`maximal` bounds.
    pub fn has_bounds(&self) -> bool {
        matches!(
            self,
            DataType::Integer | DataType::Word | DataType::Sentence | DataType::Text
        )
    }

    /// Whether the bounds describe a length or count rather than a value.
    ///
    /// Length-driven types must never receive a minimum below 1, since no
    /// routine may produce an empty string.
    pub fn bounds_are_length(&self) -> bool {
        matches!(self, DataType::Word | DataType::Sentence | DataType::Text)
    }

    /// Named source-data lists the type draws from, in argument order.
    pub fn source_keys(&self) -> &'static [&'static str] {
        match self {
            DataType::FullName => &["first_names", "last_names"],
            DataType::Job => &["jobs"],
            _ => &[],
        }
    }

    /// Resolve a type identifier, case-folded and with whitespace collapsed
    /// to underscores, so `"Full Name"` and `"full_name"` are equivalent.
    pub fn resolve(name: &str) -> Option<DataType> {
        let normalized = normalize_type_name(name);
        DataType::ALL
            .into_iter()
            .find(|data_type| data_type.name() == normalized)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize a semantic type identifier for registry lookups.
pub fn normalize_type_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
