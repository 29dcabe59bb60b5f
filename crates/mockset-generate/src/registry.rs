use std::collections::HashMap;

use rand::RngCore;

use mockset_core::types::normalize_type_name;
use mockset_core::{ColumnSpec, DataType, SchemaSpec, SourceDataStore};

use crate::config::GeneratorProfile;
use crate::errors::GenerationError;
use crate::resolver::bind_routine;
use crate::routines;
use crate::row::{CellGenerator, RowGenerator};

/// Routine without constraints.
pub type PlainRoutine = fn(&GeneratorProfile, &mut dyn RngCore) -> String;
/// Routine taking inclusive `minimal`/`maximal` bounds.
pub type BoundedRoutine = fn(&GeneratorProfile, i64, i64, &mut dyn RngCore) -> String;
/// Routine taking source lists in declared key order.
pub type SourceRoutine = fn(&GeneratorProfile, &[Vec<String>], &mut dyn RngCore) -> String;

/// Calling convention of a registered routine.
#[derive(Debug, Clone, Copy)]
pub enum RoutineKind {
    Plain(PlainRoutine),
    Bounded(BoundedRoutine),
    SourceDriven(SourceRoutine),
}

/// A registered semantic type: its identifier, its source-data
/// requirements, and its routine.
#[derive(Debug, Clone)]
pub struct SemanticType {
    name: String,
    source_keys: Vec<String>,
    kind: RoutineKind,
}

impl SemanticType {
    pub fn plain(name: impl Into<String>, routine: PlainRoutine) -> Self {
        Self {
            name: name.into(),
            source_keys: Vec::new(),
            kind: RoutineKind::Plain(routine),
        }
    }

    pub fn bounded(name: impl Into<String>, routine: BoundedRoutine) -> Self {
        Self {
            name: name.into(),
            source_keys: Vec::new(),
            kind: RoutineKind::Bounded(routine),
        }
    }

    pub fn source_driven(
        name: impl Into<String>,
        source_keys: &[&str],
        routine: SourceRoutine,
    ) -> Self {
        Self {
            name: name.into(),
            source_keys: source_keys.iter().map(|key| key.to_string()).collect(),
            kind: RoutineKind::SourceDriven(routine),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the type requires caller-supplied bounds.
    pub fn has_bounds(&self) -> bool {
        matches!(self.kind, RoutineKind::Bounded(_))
    }

    /// Named source lists the type requires, in argument order.
    pub fn source_keys(&self) -> &[String] {
        &self.source_keys
    }

    pub fn kind(&self) -> RoutineKind {
        self.kind
    }
}

/// Registry mapping normalized semantic type names to generation routines.
///
/// Built once per engine; adding a semantic type means registering a
/// routine here, resolution itself never changes.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    profile: GeneratorProfile,
    entries: HashMap<String, SemanticType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::with_profile(GeneratorProfile::default())
    }

    /// Build the registry with all built-in types over the given profile.
    pub fn with_profile(profile: GeneratorProfile) -> Self {
        let mut registry = Self {
            profile,
            entries: HashMap::new(),
        };
        for data_type in DataType::ALL {
            registry.register(builtin(data_type));
        }
        registry
    }

    /// Register a semantic type, replacing any previous registration with
    /// the same normalized name.
    pub fn register(&mut self, semantic: SemanticType) {
        self.entries
            .insert(normalize_type_name(semantic.name()), semantic);
    }

    /// Resolve a type identifier (case-folded, whitespace collapsed).
    pub fn resolve(&self, name: &str) -> Result<&SemanticType, GenerationError> {
        self.entries
            .get(&normalize_type_name(name))
            .ok_or_else(|| GenerationError::UnknownType(name.to_string()))
    }

    pub fn profile(&self) -> &GeneratorProfile {
        &self.profile
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.values().map(SemanticType::name).collect();
        names.sort_unstable();
        names
    }

    /// Bind one column to a ready-to-call cell generator.
    pub fn cell_generator(
        &self,
        column: &ColumnSpec,
        store: &SourceDataStore,
    ) -> Result<CellGenerator, GenerationError> {
        let semantic = self.resolve(&column.data_type)?;
        let routine = bind_routine(semantic, &column.name, column.minimal, column.maximal, store)?;
        Ok(CellGenerator::new(routine))
    }

    /// Bind a whole schema to a row generator, columns in header order.
    pub fn row_generator(
        &self,
        schema: &SchemaSpec,
        store: &SourceDataStore,
    ) -> Result<RowGenerator, GenerationError> {
        let mut columns: Vec<&ColumnSpec> = schema.columns.iter().collect();
        columns.sort_by_key(|column| column.order);

        let mut cells = Vec::with_capacity(columns.len());
        for column in columns {
            cells.push((column.name.clone(), self.cell_generator(column, store)?));
        }
        Ok(RowGenerator::new(cells))
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin(data_type: DataType) -> SemanticType {
    let name = data_type.name();
    match data_type {
        DataType::Integer => SemanticType::bounded(name, routines::integer),
        DataType::Word => SemanticType::bounded(name, routines::word),
        DataType::Sentence => SemanticType::bounded(name, routines::sentence),
        DataType::Text => SemanticType::bounded(name, routines::text),
        DataType::FullName => {
            SemanticType::source_driven(name, data_type.source_keys(), routines::full_name)
        }
        DataType::Job => SemanticType::source_driven(name, data_type.source_keys(), routines::job),
        DataType::Email => SemanticType::plain(name, routines::email),
        DataType::DomainName => SemanticType::plain(name, routines::domain_name),
        DataType::PhoneNumber => SemanticType::plain(name, routines::phone_number),
        DataType::CompanyName => SemanticType::plain(name, routines::company_name),
        DataType::Address => SemanticType::plain(name, routines::address),
        DataType::Date => SemanticType::plain(name, routines::date),
    }
}
