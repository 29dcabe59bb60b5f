use std::fs;
use std::path::PathBuf;

use mockset_core::{ColumnSpec, SchemaSpec, SourceDataStore};
use mockset_generate::{GenerateOptions, GenerationEngine, GenerationError};

fn column(name: &str, data_type: &str, order: u32) -> ColumnSpec {
    ColumnSpec {
        name: name.to_string(),
        data_type: data_type.to_string(),
        minimal: None,
        maximal: None,
        order,
    }
}

fn people_schema() -> SchemaSpec {
    let mut age = column("Age", "integer", 2);
    age.minimal = Some(18);
    age.maximal = Some(65);
    SchemaSpec {
        name: "people".to_string(),
        columns: vec![column("Name", "full_name", 1), age],
        delimiter: ',',
        quotechar: '"',
    }
}

fn name_store() -> SourceDataStore {
    let mut store = SourceDataStore::new();
    store
        .insert("first_names", vec!["Alice".to_string(), "Bob".to_string()])
        .expect("insert first names");
    store
        .insert("last_names", vec!["Smith".to_string(), "Jones".to_string()])
        .expect("insert last names");
    store
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("mockset_generate_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp out dir");
    dir
}

fn engine(out_dir: PathBuf) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        out_dir,
        seed: None,
    })
}

#[test]
fn writes_header_and_requested_rows() {
    let out_dir = temp_out_dir("rows");
    let outcome = engine(out_dir.clone()).generate(&people_schema(), &name_store(), 5);

    assert!(outcome.is_success());
    assert!(outcome.file.finished);
    assert_eq!(outcome.rows_written, 5);

    let path = outcome.file.path.expect("output path");
    assert_eq!(path, out_dir.join("people_data_set.csv"));

    let contents = fs::read_to_string(&path).expect("read data set");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Name,Age");
    for line in &lines[1..] {
        let mut fields = line.split(',');
        let name = fields.next().expect("name field");
        let age = fields.next().expect("age field");
        assert_eq!(fields.next(), None);
        assert!(name.contains(' '));
        let age: i64 = age.parse().expect("decimal age");
        assert!((18..=65).contains(&age));
    }
}

#[test]
fn second_run_gets_a_disambiguated_path() {
    let out_dir = temp_out_dir("probe");
    let engine = engine(out_dir.clone());
    let schema = people_schema();
    let store = name_store();

    let first = engine.generate(&schema, &store, 2);
    let second = engine.generate(&schema, &store, 2);
    let third = engine.generate(&schema, &store, 2);

    assert_eq!(
        first.file.path.expect("first path"),
        out_dir.join("people_data_set.csv")
    );
    assert_eq!(
        second.file.path.expect("second path"),
        out_dir.join("people_data_set(1).csv")
    );
    assert_eq!(
        third.file.path.expect("third path"),
        out_dir.join("people_data_set(2).csv")
    );
}

#[test]
fn missing_source_data_cleans_up_and_still_finishes() {
    let out_dir = temp_out_dir("cleanup");
    let outcome = engine(out_dir.clone()).generate(&people_schema(), &SourceDataStore::new(), 5);

    assert!(outcome.file.finished);
    assert!(outcome.file.path.is_none());
    assert!(matches!(
        outcome.error,
        Some(GenerationError::MissingSourceData(_))
    ));

    let leftovers: Vec<_> = fs::read_dir(&out_dir)
        .expect("read out dir")
        .collect::<Result<Vec<_>, _>>()
        .expect("dir entries");
    assert!(leftovers.is_empty(), "partial file was not removed");
}

#[test]
fn unknown_type_surfaces_in_the_outcome() {
    let out_dir = temp_out_dir("unknown");
    let schema = SchemaSpec {
        name: "gadgets".to_string(),
        columns: vec![column("Id", "uuid", 1)],
        delimiter: ',',
        quotechar: '"',
    };
    let outcome = engine(out_dir).generate(&schema, &SourceDataStore::new(), 1);

    assert!(outcome.file.finished);
    assert!(outcome.file.path.is_none());
    match outcome.error {
        Some(GenerationError::UnknownType(name)) => assert_eq!(name, "uuid"),
        other => panic!("unexpected outcome error: {other:?}"),
    }
}

#[test]
fn fields_are_quoted_only_when_needed() {
    let out_dir = temp_out_dir("quoting");
    let schema = SchemaSpec {
        name: "places".to_string(),
        columns: vec![column("Where", "address", 1), column("When", "date", 2)],
        delimiter: ',',
        quotechar: '"',
    };
    let outcome = engine(out_dir).generate(&schema, &SourceDataStore::new(), 10);
    let path = outcome.file.path.expect("output path");

    let contents = fs::read_to_string(&path).expect("read data set");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "Where,When");
    for line in &lines[1..] {
        // Addresses contain the delimiter, so they arrive quoted; dates
        // never need quoting.
        assert!(line.starts_with('"'), "address not quoted: {line}");
        let date = line.rsplit(',').next().expect("date field");
        assert!(!date.contains('"'), "date should not be quoted: {line}");
    }
}

#[test]
fn custom_delimiter_and_quote_are_honored() {
    let out_dir = temp_out_dir("semicolon");
    let schema = SchemaSpec {
        name: "places".to_string(),
        columns: vec![column("Where", "address", 1)],
        delimiter: ';',
        quotechar: '\'',
    };
    let outcome = engine(out_dir).generate(&schema, &SourceDataStore::new(), 5);
    let path = outcome.file.path.expect("output path");

    let contents = fs::read_to_string(&path).expect("read data set");
    for line in contents.lines().skip(1) {
        // The address template's commas are not the delimiter here, so the
        // field needs no quoting and arrives verbatim.
        assert!(line.contains(", district "));
        assert!(!line.contains(';'));
        assert!(!line.starts_with('\''));
    }
}

#[test]
fn seeded_runs_reproduce_their_rows() {
    let out_dir_a = temp_out_dir("seed_a");
    let out_dir_b = temp_out_dir("seed_b");
    let schema = people_schema();
    let store = name_store();

    let outcome_a = GenerationEngine::new(GenerateOptions {
        out_dir: out_dir_a,
        seed: Some(99),
    })
    .generate(&schema, &store, 20);
    let outcome_b = GenerationEngine::new(GenerateOptions {
        out_dir: out_dir_b,
        seed: Some(99),
    })
    .generate(&schema, &store, 20);

    let contents_a = fs::read_to_string(outcome_a.file.path.expect("path a")).expect("read a");
    let contents_b = fs::read_to_string(outcome_b.file.path.expect("path b")).expect("read b");
    assert_eq!(contents_a, contents_b);
}
