use std::fs::File;
use std::io::{BufWriter, Write};

use rand::RngCore;

use mockset_core::{SchemaSpec, SourceDataStore};

use crate::errors::GenerationError;
use crate::registry::TypeRegistry;

/// Counters for one completed write.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteStats {
    pub rows_written: u64,
    pub bytes_written: u64,
}

/// Stream a data set into an already-opened file.
///
/// Writes the header record, then generates and writes one row at a time;
/// rows are never buffered wholesale. Fields are quoted only when they
/// contain the delimiter, the quote character, or a line break.
pub fn write_data_set(
    file: File,
    schema: &SchemaSpec,
    registry: &TypeRegistry,
    store: &SourceDataStore,
    rows_amount: u64,
    rng: &mut dyn RngCore,
) -> Result<WriteStats, GenerationError> {
    let counting = CountingWriter::new(BufWriter::new(file));
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(schema.delimiter as u8)
        .quote(schema.quotechar as u8)
        .from_writer(counting);

    let headers = schema.column_headers();
    writer.write_record(&headers)?;

    // Cells are bound after the header record, so a resolution failure
    // surfaces against a partially written file and takes the same cleanup
    // path as a mid-stream error.
    let row_generator = registry.row_generator(schema, store)?;

    let mut rows_written = 0;
    for _ in 0..rows_amount {
        let row = row_generator.generate(registry.profile(), rng);
        let record: Vec<&str> = headers
            .iter()
            .map(|name| row.get(*name).map(String::as_str).unwrap_or_default())
            .collect();
        writer.write_record(&record)?;
        rows_written += 1;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(WriteStats {
        rows_written,
        bytes_written: counting.bytes_written(),
    })
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
