//! Tab-separated output of sweep rows

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TakehomeError};

/// Headerless TSV writer, one newline-terminated line per record
pub struct RowWriter<W: Write> {
    inner: csv::Writer<W>,
}

fn builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

impl<W: Write> RowWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: builder().from_writer(writer),
        }
    }

    pub fn write_row<T: Serialize>(&mut self, row: &T) -> Result<()> {
        self.inner.serialize(row)?;
        Ok(())
    }

    /// Flush and hand back the underlying writer
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| TakehomeError::Io(e.into_error()))
    }
}

impl RowWriter<File> {
    /// Create or truncate the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            inner: builder().from_path(path)?,
        })
    }
}

/// Numbers written in their shortest decimal form, whole values without a
/// trailing `.0`
pub(crate) mod plain_number {
    use serde::Serializer;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }
}

/// Like [`plain_number`], with `None` as an empty field
pub(crate) mod plain_number_opt {
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }
}
