//! Columnar-tabular codec: Parquet write/read plus the legacy CSV read path.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::sync::Arc;

use arrow::compute::concat_batches;
use arrow::csv;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;

use crate::error::{CodecError, CodecResult};
use crate::format::{ExchangeFormat, WireFormat};

fn encode_err(path: &Path, err: impl std::fmt::Display) -> CodecError {
    CodecError::Encode {
        format: ExchangeFormat::Tabular,
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn decode_err(format: WireFormat, path: &Path, err: impl std::fmt::Display) -> CodecError {
    CodecError::Decode {
        format,
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Write a tabular value to `path` as a Parquet file.
///
/// Schema, column order, and row order are preserved exactly.
pub fn write_parquet(batch: &RecordBatch, path: &Path) -> CodecResult<()> {
    let file = File::create(path)?;
    let mut writer =
        ArrowWriter::try_new(file, batch.schema(), None).map_err(|e| encode_err(path, e))?;
    writer.write(batch).map_err(|e| encode_err(path, e))?;
    writer.close().map_err(|e| encode_err(path, e))?;
    Ok(())
}

/// Read a Parquet file back into a single tabular value.
pub fn read_parquet(path: &Path) -> CodecResult<RecordBatch> {
    let file = File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| decode_err(WireFormat::Parquet, path, e))?;
    let schema = builder.schema().clone();
    let reader = builder
        .build()
        .map_err(|e| decode_err(WireFormat::Parquet, path, e))?;
    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| decode_err(WireFormat::Parquet, path, e))?;
    concat_batches(&schema, &batches).map_err(|e| decode_err(WireFormat::Parquet, path, e))
}

/// Read a legacy CSV object back into a tabular value.
///
/// Column names come from the header row; column types are inferred from
/// the data. Objects with this extension predate the Parquet writer and are
/// still read; nothing writes them anymore.
pub fn read_csv(path: &Path) -> CodecResult<RecordBatch> {
    let mut file = File::open(path)?;
    let (schema, _) = csv::reader::Format::default()
        .with_header(true)
        .infer_schema(&mut file, None)
        .map_err(|e| decode_err(WireFormat::Csv, path, e))?;
    file.seek(SeekFrom::Start(0))?;

    let reader = csv::ReaderBuilder::new(Arc::new(schema.clone()))
        .with_header(true)
        .build(file)
        .map_err(|e| decode_err(WireFormat::Csv, path, e))?;
    let batches = reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| decode_err(WireFormat::Csv, path, e))?;
    concat_batches(&Arc::new(schema), &batches).map_err(|e| decode_err(WireFormat::Csv, path, e))
}
