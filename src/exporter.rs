use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::ExportError;
use crate::models::WeatherDataset;

fn json_error(path: &Path, err: serde_json::Error) -> ExportError {
    if err.is_io() {
        ExportError::io(path, err.into())
    } else {
        ExportError::Json(err)
    }
}

/// Writes the dataset as indented JSON, replacing any existing file
pub fn export_dataset(dataset: &WeatherDataset, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, dataset).map_err(|e| json_error(path, e))?;
    writer.flush().map_err(|e| ExportError::io(path, e))?;

    tracing::info!("Exported {} cities to {}", dataset.len(), path.display());
    Ok(())
}

/// Reads a dataset previously written by [`export_dataset`]
pub fn load_dataset(path: impl AsRef<Path>) -> Result<WeatherDataset, ExportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExportError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| json_error(path, e))
}
