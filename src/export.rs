// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::catalog::CurrencyCatalog;
use anyhow::Result;
use chrono::Local;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the catalog as `Code,Name` rows
pub fn write_csv<W: Write>(catalog: &CurrencyCatalog, writer: W) -> Result<()> {
    let mut writer = Writer::from_writer(writer);
    writer.write_record(["Code", "Name"])?;
    for (code, name) in catalog.iter() {
        writer.write_record([code, name])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the catalog as a pretty-printed JSON array of `{code, name}` objects
pub fn write_json<W: Write>(catalog: &CurrencyCatalog, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &catalog.to_currencies())?;
    Ok(())
}

/// Export the catalog into `output_dir` under a timestamped file name and return its path
pub fn export_catalog(
    catalog: &CurrencyCatalog,
    format: ExportFormat,
    output_dir: &Path,
) -> Result<PathBuf> {
    // Create output directory if it doesn't exist
    std::fs::create_dir_all(output_dir)?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("currencies_{}.{}", timestamp, format.extension()));
    let file = File::create(&path)?;

    match format {
        ExportFormat::Csv => write_csv(catalog, file)?,
        ExportFormat::Json => write_json(catalog, file)?,
    }

    tracing::info!("exported {} currencies to {}", catalog.len(), path.display());
    Ok(path)
}
