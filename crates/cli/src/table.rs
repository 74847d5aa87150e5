//! Tabular export of a polygon sequence (one row per polygon).

use crate::provenance::{self, Payload};
use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polygons::{Polygon, PolygonSequence};
use serde::Serialize;
use serde_json::json;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// All metrics of one polygon, flattened for JSON/table output.
#[derive(Clone, Debug, Serialize)]
pub struct PolygonRow {
    pub vertices: u64,
    pub circumradius: f64,
    pub interior_angle: f64,
    pub side_length: f64,
    pub apothem: f64,
    pub area: f64,
    pub perimeter: f64,
    pub efficiency: f64,
}

impl From<&Polygon> for PolygonRow {
    fn from(p: &Polygon) -> Self {
        Self {
            vertices: p.count_vertices() as u64,
            circumradius: p.circumradius(),
            interior_angle: p.interior_angle(),
            side_length: p.side_length(),
            apothem: p.apothem(),
            area: p.area(),
            perimeter: p.perimeter(),
            efficiency: p.efficiency(),
        }
    }
}

pub fn frame(seq: &PolygonSequence) -> PolarsResult<DataFrame> {
    let rows: Vec<PolygonRow> = seq.iter().map(|p| PolygonRow::from(&p)).collect();
    let col = |f: fn(&PolygonRow) -> f64| rows.iter().map(f).collect::<Vec<f64>>();
    df!(
        "vertices" => rows.iter().map(|r| r.vertices).collect::<Vec<u64>>(),
        "circumradius" => col(|r| r.circumradius),
        "interior_angle" => col(|r| r.interior_angle),
        "side_length" => col(|r| r.side_length),
        "apothem" => col(|r| r.apothem),
        "area" => col(|r| r.area),
        "perimeter" => col(|r| r.perimeter),
        "efficiency" => col(|r| r.efficiency)
    )
}

/// Write the sequence table to `out` (`.csv` or `.parquet`) and a provenance
/// sidecar next to it. Returns the row count and the sidecar path.
#[track_caller]
pub fn write(seq: &PolygonSequence, out: &Path) -> Result<(usize, PathBuf)> {
    let mut df = frame(seq)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let ext = out.extension().and_then(|e| e.to_str()).unwrap_or_default();
    if !matches!(ext, "csv" | "parquet") {
        bail!("unsupported table format {ext:?} (expected csv or parquet)");
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if ext == "csv" {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
    } else {
        ParquetWriter::new(file).finish(&mut df)?;
    }

    let payload = Payload::new(
        seq,
        json!({
            "max_vertices": seq.max_vertices(),
            "circumradius": seq.circumradius(),
            "format": ext,
        }),
    );
    let sidecar = provenance::write_sidecar(out, payload)?;
    Ok((df.height(), sidecar))
}
