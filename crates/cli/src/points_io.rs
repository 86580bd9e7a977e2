//! Point-list I/O: CSV/Parquet through polars (columns `x`, `y`), JSON as an
//! array of `[x, y]` pairs.

use anyhow::{bail, Context, Result};
use knnhull::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Parquet,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok(Format::Csv),
        Some("parquet") => Ok(Format::Parquet),
        Some("json") => Ok(Format::Json),
        _ => bail!("unsupported point file {} (expected .csv, .parquet or .json)", path.display()),
    }
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let lf = match format_of(path)? {
        Format::Json => {
            let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            return Ok(raw.into_iter().map(Point::from).collect());
        }
        Format::Csv => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Format::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("loading x/y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => out.push(Point::new(x, y)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}

pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format_of(path)? {
        Format::Json => {
            let raw: Vec<[f64; 2]> = points.iter().map(|p| p.xy()).collect();
            std::fs::write(path, serde_json::to_vec_pretty(&raw)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv => {
            let mut df = points_frame(points)?;
            let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
        }
        Format::Parquet => {
            let mut df = points_frame(points)?;
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(file).finish(&mut df)?;
        }
    }
    Ok(())
}

fn points_frame(points: &[Point]) -> Result<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x()).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y()).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}
