//! Polygon input: `.csv` with `x`/`y` columns via polars, anything else as a vertex list.

use anyhow::{anyhow, Context, Result};
use nalgebra::Vector2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

use polydecomp::io::parse_vertex_list;

pub fn read_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let is_csv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        read_csv(path)
    } else {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        parse_vertex_list(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x/y columns from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
            _ => Err(anyhow!("{}: row {row} is missing x or y", path.display())),
        })
        .collect()
}
