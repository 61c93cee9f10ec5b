use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::panic::Location;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use polydecomp::io::{edge_records, write_edge_records, write_vertex_list};
use polydecomp::rand::{draw_star_polygon, ReplayToken, StarCfg};
use polydecomp::{decompose, DecompCfg, MergeStrategy, PartitionCfg, Polygon, PolygonStore};

mod input;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polydecomp")]
#[command(about = "Convex decomposition of simple polygons")]
struct Cmd {
    /// Maximum tracing level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Partition a polygon, merge the pieces, and write both edge listings
    Decompose {
        /// Vertex list, or `.csv` with `x` and `y` columns
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        #[arg(long, value_enum, default_value_t = MergeArg::SinglePass)]
        merge: MergeArg,
        /// Anchor advances without a convex piece before the partitioner gives up
        #[arg(long)]
        stall_limit: Option<usize>,
    },
    /// Write a random star-shaped polygon as a vertex list
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 16)]
        vertices: usize,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
enum MergeArg {
    SinglePass,
    FixedPoint,
}

impl From<MergeArg> for MergeStrategy {
    fn from(m: MergeArg) -> Self {
        match m {
            MergeArg::SinglePass => MergeStrategy::SinglePass,
            MergeArg::FixedPoint => MergeStrategy::FixedPoint,
        }
    }
}

/// Parameters and counts recorded in every `decompose` sidecar.
#[derive(Serialize)]
struct DecomposeParams {
    input: PathBuf,
    merge: MergeArg,
    stall_limit: Option<usize>,
    vertices: usize,
    reversed: bool,
    raw_pieces: usize,
    merged_pieces: usize,
    accepted: usize,
    rejected: usize,
    stalled: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log)
        .init();
    match cmd.action {
        Action::Decompose {
            input,
            out_dir,
            merge,
            stall_limit,
        } => run_decompose(&input, &out_dir, merge, stall_limit),
        Action::Sample {
            seed,
            index,
            vertices,
            out,
        } => sample(seed, index, vertices, &out),
        Action::Report => report(),
    }
}

fn run_decompose(
    input: &Path,
    out_dir: &Path,
    merge: MergeArg,
    stall_limit: Option<usize>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out_dir = %out_dir.display(), ?merge, "decompose");
    let points = input::read_points(input)?;
    let store = PolygonStore::from_points(&points)
        .with_context(|| format!("validating polygon from {}", input.display()))?;
    let cfg = DecompCfg {
        partition: PartitionCfg { stall_limit },
        merge: merge.into(),
    };
    let d = decompose(&store, cfg)?;
    if d.stalled {
        tracing::warn!("partition stalled; last piece may be non-convex");
    }
    tracing::info!(
        vertices = store.len(),
        raw = d.raw.len(),
        merged = d.merged.len(),
        accepted = d.accepted,
        rejected = d.rejected,
        "pieces"
    );

    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;
    let params = DecomposeParams {
        input: input.to_path_buf(),
        merge,
        stall_limit,
        vertices: store.len(),
        reversed: store.was_reversed(),
        raw_pieces: d.raw.len(),
        merged_pieces: d.merged.len(),
        accepted: d.accepted,
        rejected: d.rejected,
        stalled: d.stalled,
    };
    let payload = Payload::new("decompose", serde_json::to_value(&params)?);
    for (name, pieces) in [("partition.txt", &d.raw), ("merged.txt", &d.merged)] {
        let path = out_dir.join(name);
        write_listing(&path, &store, pieces)?;
        write_sidecar(&path, &payload)?;
    }
    Ok(())
}

fn write_listing(path: &Path, store: &PolygonStore, pieces: &[Polygon]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_edge_records(BufWriter::new(file), &edge_records(store, pieces))
        .with_context(|| format!("writing {}", path.display()))
}

fn sample(seed: u64, index: u64, vertices: usize, out: &Path) -> Result<()> {
    tracing::info!(seed, index, vertices, out = %out.display(), "sample");
    let cfg = StarCfg {
        vertices,
        ..StarCfg::default()
    };
    let points = draw_star_polygon(cfg, ReplayToken { seed, index });
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_vertex_list(BufWriter::new(file), &points)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        "sample",
        serde_json::json!({
            "seed": seed,
            "index": index,
            "vertices": points.len(),
            "angle_jitter_frac": cfg.angle_jitter_frac,
            "r_min": cfg.r_min,
            "r_max": cfg.r_max
        }),
    );
    write_sidecar(out, &payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let doc = Payload::new("report", serde_json::json!({})).to_doc(&[], Location::caller());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
