use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use knnhull::api::{
    bounding_box, concave_hull_par, concave_hull_with, convex_hull, draw_cloud, polygon_area,
    CloudCfg, HullCfg, ReplayToken, Shape, Tolerance,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod provenance;

use points_io::{read_points, write_points};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "k-nearest-neighbour concave hulls for 2D point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the concave hull of a point file and write it as JSON
    Hull(HullArgs),
    /// Write a seeded point cloud (.csv, .parquet or .json)
    Sample(SampleArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct HullArgs {
    /// Points (.csv/.parquet with x,y columns, or .json array of [x, y])
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Initial neighbourhood size
    #[arg(long, default_value_t = 3)]
    k: usize,
    /// Give up after the first k instead of widening
    #[arg(long)]
    no_iterate: bool,
    /// Upper bound on k while widening
    #[arg(long)]
    max_k: Option<usize>,
    /// Try all k concurrently (same result, more work)
    #[arg(long)]
    parallel: bool,
    /// Absolute comparison tolerance (defaults to f64 machine epsilon)
    #[arg(long)]
    eps: Option<f64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeArg {
    Disc,
    Ell,
}

#[derive(Args, Debug)]
struct SampleArgs {
    #[arg(long, value_enum, default_value_t = ShapeArg::Ell)]
    shape: ShapeArg,
    #[arg(long, default_value_t = 200)]
    n: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Debug, Serialize)]
struct HullOut {
    k: usize,
    attempts: usize,
    input_points: usize,
    vertices: Vec<[f64; 2]>,
    ids: Vec<u64>,
    area: f64,
    convex_area: f64,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull(args) => hull(&args).map(|_| ()),
        Action::Sample(args) => sample(&args),
        Action::Report => report(),
    }
}

fn hull(args: &HullArgs) -> Result<HullOut> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), k = args.k, "hull");
    let points = read_points(&args.input)?;
    if let Some((lo, hi)) = bounding_box(&points) {
        tracing::info!(n = points.len(), min = ?(lo.x, lo.y), max = ?(hi.x, hi.y), "input_points");
    }
    let cfg = HullCfg {
        start_k: args.k,
        iterate: !args.no_iterate,
        max_k: args.max_k,
        tol: args.eps.map_or_else(Tolerance::default, Tolerance::new),
        ..HullCfg::default()
    };
    let found = if args.parallel {
        concave_hull_par(&points, &cfg)
    } else {
        concave_hull_with(&points, &cfg)
    };
    let Some(result) = found else {
        bail!(
            "no valid hull for {} points (start k = {}, iterate = {})",
            points.len(),
            args.k,
            cfg.iterate
        );
    };
    let out = HullOut {
        k: result.k,
        attempts: result.attempts,
        input_points: points.len(),
        vertices: result.hull.iter().map(|p| p.xy()).collect(),
        ids: result.hull.iter().map(|p| p.id).collect(),
        area: polygon_area(&result.hull),
        convex_area: polygon_area(&convex_hull(&points)),
    };
    tracing::info!(
        k = out.k,
        attempts = out.attempts,
        vertices = out.vertices.len(),
        area = out.area,
        convex_area = out.convex_area,
        "hull_done"
    );

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&args.out, serde_json::to_vec_pretty(&out)?)?;
    let payload = Payload::new(
        "hull",
        json!({
            "start_k": args.k,
            "iterate": cfg.iterate,
            "max_k": args.max_k,
            "parallel": args.parallel,
            "eps": cfg.tol.eps,
        }),
    )
    .with_input(&args.input);
    write_sidecar(&args.out, payload)?;
    Ok(out)
}

fn sample(args: &SampleArgs) -> Result<()> {
    tracing::info!(shape = ?args.shape, n = args.n, seed = args.seed, "sample");
    let shape = match args.shape {
        ShapeArg::Disc => Shape::Disc { radius: 1.0 },
        ShapeArg::Ell => Shape::Ell {
            arm: 6.0,
            width: 2.0,
        },
    };
    let cfg = CloudCfg {
        shape,
        count: args.n,
        ..CloudCfg::default()
    };
    let points = draw_cloud(
        cfg,
        ReplayToken {
            seed: args.seed,
            index: args.index,
        },
    );
    write_points(&args.out, &points)?;
    let payload = Payload::new(
        "sample",
        json!({
            "shape": format!("{:?}", args.shape),
            "n": args.n,
            "seed": args.seed,
            "index": args.index,
        }),
    );
    write_sidecar(&args.out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "knnhull_version": knnhull::VERSION,
        "defaults": {
            "start_k": HullCfg::default().start_k,
            "eps": Tolerance::default().eps,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
