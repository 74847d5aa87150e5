use anyhow::Result;
use clap::{Parser, Subcommand};
use polygons::{limit_efficiency, Polygon, PolygonSequence};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Regular polygon sequences: demo output, tables, reports")]
struct Cmd {
    /// Largest vertex count in the sequence (at least 3)
    #[arg(long, short = 'm', default_value_t = 10)]
    max_vertices: usize,

    /// Circumradius shared by every polygon
    #[arg(long, short = 'r', default_value_t = 5.0)]
    circumradius: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print indexing, slicing and efficiency examples
    Demo,
    /// Write one row per polygon to a CSV or Parquet file plus a provenance sidecar
    Table {
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a JSON summary of the sequence
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let seq = PolygonSequence::new(cmd.max_vertices, cmd.circumradius)?;
    match cmd.action {
        Action::Demo => demo(&seq),
        Action::Table { out } => {
            tracing::info!(%seq, out = %out.display(), "table");
            let (rows, sidecar) = table::write(&seq, &out)?;
            tracing::info!(rows, sidecar = %sidecar.display(), "table_written");
            Ok(())
        }
        Action::Report => report(&seq),
    }
}

fn demo(seq: &PolygonSequence) -> Result<()> {
    tracing::info!(%seq, "demo");
    println!("{seq}");
    println!("Number of polygons: {}", seq.len());
    println!("First polygon: {}", seq.get(0)?);
    println!("Last polygon: {}", seq.get(-1)?);
    let slice = seq.slice(Some(2), Some(5), None)?;
    let shown: Vec<String> = slice.iter().map(Polygon::to_string).collect();
    println!("Slice [2:5]: [{}]", shown.join(", "));

    if let Ok(hexagon) = seq.get(3) {
        println!(
            "Hexagon - sides: {}, area: {:.2}, perimeter: {:.2}",
            hexagon.count_edges(),
            hexagon.area(),
            hexagon.perimeter()
        );
    }

    let best = seq.most_efficient_polygon()?;
    println!(
        "Most efficient polygon: {}-gon with efficiency {:.4}",
        best.count_vertices(),
        best.efficiency()
    );
    Ok(())
}

#[derive(Serialize)]
struct Report {
    sequence: String,
    max_vertices: usize,
    circumradius: f64,
    len: usize,
    most_efficient: table::PolygonRow,
    limit_efficiency: f64,
}

fn report(seq: &PolygonSequence) -> Result<()> {
    tracing::info!(%seq, "report");
    let best = seq.most_efficient_polygon()?;
    let obj = Report {
        sequence: seq.to_string(),
        max_vertices: seq.max_vertices(),
        circumradius: seq.circumradius(),
        len: seq.len(),
        most_efficient: table::PolygonRow::from(&best),
        limit_efficiency: limit_efficiency(seq.circumradius()),
    };
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
