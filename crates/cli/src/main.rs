use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use shape_overlaps::{generate, GenParams};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod dispatch;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Generate random shapes and group them by overlap")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Generate a population and print (or write) the JSON result
    Generate(GenerateArgs),
    /// Dispatch a key=value request (e.g. Action=ShapesOverlaps Width=800 ...)
    Request {
        #[arg(required = true)]
        pairs: Vec<String>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    #[arg(long, default_value_t = 800, allow_negative_numbers = true)]
    width: i64,
    #[arg(long, default_value_t = 600, allow_negative_numbers = true)]
    height: i64,
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    radius_max: i64,
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    how_many: i64,
    #[arg(long, default_value_t = 8, allow_negative_numbers = true)]
    max_edges: i64,
    /// RNG seed; drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Write the result here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<String>,
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate(args) => run_generate(args),
        Action::Request { pairs } => run_request(pairs),
    }
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    let params = GenParams {
        width: args.width,
        height: args.height,
        radius_max: args.radius_max,
        how_many: args.how_many,
        max_edges: args.max_edges,
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(?params, seed, "generate");
    let result = generate(params, seed).context("shape generation failed")?;
    tracing::info!(
        total = result.total_count,
        groups = result.overlap_groups.len(),
        "generated"
    );
    let body = if args.pretty {
        serde_json::to_vec_pretty(&result)?
    } else {
        serde_json::to_vec(&result)?
    };

    let Some(out) = args.out else {
        println!("{}", String::from_utf8(body)?);
        return Ok(());
    };
    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, body).with_context(|| format!("writing {out}"))?;
    let payload = provenance::Payload {
        seed,
        params: serde_json::to_value(params)?,
    };
    let sidecar = provenance::write_sidecar(out_path, &payload)?;
    tracing::info!(out, sidecar = %sidecar.display(), "wrote result");
    Ok(())
}

fn run_request(pairs: Vec<String>) -> Result<()> {
    let req = dispatch::parse_pairs(&pairs)?;
    let response = dispatch::dispatch(req);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
