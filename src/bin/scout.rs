//! xeric-scout binary
//!
//! Runs one reconstruction session over a captured scene snapshot and
//! prints the scout report.
//!
//! ## Configuration (env / TOML via `config` crate)
//!
//! | Key                           | Default | Description                     |
//! |-------------------------------|---------|---------------------------------|
//! | `SCOUT_WHITELISTED_ROOMS`     | ``      | Comma-separated room names      |
//! | `SCOUT_BLACKLISTED_ROOMS`     | ``      | Comma-separated room names      |
//! | `SCOUT_WHITELISTED_ROTATIONS` | ``      | `[boss, boss]` groups           |
//! | `SCOUT_WHITELISTED_LAYOUTS`   | ``      | Comma-separated layout codes    |
//! | `SCOUT_LAYOUT_MESSAGE`        | `true`  | Announce the matched layout     |

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use xeric_scout::{snapshot, ScoutConfig, ScoutSession};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "xeric-scout", about = "Raid floor-plan scouter", version)]
struct Args {
    /// Captured scene snapshot (JSON)
    snapshot: PathBuf,

    /// Optional TOML config file (env vars override it)
    #[arg(long, env = "SCOUT_CONFIG")]
    config: Option<PathBuf>,

    /// Host "in raid" signal for this observation
    #[arg(long, env = "SCOUT_IN_RAID", default_value_t = true)]
    in_raid: bool,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    // Initialise logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("xeric_scout=debug".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let snap = snapshot::load_snapshot(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;
    let scene = snap.to_scene();

    let mut session = ScoutSession::new(config);
    session.observe(&scene, args.in_raid);

    match session.report() {
        Some(report) if args.json => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(report) => {
            println!("state:    {:?}", report.state);
            println!("code:     {}", report.layout_code);
            if let Some(layout) = session.layout_announcement() {
                println!("layout:   {layout}");
            }
            println!("rooms:    {}", report.rooms);
            println!("rotation: {}", report.rotation);
            println!("matches:  {}", report.rotation_matches);
        }
        None => println!("no raid present in snapshot"),
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<ScoutConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = &args.config {
        builder = builder.add_source(config::File::from(path.as_path()));
    }
    builder = builder.add_source(config::Environment::with_prefix("SCOUT"));
    builder
        .build()
        .context("loading configuration")?
        .try_deserialize()
        .context("parsing configuration")
}
