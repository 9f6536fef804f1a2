//! Sway CLI
//!
//! Sample step-response curves and play motion scenes without a renderer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use sway_animation::Curve;
use tracing_subscriber::EnvFilter;

mod config;
mod playback;

use config::SceneConfig;

#[derive(Parser)]
#[command(name = "sway")]
#[command(about = "Step-response motion curves", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample a single curve
    Curve {
        /// Total displacement the curve converges to
        #[arg(long)]
        gain: f32,

        /// Time in seconds after which the curve counts as settled
        #[arg(long)]
        settling: f32,

        /// Bounce ratio in (0, 1]; omit for a smooth curve
        #[arg(long)]
        overshoot: Option<f32>,

        /// Samples per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// End of the sampling window in seconds (defaults to the settling time)
        #[arg(long)]
        until: Option<f32>,

        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },

    /// Play a scene file and print the node state per frame
    Run {
        /// Scene file, or a directory containing sway.toml
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Print JSON instead of CSV
        #[arg(long)]
        json: bool,
    },

    /// Write an example sway.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Scene name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,

        /// Overwrite an existing sway.toml
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Curve {
            gain,
            settling,
            overshoot,
            fps,
            until,
            json,
        } => cmd_curve(gain, settling, overshoot, fps, until, json),
        Commands::Run { path, json } => cmd_run(path, json),
        Commands::Init { path, name, force } => cmd_init(path, name, force),
    }
}

fn cmd_curve(
    gain: f32,
    settling: f32,
    overshoot: Option<f32>,
    fps: u32,
    until: Option<f32>,
    json: bool,
) -> Result<()> {
    let mut curve = Curve::with_overshoot(gain, overshoot.unwrap_or(0.0), settling)
        .context("Invalid curve parameters")?;

    tracing::info!(profile = ?curve.config().profile(), "sampling curve");

    let samples = playback::sample_curve(&mut curve, fps, until.unwrap_or(settling))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
    } else {
        println!("time,value,delta");
        for s in &samples {
            println!("{:.4},{:.6},{:.6}", s.time, s.value, s.delta);
        }
    }

    Ok(())
}

fn cmd_run(path: PathBuf, json: bool) -> Result<()> {
    let scene = SceneConfig::load_from_dir(&path)?;
    let frames = playback::play(&scene)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
    } else {
        println!("frame,time,x,y,scale_x,scale_y,rotation,font_size");
        for f in &frames {
            let n = &f.node;
            println!(
                "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
                f.frame,
                f.time,
                n.position.x,
                n.position.y,
                n.scale.x,
                n.scale.y,
                n.rotation,
                n.font_size
            );
        }
    }

    Ok(())
}

fn cmd_init(path: PathBuf, name: Option<String>, force: bool) -> Result<()> {
    let target = path.join("sway.toml");
    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            target.display()
        );
    }

    let name = name.unwrap_or_else(|| {
        path.canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| "sway-scene".to_string())
    });

    fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    fs::write(&target, SceneConfig::example(&name).to_toml()?)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    tracing::info!("Created {}", target.display());
    Ok(())
}
