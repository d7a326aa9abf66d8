//! pairs_from_rig_seq - candidate image pairs for a ring camera rig
//!
//! Reads ordered frame names from image list files or a feature store,
//! pairs every frame with the next `step_size` capture indices on cameras
//! within `radius_size` of its own ring position, and writes one
//! `"<frame1> <frame2>"` line per unique unordered pair.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::io::IsTerminal;
use std::path::PathBuf;

use rig_pairs::{generate_pairs, write_pairs, NameSource, PairingConfig, PairingOverrides};

#[path = "../ui.rs"]
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "pairs_from_rig_seq",
    version,
    about = "Create image pairs from a rig capture sequence ordered by frame index"
)]
struct Args {
    /// Output file for the pair list.
    #[arg(long)]
    output: PathBuf,
    /// Image list file(s), one name per line in capture order.
    #[arg(long, value_name = "PATH")]
    image_list: Vec<PathBuf>,
    /// SQLite feature store to read image names from.
    #[arg(long, value_name = "PATH")]
    features: Option<PathBuf>,
    /// JSON pairing config file.
    #[arg(long, env = "RIG_PAIRS_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Number of cameras on the rig ring.
    #[arg(long)]
    circle_size: Option<u32>,
    /// Consecutive frame indices (anchor included) to pair with.
    #[arg(long)]
    step_size: Option<u64>,
    /// Ring neighborhood half-width.
    #[arg(long)]
    radius_size: Option<u32>,
    /// Wrap camera neighborhoods around the ring (true) or clip them (false).
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    wraparound: Option<bool>,
    /// Shorthand for `--wraparound false`.
    #[arg(long, conflicts_with = "wraparound")]
    no_wraparound: bool,
    /// UI mode for stderr progress (auto|plain|pretty)
    #[arg(long, default_value = "auto", value_name = "MODE")]
    ui: String,
}

impl Args {
    fn overrides(&self) -> PairingOverrides {
        PairingOverrides {
            ring_size: self.circle_size,
            step_size: self.step_size,
            radius: self.radius_size,
            wraparound: if self.no_wraparound {
                Some(false)
            } else {
                self.wraparound
            },
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let ui = ui::Ui::from_args(
        &args.ui,
        std::io::stderr().is_terminal(),
        std::io::stdout().is_terminal(),
    );

    let cfg = PairingConfig::load(args.config.as_deref())
        .and_then(|cfg| cfg.with_overrides(args.overrides()))
        .context("load pairing config")?;
    log::debug!("pairing config: {:?}", cfg);

    let source = NameSource::from_options(args.image_list, args.features)?;
    let names = {
        let _stage = ui.stage("Load image names");
        source.load()?
    };
    log::info!("{} image names loaded", names.len());

    let pairs = {
        let _stage = ui.stage("Generate pairs");
        generate_pairs(&names, &cfg)?
    };
    {
        let _stage = ui.stage("Write pair list");
        write_pairs(&args.output, &pairs)
            .with_context(|| format!("write pairs to {}", args.output.display()))?;
    }
    println!("{} pairs written to {}", pairs.len(), args.output.display());
    Ok(())
}
