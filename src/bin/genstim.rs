//! Command-line driver that writes adapt/test stimulus file trees.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rc_stimuli::{BatchConfig, Lexicon, RenderPolicy, batch};

#[derive(Parser, Debug)]
#[command(version, about = "Generate relative-clause stimulus lists")]
struct Args {
    /// Seed for the random stream; identical seeds reproduce identical
    /// file trees.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Lexicon JSON file; the built-in English lexicon when omitted.
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Output directory.
    #[arg(long, default_value = "stimuli")]
    out: PathBuf,

    /// How many lists to generate, named 1 through N.
    #[arg(long, default_value_t = 10)]
    lists: usize,

    /// Adapt-set sizes; one adapt/test tree is produced per size.
    #[arg(long = "adapt", default_values_t = vec![20, 10])]
    adapt_sizes: Vec<usize>,

    /// Test-set size, shared by every tree.
    #[arg(long, default_value_t = 50)]
    test_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let lexicon = match &args.lexicon {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Lexicon::from_json(&text).with_context(|| format!("loading {}", path.display()))?
        }
        None => Lexicon::builtin(),
    };

    let config = BatchConfig {
        out_dir: args.out,
        list_names: (1..=args.lists).map(|i| i.to_string()).collect(),
        sizes: args
            .adapt_sizes
            .iter()
            .map(|&n_adapt| (n_adapt, args.test_size))
            .collect(),
        policy: RenderPolicy::default(),
    };
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    batch::run(&lexicon, &config, &mut rng)?;
    Ok(())
}
