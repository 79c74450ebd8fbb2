use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use rand::SeedableRng as _;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "sortreel", version)]
struct Cli {
    /// Sorting algorithm to animate.
    #[arg(long, value_enum, default_value_t = AlgorithmChoice::Lomuto)]
    algorithm: AlgorithmChoice,

    /// Playback repeat count; 0 loops forever. Unparsable values fall back
    /// to the default.
    #[arg(long = "loop")]
    loop_count: Option<String>,

    /// Per-frame delay in hundredths of a second. Unparsable values fall
    /// back to the default.
    #[arg(long)]
    delay: Option<String>,

    /// Seed for the shuffled input; random when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Read the run description from a JSON file instead of the flags
    /// above.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgorithmChoice {
    Insertion,
    Lomuto,
    Hoare,
    Median,
    MedianInsertion,
    ThreeWay,
}

impl From<AlgorithmChoice> for sortreel::Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Insertion => sortreel::Algorithm::Insertion,
            AlgorithmChoice::Lomuto => sortreel::Algorithm::Lomuto,
            AlgorithmChoice::Hoare => sortreel::Algorithm::Hoare,
            AlgorithmChoice::Median => sortreel::Algorithm::Median,
            AlgorithmChoice::MedianInsertion => sortreel::Algorithm::MedianInsertion,
            AlgorithmChoice::ThreeWay => sortreel::Algorithm::ThreeWay,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let spec = match &cli.in_path {
        Some(path) => read_spec_json(path)?,
        None => sortreel::RunSpec {
            algorithm: cli.algorithm.into(),
            loop_count: cli.loop_count.clone(),
            delay: cli.delay.clone(),
            seed: cli.seed,
        },
    };

    let mut rng = match spec.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let array = sortreel::generate(&mut rng, sortreel::GRID_CELLS);
    let mut stepper = spec.algorithm.stepper();

    let opts = sortreel::AnimationOpts {
        encode: spec.encode_config(),
        ..sortreel::AnimationOpts::default()
    };

    if let Some(parent) = cli.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let file = File::create(&cli.out)
        .with_context(|| format!("create output gif '{}'", cli.out.display()))?;
    let frames = sortreel::run_animation(array, stepper.as_mut(), &opts, BufWriter::new(file))?;

    eprintln!("wrote {} ({frames} frames)", cli.out.display());
    Ok(())
}

fn read_spec_json(path: &Path) -> anyhow::Result<sortreel::RunSpec> {
    let f = File::open(path).with_context(|| format!("open run spec '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: sortreel::RunSpec =
        serde_json::from_reader(r).with_context(|| "parse run spec JSON")?;
    Ok(spec)
}
