//! Re-render black on white frames as circle mosaics.
//!
//! ```text
//! shape-fill "frames/" --out-dir svg --rho-max 0.01 --guard 1000
//! ```

use {
  anyhow::{bail, Context, Result},
  clap::{ArgAction, Parser, ValueHint},
  humansize::{file_size_opts, FileSize},
  shape_fill::{
    config::FillConfig,
    frame,
    palette::Palette,
    solver::FitTest,
    util
  },
  std::path::PathBuf
};

#[derive(Parser, Debug)]
#[command(name = "shape-fill", version, about = "Fill the dark region of images with circles")]
struct Cli {
  /// Image files, or folders searched recursively for png/jpg images
  #[arg(required = true, value_hint = ValueHint::AnyPath)]
  inputs: Vec<PathBuf>,

  /// Folder receiving one svg per frame
  #[arg(short = 'o', long = "out-dir", default_value = "svg", value_hint = ValueHint::DirPath)]
  out_dir: PathBuf,

  /// JSON fill configuration; flags below take precedence
  #[arg(short = 'c', long = "config", value_hint = ValueHint::FilePath)]
  config: Option<PathBuf>,

  /// Smallest radius, proportion of the smaller image side
  #[arg(long = "rho-min")]
  rho_min: Option<f64>,
  /// Largest radius, proportion of the smaller image side
  #[arg(long = "rho-max")]
  rho_max: Option<f64>,
  /// Circles per frame, instead of deriving it from the coverage
  #[arg(short = 'n')]
  n: Option<usize>,
  /// Random candidates per circle
  #[arg(long = "guard")]
  guard: Option<u32>,
  /// Fill colours, e.g. --colours '#000000,#993300'
  #[arg(long = "colours", value_delimiter = ',')]
  colours: Option<Vec<String>>,
  #[arg(long = "seed")]
  seed: Option<u64>,
  /// Require the whole disk to be foreground, not only its four axis points
  #[arg(long = "strict-fit", action = ArgAction::SetTrue)]
  strict_fit: bool,
  /// Number of threads
  #[arg(long = "threads")]
  threads: Option<usize>,
}

fn build_config(cli: &Cli) -> Result<FillConfig> {
  let mut config = match &cli.config {
    Some(path) => FillConfig::from_file(path)
      .with_context(|| format!("reading {}", path.display()))?,
    None => FillConfig::default()
  };
  if let Some(v) = cli.rho_min { config.rho_min = v; }
  if let Some(v) = cli.rho_max { config.rho_max = v; }
  if let Some(v) = cli.n { config.n = Some(v); }
  if let Some(v) = cli.guard { config.guard = v; }
  if let Some(v) = &cli.colours { config.colours = Some(Palette::new(v.clone())); }
  if let Some(v) = cli.seed { config.seed = v; }
  if cli.strict_fit { config.fit = FitTest::FullDisk; }
  config.validate()?;
  Ok(config)
}

fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
  inputs.iter()
    .flat_map(|path| -> Box<dyn Iterator<Item = PathBuf>> {
      if path.is_dir() {
        Box::new(util::find_files(path.clone(), util::image_filter()))
      } else {
        Box::new(std::iter::once(path.clone()))
      }
    })
    .collect()
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let cli = Cli::parse();
  let config = build_config(&cli)?;

  if let Some(threads) = cli.threads {
    rayon::ThreadPoolBuilder::new()
      .num_threads(threads)
      .build_global()?;
  }

  let inputs = collect_inputs(&cli.inputs);
  if inputs.is_empty() {
    bail!("no images found in {:?}", cli.inputs);
  }
  log::info!("{} frames", inputs.len());

  let t0 = std::time::Instant::now();
  let results = frame::fill_frames(&inputs, Some(cli.out_dir.as_path()), &config);
  let elapsed = t0.elapsed();

  let mut failed = 0;
  for (input, result) in inputs.iter().zip(&results) {
    match result {
      Ok(report) => {
        let size = report.output.as_ref()
          .and_then(|path| std::fs::metadata(path).ok())
          .and_then(|meta| meta.len().file_size(file_size_opts::CONVENTIONAL).ok())
          .unwrap_or_else(|| "-".into());
        println!(
          "{} -> {} circles, {}%{}, {}",
          input.display(),
          report.filled.circles.len(),
          report.filled.coverage.effective,
          if report.filled.coverage.reversed { " reversed" } else { "" },
          size
        );
      }
      Err(err) => {
        failed += 1;
        log::error!("{}: {}", input.display(), err);
      }
    }
  }

  log::info!(
    "{} frames in {:.1}s, {:.2}s per frame, {} failed",
    results.len(),
    elapsed.as_secs_f64(),
    elapsed.as_secs_f64() / results.len() as f64,
    failed
  );
  if failed == results.len() {
    bail!("every frame failed");
  }
  Ok(())
}
