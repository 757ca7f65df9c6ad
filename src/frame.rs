//! Frame driver: one image in, one packed SVG out.
//!
//! Applies the coverage policy before packing. Frames that are mostly ink are reversed, so
//! that circles always fill the smaller of the two regions, and the number of circles scales
//! with the area that is being filled.

use {
  crate::{
    circles::{Circles, PackReport},
    config::FillConfig,
    error::Result,
    geometry::Circle,
    grid::OccupancyGrid,
    loader,
    palette::Palette,
    profile,
    solver::FillSession
  },
  rayon::prelude::*,
  std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant}
  }
};

/// Foreground share of a frame, in whole percent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Coverage {
  /// As measured on the loaded image.
  pub measured: u32,
  /// Share of the region that is actually filled.
  pub effective: u32,
  pub reversed: bool
}

impl Coverage {
  pub fn measure(grid: &OccupancyGrid, reverse_threshold: u32) -> Self {
    // ties go to the even percentage
    let measured = grid.coverage().round_ties_even() as u32;
    if measured > reverse_threshold && measured != 100 {
      Self { measured, effective: 100 - measured, reversed: true }
    } else {
      Self { measured, effective: measured, reversed: false }
    }
  }

  /// Number of circles to request.
  pub fn circle_budget(&self, circles_per_percent: f64) -> usize {
    // absorb the representation error of ratios such as 3000 / 42
    (self.effective as f64 * circles_per_percent + 1e-9) as usize
  }
}

#[derive(Debug, Clone)]
pub struct Filled {
  pub width: u32,
  pub height: u32,
  pub coverage: Coverage,
  pub report: PackReport,
  pub circles: Vec<Circle>,
  /// Palette the circle colours refer to, complemented for reversed frames.
  pub palette: Palette
}

impl Filled {
  /// Paper colour painted behind reversed frames.
  pub fn background(&self) -> Option<String> {
    self.coverage.reversed
      .then(|| self.palette.complement().colour(0).map(str::to_owned))
      .flatten()
  }

  #[cfg(feature = "drawing")]
  #[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
  pub fn make_svg(&self, background: bool) -> svg::Document {
    let background = background.then(|| self.background()).flatten();
    crate::drawing::make_svg(
      &self.circles,
      &self.palette,
      euclid::Size2D::<_, crate::geometry::PixelSpace>::new(self.width, self.height),
      background.as_deref()
    )
  }
}

/// Pack an already loaded grid.
pub fn fill_grid(grid: OccupancyGrid, config: &FillConfig, seed: u64) -> Result<Filled> {
  config.validate()?;
  let coverage = Coverage::measure(&grid, config.reverse_threshold);
  let (width, height) = grid.size().to_tuple();

  let mut session = FillSession::new(grid, config.palette())
    .with_guard(config.guard)
    .with_fit_test(config.fit)
    .with_seed(seed);
  if coverage.reversed {
    session.reverse();
  }
  log::info!(
    "filling of {}%{}", coverage.effective,
    if coverage.reversed { " (reversed)" } else { "" }
  );

  let n = config.n.unwrap_or_else(|| coverage.circle_budget(config.circles_per_percent));
  let mut circles = Circles::for_session(&session, config.rho_min, config.rho_max, n)?
    .with_max_consecutive_failures(config.max_consecutive_failures);
  let report = profile!("pack", circles.make_circles(&mut session, config.colour_subset.as_deref())?);
  log::debug!(
    "placed {} of {} circles, guard reached {} times",
    report.placed, report.requested, report.guard_exhausted
  );

  let (_, palette) = session.into_parts();
  Ok(Filled { width, height, coverage, report, circles: circles.into_vec(), palette })
}

#[derive(Debug, Clone)]
pub struct FrameReport {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub filled: Filled
}

/// Load, pack and, when `output` is given, write one frame.
pub fn fill_frame(
  input: impl AsRef<Path>,
  output: Option<&Path>,
  config: &FillConfig,
  seed: u64
) -> Result<FrameReport> {
  let input = input.as_ref();
  log::info!("{}", input.display());
  let grid = loader::load(input)?;
  let filled = fill_grid(grid, config, seed)?;
  let output = match output {
    Some(output) => write_svg(output, &filled, config)?,
    None => None
  };
  Ok(FrameReport { input: input.to_owned(), output, filled })
}

#[cfg(feature = "drawing")]
fn write_svg(output: &Path, filled: &Filled, config: &FillConfig) -> Result<Option<PathBuf>> {
  crate::drawing::save(output, &filled.make_svg(config.background))?;
  Ok(Some(output.to_owned()))
}

#[cfg(not(feature = "drawing"))]
fn write_svg(output: &Path, _: &Filled, _: &FillConfig) -> Result<Option<PathBuf>> {
  log::warn!("built without the `drawing` feature, not writing {}", output.display());
  Ok(None)
}

/// `<out_dir>/<input file stem>.svg`
pub fn output_path(input: &Path, out_dir: &Path) -> PathBuf {
  let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_os_string();
  name.push(".svg");
  out_dir.join(name)
}

/// Pack frames in parallel, one independent session per frame. Results come back in input
/// order; a failing frame does not affect the others. Frame `i` is seeded with
/// `config.seed + i`.
pub fn fill_frames(
  inputs: &[PathBuf],
  out_dir: Option<&Path>,
  config: &FillConfig
) -> Vec<Result<FrameReport>> {
  let progress = Progress::new(inputs.len());
  inputs.par_iter()
    .enumerate()
    .map(|(i, input)| {
      let output = out_dir.map(|dir| output_path(input, dir));
      let ret = fill_frame(input, output.as_deref(), config, config.seed.wrapping_add(i as u64));
      let eta = progress.finish_one();
      log::info!(
        "{}/{} frames, average {:.2}s per frame, estimated {:.0}s remaining",
        eta.done, eta.total, eta.per_frame.as_secs_f64(), eta.remaining.as_secs_f64()
      );
      ret
    })
    .collect()
}

/// Finished frame counter of a batch, shared between worker threads.
pub struct Progress {
  done: AtomicUsize,
  total: usize,
  t0: Instant
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Eta {
  pub done: usize,
  pub total: usize,
  /// Wall time per finished frame.
  pub per_frame: Duration,
  pub remaining: Duration
}

impl Progress {
  pub fn new(total: usize) -> Self {
    Self { done: AtomicUsize::new(0), total, t0: Instant::now() }
  }

  pub fn finish_one(&self) -> Eta {
    let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
    Eta::estimate(done, self.total, self.t0.elapsed())
  }
}

impl Eta {
  pub fn estimate(done: usize, total: usize, elapsed: Duration) -> Self {
    let per_frame = elapsed.checked_div(done.max(1) as u32).unwrap_or_default();
    let remaining = per_frame.mul_f64(total.saturating_sub(done) as f64);
    Self { done, total, per_frame, remaining }
  }
}
