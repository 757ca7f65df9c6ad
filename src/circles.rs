//! Circle collection: decides which radii to request and keeps the placed circles.

use {
  crate::{
    error::{Error, PlaceError, Result},
    geometry::Circle,
    solver::{CircleSink, FillSession}
  },
  rand::Rng
};

#[derive(Debug, Clone)]
pub struct Circles {
  pub width: u32,
  pub height: u32,
  /// Radii are drawn from `[rmin, rmax)`.
  pub rmin: f64,
  pub rmax: f64,
  /// Number of circles to request.
  pub n: usize,
  /// Stop after this many guard exhaustions in a row. `None` tries every radius.
  pub max_consecutive_failures: Option<usize>,
  circles: Vec<Circle>
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
  NoSpace,
  TooManyFailures,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PackReport {
  pub requested: usize,
  pub placed: usize,
  pub guard_exhausted: usize,
  /// Why packing ended before every radius was tried.
  pub stopped: Option<StopReason>
}

impl Circles {
  /// `rho_min` and `rho_max` are proportions of `dim`, usually the smaller image side.
  pub fn new(width: u32, height: u32, dim: u32, rho_min: f64, rho_max: f64, n: usize) -> Result<Self> {
    if !(rho_min > 0.0 && rho_min <= rho_max) {
      return Err(Error::Config(format!(
        "expected 0 < rho_min <= rho_max, got rho_min = {}, rho_max = {}", rho_min, rho_max
      )));
    }
    Ok(Self {
      width,
      height,
      rmin: rho_min * dim as f64,
      rmax: rho_max * dim as f64,
      n,
      max_consecutive_failures: None,
      circles: vec![]
    })
  }

  /// Sized after the session's grid.
  pub fn for_session(session: &FillSession, rho_min: f64, rho_max: f64, n: usize) -> Result<Self> {
    let grid = session.grid();
    Self::new(grid.width(), grid.height(), grid.min_dimension(), rho_min, rho_max, n)
  }

  pub fn with_max_consecutive_failures(mut self, limit: Option<usize>) -> Self {
    self.max_consecutive_failures = limit;
    self
  }

  /// `n` radii, largest first. The product of two uniform samples favours small circles.
  pub fn radii(&self, rng: &mut impl Rng) -> Vec<f64> {
    let mut radii = (0..self.n)
      .map(|_| self.rmin + (self.rmax - self.rmin) * rng.gen::<f64>() * rng.gen::<f64>())
      .collect::<Vec<_>>();
    radii.sort_by(|a, b| b.total_cmp(a));
    radii
  }

  /// Place up to `n` circles into `session`, larger ones first.
  pub fn make_circles(&mut self, session: &mut FillSession, colours: Option<&[usize]>) -> Result<PackReport> {
    let grid = session.grid();
    if (grid.width(), grid.height()) != (self.width, self.height) {
      return Err(Error::Config(format!(
        "collection is sized {}x{}, session grid is {}x{}",
        self.width, self.height, grid.width(), grid.height()
      )));
    }
    let palette_len = session.palette().len();
    if palette_len == 0 {
      return Err(Error::Config("empty palette".into()));
    }
    if let Some(&c) = colours.into_iter().flatten().find(|&&c| c >= palette_len) {
      return Err(Error::Config(format!(
        "colour index {} is out of range for a palette of {}", c, palette_len
      )));
    }

    let radii = self.radii(session.rng());
    let mut report = PackReport { requested: radii.len(), ..Default::default() };
    let mut consecutive = 0;

    for r in radii {
      match session.place_circle(r, colours, self) {
        Ok(_) => {
          report.placed += 1;
          consecutive = 0;
        }
        Err(PlaceError::NoSpace) => {
          log::debug!("no space left after {} circles", report.placed);
          report.stopped = Some(StopReason::NoSpace);
          break;
        }
        Err(err @ PlaceError::GuardExhausted { .. }) => {
          log::debug!("{}", err);
          report.guard_exhausted += 1;
          consecutive += 1;
          if self.max_consecutive_failures.map_or(false, |limit| consecutive >= limit) {
            report.stopped = Some(StopReason::TooManyFailures);
            break;
          }
        }
      }
    }
    Ok(report)
  }

  pub fn circles(&self) -> &[Circle] { &self.circles }
  pub fn len(&self) -> usize { self.circles.len() }
  pub fn is_empty(&self) -> bool { self.circles.is_empty() }
  pub fn into_vec(self) -> Vec<Circle> { self.circles }
}

impl CircleSink for Circles {
  fn push_circle(&mut self, circle: Circle) {
    self.circles.push(circle)
  }
}
