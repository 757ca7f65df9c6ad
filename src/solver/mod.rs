//! Circle placement engine.
//!
//! A [`FillSession`] owns the occupancy grid of one image and places circles into it by
//! rejection sampling: candidate centers are drawn from the pixels that are still foreground,
//! checked with a [`FitTest`], and on success the covered disk is erased from the grid with
//! [`apply_circle_mask`], so that later circles cannot overlap it.

use {
  crate::{
    error::PlaceError,
    geometry::Circle,
    grid::OccupancyGrid,
    palette::Palette
  },
  rand::prelude::*,
  rand_pcg::Pcg64
};

mod fit;
mod mask;
#[cfg(test)] mod tests;
pub use {
  fit::{circle_fits, FitTest},
  mask::apply_circle_mask
};

/// Receiver of successfully placed circles.
pub trait CircleSink {
  fn push_circle(&mut self, circle: Circle);
}

impl CircleSink for Vec<Circle> {
  fn push_circle(&mut self, circle: Circle) {
    self.push(circle)
  }
}

pub struct FillSession {
  grid: OccupancyGrid,
  palette: Palette,
  /// Maximum number of random candidates per placement.
  guard: u32,
  fit: FitTest,
  reversed: bool,
  placed: usize,
  rng: Pcg64
}

impl FillSession {
  pub const DEFAULT_GUARD: u32 = 1000;

  pub fn new(grid: OccupancyGrid, palette: Palette) -> Self {
    Self {
      grid,
      palette,
      guard: Self::DEFAULT_GUARD,
      fit: FitTest::default(),
      reversed: false,
      placed: 0,
      rng: Pcg64::seed_from_u64(0)
    }
  }

  pub fn with_guard(mut self, guard: u32) -> Self {
    self.guard = guard;
    self
  }

  pub fn with_fit_test(mut self, fit: FitTest) -> Self {
    self.fit = fit;
    self
  }

  pub fn with_seed(mut self, seed: u64) -> Self {
    self.rng = Pcg64::seed_from_u64(seed);
    self
  }

  pub fn grid(&self) -> &OccupancyGrid { &self.grid }
  pub fn palette(&self) -> &Palette { &self.palette }
  pub fn guard(&self) -> u32 { self.guard }
  pub fn fit_test(&self) -> FitTest { self.fit }
  pub fn is_reversed(&self) -> bool { self.reversed }
  /// Number of circles placed so far.
  pub fn placed(&self) -> usize { self.placed }

  pub fn rng(&mut self) -> &mut Pcg64 { &mut self.rng }

  /// Swap the roles of foreground and background, and switch to the complementary palette.
  ///
  /// Allowed once, and only before the first circle is placed. Returns whether the swap
  /// happened.
  pub fn reverse(&mut self) -> bool {
    if self.reversed || self.placed > 0 {
      return false;
    }
    self.grid.invert();
    self.palette = self.palette.complement();
    self.reversed = true;
    true
  }

  /// Attempt to place one circle of radius `radius`.
  ///
  /// The radius is truncated to an integer of at least 1. The colour is drawn uniformly from
  /// `colours`, or from the whole palette if `colours` is `None` or empty. On success the
  /// circle is pushed to `sink` and returned; on failure neither the grid nor `sink` change.
  pub fn place_circle(
    &mut self,
    radius: f64,
    colours: Option<&[usize]>,
    sink: &mut impl CircleSink
  ) -> Result<Circle, PlaceError> {
    let r = coerce_radius(radius);
    // stable for the duration of this call: the grid only changes on success
    let candidates = self.grid.foreground();
    if candidates.is_empty() {
      return Err(PlaceError::NoSpace);
    }

    for _ in 0..self.guard {
      let center = candidates[self.rng.gen_range(0..candidates.len())];
      if !self.fit.fits(&self.grid, center, r) {
        continue;
      }
      apply_circle_mask(&mut self.grid, center, r);
      let colour = self.pick_colour(colours);
      let circle = Circle::new(center, r, colour);
      log::trace!("placed {:?}", circle);
      sink.push_circle(circle);
      self.placed += 1;
      return Ok(circle);
    }

    Err(PlaceError::GuardExhausted { radius: r, attempts: self.guard })
  }

  fn pick_colour(&mut self, colours: Option<&[usize]>) -> usize {
    match colours {
      Some(subset) if !subset.is_empty() => *subset.choose(&mut self.rng).unwrap_or(&0),
      _ => match self.palette.len() {
        0 => 0,
        len => self.rng.gen_range(0..len)
      }
    }
  }

  pub fn into_parts(self) -> (OccupancyGrid, Palette) {
    (self.grid, self.palette)
  }
}

/// Truncate towards zero, with a minimum of 1. NaN and negative radii become 1.
pub fn coerce_radius(radius: f64) -> u32 {
  (radius as i64).clamp(1, u32::MAX as i64) as u32
}
