//! Boolean occupancy grid, `true` marking a pixel that can still be covered by a circle.
//!
//! Storage is column-major, so that a flat offset reads as `grid[x][y]` and enumeration
//! visits pixels with `x` as the outer coordinate.

use {
  crate::geometry::{Pixel, PixelSpace},
  euclid::Size2D,
  rayon::prelude::*
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
  data: Vec<bool>,
  size: Size2D<u32, PixelSpace>
}

impl OccupancyGrid {
  pub fn from_fn(width: u32, height: u32, f: impl Fn(Pixel) -> bool) -> Self {
    let data = (0 .. width as u64 * height as u64)
      .map(|offset| f(offset_to_xy(offset, height)))
      .collect();
    Self { data, size: Size2D::new(width, height) }
  }

  /// Every pixel is foreground.
  pub fn filled(width: u32, height: u32) -> Self {
    Self::from_fn(width, height, |_| true)
  }

  /// Every pixel is background.
  pub fn empty(width: u32, height: u32) -> Self {
    Self::from_fn(width, height, |_| false)
  }

  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }
  pub fn size(&self) -> Size2D<u32, PixelSpace> { self.size }
  pub fn area(&self) -> usize { self.data.len() }

  pub fn min_dimension(&self) -> u32 {
    self.size.width.min(self.size.height)
  }

  /// Whether signed coordinates fall inside the grid.
  pub fn contains(&self, x: i64, y: i64) -> bool {
    x >= 0 && y >= 0 && x < self.size.width as i64 && y < self.size.height as i64
  }

  /// Out of range pixels read as background.
  pub fn get(&self, pixel: Pixel) -> bool {
    pixel.x < self.size.width && pixel.y < self.size.height
      && self.data[xy_to_offset(pixel, self.size.height)]
  }

  pub fn set(&mut self, pixel: Pixel, value: bool) {
    let offset = xy_to_offset(pixel, self.size.height);
    self.data[offset] = value;
  }

  pub fn count_foreground(&self) -> usize {
    self.data.iter().filter(|&&fg| fg).count()
  }

  /// Percentage of the grid which is foreground, in `[0, 100]`.
  pub fn coverage(&self) -> f64 {
    match self.area() {
      0 => 0.0,
      area => 100.0 * self.count_foreground() as f64 / area as f64
    }
  }

  /// All foreground pixels, `x` major.
  pub fn foreground(&self) -> Vec<Pixel> {
    let height = self.size.height;
    self.data.iter()
      .enumerate()
      .filter(|(_, &fg)| fg)
      .map(|(offset, _)| offset_to_xy(offset as u64, height))
      .collect()
  }

  pub fn pixels(&self) -> impl Iterator<Item = (Pixel, bool)> + '_ {
    let height = self.size.height;
    self.data.iter()
      .enumerate()
      .map(move |(offset, &fg)| (offset_to_xy(offset as u64, height), fg))
  }

  /// Swap foreground and background.
  pub fn invert(&mut self) {
    self.data.par_iter_mut().for_each(|fg| *fg = !*fg);
  }
}

fn offset_to_xy(offset: u64, height: u32) -> Pixel {
  let height = height as u64;
  Pixel::new(
    (offset / height) as u32,
    (offset % height) as u32
  )
}

fn xy_to_offset(xy: Pixel, height: u32) -> usize {
  xy.x as usize * height as usize + xy.y as usize
}
