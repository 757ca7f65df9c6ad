use {
  crate::{
    geometry::{distance2, BoundingBox, Circle, Pixel},
    grid::OccupancyGrid
  },
  itertools::iproduct,
  serde::{Deserialize, Serialize}
};

/// Admissibility test for a candidate circle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitTest {
  /// Only the four axis-aligned boundary points are sampled. O(1), but necessary rather than
  /// sufficient: a shape that is not convex along the diagonals may still be crossed.
  /// The one pixel padding of [`apply_circle_mask`](super::apply_circle_mask) keeps the
  /// resulting overlap with earlier circles bounded.
  #[default]
  Axial,
  /// Every pixel of the closed disk must be foreground. O(r²).
  FullDisk,
}

impl FitTest {
  pub fn fits(self, grid: &OccupancyGrid, center: Pixel, r: u32) -> bool {
    match self {
      FitTest::Axial => circle_fits(grid, center, r),
      FitTest::FullDisk => circle_fits(grid, center, r) && disk_is_foreground(grid, center, r),
    }
  }
}

/// Whether a circle of radius `r` at `center` stays inside the grid and all of its
/// axis-aligned boundary points are still foreground.
pub fn circle_fits(grid: &OccupancyGrid, center: Pixel, r: u32) -> bool {
  let circle = Circle::new(center, r, 0);
  let bounds = circle.bounding_box();
  if !grid.contains(bounds.min.x, bounds.min.y) || !grid.contains(bounds.max.x, bounds.max.y) {
    return false;
  }
  circle.axis_points()
    .map_or(false, |points| points.iter().all(|&p| grid.get(p)))
}

fn disk_is_foreground(grid: &OccupancyGrid, center: Pixel, r: u32) -> bool {
  let r2 = r as i64 * r as i64;
  // bounds were checked by `circle_fits`
  iproduct!(center.x - r ..= center.x + r, center.y - r ..= center.y + r)
    .map(|(x, y)| Pixel::new(x, y))
    .filter(|&p| distance2(center, p) <= r2)
    .all(|p| grid.get(p))
}
