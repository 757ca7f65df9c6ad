use {
  crate::{
    geometry::{distance2, Pixel},
    grid::OccupancyGrid
  },
  itertools::iproduct
};

/// Zero every pixel within distance `r + 1` of `center`.
///
/// The extra pixel keeps a clearance between neighbouring circles. Only the bounding square
/// of the padded disk is visited, which touches the same pixels as a full grid pass.
pub fn apply_circle_mask(grid: &mut OccupancyGrid, center: Pixel, r: u32) {
  if grid.area() == 0 {
    return;
  }
  let padded = r as i64 + 1;
  let r2 = padded * padded;
  let clamp = |v: i64, len: u32| v.clamp(0, len as i64 - 1) as u32;
  let (cx, cy) = (center.x as i64, center.y as i64);
  let xs = clamp(cx - padded, grid.width()) ..= clamp(cx + padded, grid.width());
  let ys = clamp(cy - padded, grid.height()) ..= clamp(cy + padded, grid.height());

  iproduct!(xs, ys)
    .map(|(x, y)| Pixel::new(x, y))
    .filter(|&p| distance2(center, p) <= r2)
    .for_each(|p| grid.set(p, false));
}
