//! .
//!
//! The origin of coordinate system is in top-left corner, `x` grows to the right and `y`
//! downwards. All coordinates are integer pixel positions of the source image.

use euclid::{Box2D, Point2D};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type Pixel = Point2D<u32, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// A placed circle. Only ever produced by a successful placement, never mutated afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Circle {
  pub center: Pixel,
  pub radius: u32,
  /// Index into the palette of the session that placed it.
  pub colour: usize
}

impl Circle {
  pub fn new(center: Pixel, radius: u32, colour: usize) -> Self {
    Self { center, radius, colour }
  }

  /// Squared distance between `pixel` and the center.
  pub fn distance2(&self, pixel: Pixel) -> i64 {
    distance2(self.center, pixel)
  }

  /// The four axis-aligned points at distance `radius` from the center, in the order
  /// left, right, top, bottom. `None` if one of them lies at a negative coordinate.
  pub fn axis_points(&self) -> Option<[Pixel; 4]> {
    let Circle { center: c, radius: r, .. } = *self;
    (c.x >= r && c.y >= r).then(|| [
      Pixel::new(c.x - r, c.y),
      Pixel::new(c.x + r, c.y),
      Pixel::new(c.x, c.y - r),
      Pixel::new(c.x, c.y + r),
    ])
  }
}

/// Inclusive bounding box.
impl BoundingBox<i64, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<i64, PixelSpace> {
    let c = self.center.cast::<i64>();
    let r = self.radius as i64;
    Box2D::new(
      Point2D::new(c.x - r, c.y - r),
      Point2D::new(c.x + r, c.y + r)
    )}}

pub fn distance2(a: Pixel, b: Pixel) -> i64 {
  let d = a.cast::<i64>() - b.cast::<i64>();
  d.x * d.x + d.y * d.y
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn axis_points() {
    let circle = Circle::new(Pixel::new(5, 6), 2, 0);
    assert_eq!(circle.axis_points(), Some([
      Pixel::new(3, 6), Pixel::new(7, 6), Pixel::new(5, 4), Pixel::new(5, 8)
    ]));
    assert_eq!(Circle::new(Pixel::new(1, 6), 2, 0).axis_points(), None);
  }

  #[test] fn bounding_box() {
    let bb = Circle::new(Pixel::new(1, 6), 2, 0).bounding_box();
    assert_eq!(bb.min, Point2D::new(-1, 4));
    assert_eq!(bb.max, Point2D::new(3, 8));
  }
}
