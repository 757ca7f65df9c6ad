//! Shape loader: raster image to [`OccupancyGrid`].
//!
//! Images are read as ink on paper. Pixels darker than [`INK_THRESHOLD`] are ink and become
//! the fillable foreground, everything else is paper.

use {
  crate::{
    error::{Error, Result},
    geometry::Pixel,
    grid::OccupancyGrid
  },
  image::{DynamicImage, GrayImage},
  std::path::Path
};

/// Luma values strictly below this are ink.
pub const INK_THRESHOLD: u8 = 128;

pub fn load(path: impl AsRef<Path>) -> Result<OccupancyGrid> {
  let path = path.as_ref();
  let image = image::open(path)
    .map_err(|source| Error::Load { path: path.to_owned(), source })?;
  Ok(from_image(&image))
}

pub fn from_image(image: &DynamicImage) -> OccupancyGrid {
  from_luma(&image.to_luma8())
}

/// Binarize and transpose, so that the grid is indexed as `grid[x][y]`.
pub fn from_luma(image: &GrayImage) -> OccupancyGrid {
  let (width, height) = image.dimensions();
  OccupancyGrid::from_fn(width, height, |Pixel { x, y, .. }|
    image.get_pixel(x, y).0[0] < INK_THRESHOLD
  )
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    image::Luma,
  };

  #[test] fn ink_is_foreground() {
    // white paper, dark 2x1 stroke at the right edge
    let image = GrayImage::from_fn(4, 3, |x, y| match (x, y) {
      (3, 0) | (3, 1) => Luma([0u8]),
      (0, 0) => Luma([INK_THRESHOLD]),
      _ => Luma([255u8])
    });
    let grid = from_luma(&image);
    assert_eq!((grid.width(), grid.height()), (4, 3));
    assert_eq!(grid.foreground(), vec![Pixel::new(3, 0), Pixel::new(3, 1)]);
  }

  #[test] fn colour_image_is_binarized() {
    let image = image::RgbImage::from_fn(2, 2, |x, _|
      if x == 0 { image::Rgb([20, 30, 10]) } else { image::Rgb([250, 240, 255]) }
    );
    let grid = from_image(&DynamicImage::ImageRgb8(image));
    assert_eq!(grid.foreground(), vec![Pixel::new(0, 0), Pixel::new(0, 1)]);
  }

  #[test] fn load_roundtrip() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join("shape_fill_loader_test.png");
    GrayImage::from_fn(6, 4, |x, _| Luma([if x < 2 { 0 } else { 255 }]))
      .save(&path)?;
    let grid = load(&path)?;
    assert_eq!(grid.size().to_tuple(), (6, 4));
    assert_eq!(grid.count_foreground(), 8);
    std::fs::remove_file(&path)?;
    Ok(())
  }

  #[test] fn load_error() {
    let path = std::env::temp_dir().join("shape_fill_no_such_frame.png");
    match load(&path) {
      Err(Error::Load { path: p, .. }) => assert_eq!(p, path),
      other => panic!("expected a load error, got {:?}", other.map(|g| g.size())),
    }
  }
}
