//! SVG output. Every placed circle becomes one filled `<circle>` element, on a canvas of the
//! source image's size.

use {
  crate::{
    error::Result,
    geometry::Circle,
    palette::Palette
  },
  euclid::Size2D,
  std::path::Path,
  svg::{
    node::element::{Circle as SvgCircle, Rectangle},
    Document
  }
};

#[cfg(test)] mod tests;

/// Fallback for colour indices without a palette entry.
const MISSING_COLOUR: &str = "#000000";

pub trait Draw<Backend> {
  fn draw(&self, backend: &mut Backend);
}

/// A circle paired with its resolved fill colour.
#[derive(Debug, Copy, Clone)]
pub struct Texture<'a> {
  pub shape: Circle,
  pub fill: &'a str
}

impl Circle {
  pub fn texture(self, fill: &str) -> Texture<'_> {
    Texture { shape: self, fill }
  }
}

impl Draw<Document> for Texture<'_> {
  fn draw(&self, document: &mut Document) {
    let Circle { center, radius, .. } = self.shape;
    let node = SvgCircle::new()
      .set("cx", center.x)
      .set("cy", center.y)
      .set("r", radius)
      .set("fill", self.fill);
    *document = std::mem::replace(document, Document::new()).add(node);
  }
}

pub fn new_document<U>(size: Size2D<u32, U>, background: Option<&str>) -> Document {
  let (width, height) = size.to_tuple();
  let document = Document::new()
    .set("width", width)
    .set("height", height)
    .set("viewBox", (0, 0, width, height));
  match background {
    Some(fill) => document.add(Rectangle::new()
      .set("width", width)
      .set("height", height)
      .set("fill", fill)),
    None => document
  }
}

/// Render `circles` in placement order.
pub fn make_svg<U>(
  circles: &[Circle],
  palette: &Palette,
  size: Size2D<u32, U>,
  background: Option<&str>
) -> Document {
  let mut document = new_document(size, background);
  circles.iter().for_each(|&circle| circle
    .texture(palette.colour(circle.colour).unwrap_or(MISSING_COLOUR))
    .draw(&mut document));
  document
}

/// Write `document` to `path`, creating missing parent directories.
pub fn save(path: impl AsRef<Path>, document: &Document) -> Result<()> {
  let path = path.as_ref();
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)?;
  }
  svg::save(path, document)?;
  Ok(())
}
