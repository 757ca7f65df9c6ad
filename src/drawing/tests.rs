use {
  super::*,
  crate::geometry::{Pixel, PixelSpace},
  anyhow::Result,
};

fn size(width: u32, height: u32) -> Size2D<u32, PixelSpace> {
  Size2D::new(width, height)
}

#[test] fn circles_in_order() {
  let circles = [
    Circle::new(Pixel::new(10, 12), 4, 1),
    Circle::new(Pixel::new(30, 5), 2, 0),
  ];
  let palette = Palette::from_slice(&["#000000", "#FF9900"]);
  let svg = make_svg(&circles, &palette, size(64, 48), None).to_string();

  assert!(svg.contains(r#"width="64""#));
  assert!(svg.contains(r#"height="48""#));
  assert!(svg.contains(r#"viewBox="0 0 64 48""#));
  assert!(!svg.contains("<rect"));
  assert_eq!(svg.matches("<circle").count(), 2);
  let first = svg.find(r#"cx="10""#).unwrap();
  let second = svg.find(r#"cx="30""#).unwrap();
  assert!(first < second);
  assert!(svg.contains(r##"fill="#FF9900""##));
  assert!(svg.contains(r#"r="4""#));
}

#[test] fn background_and_missing_colour() {
  let circles = [Circle::new(Pixel::new(3, 3), 1, 7)];
  let svg = make_svg(&circles, &Palette::white(), size(8, 8), Some("#000000")).to_string();
  assert!(svg.contains("<rect"));
  let rect = svg.find("<rect").unwrap();
  let circle = svg.find("<circle").unwrap();
  assert!(rect < circle);
  assert!(svg.contains(&format!(r#"fill="{}""#, MISSING_COLOUR)));
}

#[test] fn save_creates_directories() -> Result<()> {
  let dir = std::env::temp_dir().join("shape_fill_drawing_test");
  let path = dir.join("nested").join("frame.svg");
  let document = make_svg(&[], &Palette::black(), size(4, 4), None);
  save(&path, &document)?;
  let content = std::fs::read_to_string(&path)?;
  assert!(content.contains("<svg"));
  std::fs::remove_dir_all(&dir)?;
  Ok(())
}
