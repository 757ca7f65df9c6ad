//! SVG fill colours referenced by [`Circle::colour`](crate::geometry::Circle::colour).

use serde::{Deserialize, Serialize};

pub const DEFAULT: [&str; 4] = ["#993300", "#a5c916", "#00AA66", "#FF9900"];
pub const BLACK: [&str; 1] = ["#000000"];
pub const WHITE: [&str; 1] = ["#FFFFFF"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
  colours: Vec<String>
}

impl Default for Palette {
  fn default() -> Self {
    Self::from_slice(&DEFAULT)
  }
}

impl Palette {
  pub fn new(colours: Vec<String>) -> Self {
    Self { colours }
  }

  pub fn from_slice(colours: &[&str]) -> Self {
    Self::new(colours.iter().map(|c| c.to_string()).collect())
  }

  pub fn black() -> Self { Self::from_slice(&BLACK) }
  pub fn white() -> Self { Self::from_slice(&WHITE) }

  pub fn len(&self) -> usize { self.colours.len() }
  pub fn is_empty(&self) -> bool { self.colours.is_empty() }

  pub fn colour(&self, index: usize) -> Option<&str> {
    self.colours.get(index).map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.colours.iter().map(String::as_str)
  }

  /// Every hex colour replaced by its RGB inverse. Named colours and other specifiers
  /// are kept as is.
  pub fn complement(&self) -> Self {
    Self::new(self.colours.iter()
      .map(|c| complement_hex(c).unwrap_or_else(|| c.clone()))
      .collect())
  }
}

/// `#RRGGBB` or `#RGB`, any case. The inverse is written in the same form, upper case.
fn complement_hex(colour: &str) -> Option<String> {
  let digits = colour.strip_prefix('#')?;
  if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
    return None;
  }
  match digits.len() {
    6 => {
      let rgb = u32::from_str_radix(digits, 16).ok()?;
      Some(format!("#{:06X}", !rgb & 0xFF_FFFF))
    }
    3 => {
      let rgb = u16::from_str_radix(digits, 16).ok()?;
      Some(format!("#{:03X}", !rgb & 0xFFF))
    }
    _ => None
  }
}
