//! Fill configuration, shared by every frame of a batch.

use {
  crate::{
    error::{Error, Result},
    palette::Palette,
    solver::{FillSession, FitTest}
  },
  serde::{Deserialize, Serialize},
  std::path::Path
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FillConfig {
  /// Smallest radius, as a proportion of the smaller image side.
  pub rho_min: f64,
  /// Largest radius, as a proportion of the smaller image side.
  pub rho_max: f64,
  /// Circles to request. Derived from the foreground coverage if absent.
  pub n: Option<usize>,
  pub circles_per_percent: f64,
  /// Random candidates per placement.
  pub guard: u32,
  /// Defaults to a single black colour.
  pub colours: Option<Palette>,
  /// Restrict circles to these palette indices.
  pub colour_subset: Option<Vec<usize>>,
  /// Coverage percentage above which foreground and background swap.
  pub reverse_threshold: u32,
  pub fit: FitTest,
  pub seed: u64,
  pub max_consecutive_failures: Option<usize>,
  /// Paint the paper colour behind reversed frames.
  pub background: bool,
}

impl Default for FillConfig {
  fn default() -> Self {
    Self {
      rho_min: 0.005,
      rho_max: 0.01,
      n: None,
      circles_per_percent: 3000.0 / 42.0,
      guard: FillSession::DEFAULT_GUARD,
      colours: None,
      colour_subset: None,
      reverse_threshold: 50,
      fit: FitTest::Axial,
      seed: 0,
      max_consecutive_failures: None,
      background: true,
    }
  }
}

impl FillConfig {
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: Self = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
  }

  pub fn palette(&self) -> Palette {
    self.colours.clone().unwrap_or_else(Palette::black)
  }

  pub fn validate(&self) -> Result<()> {
    if !(self.rho_min > 0.0 && self.rho_min <= self.rho_max) {
      return Err(Error::Config(format!(
        "expected 0 < rho_min <= rho_max, got {} and {}", self.rho_min, self.rho_max
      )));
    }
    if self.colours.as_ref().map_or(false, Palette::is_empty) {
      return Err(Error::Config("empty palette".into()));
    }
    if !(self.circles_per_percent >= 0.0) {
      return Err(Error::Config("circles_per_percent must be non-negative".into()));
    }
    if self.reverse_threshold > 100 {
      return Err(Error::Config("reverse_threshold is a percentage".into()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    anyhow::Result,
  };

  #[test] fn partial_json() -> Result<()> {
    let config: FillConfig = serde_json::from_str(r##"{
      "rho_max": 0.05,
      "colours": ["#993300", "#00AA66"],
      "fit": "full_disk",
      "guard": 200
    }"##)?;
    assert_eq!(config.rho_max, 0.05);
    assert_eq!(config.rho_min, 0.005);
    assert_eq!(config.guard, 200);
    assert_eq!(config.fit, FitTest::FullDisk);
    assert_eq!(config.palette().len(), 2);
    config.validate()?;
    Ok(())
  }

  #[test] fn rejects_unknown_and_invalid() {
    assert!(serde_json::from_str::<FillConfig>(r#"{"radius": 3}"#).is_err());
    let config = FillConfig { rho_min: 0.1, rho_max: 0.01, ..Default::default() };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
    let config = FillConfig { colours: Some(Palette::new(vec![])), ..Default::default() };
    assert!(config.validate().is_err());
  }

  #[test] fn guard_matches_session() {
    let session = FillSession::new(crate::grid::OccupancyGrid::empty(1, 1), Palette::black());
    assert_eq!(FillConfig::default().guard, session.guard());
    assert_eq!(session.guard(), 1000);
  }

  #[test] fn from_file() -> Result<()> {
    let path = std::env::temp_dir().join("shape_fill_config_test.json");
    std::fs::write(&path, r#"{"seed": 42, "n": 10}"#)?;
    let config = FillConfig::from_file(&path)?;
    assert_eq!(config.seed, 42);
    assert_eq!(config.n, Some(10));
    assert_eq!(config.palette(), Palette::black());
    std::fs::remove_file(&path)?;
    Ok(())
  }
}
