use std::path::{Path, PathBuf};

/// Time a block, logging the elapsed milliseconds at debug level. Evaluates to the block's value.
#[macro_export]
macro_rules! profile(
  ($title: expr, $body: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Files under `path` whose name passes `filter`, in natural order ("2.png" before "10.png").
/// A file path is returned as is if it passes the filter.
pub fn find_files(
  path: impl AsRef<Path>,
  filter: impl Fn(&str) -> bool
) -> impl Iterator<Item = PathBuf> {
  use walkdir::{WalkDir, DirEntry};

  WalkDir::new(path)
    .sort_by(|a, b| {
      let [a, b] = [a, b].map(|x| x.file_name().to_string_lossy().to_string());
      lexical_sort::natural_lexical_cmp(&a, &b)
    })
    .into_iter()
    .filter_map(Result::ok)
    .filter(|entry| entry.file_type().is_file())
    .map(|file: DirEntry| file.path().to_owned())
    .filter(move |file| file.file_name()
      .map_or(false, |name| filter(name.to_string_lossy().as_ref())))
}

/// Matches the raster formats the loader can decode.
pub fn image_filter() -> impl Fn(&str) -> bool {
  let reg = regex::Regex::new(r"(?i)^.+\.(png|jpe?g)$")
    .expect("static regex");
  move |file| reg.is_match(file)
}
