use {
  super::*,
  crate::geometry::{distance2, Pixel},
  anyhow::Result,
};

fn session(grid: OccupancyGrid, guard: u32) -> FillSession {
  FillSession::new(grid, Palette::black())
    .with_guard(guard)
    .with_seed(0)
}

/// A disk of radius 30 in a 100x80 frame.
fn blob() -> OccupancyGrid {
  OccupancyGrid::from_fn(100, 80, |p| distance2(p, Pixel::new(50, 40)) <= 30 * 30)
}

#[test] fn fits_inside_bounds() {
  let grid = OccupancyGrid::filled(10, 10);
  assert!(circle_fits(&grid, Pixel::new(2, 2), 2));
  assert!(circle_fits(&grid, Pixel::new(7, 7), 2));
  assert!(!circle_fits(&grid, Pixel::new(1, 5), 2));
  assert!(!circle_fits(&grid, Pixel::new(5, 1), 2));
  // cx + r must stay strictly below the width
  assert!(!circle_fits(&grid, Pixel::new(8, 5), 2));
  assert!(!circle_fits(&grid, Pixel::new(5, 8), 2));
}

#[test] fn axial_fit_samples_four_points() {
  // foreground cross: the axis points are set, the diagonals are not
  let grid = OccupancyGrid::from_fn(9, 9, |p| p.x == 4 || p.y == 4);
  assert!(circle_fits(&grid, Pixel::new(4, 4), 3));
  assert!(FitTest::Axial.fits(&grid, Pixel::new(4, 4), 3));
  assert!(!FitTest::FullDisk.fits(&grid, Pixel::new(4, 4), 3));

  let mut grid = OccupancyGrid::filled(9, 9);
  grid.set(Pixel::new(4, 7), false);
  assert!(!circle_fits(&grid, Pixel::new(4, 4), 3));
  assert!(FitTest::FullDisk.fits(&OccupancyGrid::filled(9, 9), Pixel::new(4, 4), 3));
}

#[test] fn mask_is_padded_disk() {
  let mut grid = OccupancyGrid::filled(11, 11);
  let center = Pixel::new(5, 5);
  apply_circle_mask(&mut grid, center, 2);
  grid.pixels().for_each(|(p, fg)|
    assert_eq!(fg, distance2(center, p) > 9, "{:?}", p)
  );
  // 29 lattice points lie within distance 3
  assert_eq!(grid.count_foreground(), 121 - 29);
}

#[test] fn mask_clips_at_edges() {
  let mut grid = OccupancyGrid::filled(4, 4);
  apply_circle_mask(&mut grid, Pixel::new(0, 0), 1);
  assert!(!grid.get(Pixel::new(0, 0)));
  assert!(!grid.get(Pixel::new(2, 0)));
  assert!(!grid.get(Pixel::new(1, 1)));
  assert!(grid.get(Pixel::new(2, 1)));
  assert!(grid.get(Pixel::new(3, 0)));
}

#[test] fn place_in_small_square() -> Result<()> {
  let mut sess = session(OccupancyGrid::filled(10, 10), 50);
  let mut circles: Vec<Circle> = vec![];
  let circle = sess.place_circle(2.0, None, &mut circles)?;

  assert_eq!(circles, vec![circle]);
  assert_eq!(circle.radius, 2);
  assert!((2..=7).contains(&circle.center.x));
  assert!((2..=7).contains(&circle.center.y));
  assert_eq!(circle.colour, 0);
  // the padded disk loses a pixel per side when it touches the frame edge
  let covered = OccupancyGrid::filled(10, 10).pixels()
    .filter(|&(p, _)| distance2(circle.center, p) <= 9)
    .count();
  assert!(covered >= 27);
  assert_eq!(sess.grid().count_foreground(), 100 - covered);
  assert_eq!(sess.placed(), 1);
  Ok(())
}

#[test] fn single_pixel_exhausts_guard() {
  let grid = OccupancyGrid::from_fn(10, 10, |p| p == Pixel::new(5, 5));
  let mut sess = session(grid.clone(), 50);
  let mut circles: Vec<Circle> = vec![];

  assert_eq!(
    sess.place_circle(1.0, None, &mut circles),
    Err(PlaceError::GuardExhausted { radius: 1, attempts: 50 })
  );
  assert!(circles.is_empty());
  assert_eq!(sess.grid(), &grid);
}

#[test] fn empty_foreground_short_circuits() {
  // a zero guard would report exhaustion if the guard was consulted at all
  let mut sess = session(OccupancyGrid::empty(10, 10), 0);
  let mut circles: Vec<Circle> = vec![];
  assert_eq!(sess.place_circle(1.0, None, &mut circles), Err(PlaceError::NoSpace));
  assert!(circles.is_empty());
}

#[test] fn oversized_radius_leaves_grid_intact() {
  let grid = blob();
  let mut sess = session(grid.clone(), 200);
  let mut circles: Vec<Circle> = vec![];
  assert_eq!(
    sess.place_circle(45.0, None, &mut circles),
    Err(PlaceError::GuardExhausted { radius: 45, attempts: 200 })
  );
  assert_eq!(sess.grid(), &grid);
}

#[test] fn radius_coercion() {
  assert_eq!(coerce_radius(2.9), 2);
  assert_eq!(coerce_radius(0.4), 1);
  assert_eq!(coerce_radius(-3.0), 1);
  assert_eq!(coerce_radius(f64::NAN), 1);
  assert_eq!(coerce_radius(1e12), u32::MAX);
}

#[test] fn packing_invariants() {
  let original = blob();
  let mut sess = session(original.clone(), 300);
  let mut circles: Vec<Circle> = vec![];
  let mut foreground = sess.grid().count_foreground();

  for r in [12.0, 9.0, 7.0, 5.0, 5.0, 4.0, 3.0, 3.0, 2.0, 2.0, 2.0, 1.0, 1.0] {
    let before = sess.grid().clone();
    match sess.place_circle(r, None, &mut circles) {
      Ok(circle) => {
        // containment, checked against the grid the circle was placed in
        let (cx, cy, r) = (circle.center.x, circle.center.y, circle.radius);
        assert!(cx >= r && cy >= r && cx + r < 100 && cy + r < 80);
        let points = circle.axis_points().unwrap();
        assert!(points.iter().all(|&p| before.get(p)));

        let now = sess.grid().count_foreground();
        assert!(now < foreground);
        foreground = now;
      }
      Err(_) => {
        assert_eq!(sess.grid(), &before);
        assert_eq!(sess.grid().count_foreground(), foreground);
      }
    }
  }
  assert!(!circles.is_empty());

  // later circles stay clear of the padded disks of earlier ones
  for (i, a) in circles.iter().enumerate() {
    for b in &circles[i + 1..] {
      let gap = (a.radius + 1) as i64;
      assert!(distance2(a.center, b.center) > gap * gap, "{:?} {:?}", a, b);
      let points = b.axis_points().unwrap();
      assert!(points.iter().all(|&p| distance2(a.center, p) > gap * gap), "{:?} {:?}", a, b);
    }
    assert!(original.get(a.center));
  }
}

#[test] fn colour_subset() -> Result<()> {
  let mut sess = FillSession::new(OccupancyGrid::filled(60, 60), Palette::default())
    .with_guard(100);
  let mut circles: Vec<Circle> = vec![];
  for _ in 0..8 {
    sess.place_circle(3.0, Some(&[1, 3]), &mut circles)?;
  }
  assert!(circles.iter().all(|c| c.colour == 1 || c.colour == 3));
  // an empty subset means the whole palette
  let circle = sess.place_circle(2.0, Some(&[]), &mut circles)?;
  assert!(circle.colour < 4);
  Ok(())
}

#[test] fn deterministic_with_seed() -> Result<()> {
  let run = |seed| -> Result<Vec<Circle>> {
    let mut sess = session(blob(), 100).with_seed(seed);
    let mut circles: Vec<Circle> = vec![];
    for r in [8.0, 6.0, 4.0, 2.0] {
      sess.place_circle(r, None, &mut circles)?;
    }
    Ok(circles)
  };
  assert_eq!(run(7)?, run(7)?);
  Ok(())
}

#[test] fn reverse_once_before_packing() -> Result<()> {
  let mut sess = session(OccupancyGrid::from_fn(20, 20, |p| p.x < 5), 100);
  assert!(sess.reverse());
  assert!(sess.is_reversed());
  assert_eq!(sess.grid().count_foreground(), 300);
  assert_eq!(sess.palette(), &Palette::white());
  assert!(!sess.reverse());

  let mut sess = session(OccupancyGrid::filled(20, 20), 100);
  sess.place_circle(2.0, None, &mut Vec::<Circle>::new())?;
  assert!(!sess.reverse());
  assert!(!sess.is_reversed());
  Ok(())
}
