//! This is a library for filling the dark region of a raster image with circles.
//!
//! An image is read as ink on paper and turned into an [`OccupancyGrid`](grid::OccupancyGrid),
//! where ink pixels are the fillable foreground. A [`FillSession`](solver::FillSession) then
//! places circles into it by guarded random search: a candidate center is drawn from the pixels
//! that are still foreground, tested with a cheap fit test, and once accepted, the disk it covers
//! (plus one pixel of clearance) is erased from the grid. Later circles can never overlap
//! earlier ones.
//!
//! The placed circles are rendered as SVG by [`drawing`] (requires `drawing` feature).
//!
//! # Basic usage
//! ```no_run
//! # use shape_fill::{
//! #   error::Result,
//! #   circles::Circles,
//! #   loader,
//! #   palette::Palette,
//! #   solver::FillSession,
//! # };
//! # fn main() -> Result<()> {
//! let grid = loader::load("frame.png")?;
//! let mut session = FillSession::new(grid, Palette::black())
//!   .with_guard(1000) // random candidates per circle before giving up on a radius
//!   .with_seed(0);
//!
//! // 3000 circles with radii between 0.5% and 1% of the smaller image side, largest first
//! let mut circles = Circles::for_session(&session, 0.005, 0.01, 3000)?;
//! let report = circles.make_circles(&mut session, None)?;
//! println!("placed {} of {}", report.placed, report.requested);
//!
//! let document = shape_fill::drawing::make_svg(
//!   circles.circles(),
//!   session.palette(),
//!   session.grid().size(),
//!   None
//! );
//! shape_fill::drawing::save("frame.svg", &document)?;
//! #   Ok(())
//! # }
//! ```
//!
//! A single placement can also be driven by hand. Both failures are ordinary values, and leave
//! the grid untouched:
//! ```
//! # use shape_fill::{
//! #   error::PlaceError,
//! #   geometry::Circle,
//! #   grid::OccupancyGrid,
//! #   palette::Palette,
//! #   solver::FillSession,
//! # };
//! let mut session = FillSession::new(OccupancyGrid::filled(10, 10), Palette::black())
//!   .with_guard(50);
//! let mut placed: Vec<Circle> = vec![];
//!
//! match session.place_circle(2.0, None, &mut placed) {
//!   Ok(circle) => assert!((2..=7).contains(&circle.center.x)),
//!   Err(PlaceError::GuardExhausted { .. }) => { /* try a smaller radius */ }
//!   Err(PlaceError::NoSpace) => { /* nothing left to fill */ }
//! }
//! ```
//!
//! For whole frames, including the choice between filling the ink or the paper, see
//! [`frame::fill_frame`] and [`frame::fill_frames`].

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geometry;
pub mod grid;
pub mod loader;
pub mod palette;
pub mod solver;
pub mod circles;
pub mod config;
pub mod frame;
pub mod util;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
