//! Planar geometry: a [`Vector2`](util::linalg::Vector2) with memoized derived quantities,
//! axis-aligned [`Rect`](util::rect::Rect)s, and simple [`Polygon`](util::polygon::Polygon)s,
//! unified by the [`Shape`](util::shape::Shape) and [`Movable`](util::shape::Movable) traits.
//!
//! Most users want the prelude:
//!
//! ```
//! use geokit::core::prelude::*;
//!
//! let mut rect = Rect::new(0.0, 0.0, 4.0, 2.0);
//! rect.move_with(&Vector2::new(1.0, 1.0));
//! assert_eq!(rect.center(), Vector2::new(3.0, 2.0));
//! ```

pub mod core;
pub mod util;
