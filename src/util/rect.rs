use crate::core::prelude::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

/// An axis-aligned rectangle given by its top-left corner and its dimensions.
///
/// Dimensions are not validated: zero or negative widths and heights are representable, and
/// [`is_valid`](Rect::is_valid) reports whether both are positive.
///
/// # Examples
///
/// ```
/// use geokit::core::prelude::*;
///
/// let mut rect = Rect::new(0.0, 0.0, 4.0, 3.0);
/// assert_eq!(rect.area(), 12.0);
/// assert_eq!(rect.perimeter(), 14.0);
/// assert_eq!(rect.center(), Vector2::new(2.0, 1.5));
///
/// rect.rotate_90_degrees_clockwise();
/// assert_eq!((rect.width(), rect.height()), (3.0, 4.0));
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    position: Vector2,
    width: f64,
    height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_position(Vector2::new(x, y), width, height)
    }
    pub fn from_position(position: Vector2, width: f64, height: f64) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// The top-left corner.
    pub fn position(&self) -> &Vector2 {
        &self.position
    }
    pub fn width(&self) -> f64 {
        self.width
    }
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_width(&mut self, width: f64) -> &mut Self {
        self.width = width;
        self
    }
    pub fn set_height(&mut self, height: f64) -> &mut Self {
        self.height = height;
        self
    }

    pub fn top_left(&self) -> Vector2 {
        self.position.clone()
    }
    pub fn bottom_right(&self) -> Vector2 {
        self.position.added(&Vector2::new(self.width, self.height))
    }

    /// Multiplies both dimensions by `factor`, keeping the position. Negative or zero factors are
    /// allowed and produce an invalid rectangle.
    pub fn scale_with(&mut self, factor: f64) -> &mut Self {
        self.width *= factor;
        self.height *= factor;
        self
    }

    pub fn resize(&mut self, width: f64, height: f64) -> &mut Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Swaps width and height, keeping the top-left corner in place.
    pub fn rotate_90_degrees_clockwise(&mut self) -> &mut Self {
        std::mem::swap(&mut self.width, &mut self.height);
        self
    }

    /// Swaps width and height, then moves the rectangle left by its new width.
    ///
    /// This is deliberately not the inverse of
    /// [`rotate_90_degrees_clockwise`](Rect::rotate_90_degrees_clockwise): the result pivots about
    /// the original top-left corner, ending up to its left.
    pub fn rotate_90_degrees_trigonometrically(&mut self) -> &mut Self {
        std::mem::swap(&mut self.width, &mut self.height);
        let new_x = self.position.x() - self.width;
        self.position.set_x(new_x);
        self
    }

    pub fn is_square(&self) -> bool {
        gg_float::float_eq(self.width, self.height)
    }

    /// True if both dimensions are greater than [`EPSILON`](crate::core::config::EPSILON).
    pub fn is_valid(&self) -> bool {
        self.width > EPSILON && self.height > EPSILON
    }

    /// Half-open containment: the left and top edges are inside, the right and bottom edges are
    /// not.
    pub fn contains_point(&self, point: &Vector2) -> bool {
        let bottom_right = self.bottom_right();
        (self.position.x()..bottom_right.x()).contains(&point.x())
            && (self.position.y()..bottom_right.y()).contains(&point.y())
    }

    /// The four corners as a polygon.
    pub fn as_polygon(&self) -> Polygon {
        let top_left = self.top_left();
        let bottom_right = self.bottom_right();
        let top_right = Vector2::new(bottom_right.x(), top_left.y());
        let bottom_left = Vector2::new(top_left.x(), bottom_right.y());
        Polygon::new(top_left, top_right, bottom_right, [bottom_left])
    }
}

impl Shape for Rect {
    fn area(&self) -> f64 {
        self.width * self.height
    }
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }
    fn center(&self) -> Vector2 {
        self.position
            .added(&Vector2::new(self.width / 2.0, self.height / 2.0))
    }
}

impl Movable for Rect {
    /// Places the top-left corner at `position`.
    fn move_to(&mut self, position: &Vector2) {
        self.position = position.clone();
    }
    fn move_with(&mut self, delta: &Vector2) {
        self.position.add(delta);
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.position.is_equal(&other.position)
            && gg_float::float_eq(self.width, other.width)
            && gg_float::float_eq(self.height, other.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rect({}, {} x {})", self.position, self.width, self.height)
    }
}
