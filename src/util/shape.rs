use crate::core::prelude::*;

use std::fmt;
use std::fmt::Formatter;

/// Measurements shared by every closed 2D shape.
///
/// # Examples
///
/// ```
/// use geokit::core::prelude::*;
///
/// fn total_area(shapes: &[&dyn Shape]) -> f64 {
///     shapes.iter().map(|s| s.area()).sum()
/// }
///
/// let rect = Rect::new(0.0, 0.0, 4.0, 3.0);
/// let triangle = polygon![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(0.0, 4.0),
/// ];
/// assert_eq!(total_area(&[&rect, &triangle]), 20.0);
/// ```
pub trait Shape {
    fn area(&self) -> f64;
    fn perimeter(&self) -> f64;
    fn center(&self) -> Vector2;

    /// True if the shape encloses no area.
    fn is_degenerate(&self) -> bool {
        gg_float::is_near_zero(self.area())
    }
}

/// Placement of a shape in the plane.
pub trait Movable {
    /// Places the shape at an absolute position. What "position" means is up to the shape.
    fn move_to(&mut self, position: &Vector2);
    /// Displaces the shape by `delta`.
    fn move_with(&mut self, delta: &Vector2);
}

impl<T: Shape + ?Sized> Shape for &T {
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn perimeter(&self) -> f64 {
        (**self).perimeter()
    }
    fn center(&self) -> Vector2 {
        (**self).center()
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn area(&self) -> f64 {
        (**self).area()
    }
    fn perimeter(&self) -> f64 {
        (**self).perimeter()
    }
    fn center(&self) -> Vector2 {
        (**self).center()
    }
}

impl<T: Movable + ?Sized> Movable for Box<T> {
    fn move_to(&mut self, position: &Vector2) {
        (**self).move_to(position);
    }
    fn move_with(&mut self, delta: &Vector2) {
        (**self).move_with(delta);
    }
}

/// Any of the concrete shapes, for collections that mix them.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyShape {
    Rect(Rect),
    Polygon(Polygon),
}

impl AnyShape {
    pub fn as_shape(&self) -> &dyn Shape {
        match self {
            AnyShape::Rect(rect) => rect,
            AnyShape::Polygon(polygon) => polygon,
        }
    }
    pub fn as_movable_mut(&mut self) -> &mut dyn Movable {
        match self {
            AnyShape::Rect(rect) => rect,
            AnyShape::Polygon(polygon) => polygon,
        }
    }
}

impl Shape for AnyShape {
    fn area(&self) -> f64 {
        self.as_shape().area()
    }
    fn perimeter(&self) -> f64 {
        self.as_shape().perimeter()
    }
    fn center(&self) -> Vector2 {
        self.as_shape().center()
    }
}

impl Movable for AnyShape {
    fn move_to(&mut self, position: &Vector2) {
        self.as_movable_mut().move_to(position);
    }
    fn move_with(&mut self, delta: &Vector2) {
        self.as_movable_mut().move_with(delta);
    }
}

impl From<Rect> for AnyShape {
    fn from(value: Rect) -> Self {
        AnyShape::Rect(value)
    }
}
impl From<Polygon> for AnyShape {
    fn from(value: Polygon) -> Self {
        AnyShape::Polygon(value)
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AnyShape::Rect(rect) => fmt::Display::fmt(rect, f),
            AnyShape::Polygon(polygon) => fmt::Display::fmt(polygon, f),
        }
    }
}
