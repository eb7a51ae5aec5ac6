#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::cmp::Ordering;
use std::iter::Sum;
use std::{fmt, fmt::Formatter, ops};

/// Memoized quantities derived from a vector's coordinates.
///
/// Every slot is either empty or equal to the value recomputed from the current `x` and `y`.
#[derive(Clone, Debug, Default)]
struct DerivedCache {
    magnitude: Cell<Option<f64>>,
    sin_theta: Cell<Option<f64>>,
    cos_theta: Cell<Option<f64>>,
}

impl DerivedCache {
    const fn empty() -> Self {
        Self {
            magnitude: Cell::new(None),
            sin_theta: Cell::new(None),
            cos_theta: Cell::new(None),
        }
    }

    fn invalidate(&mut self) {
        *self = Self::empty();
    }
}

/// A point or displacement in the plane, using 64-bit floating point coordinates.
///
/// The coordinates are relative to the top-left corner of the screen, so `y` grows downward.
///
/// [`Vector2`] memoizes its magnitude and the sine/cosine of its heading angle. The memoized
/// values are filled lazily by the queries that need them (or eagerly by
/// [`precompute`](Vector2::precompute)) and cleared by every method that changes a coordinate.
/// For this reason the coordinates are private: read them with [`x`](Vector2::x) and
/// [`y`](Vector2::y), and write them through the mutating methods.
///
/// Mutating methods (`move_to`, `normalize`, `rotate_by`, `scale_by`, `divide_by`, `add`,
/// `subtract`) work in place and return `&mut Self` for chaining. Their non-mutating counterparts
/// (`normalized`, `rotated_by`, `scaled_by`, `divided_by`, `added`, `subtracted`) return new
/// values.
///
/// # Examples
///
/// ```
/// use geokit::core::prelude::*;
///
/// let mut v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
///
/// v.scale_by(2.0).add(&Vector2::new(1.0, 1.0));
/// assert_eq!(v, Vector2::new(7.0, 9.0));
/// ```
///
/// # Equality and ordering
/// Two vectors are equal if both of their coordinates differ by less than
/// [`EPSILON`](crate::core::config::EPSILON).
///
/// Ordering compares magnitudes, not coordinates, and is only a preorder. Distinct vectors with the
/// same magnitude are neither less nor greater than each other, so
/// [`partial_cmp`](PartialOrd::partial_cmp) returns `None` for them, yet `<=` and `>=` both hold.
/// Every comparison operator forwards to the matching named method (`is_less_than`,
/// `is_less_or_equal`, and so on).
///
/// ```
/// use geokit::core::prelude::*;
///
/// let right = Vector2::new(1.0, 0.0);
/// let down = Vector2::new(0.0, 1.0);
/// assert!(right <= down && down <= right);
/// assert!(!(right < down) && right != down);
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Vector2 {
    x: f64,
    y: f64,
    #[serde(skip)]
    cache: DerivedCache,
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            cache: DerivedCache::empty(),
        }
    }
    /// Returns the null vector, `(0, 0)`.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self.cache.invalidate();
        self
    }
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self.cache.invalidate();
        self
    }

    /// Returns the squared length of the vector. Not memoized.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the Euclidean length of the vector, `sqrt(x² + y²)`.
    ///
    /// The result is memoized until the next mutation.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        if let Some(magnitude) = self.cache.magnitude.get() {
            return magnitude;
        }
        let magnitude = self.magnitude_squared().sqrt();
        self.cache.magnitude.set(Some(magnitude));
        magnitude
    }

    /// Returns the sine of the angle between this vector and the positive x-axis.
    ///
    /// # Errors
    /// Returns [`GeometryError::NullVector`] if the vector is null, since a null vector has no
    /// heading.
    pub fn sin_theta(&self) -> Result<f64, GeometryError> {
        if let Some(sin_theta) = self.cache.sin_theta.get() {
            return Ok(sin_theta);
        }
        let magnitude = self.non_null_magnitude("sin_theta")?;
        let sin_theta = self.y / magnitude;
        self.cache.sin_theta.set(Some(sin_theta));
        Ok(sin_theta)
    }

    /// Returns the cosine of the angle between this vector and the positive x-axis.
    ///
    /// # Errors
    /// Returns [`GeometryError::NullVector`] if the vector is null.
    pub fn cos_theta(&self) -> Result<f64, GeometryError> {
        if let Some(cos_theta) = self.cache.cos_theta.get() {
            return Ok(cos_theta);
        }
        let magnitude = self.non_null_magnitude("cos_theta")?;
        let cos_theta = self.x / magnitude;
        self.cache.cos_theta.set(Some(cos_theta));
        Ok(cos_theta)
    }

    fn non_null_magnitude(&self, operation: &'static str) -> Result<f64, GeometryError> {
        if self.is_null() {
            debug!("{}() called on null vector {}", operation, self);
            Err(GeometryError::NullVector { operation })
        } else {
            Ok(self.magnitude())
        }
    }

    /// Computes the dot product of two vectors.
    ///
    /// ```
    /// use geokit::core::prelude::*;
    /// let v1 = Vector2::new(3.0, 4.0);
    /// let v2 = Vector2::new(1.0, 2.0);
    /// assert_eq!(v1.dot(&v2), 11.0);
    /// assert_eq!(v2.dot(&v1), 11.0);
    /// ```
    #[must_use]
    pub fn dot(&self, other: &Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product, the signed area of the parallelogram spanned by the two
    /// vectors. Positive if `other` lies counter-clockwise from `self`.
    #[must_use]
    pub fn cross(&self, other: &Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the unsigned angle between two vectors in radians, in `[0, π]`.
    ///
    /// # Errors
    /// Returns [`GeometryError::NullVector`] if either vector is null.
    pub fn angle_between(&self, other: &Vector2) -> Result<f64, GeometryError> {
        let self_magnitude = self.non_null_magnitude("angle_between")?;
        let other_magnitude = other.non_null_magnitude("angle_between")?;
        // Rounding can push parallel vectors just outside acos()'s domain.
        let cos = (self.dot(other) / (self_magnitude * other_magnitude)).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }

    #[must_use]
    pub fn distance_to(&self, other: &Vector2) -> f64 {
        self.subtracted(other).magnitude()
    }

    /// Returns the unit vector pointing in the same direction.
    ///
    /// A null vector has no direction, so the result is then the null vector rather than an
    /// error.
    #[must_use]
    pub fn normalized(&self) -> Vector2 {
        let magnitude = self.magnitude();
        if magnitude <= EPSILON {
            Vector2::zero()
        } else {
            Vector2::new(
                gg_float::force_positive_zero(self.x / magnitude),
                gg_float::force_positive_zero(self.y / magnitude),
            )
        }
    }

    /// Returns this vector rotated counter-clockwise by `theta` radians.
    #[must_use]
    pub fn rotated_by(&self, theta: f64) -> Vector2 {
        let (sin, cos) = theta.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[must_use]
    pub fn scaled_by(&self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    /// Divides both coordinates by `divisor`.
    #[must_use]
    pub fn divided_by(&self, divisor: f64) -> Vector2 {
        Vector2::new(self.x / divisor, self.y / divisor)
    }

    #[must_use]
    pub fn added(&self, other: &Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    #[must_use]
    pub fn subtracted(&self, other: &Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    #[must_use]
    pub fn is_equal(&self, other: &Vector2) -> bool {
        gg_float::float_eq(self.x, other.x) && gg_float::float_eq(self.y, other.y)
    }

    #[must_use]
    pub fn has_same_magnitude(&self, other: &Vector2) -> bool {
        gg_float::float_eq(self.magnitude(), other.magnitude())
    }

    /// True if this vector is shorter than `other` by at least
    /// [`EPSILON`](crate::core::config::EPSILON) and the two are not equal.
    #[must_use]
    pub fn is_less_than(&self, other: &Vector2) -> bool {
        !self.is_equal(other) && other.magnitude() - self.magnitude() >= EPSILON
    }

    /// True if this vector is longer than `other` by at least
    /// [`EPSILON`](crate::core::config::EPSILON) and the two are not equal.
    #[must_use]
    pub fn is_greater_than(&self, other: &Vector2) -> bool {
        !self.is_equal(other) && self.magnitude() - other.magnitude() >= EPSILON
    }

    /// True if this vector is shorter, equal, or of the same magnitude.
    #[must_use]
    pub fn is_less_or_equal(&self, other: &Vector2) -> bool {
        self.is_equal(other) || self.is_less_than(other) || self.has_same_magnitude(other)
    }

    /// True if this vector is longer, equal, or of the same magnitude.
    #[must_use]
    pub fn is_greater_or_equal(&self, other: &Vector2) -> bool {
        self.is_equal(other) || self.is_greater_than(other) || self.has_same_magnitude(other)
    }

    /// True if the magnitude is within [`EPSILON`](crate::core::config::EPSILON) of zero.
    #[must_use]
    pub fn is_null(&self) -> bool {
        gg_float::is_near_zero(self.magnitude())
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.cache.invalidate();
        self
    }

    /// Scales this vector to unit length in place. A null vector becomes exactly `(0, 0)`.
    pub fn normalize(&mut self) -> &mut Self {
        self.assign(self.normalized())
    }

    pub fn rotate_by(&mut self, theta: f64) -> &mut Self {
        self.assign(self.rotated_by(theta))
    }

    pub fn scale_by(&mut self, factor: f64) -> &mut Self {
        self.assign(self.scaled_by(factor))
    }

    pub fn divide_by(&mut self, divisor: f64) -> &mut Self {
        self.assign(self.divided_by(divisor))
    }

    pub fn add(&mut self, other: &Vector2) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.cache.invalidate();
        self
    }

    pub fn subtract(&mut self, other: &Vector2) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.cache.invalidate();
        self
    }

    fn assign(&mut self, value: Vector2) -> &mut Self {
        self.move_to(value.x, value.y)
    }

    /// Fills every memoized slot that is still empty.
    ///
    /// The heading slots stay empty for a null vector, which has no heading. Calling this again
    /// before a mutation does nothing.
    pub fn precompute(&self) -> &Self {
        let _ = self.magnitude();
        if !self.is_null() {
            let _ = self.sin_theta();
            let _ = self.cos_theta();
        }
        self
    }
}

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl PartialOrd for Vector2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_equal(other) {
            Some(Ordering::Equal)
        } else if self.is_less_than(other) {
            Some(Ordering::Less)
        } else if self.is_greater_than(other) {
            Some(Ordering::Greater)
        } else {
            if self.magnitude().is_nan() || other.magnitude().is_nan() {
                warn!("Vector2: partial_cmp() on NaN magnitude: {} vs. {}", self, other);
            }
            None
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.is_less_than(other)
    }
    fn gt(&self, other: &Self) -> bool {
        self.is_greater_than(other)
    }
    // Equal magnitudes satisfy both, keeping the magnitude preorder.
    fn le(&self, other: &Self) -> bool {
        self.is_less_or_equal(other)
    }
    fn ge(&self, other: &Self) -> bool {
        self.is_greater_or_equal(other)
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(value: [f64; 2]) -> Self {
        Vector2::new(value[0], value[1])
    }
}
impl From<(f64, f64)> for Vector2 {
    fn from(value: (f64, f64)) -> Self {
        Vector2::new(value.0, value.1)
    }
}
impl From<Vector2> for [f64; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl ops::Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        self.scaled_by(-1.0)
    }
}
impl ops::Neg for &Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        self.scaled_by(-1.0)
    }
}

impl ops::Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        self.added(&rhs)
    }
}
impl ops::Add<&Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: &Vector2) -> Self::Output {
        self.added(rhs)
    }
}
impl ops::Add<Vector2> for &Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        self.added(&rhs)
    }
}
impl ops::Add<&Vector2> for &Vector2 {
    type Output = Vector2;

    fn add(self, rhs: &Vector2) -> Self::Output {
        self.added(rhs)
    }
}
impl ops::AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        Vector2::add(self, &rhs);
    }
}
impl ops::AddAssign<&Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: &Vector2) {
        Vector2::add(self, rhs);
    }
}

impl ops::Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        self.subtracted(&rhs)
    }
}
impl ops::Sub<&Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: &Vector2) -> Self::Output {
        self.subtracted(rhs)
    }
}
impl ops::Sub<Vector2> for &Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        self.subtracted(&rhs)
    }
}
impl ops::Sub<&Vector2> for &Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: &Vector2) -> Self::Output {
        self.subtracted(rhs)
    }
}
impl ops::SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.subtract(&rhs);
    }
}
impl ops::SubAssign<&Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: &Vector2) {
        self.subtract(rhs);
    }
}

impl ops::Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled_by(rhs)
    }
}
impl ops::Mul<f64> for &Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled_by(rhs)
    }
}
impl ops::Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs.scaled_by(self)
    }
}
impl ops::Mul<&Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: &Vector2) -> Self::Output {
        rhs.scaled_by(self)
    }
}
impl ops::MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_by(rhs);
    }
}

impl ops::Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Self::Output {
        self.divided_by(rhs)
    }
}
impl ops::Div<f64> for &Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Self::Output {
        self.divided_by(rhs)
    }
}
impl ops::DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.divide_by(rhs);
    }
}

impl Sum<Vector2> for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), |mut acc, v| {
            acc += v;
            acc
        })
    }
}
impl<'a> Sum<&'a Vector2> for Vector2 {
    fn sum<I: Iterator<Item = &'a Vector2>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), |mut acc, v| {
            acc += v;
            acc
        })
    }
}
