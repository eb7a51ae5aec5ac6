use crate::core::prelude::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Formatter;

mod vertex_order {
    use crate::core::prelude::*;
    use crate::util::gg_iter;

    pub fn mean_of(vertices: &[Vector2]) -> Vector2 {
        let sum: Vector2 = vertices.iter().sum();
        let count = vertices.len() as f64;
        Vector2::new(sum.x() / count, sum.y() / count)
    }

    /// Sorts counter-clockwise by angle around the vertex mean, nearest first on ties.
    pub fn sort_counter_clockwise(vertices: &mut Vec<Vector2>) {
        let centre = mean_of(vertices);
        let mut keyed = vertices
            .drain(..)
            .map(|vertex| {
                let offset = &vertex - &centre;
                let angle = offset.y().atan2(offset.x());
                (angle, offset.magnitude_squared(), vertex)
            })
            .collect_vec();
        keyed.sort_by(|(a_angle, a_dist, _), (b_angle, b_dist, _)| {
            a_angle
                .total_cmp(b_angle)
                .then_with(|| a_dist.total_cmp(b_dist))
        });
        vertices.extend(keyed.into_iter().map(|(_, _, vertex)| vertex));
        trace!("ordered {} vertices around {}", vertices.len(), centre);
    }

    pub fn warn_on_duplicates(vertices: &[Vector2]) {
        for (u, v) in vertices.iter().circular_tuple_windows() {
            if u == v {
                warn!("polygon has duplicate vertex: {}", u);
            }
        }
    }

    /// Twice the signed area, positive for counter-clockwise order.
    pub fn signed_double_area(vertices: &[Vector2]) -> f64 {
        vertices
            .iter()
            .circular_tuple_windows()
            .map(|(u, v)| u.cross(v))
            .sum()
    }

    pub fn perimeter_of(vertices: &[Vector2]) -> f64 {
        vertices
            .iter()
            .circular_tuple_windows()
            .map(|(u, v)| u.distance_to(v))
            .sum()
    }

    pub fn area_centroid_of(vertices: &[Vector2]) -> Option<Vector2> {
        let (double_area, x, y) = vertices
            .iter()
            .circular_tuple_windows()
            .map(|(u, v)| {
                let cross = u.cross(v);
                (cross, (u.x() + v.x()) * cross, (u.y() + v.y()) * cross)
            })
            .reduce(gg_iter::sum_tuple3)?;
        if gg_float::is_near_zero(double_area) {
            return None;
        }
        Some(Vector2::new(x / (3.0 * double_area), y / (3.0 * double_area)))
    }
}

/// A simple polygon given by its vertices.
///
/// A polygon always has at least three vertices: [`Polygon::new`] and [`polygon!`](crate::polygon)
/// take the first three explicitly, and [`Polygon::from_vertices`] checks the count at runtime.
///
/// Vertices are kept sorted by increasing angle around the vertex mean (counter-clockwise when
/// `y` points up, clockwise on screen). The order is re-established on construction and by
/// [`add_vertex`](Polygon::add_vertex), so [`area`](Shape::area) and
/// [`perimeter`](Shape::perimeter) follow a consistent traversal. Polygons that are not
/// star-shaped around their vertex mean cannot be represented faithfully.
///
/// # Examples
///
/// ```
/// use geokit::core::prelude::*;
///
/// let mut square = polygon![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(4.0, 0.0),
///     Vector2::new(0.0, 4.0),
/// ];
/// assert_eq!(square.area(), 8.0);
///
/// square.add_vertex(Vector2::new(4.0, 4.0));
/// assert_eq!(square.area(), 16.0);
/// assert_eq!(square.center(), Vector2::new(2.0, 2.0));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vector2>", into = "Vec<Vector2>")]
pub struct Polygon {
    vertices: Vec<Vector2>,
}

impl Polygon {
    pub fn new(
        first: Vector2,
        second: Vector2,
        third: Vector2,
        rest: impl IntoIterator<Item = Vector2>,
    ) -> Self {
        let vertices = [first, second, third].into_iter().chain(rest).collect_vec();
        Self::from_vertices_unchecked(vertices)
    }

    /// # Errors
    /// Returns [`GeometryError::TooFewVertices`] for fewer than three vertices.
    pub fn from_vertices(vertices: Vec<Vector2>) -> Result<Self, GeometryError> {
        if vertices.len() < MIN_POLYGON_VERTICES {
            return Err(GeometryError::TooFewVertices {
                count: vertices.len(),
            });
        }
        Ok(Self::from_vertices_unchecked(vertices))
    }

    fn from_vertices_unchecked(vertices: Vec<Vector2>) -> Self {
        check_ge!(vertices.len(), MIN_POLYGON_VERTICES);
        let mut rv = Self { vertices };
        rv.put_vertices_in_order();
        vertex_order::warn_on_duplicates(&rv.vertices);
        rv
    }

    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Appends `vertex` and restores the counter-clockwise order.
    pub fn add_vertex(&mut self, vertex: Vector2) -> &mut Self {
        if self.vertices.contains(&vertex) {
            warn!("polygon has duplicate vertex: {}", vertex);
        }
        self.vertices.push(vertex);
        self.put_vertices_in_order();
        self
    }

    /// The centre of mass of the enclosed area, as opposed to [`center`](Shape::center), which
    /// averages the vertices. `None` if the polygon encloses no area.
    pub fn area_centroid(&self) -> Option<Vector2> {
        vertex_order::area_centroid_of(&self.vertices)
    }

    fn put_vertices_in_order(&mut self) {
        let count = self.vertices.len();
        vertex_order::sort_counter_clockwise(&mut self.vertices);
        check_eq!(self.vertices.len(), count);
    }

    fn translate(&mut self, delta: &Vector2) {
        for vertex in &mut self.vertices {
            vertex.add(delta);
        }
    }
}

impl Shape for Polygon {
    /// Shoelace formula over the ordered vertices.
    fn area(&self) -> f64 {
        vertex_order::signed_double_area(&self.vertices).abs() / 2.0
    }
    fn perimeter(&self) -> f64 {
        vertex_order::perimeter_of(&self.vertices)
    }
    /// The arithmetic mean of the vertices.
    fn center(&self) -> Vector2 {
        vertex_order::mean_of(&self.vertices)
    }
}

impl Movable for Polygon {
    /// Translates every vertex so that [`center`](Shape::center) ends up at `position`.
    fn move_to(&mut self, position: &Vector2) {
        let delta = position - self.center();
        self.translate(&delta);
    }
    fn move_with(&mut self, delta: &Vector2) {
        self.translate(delta);
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(&other.vertices)
                .all(|(u, v)| u.is_equal(v))
    }
}

impl TryFrom<Vec<Vector2>> for Polygon {
    type Error = GeometryError;

    fn try_from(value: Vec<Vector2>) -> Result<Self, Self::Error> {
        Self::from_vertices(value)
    }
}

impl From<Polygon> for Vec<Vector2> {
    fn from(value: Polygon) -> Self {
        value.vertices
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "polygon[{}]", self.vertices.iter().join(", "))
    }
}

/// Builds a [`Polygon`](crate::util::polygon::Polygon) from three or more vertices.
///
/// ```
/// use geokit::core::prelude::*;
/// let triangle = polygon![
///     Vector2::new(0.0, 0.0),
///     Vector2::new(1.0, 0.0),
///     Vector2::new(0.0, 1.0),
/// ];
/// assert_eq!(triangle.vertex_count(), 3);
/// ```
///
/// Fewer than three vertices do not compile:
///
/// ```compile_fail
/// use geokit::core::prelude::*;
/// let segment = polygon![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
/// ```
#[macro_export]
macro_rules! polygon {
    ($first:expr, $second:expr, $third:expr $(, $rest:expr)* $(,)?) => {
        $crate::util::polygon::Polygon::new($first, $second, $third, [$($rest),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn triangle() -> Polygon {
        polygon![
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 4.0),
        ]
    }

    fn trapezoid() -> Polygon {
        polygon![
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(3.0, 2.0),
            Vector2::new(1.0, 2.0),
        ]
    }

    #[test]
    fn polygon_triangle_measurements() {
        let triangle = triangle();
        assert_eq!(triangle.center(), Vector2::new(4.0 / 3.0, 4.0 / 3.0));
        assert!((triangle.center().x() - 1.333_333).abs() < EPSILON);
        assert!((triangle.area() - 8.0).abs() < EPSILON);
        assert!((triangle.perimeter() - (4.0 + 4.0 + 32.0_f64.sqrt())).abs() < EPSILON);
    }

    #[test]
    fn polygon_from_vertices_requires_three() {
        assert_eq!(
            Polygon::from_vertices(vec![Vector2::zero(), Vector2::new(1.0, 0.0)]),
            Err(GeometryError::TooFewVertices { count: 2 })
        );
        assert_eq!(
            Polygon::from_vertices(Vec::new()),
            Err(GeometryError::TooFewVertices { count: 0 })
        );
        let polygon = Polygon::from_vertices(triangle().vertices().to_vec()).unwrap();
        assert_eq!(polygon, triangle());
        assert!(Polygon::try_from(vec![Vector2::zero()]).is_err());
    }

    #[test]
    fn polygon_vertices_are_counter_clockwise() {
        // Given as a bow tie; ordering turns it back into a square.
        let square = polygon![
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 4.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 4.0),
        ];
        assert!((square.area() - 16.0).abs() < EPSILON);
        assert!((square.perimeter() - 16.0).abs() < EPSILON);
        assert!(vertex_order::signed_double_area(square.vertices()) > 0.0);
        assert_eq!(
            square.vertices(),
            &[
                Vector2::new(0.0, 0.0),
                Vector2::new(4.0, 0.0),
                Vector2::new(4.0, 4.0),
                Vector2::new(0.0, 4.0),
            ]
        );
    }

    #[test]
    fn polygon_equality_ignores_input_order() {
        let a = trapezoid();
        let b = polygon![
            Vector2::new(1.0, 2.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(3.0, 2.0),
        ];
        assert_eq!(a, b);
        assert_ne!(a, triangle());
    }

    #[test]
    fn polygon_add_vertex() {
        let mut polygon = triangle();
        polygon.add_vertex(Vector2::new(4.0, 4.0));
        assert_eq!(polygon.vertex_count(), 4);
        assert!((polygon.area() - 16.0).abs() < EPSILON);
        assert!((polygon.perimeter() - 16.0).abs() < EPSILON);
        assert_eq!(polygon.center(), Vector2::new(2.0, 2.0));

        polygon
            .add_vertex(Vector2::new(2.0, -1.0))
            .add_vertex(Vector2::new(5.0, 2.0));
        assert_eq!(polygon.vertex_count(), 6);
        assert!((polygon.area() - 20.0).abs() < EPSILON);
    }

    #[test]
    fn polygon_keeps_duplicate_vertices() {
        let polygon = polygon![
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 4.0),
        ];
        assert_eq!(polygon.vertex_count(), 4);
        assert!((polygon.area() - 8.0).abs() < EPSILON);
    }

    #[test]
    fn polygon_move_with() {
        let mut polygon = triangle();
        polygon.move_with(&Vector2::new(1.0, -2.0));
        assert_eq!(
            polygon,
            polygon![
                Vector2::new(1.0, -2.0),
                Vector2::new(5.0, -2.0),
                Vector2::new(1.0, 2.0),
            ]
        );
    }

    #[test]
    fn polygon_move_to_places_center() {
        let mut polygon = trapezoid();
        polygon.move_to(&Vector2::new(-5.0, 7.0));
        assert_eq!(polygon.center(), Vector2::new(-5.0, 7.0));
        assert!((polygon.area() - 6.0).abs() < EPSILON);
        assert_eq!(polygon.vertices()[0], Vector2::new(-7.0, 6.0));
    }

    #[test]
    fn polygon_area_centroid() {
        let trapezoid = trapezoid();
        assert!((trapezoid.area() - 6.0).abs() < EPSILON);
        assert_eq!(trapezoid.center(), Vector2::new(2.0, 1.0));
        assert_eq!(trapezoid.area_centroid(), Some(Vector2::new(2.0, 8.0 / 9.0)));

        let collinear = polygon![
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
        ];
        assert_eq!(collinear.area_centroid(), None);
    }

    #[test]
    fn polygon_display() {
        assert_eq!(
            triangle().to_string(),
            "polygon[vec(0, 0), vec(4, 0), vec(0, 4)]"
        );
    }

    #[test]
    fn polygon_bincode() {
        let polygon = trapezoid();
        let bytes = bincode::serialize(&polygon).unwrap();
        let decoded: Polygon = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, polygon);

        let too_short = bincode::serialize(&vec![Vector2::zero(), Vector2::new(1.0, 1.0)]).unwrap();
        assert!(bincode::deserialize::<Polygon>(&too_short).is_err());
    }

    fn square_vertices() -> Vec<Vector2> {
        vec![
            Vector2::new(-1.0, -1.0),
            Vector2::new(3.0, -1.0),
            Vector2::new(3.0, 3.0),
            Vector2::new(-1.0, 3.0),
            Vector2::new(1.0, -1.0),
        ]
    }

    proptest! {
        #[test]
        fn ordering_is_independent_of_input_order(
            vertices in Just(square_vertices()).prop_shuffle()
        ) {
            let polygon = Polygon::from_vertices(vertices).unwrap();
            prop_assert!((polygon.area() - 16.0).abs() < EPSILON);
            prop_assert!((polygon.perimeter() - 16.0).abs() < EPSILON);
            prop_assert_eq!(polygon, Polygon::from_vertices(square_vertices()).unwrap());
        }

        #[test]
        fn translation_preserves_measurements(dx in -1e3..1e3f64, dy in -1e3..1e3f64) {
            let mut polygon = trapezoid();
            polygon.move_with(&Vector2::new(dx, dy));
            prop_assert!((polygon.area() - 6.0).abs() < 1e-6 * 1e3);
            prop_assert!((polygon.perimeter() - trapezoid().perimeter()).abs() < EPSILON);
            prop_assert_eq!(polygon.center(), Vector2::new(2.0 + dx, 1.0 + dy));
        }
    }
}
