pub const EPSILON: f64 = 1e-6;
pub const MIN_POLYGON_VERTICES: usize = 3;
