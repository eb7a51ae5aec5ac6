#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, trace, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    polygon,
    util::{
        assert::*,
        error::GeometryError,
        gg_float,
        linalg,
        linalg::Vector2,
        polygon::Polygon,
        rect::Rect,
        shape::{AnyShape, Movable, Shape},
    },
};
