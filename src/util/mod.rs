use crate::core::prelude::*;

use tracing_subscriber::fmt::time::OffsetTime;

pub mod assert;
pub mod error;
pub mod linalg;
pub mod polygon;
pub mod rect;
pub mod shape;

pub mod gg_float {
    use crate::core::config::EPSILON;
    use num_traits::Zero;

    /// Approximate equality with the crate-wide tolerance.
    pub fn float_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    pub fn is_near_zero(x: f64) -> bool {
        x.abs() <= EPSILON
    }

    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() {
            0.0
        } else {
            x
        }
    }
}

pub mod gg_iter {
    use std::ops::Add;

    pub fn sum_tuple3<T: Add<Output = T>>(acc: (T, T, T), x: (T, T, T)) -> (T, T, T) {
        (acc.0 + x.0, acc.1 + x.1, acc.2 + x.2)
    }
}

/// Installs a `tracing` subscriber that writes to stderr.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    let installed = tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(e) = installed {
        debug!("setup_log(): subscriber already installed: {e}");
    }
    Ok(())
}
