use crate::core::config::MIN_POLYGON_VERTICES;

/// Errors raised by geometric queries that have no defined answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// The heading of a zero-length vector is undefined.
    #[error("{operation}() is undefined for a null vector")]
    NullVector { operation: &'static str },
    #[error("a polygon needs at least {min} vertices, got {count}", min = MIN_POLYGON_VERTICES)]
    TooFewVertices { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = GeometryError::NullVector {
            operation: "sin_theta",
        };
        assert_eq!(e.to_string(), "sin_theta() is undefined for a null vector");
        let e = GeometryError::TooFewVertices { count: 2 };
        assert_eq!(e.to_string(), "a polygon needs at least 3 vertices, got 2");
    }

    #[test]
    fn converts_into_anyhow() {
        fn fails() -> anyhow::Result<()> {
            Err(GeometryError::TooFewVertices { count: 0 })?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeometryError>(),
            Some(&GeometryError::TooFewVertices { count: 0 })
        );
    }
}
