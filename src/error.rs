//! Error types and result alias for the crate.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// Scan body ended before the configured number of samples.
    #[error("scan truncated: expected {expected} samples, got {got}")]
    Format { expected: usize, got: usize },

    #[error("volume dimensions must be positive, got {0}x{1}x{2}")]
    Dimensions(usize, usize, usize),

    #[error("{what} must lie in [0,1], got {value}")]
    Domain { what: &'static str, value: f32 },

    #[error("box extents must be positive, got {width}x{height}")]
    DegenerateBox { width: f32, height: f32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Checks a parameter against the [0,1] domain. NaN is rejected too.
pub(crate) fn ensure_unit(what: &'static str, value: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::Domain { what, value });
    }
    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn unit_bounds_accepted() {
        assert!(ensure_unit("p", 0.0).is_ok());
        assert!(ensure_unit("p", 1.0).is_ok());
        assert!(ensure_unit("p", 0.37).is_ok());
    }

    #[test]
    fn outside_unit_rejected() {
        assert!(matches!(
            ensure_unit("p", -0.01),
            Err(Error::Domain { what: "p", .. })
        ));
        assert!(ensure_unit("p", 1.2).is_err());
    }

    #[test]
    fn nan_rejected() {
        assert!(ensure_unit("p", f32::NAN).is_err());
    }
}
