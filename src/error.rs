//! The error type shared by the collision simulator and the utility model.

/// Errors raised when the inputs to a simulation or utility calculation are invalid.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A vehicle length or width was not strictly positive.
    InvalidDimension(&'static str),
    /// A position, velocity or dimension was NaN or infinite.
    NonFinite(&'static str),
    /// A model parameter was outside of its valid range.
    InvalidParameter(&'static str),
    /// The ego vehicle is not moving, so there is no braking decision to make.
    StationaryEgo,
    /// Neither action has any utility, so their relative preference is undefined.
    NoUtility,
    /// A scenario document could not be parsed.
    Config(String),
}

/// A specialised `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidDimension(what) => write!(f, "Invalid vehicle dimension: {}", what),
            Error::NonFinite(what) => write!(f, "Non-finite input: {}", what),
            Error::InvalidParameter(what) => write!(f, "Invalid parameter: {}", what),
            Error::StationaryEgo => write!(f, "The ego vehicle is stationary"),
            Error::NoUtility => write!(f, "Neither action has any utility"),
            Error::Config(msg) => write!(f, "Invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Checks that `value` is finite.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        log::warn!("rejected non-finite {}: {}", what, value);
        Err(Error::NonFinite(what))
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(value: f64, what: &'static str) -> Result<()> {
    ensure_finite(value, what)?;
    if value > 0.0 {
        Ok(())
    } else {
        log::warn!("rejected non-positive {}: {}", what, value);
        Err(Error::InvalidParameter(what))
    }
}

/// Checks that `value` is finite and not negative.
pub(crate) fn ensure_non_negative(value: f64, what: &'static str) -> Result<()> {
    ensure_finite(value, what)?;
    if value >= 0.0 {
        Ok(())
    } else {
        log::warn!("rejected negative {}: {}", what, value);
        Err(Error::InvalidParameter(what))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn positive_checks() {
        assert_eq!(ensure_positive(1.0, "x"), Ok(()));
        assert_eq!(ensure_positive(0.0, "x"), Err(Error::InvalidParameter("x")));
        assert_eq!(ensure_positive(f64::NAN, "x"), Err(Error::NonFinite("x")));
        assert_eq!(ensure_non_negative(0.0, "x"), Ok(()));
        assert_eq!(
            ensure_non_negative(f64::NEG_INFINITY, "x"),
            Err(Error::NonFinite("x"))
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidDimension("length").to_string(),
            "Invalid vehicle dimension: length"
        );
        assert_eq!(Error::StationaryEgo.to_string(), "The ego vehicle is stationary");
    }
}
