use thiserror::Error;

/// Errors surfaced by the splash engine.
///
/// Rendering itself never fails: missing sprites degrade the frame instead.
#[derive(Debug, Error, PartialEq)]
pub enum SplashError {
    /// Atlas construction produced neither a slot-indexed nor a fallback sprite.
    #[error("no usable splash assets were supplied")]
    EmptyAtlas,
    /// An animation rate could not be parsed as a number.
    #[error("invalid animation rate: {0:?}")]
    InvalidRate(String),
}

pub type Result<T> = std::result::Result<T, SplashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            SplashError::EmptyAtlas.to_string(),
            "no usable splash assets were supplied"
        );
        assert_eq!(
            SplashError::InvalidRate("fast".into()).to_string(),
            "invalid animation rate: \"fast\""
        );
    }
}
