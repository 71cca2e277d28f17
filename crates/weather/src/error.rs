//! Error types for the orrery-weather crate.

/// Error type for all fallible operations in the orrery-weather crate.
///
/// Weather generation itself never fails; missing climate data falls back
/// to clear skies and a mild default range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeatherError {
    /// Returned when a climate zone id is not defined by the calendar.
    #[error("unknown climate zone: {id:?}")]
    UnknownZone {
        /// The requested zone id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_zone() {
        let err = WeatherError::UnknownZone {
            id: "tundra".to_string(),
        };
        assert_eq!(err.to_string(), "unknown climate zone: \"tundra\"");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WeatherError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WeatherError>();
    }
}
