use std::borrow::Cow;

/// Failures while installing the portal's tracing subscriber.
#[ahub_derive::ahub_error]
pub enum LoggerError {
    /// The rolling file appender could not be built for the configured directory.
    #[error("Rolling file appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal logger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = LoggerError::InvalidConfiguration {
            message: "max_files must be positive".into(),
            context: Some("logging.max_files".into()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid logger configuration (logging.max_files): max_files must be positive"
        );

        let err = LoggerError::Internal { message: "boom".into(), context: None };
        assert_eq!(err.to_string(), "Internal logger error: boom");
    }
}
