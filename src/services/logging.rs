//! Error reporting seam for the service layer.

/// Receives failures the services catch before surfacing them.
pub trait ErrorSink {
    fn error(&self, message: &str, detail: &str);
}

/// [`ErrorSink`] writing to the `log` facade at error level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn error(&self, message: &str, detail: &str) {
        log::error!("{message} ({detail})");
    }
}

#[cfg(any(test, feature = "test-mocks"))]
mockall::mock! {
    pub ErrorSink {}

    impl ErrorSink for ErrorSink {
        fn error(&self, message: &str, detail: &str);
    }
}
