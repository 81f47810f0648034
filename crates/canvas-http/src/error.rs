use tower::timeout::error::Elapsed;

/// Failures raised while sending a request or reading its response
#[derive(thiserror::Error, Debug)]
pub enum HttpServiceError {
    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    TimedOut,
    /// The response body could not be decoded
    #[error("Decode error: {:?}", .0)]
    Decode(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Reading or writing a body failed
    #[error("Body error: {:?}", .0)]
    Body(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The connection could not be established
    #[error("Connect error: {:?}", .0)]
    Connect(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// Anything else
    #[error("Unexpected HTTP error: {:?}", .0)]
    Unexpected(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl HttpServiceError {
    /// Whether the connection could not be established
    pub const fn is_connect(&self) -> bool {
        matches!(self, HttpServiceError::Connect(_))
    }
    /// Whether the request timed out
    pub const fn is_timeout(&self) -> bool {
        matches!(self, HttpServiceError::TimedOut)
    }
    /// Whether the response could not be decoded
    pub const fn is_decode(&self) -> bool {
        matches!(self, HttpServiceError::Decode(_))
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for HttpServiceError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        if err.is::<Elapsed>() {
            return HttpServiceError::TimedOut;
        }
        match err.downcast::<reqwest::Error>() {
            Ok(err) => HttpServiceError::from(*err),
            Err(err) => match err.downcast::<HttpServiceError>() {
                Ok(err) => *err,
                Err(err) => HttpServiceError::Unexpected(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;

    type BoxError = Box<dyn std::error::Error + Send + Sync>;

    #[rstest]
    #[case::elapsed(Box::new(Elapsed::new()), HttpServiceError::is_timeout)]
    #[case::already_mapped(
        Box::new(HttpServiceError::Connect(Box::new(io::Error::other("refused")))),
        HttpServiceError::is_connect
    )]
    #[case::unknown(
        Box::new(io::Error::other("boom")),
        |err: &HttpServiceError| matches!(err, HttpServiceError::Unexpected(_))
    )]
    fn boxed_errors_map_to_their_variant(
        #[case] err: BoxError,
        #[case] expected: fn(&HttpServiceError) -> bool,
    ) {
        let mapped = HttpServiceError::from(err);
        assert_that!(expected(&mapped)).is_true();
    }
}
