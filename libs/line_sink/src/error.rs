#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("non-ASCII byte at position {position} in message")]
    NonAscii { position: usize },

    #[error("syslog facility error: {0}")]
    Facility(String),

    #[error("sink closed")]
    Closed,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SinkError {
    /// Create a transport I/O error
    pub fn io(msg: impl Into<String>) -> Self {
        SinkError::Io(msg.into())
    }

    /// Create an encoding error for the first offending byte
    pub fn non_ascii(position: usize) -> Self {
        SinkError::NonAscii { position }
    }

    /// Create a facility error
    pub fn facility(msg: impl Into<String>) -> Self {
        SinkError::Facility(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        SinkError::InvalidConfig(msg.into())
    }

    /// Check if this is a transport failure (stream or socket write)
    pub fn is_transport(&self) -> bool {
        matches!(self, SinkError::Io(_) | SinkError::Closed)
    }

    /// Check if this is an encoding failure
    pub fn is_encoding(&self) -> bool {
        matches!(self, SinkError::NonAscii { .. })
    }

    /// Check if this is a facility failure
    pub fn is_facility(&self) -> bool {
        matches!(self, SinkError::Facility(_))
    }

    /// Check if this is a configuration failure
    pub fn is_config(&self) -> bool {
        matches!(self, SinkError::InvalidConfig(_))
    }
}

impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let io_err = SinkError::io("connection reset");
        assert!(io_err.is_transport());
        assert!(!io_err.is_encoding());

        assert!(SinkError::Closed.is_transport());

        let enc_err = SinkError::non_ascii(7);
        assert!(enc_err.is_encoding());
        assert!(!enc_err.is_transport());

        let fac_err = SinkError::facility("permission denied");
        assert!(fac_err.is_facility());
        assert!(!fac_err.is_transport());

        let cfg_err = SinkError::invalid_config("missing path");
        assert!(cfg_err.is_config());
    }

    #[test]
    fn test_error_display() {
        let err = SinkError::non_ascii(12);
        assert_eq!(err.to_string(), "non-ASCII byte at position 12 in message");

        let err = SinkError::io("broken pipe");
        assert_eq!(err.to_string(), "I/O error: broken pipe");

        assert_eq!(SinkError::Closed.to_string(), "sink closed");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe");
        let err: SinkError = io_err.into();

        assert!(err.is_transport());
        assert!(err.to_string().contains("broken pipe"));
    }
}
