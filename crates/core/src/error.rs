use crate::frame::MAX_PAYLOAD_LEN;

/// Errors that can occur while building or broadcasting a frame.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("payload is {len} bytes, maximum is {max}", max = MAX_PAYLOAD_LEN)]
    PayloadTooLarge { len: usize },

    #[error("interface '{name}' not found")]
    InterfaceNotFound { name: String },

    #[error("lookup of interface '{name}' failed: {source}")]
    LookupFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("raw link-layer channel unavailable: {0}")]
    ChannelUnavailable(#[source] std::io::Error),

    #[error("permission denied opening raw link-layer channel")]
    PermissionDenied(#[source] std::io::Error),

    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    #[error("incomplete transmission: {sent} of {requested} bytes")]
    PartialTransmission { sent: usize, requested: usize },
}

/// Failure stage of a run, one per [`Error`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad command line; produced by the front end before any [`Error`] exists.
    Usage,
    PayloadTooLarge,
    InterfaceNotFound,
    LookupFailed,
    ChannelUnavailable,
    PermissionDenied,
    SendFailed,
    PartialTransmission,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            Error::InterfaceNotFound { .. } => ErrorKind::InterfaceNotFound,
            Error::LookupFailed { .. } => ErrorKind::LookupFailed,
            Error::ChannelUnavailable(_) => ErrorKind::ChannelUnavailable,
            Error::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Error::SendFailed(_) => ErrorKind::SendFailed,
            Error::PartialTransmission { .. } => ErrorKind::PartialTransmission,
        }
    }

    /// Build a lookup error for `name` from an OS error.
    pub fn lookup_failed(name: &str, source: std::io::Error) -> Self {
        Error::LookupFailed {
            name: name.to_string(),
            source,
        }
    }

    pub fn interface_not_found(name: &str) -> Self {
        Error::InterfaceNotFound {
            name: name.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn error_display_payload_too_large() {
        let err = Error::PayloadTooLarge { len: 1501 };
        assert_eq!(err.to_string(), "payload is 1501 bytes, maximum is 1500");
    }

    #[test]
    fn error_display_interface_not_found() {
        let err = Error::interface_not_found("eth9");
        assert_eq!(err.to_string(), "interface 'eth9' not found");
        assert_eq!(err.kind(), ErrorKind::InterfaceNotFound);
    }

    #[test]
    fn error_display_partial_transmission() {
        let err = Error::PartialTransmission {
            sent: 10,
            requested: 26,
        };
        assert_eq!(err.to_string(), "incomplete transmission: 10 of 26 bytes");
    }

    #[test]
    fn error_lookup_failed_keeps_source() {
        let err = Error::lookup_failed("eth0", io::Error::other("ioctl broke"));
        assert_eq!(err.kind(), ErrorKind::LookupFailed);
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "ioctl broke");
    }

    #[test]
    fn error_kinds_are_distinct() {
        let errors = [
            Error::PayloadTooLarge { len: 2000 },
            Error::interface_not_found("a"),
            Error::lookup_failed("a", io::Error::other("b")),
            Error::ChannelUnavailable(io::Error::other("c")),
            Error::PermissionDenied(io::Error::from(io::ErrorKind::PermissionDenied)),
            Error::SendFailed(io::Error::other("d")),
            Error::PartialTransmission {
                sent: 0,
                requested: 14,
            },
        ];
        let kinds: std::collections::HashSet<_> = errors.iter().map(Error::kind).collect();
        assert_eq!(kinds.len(), errors.len());
    }
}
