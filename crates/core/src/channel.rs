use crate::error::{Error, Result};
use crate::frame::{EthernetFrame, MacAddress};
use std::io;

/// An open raw link-layer transmit handle.
///
/// The underlying OS resource is released when the channel is dropped, so
/// every exit path out of the scope that owns it closes it.
pub trait FrameChannel {
    /// Hand `frame` to the OS for transmission on interface `target_index`,
    /// addressed to `destination`.
    ///
    /// Returns the number of bytes the OS accepted.
    fn transmit(
        &mut self,
        frame: &[u8],
        target_index: u32,
        destination: MacAddress,
    ) -> io::Result<usize>;
}

/// Source of raw link-layer channels.
pub trait LinkLayer {
    type Channel: FrameChannel;

    /// Open a channel able to send frames of any type.
    ///
    /// Fails with [`Error::PermissionDenied`] when the caller lacks the
    /// privilege for raw sockets and [`Error::ChannelUnavailable`] otherwise.
    fn open_channel(&self) -> Result<Self::Channel>;
}

impl<L: LinkLayer + ?Sized> LinkLayer for &L {
    type Channel = L::Channel;

    fn open_channel(&self) -> Result<Self::Channel> {
        (**self).open_channel()
    }
}

/// Bytes accepted by the OS against bytes handed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmissionResult {
    pub sent: usize,
    pub requested: usize,
}

impl TransmissionResult {
    pub fn is_complete(&self) -> bool {
        self.sent == self.requested
    }

    /// Fail unless exactly the requested number of bytes went out.
    pub fn check(self) -> Result<Self> {
        if self.sent < self.requested {
            return Err(Error::PartialTransmission {
                sent: self.sent,
                requested: self.requested,
            });
        }
        if self.sent > self.requested {
            return Err(Error::SendFailed(io::Error::other(format!(
                "OS reported {} bytes sent for a {} byte frame",
                self.sent, self.requested
            ))));
        }
        Ok(self)
    }
}

/// Send `frame` on `channel` to the interface with index `target_index`.
///
/// A partial send is never retried.
pub fn send<C: FrameChannel + ?Sized>(
    channel: &mut C,
    frame: &EthernetFrame,
    target_index: u32,
) -> Result<TransmissionResult> {
    let requested = frame.wire_len();
    let sent = channel
        .transmit(frame.as_bytes(), target_index, frame.destination())
        .map_err(Error::SendFailed)?;

    TransmissionResult { sent, requested }.check()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    /// Accepts a fixed number of bytes per transmit, or fails.
    struct Capped(Option<usize>);

    impl FrameChannel for Capped {
        fn transmit(&mut self, frame: &[u8], _: u32, _: MacAddress) -> io::Result<usize> {
            match self.0 {
                Some(cap) => Ok(cap.min(frame.len())),
                None => Err(io::Error::other("network is down")),
            }
        }
    }

    #[test]
    fn full_send_is_success() {
        let frame = EthernetFrame::broadcast(b"Hello World!").unwrap();
        let result = send(&mut Capped(Some(usize::MAX)), &frame, 2).unwrap();
        assert_eq!(
            result,
            TransmissionResult {
                sent: 26,
                requested: 26
            }
        );
        assert!(result.is_complete());
    }

    #[test]
    fn short_send_is_partial_transmission() {
        let frame = EthernetFrame::broadcast(b"Hello World!").unwrap();
        let err = send(&mut Capped(Some(20)), &frame, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::PartialTransmission {
                sent: 20,
                requested: 26
            }
        ));
    }

    #[test]
    fn zero_byte_send_is_partial_transmission() {
        let frame = EthernetFrame::broadcast(&[]).unwrap();
        let err = send(&mut Capped(Some(0)), &frame, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PartialTransmission);
    }

    #[test]
    fn os_error_is_send_failed() {
        let frame = EthernetFrame::broadcast(b"x").unwrap();
        let err = send(&mut Capped(None), &frame, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SendFailed);
    }

    #[test]
    fn overreported_send_is_not_success() {
        let result = TransmissionResult {
            sent: 30,
            requested: 26,
        };
        assert!(!result.is_complete());
        assert_eq!(result.check().unwrap_err().kind(), ErrorKind::SendFailed);
    }
}
