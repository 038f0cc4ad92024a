use crate::channel::{self, LinkLayer, TransmissionResult};
use crate::error::Result;
use crate::frame::EthernetFrame;
use crate::interface::{InterfaceHandle, InterfaceResolver};

/// Outcome of a completed broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BroadcastReport {
    pub interface: InterfaceHandle,
    pub transmission: TransmissionResult,
}

/// One-shot pipeline that resolves an interface and broadcasts one frame on it.
pub struct Broadcaster<R, L> {
    resolver: R,
    link: L,
}

impl<R: InterfaceResolver, L: LinkLayer> Broadcaster<R, L> {
    pub fn new(resolver: R, link: L) -> Self {
        Self { resolver, link }
    }

    /// Resolve `interface` and build the frame that would be sent on it,
    /// without touching the link layer.
    pub fn prepare(
        &self,
        interface: &str,
        payload: &[u8],
    ) -> Result<(InterfaceHandle, EthernetFrame)> {
        let frame = EthernetFrame::broadcast(payload)?;
        let handle = self.resolver.resolve(interface)?;
        Ok(stamp(handle, frame))
    }

    /// Broadcast `payload` on `interface`.
    ///
    /// The payload is validated before any channel is opened. Once open, the
    /// channel is dropped on every return path.
    pub fn run(&self, interface: &str, payload: &[u8]) -> Result<BroadcastReport> {
        let frame = EthernetFrame::broadcast(payload)?;

        let mut channel = self.link.open_channel().inspect_err(|e| {
            tracing::warn!(error = %e, "could not open link-layer channel");
        })?;

        let handle = self.resolver.resolve(interface)?;
        let (interface, frame) = stamp(handle, frame);
        tracing::debug!(len = frame.wire_len(), "frame ready\n{}", frame.hex_dump());

        let transmission =
            channel::send(&mut channel, &frame, interface.index).inspect_err(|e| {
                tracing::warn!(interface = %interface.name, error = %e, "transmission failed");
            })?;
        tracing::info!(
            interface = %interface.name,
            bytes = transmission.sent,
            "frame broadcast"
        );

        Ok(BroadcastReport {
            interface,
            transmission,
        })
    }
}

fn stamp(handle: InterfaceHandle, frame: EthernetFrame) -> (InterfaceHandle, EthernetFrame) {
    let frame = frame.with_source(handle.hardware_address);
    (handle, frame)
}
