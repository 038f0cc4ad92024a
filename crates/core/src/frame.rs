use crate::error::{Error, Result};
use std::fmt;

/// Length of a hardware (MAC) address in bytes.
pub const MAC_LEN: usize = 6;

/// Ethernet header: destination, source and length fields.
pub const HEADER_LEN: usize = 14;

/// Largest payload a standard Ethernet II frame may carry.
pub const MAX_PAYLOAD_LEN: usize = 1500;

const DESTINATION: std::ops::Range<usize> = 0..6;
const SOURCE: std::ops::Range<usize> = 6..12;
const LENGTH: std::ops::Range<usize> = 12..14;

/// A 6-byte hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddress(pub [u8; MAC_LEN]);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress([0xff; MAC_LEN]);
    pub const ZERO: MacAddress = MacAddress([0x00; MAC_LEN]);

    pub fn octets(&self) -> [u8; MAC_LEN] {
        self.0
    }

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }
}

impl From<[u8; MAC_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_LEN]) -> Self {
        MacAddress(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

/// An Ethernet II frame whose third header field holds the payload length.
///
/// The frame is stored as the exact bytes that go on the wire: header followed
/// by the payload, with no padding and no frame check sequence. Header fields
/// are read and written at fixed offsets.
#[derive(Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    buf: Vec<u8>,
}

impl EthernetFrame {
    /// Lay out a frame addressed to `destination` carrying `payload`.
    ///
    /// The source address stays zeroed until [`set_source`](Self::set_source).
    /// Payloads longer than [`MAX_PAYLOAD_LEN`] are rejected.
    pub fn build(payload: &[u8], destination: MacAddress) -> Result<Self> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge { len: payload.len() });
        }

        let mut buf = vec![0u8; HEADER_LEN + payload.len()];
        buf[DESTINATION].copy_from_slice(&destination.0);
        // Checked above: fits in a u16.
        buf[LENGTH].copy_from_slice(&(payload.len() as u16).to_be_bytes());
        buf[HEADER_LEN..].copy_from_slice(payload);

        Ok(Self { buf })
    }

    /// Build a frame addressed to the broadcast address.
    pub fn broadcast(payload: &[u8]) -> Result<Self> {
        Self::build(payload, MacAddress::BROADCAST)
    }

    pub fn set_source(&mut self, address: MacAddress) {
        self.buf[SOURCE].copy_from_slice(&address.0);
    }

    pub fn with_source(mut self, address: MacAddress) -> Self {
        self.set_source(address);
        self
    }

    pub fn destination(&self) -> MacAddress {
        MacAddress(self.field(DESTINATION))
    }

    pub fn source(&self) -> MacAddress {
        MacAddress(self.field(SOURCE))
    }

    /// The length field decoded from network byte order.
    pub fn length_field(&self) -> u16 {
        u16::from_be_bytes([self.buf[LENGTH.start], self.buf[LENGTH.start + 1]])
    }

    pub fn payload(&self) -> &[u8] {
        &self.buf[HEADER_LEN..]
    }

    /// Bytes handed to the link layer: header plus payload.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn wire_len(&self) -> usize {
        self.buf.len()
    }

    /// Offset-prefixed hex dump, 16 bytes per line.
    pub fn hex_dump(&self) -> String {
        let mut out = String::new();
        for (line, chunk) in self.buf.chunks(16).enumerate() {
            if line > 0 {
                out.push('\n');
            }
            out.push_str(&format!("{:04x}:", line * 16));
            for b in chunk {
                out.push_str(&format!(" {b:02x}"));
            }
        }
        out
    }

    fn field(&self, range: std::ops::Range<usize>) -> [u8; MAC_LEN] {
        let mut octets = [0u8; MAC_LEN];
        octets.copy_from_slice(&self.buf[range]);
        octets
    }
}

impl fmt::Debug for EthernetFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EthernetFrame")
            .field("destination", &format_args!("{}", self.destination()))
            .field("source", &format_args!("{}", self.source()))
            .field("length", &self.length_field())
            .finish_non_exhaustive()
    }
}
