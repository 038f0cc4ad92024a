use rawcast_core::{Error, FrameChannel, InterfaceResolver, LinkLayer, MacAddress, Result};
use std::io;

fn unsupported() -> io::Error {
    io::Error::new(
        io::ErrorKind::Unsupported,
        "raw packet sockets are only implemented on Linux",
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PacketLink;

impl LinkLayer for PacketLink {
    type Channel = PacketSocket;

    fn open_channel(&self) -> Result<PacketSocket> {
        Err(Error::ChannelUnavailable(unsupported()))
    }
}

/// Never constructed off Linux.
pub struct PacketSocket {
    _private: (),
}

impl FrameChannel for PacketSocket {
    fn transmit(&mut self, _frame: &[u8], _: u32, _: MacAddress) -> io::Result<usize> {
        Err(unsupported())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl InterfaceResolver for SystemResolver {
    fn resolve_index(&self, name: &str) -> Result<u32> {
        Err(Error::lookup_failed(name, unsupported()))
    }

    fn resolve_hardware_address(&self, name: &str) -> Result<MacAddress> {
        Err(Error::lookup_failed(name, unsupported()))
    }
}
