use rawcast_core::{Error, FrameChannel, LinkLayer, MAC_LEN, MacAddress, Result};
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::mem;
use std::os::fd::{AsRawFd, RawFd};

/// Every ethernet protocol, in network byte order as `socket(2)` expects.
const ETH_P_ALL_BE: u16 = (libc::ETH_P_ALL as u16).to_be();

/// Opens [`PacketSocket`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct PacketLink;

impl LinkLayer for PacketLink {
    type Channel = PacketSocket;

    fn open_channel(&self) -> Result<PacketSocket> {
        PacketSocket::open()
    }
}

/// `AF_PACKET` raw socket for sending complete link-layer frames.
///
/// Frames are written as-is: the kernel adds nothing but what the NIC
/// appends (preamble and frame check sequence). Closed on drop.
pub struct PacketSocket {
    socket: Socket,
}

impl PacketSocket {
    /// Open a raw packet socket for all ethernet protocols.
    ///
    /// Requires `CAP_NET_RAW`.
    pub fn open() -> Result<Self> {
        let protocol = Protocol::from(i32::from(ETH_P_ALL_BE));
        let socket =
            Socket::new(Domain::PACKET, Type::RAW, Some(protocol)).map_err(classify_open_error)?;
        tracing::debug!(fd = socket.as_raw_fd(), "opened packet socket");
        Ok(Self { socket })
    }

    /// Get the raw file descriptor (for debugging/logging).
    pub fn as_raw_fd(&self) -> RawFd {
        self.socket.as_raw_fd()
    }
}

impl FrameChannel for PacketSocket {
    fn transmit(
        &mut self,
        frame: &[u8],
        target_index: u32,
        destination: MacAddress,
    ) -> io::Result<usize> {
        let addr = link_address(target_index, destination)?;

        let n = unsafe {
            libc::sendto(
                self.socket.as_raw_fd(),
                frame.as_ptr() as *const libc::c_void,
                frame.len(),
                0,
                &addr as *const libc::sockaddr_ll as *const libc::sockaddr,
                mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            )
        };

        if n < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n as usize)
        }
    }
}

impl Drop for PacketSocket {
    fn drop(&mut self) {
        tracing::debug!(fd = self.socket.as_raw_fd(), "closing packet socket");
    }
}

/// Destination descriptor for `sendto` on a packet socket.
fn link_address(target_index: u32, destination: MacAddress) -> io::Result<libc::sockaddr_ll> {
    let ifindex = i32::try_from(target_index).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("interface index {target_index} out of range"),
        )
    })?;

    let mut addr: libc::sockaddr_ll = unsafe { mem::zeroed() };
    addr.sll_family = libc::AF_PACKET as libc::c_ushort;
    addr.sll_protocol = ETH_P_ALL_BE;
    addr.sll_ifindex = ifindex;
    addr.sll_halen = MAC_LEN as u8;
    addr.sll_addr[..MAC_LEN].copy_from_slice(&destination.octets());
    Ok(addr)
}

fn classify_open_error(err: io::Error) -> Error {
    match err.raw_os_error() {
        Some(libc::EPERM) | Some(libc::EACCES) => Error::PermissionDenied(err),
        _ if err.kind() == io::ErrorKind::PermissionDenied => Error::PermissionDenied(err),
        _ => Error::ChannelUnavailable(err),
    }
}
