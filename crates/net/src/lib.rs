//! OS collaborators for rawcast: a raw packet socket and interface lookups.

#[cfg(target_os = "linux")]
mod packet_socket;
#[cfg(target_os = "linux")]
mod resolver;
#[cfg(not(target_os = "linux"))]
mod unsupported;

#[cfg(target_os = "linux")]
pub use packet_socket::{PacketLink, PacketSocket};
#[cfg(target_os = "linux")]
pub use resolver::SystemResolver;
#[cfg(not(target_os = "linux"))]
pub use unsupported::{PacketLink, PacketSocket, SystemResolver};
