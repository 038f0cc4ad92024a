use nix::errno::Errno;
use nix::ifaddrs::getifaddrs;
use nix::net::if_::if_nametoindex;
use rawcast_core::{Error, InterfaceResolver, MacAddress, Result};
use std::io;

/// Interface lookups against the running kernel.
///
/// The index comes from `if_nametoindex(3)`, the hardware address from the
/// `AF_PACKET` entry `getifaddrs(3)` reports for the interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl InterfaceResolver for SystemResolver {
    fn resolve_index(&self, name: &str) -> Result<u32> {
        check_name(name)?;
        if_nametoindex(name).map_err(|errno| classify_lookup_errno(name, errno))
    }

    fn resolve_hardware_address(&self, name: &str) -> Result<MacAddress> {
        check_name(name)?;
        let addrs = getifaddrs().map_err(|errno| classify_lookup_errno(name, errno))?;

        let mut listed = false;
        for ifaddr in addrs.filter(|ifaddr| ifaddr.interface_name == name) {
            listed = true;
            let mac = ifaddr
                .address
                .as_ref()
                .and_then(|addr| addr.as_link_addr())
                .and_then(|link| link.addr());
            if let Some(mac) = mac {
                return Ok(MacAddress(mac));
            }
        }

        if listed {
            Err(Error::lookup_failed(
                name,
                io::Error::other("interface has no hardware address"),
            ))
        } else {
            Err(Error::interface_not_found(name))
        }
    }
}

/// Reject names the kernel could never have assigned.
fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name.len() >= libc::IFNAMSIZ as usize || name.contains('\0') {
        return Err(Error::interface_not_found(name));
    }
    Ok(())
}

fn classify_lookup_errno(name: &str, errno: Errno) -> Error {
    match errno {
        Errno::ENODEV | Errno::ENXIO => Error::interface_not_found(name),
        other => Error::lookup_failed(name, io::Error::from(other)),
    }
}
