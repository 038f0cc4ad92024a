use crate::error::Result;
use crate::frame::MacAddress;

/// A network interface resolved to the facts needed to send on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceHandle {
    pub name: String,
    pub index: u32,
    pub hardware_address: MacAddress,
}

/// Read-only lookups against the host's interface table.
pub trait InterfaceResolver {
    /// Numeric index of the interface called `name`.
    fn resolve_index(&self, name: &str) -> Result<u32>;

    /// Hardware address of the interface called `name`.
    fn resolve_hardware_address(&self, name: &str) -> Result<MacAddress>;

    /// Resolve both facts, stopping at the first failure.
    fn resolve(&self, name: &str) -> Result<InterfaceHandle> {
        let index = self.resolve_index(name)?;
        let hardware_address = self.resolve_hardware_address(name)?;
        tracing::debug!(interface = name, index, mac = %hardware_address, "resolved interface");
        Ok(InterfaceHandle {
            name: name.to_string(),
            index,
            hardware_address,
        })
    }
}

impl<R: InterfaceResolver + ?Sized> InterfaceResolver for &R {
    fn resolve_index(&self, name: &str) -> Result<u32> {
        (**self).resolve_index(name)
    }

    fn resolve_hardware_address(&self, name: &str) -> Result<MacAddress> {
        (**self).resolve_hardware_address(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use std::cell::Cell;

    struct HalfKnown {
        hw_calls: Cell<usize>,
    }

    impl InterfaceResolver for HalfKnown {
        fn resolve_index(&self, name: &str) -> Result<u32> {
            match name {
                "eth0" | "tun0" => Ok(3),
                _ => Err(Error::interface_not_found(name)),
            }
        }

        fn resolve_hardware_address(&self, name: &str) -> Result<MacAddress> {
            self.hw_calls.set(self.hw_calls.get() + 1);
            match name {
                "eth0" => Ok(MacAddress([2, 0, 0, 0, 0, 1])),
                _ => Err(Error::lookup_failed(
                    name,
                    std::io::Error::other("no link address"),
                )),
            }
        }
    }

    #[test]
    fn resolve_combines_both_lookups() {
        let resolver = HalfKnown {
            hw_calls: Cell::new(0),
        };
        let handle = resolver.resolve("eth0").unwrap();
        assert_eq!(
            handle,
            InterfaceHandle {
                name: "eth0".to_string(),
                index: 3,
                hardware_address: MacAddress([2, 0, 0, 0, 0, 1]),
            }
        );
    }

    #[test]
    fn resolve_stops_at_first_failure() {
        let resolver = HalfKnown {
            hw_calls: Cell::new(0),
        };
        let err = resolver.resolve("wlan7").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InterfaceNotFound);
        assert_eq!(resolver.hw_calls.get(), 0);
    }

    #[test]
    fn resolve_reports_hardware_lookup_failure() {
        let resolver = HalfKnown {
            hw_calls: Cell::new(0),
        };
        let err = resolver.resolve("tun0").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LookupFailed);
    }
}
