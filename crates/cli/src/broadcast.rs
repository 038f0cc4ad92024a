//! Resolve the interface, then send (or with `--dry-run`, only dump) the frame.

use rawcast_core::{Broadcaster, InterfaceResolver, LinkLayer, Result};

pub struct BroadcastArgs<'a> {
    pub interface: &'a str,
    pub payload: &'a [u8],
    pub dry_run: bool,
}

pub fn run<R, L>(broadcaster: &Broadcaster<R, L>, args: BroadcastArgs<'_>) -> Result<String>
where
    R: InterfaceResolver,
    L: LinkLayer,
{
    if args.dry_run {
        let (interface, frame) = broadcaster.prepare(args.interface, args.payload)?;
        return Ok(format!(
            "would send {} bytes on {} (index {}) from {}\n{}",
            frame.wire_len(),
            interface.name,
            interface.index,
            interface.hardware_address,
            frame.hex_dump()
        ));
    }

    let report = broadcaster.run(args.interface, args.payload)?;
    Ok(format!(
        "sent {} bytes on {} (index {}) from {}",
        report.transmission.sent,
        report.interface.name,
        report.interface.index,
        report.interface.hardware_address
    ))
}
