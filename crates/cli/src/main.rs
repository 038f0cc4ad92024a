mod broadcast;
mod exit;

use broadcast::BroadcastArgs;
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use rawcast_core::{Broadcaster, Error, ErrorKind};
use rawcast_net::{PacketLink, SystemResolver};
use std::ffi::{OsStr, OsString};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = "\
<INTERFACE> is the human readable name of the system's ethernet interface.
Get the name with \"ip link\" or \"ifconfig\".
<DATA> is sent as-is as the frame payload, at most 1500 bytes.

Example:
  $ rawcast eth0 \"Hello World!\"";

#[derive(Parser, Debug)]
#[command(name = "rawcast")]
#[command(about = "Broadcast one raw ethernet frame on a network interface")]
#[command(version, after_help = AFTER_HELP)]
struct Cli {
    /// Interface to send on (e.g. eth0)
    interface: String,

    /// Payload bytes to broadcast
    data: OsString,

    /// Resolve the interface and print the frame without sending it
    #[arg(long, short = 'n')]
    dry_run: bool,

    /// Log resolved interface details and the outgoing frame
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(exit::code(ErrorKind::Usage));
        }
    };

    init_tracing(cli.verbose);

    let payload = payload_bytes(&cli.data);
    tracing::debug!(
        interface = %cli.interface,
        payload_len = payload.len(),
        dry_run = cli.dry_run,
        "parsed arguments"
    );
    let broadcaster = Broadcaster::new(SystemResolver, PacketLink);
    let args = BroadcastArgs {
        interface: &cli.interface,
        payload: &payload,
        dry_run: cli.dry_run,
    };

    match broadcast::run(&broadcaster, args) {
        Ok(summary) => {
            println!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::from(exit::code(e.kind()))
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "rawcast=debug,rawcast_core=debug,rawcast_net=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(e: &Error) {
    eprintln!("error: {e}");
    if e.kind() == ErrorKind::PermissionDenied {
        eprintln!(
            "hint: raw sockets need elevated privileges; try running with sudo or grant CAP_NET_RAW"
        );
    }
}

#[cfg(unix)]
fn payload_bytes(data: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    data.as_bytes().to_vec()
}

#[cfg(not(unix))]
fn payload_bytes(data: &OsStr) -> Vec<u8> {
    data.to_string_lossy().into_owned().into_bytes()
}
