//! Process exit codes, one per failure stage (sysexits.h values).

use rawcast_core::ErrorKind;

pub const USAGE: u8 = 64;
pub const DATA_ERR: u8 = 65;
pub const NO_HOST: u8 = 68;
pub const UNAVAILABLE: u8 = 69;
pub const OS_ERR: u8 = 71;
pub const IO_ERR: u8 = 74;
pub const TEMP_FAIL: u8 = 75;
pub const NO_PERM: u8 = 77;

pub fn code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Usage => USAGE,
        ErrorKind::PayloadTooLarge => DATA_ERR,
        ErrorKind::InterfaceNotFound => NO_HOST,
        ErrorKind::ChannelUnavailable => UNAVAILABLE,
        ErrorKind::LookupFailed => OS_ERR,
        ErrorKind::SendFailed => IO_ERR,
        ErrorKind::PartialTransmission => TEMP_FAIL,
        ErrorKind::PermissionDenied => NO_PERM,
    }
}
