pub mod broadcast;
pub mod channel;
pub mod error;
pub mod frame;
pub mod interface;

pub use broadcast::{BroadcastReport, Broadcaster};
pub use channel::{FrameChannel, LinkLayer, TransmissionResult, send};
pub use error::{Error, ErrorKind, Result};
pub use frame::{EthernetFrame, HEADER_LEN, MAC_LEN, MAX_PAYLOAD_LEN, MacAddress};
pub use interface::{InterfaceHandle, InterfaceResolver};
