//! Unsigned integers that live in memory in network byte order.
//!
//! `NetworkU16` and `NetworkU32` can be dropped straight into `#[repr(C, packed)]` wire structures
//! and overlaid on packet bytes. Host byte order values only go in and out through explicit
//! conversions, and the arithmetic helpers do their work in host order.

extern crate byteorder;
extern crate bytes;
#[macro_use] extern crate enum_primitive;
#[macro_use] extern crate log;

mod endian;
mod hexdump;
mod ipv4;
pub mod rawstruct;

pub use endian::{HostInt, NetworkInt, NetworkU16, NetworkU32};
pub use hexdump::{memdump, BoundedBuf, HexDump, Spaced};
pub use ipv4::{Ipv4Header, Protocol, IPV4_MIN_IHL, IPV4_VERSION};
