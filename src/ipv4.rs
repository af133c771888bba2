//! A packed IPv4 header built from network integers, as an overlay for raw packet memory.

use super::endian::*;
use super::rawstruct::*;

use bytes::BytesMut;
use enum_primitive::FromPrimitive;

use std::io;
use std::net::Ipv4Addr;

pub const IPV4_VERSION: u8 = 4;

/// Header length in 32-bit words when there are no options.
pub const IPV4_MIN_IHL: u8 = 5;

enum_from_primitive! {
    #[repr(u8)]
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub enum Protocol {
        Icmp = 1,
        Igmp = 2,
        Tcp = 6,
        Udp = 17,
    }
}

#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ipv4Header {
    /// version (high nibble) + header length in words (low nibble)
    pub vhl: u8,
    pub tos: u8,
    pub len: NetworkU16,
    pub id: NetworkU16,
    /// flags + fragment offset
    pub frag: NetworkU16,
    pub ttl: u8,
    pub proto: u8,
    pub csum: NetworkU16,
    pub sa: NetworkU32,
    pub da: NetworkU32,
}

unsafe impl Plain for Ipv4Header {}

impl Ipv4Header {
    /// A zeroed IPv4 header with no options.
    pub fn new() -> Ipv4Header {
        Ipv4Header {
            vhl: (IPV4_VERSION << 4) | IPV4_MIN_IHL,
            ..Default::default()
        }
    }

    pub fn version(&self) -> u8 {
        self.vhl >> 4
    }

    /// Header length in bytes.
    pub fn header_len(&self) -> usize {
        (self.vhl & 0x0f) as usize * 4
    }

    pub fn protocol(&self) -> Option<Protocol> {
        Protocol::from_u8(self.proto)
    }

    pub fn set_protocol(&mut self, protocol: Protocol) {
        self.proto = protocol as u8;
    }

    pub fn source(&self) -> Ipv4Addr {
        self.sa.into()
    }

    pub fn set_source(&mut self, addr: Ipv4Addr) {
        self.sa = addr.into();
    }

    pub fn destination(&self) -> Ipv4Addr {
        self.da.into()
    }

    pub fn set_destination(&mut self, addr: Ipv4Addr) {
        self.da = addr.into();
    }

    /// Overlay a header onto the front of `buf`. Options and payload are left alone.
    pub fn read(buf: &[u8]) -> io::Result<Ipv4Header> {
        let header: Ipv4Header = from_bytes(buf)?;
        if header.version() != IPV4_VERSION {
            let msg = format!("unexpected IP version {}", header.version());
            error!("{}", msg);
            return Err(io::Error::new(io::ErrorKind::InvalidData, msg));
        }
        debug!("ipv4 header: {} -> {}, id {:#x}, {:?}",
               header.source(), header.destination(), header.id.get(), header.protocol());
        Ok(header)
    }

    /// Append the raw header bytes to `buf`.
    pub fn write(&self, buf: &mut BytesMut) {
        buf.extend_from_slice(as_bytes(self));
    }
}
