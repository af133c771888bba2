//! These types prevent accidentally interpreting a network byte order integer as host byte order.
//!
//! A `NetworkInt` holds nothing but its big-endian bytes, so it has an alignment of 1 and can sit
//! at any offset inside a packed wire structure. The host value is only reachable through `get`
//! and `set`, and the arithmetic helpers decode, operate in host order, and encode again.

use super::hexdump::{BoundedBuf, Spaced};
use super::rawstruct::{self, Plain};

use byteorder::{ByteOrder, NetworkEndian};

use std::fmt::{self, Write};
use std::hash::Hash;
use std::io;
use std::net::Ipv4Addr;

mod sealed {
    pub trait Sealed {}
}

/// A host integer type that has a network byte order counterpart.
///
/// Implemented for `u16` and `u32` only.
pub trait HostInt: sealed::Sealed + Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::LowerHex {
    /// The stored representation: a byte array of exactly `BYTES` bytes.
    type Bytes: Copy + Default + Eq + Ord + Hash + AsRef<[u8]> + AsMut<[u8]>;

    /// Width in bytes.
    const BYTES: usize;

    fn decode(bytes: &[u8]) -> Self;
    fn encode(self, bytes: &mut [u8]);
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! host_int {
    ($t:ty, $n:expr, $read:ident, $write:ident) => {
        impl sealed::Sealed for $t {}

        impl HostInt for $t {
            type Bytes = [u8; $n];

            const BYTES: usize = $n;

            fn decode(bytes: &[u8]) -> $t {
                NetworkEndian::$read(bytes)
            }

            fn encode(self, bytes: &mut [u8]) {
                NetworkEndian::$write(bytes, self)
            }

            fn wrapping_add(self, rhs: $t) -> $t {
                <$t>::wrapping_add(self, rhs)
            }

            fn wrapping_sub(self, rhs: $t) -> $t {
                <$t>::wrapping_sub(self, rhs)
            }
        }

        impl From<NetworkInt<$t>> for $t {
            fn from(n: NetworkInt<$t>) -> $t {
                n.get()
            }
        }
    };
}

host_int!(u16, 2, read_u16, write_u16);
host_int!(u32, 4, read_u32, write_u32);

/// An unsigned integer whose in-memory representation is always network byte order.
///
/// Equality, hashing and ordering work on the stored bytes. Because the bytes are big-endian,
/// comparing them lexicographically gives the same answer as comparing the host values.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkInt<T: HostInt> {
    bytes: T::Bytes,
}

pub type NetworkU16 = NetworkInt<u16>;
pub type NetworkU32 = NetworkInt<u32>;

// repr(transparent) over `[u8; N]`: no padding, alignment 1, every bit pattern valid.
unsafe impl<T: HostInt> Plain for NetworkInt<T> {}

impl<T: HostInt> NetworkInt<T> {
    /// Encode a host byte order value.
    pub fn new(host: T) -> NetworkInt<T> {
        let mut out = NetworkInt::default();
        out.set(host);
        out
    }

    /// Wrap bytes that are already in network byte order.
    pub fn from_bytes(bytes: T::Bytes) -> NetworkInt<T> {
        NetworkInt { bytes }
    }

    /// Read the first `T::BYTES` bytes of `bytes` as a network byte order value.
    pub fn from_slice(bytes: &[u8]) -> io::Result<NetworkInt<T>> {
        rawstruct::from_bytes(bytes)
    }

    pub fn to_bytes(&self) -> T::Bytes {
        self.bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// Direct access to the storage, for code that produces network byte order output itself
    /// (an address parser, a `read` from a socket).
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes.as_mut()
    }

    /// The value in host byte order.
    pub fn get(&self) -> T {
        T::decode(self.bytes.as_ref())
    }

    /// Store a host byte order value.
    pub fn set(&mut self, host: T) {
        host.encode(self.bytes.as_mut());
    }

    /// `self += delta`, where `delta` is in host byte order. Wraps on overflow.
    pub fn add_host(&mut self, delta: T) {
        let host = self.get().wrapping_add(delta);
        self.set(host);
    }

    /// `self -= delta`, where `delta` is in host byte order. Wraps on underflow.
    pub fn sub_host(&mut self, delta: T) {
        let host = self.get().wrapping_sub(delta);
        self.set(host);
    }

    /// `dst = self - delta`, leaving `self` as it was.
    pub fn sub_host_into(&self, delta: T, dst: &mut NetworkInt<T>) {
        dst.set(self.get().wrapping_sub(delta));
    }

    /// Returns `value - self` in host byte order.
    ///
    /// Note the operand order: this is the stored value subtracted *from* `value`, the reverse of
    /// `sub_host`.
    pub fn host_minus(&self, value: T) -> T {
        value.wrapping_sub(self.get())
    }

    pub fn wrapping_add_host(mut self, delta: T) -> NetworkInt<T> {
        self.add_host(delta);
        self
    }

    pub fn wrapping_sub_host(mut self, delta: T) -> NetworkInt<T> {
        self.sub_host(delta);
        self
    }

    /// The stored bytes as space separated hex, in memory order: `"12 34 56 78"`.
    pub fn dump(&self) -> String {
        Spaced(self.as_bytes()).to_string()
    }

    /// Like `dump`, but renders into `dst`.
    ///
    /// Never writes past the end of `dst`. The output is truncated if it does not fit, and is
    /// always followed by a NUL byte unless `dst` is empty. Returns the text without the NUL.
    pub fn dump_into<'a>(&self, dst: &'a mut [u8]) -> &'a str {
        let mut buf = BoundedBuf::new(dst);
        if write!(buf, "{}", Spaced(self.as_bytes())).is_err() {
            debug!("dump of {:#x} truncated to {} bytes", self.get(), buf.len());
        }
        buf.finish()
    }
}

impl<T: HostInt> From<T> for NetworkInt<T> {
    fn from(host: T) -> NetworkInt<T> {
        NetworkInt::new(host)
    }
}

impl<T: HostInt> fmt::Debug for NetworkInt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NetworkInt")
            .field(&format_args!("{:#x}", self.get()))
            .finish()
    }
}

/// The octets go into storage as they are; `Ipv4Addr` already keeps them in network order.
impl From<Ipv4Addr> for NetworkU32 {
    fn from(addr: Ipv4Addr) -> NetworkU32 {
        NetworkInt::from_bytes(addr.octets())
    }
}

impl From<NetworkU32> for Ipv4Addr {
    fn from(n: NetworkU32) -> Ipv4Addr {
        Ipv4Addr::from(n.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn layout() {
        assert_eq!(size_of::<NetworkU16>(), 2);
        assert_eq!(size_of::<NetworkU32>(), 4);
        assert_eq!(align_of::<NetworkU16>(), 1);
        assert_eq!(align_of::<NetworkU32>(), 1);
    }

    #[test]
    fn storage_is_big_endian() {
        let n = NetworkU32::new(0x12345678);
        assert_eq!(n.to_bytes(), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(n.dump(), "12 34 56 78");

        let n = NetworkU16::new(0x1234);
        assert_eq!(n.as_bytes(), &[0x12, 0x34]);
        assert_eq!(n.dump(), "12 34");
    }

    #[test]
    fn round_trip() {
        for &v in &[0u16, 1, 0x00ff, 0xff00, 0x1234, 0x8000, 0xffff] {
            assert_eq!(NetworkU16::new(v).get(), v);
            assert_eq!(u16::from(NetworkU16::from(v)), v);
        }
        for &v in &[0u32, 1, 0xff, 0x0100_0000, 0x1234_5678, 0x8000_0000, 0xffff_ffff] {
            assert_eq!(NetworkU32::new(v).get(), v);
            assert_eq!(u32::from(NetworkU32::from(v)), v);
        }
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(NetworkU32::default().get(), 0);
        assert_eq!(NetworkU16::default().dump(), "00 00");
    }

    #[test]
    fn set_overwrites() {
        let mut n = NetworkU32::new(0xdead_beef);
        n.set(0x0102_0304);
        assert_eq!(n.to_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn add_carries_across_bytes() {
        let mut n = NetworkU16::new(0x00ff);
        n.add_host(1);
        assert_eq!(n.to_bytes(), [0x01, 0x00]);

        let mut n = NetworkU32::new(0x00ff_ffff);
        n.add_host(1);
        assert_eq!(n.to_bytes(), [0x01, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn arithmetic_wraps() {
        let mut n = NetworkU16::new(0xffff);
        n.add_host(2);
        assert_eq!(n.get(), 1);
        n.sub_host(3);
        assert_eq!(n.get(), 0xffff);

        let mut n = NetworkU32::new(0);
        n.sub_host(1);
        assert_eq!(n.get(), 0xffff_ffff);
    }

    #[test]
    fn add_then_sub_restores_bytes() {
        let deltas = [0u32, 1, 5, 0x100, 0x7fff_ffff, 0xffff_ffff];
        for &start in &[0u32, 0x1234_5678, 0xffff_fffe] {
            for &delta in &deltas {
                let original = NetworkU32::new(start);
                let mut n = original;
                n.add_host(delta);
                n.sub_host(delta);
                assert_eq!(n.to_bytes(), original.to_bytes(), "start {:#x} delta {:#x}", start, delta);
            }
        }
    }

    #[test]
    fn sub_into_leaves_source_alone() {
        let src = NetworkU32::new(0x1234_5678);
        let mut dst = NetworkU32::new(0xffff_ffff);
        src.sub_host_into(5, &mut dst);
        assert_eq!(src.get(), 0x1234_5678);
        assert_eq!(dst.get(), 0x1234_5673);
    }

    #[test]
    fn host_minus_is_value_minus_stored() {
        let n = NetworkU32::new(0x1234_5678);
        assert_eq!(n.host_minus(0x8765_ba98), 0x7531_6420);
        // the reverse direction wraps
        assert_eq!(n.host_minus(0), 0xedcb_a988);

        let n = NetworkU16::new(0x1234);
        assert_eq!(n.host_minus(0x8765), 0x7531);
    }

    #[test]
    fn value_returning_forms() {
        let n = NetworkU16::new(0x1234);
        assert_eq!(n.wrapping_add_host(5).get(), 0x1239);
        assert_eq!(n.wrapping_sub_host(5).get(), 0x122f);
        assert_eq!(n.get(), 0x1234);
    }

    #[test]
    fn ordering_follows_host_value() {
        let mut values = vec![
            NetworkU16::new(0x0100),
            NetworkU16::new(0x00ff),
            NetworkU16::new(0xff00),
            NetworkU16::new(0x0001),
        ];
        values.sort();
        let hosts: Vec<u16> = values.iter().map(NetworkInt::get).collect();
        assert_eq!(hosts, vec![0x0001, 0x00ff, 0x0100, 0xff00]);
        assert!(NetworkU32::new(0x0000_0100) > NetworkU32::new(0x0000_00ff));
    }

    #[test]
    fn dump_into_fits() {
        let mut buf = [0xaau8; 16];
        let n = NetworkU32::new(0x1234_5678);
        assert_eq!(n.dump_into(&mut buf), "12 34 56 78");
        assert_eq!(buf[11], 0);
        assert_eq!(buf[12], 0xaa);
    }

    #[test]
    fn dump_into_truncates() {
        let n = NetworkU32::new(0x1234_5678);

        let mut buf = [0xaau8; 8];
        assert_eq!(n.dump_into(&mut buf[..6]), "12 34");
        assert_eq!(&buf[..6], b"12 34\0");
        assert_eq!(&buf[6..], &[0xaa, 0xaa]);

        let mut buf = [0xaau8; 2];
        assert_eq!(n.dump_into(&mut buf[..1]), "");
        assert_eq!(buf, [0, 0xaa]);

        let mut empty: [u8; 0] = [];
        assert_eq!(n.dump_into(&mut empty), "");
    }

    #[test]
    fn dump_renders_low_bytes_with_two_digits() {
        assert_eq!(NetworkU32::new(0xc0a8_0103).dump(), "c0 a8 01 03");
    }

    #[test]
    fn from_slice() {
        let n = NetworkU16::from_slice(&[0x12, 0x34, 0x56]).unwrap();
        assert_eq!(n.get(), 0x1234);

        let err = NetworkU32::from_slice(&[0x12, 0x34]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn ipv4_addr_interop() {
        let addr: Ipv4Addr = "192.168.1.3".parse().unwrap();
        let n = NetworkU32::from(addr);
        assert_eq!(n.to_bytes(), [0xc0, 0xa8, 0x01, 0x03]);
        assert_eq!(n.get(), 0xc0a8_0103);
        assert_eq!(Ipv4Addr::from(n), addr);
    }

    #[test]
    fn parser_writes_into_storage() {
        let mut n = NetworkU32::default();
        let addr: Ipv4Addr = "10.0.0.1".parse().unwrap();
        n.as_bytes_mut().copy_from_slice(&addr.octets());
        assert_eq!(n.get(), 0x0a00_0001);
    }

    #[test]
    fn debug_shows_host_value() {
        assert_eq!(format!("{:?}", NetworkU16::new(0x1234)), "NetworkInt(0x1234)");
    }
}
