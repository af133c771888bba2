//! Viewing wire structures as raw bytes and back.

use std::io;
use std::mem::size_of;
use std::ptr;
use std::slice;

/// Marker for types that can be reinterpreted as bytes in both directions.
///
/// Implementors must have no padding and must accept every bit pattern as a valid value. Network
/// integers and `#[repr(C, packed)]` structs built only from `u8` and network integers qualify.
pub unsafe trait Plain: Copy {}

/// Return a slice of the bytes in the given struct.
pub fn as_bytes<T: Plain>(x: &T) -> &[u8] {
    unsafe {
        slice::from_raw_parts(
            x as *const T as *const u8,
            size_of::<T>())
    }
}

/// Mutable view of the bytes in the given struct. Any bytes written leave a valid `T`, because
/// `T: Plain`.
pub fn as_bytes_mut<T: Plain>(x: &mut T) -> &mut [u8] {
    unsafe {
        slice::from_raw_parts_mut(
            x as *mut T as *mut u8,
            size_of::<T>())
    }
}

/// Copy a `T` out of the front of `bytes`. Extra trailing bytes are ignored.
pub fn from_bytes<T: Plain>(bytes: &[u8]) -> io::Result<T> {
    let len = size_of::<T>();
    if bytes.len() < len {
        let msg = format!("need {} bytes, only {} available", len, bytes.len());
        debug!("{}", msg);
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, msg));
    }
    Ok(unsafe { ptr::read_unaligned(bytes.as_ptr() as *const T) })
}
