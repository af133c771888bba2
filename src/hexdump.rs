//! Hex rendering of raw bytes into fixed-size, NUL-terminated buffers.

use std::fmt::{self, Write};
use std::str;

const BYTES_PER_LINE: usize = 16;

/// A `fmt::Write` sink over a caller-owned byte buffer.
///
/// One byte is always kept free for a NUL terminator. Output that does not fit is dropped (never
/// splitting a UTF-8 character) and the write reports `fmt::Error` so formatting stops early.
pub struct BoundedBuf<'a> {
    buf: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl<'a> BoundedBuf<'a> {
    pub fn new(buf: &'a mut [u8]) -> BoundedBuf<'a> {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        BoundedBuf {
            buf,
            len: 0,
            truncated: false,
        }
    }

    /// Bytes of text that fit, not counting the terminator.
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Terminate the text and hand back what was written.
    pub fn finish(self) -> &'a str {
        let BoundedBuf { buf, len, .. } = self;
        if let Some(nul) = buf.get_mut(len) {
            *nul = 0;
        }
        let buf: &'a [u8] = buf;
        // Only whole characters are ever copied in.
        str::from_utf8(&buf[..len]).unwrap_or_default()
    }
}

impl<'a> Write for BoundedBuf<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.capacity() - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            self.truncated = true;
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

/// Bytes as two-digit lowercase hex separated by single spaces.
pub struct Spaced<'a>(pub &'a [u8]);

impl<'a> fmt::Display for Spaced<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A memory dump: 16 bytes per line, each line prefixed with the address of its first byte.
///
/// ```text
/// 0x7ffd5c1e0a10: 45 00 00 00 12 34 00 00 00 00 00 00 c0 a8 01 03
/// 0x7ffd5c1e0a20: c0 a8 01 02
/// ```
pub struct HexDump<'a> {
    bytes: &'a [u8],
    base: Option<usize>,
}

impl<'a> HexDump<'a> {
    pub fn new(bytes: &'a [u8]) -> HexDump<'a> {
        HexDump { bytes, base: None }
    }

    /// Label lines with `base + offset` instead of the real address.
    pub fn with_base(mut self, base: usize) -> HexDump<'a> {
        self.base = Some(base);
        self
    }
}

impl<'a> fmt::Display for HexDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.base.unwrap_or(self.bytes.as_ptr() as usize);
        for (i, line) in self.bytes.chunks(BYTES_PER_LINE).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{:#x}: {}", base + i * BYTES_PER_LINE, Spaced(line))?;
        }
        Ok(())
    }
}

/// Render `bytes` as a `HexDump` into `dst`, truncating to fit. See `BoundedBuf`.
pub fn memdump<'a>(bytes: &[u8], dst: &'a mut [u8]) -> &'a str {
    let mut buf = BoundedBuf::new(dst);
    if write!(buf, "{}", HexDump::new(bytes)).is_err() {
        debug!("memdump of {} bytes truncated to {}", bytes.len(), buf.len());
    }
    buf.finish()
}
