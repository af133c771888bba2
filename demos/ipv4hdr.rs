//! Fills in an IPv4 header, parses an address straight into it, and dumps the raw bytes.
//!
//! Run with `RUST_LOG=info cargo run --example ipv4hdr -- 192.168.1.3`.

extern crate env_logger;
#[macro_use] extern crate log;
extern crate netint;

use netint::*;

use std::env;
use std::net::Ipv4Addr;
use std::process;

fn main() {
    env_logger::init();

    let source = env::args().nth(1).unwrap_or_else(|| "192.168.1.3".to_owned());

    let mut hdr = Ipv4Header::new();
    hdr.id.set(0x1234);
    hdr.da.set(0xc0a8_0102);

    let addr: Ipv4Addr = match source.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!("bad source address {:?}: {}", source, e);
            process::exit(1);
        }
    };
    hdr.sa.as_bytes_mut().copy_from_slice(&addr.octets());

    let mut buf = [0u8; 128];
    info!("hdr.sa: {}", hdr.sa.dump_into(&mut buf));
    info!("hdr.id: {}", hdr.id.dump_into(&mut buf));
    assert_eq!(hdr.id.to_bytes(), [0x12, 0x34]);

    info!("\n{}", memdump(rawstruct::as_bytes(&hdr), &mut buf));

    match Ipv4Header::read(rawstruct::as_bytes(&hdr)) {
        Ok(read) => info!("{} -> {}", read.source(), read.destination()),
        Err(e) => {
            error!("failed to read back header: {}", e);
            process::exit(1);
        }
    }
}
