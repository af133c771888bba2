//! Walks through the network integer operations and logs every step.
//!
//! Run with `RUST_LOG=info cargo run --example byteorder`.

extern crate env_logger;
#[macro_use] extern crate log;
extern crate netint;

use netint::*;

fn main() {
    env_logger::init();

    // *** 32 bits ***

    let addr_net1 = NetworkU32::new(0x1234_5678);
    let mut addr_net2 = addr_net1;
    let addr_host = addr_net1.get();
    assert_eq!(addr_host, 0x1234_5678);

    info!("addr_net1: {}", addr_net1.dump());
    info!("addr_net2: {}", addr_net2.dump());
    info!("addr_host: {}", Spaced(&addr_host.to_ne_bytes()));
    info!("addr_host: {:#010x}", addr_host);

    // Host memory taken as if it were network order.
    addr_net2 = NetworkU32::from_bytes(addr_host.to_ne_bytes());
    assert_eq!(addr_net2.get(), u32::from_be(addr_host));
    info!("addr_net2 (cast): {}", addr_net2.dump());

    addr_net2 = addr_net1;
    addr_net2.add_host(5);
    assert_eq!(addr_net2.get(), 0x1234_567d);
    info!("add_host(5): {:#010x}", addr_net2.get());

    addr_net2.sub_host(5);
    assert_eq!(addr_net2.get(), 0x1234_5678);
    info!("sub_host(5): {:#010x}", addr_net2.get());

    let src = addr_net2;
    src.sub_host_into(5, &mut addr_net2);
    assert_eq!(addr_net2.get(), 0x1234_5673);
    info!("sub_host_into(5): {:#010x}", addr_net2.get());

    let diff = addr_net1.host_minus(0x8765_ba98);
    assert_eq!(diff, 0x7531_6420);
    info!("host_minus(0x8765ba98): {:#010x}", diff);

    // *** 16 bits ***

    let port_net1 = NetworkU16::new(0x1234);
    let mut port_net2 = port_net1;
    let port_host = port_net1.get();
    assert_eq!(port_host, 0x1234);

    info!("port_net1: {}", port_net1.dump());
    info!("port_net2: {}", port_net2.dump());
    info!("port_host: {}", Spaced(&port_host.to_ne_bytes()));
    info!("port_host: {:#06x}", port_host);

    port_net2 = NetworkU16::from_bytes(port_host.to_ne_bytes());
    assert_eq!(port_net2.get(), u16::from_be(port_host));
    info!("port_net2 (cast): {}", port_net2.dump());

    port_net2 = port_net1;
    port_net2.add_host(5);
    assert_eq!(port_net2.get(), 0x1239);
    info!("add_host(5): {:#06x}", port_net2.get());

    port_net2.sub_host(5);
    assert_eq!(port_net2.get(), 0x1234);
    info!("sub_host(5): {:#06x}", port_net2.get());

    let src = port_net2;
    src.sub_host_into(5, &mut port_net2);
    assert_eq!(port_net2.get(), 0x122f);
    info!("sub_host_into(5): {:#06x}", port_net2.get());

    let diff = port_net1.host_minus(0x8765);
    assert_eq!(diff, 0x7531);
    info!("host_minus(0x8765): {:#06x}", diff);
}
