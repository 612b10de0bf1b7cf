// # netsetter
//
// Parameter setters for network-address-shaped values.
//
// ## Overview
//
// A parameter framework hands each setter the raw text supplied for a
// parameter. The setter parses it, and only on success writes the parsed
// value into storage owned by the caller:
// - **IpSetter**: a single IP address, IPv4 or IPv6, no port
// - **TcpAddrSetter**: a host and port, resolved the way a TCP endpoint is
//
// Both implement the [`Setter`] trait, which is the whole contract the
// framework relies on.
//
// ## Usage
//
// ```rust
// use netsetter::{IpSetter, Setter};
// use std::net::IpAddr;
//
// let mut bind_ip = IpAddr::from([127, 0, 0, 1]);
// let mut setter = IpSetter::new(&mut bind_ip);
// setter.check_setter("bind-ip");
// setter.set_with_value("bind-ip", "2001:db8::68").unwrap();
// assert_eq!(bind_ip.to_string(), "2001:db8::68");
// ```

pub mod error;
pub mod setters;
pub mod traits;

// Re-export core types for convenience
pub use error::{Error, Result};
pub use setters::{IpSetter, TcpAddrSetter};
pub use traits::{Setter, ValueReq, nil_value_message};
