// # Setter Implementations
//
// This module provides the network-address implementations of the Setter
// trait.

pub mod ip;
pub mod tcp_addr;

pub use ip::IpSetter;
pub use tcp_addr::TcpAddrSetter;

/// Rendered by `current_value` when a setter has no storage
pub(crate) const UNSET: &str = "<unset>";
