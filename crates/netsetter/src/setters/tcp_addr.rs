//! TCP endpoint setter
//!
//! Resolves `host:port` values through [`ToSocketAddrs`]. Literal addresses
//! are parsed without I/O, but a hostname goes through the platform
//! resolver: `set_with_value` may block on DNS, with no timeout beyond the
//! resolver's own and no way to cancel it.

use super::UNSET;
use crate::error::{Error, Result};
use crate::traits::{Setter, nil_value_message};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use tracing::{debug, trace};

/// Setter for a TCP endpoint
///
/// The storage is an `Option<SocketAddr>` so that an endpoint which has not
/// been given yet can be told apart from any real address.
///
/// Accepted forms are `192.167.0.1:8080`, `[2001:db8::68]:8080` and
/// `hostname:8080`. The port is mandatory and must be numeric. An empty
/// host (`:8080`) means every local address and is stored as `0.0.0.0:8080`.
#[derive(Debug, Default)]
pub struct TcpAddrSetter<'a> {
    value: Option<&'a mut Option<SocketAddr>>,
}

impl<'a> TcpAddrSetter<'a> {
    /// Name reported when the setter is misconfigured
    pub const NAME: &'static str = "netsetter::TcpAddrSetter";

    /// Create a setter that writes into `value`
    pub fn new(value: &'a mut Option<SocketAddr>) -> Self {
        Self { value: Some(value) }
    }

    #[cfg(test)]
    fn is_configured(&self) -> bool {
        self.value.is_some()
    }
}

/// Resolve `param_value` to a single endpoint, preferring IPv4
fn resolve(param_value: &str) -> io::Result<SocketAddr> {
    if let Some(port) = param_value.strip_prefix(':') {
        let port: u16 = port
            .parse()
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "invalid port value"))?;
        return Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)));
    }

    let addrs: Vec<SocketAddr> = param_value.to_socket_addrs()?.collect();
    trace!("{:?} resolved to {:?}", param_value, addrs);

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no addresses found"))
}

impl Setter for TcpAddrSetter<'_> {
    fn set_with_value(&mut self, param_name: &str, param_value: &str) -> Result<()> {
        let Some(value) = self.value.as_deref_mut() else {
            return Err(Error::unconfigured(nil_value_message(param_name, Self::NAME)));
        };

        let addr = resolve(param_value).map_err(|e| {
            debug!("Rejected {} value {:?}: {}", param_name, param_value, e);
            Error::invalid_tcp_addr(param_value, e)
        })?;

        debug!("Set {} to {}", param_name, addr);
        *value = Some(addr);

        Ok(())
    }

    fn allowed_values(&self) -> String {
        "any value that can be interpreted as a TCP address. \
         Either IPv4 ('192.167.0.1:8080') or IPv6 ('[2001:db8::68]:8080') forms are allowed"
            .to_string()
    }

    fn current_value(&self) -> String {
        match &self.value {
            Some(Some(addr)) => addr.to_string(),
            Some(None) => "<nil>".to_string(),
            None => UNSET.to_string(),
        }
    }

    fn check_setter(&self, param_name: &str) {
        if self.value.is_none() {
            panic!("{}", nil_value_message(param_name, Self::NAME));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv6Addr};

    #[test]
    fn test_ipv4_endpoint_is_stored() {
        let mut peer = None;
        let mut setter = TcpAddrSetter::new(&mut peer);

        assert_eq!(setter.current_value(), "<nil>");
        setter.set_with_value("peer", "192.167.0.1:8080").unwrap();
        assert_eq!(setter.current_value(), "192.167.0.1:8080");
        drop(setter);

        assert_eq!(peer, Some(SocketAddr::from(([192, 167, 0, 1], 8080))));
    }

    #[test]
    fn test_bracketed_ipv6_endpoint_is_stored() {
        let mut peer = None;
        let mut setter = TcpAddrSetter::new(&mut peer);

        setter.set_with_value("peer", "[2001:db8::68]:8080").unwrap();
        assert_eq!(setter.current_value(), "[2001:db8::68]:8080");
        drop(setter);

        let ip: Ipv6Addr = "2001:db8::68".parse().unwrap();
        assert_eq!(peer, Some(SocketAddr::new(IpAddr::V6(ip), 8080)));
    }

    #[test]
    fn test_port_bounds() {
        let mut peer = None;
        let mut setter = TcpAddrSetter::new(&mut peer);

        setter.set_with_value("peer", "10.0.0.1:0").unwrap();
        setter.set_with_value("peer", "10.0.0.1:65535").unwrap();
        assert!(setter.set_with_value("peer", "10.0.0.1:65536").is_err());
        drop(setter);

        assert_eq!(peer.map(|addr| addr.port()), Some(65535));
    }

    #[test]
    fn test_malformed_endpoints_are_rejected() {
        let original = Some(SocketAddr::from(([10, 0, 0, 1], 80)));

        for bad in ["192.167.0.1", "192.167.0.1:notaport", "2001:db8::68:8080x", ""] {
            let mut peer = original;
            let err = TcpAddrSetter::new(&mut peer)
                .set_with_value("peer", bad)
                .unwrap_err();

            assert!(matches!(err, Error::InvalidTcpAddr { .. }), "{bad:?}: {err}");
            assert!(err.to_string().contains(&format!("{bad:?}")));
            assert_eq!(peer, original, "{bad:?} must not modify storage");
        }
    }

    #[test]
    fn test_unconfigured_setter_returns_error() {
        let mut setter = TcpAddrSetter::default();

        assert!(!setter.is_configured());
        let err = setter.set_with_value("peer", "127.0.0.1:80").unwrap_err();
        assert!(matches!(err, Error::Unconfigured(_)));
        assert_eq!(setter.current_value(), UNSET);
    }

    #[test]
    #[should_panic(expected = "peer: netsetter::TcpAddrSetter")]
    fn test_check_setter_panics_without_storage() {
        TcpAddrSetter::default().check_setter("peer");
    }

    #[test]
    fn test_resolve_empty_host_is_unspecified() {
        assert_eq!(
            resolve(":8080").unwrap(),
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080))
        );
        assert!(resolve(":http").is_err());
        assert!(resolve(":").is_err());
    }

    #[test]
    fn test_resolve_parses_bracketed_literal() {
        let addr = resolve("[::1]:22").unwrap();
        assert_eq!(addr, SocketAddr::from((Ipv6Addr::LOCALHOST, 22)));
    }
}
