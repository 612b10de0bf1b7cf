//! Shared fixtures for setter contract tests
//!
//! Values here are literal addresses so that no test depends on DNS.

#![allow(dead_code)]

use netsetter::Setter;

/// IPv4 literals accepted by the IP setter
pub const VALID_IPV4: &[&str] = &["192.167.0.1", "0.0.0.0", "255.255.255.255", "127.0.0.1"];

/// IPv6 literals accepted by the IP setter, including compressed forms
pub const VALID_IPV6: &[&str] = &[
    "2001:db8::68",
    "::",
    "::1",
    "fe80::1",
    "2001:0db8:0000:0000:0000:ff00:0042:8329",
    "::ffff:192.0.2.128",
];

/// Values the IP setter must reject
pub const INVALID_IPS: &[&str] = &[
    "not-an-ip",
    "",
    "999.999.999.999",
    "1.2.3",
    "1.2.3.4.5",
    "2001:db8:::68",
    "192.167.0.1:8080",
    "[2001:db8::68]",
];

/// Literal endpoints accepted by the TCP setter
pub const VALID_ENDPOINTS: &[&str] = &[
    "192.167.0.1:8080",
    "[2001:db8::68]:8080",
    "127.0.0.1:0",
    "[::1]:65535",
];

/// Endpoints the TCP setter must reject without resolving anything
pub const INVALID_ENDPOINTS: &[&str] = &[
    "192.167.0.1",
    "host:notaport",
    "192.167.0.1:",
    "192.167.0.1:99999",
    "[2001:db8::68]",
    "",
];

/// Apply `value` through the trait, the way a framework would
pub fn apply<S: Setter + ?Sized>(setter: &mut S, name: &str, value: &str) -> netsetter::Result<()> {
    setter.check_setter(name);
    setter.set_with_value(name, value)
}
