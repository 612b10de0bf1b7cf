//! IP address setter
//!
//! Parses a literal IPv4 or IPv6 address. No name resolution is performed.

use super::UNSET;
use crate::error::{Error, Result};
use crate::traits::{Setter, nil_value_message};
use std::net::IpAddr;
use tracing::debug;

/// Setter for a single IP address
///
/// Accepts dotted-decimal IPv4 (`192.167.0.1`) and colon-hex IPv6
/// (`2001:db8::68`) notation. Surrounding whitespace is not trimmed.
/// An IPv4-mapped IPv6 address is stored as given but rendered in its
/// dotted IPv4 form.
///
/// # Example
///
/// ```rust
/// use netsetter::{IpSetter, Setter};
/// use std::net::IpAddr;
///
/// let mut addr = IpAddr::from([0, 0, 0, 0]);
/// IpSetter::new(&mut addr)
///     .set_with_value("listen", "192.167.0.1")
///     .unwrap();
/// assert_eq!(addr, IpAddr::from([192, 167, 0, 1]));
/// ```
#[derive(Debug, Default)]
pub struct IpSetter<'a> {
    value: Option<&'a mut IpAddr>,
}

impl<'a> IpSetter<'a> {
    /// Name reported when the setter is misconfigured
    pub const NAME: &'static str = "netsetter::IpSetter";

    /// Create a setter that writes into `value`
    pub fn new(value: &'a mut IpAddr) -> Self {
        Self { value: Some(value) }
    }

    #[cfg(test)]
    fn is_configured(&self) -> bool {
        self.value.is_some()
    }
}

impl Setter for IpSetter<'_> {
    fn set_with_value(&mut self, param_name: &str, param_value: &str) -> Result<()> {
        let Some(value) = self.value.as_deref_mut() else {
            return Err(Error::unconfigured(nil_value_message(param_name, Self::NAME)));
        };

        let addr: IpAddr = param_value.parse().map_err(|e| {
            debug!("Rejected {} value {:?}: not an IP address", param_name, param_value);
            Error::invalid_ip(param_value, e)
        })?;

        debug!("Set {} to {}", param_name, addr);
        *value = addr;

        Ok(())
    }

    fn allowed_values(&self) -> String {
        "any value that can be interpreted as an IP address. \
         Either IPv4 ('192.167.0.1') or IPv6 ('2001:db8::68') forms are allowed"
            .to_string()
    }

    fn current_value(&self) -> String {
        match &self.value {
            Some(addr) => addr.to_canonical().to_string(),
            None => UNSET.to_string(),
        }
    }

    fn check_setter(&self, param_name: &str) {
        if self.value.is_none() {
            panic!("{}", nil_value_message(param_name, Self::NAME));
        }
    }
}
