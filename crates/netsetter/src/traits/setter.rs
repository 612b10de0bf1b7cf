// # Setter Trait
//
// Defines the interface a parameter framework uses to apply a textual
// parameter value.
//
// ## Implementations
//
// - `IpSetter`: a single IP address
// - `TcpAddrSetter`: a resolved TCP endpoint
//
// ## Usage
//
// ```rust
// use netsetter::{Setter, TcpAddrSetter};
// use std::net::SocketAddr;
//
// let mut peer: Option<SocketAddr> = None;
// let mut setter: Box<dyn Setter + '_> = Box::new(TcpAddrSetter::new(&mut peer));
//
// setter.check_setter("peer");
// if let Err(e) = setter.set_with_value("peer", "192.167.0.1") {
//     eprintln!("{e}; allowed: {}", setter.allowed_values());
// }
// ```

use crate::error::Result;

/// Whether a parameter needs an accompanying value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueReq {
    /// The parameter must be followed by a value
    Mandatory,
    /// The parameter may be given with or without a value
    Optional,
    /// The parameter never takes a value
    None,
}

/// Trait for parameter setters
///
/// A setter converts the raw text of a parameter into a typed value and
/// writes it into storage owned by the caller. The framework calls
/// [`check_setter`](Setter::check_setter) once at setup time and then
/// [`set_with_value`](Setter::set_with_value) once per occurrence of the
/// parameter.
///
/// ## Contract
///
/// - Storage is written only when the value parses; on error it is untouched
/// - Setting the same value twice leaves the same stored result
/// - A misconfigured setter is a programming error and panics in
///   `check_setter`, before any user input is processed
///
/// Setters borrow their storage mutably, so a setter and any other writer
/// of the same storage cannot coexist.
pub trait Setter {
    /// Parse `param_value` and, if valid, store it
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The value was parsed and stored
    /// - `Err(Error)`: The value was rejected; storage is unchanged
    fn set_with_value(&mut self, param_name: &str, param_value: &str) -> Result<()>;

    /// Whether the parameter must be given a value
    fn value_req(&self) -> ValueReq {
        ValueReq::Mandatory
    }

    /// Human-readable description of the accepted values, for help output
    fn allowed_values(&self) -> String;

    /// Human-readable rendering of the currently stored value
    fn current_value(&self) -> String;

    /// Panic if the setter has no storage to write into
    ///
    /// `param_name` is the name the parameter is registered under and
    /// appears in the panic message.
    fn check_setter(&self, param_name: &str);
}

/// Build the message reported for a setter created without storage
pub fn nil_value_message(param_name: &str, setter_name: &str) -> String {
    format!("{param_name}: {setter_name} Check failed: the Value to be set is nil")
}
