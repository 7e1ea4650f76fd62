//! JVM type and method descriptor parsing and representation.
//!
//! Descriptors are the compact type notation of the class file format:
//! `I` for `int`, `Ljava/lang/String;` for a class reference, `[D` for a
//! `double[]`, and `(ILjava/lang/String;)V` for a method taking an `int`
//! and a `String` and returning nothing. Selectors carry descriptors as
//! opaque text; this module supplies the structured view for callers that
//! need one, and backs strict selector validation.
//!
//! # Key Components
//!
//! - [`crate::descriptor::DescriptorParser`] - Strict parser over descriptor text
//! - [`crate::descriptor::TypeDesc`] - A single parsed type
//! - [`crate::descriptor::MethodDesc`] - A parsed method descriptor
//! - [`crate::descriptor::BaseType`] - The primitive (and `void`) type codes
//!
//! # Usage Examples
//!
//! ```rust
//! use membersel::descriptor::{parse_method_descriptor, BaseType, TypeDesc};
//!
//! let desc = parse_method_descriptor("(Ljava/lang/String;I)Z")?;
//! assert_eq!(desc.params.len(), 2);
//! assert_eq!(desc.ret, TypeDesc::Base(BaseType::Boolean));
//! assert_eq!(desc.arg_slots(), 2);
//! # Ok::<(), membersel::Error>(())
//! ```

mod parser;
mod types;

pub use parser::*;
pub use types::*;

use crate::Result;

/// Parse a method descriptor in `(ParameterTypes)ReturnType` form.
///
/// # Errors
/// Returns an error if the descriptor is malformed or has trailing characters.
pub fn parse_method_descriptor(data: &str) -> Result<MethodDesc> {
    let mut parser = DescriptorParser::new(data);
    parser.parse_method_descriptor()
}

/// Parse a field descriptor: a single type, `V` not permitted.
///
/// # Errors
/// Returns an error if the descriptor is malformed or has trailing characters.
pub fn parse_field_descriptor(data: &str) -> Result<TypeDesc> {
    let mut parser = DescriptorParser::new(data);
    parser.parse_field_descriptor()
}

/// Parse a single-type descriptor, with `V` permitted.
///
/// # Errors
/// Returns an error if the descriptor is malformed or has trailing characters.
pub fn parse_type_descriptor(data: &str) -> Result<TypeDesc> {
    let mut parser = DescriptorParser::new(data);
    parser.parse_type_descriptor()
}
