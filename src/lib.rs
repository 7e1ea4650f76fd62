// Copyright 2026 The membersel contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # membersel
//!
//! A selector language for pointing at JVM class members. `membersel` parses
//! the single-token notation bytecode-transformation configuration uses to
//! name a method or field - `La/b/C;foo(I)V`, `a.b.C.foo`, `health:I`,
//! `foo*` - and matches the parsed selectors against resolved members and
//! instruction operands, with ordinal control over which occurrence in a
//! scan counts as a hit.
//!
//! ## Features
//!
//! - **🎯 Total parsing** - Every token parses into a selector; strictness is
//!   a separate, on-demand validation step
//! - **🔍 Structural matching** - Owner, name and descriptor participate only
//!   when both sides specify them; a trailing `*` widens a match from the
//!   first occurrence to all of them
//! - **📐 Descriptor grammar** - Strict parsing of field and method
//!   descriptors, including the 255-dimension array limit and `V` placement
//! - **🧩 Optional serde** - With the `serde` feature, selectors serialize as
//!   their token text
//! - **🛡️ Memory safe** - Built in Rust with comprehensive error handling and
//!   a fuzzed parser surface
//!
//! ## Quick Start
//!
//! Add `membersel` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! membersel = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use membersel::prelude::*;
//!
//! let selector = MemberSelector::parse("Lfoo/bar/Baz;update(J)V");
//! selector.validate()?;
//!
//! assert!(selector.matches(Some("foo/bar/Baz"), Some("update"), Some("(J)V")));
//! assert!(!selector.matches(Some("foo/bar/Baz"), Some("render"), Some("(J)V")));
//! # Ok::<(), membersel::Error>(())
//! ```
//!
//! ## Selector Syntax
//!
//! A selector names up to four things, all optional: an owner class, a
//! member name, a descriptor, and a match-all wildcard.
//!
//! ```text
//! La/b/C;foo(I)V    fully qualified method
//! a.b.C.foo         dotted owner form, dots convert to slashes
//! foo(I)V           method on any owner
//! health:I          field with its type descriptor
//! foo*              every occurrence of foo, not only the first
//! *                 anything, every occurrence
//! ```
//!
//! Anything a selector leaves out matches anything, which keeps short
//! selectors handy and precise ones possible.
//!
//! ## Architecture
//!
//! `membersel` is organized into a few small modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`selector`] - Selector parsing, rendering and matching
//! - [`site`] - Resolved instruction operands handed over by a scan
//! - [`descriptor`] - The descriptor grammar behind strict validation
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ## Error Handling
//!
//! Selector parsing never fails; construction from pre-split parts and
//! descriptor parsing return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use membersel::{descriptor::parse_method_descriptor, Error};
//!
//! match parse_method_descriptor("(IQ)V") {
//!     Ok(desc) => println!("{} parameters", desc.params.len()),
//!     Err(Error::Truncated) => println!("Descriptor ended early"),
//!     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Development and Testing
//!
//! The crate includes fuzzing support for the parser surface:
//!
//! ```bash
//! # Install fuzzing tools
//! cargo install cargo-fuzz
//!
//! # Selector tokens are arbitrary text and must never panic
//! cargo +nightly fuzz run selector_parse --release
//!
//! # Descriptors may error, but must never panic
//! cargo +nightly fuzz run descriptor_parse --release
//! ```

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// This module provides a curated selection of the most frequently used types
/// from across the library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use membersel::prelude::*;
///
/// let selector = MemberSelector::parse("La/b/C;foo(I)V");
/// assert!(selector.is_fully_qualified());
/// ```
pub mod prelude;

/// JVM type and method descriptor parsing.
///
/// Selectors carry descriptors as opaque text; this module supplies the
/// structured view and backs [`MemberSelector::validate`](selector::MemberSelector::validate).
///
/// # Key Types
///
/// - [`descriptor::TypeDesc`] - A single parsed type
/// - [`descriptor::MethodDesc`] - Parameter and return types of a method
/// - [`descriptor::BaseType`] - The primitive type codes
/// - [`descriptor::DescriptorParser`] - Strict parser over descriptor text
///
/// # Example
///
/// ```rust
/// use membersel::descriptor::parse_method_descriptor;
///
/// let desc = parse_method_descriptor("(Ljava/lang/String;J)Z")?;
/// assert_eq!(desc.params.len(), 2);
/// assert_eq!(desc.arg_slots(), 3);
/// # Ok::<(), membersel::Error>(())
/// ```
pub mod descriptor;

/// Member selector parsing, rendering and matching.
///
/// The [`selector::MemberSelector`] type is the main entry point of this
/// crate: parse one from a token with [`selector::MemberSelector::parse`],
/// then test candidates with the `matches` family.
///
/// # Example
///
/// ```rust
/// use membersel::MemberSelector;
///
/// let selector = MemberSelector::parse("La/b/C;foo*(I)V");
/// assert!(selector.matches_at(Some("a/b/C"), Some("foo"), Some("(I)V"), 2));
/// ```
pub mod selector;

/// Resolved instruction operands produced by a bytecode scan.
///
/// An [`site::AccessSite`] is one operand a transformation pipeline wants
/// matched: a method call, a field access, a bare type use or an
/// `invokedynamic` call site. Only the first two reference a member.
///
/// # Example
///
/// ```rust
/// use membersel::{AccessSite, MemberSelector};
///
/// let site = AccessSite::field_access("a/b/C", "health", "I");
/// let selector = MemberSelector::try_from(&site)?;
/// assert_eq!(selector.to_selector_string(), "La/b/C;health:I");
/// # Ok::<(), membersel::Error>(())
/// ```
pub mod site;

/// `membersel` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. This is used consistently throughout the crate for all
/// fallible operations.
///
/// # Examples
///
/// ```rust
/// use membersel::{MemberSelector, Result};
///
/// fn selector_for(token: &str) -> Result<MemberSelector> {
///     let selector = MemberSelector::parse(token);
///     selector.validate()?;
///     Ok(selector)
/// }
/// # assert!(selector_for("La/b/C;foo(I)V").is_ok());
/// # assert!(selector_for("La/b/C;foo(Q)V").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `membersel` Error type
///
/// The main error type for all operations in this crate. Provides detailed
/// error information for selector construction, validation and descriptor
/// parsing.
///
/// # Examples
///
/// ```rust
/// use membersel::{Error, MemberSelector};
///
/// match MemberSelector::new(Some("foo"), Some("a.b.C"), None, false) {
///     Err(Error::InvalidOwner(owner)) => println!("Dotted owner: {}", owner),
///     Err(e) => println!("Other error: {}", e),
///     Ok(_) => println!("Constructed"),
/// }
/// ```
pub use error::Error;

/// Main entry point for parsing and matching member selectors.
///
/// See [`selector::MemberSelector`] for the selector notation and the full
/// matching semantics.
///
/// # Example
///
/// ```rust
/// use membersel::MemberSelector;
///
/// let selector = MemberSelector::parse("a.b.C.foo");
/// assert_eq!(selector.owner(), Some("a/b/C"));
/// ```
pub use selector::MemberSelector;

/// Access-site types for matching against resolved instruction operands.
///
/// [`AccessSite`] is one scanned operand; [`SiteKind`] is its discriminant,
/// used in diagnostics when a non-member site reaches the selector layer.
///
/// # Example
///
/// ```rust
/// use membersel::{AccessSite, MemberSelector, SiteKind};
///
/// let site = AccessSite::type_use("a/b/C");
/// assert_eq!(site.kind(), SiteKind::TypeUse);
/// assert!(MemberSelector::try_from(&site).is_err());
/// ```
pub use site::{AccessSite, SiteKind};
