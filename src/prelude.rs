//! Prelude module for convenient imports.
//!
//! Pulls the commonly used types into scope in one line, for callers that
//! would otherwise import from several modules.
//!
//! # Usage
//!
//! ```rust
//! use membersel::prelude::*;
//!
//! let selector = MemberSelector::parse("La/b/C;foo(I)V");
//! let site = AccessSite::method_call("a/b/C", "foo", "(I)V");
//! assert!(selector.matches_site(&site));
//! ```

// Error handling
pub use crate::{Error, Result};

// Selectors
pub use crate::selector::MemberSelector;

// Access sites
pub use crate::site::{AccessSite, SiteKind};

// Descriptors
pub use crate::descriptor::{
    parse_field_descriptor, parse_method_descriptor, parse_type_descriptor, BaseType,
    DescriptorParser, MethodDesc, TypeDesc,
};
