//! Member selector parsing and matching.
//!
//! A selector is the single-token notation configuration uses to point at a
//! method or field: `La/b/C;foo(I)V`, `a.b.C.foo`, `health:I`, `foo*`. This
//! module parses tokens into [`crate::selector::MemberSelector`] values,
//! matches them against resolved members and [`crate::AccessSite`]s, and
//! renders them back out.
//!
//! # Key Components
//!
//! - [`crate::selector::MemberSelector`] - Parsed selector with owner, name,
//!   descriptor and wildcard parts
//!
//! # Usage Examples
//!
//! ```rust
//! use membersel::MemberSelector;
//!
//! let selector = MemberSelector::parse("La/b/C;foo*(I)V");
//! assert!(selector.matches_at(Some("a/b/C"), Some("foo"), Some("(I)V"), 3));
//! ```

mod member;

pub use member::*;
