use thiserror::Error;

use crate::site::SiteKind;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Only two situations in this crate are contract violations surfaced to the caller:
/// constructing a selector whose owner is not in internal form, and building a selector
/// from a site that references no member. Everything else stems from the descriptor
/// grammar, which is only consulted when a caller explicitly validates stored descriptor
/// text. Parsing selector tokens and matching never fail.
///
/// # Error Categories
///
/// ## Contract Violations
/// - [`Error::InvalidOwner`] - Selector constructed with a dotted owner
/// - [`Error::NotMemberAccess`] - Selector requested from a non-member site
///
/// ## Descriptor Grammar Errors
/// - [`Error::Malformed`] - Descriptor text violates the grammar
/// - [`Error::Truncated`] - Descriptor text ends mid-production
///
/// ## Configuration Errors
/// - [`Error::InvalidSelector`] - A configured selector failed validation
///
/// # Examples
///
/// ```rust
/// use membersel::{Error, MemberSelector};
///
/// match MemberSelector::new(Some("func_1234_a"), Some("foo.bar.Baz"), None, false) {
///     Err(Error::InvalidOwner(owner)) => {
///         eprintln!("owner must be in internal form: {}", owner);
///     }
///     other => panic!("expected an owner rejection, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A selector was constructed with an owner in dotted notation.
    ///
    /// Owners are stored in internal form (`foo/bar/Baz`); callers normalize
    /// dotted names before construction. The parser performs that conversion
    /// itself, so this error only arises from the validating constructor.
    #[error("Invalid owner format - '{0}' must be an internal form class name")]
    InvalidOwner(String),

    /// A selector was requested for a site that references no member.
    ///
    /// Only method-call and field-access sites carry the owner, name and
    /// descriptor a selector is built from. The associated [`SiteKind`] names
    /// the offending site kind.
    #[error("{0} site does not reference a member")]
    NotMemberAccess(SiteKind),

    /// Descriptor text violates the descriptor grammar.
    ///
    /// The error includes the source location where the malformation was
    /// detected for debugging purposes.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Descriptor text ended in the middle of a production.
    ///
    /// Raised when the descriptor parser needs another character and the
    /// input is exhausted, such as an unterminated `L...;` class name or a
    /// method descriptor with no return type.
    #[error("Descriptor ended unexpectedly")]
    Truncated,

    /// A configured selector failed validation.
    ///
    /// Produced by [`MemberSelector::validate`](crate::MemberSelector::validate)
    /// when the stored owner, name or descriptor text is structurally invalid.
    /// Carries the selector text, a description of the problem, and the
    /// underlying grammar error where one exists.
    #[error("Invalid selector '{selector}' - {message}")]
    InvalidSelector {
        /// The canonical text of the rejected selector
        selector: String,
        /// Description of the structural problem
        message: String,
        /// The underlying descriptor grammar error, if any
        #[source]
        source: Option<Box<Error>>,
    },
}
