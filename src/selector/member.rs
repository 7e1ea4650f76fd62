use std::fmt;

use crate::{
    descriptor::{parse_field_descriptor, parse_method_descriptor},
    site::AccessSite,
    Error, Result,
};

/// A parsed member selector describing a method or field to match.
///
/// A selector is built from up to four parts, all optional except that a
/// useful selector carries at least one: an owner class, a member name, a
/// descriptor, and a trailing `*` wildcard that widens a match to every
/// occurrence instead of only the first. Any part a selector does not
/// specify is treated as "match anything" for that part.
///
/// Selectors are written in one token, in either of two owner notations:
///
/// ```text
/// La/b/C;foo(I)V      internal form owner
/// a.b.C.foo           dotted form owner (dots become slashes)
/// foo:I               field with descriptor
/// foo*                every occurrence of foo
/// ```
///
/// # Example
///
/// ```rust
/// use membersel::MemberSelector;
///
/// let selector = MemberSelector::parse("La/b/C;update(J)V");
/// assert_eq!(selector.owner(), Some("a/b/C"));
/// assert_eq!(selector.name(), Some("update"));
/// assert_eq!(selector.desc(), Some("(J)V"));
/// assert!(!selector.match_all());
///
/// assert!(selector.matches(Some("a/b/C"), Some("update"), Some("(J)V")));
/// assert!(!selector.matches(Some("a/b/C"), Some("render"), Some("(J)V")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberSelector {
    /// Owner class in internal form, when the selector names one
    owner: Option<String>,
    /// Member name, when the selector names one
    name: Option<String>,
    /// Descriptor text - `(..)..` for methods, a bare field type otherwise
    desc: Option<String>,
    /// True when the selector ends with `*` and matches every occurrence
    match_all: bool,
}

impl MemberSelector {
    /// Parse a selector token.
    ///
    /// Parsing is total: every input produces a selector, with parts the
    /// input does not specify left absent. Splitting happens in three
    /// stages. First the owner is taken, either from everything up to the
    /// last `.` (dots converted to slashes) or from a leading
    /// `L<class>;` prefix. Then the descriptor is split off at the first
    /// `(`, which stays part of the descriptor, or after the first `:` for
    /// the field form. Last, a trailing `*` on the remaining name sets
    /// [`match_all`](Self::match_all) and an empty remainder leaves the
    /// name absent.
    ///
    /// Use [`validate`](Self::validate) afterwards when the parts must
    /// also be well-formed.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut owner = None;
        let mut text = input;

        if let Some(dot) = text.rfind('.') {
            owner = Some(text[..dot].replace('.', "/"));
            text = &text[dot + 1..];
        } else if text.starts_with('L') {
            if let Some(semi) = text.find(';') {
                owner = Some(text[1..semi].to_string());
                text = &text[semi + 1..];
            }
        }

        let mut desc = None;
        if let Some(paren) = text.find('(') {
            desc = Some(text[paren..].to_string());
            text = &text[..paren];
        } else if let Some(colon) = text.find(':') {
            desc = Some(text[colon + 1..].to_string());
            text = &text[..colon];
        }

        let (name, match_all) = match text.strip_suffix('*') {
            Some(stripped) => (stripped, true),
            None => (text, false),
        };
        let name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };

        MemberSelector {
            owner,
            name,
            desc,
            match_all,
        }
    }

    /// Create a selector from pre-split parts.
    ///
    /// # Errors
    /// Returns [`Error::InvalidOwner`] if the owner is in dotted rather
    /// than internal form.
    pub fn new(
        name: Option<&str>,
        owner: Option<&str>,
        desc: Option<&str>,
        match_all: bool,
    ) -> Result<Self> {
        if let Some(owner) = owner {
            if owner.contains('.') {
                return Err(Error::InvalidOwner(owner.to_string()));
            }
        }
        Ok(MemberSelector {
            owner: owner.map(String::from),
            name: name.map(String::from),
            desc: desc.map(String::from),
            match_all,
        })
    }

    /// Owner class in internal form, if the selector names one.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Member name, if the selector names one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Descriptor text, if the selector names one.
    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    /// True when the selector matches every occurrence rather than only
    /// the first.
    #[must_use]
    pub fn match_all(&self) -> bool {
        self.match_all
    }

    /// True when owner, name and descriptor are all specified.
    #[must_use]
    pub fn is_fully_qualified(&self) -> bool {
        self.owner.is_some() && self.name.is_some() && self.desc.is_some()
    }

    /// True when the selector carries a field descriptor.
    #[must_use]
    pub fn is_field(&self) -> bool {
        self.desc.as_deref().is_some_and(|desc| !desc.starts_with('('))
    }

    /// True when the selector carries a method descriptor.
    #[must_use]
    pub fn is_method(&self) -> bool {
        self.desc.as_deref().is_some_and(|desc| desc.starts_with('('))
    }

    /// Test a candidate member at ordinal zero.
    ///
    /// Equivalent to [`matches_at`](Self::matches_at) with an ordinal of
    /// zero, which every selector accepts.
    #[must_use]
    pub fn matches(&self, owner: Option<&str>, name: Option<&str>, desc: Option<&str>) -> bool {
        self.matches_at(owner, name, desc, 0)
    }

    /// Test a candidate member against the full selector.
    ///
    /// A part only participates when both the selector and the candidate
    /// supply it; a part absent on either side is skipped. The ordinal
    /// counts prior occurrences of the same member in the scan: ordinal
    /// zero always passes, and later occurrences pass only for a
    /// [`match_all`](Self::match_all) selector.
    #[must_use]
    pub fn matches_at(
        &self,
        owner: Option<&str>,
        name: Option<&str>,
        desc: Option<&str>,
        ordinal: usize,
    ) -> bool {
        if self.desc.is_some() && desc.is_some() && self.desc.as_deref() != desc {
            return false;
        }
        if self.name.is_some() && name.is_some() && self.name.as_deref() != name {
            return false;
        }
        if self.owner.is_some() && owner.is_some() && self.owner.as_deref() != owner {
            return false;
        }
        ordinal == 0 || self.match_all
    }

    /// Test a candidate member at ordinal zero, ignoring the owner.
    #[must_use]
    pub fn matches_local(&self, name: Option<&str>, desc: Option<&str>) -> bool {
        self.matches_local_at(name, desc, 0)
    }

    /// Test a candidate member ignoring the owner.
    ///
    /// The local form is the stricter of the two: where the full form
    /// skips a part the candidate leaves absent, the local form fails a
    /// selector-specified name or descriptor against an absent candidate
    /// part. It suits scans over members of one known class, where an
    /// absent part means the candidate genuinely has none.
    #[must_use]
    pub fn matches_local_at(&self, name: Option<&str>, desc: Option<&str>, ordinal: usize) -> bool {
        (self.name.is_none() || self.name.as_deref() == name)
            && (self.desc.is_none() || self.desc.as_deref() == desc)
            && (ordinal == 0 || self.match_all)
    }

    /// Test an access site at ordinal zero.
    #[must_use]
    pub fn matches_site(&self, site: &AccessSite) -> bool {
        self.matches_site_at(site, 0)
    }

    /// Test an access site against the full selector.
    ///
    /// Only member sites can match; a type use or dynamic call site fails
    /// regardless of the selector.
    #[must_use]
    pub fn matches_site_at(&self, site: &AccessSite, ordinal: usize) -> bool {
        site.is_member() && self.matches_at(site.owner(), site.name(), site.desc(), ordinal)
    }

    /// Render the selector back into its token form.
    ///
    /// The rendering parses back to an equal selector for well-formed
    /// parts. The one ambiguous shape is an ownerless name beginning with
    /// `L` next to a descriptor containing `;`, which re-reads as an owner
    /// prefix.
    #[must_use]
    pub fn to_selector_string(&self) -> String {
        let mut out = String::new();
        if let Some(owner) = &self.owner {
            out.push('L');
            out.push_str(owner);
            out.push(';');
        }
        if let Some(name) = &self.name {
            out.push_str(name);
        }
        if self.match_all {
            out.push('*');
        }
        if let Some(desc) = &self.desc {
            if desc.starts_with('(') {
                out.push_str(desc);
            } else {
                out.push(':');
                out.push_str(desc);
            }
        }
        out
    }

    /// Check that every specified part is well-formed.
    ///
    /// Parsing is deliberately lenient so that configuration can be read
    /// before it is judged; this is the judging step. The owner must be an
    /// internal form class name, the name a legal member name (with
    /// `<init>` and `<clinit>` admitted), and the descriptor must parse
    /// under the descriptor grammar.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSelector`] naming the offending part, with
    /// the descriptor parse error attached as the source where one exists.
    pub fn validate(&self) -> Result<()> {
        if let Some(owner) = &self.owner {
            if owner.is_empty() {
                return Err(self.invalid("owner is empty"));
            }
            for segment in owner.split('/') {
                if segment.is_empty() {
                    return Err(self.invalid("owner has an empty package segment"));
                }
                if segment.contains(['.', ';', '[']) {
                    return Err(self.invalid("owner is not an internal form class name"));
                }
            }
        }

        if let Some(name) = &self.name {
            if name != "<init>"
                && name != "<clinit>"
                && name.contains(['.', ';', '[', '/', '<', '>'])
            {
                return Err(self.invalid("name contains characters not legal in a member name"));
            }
        }

        if let Some(desc) = &self.desc {
            let parsed = if desc.starts_with('(') {
                parse_method_descriptor(desc).map(|_| ())
            } else {
                parse_field_descriptor(desc).map(|_| ())
            };
            if let Err(source) = parsed {
                return Err(Error::InvalidSelector {
                    selector: self.to_selector_string(),
                    message: "descriptor does not parse".to_string(),
                    source: Some(Box::new(source)),
                });
            }
        }

        Ok(())
    }

    fn invalid(&self, message: &str) -> Error {
        Error::InvalidSelector {
            selector: self.to_selector_string(),
            message: message.to_string(),
            source: None,
        }
    }
}

impl From<&str> for MemberSelector {
    fn from(input: &str) -> Self {
        MemberSelector::parse(input)
    }
}

impl TryFrom<&AccessSite> for MemberSelector {
    type Error = Error;

    fn try_from(site: &AccessSite) -> Result<Self> {
        match site {
            AccessSite::MethodCall { owner, name, desc }
            | AccessSite::FieldAccess { owner, name, desc } => Ok(MemberSelector {
                owner: Some(owner.clone()),
                name: Some(name.clone()),
                desc: Some(desc.clone()),
                match_all: false,
            }),
            _ => Err(Error::NotMemberAccess(site.kind())),
        }
    }
}

impl fmt::Display for MemberSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[OWNER={},NAME={},DESC={},ALL={}]",
            self.owner.as_deref().unwrap_or("null"),
            self.name.as_deref().unwrap_or("null"),
            self.desc.as_deref().unwrap_or("null"),
            self.match_all
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MemberSelector {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_selector_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MemberSelector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(MemberSelector::parse(&text))
    }
}
