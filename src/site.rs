//! Instruction-operand sites handed over by a bytecode-analysis layer.
//!
//! A transformation pipeline scans method bodies and produces one [`AccessSite`]
//! per instruction operand it wants matched against configured selectors. Only
//! the method-call and field-access kinds carry the full owner/name/descriptor
//! triple a [`MemberSelector`](crate::MemberSelector) is built from; the other
//! kinds exist so that handing a non-member operand to the selector layer is a
//! reportable mistake instead of an unrepresentable one.

use strum::Display;

/// Discriminant of an [`AccessSite`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum SiteKind {
    /// A method invocation operand
    #[strum(serialize = "method call")]
    MethodCall,
    /// A field access operand
    #[strum(serialize = "field access")]
    FieldAccess,
    /// A bare type operand
    #[strum(serialize = "type use")]
    TypeUse,
    /// An `invokedynamic` call site
    #[strum(serialize = "dynamic call")]
    DynamicCall,
}

/// One resolved instruction operand from a scanned method body.
///
/// The member-bearing kinds mirror the two operand shapes of the JVM
/// instruction set that name a class member: invocation instructions
/// (`invokevirtual`, `invokestatic`, `invokespecial`, `invokeinterface`) and
/// field instructions (`getfield`, `putfield`, `getstatic`, `putstatic`).
/// Class names are in internal form (`foo/bar/Baz`) and descriptors are raw
/// descriptor text, exactly as they appear in the constant pool.
///
/// # Examples
///
/// ```rust
/// use membersel::AccessSite;
///
/// let call = AccessSite::method_call("foo/bar/Baz", "func_1234_a", "(III)Z");
/// assert_eq!(call.owner(), Some("foo/bar/Baz"));
/// assert!(call.is_member());
///
/// let new = AccessSite::type_use("foo/bar/Baz");
/// assert_eq!(new.name(), None);
/// assert!(!new.is_member());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessSite {
    /// Method invocation: owner class, method name, method descriptor
    MethodCall {
        /// Owner class in internal form
        owner: String,
        /// Invoked method name
        name: String,
        /// Method descriptor, `(…)R` form
        desc: String,
    },
    /// Field access: owner class, field name, field type descriptor
    FieldAccess {
        /// Owner class in internal form
        owner: String,
        /// Accessed field name
        name: String,
        /// Field type descriptor
        desc: String,
    },
    /// Type operand (`new`, `checkcast`, `instanceof`, `anewarray`); no member involved
    TypeUse {
        /// Referenced class in internal form
        owner: String,
    },
    /// `invokedynamic` call site; carries a name and descriptor but no owner class
    DynamicCall {
        /// Call-site name from the constant pool
        name: String,
        /// Call-site descriptor
        desc: String,
    },
}

impl AccessSite {
    /// Create a method invocation site.
    pub fn method_call(
        owner: impl Into<String>,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        AccessSite::MethodCall {
            owner: owner.into(),
            name: name.into(),
            desc: desc.into(),
        }
    }

    /// Create a field access site.
    pub fn field_access(
        owner: impl Into<String>,
        name: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        AccessSite::FieldAccess {
            owner: owner.into(),
            name: name.into(),
            desc: desc.into(),
        }
    }

    /// Create a bare type-operand site.
    pub fn type_use(owner: impl Into<String>) -> Self {
        AccessSite::TypeUse {
            owner: owner.into(),
        }
    }

    /// Create an `invokedynamic` call site.
    pub fn dynamic_call(name: impl Into<String>, desc: impl Into<String>) -> Self {
        AccessSite::DynamicCall {
            name: name.into(),
            desc: desc.into(),
        }
    }

    /// The kind of this site.
    #[must_use]
    pub fn kind(&self) -> SiteKind {
        match self {
            AccessSite::MethodCall { .. } => SiteKind::MethodCall,
            AccessSite::FieldAccess { .. } => SiteKind::FieldAccess,
            AccessSite::TypeUse { .. } => SiteKind::TypeUse,
            AccessSite::DynamicCall { .. } => SiteKind::DynamicCall,
        }
    }

    /// The owner class in internal form, where the site has one.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        match self {
            AccessSite::MethodCall { owner, .. }
            | AccessSite::FieldAccess { owner, .. }
            | AccessSite::TypeUse { owner } => Some(owner),
            AccessSite::DynamicCall { .. } => None,
        }
    }

    /// The member or call-site name, where the site has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            AccessSite::MethodCall { name, .. }
            | AccessSite::FieldAccess { name, .. }
            | AccessSite::DynamicCall { name, .. } => Some(name),
            AccessSite::TypeUse { .. } => None,
        }
    }

    /// The raw descriptor text, where the site has one.
    #[must_use]
    pub fn desc(&self) -> Option<&str> {
        match self {
            AccessSite::MethodCall { desc, .. }
            | AccessSite::FieldAccess { desc, .. }
            | AccessSite::DynamicCall { desc, .. } => Some(desc),
            AccessSite::TypeUse { .. } => None,
        }
    }

    /// True if this site references a class member, i.e. is a method call or
    /// a field access.
    #[must_use]
    pub fn is_member(&self) -> bool {
        matches!(
            self,
            AccessSite::MethodCall { .. } | AccessSite::FieldAccess { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_kind() {
        let call = AccessSite::method_call("foo/bar/Baz", "func_1234_a", "(III)Z");
        assert_eq!(call.kind(), SiteKind::MethodCall);

        let field = AccessSite::field_access("foo/bar/Baz", "field_5678_z", "Ljava/lang/String;");
        assert_eq!(field.kind(), SiteKind::FieldAccess);

        let new = AccessSite::type_use("foo/bar/Baz");
        assert_eq!(new.kind(), SiteKind::TypeUse);

        let indy = AccessSite::dynamic_call("apply", "()Ljava/util/function/Function;");
        assert_eq!(indy.kind(), SiteKind::DynamicCall);
    }

    #[test]
    fn test_site_kind_display() {
        assert_eq!(SiteKind::MethodCall.to_string(), "method call");
        assert_eq!(SiteKind::FieldAccess.to_string(), "field access");
        assert_eq!(SiteKind::TypeUse.to_string(), "type use");
        assert_eq!(SiteKind::DynamicCall.to_string(), "dynamic call");
    }

    #[test]
    fn test_member_sites_carry_all_fields() {
        let call = AccessSite::method_call("foo/bar/Baz", "func_1234_a", "(III)Z");
        assert_eq!(call.owner(), Some("foo/bar/Baz"));
        assert_eq!(call.name(), Some("func_1234_a"));
        assert_eq!(call.desc(), Some("(III)Z"));
        assert!(call.is_member());

        let field = AccessSite::field_access("foo/bar/Baz", "field_5678_z", "Ljava/lang/String;");
        assert_eq!(field.owner(), Some("foo/bar/Baz"));
        assert_eq!(field.name(), Some("field_5678_z"));
        assert_eq!(field.desc(), Some("Ljava/lang/String;"));
        assert!(field.is_member());
    }

    #[test]
    fn test_type_use_has_only_owner() {
        let new = AccessSite::type_use("foo/bar/Baz");
        assert_eq!(new.owner(), Some("foo/bar/Baz"));
        assert_eq!(new.name(), None);
        assert_eq!(new.desc(), None);
        assert!(!new.is_member());
    }

    #[test]
    fn test_dynamic_call_has_no_owner() {
        let indy = AccessSite::dynamic_call("accept", "()Ljava/util/function/Consumer;");
        assert_eq!(indy.owner(), None);
        assert_eq!(indy.name(), Some("accept"));
        assert_eq!(indy.desc(), Some("()Ljava/util/function/Consumer;"));
        assert!(!indy.is_member());
    }
}
