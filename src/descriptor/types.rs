use std::{fmt, fmt::Write as _};

use strum::{Display, EnumIter, EnumString};

/// A JVM base type, spelled as its single-character descriptor.
///
/// `V` is only legal as a method return type; the parser rejects it in field,
/// parameter and array-element positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum BaseType {
    /// `B` - signed 8bit integer
    #[strum(serialize = "B")]
    Byte,
    /// `C` - UTF-16 code unit
    #[strum(serialize = "C")]
    Char,
    /// `D` - 64bit floating-point
    #[strum(serialize = "D")]
    Double,
    /// `F` - 32bit floating-point
    #[strum(serialize = "F")]
    Float,
    /// `I` - signed 32bit integer
    #[strum(serialize = "I")]
    Int,
    /// `J` - signed 64bit integer
    #[strum(serialize = "J")]
    Long,
    /// `S` - signed 16bit integer
    #[strum(serialize = "S")]
    Short,
    /// `Z` - boolean
    #[strum(serialize = "Z")]
    Boolean,
    /// `V` - void, return type only
    #[strum(serialize = "V")]
    Void,
}

impl BaseType {
    /// Map a descriptor character to its base type, if it denotes one.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'B' => Some(BaseType::Byte),
            'C' => Some(BaseType::Char),
            'D' => Some(BaseType::Double),
            'F' => Some(BaseType::Float),
            'I' => Some(BaseType::Int),
            'J' => Some(BaseType::Long),
            'S' => Some(BaseType::Short),
            'Z' => Some(BaseType::Boolean),
            'V' => Some(BaseType::Void),
            _ => None,
        }
    }

    /// The single descriptor character for this base type.
    #[must_use]
    pub fn descriptor_char(self) -> char {
        match self {
            BaseType::Byte => 'B',
            BaseType::Char => 'C',
            BaseType::Double => 'D',
            BaseType::Float => 'F',
            BaseType::Int => 'I',
            BaseType::Long => 'J',
            BaseType::Short => 'S',
            BaseType::Boolean => 'Z',
            BaseType::Void => 'V',
        }
    }
}

/// A parsed field or component type.
///
/// The parser always produces the flat array form: `dims` counts every leading
/// `[` and `elem` is never itself an array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDesc {
    /// A primitive type
    Base(BaseType),
    /// A class or interface type; the name is in internal form without `L;`
    Object(String),
    /// An array type with 1-255 dimensions
    Array {
        /// Number of dimensions
        dims: u8,
        /// Element type
        elem: Box<TypeDesc>,
    },
}

impl TypeDesc {
    /// Number of local-variable or operand-stack slots a value of this type
    /// occupies: 2 for `long` and `double`, 0 for `void`, 1 otherwise.
    #[must_use]
    pub fn slot_width(&self) -> u32 {
        match self {
            TypeDesc::Base(BaseType::Long | BaseType::Double) => 2,
            TypeDesc::Base(BaseType::Void) => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for TypeDesc {
    /// Render this type back to descriptor text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDesc::Base(base) => write!(f, "{}", base),
            TypeDesc::Object(name) => write!(f, "L{};", name),
            TypeDesc::Array { dims, elem } => {
                for _ in 0..*dims {
                    f.write_char('[')?;
                }
                write!(f, "{}", elem)
            }
        }
    }
}

/// A parsed method descriptor: parameter types and return type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDesc {
    /// The parameter types, in declaration order
    pub params: Vec<TypeDesc>,
    /// The return type; `Base(Void)` for `void` methods
    pub ret: TypeDesc,
}

impl MethodDesc {
    /// Total number of argument slots this method's parameters occupy,
    /// counting `long` and `double` parameters twice. The receiver slot of
    /// instance methods is not included.
    #[must_use]
    pub fn arg_slots(&self) -> u32 {
        self.params.iter().map(TypeDesc::slot_width).sum()
    }
}

impl fmt::Display for MethodDesc {
    /// Render this method descriptor back to its `(…)R` text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('(')?;
        for param in &self.params {
            write!(f, "{}", param)?;
        }
        f.write_char(')')?;
        write!(f, "{}", self.ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_base_type_char_roundtrip() {
        for base in BaseType::iter() {
            assert_eq!(BaseType::from_char(base.descriptor_char()), Some(base));
            assert_eq!(base.to_string(), base.descriptor_char().to_string());
            assert_eq!(base.to_string().parse::<BaseType>().unwrap(), base);
        }
        assert_eq!(BaseType::from_char('X'), None);
        assert_eq!(BaseType::from_char('L'), None);
        assert_eq!(BaseType::from_char('['), None);
    }

    #[test]
    fn test_type_desc_display() {
        assert_eq!(TypeDesc::Base(BaseType::Int).to_string(), "I");
        assert_eq!(
            TypeDesc::Object("java/lang/String".to_string()).to_string(),
            "Ljava/lang/String;"
        );
        assert_eq!(
            TypeDesc::Array {
                dims: 2,
                elem: Box::new(TypeDesc::Base(BaseType::Double)),
            }
            .to_string(),
            "[[D"
        );
        assert_eq!(
            TypeDesc::Array {
                dims: 1,
                elem: Box::new(TypeDesc::Object("foo/bar/Baz".to_string())),
            }
            .to_string(),
            "[Lfoo/bar/Baz;"
        );
    }

    #[test]
    fn test_slot_widths() {
        assert_eq!(TypeDesc::Base(BaseType::Long).slot_width(), 2);
        assert_eq!(TypeDesc::Base(BaseType::Double).slot_width(), 2);
        assert_eq!(TypeDesc::Base(BaseType::Void).slot_width(), 0);
        assert_eq!(TypeDesc::Base(BaseType::Int).slot_width(), 1);
        assert_eq!(
            TypeDesc::Object("java/lang/Object".to_string()).slot_width(),
            1
        );
        // Arrays are references, one slot regardless of element type
        assert_eq!(
            TypeDesc::Array {
                dims: 1,
                elem: Box::new(TypeDesc::Base(BaseType::Long)),
            }
            .slot_width(),
            1
        );
    }

    #[test]
    fn test_method_desc_display_and_slots() {
        let desc = MethodDesc {
            params: vec![
                TypeDesc::Base(BaseType::Int),
                TypeDesc::Base(BaseType::Double),
                TypeDesc::Object("java/lang/String".to_string()),
            ],
            ret: TypeDesc::Base(BaseType::Boolean),
        };
        assert_eq!(desc.to_string(), "(IDLjava/lang/String;)Z");
        assert_eq!(desc.arg_slots(), 4);

        let nullary = MethodDesc {
            params: Vec::new(),
            ret: TypeDesc::Base(BaseType::Void),
        };
        assert_eq!(nullary.to_string(), "()V");
        assert_eq!(nullary.arg_slots(), 0);
    }
}
