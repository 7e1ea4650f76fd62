use crate::{
    descriptor::{BaseType, MethodDesc, TypeDesc},
    Error::Truncated,
    Result,
};

/// Descriptor parser covering the field, method and bare-type forms of the
/// JVM descriptor grammar.
///
/// The parser is strict: it consumes the entire input and rejects trailing
/// characters, dotted class names, `V` outside return position, and array
/// types beyond the 255-dimension limit of the class file format.
///
/// # Example
///
/// ```rust
/// use membersel::descriptor::DescriptorParser;
///
/// let mut parser = DescriptorParser::new("(IDLjava/lang/String;)Z");
/// let desc = parser.parse_method_descriptor().unwrap();
/// assert_eq!(desc.params.len(), 3);
/// ```
///
/// ## Notes:
/// - A parser instance is good for one descriptor; create a fresh one per
///   input rather than re-using an instance.
pub struct DescriptorParser<'a> {
    data: &'a str,
    pos: usize,
}

impl<'a> DescriptorParser<'a> {
    /// Create a new `DescriptorParser` over the given descriptor text.
    #[must_use]
    pub fn new(data: &'a str) -> Self {
        DescriptorParser { data, pos: 0 }
    }

    /// Parse a complete field descriptor: a single type, `V` not permitted.
    ///
    /// # Errors
    /// Returns an error if the text is not exactly one well-formed field type.
    pub fn parse_field_descriptor(&mut self) -> Result<TypeDesc> {
        let desc = self.parse_type(false)?;
        self.ensure_done()?;
        Ok(desc)
    }

    /// Parse a complete method descriptor in `(ParameterTypes)ReturnType` form.
    ///
    /// # Errors
    /// Returns an error if the parameter list or return type is malformed, or
    /// if characters remain after the return type.
    pub fn parse_method_descriptor(&mut self) -> Result<MethodDesc> {
        let open = self.advance()?;
        if open != b'(' {
            return Err(malformed_error!(
                "Method descriptor must start with '(' - found '{}'",
                char::from(open)
            ));
        }

        let mut params = Vec::new();
        while self.peek()? != b')' {
            params.push(self.parse_type(false)?);
        }
        self.advance()?;

        let ret = self.parse_type(true)?;
        self.ensure_done()?;
        Ok(MethodDesc { params, ret })
    }

    /// Parse a complete single-type descriptor, with `V` permitted.
    ///
    /// # Errors
    /// Returns an error if the text is not exactly one well-formed type.
    pub fn parse_type_descriptor(&mut self) -> Result<TypeDesc> {
        let desc = self.parse_type(true)?;
        self.ensure_done()?;
        Ok(desc)
    }

    /// Parse a single type at the cursor.
    fn parse_type(&mut self, allow_void: bool) -> Result<TypeDesc> {
        match self.peek()? {
            b'[' => {
                let mut dims: u8 = 0;
                while self.peek()? == b'[' {
                    self.advance()?;
                    dims = dims
                        .checked_add(1)
                        .ok_or_else(|| malformed_error!("Array type exceeds 255 dimensions"))?;
                }
                let elem = self.parse_type(false)?;
                Ok(TypeDesc::Array {
                    dims,
                    elem: Box::new(elem),
                })
            }
            b'L' => {
                self.advance()?;
                let rest = &self.data[self.pos..];
                let Some(semi) = rest.find(';') else {
                    return Err(Truncated);
                };
                let name = &rest[..semi];
                if name.is_empty() {
                    return Err(malformed_error!("Class type with empty name"));
                }
                if name.contains('.') {
                    return Err(malformed_error!(
                        "Class name '{}' must be in internal form",
                        name
                    ));
                }
                self.pos += semi + 1;
                Ok(TypeDesc::Object(name.to_string()))
            }
            current => match BaseType::from_char(char::from(current)) {
                Some(BaseType::Void) if !allow_void => {
                    Err(malformed_error!("'V' is only valid as a return type"))
                }
                Some(base) => {
                    self.advance()?;
                    Ok(TypeDesc::Base(base))
                }
                None => Err(malformed_error!(
                    "Unknown descriptor character '{}'",
                    char::from(current)
                )),
            },
        }
    }

    fn peek(&self) -> Result<u8> {
        self.data.as_bytes().get(self.pos).copied().ok_or(Truncated)
    }

    fn advance(&mut self) -> Result<u8> {
        let current = self.peek()?;
        self.pos += 1;
        Ok(current)
    }

    fn ensure_done(&self) -> Result<()> {
        if self.pos < self.data.len() {
            return Err(malformed_error!(
                "Trailing characters after descriptor - '{}'",
                &self.data[self.pos..]
            ));
        }
        Ok(())
    }
}
