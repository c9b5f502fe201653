//! Primitive type descriptors that drive one expansion each.

/// A primitive data type as named in Java source: `int` / `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Primitive keyword, e.g. `int`
    pub short_name: &'static str,
    /// Boxed wrapper class, e.g. `Integer`
    pub long_name: &'static str,
}

impl TypeDescriptor {
    pub const fn new(short_name: &'static str, long_name: &'static str) -> Self {
        Self {
            short_name,
            long_name,
        }
    }

    /// Short name with its first character ASCII upper-cased (`int` -> `Int`).
    pub fn capitalized(&self) -> String {
        let mut chars = self.short_name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Every type a template is expanded for, in generation order.
pub const DESCRIPTORS: [TypeDescriptor; 8] = [
    TypeDescriptor::new("byte", "Byte"),
    TypeDescriptor::new("short", "Short"),
    TypeDescriptor::new("int", "Integer"),
    TypeDescriptor::new("long", "Long"),
    TypeDescriptor::new("float", "Float"),
    TypeDescriptor::new("double", "Double"),
    TypeDescriptor::new("char", "Character"),
    TypeDescriptor::new("boolean", "Boolean"),
];
