//! Type name resolution for the target language.
//!
//! Three views of a descriptor:
//! - *native type name*: the built-in type instances can be initialized from;
//!   composites are unwrapped,
//! - *type name*: the name used in declarations; arrays name their elements
//!   by reference,
//! - *type reference*: the type name behind the reference sigil when the type
//!   is passed by reference.
use alloc::format;
use alloc::string::{String, ToString};

use super::{PrimitiveKind, TypeDescriptor};
use crate::error::ResolveError;
use crate::target::TargetLanguage;

//==================================================================================SYNTAX
/// Spelling of types in a target language.
pub trait TypeSyntax {
    /// Fixed name of a primitive kind.
    fn primitive(&self, kind: PrimitiveKind) -> &'static str;
    /// Array type whose elements are named `element`.
    fn array_of(&self, element: &str) -> String;
    /// Reference (pointer) to the type named `name`.
    fn reference_to(&self, name: &str) -> String;
}

/// Go spelling: `[]T` arrays, `*T` references, `interface{}` for untyped values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoSyntax;

impl TypeSyntax for GoSyntax {
    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::UInt32 => "uint32",
            PrimitiveKind::UInt64 => "uint64",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::Float64 => "float64",
            PrimitiveKind::String => "string",
            PrimitiveKind::Any => "interface{}",
        }
    }

    fn array_of(&self, element: &str) -> String {
        format!("[]{element}")
    }

    fn reference_to(&self, name: &str) -> String {
        format!("*{name}")
    }
}

/// Rust spelling: `Vec<T>` arrays, `Box<T>` references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RustSyntax;

impl TypeSyntax for RustSyntax {
    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match kind {
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Int32 => "i32",
            PrimitiveKind::Int64 => "i64",
            PrimitiveKind::UInt32 => "u32",
            PrimitiveKind::UInt64 => "u64",
            PrimitiveKind::Float32 => "f32",
            PrimitiveKind::Float64 => "f64",
            PrimitiveKind::String => "String",
            PrimitiveKind::Any => "Box<dyn core::any::Any>",
        }
    }

    fn array_of(&self, element: &str) -> String {
        format!("Vec<{element}>")
    }

    fn reference_to(&self, name: &str) -> String {
        format!("Box<{name}>")
    }
}

/// Run-time choice of syntax.
impl TypeSyntax for TargetLanguage {
    fn primitive(&self, kind: PrimitiveKind) -> &'static str {
        match self {
            TargetLanguage::Go => GoSyntax.primitive(kind),
            TargetLanguage::Rust => RustSyntax.primitive(kind),
        }
    }

    fn array_of(&self, element: &str) -> String {
        match self {
            TargetLanguage::Go => GoSyntax.array_of(element),
            TargetLanguage::Rust => RustSyntax.array_of(element),
        }
    }

    fn reference_to(&self, name: &str) -> String {
        match self {
            TargetLanguage::Go => GoSyntax.reference_to(name),
            TargetLanguage::Rust => RustSyntax.reference_to(name),
        }
    }
}

//==================================================================================RESOLVER
/// Maps type descriptors to type names spelled with `S`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeResolver<S = GoSyntax> {
    syntax: S,
}

impl TypeResolver<GoSyntax> {
    pub const fn go() -> Self {
        Self { syntax: GoSyntax }
    }
}

impl TypeResolver<RustSyntax> {
    pub const fn rust() -> Self {
        Self { syntax: RustSyntax }
    }
}

impl<S: TypeSyntax> TypeResolver<S> {
    pub const fn new(syntax: S) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> &S {
        &self.syntax
    }

    /// Built-in type from which instances of `descriptor` can be initialized.
    /// Total over the descriptor algebra.
    pub fn native_type_name(&self, descriptor: &TypeDescriptor) -> String {
        match descriptor {
            TypeDescriptor::Primitive(kind) => self.syntax.primitive(*kind).to_string(),
            TypeDescriptor::ArrayOf(element) => {
                self.syntax.array_of(&self.native_type_name(element))
            }
            TypeDescriptor::CompositeOf(inner) => self.native_type_name(inner),
        }
    }

    /// Declared type name. Only primitives and arrays have one; anything else
    /// reaching this point is a bug in whoever built the descriptor.
    pub fn type_name(&self, descriptor: &TypeDescriptor) -> Result<String, ResolveError> {
        match descriptor {
            TypeDescriptor::Primitive(_) => Ok(self.native_type_name(descriptor)),
            TypeDescriptor::ArrayOf(element) => {
                Ok(self.syntax.array_of(&self.type_reference(element)?))
            }
            TypeDescriptor::CompositeOf(_) => Err(unsupported(descriptor)),
        }
    }

    /// Type name, behind the reference sigil for object-like types.
    pub fn type_reference(&self, descriptor: &TypeDescriptor) -> Result<String, ResolveError> {
        let name = self.type_name(descriptor)?;
        if descriptor.is_object() {
            Ok(self.syntax.reference_to(&name))
        } else {
            Ok(name)
        }
    }
}

fn unsupported(descriptor: &TypeDescriptor) -> ResolveError {
    #[cfg(feature = "defmt")]
    defmt::error!(
        "no type name for {=str} descriptor",
        descriptor.variant_name()
    );
    ResolveError::UnsupportedDescriptor {
        descriptor: descriptor.variant_name(),
    }
}

//==================================================================================GO
/// Go built-in type from which instances of `descriptor` can be initialized.
pub fn go_native_type(descriptor: &TypeDescriptor) -> String {
    TypeResolver::go().native_type_name(descriptor)
}

/// Go type name of `descriptor`.
pub fn go_type_name(descriptor: &TypeDescriptor) -> Result<String, ResolveError> {
    TypeResolver::go().type_name(descriptor)
}

/// Go code that refers to the type of `descriptor`.
pub fn go_type_ref(descriptor: &TypeDescriptor) -> Result<String, ResolveError> {
    TypeResolver::go().type_reference(descriptor)
}
