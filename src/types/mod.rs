//! Type descriptors handed to the generator by the schema layer.
//!
//! The algebra is closed: a descriptor is a primitive, an array of another
//! descriptor, or a composite that wraps one. Every consumer matches on it
//! exhaustively, so adding a variant (objects, maps, user types) is a compile
//! error until each of them decides how to handle it.
use alloc::boxed::Box;

mod resolver;
pub use resolver::{
    go_native_type, go_type_name, go_type_ref, GoSyntax, RustSyntax, TypeResolver, TypeSyntax,
};

/// Primitive data kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PrimitiveKind {
    Boolean,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float32,
    Float64,
    String,
    /// Untyped value.
    Any,
}

impl PrimitiveKind {
    /// Every primitive kind, in declaration order.
    pub const ALL: [PrimitiveKind; 9] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::UInt32,
        PrimitiveKind::UInt64,
        PrimitiveKind::Float32,
        PrimitiveKind::Float64,
        PrimitiveKind::String,
        PrimitiveKind::Any,
    ];
}

/// Abstract description of a data shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(PrimitiveKind),
    /// Homogeneous array of the element type.
    ArrayOf(Box<TypeDescriptor>),
    /// Transparent wrapper, e.g. an attribute holding a type.
    CompositeOf(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    pub fn array_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::ArrayOf(Box::new(element))
    }

    pub fn composite_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor::CompositeOf(Box::new(inner))
    }

    /// Whether values of this type are passed by reference in generated code.
    /// None of the current variants are.
    pub fn is_object(&self) -> bool {
        match self {
            TypeDescriptor::Primitive(_)
            | TypeDescriptor::ArrayOf(_)
            | TypeDescriptor::CompositeOf(_) => false,
        }
    }

    /// Variant name, used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            TypeDescriptor::Primitive(_) => "Primitive",
            TypeDescriptor::ArrayOf(_) => "ArrayOf",
            TypeDescriptor::CompositeOf(_) => "CompositeOf",
        }
    }
}

impl From<PrimitiveKind> for TypeDescriptor {
    fn from(kind: PrimitiveKind) -> Self {
        TypeDescriptor::Primitive(kind)
    }
}
