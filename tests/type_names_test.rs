//! End-to-end type name resolution through the public API.
use codegen_naming::{
    go_native_type, go_type_name, go_type_ref, PrimitiveKind, ResolveError, TypeDescriptor,
    TypeResolver,
};

#[test]
/// Nested arrays resolve level by level in every view.
fn nested_arrays_resolve_in_every_view() {
    let matrix = TypeDescriptor::array_of(TypeDescriptor::array_of(PrimitiveKind::Int32.into()));

    assert_eq!(go_native_type(&matrix), "[][]int32");
    assert_eq!(go_type_name(&matrix).unwrap(), "[][]int32");
    assert_eq!(go_type_ref(&matrix).unwrap(), "[][]int32");
    assert_eq!(
        TypeResolver::rust().type_reference(&matrix).unwrap(),
        "Vec<Vec<i32>>"
    );
}

#[test]
/// Composite wrappers are transparent for native names but have no type name.
fn composite_wrappers() {
    let attribute = TypeDescriptor::composite_of(TypeDescriptor::array_of(
        PrimitiveKind::Float64.into(),
    ));

    assert_eq!(go_native_type(&attribute), "[]float64");
    let err = go_type_name(&attribute).unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnsupportedDescriptor {
            descriptor: "CompositeOf"
        }
    );
    assert!(err.to_string().contains("CompositeOf"));
}

#[test]
/// Deep nesting resolves without special casing.
fn deep_nesting() {
    let mut descriptor = TypeDescriptor::from(PrimitiveKind::Boolean);
    for _ in 0..32 {
        descriptor = TypeDescriptor::array_of(descriptor);
    }
    let expected = format!("{}bool", "[]".repeat(32));
    assert_eq!(go_native_type(&descriptor), expected);
    assert_eq!(go_type_name(&descriptor).unwrap(), expected);
}
