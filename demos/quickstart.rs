//! # Quickstart Example
//!
//! Minimal example demonstrating the basics of codegen-naming:
//! - Normalize schema names into Go identifiers
//! - Resolve type descriptors into Go type names
//! - Load a custom configuration targeting Rust
//!
//! ```bash
//! cargo run --example quickstart
//! ```

use codegen_naming::{
    go_native_type, go_type_name, goify, PrimitiveKind, Settings, TypeDescriptor,
};

fn main() {
    println!("=== codegen-naming Quickstart ===\n");

    // ======================================================================
    // 1. Identifiers
    // ======================================================================
    println!("1. Go identifiers");

    for name in ["pet_id", "http status", "X-Request-Id", "type", "foo__bar"] {
        println!(
            "   {:<14} -> {:<14} {}",
            format!("{name:?}"),
            goify(name, true),
            goify(name, false)
        );
    }

    // ======================================================================
    // 2. Type names
    // ======================================================================
    println!("\n2. Go type names");

    let tags = TypeDescriptor::array_of(PrimitiveKind::String.into());
    let wrapped = TypeDescriptor::composite_of(tags.clone());

    println!("   native(tags)    = {}", go_native_type(&tags));
    println!("   native(wrapped) = {}", go_native_type(&wrapped));
    match go_type_name(&wrapped) {
        Ok(name) => println!("   name(wrapped)   = {name}"),
        Err(e) => println!("   name(wrapped)   : {e}"),
    }

    // ======================================================================
    // 3. Custom configuration
    // ======================================================================
    println!("\n3. Rust target with extra initialisms");

    let document = r#"{ "target": "rust", "extra_initialisms": ["GRPC"] }"#;
    let settings = match Settings::from_json(document) {
        Ok(settings) => settings,
        Err(e) => {
            println!("   invalid configuration: {e}");
            return;
        }
    };
    let normalizer = settings.normalizer();
    let resolver = settings.type_resolver();

    println!("   {}", normalizer.normalize("grpc_client", true));
    println!("   {}", normalizer.normalize("self", false));
    if let Ok(name) = resolver.type_name(&tags) {
        println!("   {name}");
    }
}
