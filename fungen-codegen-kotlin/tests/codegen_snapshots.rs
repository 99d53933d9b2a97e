//! Snapshot tests for Kotlin function generation.
//!
//! These tests verify that the generated Kotlin code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use fungen_codegen::{DiagnosticCollector, MemorySink};
use fungen_codegen_kotlin::FunctionProcessor;
use fungen_manifest::Manifest;

/// Run one pass over a manifest and return the generated file and diagnostics.
fn generate(manifest_toml: &str) -> (String, Vec<String>) {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let processor = FunctionProcessor::new(manifest.processor.clone());

    let mut sink = MemorySink::new();
    let mut logger = DiagnosticCollector::new();
    processor
        .process(&manifest.declarations, &mut sink, &mut logger)
        .expect("Pass failed");

    let content = sink
        .content(&manifest.processor.package, &manifest.processor.file_name)
        .unwrap_or_default()
        .to_string();
    let diagnostics = logger.diagnostics().iter().map(|d| d.to_string()).collect();
    (content, diagnostics)
}

#[test]
fn test_greeter() {
    let (content, diagnostics) = generate(
        r#"
        [[declarations]]
        name = "org.example.Greeter"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "greet" }

        [[declarations.properties]]
        name = "x"
        type = { name = "kotlin.Int" }
        "#,
    );

    assert!(diagnostics.is_empty());
    insta::assert_snapshot!("greeter", content);
}

#[test]
fn test_generic_properties() {
    let (content, diagnostics) = generate(
        r#"
        [[declarations]]
        name = "org.example.Inventory"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "stock" }

        [[declarations.properties]]
        name = "name"
        type = { name = "kotlin.String", nullable = true }

        [[declarations.properties]]
        name = "items"
        type = { name = "kotlin.collections.List", arguments = [{ variance = "out", type = { name = "kotlin.Int" } }] }

        [[declarations.properties]]
        name = "counts"

        [declarations.properties.type]
        name = "kotlin.collections.Map"
        nullable = true
        arguments = [
            { type = { name = "kotlin.String" } },
            { variance = "in", type = { name = "kotlin.collections.List", arguments = [{ variance = "star" }] } },
        ]

        [[declarations.properties]]
        name = "hidden"
        type = { name = "kotlin.Int" }
        valid = false

        [[declarations]]
        name = "org.example.Empty"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "empty" }
        "#,
    );

    assert!(diagnostics.is_empty());
    insta::assert_snapshot!("generic_properties", content);
}

#[test]
fn test_mixed_corpus() {
    let (content, diagnostics) = generate(
        r#"
        [[declarations]]
        name = "org.example.First"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "first" }

        [[declarations]]
        name = "org.example.NotAnObject"
        kind = "class"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "skipped" }

        [[declarations]]
        name = "org.example.Broken"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "broken" }

        [[declarations.properties]]
        name = "value"
        type = { nullable = true }

        [[declarations]]
        name = "org.example.Unmarked"
        kind = "object"

        [[declarations]]
        name = "org.example.Last"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "last" }

        [[declarations.properties]]
        name = "flag"
        type = { name = "kotlin.Boolean" }
        "#,
    );

    assert_eq!(
        diagnostics,
        [
            "error: only objects can be annotated with @Function (at org.example.NotAnObject)",
            "error: invalid property type (at org.example.Broken.value)",
        ]
    );
    insta::assert_snapshot!("mixed_corpus", content);
}

#[test]
fn test_keep_partial() {
    let (content, diagnostics) = generate(
        r#"
        [processor]
        on_invalid_type = "keep-partial"

        [[declarations]]
        name = "org.example.Broken"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "broken" }

        [[declarations.properties]]
        name = "ok"
        type = { name = "kotlin.Int" }

        [[declarations.properties]]
        name = "bad"
        type = { name = "kotlin.collections.List", arguments = [{ variance = "out" }] }

        [[declarations.properties]]
        name = "after"
        type = { name = "kotlin.String", nullable = true }

        [[declarations]]
        name = "org.example.Next"
        kind = "object"

        [[declarations.annotations]]
        name = "org.example.Function"
        arguments = { erstesArgument = "next" }
        "#,
    );

    assert_eq!(
        diagnostics,
        ["error: invalid type argument (at org.example.Broken.bad)"]
    );
    assert_eq!(
        content,
        concat!(
            "package org.example\n",
            "fun broken(\n",
            "    ok: kotlin.Int,\n",
            "    bad: kotlin.collections.List<out >,\n",
            "    after: kotlin.String?,\n",
            ") {\n",
            "    println(\"Hallo aus Funktion -> broken\")\n",
            "}\n",
            "fun next() {\n",
            "    println(\"Hallo aus Funktion -> next\")\n",
            "}\n",
        )
    );
}
