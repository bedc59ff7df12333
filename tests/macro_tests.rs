//! Compile-time tests for `#[derive(Symbol)]` using trybuild.

#[test]
fn ui_tests() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/symbol_basic.rs");
    t.pass("tests/ui/symbol_renamed.rs");
    t.pass("tests/ui/symbol_generic.rs");
    t.pass("tests/ui/symbol_enum.rs");
    t.pass("tests/ui/symbol_crate_path.rs");
}
