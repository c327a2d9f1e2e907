#[test]
fn ahub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ahub_error_pass.rs");
}
