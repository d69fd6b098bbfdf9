//! Whole-pipeline checks: header text and bindings text in, diff report out.

use bindcheck::{audit_files, audit_sources, HeaderOptions, SignatureMismatch};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/fixtures")
        .join(name)
}

fn fixture_text(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap()
}

#[test]
fn test_sample_bindings_match_sample_header() {
    let report = audit_files(
        &fixture("geos_c_sample.h"),
        &fixture("functions_sample.rs"),
        &HeaderOptions::default(),
    )
    .unwrap();

    assert!(report.missing.is_empty(), "missing: {:?}", report.missing);
    assert!(report.extra.is_empty(), "extra: {:?}", report.extra);
    assert!(
        report.mismatched.is_empty(),
        "mismatched: {:#?}",
        report.mismatched
    );
    assert_eq!(report.checked, 14);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_deprecated_exports_need_no_binding_by_default() {
    let header = fixture_text("geos_c_sample.h");
    let bindings = fixture_text("functions_sample.rs");

    let report = audit_sources(&header, &bindings, &HeaderOptions::new("GEOS_DLL")).unwrap();
    assert_eq!(
        report.missing.iter().collect::<Vec<_>>(),
        vec!["GEOSGeomFromWKT", "finishGEOS_r", "initGEOS_r"]
    );
}

#[test]
fn test_removed_binding_is_reported_missing() {
    let header = fixture_text("geos_c_sample.h");
    let bindings = fixture_text("functions_sample.rs")
        .replace("    pub fn GEOSFree(buffer: *mut c_void);\n", "");

    let report = audit_sources(&header, &bindings, &HeaderOptions::default()).unwrap();
    assert_eq!(report.missing.iter().collect::<Vec<_>>(), vec!["GEOSFree"]);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_changed_constness_in_multi_line_binding() {
    let header = fixture_text("geos_c_sample.h");
    let bindings =
        fixture_text("functions_sample.rs").replace("buf: *const c_double", "buf: *mut c_double");

    let report = audit_sources(&header, &bindings, &HeaderOptions::default()).unwrap();
    assert_eq!(report.mismatched.len(), 1);
    let result = &report.mismatched[0];
    assert_eq!(result.function_name, "GEOSCoordSeq_copyFromBuffer");
    assert_eq!(
        result.mismatches,
        vec![SignatureMismatch::Parameters {
            expected: "*const c_double,c_uint,c_int,c_int".to_string(),
            found: "*mut c_double,c_uint,c_int,c_int".to_string(),
        }]
    );
}

#[test]
fn test_unbound_export_with_empty_deny_list() {
    let header = "extern int GEOS_DLL GEOSFunc(const double * arg);\n";

    let report = audit_sources(header, "", &HeaderOptions::new("GEOS_DLL")).unwrap();
    assert_eq!(report.missing.iter().collect::<Vec<_>>(), vec!["GEOSFunc"]);
    assert!(report.extra.is_empty());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_detached_star_parameter_matches_const_pointer() {
    let header = "extern int GEOS_DLL GEOSFunc(const double * arg);\n";
    let bindings = "pub fn GEOSFunc(arg: *const c_double) -> c_int;\n";

    let report = audit_sources(header, bindings, &HeaderOptions::new("GEOS_DLL")).unwrap();
    assert!(report.is_clean(), "{report:#?}");
    assert_eq!(report.checked, 1);
}

#[test]
fn test_unknown_binding_is_extra() {
    let header = "extern void GEOS_DLL F(int x);\n";
    let bindings = indoc! {"
        extern \"C\" {
            pub fn F(x: c_int);
            pub fn G();
        }
    "};

    let report = audit_sources(header, bindings, &HeaderOptions::default()).unwrap();
    assert_eq!(report.extra.iter().collect::<Vec<_>>(), vec!["G"]);
    assert!(!report.missing.contains("F"));
    assert!(!report.extra.contains("F"));
    assert!(report.mismatched.is_empty());
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_parameter_constness_mismatch() {
    let header = "extern int GEOS_DLL F(const double* values);\n";
    let bindings = "pub fn F(values: *mut c_double) -> c_int;\n";

    let report = audit_sources(header, bindings, &HeaderOptions::default()).unwrap();
    assert_eq!(report.mismatched.len(), 1);
    assert!(matches!(
        report.mismatched[0].mismatches[0],
        SignatureMismatch::Parameters { .. }
    ));
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_void_return_equals_absent_return() {
    let header = "extern void GEOS_DLL GEOSFree(void *buffer);\n";
    let bindings = "pub fn GEOSFree(buffer: *mut c_void);\n";

    let report = audit_sources(header, bindings, &HeaderOptions::default()).unwrap();
    assert!(report.is_clean());
}

#[test]
fn test_void_return_against_c_void_binding() {
    let header = "extern void GEOS_DLL GEOSFree(void *buffer);\n";
    let bindings = "pub fn GEOSFree(buffer: *mut c_void) -> c_void;\n";

    let report = audit_sources(header, bindings, &HeaderOptions::default()).unwrap();
    assert_eq!(report.mismatched.len(), 1);
    assert_eq!(
        report.mismatched[0].mismatches,
        vec![SignatureMismatch::ReturnType {
            expected: String::new(),
            found: "c_void".to_string(),
        }]
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_deny_listed_name_never_missing() {
    let header = indoc! {"
        extern void GEOS_DLL GEOSLegacy(int x);
        extern void GEOS_DLL GEOSCurrent(int x);
    "};
    let options = HeaderOptions::new("GEOS_DLL").with_ignored(["GEOSLegacy"]);

    let report = audit_sources(header, "", &options).unwrap();
    assert_eq!(report.missing.iter().collect::<Vec<_>>(), vec!["GEOSCurrent"]);
}

#[test]
fn test_duplicate_binding_counts_as_extra() {
    let header = "extern void GEOS_DLL finishGEOS(void);\n";
    let bindings = indoc! {"
        pub fn finishGEOS();
        pub fn finishGEOS();
    "};

    let report = audit_sources(header, bindings, &HeaderOptions::default()).unwrap();
    assert_eq!(report.checked, 1);
    assert_eq!(report.extra.iter().collect::<Vec<_>>(), vec!["finishGEOS"]);
}

#[test]
fn test_custom_export_marker() {
    let header = indoc! {"
        PROJ_DLL PJ_CONTEXT *proj_context_create(void);
        PROJ_DLL int proj_context_errno(PJ_CONTEXT *ctx);
    "};
    let bindings = indoc! {"
        pub fn proj_context_create() -> *mut PJ_CONTEXT;
        pub fn proj_context_errno(ctx: *mut PJ_CONTEXT) -> c_int;
    "};

    let report = audit_sources(header, bindings, &HeaderOptions::new("PROJ_DLL")).unwrap();
    assert!(report.is_clean(), "{report:#?}");
}
