//! End-to-end manifest transformation tests.

use semver::Version;
use serde_json::{Value, json};
use vext_config::{EnvironmentContext, Profile};
use vext_manifest::{RELAXED_EVAL_CSP, transform};

const TEMPLATE: &[u8] =
    br#"{"manifest_version":3,"name":"Ext","version":"0.0.0","permissions":["storage"]}"#;

fn env(profile: Profile, version: &str) -> EnvironmentContext {
    EnvironmentContext::new(profile, Version::parse(version).unwrap())
}

fn parse(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap()
}

#[test]
fn development_build_with_target_diff() {
    let diff = json!({"permissions": ["storage", "tabs"]});
    let out = transform(
        TEMPLATE,
        Some(&diff),
        &env(Profile::Development, "1.2.3"),
        None,
    )
    .unwrap();

    assert_eq!(
        parse(&out),
        json!({
            "manifest_version": 3,
            "name": "Ext",
            "version": "1.2.3",
            "permissions": ["storage", "tabs"],
            "content_security_policy": "script-src 'self' 'unsafe-eval'; object-src 'self'"
        })
    );
}

#[test]
fn release_build_without_diff() {
    let out = transform(TEMPLATE, None, &env(Profile::Release, "2.0.0"), None).unwrap();

    assert_eq!(
        parse(&out),
        json!({
            "manifest_version": 3,
            "name": "Ext",
            "version": "2.0.0",
            "permissions": ["storage"]
        })
    );
}

#[test]
fn beta_build_omits_csp() {
    let out = transform(TEMPLATE, None, &env(Profile::Beta, "1.0.0"), None).unwrap();
    assert!(parse(&out).get("content_security_policy").is_none());
}

#[test]
fn development_csp_is_the_relaxed_eval_policy() {
    let out = transform(TEMPLATE, None, &env(Profile::Development, "1.0.0"), None).unwrap();
    assert_eq!(
        parse(&out)["content_security_policy"],
        json!(RELAXED_EVAL_CSP)
    );
}

#[test]
fn version_is_always_stamped_over_the_template() {
    // Even a diff that tries to set a version loses to the stamp.
    let diff = json!({"version": "9.9.9"});
    let out = transform(
        TEMPLATE,
        Some(&diff),
        &env(Profile::Release, "3.1.4"),
        None,
    )
    .unwrap();
    assert_eq!(parse(&out)["version"], json!("3.1.4"));
}

#[test]
fn display_name_stamp_wins_over_diff() {
    let diff = json!({"name": "Renamed By Diff"});
    let out = transform(
        TEMPLATE,
        Some(&diff),
        &env(Profile::Development, "1.0.0"),
        Some("Acme Dev"),
    )
    .unwrap();
    assert_eq!(parse(&out)["name"], json!("Acme Dev"));
}

#[test]
fn authored_name_survives_without_stamping() {
    let diff = json!({"name": "Gecko Ext"});
    let out = transform(
        TEMPLATE,
        Some(&diff),
        &env(Profile::Release, "1.0.0"),
        None,
    )
    .unwrap();
    assert_eq!(parse(&out)["name"], json!("Gecko Ext"));
}

#[test]
fn nested_diff_objects_merge_instead_of_replacing() {
    let template = br#"{
        "manifest_version": 3,
        "name": "Ext",
        "version": "0.0.0",
        "permissions": [],
        "browser_specific_settings": {"gecko": {"strict_min_version": "109.0"}}
    }"#;
    let diff = json!({"browser_specific_settings": {"gecko": {"id": "ext@example.org"}}});
    let out = transform(template, Some(&diff), &env(Profile::Release, "1.0.0"), None).unwrap();

    let settings = &parse(&out)["browser_specific_settings"]["gecko"];
    assert_eq!(settings["id"], json!("ext@example.org"));
    assert_eq!(settings["strict_min_version"], json!("109.0"));
}

#[test]
fn transform_is_idempotent() {
    let diff = json!({"permissions": ["storage", "tabs"]});
    let environment = env(Profile::Development, "1.2.3");

    let once = transform(TEMPLATE, Some(&diff), &environment, None).unwrap();
    let twice = transform(&once, Some(&diff), &environment, None).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn identical_inputs_yield_byte_identical_output() {
    let environment = env(Profile::Beta, "1.2.3");
    let a = transform(TEMPLATE, None, &environment, None).unwrap();
    let b = transform(TEMPLATE, None, &environment, None).unwrap();
    assert_eq!(a, b);
}
