use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use float_core::{AnswerSet, PackageMeta, TestFramework};
use float_scaffold::{pipeline, ScaffoldError, ScaffoldOptions, WriteResult};
use predicates::prelude::*;

const EXPECTED_FILES: &[&str] = &[
    ".bowerrc",
    ".editorconfig",
    ".gitattributes",
    ".gitignore",
    ".jshintrc",
    "app/index.html",
    "app/scripts/app.js",
    "app/styles/style.scss",
    "bower.json",
    "gulpfile.js",
    "package.json",
];

fn options(root: &Path) -> ScaffoldOptions {
    let mut opts = ScaffoldOptions::new(root, PackageMeta::new("float-cli", "0.1.0"));
    opts.test_framework = TestFramework::None;
    opts.skip_install = true;
    opts
}

fn collect_files(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("read_dir") {
        let path = entry.expect("entry").path();
        if path.is_dir() {
            collect_files(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).expect("prefix");
            out.insert(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

#[test]
fn default_run_writes_exactly_the_fixed_file_set() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("site");
    let report = pipeline::run(&AnswerSet::default(), &options(root.path())).expect("run");

    let mut found = BTreeSet::new();
    collect_files(root.path(), root.path(), &mut found);
    let expected: BTreeSet<String> = EXPECTED_FILES.iter().map(|s| s.to_string()).collect();
    assert_eq!(found, expected);

    assert_eq!(report.writes.len(), EXPECTED_FILES.len());
    assert!(report
        .writes
        .iter()
        .all(|w| matches!(w, WriteResult::Created { .. })));
    root.child("app/images").assert(predicate::path::is_dir());
}

#[test]
fn grid_and_bourbon_scenario_renders_into_files() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("acme");
    let answers: AnswerSet =
        serde_json::from_str(r#"{"siteName":"Acme","includeBourbon":true,"features":["grid"]}"#)
            .expect("answers");
    let report = pipeline::run(&answers, &options(root.path())).expect("run");

    assert!(report.decisions.include_grid);
    assert!(report.decisions.include_bourbon);
    root.child("gulpfile.js")
        .assert(predicate::str::contains("require('node-neat')"));
    root.child("app/index.html")
        .assert(predicate::str::contains("<title>Acme</title>"));
    root.child("app/scripts/app.js")
        .assert("console.log('Welcome to Float!');\n");
}

#[test]
fn rerun_with_same_answers_is_identical() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("again");
    let opts = options(root.path());
    pipeline::run(&AnswerSet::default(), &opts).expect("first");
    let second = pipeline::run(&AnswerSet::default(), &opts).expect("second");
    assert!(second
        .writes
        .iter()
        .all(|w| matches!(w, WriteResult::Identical { .. })));
}

#[test]
fn changed_answers_overwrite_templated_files_only() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("change");
    let opts = options(root.path());
    pipeline::run(&AnswerSet::default(), &opts).expect("first");

    let answers = AnswerSet {
        features: vec!["modernizr".into()],
        ..AnswerSet::default()
    };
    let second = pipeline::run(&answers, &opts).expect("second");
    let overwritten: Vec<PathBuf> = second
        .writes
        .iter()
        .filter(|w| matches!(w, WriteResult::Overwritten { .. }))
        .map(|w| w.path().strip_prefix(root.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(overwritten, vec![PathBuf::from("app/index.html")]);
}

#[test]
fn invalid_icon_font_aborts_before_writing() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("broken");
    let answers = AnswerSet {
        features: vec!["iconfont".into()],
        which_icon_font: Some("icomoon".into()),
        ..AnswerSet::default()
    };
    let err = pipeline::run(&answers, &options(root.path())).unwrap_err();
    assert!(matches!(err, ScaffoldError::Resolve(_)));
    assert!(err.to_string().contains("'icomoon' is not one of"));
    root.assert(predicate::path::missing());
}

#[test]
fn file_in_place_of_directory_is_io_error() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("blocked");
    root.create_dir_all().expect("mkdir");
    root.child("app").write_str("not a directory").expect("write");

    let err = pipeline::run(&AnswerSet::default(), &options(root.path())).unwrap_err();
    match err {
        ScaffoldError::Io { path, .. } => assert!(path.starts_with(root.path())),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
#[cfg(unix)]
fn install_failure_is_reported_not_fatal() {
    let tmp = assert_fs::TempDir::new().expect("tmp");
    let root = tmp.child("install");
    let mut opts = options(root.path());
    opts.skip_install = false;
    // Empty PATH: neither npm nor bower can be spawned.
    let saved = std::env::var_os("PATH");
    std::env::set_var("PATH", "");
    let report = pipeline::run(&AnswerSet::default(), &opts);
    match saved {
        Some(p) => std::env::set_var("PATH", p),
        None => std::env::remove_var("PATH"),
    }

    let report = report.expect("install failures must not abort");
    assert!(!report.install_skipped);
    assert_eq!(report.install.len(), 2);
    assert_eq!(report.warnings().len(), 2);
    root.child("package.json").assert(predicate::path::is_file());
}
