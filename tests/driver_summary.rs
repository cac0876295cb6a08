use assert_fs::prelude::*;
use asset_copy::{run_manifest, Config, CopyRequest};
use std::fs;

fn cfg_with(manifest: Vec<CopyRequest>) -> Config {
    let mut cfg = Config::new(manifest);
    cfg.log_file = None;
    cfg
}

/// One real source and one non-existent source: exactly 1 success, 1 recorded
/// failure, and the driver must not stop at the failing request.
#[test]
fn mixed_manifest_reports_one_of_two() {
    let temp = assert_fs::TempDir::new().unwrap();

    let good_src = temp.child("present.png");
    good_src.write_binary(b"pixels").unwrap();

    // Failing request goes first to prove the driver continues past it.
    let manifest = vec![
        CopyRequest::new(temp.path().join("missing.png"), temp.path().join("out/a.png"))
            .labelled("ghost"),
        CopyRequest::new(good_src.path(), temp.path().join("out/b.png")).labelled("real"),
    ];

    let summary = run_manifest(&cfg_with(manifest));

    assert_eq!(summary.total, 2);
    assert_eq!(summary.succeeded, 1);
    assert_eq!(summary.failures.len(), 1);
    assert!(!summary.all_succeeded());

    let failure = &summary.failures[0];
    assert_eq!(failure.index, 0);
    assert_eq!(failure.name, "ghost");
    assert!(failure.error.contains("does not exist"));

    // The request after the failure still ran.
    assert_eq!(fs::read(temp.path().join("out/b.png")).unwrap(), b"pixels");
    assert!(!temp.path().join("out/a.png").exists());
}

#[test]
fn all_good_manifest_reports_full_success() {
    let temp = assert_fs::TempDir::new().unwrap();

    let src1 = temp.child("one.png");
    let src2 = temp.child("two.png");
    src1.write_binary(b"one").unwrap();
    src2.write_binary(b"two").unwrap();

    let manifest = vec![
        CopyRequest::new(src1.path(), temp.path().join("assets/one.png")),
        CopyRequest::new(src2.path(), temp.path().join("assets/two.png")),
    ];

    let summary = run_manifest(&cfg_with(manifest));

    assert_eq!(summary.total, 2);
    assert_eq!(summary.succeeded, 2);
    assert!(summary.all_succeeded());
    assert_eq!(fs::read(temp.path().join("assets/one.png")).unwrap(), b"one");
    assert_eq!(fs::read(temp.path().join("assets/two.png")).unwrap(), b"two");
}

#[test]
fn requests_are_processed_in_manifest_order() {
    let temp = assert_fs::TempDir::new().unwrap();

    let src1 = temp.child("src.bin");
    let src2 = temp.child("src2.bin");
    src1.write_binary(b"v1").unwrap();
    src2.write_binary(b"v2").unwrap();
    let dest = temp.path().join("dest.bin");

    // Same destination twice: the later entry must win.
    let manifest = vec![
        CopyRequest::new(src1.path(), &dest),
        CopyRequest::new(src2.path(), &dest),
    ];

    let summary = run_manifest(&cfg_with(manifest));
    assert_eq!(summary.succeeded, 2);
    assert_eq!(fs::read(&dest).unwrap(), b"v2");
}

/// Dry-run reports what it would do and leaves the filesystem untouched.
#[test]
fn dry_run_touches_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();

    let src = temp.child("src.png");
    src.write_binary(b"data").unwrap();
    let dest = temp.path().join("never/created.png");

    let mut cfg = cfg_with(vec![CopyRequest::new(src.path(), &dest)]);
    cfg.dry_run = true;

    let summary = run_manifest(&cfg);
    assert_eq!(summary.succeeded, 1);
    assert!(summary.all_succeeded());
    assert!(!dest.exists());
    assert!(!dest.parent().unwrap().exists());
}
