use asset_copy::copy_ops::guarded_copy;
use asset_copy::AssetCopyError;
use std::fs;
use std::io::Write;
use tempfile::tempdir;

/// Create a file with the given bytes and fsync it (to avoid flakiness in tests).
fn create_file_with_bytes(path: &std::path::Path, content: &[u8]) {
    let mut f = fs::File::create(path).expect("create source file");
    f.write_all(content).expect("write source content");
    f.sync_all().expect("sync source file");
}

#[test]
fn copies_bytes_and_creates_missing_parent_tree() {
    let td = tempdir().unwrap();

    // 10-byte source 0x00..0x09; destination two levels deep, nothing exists yet.
    let src = td.path().join("logo.png");
    let data: Vec<u8> = (0u8..10).collect();
    create_file_with_bytes(&src, &data);

    let dest = td.path().join("assets").join("images").join("logo.png");
    assert!(!dest.parent().unwrap().exists());

    let outcome = guarded_copy(&src, &dest).expect("guarded_copy");

    assert!(dest.parent().unwrap().is_dir(), "parent tree not created");
    assert!(dest.is_file(), "destination not created");
    assert_eq!(outcome.bytes, 10);
    assert_eq!(
        outcome.created_dir.as_deref(),
        Some(dest.parent().unwrap()),
        "created_dir should name the parent that was made"
    );
    assert_eq!(fs::read(&dest).unwrap(), data);
}

#[test]
fn replaces_existing_destination_content() {
    let td = tempdir().unwrap();

    let src = td.path().join("new.bin");
    create_file_with_bytes(&src, b"new content");

    let dest = td.path().join("out").join("file.bin");
    fs::create_dir_all(dest.parent().unwrap()).unwrap();
    fs::write(&dest, "old").unwrap();

    let outcome = guarded_copy(&src, &dest).expect("guarded_copy overwrite");
    assert!(outcome.created_dir.is_none(), "parent already existed");
    assert_eq!(fs::read(&dest).unwrap(), b"new content");
}

#[test]
fn repeating_a_request_is_idempotent() {
    let td = tempdir().unwrap();

    let src = td.path().join("a.png");
    create_file_with_bytes(&src, b"\x89PNG fake payload");
    let dest = td.path().join("images").join("a.png");

    guarded_copy(&src, &dest).expect("first copy");
    let first = fs::read(&dest).unwrap();
    guarded_copy(&src, &dest).expect("second copy");
    let second = fs::read(&dest).unwrap();

    assert_eq!(first, second);
    assert_eq!(second, fs::read(&src).unwrap());
}

#[test]
fn missing_source_fails_and_leaves_existing_destination_alone() {
    let td = tempdir().unwrap();

    let src = td.path().join("nope.png");
    let dest = td.path().join("keep.png");
    fs::write(&dest, "precious").unwrap();

    let err = guarded_copy(&src, &dest).unwrap_err();
    let typed = err
        .downcast_ref::<AssetCopyError>()
        .expect("typed error expected");
    assert!(matches!(typed, AssetCopyError::SourceNotFound(_)));
    assert!(err.to_string().contains("does not exist"));

    assert_eq!(fs::read_to_string(&dest).unwrap(), "precious");
}

#[test]
fn missing_source_fails_without_side_effects() {
    let td = tempdir().unwrap();

    let src = td.path().join("nope.png");
    let dest = td.path().join("deep").join("never.png");

    let err = guarded_copy(&src, &dest).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AssetCopyError>(),
        Some(AssetCopyError::SourceNotFound(_))
    ));

    assert!(!dest.exists(), "destination must not appear");
    assert!(
        !dest.parent().unwrap().exists(),
        "no directory may be created for a failed request"
    );
}

#[test]
fn directory_source_is_rejected() {
    let td = tempdir().unwrap();

    let src = td.path().join("a_dir");
    fs::create_dir(&src).unwrap();
    let dest = td.path().join("out.bin");

    let err = guarded_copy(&src, &dest).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AssetCopyError>(),
        Some(AssetCopyError::SourceNotFile(_))
    ));
    assert!(!dest.exists());
}

#[test]
fn no_temp_files_left_behind() {
    let td = tempdir().unwrap();

    let src = td.path().join("src.bin");
    create_file_with_bytes(&src, b"payload");
    let dest_dir = td.path().join("destdir");
    let dest = dest_dir.join("dest.bin");

    guarded_copy(&src, &dest).expect("guarded_copy");

    // Current temp pattern: ".asset_copy.<pid>.<nanos>.tmp"
    for entry in fs::read_dir(&dest_dir).expect("list dest dir") {
        let entry = entry.expect("dir entry");
        let name = entry.file_name();
        let name_s = name.to_string_lossy();
        assert!(
            !(name_s.starts_with(".asset_copy.") && name_s.ends_with(".tmp")),
            "tmp file left behind: {}",
            name_s
        );
    }
}

#[cfg(unix)]
#[test]
fn timestamps_are_carried_over() {
    use filetime::FileTime;

    let td = tempdir().unwrap();

    let src = td.path().join("old.png");
    create_file_with_bytes(&src, b"bytes");
    // Backdate the source a day so carry-over is observable.
    let old = FileTime::from_unix_time(1_700_000_000, 0);
    filetime::set_file_mtime(&src, old).unwrap();

    let dest = td.path().join("copied.png");
    guarded_copy(&src, &dest).expect("guarded_copy");

    let dest_mtime = FileTime::from_last_modification_time(&fs::metadata(&dest).unwrap());
    assert_eq!(dest_mtime.unix_seconds(), 1_700_000_000);
}
