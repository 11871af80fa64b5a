//! End-to-end extraction tests
//!
//! Host files on disk, archives written to a temporary output directory.

use mpqcarve::application::ExtractArchivesUseCase;
use mpqcarve::application::dto::ExtractOptions;
use mpqcarve::domain::entities::MPQ_SIGNATURE;
use mpqcarve::CarveError;
use rstest::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Fixtures
// ============================================================================

fn write_header(data: &mut [u8], offset: usize, header_size: u32, archive_size: u32) {
    data[offset..offset + 4].copy_from_slice(&MPQ_SIGNATURE);
    data[offset + 4..offset + 8].copy_from_slice(&header_size.to_le_bytes());
    data[offset + 8..offset + 12].copy_from_slice(&archive_size.to_le_bytes());
}

/// An "installer" with two embedded archives, a decoy signature and a
/// truncated archive at the very end
#[fixture]
fn installer() -> (TempDir, PathBuf, Vec<u8>) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("DiabloIIDemo.exe");

    let mut data: Vec<u8> = (0..40_000u32).map(|i| (i % 251) as u8).collect();
    write_header(&mut data, 512, 32, 10_000);
    write_header(&mut data, 11_000, 208, 10_000); // decoy
    write_header(&mut data, 16_384, 32, 8_192);
    write_header(&mut data, 38_000, 32, 100_000); // runs past the end

    fs::write(&path, &data).unwrap();
    (dir, path, data)
}

// ============================================================================
// Tests
// ============================================================================

#[rstest]
fn test_extracts_all_archives(installer: (TempDir, PathBuf, Vec<u8>)) {
    let (dir, path, data) = installer;
    let out = dir.path().join("mpqs");

    let report = ExtractArchivesUseCase::mpq()
        .run(&ExtractOptions::new(&path, &out), None)
        .unwrap();

    assert_eq!(report.total(), 3);
    assert_eq!(report.truncated(), 1);
    assert_eq!(report.bytes_scanned, 40_000);

    assert_eq!(fs::read(out.join("d2demo_0.mpq")).unwrap(), &data[512..10_512]);
    assert_eq!(fs::read(out.join("d2demo_1.mpq")).unwrap(), &data[16_384..24_576]);
    assert_eq!(fs::read(out.join("d2demo_2.mpq")).unwrap(), &data[38_000..]);
    assert!(!out.join("d2demo_3.mpq").exists());
}

#[rstest]
fn test_report_entries(installer: (TempDir, PathBuf, Vec<u8>)) {
    let (dir, path, _) = installer;
    let out = dir.path().join("mpqs");

    let report = ExtractArchivesUseCase::mpq()
        .run(&ExtractOptions::new(&path, &out), None)
        .unwrap();

    let summary: Vec<_> = report
        .entries
        .iter()
        .map(|e| (e.archive.start(), e.archive.length(), e.saved_path.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (512, 10_000, out.join("d2demo_0.mpq")),
            (16_384, 8_192, out.join("d2demo_1.mpq")),
            (38_000, 2_000, out.join("d2demo_2.mpq")),
        ]
    );
}

#[rstest]
fn test_custom_name_pattern(installer: (TempDir, PathBuf, Vec<u8>)) {
    let (dir, path, _) = installer;
    let out = dir.path().join("custom");
    let options = ExtractOptions::new(&path, &out)
        .with_prefix("setup")
        .with_extension("bin");

    ExtractArchivesUseCase::mpq().run(&options, None).unwrap();

    let mut names: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["setup_0.bin", "setup_1.bin", "setup_2.bin"]);
}

#[rstest]
fn test_no_archives_reports_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.exe");
    fs::write(&path, vec![0x90u8; 4096]).unwrap();
    let out = dir.path().join("mpqs");

    let report = ExtractArchivesUseCase::mpq()
        .run(&ExtractOptions::new(&path, &out), None)
        .unwrap();

    assert_eq!(report.total(), 0);
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
    assert!(report.summary().starts_with("Extracted 0 MPQ archive(s)"));
}

#[rstest]
fn test_empty_source_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.exe");
    fs::write(&path, b"").unwrap();

    let report = ExtractArchivesUseCase::mpq()
        .run(&ExtractOptions::new(&path, dir.path().join("mpqs")), None)
        .unwrap();

    assert_eq!(report.total(), 0);
    assert_eq!(report.bytes_scanned, 0);
}

#[rstest]
fn test_missing_source_is_fatal() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("mpqs");

    let err = ExtractArchivesUseCase::mpq()
        .run(&ExtractOptions::new(dir.path().join("nope.exe"), &out), None)
        .unwrap_err();

    assert!(matches!(err, CarveError::SourceUnreadable { .. }));
    assert!(!out.exists());
}

#[rstest]
fn test_unwritable_destination_aborts(installer: (TempDir, PathBuf, Vec<u8>)) {
    let (dir, path, _) = installer;
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, b"file").unwrap();

    let err = ExtractArchivesUseCase::mpq()
        .run(&ExtractOptions::new(&path, blocker.join("mpqs")), None)
        .unwrap_err();

    assert!(matches!(err, CarveError::DestinationUnwritable { .. }));
}

#[rstest]
fn test_rerun_overwrites_identically(installer: (TempDir, PathBuf, Vec<u8>)) {
    let (dir, path, _) = installer;
    let out = dir.path().join("mpqs");
    let options = ExtractOptions::new(&path, &out);

    let first = ExtractArchivesUseCase::mpq().run(&options, None).unwrap();
    let first_bytes = fs::read(out.join("d2demo_1.mpq")).unwrap();
    let second = ExtractArchivesUseCase::mpq().run(&options, None).unwrap();

    assert_eq!(first.entries, second.entries);
    assert_eq!(fs::read(out.join("d2demo_1.mpq")).unwrap(), first_bytes);
}
