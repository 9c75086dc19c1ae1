use assert_fs::prelude::*;
use assert_fs::TempDir;
use image::{ColorType, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use pixconv::{
    ConversionEvent, ConversionOutcome, ConversionSummary, ConvertConfig, FolderConverter,
    OutputFormat, SkipReason,
};
use std::path::{Path, PathBuf};

fn write_rgb(path: &Path, format: ImageFormat) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    RgbImage::from_pixel(8, 8, Rgb([255, 0, 0]))
        .save_with_format(path, format)
        .unwrap();
}

/// `a.jpg` at the top level and `nested/b.jpg` one folder down.
fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_rgb(temp_dir.child("in/a.jpg").path(), ImageFormat::Jpeg);
    write_rgb(temp_dir.child("in/nested/b.jpg").path(), ImageFormat::Jpeg);
    temp_dir
}

fn config(temp_dir: &TempDir) -> ConvertConfig {
    ConvertConfig::new(temp_dir.child("in").path(), temp_dir.child("out").path())
}

fn run(config: ConvertConfig) -> (ConversionSummary, Vec<(PathBuf, ConversionOutcome)>) {
    let mut events = Vec::new();
    let summary = FolderConverter::new(config)
        .convert(&mut |event: &ConversionEvent<'_>| {
            events.push((event.job.input.clone(), event.outcome.clone()))
        })
        .unwrap();
    (summary, events)
}

fn counts(summary: &ConversionSummary) -> (usize, usize, usize) {
    (summary.converted, summary.skipped, summary.failed)
}

#[test]
fn recursive_run_preserves_structure() {
    let temp_dir = sample_tree();

    let (summary, _) = run(config(&temp_dir).with_recursive(true));

    assert_eq!(counts(&summary), (2, 0, 0));
    assert!(temp_dir.child("out/a.png").path().is_file());
    assert!(temp_dir.child("out/nested/b.png").path().is_file());

    let decoded = image::open(temp_dir.child("out/nested/b.png").path()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
}

#[test]
fn flat_run_ignores_subfolders() {
    let temp_dir = sample_tree();

    let (summary, events) = run(config(&temp_dir));

    assert_eq!(counts(&summary), (1, 0, 0));
    assert_eq!(events.len(), 1);
    assert!(temp_dir.child("out/a.png").path().exists());
    assert!(!temp_dir.child("out/b.png").path().exists());
    assert!(!temp_dir.child("out/nested").path().exists());
}

#[test]
fn second_run_skips_everything() {
    let temp_dir = sample_tree();

    let (first, _) = run(config(&temp_dir).with_recursive(true));
    assert_eq!(counts(&first), (2, 0, 0));

    let (second, events) = run(config(&temp_dir).with_recursive(true));
    assert_eq!(counts(&second), (0, 2, 0));
    assert!(events
        .iter()
        .all(|(_, outcome)| matches!(outcome, ConversionOutcome::Skipped(_))));
}

#[test]
fn overwrite_reconverts_previous_outputs() {
    let temp_dir = sample_tree();

    run(config(&temp_dir).with_recursive(true));
    let (summary, _) = run(config(&temp_dir).with_recursive(true).with_overwrite(true));

    assert_eq!(counts(&summary), (2, 0, 0));
}

#[test]
fn corrupt_file_fails_alone() {
    let temp_dir = sample_tree();
    temp_dir.child("in/broken.jpg").write_binary(b"\xff\xd8 not really").unwrap();
    temp_dir.child("in/readme.txt").write_str("hello").unwrap();

    let (summary, events) = run(config(&temp_dir).with_recursive(true));

    assert_eq!(counts(&summary), (2, 0, 2));
    assert_eq!(summary.total(), 4);
    let failed: Vec<_> = events
        .iter()
        .filter(|(_, outcome)| outcome.is_failure())
        .map(|(input, _)| input.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(failed, vec!["broken.jpg", "readme.txt"]);
    assert!(!temp_dir.child("out/broken.png").path().exists());
}

#[test]
fn totals_match_enumerated_files_for_every_flag_combination() {
    for recursive in [false, true] {
        for overwrite in [false, true] {
            let temp_dir = sample_tree();
            temp_dir.child("in/junk.bin").write_binary(&[0, 1, 2, 3]).unwrap();
            temp_dir.child("out").create_dir_all().unwrap();
            temp_dir.child("out/a.png").write_str("stale").unwrap();

            let expected = if recursive { 3 } else { 2 };
            let (summary, events) = run(
                config(&temp_dir)
                    .with_recursive(recursive)
                    .with_overwrite(overwrite),
            );

            assert_eq!(summary.total(), expected, "recursive={recursive} overwrite={overwrite}");
            assert_eq!(events.len(), expected);
            assert_eq!(summary.failed, 1);
            assert_eq!(summary.skipped, if overwrite { 0 } else { 1 });
        }
    }
}

#[test]
fn rgba_source_converts_to_jpeg() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.child("in/alpha.png");
    std::fs::create_dir_all(temp_dir.child("in").path()).unwrap();
    RgbaImage::from_pixel(8, 8, Rgba([0, 128, 255, 100]))
        .save(source.path())
        .unwrap();

    let (summary, _) = run(config(&temp_dir).with_format(OutputFormat::Jpeg));

    assert_eq!(counts(&summary), (1, 0, 0));
    let decoded = image::open(temp_dir.child("out/alpha.jpg").path()).unwrap();
    assert_eq!(decoded.color(), ColorType::Rgb8);
}

#[test]
fn webp_output() {
    let temp_dir = sample_tree();

    let config = ConvertConfig::from_token(
        temp_dir.child("in").path(),
        temp_dir.child("out").path(),
        " WEBP ",
    )
    .unwrap()
    .with_recursive(true);
    let (summary, _) = run(config);

    assert_eq!(counts(&summary), (2, 0, 0));
    let bytes = std::fs::read(temp_dir.child("out/nested/b.webp").path()).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::WebP);
}

#[test]
fn empty_input_yields_zero_summary() {
    let temp_dir = TempDir::new().unwrap();
    temp_dir.child("in").create_dir_all().unwrap();
    temp_dir.child("in/only/dirs").create_dir_all().unwrap();

    let (summary, events) = run(config(&temp_dir).with_recursive(true));

    assert_eq!(summary, ConversionSummary::default());
    assert!(events.is_empty());
    assert!(temp_dir.child("out").path().is_dir());
}

#[test]
fn minimal_preset_replaces_existing_outputs() {
    let temp_dir = sample_tree();
    temp_dir.child("out").create_dir_all().unwrap();
    temp_dir.child("out/a.png").write_str("old").unwrap();

    let (summary, _) = run(ConvertConfig::minimal(
        temp_dir.child("in").path(),
        temp_dir.child("out").path(),
    ));

    assert_eq!(counts(&summary), (1, 0, 0));
    assert!(image::open(temp_dir.child("out/a.png").path()).is_ok());
}

#[test]
fn flat_collisions_keep_first_output() {
    let temp_dir = TempDir::new().unwrap();
    write_rgb(temp_dir.child("in/photo.bmp").path(), ImageFormat::Bmp);
    write_rgb(temp_dir.child("in/photo.jpg").path(), ImageFormat::Jpeg);

    let (summary, events) = run(config(&temp_dir).with_overwrite(true));

    assert_eq!(counts(&summary), (1, 1, 0));
    assert_eq!(events[0].1, ConversionOutcome::Converted);
    assert!(matches!(events[1].1, ConversionOutcome::Skipped(_)));
}

#[test]
fn inputs_are_never_modified() {
    let temp_dir = sample_tree();
    let before = std::fs::read(temp_dir.child("in/a.jpg").path()).unwrap();

    run(config(&temp_dir).with_recursive(true).with_overwrite(true));

    let after = std::fs::read(temp_dir.child("in/a.jpg").path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn converting_in_place_leaves_sources_alone() {
    let temp_dir = TempDir::new().unwrap();
    write_rgb(temp_dir.child("in/a.jpg").path(), ImageFormat::Jpeg);
    RgbImage::from_pixel(4, 4, Rgb([0, 0, 255]))
        .save(temp_dir.child("in/a.png").path())
        .unwrap();
    let before = std::fs::read(temp_dir.child("in/a.png").path()).unwrap();

    let in_place = ConvertConfig::new(temp_dir.child("in").path(), temp_dir.child("in").path())
        .with_overwrite(true);
    let (summary, events) = run(in_place);

    assert_eq!(counts(&summary), (0, 2, 0));
    assert!(events
        .iter()
        .all(|(_, outcome)| *outcome == ConversionOutcome::Skipped(SkipReason::InputFile)));
    let after = std::fs::read(temp_dir.child("in/a.png").path()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn output_nested_in_input_is_not_reconverted() {
    let temp_dir = TempDir::new().unwrap();
    write_rgb(temp_dir.child("in/a.jpg").path(), ImageFormat::Jpeg);
    let nested = || {
        ConvertConfig::new(temp_dir.child("in").path(), temp_dir.child("in/out").path())
            .with_recursive(true)
    };

    let (first, _) = run(nested());
    assert_eq!(counts(&first), (1, 0, 0));

    let (second, events) = run(nested());
    assert_eq!(counts(&second), (0, 1, 0));
    assert_eq!(events.len(), 1);
    assert!(temp_dir.child("in/out/a.png").path().is_file());
    assert!(!temp_dir.child("in/out/out").path().exists());
}
