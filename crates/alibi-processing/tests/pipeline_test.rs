//! End-to-end pipeline tests: process a real JPEG and decode the EXIF block
//! out of the output with an independent reader.

use std::io::Cursor;

use alibi_core::error::AppError;
use alibi_core::models::{camera, AttributionRequest};
use alibi_core::validation::EXIF_TIMESTAMP_FORMAT;
use alibi_processing::AttributionPipeline;
use exif::{In, Tag, Value};
use image::{Rgb, RgbImage};
use img_parts::jpeg::Jpeg;
use img_parts::ImageEXIF;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ONE_ARC_SECOND: f64 = 1.0 / 3600.0;

/// A small gradient JPEG so the transforms have real texture to work on
fn sample_jpeg() -> Vec<u8> {
    let img = RgbImage::from_fn(64, 48, |x, y| {
        Rgb([(x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8])
    });
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Jpeg)
        .unwrap();
    buffer
}

fn decode_exif(output: &[u8]) -> exif::Exif {
    let jpeg = Jpeg::from_bytes(output.to_vec().into()).unwrap();
    let payload = jpeg.exif().expect("output carries an EXIF segment");
    exif::Reader::new().read_raw(payload.to_vec()).unwrap()
}

fn ascii_of(parsed: &exif::Exif, tag: Tag) -> String {
    let field = parsed
        .get_field(tag, In::PRIMARY)
        .unwrap_or_else(|| panic!("missing tag {tag}"));
    match &field.value {
        Value::Ascii(v) => String::from_utf8(v[0].clone()).unwrap(),
        other => panic!("{tag} is not ascii: {other:?}"),
    }
}

fn dms_degrees_of(parsed: &exif::Exif, tag: Tag) -> f64 {
    let field = parsed
        .get_field(tag, In::PRIMARY)
        .unwrap_or_else(|| panic!("missing tag {tag}"));
    match &field.value {
        Value::Rational(v) => {
            assert_eq!(v.len(), 3, "{tag} must be three rationals");
            for rational in v {
                assert_eq!(rational.denom, 1, "{tag} rationals use denominator 1");
            }
            v[0].to_f64() + v[1].to_f64() / 60.0 + v[2].to_f64() / 3600.0
        }
        other => panic!("{tag} is not rational: {other:?}"),
    }
}

#[test]
fn end_to_end_reports_supplied_attribution() {
    let pipeline = AttributionPipeline::default();
    let request = AttributionRequest {
        camera_make: Some("Nikon".to_string()),
        camera_model: Some("D850".to_string()),
        date_taken: Some("2024-01-15T09:00".to_string()),
        latitude: Some("40.7128".to_string()),
        longitude: Some("-74.0060".to_string()),
    };

    let output = pipeline
        .process_with_rng(&sample_jpeg(), &request, &mut StdRng::seed_from_u64(99))
        .unwrap();
    let parsed = decode_exif(&output);

    assert_eq!(ascii_of(&parsed, Tag::Make), "Nikon");
    assert_eq!(ascii_of(&parsed, Tag::Model), "D850");
    assert_eq!(
        ascii_of(&parsed, Tag::DateTimeOriginal),
        "2024:01:15 09:00:00"
    );
    assert_eq!(ascii_of(&parsed, Tag::GPSLatitudeRef), "N");
    assert_eq!(ascii_of(&parsed, Tag::GPSLongitudeRef), "W");

    let latitude = dms_degrees_of(&parsed, Tag::GPSLatitude);
    let longitude = dms_degrees_of(&parsed, Tag::GPSLongitude);
    assert!((latitude - 40.7128).abs() < ONE_ARC_SECOND);
    assert!((longitude - 74.0060).abs() < ONE_ARC_SECOND);
}

#[test]
fn full_default_run_synthesizes_consistent_attribution() {
    let pipeline = AttributionPipeline::default();
    let output = pipeline
        .process_with_rng(
            &sample_jpeg(),
            &AttributionRequest::default(),
            &mut StdRng::seed_from_u64(7),
        )
        .unwrap();
    let parsed = decode_exif(&output);

    // Camera comes from the catalog and the model belongs to the make
    let make = ascii_of(&parsed, Tag::Make);
    let model = ascii_of(&parsed, Tag::Model);
    let models = camera::models_for(&make)
        .unwrap_or_else(|| panic!("synthesized make {make} is not in the catalog"));
    assert!(models.contains(&model.as_str()));

    // Timestamp is well-formed
    let timestamp = ascii_of(&parsed, Tag::DateTimeOriginal);
    assert!(chrono::NaiveDateTime::parse_from_str(&timestamp, EXIF_TIMESTAMP_FORMAT).is_ok());

    // Coordinates are in range with matching hemisphere refs
    let latitude_ref = ascii_of(&parsed, Tag::GPSLatitudeRef);
    let longitude_ref = ascii_of(&parsed, Tag::GPSLongitudeRef);
    assert!(latitude_ref == "N" || latitude_ref == "S");
    assert!(longitude_ref == "E" || longitude_ref == "W");
    assert!(dms_degrees_of(&parsed, Tag::GPSLatitude) <= 90.0);
    assert!(dms_degrees_of(&parsed, Tag::GPSLongitude) <= 180.0);

    // And the output is still a decodable image
    image::load_from_memory(&output).unwrap();
}

#[test]
fn invalid_fields_are_rejected_with_invalid_input() {
    let pipeline = AttributionPipeline::default();
    let jpeg = sample_jpeg();

    let cases = [
        AttributionRequest {
            latitude: Some("not-a-number".to_string()),
            ..Default::default()
        },
        AttributionRequest {
            latitude: Some("200".to_string()),
            ..Default::default()
        },
        AttributionRequest {
            longitude: Some("-200".to_string()),
            ..Default::default()
        },
        AttributionRequest {
            date_taken: Some("2023/05/01 14:30".to_string()),
            ..Default::default()
        },
    ];

    for request in cases {
        let err = pipeline.process(&jpeg, &request).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidInput(_)),
            "expected InvalidInput for {request:?}, got {err:?}"
        );
    }
}

#[test]
fn undecodable_upload_is_rejected() {
    let pipeline = AttributionPipeline::default();
    let err = pipeline
        .process(b"not an image at all", &AttributionRequest::default())
        .unwrap_err();
    assert!(matches!(err, AppError::UnsupportedImage(_)));
}

#[test]
fn repeated_runs_are_independent() {
    // Two uploads through the same pipeline must not share state: both
    // succeed and both carry complete attribution
    let pipeline = AttributionPipeline::default();
    let jpeg = sample_jpeg();

    for seed in [1u64, 2] {
        let output = pipeline
            .process_with_rng(
                &jpeg,
                &AttributionRequest::default(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap();
        let parsed = decode_exif(&output);
        assert!(parsed.get_field(Tag::Make, In::PRIMARY).is_some());
        assert!(parsed.get_field(Tag::GPSLatitude, In::PRIMARY).is_some());
    }
}
