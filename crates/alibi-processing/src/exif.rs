//! EXIF block serialization and JPEG embedding
//!
//! All knowledge of the EXIF binary format - tag IDs, IFD grouping, rational
//! encoding - lives here. `encode_attribution` turns a resolved attribution
//! into an opaque TIFF-structured payload; `embed_in_jpeg` splices that
//! payload into a JPEG's APP1 segment.
//!
//! IFD placement is driven by each tag's context: Make/Model land on the
//! primary (0th) IFD, DateTimeOriginal on the Exif IFD, and the GPS tags on
//! the GPS IFD.

use std::io::Cursor;

use alibi_core::error::AppError;
use alibi_core::models::{DmsCoordinate, ResolvedAttribution};
use bytes::Bytes;
use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use img_parts::jpeg::Jpeg;
use img_parts::ImageEXIF;

// Written alongside the GPS tags so strict readers accept the GPS IFD
const GPS_VERSION_2_3: [u8; 4] = [2, 3, 0, 0];

/// Serialize the attribution into an EXIF payload (TIFF structure, big
/// endian, without the APP1 wrapper)
pub fn encode_attribution(attribution: &ResolvedAttribution) -> Result<Vec<u8>, AppError> {
    let fields = [
        ascii_field(Tag::Make, &attribution.camera_make),
        ascii_field(Tag::Model, &attribution.camera_model),
        ascii_field(Tag::DateTimeOriginal, &attribution.timestamp),
        Field {
            tag: Tag::GPSVersionID,
            ifd_num: In::PRIMARY,
            value: Value::Byte(GPS_VERSION_2_3.to_vec()),
        },
        ascii_field(Tag::GPSLatitudeRef, attribution.latitude.hemisphere.exif_ref()),
        dms_field(Tag::GPSLatitude, &attribution.latitude),
        ascii_field(
            Tag::GPSLongitudeRef,
            attribution.longitude.hemisphere.exif_ref(),
        ),
        dms_field(Tag::GPSLongitude, &attribution.longitude),
    ];

    let mut writer = Writer::new();
    for field in &fields {
        writer.push_field(field);
    }

    let mut cursor = Cursor::new(Vec::new());
    writer
        .write(&mut cursor, false)
        .map_err(|e| AppError::Encoding(format!("failed to serialize Exif block: {e}")))?;
    Ok(cursor.into_inner())
}

/// Splice an EXIF payload into an encoded JPEG's APP1 segment
pub fn embed_in_jpeg(encoded_jpeg: Vec<u8>, exif_payload: Vec<u8>) -> Result<Bytes, AppError> {
    let mut jpeg = Jpeg::from_bytes(encoded_jpeg.into())
        .map_err(|e| AppError::Encoding(format!("failed to parse encoded JPEG: {e}")))?;
    jpeg.set_exif(Some(exif_payload.into()));
    Ok(jpeg.encoder().bytes())
}

fn ascii_field(tag: Tag, text: &str) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Ascii(vec![text.as_bytes().to_vec()]),
    }
}

/// Degrees, minutes, seconds as three rationals with denominator 1
fn dms_field(tag: Tag, dms: &DmsCoordinate) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value: Value::Rational(vec![
            Rational::from((dms.degrees, 1)),
            Rational::from((dms.minutes, 1)),
            Rational::from((dms.seconds, 1)),
        ]),
    }
}
