//! Validation modules

pub mod attribution;

pub use attribution::{
    format_exif_timestamp, parse_date_taken, parse_latitude, parse_longitude, DATE_TAKEN_FORMAT,
    EXIF_TIMESTAMP_FORMAT,
};
