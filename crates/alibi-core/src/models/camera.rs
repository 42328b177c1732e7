//! Fixed catalog of camera makes and their model sets
//!
//! Synthesized attribution only ever pairs a model with its own make.
//! Selection logic lives in the processing crate; this module is the data
//! plus lookups.

/// One catalog entry: a manufacturer and the models it may be paired with
#[derive(Debug, Clone, Copy)]
pub struct CameraLine {
    pub make: &'static str,
    pub models: &'static [&'static str],
}

pub const CAMERA_CATALOG: &[CameraLine] = &[
    CameraLine {
        make: "Canon",
        models: &["EOS 5D Mark IV", "Rebel T6", "EOS R"],
    },
    CameraLine {
        make: "Nikon",
        models: &["D850", "Z7", "D7500"],
    },
    CameraLine {
        make: "Sony",
        models: &["Alpha a7 III", "Alpha a6400"],
    },
    CameraLine {
        make: "Apple",
        models: &["iPhone 12 Pro", "iPhone X", "iPhone 13"],
    },
    CameraLine {
        make: "Samsung",
        models: &["Galaxy S21", "Galaxy Note 10"],
    },
    CameraLine {
        make: "GoPro",
        models: &["HERO9 Black", "HERO8 Black"],
    },
    CameraLine {
        make: "Huawei",
        models: &["P40 Pro", "Mate 30 Pro"],
    },
];

/// Model set for a make, or `None` if the make is not in the catalog
pub fn models_for(make: &str) -> Option<&'static [&'static str]> {
    CAMERA_CATALOG
        .iter()
        .find(|line| line.make == make)
        .map(|line| line.models)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_make_has_models() {
        for line in CAMERA_CATALOG {
            assert!(
                !line.models.is_empty(),
                "make {} has an empty model set",
                line.make
            );
        }
    }

    #[test]
    fn test_models_for_known_make() {
        let models = models_for("Nikon").unwrap();
        assert!(models.contains(&"D850"));
    }

    #[test]
    fn test_models_for_unknown_make() {
        assert!(models_for("Kodak").is_none());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(models_for("Canon").is_some());
        assert!(models_for("canon").is_none());
    }
}
