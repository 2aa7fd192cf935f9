use crate::types::signals::{LandUseSignal, Provenance};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Loads a live land-cover breakdown supplied by an external system.
/// Whatever provenance the file claims, a signal loaded this way counts as
/// live-sourced. Failures degrade to `None` so the caller falls back to the
/// optimized placeholder.
pub fn from_file(path: &Path) -> Option<LandUseSignal> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) => {
            warn!(path = %path.display(), %error, "land-use data unavailable");
            return None;
        }
    };
    match serde_json::from_str::<LandUseSignal>(&text) {
        Ok(mut signal) => {
            signal.provenance = Provenance::Live;
            Some(signal)
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "land-use data malformed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_sourced_signal_is_stamped_live() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        write!(
            file,
            r#"{{"agriculture": 72.5, "forest": 12.0, "water": 8.0, "barren": 7.5}}"#
        )
        .expect("land-use json should write");

        let signal = from_file(file.path()).expect("land-use file should parse");
        assert_eq!(signal.agriculture, 72.5);
        assert_eq!(signal.provenance, Provenance::Live);
    }

    #[test]
    fn unreadable_file_degrades_to_none() {
        assert!(from_file(Path::new("/nonexistent/landuse.json")).is_none());
    }
}
