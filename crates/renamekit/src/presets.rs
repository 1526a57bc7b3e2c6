//! Ready-made rename patterns offered to users.
//!
//! Presets are plain data. Some reference variables outside the standard
//! catalog (`audio` uses `{artist}`); those render as-is unless the metadata
//! supplies a value or the engine's catalog knows the name.

use serde::Serialize;

/// A named, ready-made pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Stable identifier, e.g. `series`.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    pub template: &'static str,
    pub description: &'static str,
    /// What a typical rendered name looks like.
    pub example: &'static str,
}

/// All presets, in menu order.
pub const PRESETS: &[Preset] = &[
    Preset {
        key: "basic",
        name: "Basic",
        template: "{title}",
        description: "Just the title",
        example: "Movie Name",
    },
    Preset {
        key: "series",
        name: "TV Series",
        template: "{title} - {season}{episode}",
        description: "Title with season and episode",
        example: "Game of Thrones - S01E01",
    },
    Preset {
        key: "movie",
        name: "Movie",
        template: "{title} ({year}) [{quality}]",
        description: "Title with year and quality",
        example: "Inception (2010) [1080p]",
    },
    Preset {
        key: "detailed",
        name: "Detailed",
        template: "{title} - {season}{episode} - {quality}",
        description: "Full details with quality",
        example: "Breaking Bad - S05E14 - 720p",
    },
    Preset {
        key: "minimal",
        name: "Minimal",
        template: "{title}.{extension}",
        description: "Clean title with extension",
        example: "Document Name.pdf",
    },
    Preset {
        key: "audio",
        name: "Audio",
        template: "{artist} - {title}",
        description: "Artist and title for music",
        example: "Artist Name - Song Title",
    },
    Preset {
        key: "date",
        name: "With Date",
        template: "{title} - {year}",
        description: "Title with year",
        example: "Document Name - 2024",
    },
    Preset {
        key: "quality",
        name: "Quality Focus",
        template: "{title} [{quality}] [{codec}]",
        description: "Focus on quality and codec",
        example: "Movie Name [1080p] [x264]",
    },
];

/// Looks up a preset by key.
pub fn preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use renamekit_template::{validate, Engine};

    #[test]
    fn keys_are_unique() {
        for (i, p) in PRESETS.iter().enumerate() {
            assert!(
                PRESETS[i + 1..].iter().all(|q| q.key != p.key),
                "duplicate preset key {}",
                p.key
            );
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(preset("movie").map(|p| p.template), Some("{title} ({year}) [{quality}]"));
        assert!(preset("nope").is_none());
    }

    #[test]
    fn every_template_is_well_formed() {
        for p in PRESETS {
            assert!(validate(p.template).is_valid(), "{}", p.key);
        }
    }

    #[test]
    fn only_audio_uses_unknown_variables() {
        let engine = Engine::standard();
        let noisy: Vec<&str> = PRESETS
            .iter()
            .filter(|p| !engine.diagnose(p.template).is_empty())
            .map(|p| p.key)
            .collect();
        assert_eq!(noisy, vec!["audio"]);
    }
}
