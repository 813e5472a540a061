//! Input model: the ensemble and its songs.
//!
//! A [`Songbook`] deserializes from TOML such as:
//!
//! ```toml
//! group = "Group Name"
//! year = 2025
//!
//! [[songs]]
//! title = "Sample Song Title"
//! composer = "Some Composer"
//! ```

use serde::Deserialize;

/// A single piece, one coversheet each.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Song {
    title: String,
    composer: String,
}

impl Song {
    pub fn new(title: impl Into<String>, composer: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            composer: composer.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }
}

/// The performing group, shown in every page footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ensemble {
    group: String,
    year: i32,
}

impl Ensemble {
    pub fn new(group: impl Into<String>, year: i32) -> Self {
        Self {
            group: group.into(),
            year,
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

/// An ensemble together with the songs to generate coversheets for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Songbook {
    #[serde(flatten)]
    ensemble: Ensemble,
    #[serde(default)]
    songs: Vec<Song>,
}

impl Songbook {
    pub fn new(ensemble: Ensemble, songs: Vec<Song>) -> Self {
        Self { ensemble, songs }
    }

    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }

    /// Songs in input order.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_songbook_from_toml() {
        let book: Songbook = toml::from_str(
            r#"
            group = "Group Name"
            year = 2025

            [[songs]]
            title = "Sample Song Title"
            composer = "Some Composer"

            [[songs]]
            title = "Longer Song Title That Should Wrap"
            composer = "Different Person"
            "#,
        )
        .unwrap();

        assert_eq!(book.ensemble(), &Ensemble::new("Group Name", 2025));
        assert_eq!(book.songs().len(), 2);
        assert_eq!(book.songs()[0].title(), "Sample Song Title");
        assert_eq!(book.songs()[1].composer(), "Different Person");
    }

    #[test]
    fn test_songbook_without_songs() {
        let book: Songbook = toml::from_str("group = \"Choir\"\nyear = 1999").unwrap();
        assert!(book.songs().is_empty());
    }

    #[test]
    fn test_song_missing_composer_is_rejected() {
        let result: Result<Songbook, _> = toml::from_str(
            r#"
            group = "Choir"
            year = 2025

            [[songs]]
            title = "Lonely Title"
            "#,
        );
        assert!(result.is_err());
    }
}
