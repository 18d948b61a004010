//! Domain model that mirrors the SQLite schema and gets passed throughout the
//! TUI. The type stays a light-weight data holder so other layers can focus
//! on presentation and persistence logic; the only behavior attached here is
//! the field validation the editor runs before anything is persisted.

use thiserror::Error;

/// Payload format stored with every record. Only HTML exists today, but the
/// column is free text so future formats do not need a schema change.
pub const DEFAULT_FORMAT: &str = "html";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One stored lyric record. Mirrors a row in the `songtexts` table.
pub struct SongText {
    /// Primary key assigned by the database on insert. Kept around even when
    /// the UI only needs display fields because edit/delete flows bubble the
    /// id back to the persistence layer.
    pub id: i64,
    /// Performing artist, shown in lists and used for sorting and grouping.
    pub artist: String,
    /// Song title, shown in lists and used for sorting and grouping.
    pub title: String,
    /// Payload format tag, currently always `"html"`.
    pub format: String,
    /// The lyric payload itself, an HTML string.
    pub data: String,
}

impl SongText {
    /// Compose a `Title - Artist` string for status messages and dialog
    /// prompts, gracefully omitting the hyphen if the artist is blank.
    pub fn display_title(&self) -> String {
        if self.artist.trim().is_empty() {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, self.artist)
        }
    }
}

/// Validation failures for caller-supplied song text fields. Sorting and
/// grouping take the first character of these fields, so blanks must be
/// rejected before they reach the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SongTextError {
    #[error("Song title is required.")]
    EmptyTitle,
    #[error("Artist is required.")]
    EmptyArtist,
}

/// Trim and validate the artist/title pair before persisting. Returns the
/// normalized `(artist, title)` strings or the first violated constraint.
pub fn normalized_fields(artist: &str, title: &str) -> Result<(String, String), SongTextError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(SongTextError::EmptyTitle);
    }
    let artist = artist.trim();
    if artist.is_empty() {
        return Err(SongTextError::EmptyArtist);
    }
    Ok((artist.to_string(), title.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_fields_trims_whitespace() {
        let (artist, title) =
            normalized_fields("  Phil Collins ", " In The Air Tonight  ").unwrap();
        assert_eq!(artist, "Phil Collins");
        assert_eq!(title, "In The Air Tonight");
    }

    #[test]
    fn blank_title_is_rejected() {
        assert_eq!(
            normalized_fields("Abba", "   "),
            Err(SongTextError::EmptyTitle)
        );
    }

    #[test]
    fn blank_artist_is_rejected() {
        assert_eq!(
            normalized_fields("", "Dancing Queen"),
            Err(SongTextError::EmptyArtist)
        );
    }

    #[test]
    fn display_title_omits_blank_artist() {
        let song = SongText {
            id: 1,
            artist: "  ".into(),
            title: "Untitled".into(),
            format: DEFAULT_FORMAT.into(),
            data: String::new(),
        };
        assert_eq!(song.display_title(), "Untitled");
    }
}
