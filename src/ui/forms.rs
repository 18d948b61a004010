use anyhow::Result;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{normalized_fields, SongText};

/// Form state for creating and editing song texts.
#[derive(Default, Clone)]
pub(crate) struct SongForm {
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) lyrics: String,
    pub(crate) active: SongField,
    pub(crate) error: Option<String>,
}

/// Enumerates the fields within the song form to drive focus management.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub(crate) enum SongField {
    #[default]
    Title,
    Artist,
    Lyrics,
}

impl SongForm {
    /// Populate the form from an existing record when entering edit mode.
    pub(crate) fn from_song(song: &SongText) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone(),
            lyrics: song.data.clone(),
            active: SongField::Title,
            error: None,
        }
    }

    /// Cycle focus across the three fields.
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            SongField::Title => SongField::Artist,
            SongField::Artist => SongField::Lyrics,
            SongField::Lyrics => SongField::Title,
        };
    }

    /// Insert a character into the active field.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            SongField::Title => self.title.push(ch),
            SongField::Artist => self.artist.push(ch),
            SongField::Lyrics => self.lyrics.push(ch),
        }
        true
    }

    /// Remove a character from the active field.
    pub(crate) fn backspace(&mut self) {
        match self.active {
            SongField::Title => {
                self.title.pop();
            }
            SongField::Artist => {
                self.artist.pop();
            }
            SongField::Lyrics => {
                self.lyrics.pop();
            }
        }
    }

    /// Validate and normalize the inputs before they are written to the
    /// database. Returns `(artist, title, lyrics)` ready for persistence.
    pub(crate) fn parse_inputs(&self) -> Result<(String, String, String)> {
        let (artist, title) = normalized_fields(&self.artist, &self.title)?;
        Ok((artist, title, self.lyrics.trim().to_string()))
    }

    /// Render a styled line for the modal form.
    pub(crate) fn build_line(&self, field_name: &str, field: SongField) -> Line<'static> {
        let (value, is_active) = match field {
            SongField::Title => (&self.title, self.active == SongField::Title),
            SongField::Artist => (&self.artist, self.active == SongField::Artist),
            SongField::Lyrics => (&self.lyrics, self.active == SongField::Lyrics),
        };

        let placeholder = match field {
            SongField::Title | SongField::Artist => "<required>",
            SongField::Lyrics => "<optional>",
        };

        let display = if value.is_empty() {
            placeholder.to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    /// Character length of the requested field, for cursor placement.
    pub(crate) fn value_len(&self, field: SongField) -> usize {
        match field {
            SongField::Title => self.title.chars().count(),
            SongField::Artist => self.artist.chars().count(),
            SongField::Lyrics => self.lyrics.chars().count(),
        }
    }
}

/// State for confirming permanent deletion of one song text.
pub(crate) struct ConfirmSongDelete {
    pub(crate) song: SongText,
}

/// State for confirming removal of the entire catalog.
pub(crate) struct ConfirmClearAll;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_inputs_trims_fields() {
        let form = SongForm {
            title: " Waterloo ".into(),
            artist: " Abba".into(),
            lyrics: " <p>My, my</p> ".into(),
            ..SongForm::default()
        };
        let (artist, title, lyrics) = form.parse_inputs().unwrap();
        assert_eq!(artist, "Abba");
        assert_eq!(title, "Waterloo");
        assert_eq!(lyrics, "<p>My, my</p>");
    }

    #[test]
    fn parse_inputs_rejects_blank_title_and_artist() {
        let mut form = SongForm::default();
        assert!(form.parse_inputs().is_err());
        form.title = "Waterloo".into();
        assert!(form.parse_inputs().is_err());
        form.artist = "Abba".into();
        assert!(form.parse_inputs().is_ok());
    }

    #[test]
    fn push_char_ignores_control_characters() {
        let mut form = SongForm::default();
        assert!(!form.push_char('\u{7}'));
        assert!(form.push_char('A'));
        assert_eq!(form.title, "A");
    }

    #[test]
    fn toggle_field_cycles() {
        let mut form = SongForm::default();
        assert_eq!(form.active, SongField::Title);
        form.toggle_field();
        assert_eq!(form.active, SongField::Artist);
        form.toggle_field();
        assert_eq!(form.active, SongField::Lyrics);
        form.toggle_field();
        assert_eq!(form.active, SongField::Title);
    }
}
