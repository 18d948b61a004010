//! Pure search-result pipeline for the overview list: multi-key sorting and
//! the grouped row sequence the UI renders. Nothing here touches the terminal
//! or the database, so the ordering and grouping rules can be tested on plain
//! vectors.

use std::cmp::Ordering;

use crate::models::SongText;

/// Sort key for the overview list. The same value doubles as the grouping
/// criterion: sorting by title groups by first letter, sorting by artist
/// groups by artist name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Artist,
}

impl SortKey {
    /// Parse a sort key name. Anything other than `"artist"` falls back to
    /// the title ordering, which is the overview default.
    pub fn parse(value: &str) -> Self {
        match value {
            "artist" => SortKey::Artist,
            _ => SortKey::Title,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Artist => "artist",
        }
    }

    /// The opposite key. The overview shows a control for this one and hides
    /// the control matching the active key.
    pub fn other(&self) -> Self {
        match self {
            SortKey::Title => SortKey::Artist,
            SortKey::Artist => SortKey::Title,
        }
    }
}

/// Case-insensitive lexicographic comparison, the crate's stand-in for a
/// locale-aware collation.
fn compare_insensitive(lhs: &str, rhs: &str) -> Ordering {
    lhs.to_lowercase().cmp(&rhs.to_lowercase())
}

/// Order the result set in place. `Artist` sorts by artist with title as the
/// tiebreak, `Title` the mirror. The underlying sort is stable, so records
/// equal on both fields keep their relative order.
pub fn sort_songs(songs: &mut [SongText], key: SortKey) {
    songs.sort_by(|lhs, rhs| {
        let by_artist = compare_insensitive(&lhs.artist, &rhs.artist);
        let by_title = compare_insensitive(&lhs.title, &rhs.title);
        match key {
            SortKey::Artist => by_artist.then(by_title),
            SortKey::Title => by_title.then(by_artist),
        }
    });
}

/// One row of the rendered overview list. The UI maps this sequence onto
/// widgets without re-deriving any grouping logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// Synthetic header opening a run of entries that share a group label.
    Section { label: String },
    /// One song entry. Title and artist are trimmed for display; the id
    /// carries the row metadata for the detail-view interaction.
    Entry {
        id: i64,
        title: String,
        artist: String,
    },
    /// Single row shown when there is nothing to list.
    Placeholder,
}

/// Map a sorted result set to the row sequence of the overview list.
///
/// Grouping by `Title` labels a section with the uppercased first character
/// of the trimmed title; grouping by `Artist` labels it with the trimmed
/// artist verbatim while comparing uppercased. A section row is emitted
/// whenever the comparison key differs from the previous entry's, so equal
/// labels only stay together if the input is already sorted accordingly.
/// An empty result set yields exactly one [`ListRow::Placeholder`].
pub fn build_rows(songs: &[SongText], group_by: SortKey) -> Vec<ListRow> {
    if songs.is_empty() {
        return vec![ListRow::Placeholder];
    }

    let mut rows = Vec::with_capacity(songs.len() * 2);
    let mut current_group = String::new();

    for song in songs {
        let (label, group_key) = match group_by {
            SortKey::Title => {
                let label: String = song
                    .title
                    .trim()
                    .chars()
                    .next()
                    .map(|ch| ch.to_uppercase().collect())
                    .unwrap_or_default();
                (label.clone(), label)
            }
            SortKey::Artist => {
                let label = song.artist.trim().to_string();
                let key = label.to_uppercase();
                (label, key)
            }
        };

        if current_group != group_key {
            current_group = group_key;
            rows.push(ListRow::Section { label });
        }

        rows.push(ListRow::Entry {
            id: song.id,
            title: song.title.trim().to_string(),
            artist: song.artist.trim().to_string(),
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_FORMAT;

    fn song(id: i64, artist: &str, title: &str) -> SongText {
        SongText {
            id,
            artist: artist.to_string(),
            title: title.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            data: String::new(),
        }
    }

    fn titles(songs: &[SongText]) -> Vec<&str> {
        songs.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn parse_falls_back_to_title() {
        assert_eq!(SortKey::parse("artist"), SortKey::Artist);
        assert_eq!(SortKey::parse("title"), SortKey::Title);
        assert_eq!(SortKey::parse("bogus"), SortKey::Title);
        assert_eq!(SortKey::parse(""), SortKey::Title);
    }

    #[test]
    fn sort_by_artist_breaks_ties_on_title() {
        let mut songs = vec![
            song(1, "Collins", "In The Air Tonight"),
            song(2, "Abba", "Dancing Queen"),
            song(3, "Collins", "Another Day In Paradise"),
        ];
        sort_songs(&mut songs, SortKey::Artist);
        assert_eq!(
            titles(&songs),
            vec![
                "Dancing Queen",
                "Another Day In Paradise",
                "In The Air Tonight"
            ]
        );
    }

    #[test]
    fn sort_by_title_breaks_ties_on_artist() {
        let mut songs = vec![
            song(1, "Whitney Houston", "I Will Always Love You"),
            song(2, "Dolly Parton", "I Will Always Love You"),
            song(3, "Abba", "Dancing Queen"),
        ];
        sort_songs(&mut songs, SortKey::Title);
        assert_eq!(songs[0].title, "Dancing Queen");
        assert_eq!(songs[1].artist, "Dolly Parton");
        assert_eq!(songs[2].artist, "Whitney Houston");
    }

    #[test]
    fn sort_ignores_case() {
        let mut songs = vec![
            song(1, "abba", "waterloo"),
            song(2, "ABBA", "Dancing Queen"),
        ];
        sort_songs(&mut songs, SortKey::Title);
        assert_eq!(titles(&songs), vec!["Dancing Queen", "waterloo"]);
    }

    #[test]
    fn sort_is_stable_for_full_ties() {
        let mut songs = vec![
            song(1, "Abba", "Waterloo"),
            song(2, "Abba", "Waterloo"),
            song(3, "Abba", "Waterloo"),
        ];
        sort_songs(&mut songs, SortKey::Artist);
        let ids: Vec<i64> = songs.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_catalog_renders_single_placeholder() {
        let rows = build_rows(&[], SortKey::Title);
        assert_eq!(rows, vec![ListRow::Placeholder]);
    }

    #[test]
    fn grouping_by_artist_emits_one_section_per_run() {
        let mut songs = vec![
            song(1, "Collins", "Another Day In Paradise"),
            song(2, "Collins", "In The Air Tonight"),
            song(3, "Abba", "Dancing Queen"),
        ];
        sort_songs(&mut songs, SortKey::Artist);
        let rows = build_rows(&songs, SortKey::Artist);

        assert_eq!(
            rows,
            vec![
                ListRow::Section {
                    label: "Abba".into()
                },
                ListRow::Entry {
                    id: 3,
                    title: "Dancing Queen".into(),
                    artist: "Abba".into()
                },
                ListRow::Section {
                    label: "Collins".into()
                },
                ListRow::Entry {
                    id: 1,
                    title: "Another Day In Paradise".into(),
                    artist: "Collins".into()
                },
                ListRow::Entry {
                    id: 2,
                    title: "In The Air Tonight".into(),
                    artist: "Collins".into()
                },
            ]
        );
    }

    #[test]
    fn grouping_by_title_uses_uppercased_first_letter() {
        let mut songs = vec![
            song(1, "Abba", "dancing queen"),
            song(2, "Abba", "Does Your Mother Know"),
            song(3, "Abba", "Waterloo"),
        ];
        sort_songs(&mut songs, SortKey::Title);
        let rows = build_rows(&songs, SortKey::Title);

        let sections: Vec<&ListRow> = rows
            .iter()
            .filter(|row| matches!(row, ListRow::Section { .. }))
            .collect();
        assert_eq!(
            sections,
            vec![
                &ListRow::Section { label: "D".into() },
                &ListRow::Section { label: "W".into() },
            ]
        );
        // Each header precedes exactly its contiguous run of entries.
        assert!(matches!(rows[0], ListRow::Section { .. }));
        assert!(matches!(rows[1], ListRow::Entry { .. }));
        assert!(matches!(rows[2], ListRow::Entry { .. }));
        assert!(matches!(rows[3], ListRow::Section { .. }));
        assert!(matches!(rows[4], ListRow::Entry { .. }));
    }

    #[test]
    fn artist_grouping_compares_case_insensitively() {
        let songs = vec![
            song(1, "ABBA", "Dancing Queen"),
            song(2, "Abba", "Waterloo"),
        ];
        let rows = build_rows(&songs, SortKey::Artist);
        let section_count = rows
            .iter()
            .filter(|row| matches!(row, ListRow::Section { .. }))
            .count();
        assert_eq!(section_count, 1);
    }

    #[test]
    fn entries_are_trimmed_for_display() {
        let songs = vec![song(1, "  Abba ", "  Waterloo  ")];
        let rows = build_rows(&songs, SortKey::Title);
        assert_eq!(
            rows[1],
            ListRow::Entry {
                id: 1,
                title: "Waterloo".into(),
                artist: "Abba".into()
            }
        );
        assert_eq!(rows[0], ListRow::Section { label: "W".into() });
    }
}
