use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::models::SongText;

/// Insert a brand new song text and return the hydrated record so callers can
/// update UI state without re-querying. The id is assigned by the database.
///
/// Field shape is the caller's responsibility; the accessor persists whatever
/// it is given.
pub fn create_songtext(
    conn: &Connection,
    artist: &str,
    title: &str,
    format: &str,
    data: &str,
) -> Result<SongText> {
    conn.execute(
        "INSERT INTO songtexts (artist, title, format, data) VALUES (?1, ?2, ?3, ?4)",
        params![artist, title, format, data],
    )
    .context("failed to insert song text")?;

    let id = conn.last_insert_rowid();
    debug!(id, "song text created");
    Ok(SongText {
        id,
        artist: artist.to_string(),
        title: title.to_string(),
        format: format.to_string(),
        data: data.to_string(),
    })
}

/// Store a record under its id, replacing any existing row or inserting a new
/// one when the id is absent (upsert). All fields are written; there is no
/// partial update.
pub fn update_songtext(conn: &Connection, song: &SongText) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO songtexts (id, artist, title, format, data)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![song.id, song.artist, song.title, song.format, song.data],
    )
    .context("failed to store song text")?;
    debug!(id = song.id, "song text stored");
    Ok(())
}

/// Remove the record with the given id. Deleting an id that does not exist is
/// not an error; the operation is idempotent.
pub fn delete_songtext(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM songtexts WHERE id = ?1", params![id])
        .context("failed to delete song text")?;
    debug!(id, deleted, "song text delete");
    Ok(())
}

/// Remove every stored song text. Irreversible.
pub fn clear_songtexts(conn: &Connection) -> Result<()> {
    let deleted = conn
        .execute("DELETE FROM songtexts", [])
        .context("failed to clear song texts")?;
    debug!(deleted, "song texts cleared");
    Ok(())
}

/// Look up a record by id. Absent ids yield `None`, never an error.
pub fn get_songtext(conn: &Connection, id: i64) -> Result<Option<SongText>> {
    conn.prepare("SELECT id, artist, title, format, data FROM songtexts WHERE id = ?1")
        .context("failed to prepare song text lookup")?
        .query_row(params![id], row_to_songtext)
        .optional()
        .context("failed to read song text")
}

/// Return every record whose artist or title contains the query as a
/// case-insensitive substring. An empty query matches everything (an empty
/// string is a substring of any string). Result order is unspecified; callers
/// re-sort.
///
/// The match runs as a linear filter over a full snapshot rather than SQL
/// `LIKE` so the uppercase-compare semantics hold for non-ASCII text too.
pub fn search_songtexts(conn: &Connection, query: &str) -> Result<Vec<SongText>> {
    let mut stmt = conn
        .prepare("SELECT id, artist, title, format, data FROM songtexts")
        .context("failed to prepare song text scan")?;

    let needle = query.to_uppercase();
    let songs = stmt
        .query_map([], row_to_songtext)
        .context("failed to iterate song texts")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect song texts")?
        .into_iter()
        .filter(|song| {
            song.artist.to_uppercase().contains(&needle)
                || song.title.to_uppercase().contains(&needle)
        })
        .collect();

    Ok(songs)
}

fn row_to_songtext(row: &rusqlite::Row<'_>) -> rusqlite::Result<SongText> {
    Ok(SongText {
        id: row.get(0)?,
        artist: row.get(1)?,
        title: row.get(2)?,
        format: row.get(3)?,
        data: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::apply_schema;
    use crate::models::DEFAULT_FORMAT;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).unwrap();
        conn
    }

    fn add(conn: &Connection, artist: &str, title: &str) -> SongText {
        create_songtext(conn, artist, title, DEFAULT_FORMAT, "<p>la la</p>").unwrap()
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let conn = test_conn();
        let first = add(&conn, "Abba", "Dancing Queen");
        let second = add(&conn, "Phil Collins", "In The Air Tonight");
        assert_ne!(first.id, second.id);
        assert_eq!(get_songtext(&conn, first.id).unwrap().unwrap().title, "Dancing Queen");
    }

    #[test]
    fn search_matches_substring_case_insensitively() {
        let conn = test_conn();
        add(&conn, "Phil Collins", "In The Air Tonight");
        add(&conn, "Abba", "Dancing Queen");

        let hits = search_songtexts(&conn, "tonight").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "In The Air Tonight");

        // Artist field participates in the match as well.
        let hits = search_songtexts(&conn, "COLLINS").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].artist, "Phil Collins");
    }

    #[test]
    fn empty_query_matches_everything() {
        let conn = test_conn();
        add(&conn, "Abba", "Dancing Queen");
        add(&conn, "Phil Collins", "In The Air Tonight");
        assert_eq!(search_songtexts(&conn, "").unwrap().len(), 2);
    }

    #[test]
    fn search_excludes_non_matching_records() {
        let conn = test_conn();
        add(&conn, "Abba", "Dancing Queen");
        assert!(search_songtexts(&conn, "zeppelin").unwrap().is_empty());
    }

    #[test]
    fn update_replaces_all_fields_of_existing_record() {
        let conn = test_conn();
        let mut song = add(&conn, "Abba", "Dancing Quen");
        song.title = "Dancing Queen".to_string();
        song.data = "<p>corrected</p>".to_string();
        update_songtext(&conn, &song).unwrap();

        let stored = get_songtext(&conn, song.id).unwrap().unwrap();
        assert_eq!(stored, song);
        assert_eq!(search_songtexts(&conn, "").unwrap().len(), 1);
    }

    #[test]
    fn update_on_absent_id_inserts() {
        let conn = test_conn();
        let song = SongText {
            id: 42,
            artist: "Abba".into(),
            title: "Waterloo".into(),
            format: DEFAULT_FORMAT.into(),
            data: String::new(),
        };
        update_songtext(&conn, &song).unwrap();
        assert_eq!(get_songtext(&conn, 42).unwrap().unwrap(), song);
    }

    #[test]
    fn delete_is_idempotent() {
        let conn = test_conn();
        let song = add(&conn, "Abba", "Waterloo");
        delete_songtext(&conn, song.id).unwrap();
        assert!(get_songtext(&conn, song.id).unwrap().is_none());
        // Second delete of the same id still succeeds.
        delete_songtext(&conn, song.id).unwrap();
    }

    #[test]
    fn clear_then_search_is_empty() {
        let conn = test_conn();
        add(&conn, "Abba", "Dancing Queen");
        add(&conn, "Phil Collins", "In The Air Tonight");
        clear_songtexts(&conn).unwrap();
        assert!(search_songtexts(&conn, "").unwrap().is_empty());
    }

    #[test]
    fn get_on_absent_id_is_none() {
        let conn = test_conn();
        assert!(get_songtext(&conn, 999).unwrap().is_none());
    }
}
