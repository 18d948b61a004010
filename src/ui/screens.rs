//! Backing state for the two screens of the TUI. These structs stay free of
//! widget code: they hold the data and the orchestration, `app.rs` decides
//! how to draw it.

use std::time::{Duration, Instant};

use anyhow::Result;
use rusqlite::Connection;
use tracing::debug;

use crate::db::search_songtexts;
use crate::listing::{build_rows, sort_songs, ListRow, SortKey};
use crate::models::SongText;

use super::helpers::flatten_html;

/// Quiet interval after the last keystroke before a search fires.
pub(crate) const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

/// Cancellable deadline for the keystroke-driven re-search. At most one
/// deadline is outstanding; scheduling replaces any pending one.
#[derive(Debug, Default)]
pub(crate) struct Debounce {
    deadline: Option<Instant>,
}

impl Debounce {
    /// Start (or restart) the quiet interval from `now`.
    pub(crate) fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + DEBOUNCE_INTERVAL);
    }

    /// Drop any pending deadline. Returns whether one was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Consume the deadline if it has elapsed.
    pub(crate) fn take_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left until the deadline, used to bound the event poll so a due
    /// search fires promptly instead of waiting out the full poll timeout.
    pub(crate) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// State of the overview list: the active query and sort key, the rendered
/// row sequence, and the cursor. Selection tracks entries; section headers
/// and the placeholder are skipped.
pub(crate) struct OverviewScreen {
    /// Query of the most recent executed search.
    pub(crate) query: String,
    /// Active sort (and grouping) key.
    pub(crate) sort: SortKey,
    /// Text currently in the search box. Kept separate from `query` so
    /// typing can run ahead of the debounced search.
    pub(crate) search_input: String,
    /// Row sequence produced by the last refresh.
    pub(crate) rows: Vec<ListRow>,
    /// Positions of `Entry` rows within `rows`.
    entry_positions: Vec<usize>,
    /// Index into `entry_positions` of the selected entry.
    pub(crate) selected: usize,
    /// Pending re-search deadline.
    pub(crate) debounce: Debounce,
}

impl OverviewScreen {
    pub(crate) fn new() -> Self {
        Self {
            query: String::new(),
            sort: SortKey::default(),
            search_input: String::new(),
            rows: vec![ListRow::Placeholder],
            entry_positions: Vec::new(),
            selected: 0,
            debounce: Debounce::default(),
        }
    }

    /// Run the full search/sort/group pipeline and update the view state:
    /// search the store, order the results, rebuild the row sequence, and
    /// reflect the executed query back into the search box when the box does
    /// not already hold it (so a refresh never fights active typing).
    pub(crate) fn refresh(&mut self, conn: &Connection, query: &str, sort: SortKey) -> Result<()> {
        let mut songs = search_songtexts(conn, query)?;
        sort_songs(&mut songs, sort);
        debug!(query, sort = sort.as_str(), hits = songs.len(), "overview refreshed");

        self.query = query.to_string();
        self.sort = sort;
        self.rows = build_rows(&songs, sort);
        self.entry_positions = self
            .rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| matches!(row, ListRow::Entry { .. }).then_some(idx))
            .collect();
        if self.selected >= self.entry_positions.len() {
            self.selected = self.entry_positions.len().saturating_sub(1);
        }

        if self.search_input != self.query {
            self.search_input = self.query.clone();
        }
        Ok(())
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.entry_positions.len()
    }

    /// Id of the selected entry, if any entry is listed.
    pub(crate) fn current_entry_id(&self) -> Option<i64> {
        let position = *self.entry_positions.get(self.selected)?;
        match self.rows.get(position) {
            Some(ListRow::Entry { id, .. }) => Some(*id),
            _ => None,
        }
    }

    /// Absolute index of the selected row within `rows`, for windowing.
    pub(crate) fn selected_row_position(&self) -> Option<usize> {
        self.entry_positions.get(self.selected).copied()
    }

    pub(crate) fn move_selection(&mut self, offset: isize) {
        if self.entry_positions.is_empty() {
            return;
        }
        let len = self.entry_positions.len() as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    pub(crate) fn select_first(&mut self) {
        if !self.entry_positions.is_empty() {
            self.selected = 0;
        }
    }

    pub(crate) fn select_last(&mut self) {
        if !self.entry_positions.is_empty() {
            self.selected = self.entry_positions.len() - 1;
        }
    }
}

/// Backing state for the lyric display screen.
pub(crate) struct DetailScreen {
    pub(crate) song: SongText,
    /// Payload flattened to plain text lines for the terminal.
    pub(crate) lines: Vec<String>,
    pub(crate) scroll: u16,
}

impl DetailScreen {
    pub(crate) fn new(song: SongText) -> Self {
        let lines = if song.format == crate::models::DEFAULT_FORMAT {
            flatten_html(&song.data)
        } else {
            song.data.lines().map(str::to_string).collect()
        };
        Self {
            song,
            lines,
            scroll: 0,
        }
    }

    pub(crate) fn move_scroll(&mut self, delta: isize) {
        let max = self.lines.len().saturating_sub(1) as isize;
        let mut new = self.scroll as isize + delta;
        if new < 0 {
            new = 0;
        }
        if new > max {
            new = max;
        }
        self.scroll = new as u16;
    }
}
