use std::mem;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use rusqlite::Connection;
use tracing::warn;

use crate::db::{
    clear_songtexts, create_songtext, delete_songtext, get_songtext, update_songtext,
};
use crate::listing::{ListRow, SortKey};
use crate::models::{SongText, DEFAULT_FORMAT};

use super::forms::{ConfirmClearAll, ConfirmSongDelete, SongField, SongForm};
use super::helpers::{centered_rect, surface_error};
use super::screens::{DetailScreen, OverviewScreen};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the overview/detail header bar including its borders.
const HEADER_HEIGHT: u16 = 4;
/// Poll interval when no debounce deadline is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// High-level navigation states. The overview state itself lives on [`App`]
/// so query, sort, and cursor survive a trip into the detail screen.
enum Screen {
    Overview,
    Detail(DetailScreen),
}

/// Fine-grained modes scoped to the current screen.
enum Mode {
    Normal,
    Searching,
    AddingSong(SongForm),
    EditingSong {
        original: SongText,
        form: SongForm,
    },
    ConfirmDelete(ConfirmSongDelete),
    ConfirmClearAll(ConfirmClearAll),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    conn: Connection,
    screen: Screen,
    mode: Mode,
    overview: OverviewScreen,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn,
            screen: Screen::Overview,
            mode: Mode::Normal,
            overview: OverviewScreen::new(),
            status: None,
        }
    }

    /// Populate the overview before the event loop starts. Startup failures
    /// are fatal and bubble to the terminal.
    pub fn reload(&mut self) -> Result<()> {
        let query = self.overview.query.clone();
        let sort = self.overview.sort;
        self.overview.refresh(&self.conn, &query, sort)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit)?,
            Mode::Searching => self.handle_search(code),
            Mode::AddingSong(form) => self.handle_add_song(code, form),
            Mode::EditingSong { original, form } => self.handle_edit_song(code, original, form),
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm),
            Mode::ConfirmClearAll(confirm) => self.handle_confirm_clear_all(code, confirm),
        };

        Ok(exit)
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Overview => {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        *exit = true;
                    }
                    KeyCode::Up => self.overview.move_selection(-1),
                    KeyCode::Down => self.overview.move_selection(1),
                    KeyCode::PageUp => self.overview.move_selection(-5),
                    KeyCode::PageDown => self.overview.move_selection(5),
                    KeyCode::Home => self.overview.select_first(),
                    KeyCode::End => self.overview.select_last(),
                    KeyCode::Char('/') | KeyCode::Char('f') => {
                        self.clear_status();
                        return Ok(Mode::Searching);
                    }
                    KeyCode::Char('t') | KeyCode::Char('T') => {
                        self.clear_status();
                        self.resort(SortKey::Title);
                    }
                    KeyCode::Char('a') | KeyCode::Char('A') => {
                        self.clear_status();
                        self.resort(SortKey::Artist);
                    }
                    KeyCode::Enter => {
                        if let Some(song) = self.current_song()? {
                            self.clear_status();
                            self.screen = Screen::Detail(DetailScreen::new(song));
                        } else {
                            self.set_status("No song selected to open.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('+') => {
                        self.clear_status();
                        return Ok(Mode::AddingSong(SongForm::default()));
                    }
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        if let Some(song) = self.current_song()? {
                            self.clear_status();
                            return Ok(Mode::EditingSong {
                                form: SongForm::from_song(&song),
                                original: song,
                            });
                        } else {
                            self.set_status("No song selected to edit.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('-') => {
                        if let Some(song) = self.current_song()? {
                            self.clear_status();
                            return Ok(Mode::ConfirmDelete(ConfirmSongDelete { song }));
                        } else {
                            self.set_status("No song selected to delete.", StatusKind::Error);
                        }
                    }
                    KeyCode::Char('C') => {
                        self.clear_status();
                        return Ok(Mode::ConfirmClearAll(ConfirmClearAll));
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
            Screen::Detail(ref mut detail) => {
                match code {
                    KeyCode::Char('q') => {
                        *exit = true;
                    }
                    KeyCode::Esc | KeyCode::Backspace => {
                        self.clear_status();
                        self.screen = Screen::Overview;
                    }
                    KeyCode::Up => detail.move_scroll(-1),
                    KeyCode::Down => detail.move_scroll(1),
                    KeyCode::PageUp => detail.move_scroll(-10),
                    KeyCode::PageDown => detail.move_scroll(10),
                    KeyCode::Home => detail.scroll = 0,
                    KeyCode::End => {
                        detail.scroll = detail.lines.len().saturating_sub(1) as u16;
                    }
                    KeyCode::Char('e') | KeyCode::Char('E') => {
                        let song = detail.song.clone();
                        self.clear_status();
                        return Ok(Mode::EditingSong {
                            form: SongForm::from_song(&song),
                            original: song,
                        });
                    }
                    _ => {}
                }
                Ok(Mode::Normal)
            }
        }
    }

    fn handle_search(&mut self, code: KeyCode) -> Mode {
        match code {
            KeyCode::Esc => {
                // Abandon the pending input and show what is applied.
                self.overview.debounce.cancel();
                self.overview.search_input = self.overview.query.clone();
                return Mode::Normal;
            }
            KeyCode::Enter => {
                self.overview.debounce.cancel();
                let input = self.overview.search_input.clone();
                let sort = self.overview.sort;
                self.refresh_overview(&input, sort);
                return Mode::Normal;
            }
            KeyCode::Up => self.overview.move_selection(-1),
            KeyCode::Down => self.overview.move_selection(1),
            KeyCode::Backspace => {
                self.overview.search_input.pop();
                self.overview.debounce.schedule(Instant::now());
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                self.overview.search_input.push(ch);
                self.overview.debounce.schedule(Instant::now());
            }
            _ => {}
        }
        Mode::Searching
    }

    fn handle_add_song(&mut self, code: KeyCode, mut form: SongForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Add song cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok((artist, title, lyrics)) => {
                    match create_songtext(&self.conn, &artist, &title, DEFAULT_FORMAT, &lyrics) {
                        Ok(song) => {
                            self.reload_overview();
                            self.set_status(
                                format!("Saved {}.", song.display_title()),
                                StatusKind::Info,
                            );
                            return Mode::Normal;
                        }
                        Err(err) => {
                            let message = surface_error(&err);
                            form.error = Some(message.clone());
                            self.set_status(message, StatusKind::Error);
                        }
                    }
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::AddingSong(form)
    }

    fn handle_edit_song(&mut self, code: KeyCode, original: SongText, mut form: SongForm) -> Mode {
        match code {
            KeyCode::Esc => {
                self.set_status("Edit cancelled.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::BackTab => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.parse_inputs() {
                Ok((artist, title, lyrics)) => {
                    let updated = SongText {
                        id: original.id,
                        artist,
                        title,
                        format: original.format.clone(),
                        data: lyrics,
                    };
                    match update_songtext(&self.conn, &updated) {
                        Ok(()) => {
                            self.reload_overview();
                            if let Screen::Detail(detail) = &mut self.screen {
                                if detail.song.id == updated.id {
                                    *detail = DetailScreen::new(updated.clone());
                                }
                            }
                            self.set_status("Song updated.", StatusKind::Info);
                            return Mode::Normal;
                        }
                        Err(err) => {
                            let message = surface_error(&err);
                            form.error = Some(message.clone());
                            self.set_status(message, StatusKind::Error);
                        }
                    }
                }
                Err(err) => {
                    let message = surface_error(&err);
                    form.error = Some(message.clone());
                    self.set_status(message, StatusKind::Error);
                }
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Mode::EditingSong { original, form }
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmSongDelete) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match delete_songtext(&self.conn, confirm.song.id) {
                    Ok(()) => {
                        self.reload_overview();
                        self.set_status("Song deleted.", StatusKind::Info);
                        Mode::Normal
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        self.set_status(message, StatusKind::Error);
                        Mode::ConfirmDelete(confirm)
                    }
                }
            }
            _ => Mode::ConfirmDelete(confirm),
        }
    }

    fn handle_confirm_clear_all(&mut self, code: KeyCode, confirm: ConfirmClearAll) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Clear cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match clear_songtexts(&self.conn) {
                    Ok(()) => {
                        self.reload_overview();
                        self.set_status("All song texts removed.", StatusKind::Info);
                        Mode::Normal
                    }
                    Err(err) => {
                        let message = surface_error(&err);
                        self.set_status(message, StatusKind::Error);
                        Mode::ConfirmClearAll(confirm)
                    }
                }
            }
            _ => Mode::ConfirmClearAll(confirm),
        }
    }

    /// Fire the debounced search if its deadline has elapsed. Called by the
    /// event loop on every turn.
    pub(crate) fn fire_due_search(&mut self, now: Instant) {
        if self.overview.debounce.take_if_due(now) {
            let input = self.overview.search_input.clone();
            let sort = self.overview.sort;
            self.refresh_overview(&input, sort);
        }
    }

    /// How long the event loop may block before it must check timers again.
    pub(crate) fn poll_timeout(&self, now: Instant) -> Duration {
        match self.overview.debounce.remaining(now) {
            Some(remaining) => remaining.min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Switch the active sort key and re-run the pipeline with the current
    /// query.
    fn resort(&mut self, sort: SortKey) {
        let query = self.overview.query.clone();
        self.refresh_overview(&query, sort);
    }

    /// Re-run the pipeline with the current parameters after a mutation.
    fn reload_overview(&mut self) {
        let query = self.overview.query.clone();
        let sort = self.overview.sort;
        self.refresh_overview(&query, sort);
    }

    /// Run the search/sort/render pipeline. A storage failure lands in the
    /// footer instead of tearing the application down, leaving the previous
    /// rows on screen.
    fn refresh_overview(&mut self, query: &str, sort: SortKey) {
        if let Err(err) = self.overview.refresh(&self.conn, query, sort) {
            warn!(error = %err, query, "search failed");
            let message = surface_error(&err);
            self.set_status(message, StatusKind::Error);
        }
    }

    /// Load the selected entry from the store. The row only carries metadata;
    /// the full record (including the payload) comes from the database.
    fn current_song(&self) -> Result<Option<SongText>> {
        let Some(id) = self.overview.current_entry_id() else {
            return Ok(None);
        };
        get_songtext(&self.conn, id)
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Overview => self.draw_overview(frame, content_area),
            Screen::Detail(detail) => self.draw_detail(frame, content_area, detail),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::AddingSong(form) => self.draw_song_form(frame, area, "Add Song", form),
            Mode::EditingSong { form, .. } => self.draw_song_form(frame, area, "Edit Song", form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::ConfirmClearAll(_) => self.draw_confirm_clear_all(frame, area),
            Mode::Searching => self.draw_search_bar(frame, area),
            Mode::Normal => {}
        }
    }

    fn draw_overview(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
            .split(area);

        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        // The control for the active sort key is hidden; only the other
        // ordering is offered.
        let sort_control = match self.overview.sort.other() {
            SortKey::Title => vec![
                Span::styled("[t]", key_style),
                Span::raw(" Sort by Title"),
            ],
            SortKey::Artist => vec![
                Span::styled("[a]", key_style),
                Span::raw(" Sort by Artist"),
            ],
        };

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Search: "),
                Span::styled(
                    self.overview.search_input.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(sort_control),
        ])
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Songbook"));
        frame.render_widget(header, chunks[0]);

        self.draw_song_list(frame, chunks[1]);
    }

    fn draw_song_list(&self, frame: &mut Frame, area: Rect) {
        let title = format!("Songs ({})", self.overview.entry_count());
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner_height = block.inner(area).height as usize;
        if inner_height == 0 {
            frame.render_widget(block, area);
            return;
        }

        let selected_position = self.overview.selected_row_position();
        let start = match selected_position {
            Some(position) if position >= inner_height => position + 1 - inner_height,
            _ => 0,
        };

        let lines: Vec<Line<'static>> = self
            .overview
            .rows
            .iter()
            .enumerate()
            .skip(start)
            .take(inner_height)
            .map(|(position, row)| self.list_line(position, row, selected_position))
            .collect();

        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }

    fn list_line(
        &self,
        position: usize,
        row: &ListRow,
        selected_position: Option<usize>,
    ) -> Line<'static> {
        match row {
            ListRow::Section { label } => Line::from(Span::styled(
                label.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            ListRow::Entry { title, artist, .. } => {
                let selected = selected_position == Some(position);
                let pointer = if selected { "▶ " } else { "  " };
                let title_style = if selected {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(pointer),
                    Span::styled(title.clone(), title_style),
                    Span::raw("  "),
                    Span::styled(artist.clone(), Style::default().fg(Color::DarkGray)),
                ])
            }
            ListRow::Placeholder => Line::from(Span::styled(
                "No song texts stored yet.",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }

    fn draw_detail(&self, frame: &mut Frame, area: Rect, detail: &DetailScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(1)])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                detail.song.title.trim().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(detail.song.artist.trim().to_string())),
        ])
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Song"));
        frame.render_widget(header, chunks[0]);

        let content = if detail.lines.is_empty() {
            String::from("(no lyrics stored)")
        } else {
            detail.lines.join("\n")
        };
        let body = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).title("Lyrics"))
            .wrap(Wrap { trim: false })
            .scroll((detail.scroll, 0));
        frame.render_widget(body, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::Searching) => Line::from(vec![
                Span::styled("[Enter]", key_style),
                Span::raw(" Search Now   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Close"),
            ]),
            (_, Mode::AddingSong(_) | Mode::EditingSong { .. }) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Next Field   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Save   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (_, Mode::ConfirmDelete(_) | Mode::ConfirmClearAll(_)) => Line::from(vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Confirm   "),
                Span::styled("[N/Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Detail(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Scroll   "),
                Span::styled("[e]", key_style),
                Span::raw(" Edit   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Overview, _) => {
                let sort_key = match self.overview.sort.other() {
                    SortKey::Title => ("[t]", " Sort by Title   "),
                    SortKey::Artist => ("[a]", " Sort by Artist   "),
                };
                Line::from(vec![
                    Span::styled("[↑↓]", key_style),
                    Span::raw(" Select   "),
                    Span::styled("[Enter]", key_style),
                    Span::raw(" Open   "),
                    Span::styled("[/]", key_style),
                    Span::raw(" Search   "),
                    Span::styled(sort_key.0, key_style),
                    Span::raw(sort_key.1),
                    Span::styled("[+]", key_style),
                    Span::raw(" Add   "),
                    Span::styled("[e]", key_style),
                    Span::raw(" Edit   "),
                    Span::styled("[-]", key_style),
                    Span::raw(" Delete   "),
                    Span::styled("[C]", key_style),
                    Span::raw(" Clear All   "),
                    Span::styled("[q]", key_style),
                    Span::raw(" Quit"),
                ])
            }
        }
    }

    fn draw_song_form(&self, frame: &mut Frame, area: Rect, title: &str, form: &SongForm) {
        let popup_area = centered_rect(70, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title).borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let title_line = form.build_line("Title", SongField::Title);
        let artist_line = form.build_line("Artist", SongField::Artist);
        let lyrics_line = form.build_line("Lyrics", SongField::Lyrics);

        let mut lines = vec![title_line, artist_line, lyrics_line, Line::from("")];

        if let Some(error) = &form.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to save • Tab to switch • Esc to cancel",
                Style::default().fg(Color::Gray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let (cursor_x, cursor_y) = match form.active {
            SongField::Title => {
                let prefix = "Title: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Title) as u16,
                    inner.y,
                )
            }
            SongField::Artist => {
                let prefix = "Artist: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Artist) as u16,
                    inner.y + 1,
                )
            }
            SongField::Lyrics => {
                let prefix = "Lyrics: ".len() as u16;
                (
                    inner.x + prefix + form.value_len(SongField::Lyrics) as u16,
                    inner.y + 2,
                )
            }
        };
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmSongDelete) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Delete Song").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from(format!(
                "Delete '{}' permanently?",
                confirm.song.display_title()
            )),
            Line::from("This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_confirm_clear_all(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Clear Catalog")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from("Delete every stored song text?"),
            Line::from("The whole catalog will be emptied. This cannot be undone."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Y to confirm or N / Esc to cancel.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect) {
        let height = 3u16.min(area.height);
        let popup_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height,
        };
        frame.render_widget(Clear, popup_area);

        let block = Block::default().borders(Borders::ALL).title("Search");
        let paragraph = Paragraph::new(Span::raw(format!(
            "Search: {}",
            self.overview.search_input
        )))
        .block(block.clone())
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        let cursor_x = inner.x
            + "Search: ".len() as u16
            + self.overview.search_input.chars().count() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}
