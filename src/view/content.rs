//! Main content area rendering: album grid with pagination, genre list,
//! album detail and the playlist view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::catalog::{Album, Genre};
use crate::model::pager::{self, GRID_COLS, GRID_ROWS};
use crate::model::{AppModel, HitRegions, PLAYLIST_TITLE};

/// Draws the 4x2 album grid. With `filtered_genre` set it shows the filtered
/// album set under a caption; otherwise the paged full catalog with the
/// pagination footer.
pub fn render_album_grid(
    frame: &mut Frame,
    area: Rect,
    model: &AppModel,
    filtered_genre: Option<Genre>,
    regions: &mut HitRegions,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Caption
            Constraint::Min(0),    // Grid
            Constraint::Length(1), // Pagination footer
        ])
        .split(area);

    let visible: Vec<&Album> = match filtered_genre {
        Some(genre) => {
            let caption = Paragraph::new(vec![
                Line::from(format!("Showing albums for {}", genre.label())),
                Line::from("Click anywhere else to return to the genre list"),
            ])
            .style(Style::default().fg(Color::Cyan));
            frame.render_widget(caption, chunks[0]);

            // The page cursor is shared with the Albums tab.
            let len = model.nav.filtered_albums.len();
            let page = model.nav.album_page;
            let (start, end) = pager::page_slice(len, page);

            render_pagination_footer(frame, chunks[2], page, len, end, regions);

            model.nav.filtered_albums[start..end]
                .iter()
                .filter_map(|id| model.catalog.album(*id))
                .collect()
        }
        None => {
            let len = model.catalog.len();
            let page = model.nav.album_page;
            let (start, end) = pager::page_slice(len, page);

            render_pagination_footer(frame, chunks[2], page, len, end, regions);

            model.catalog.albums()[start..end].iter().collect()
        }
    };

    render_grid_cells(frame, chunks[1], model, &visible, regions);
}

fn render_grid_cells(
    frame: &mut Frame,
    area: Rect,
    model: &AppModel,
    visible: &[&Album],
    regions: &mut HitRegions,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50); GRID_ROWS])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(25); GRID_COLS])
            .split(*row_area);

        for (col_index, cell) in cells.iter().enumerate() {
            let Some(album) = visible.get(row_index * GRID_COLS + col_index) else {
                continue;
            };

            let border_style = if model.nav.hovered_album == Some(album.id) {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            let widget = Paragraph::new(vec![
                Line::from(album.title.as_str()).style(Style::default().add_modifier(Modifier::BOLD)),
                Line::from(album.artist.as_str()),
                Line::from(album.year.as_str()).style(Style::default().fg(Color::DarkGray)),
            ])
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
            frame.render_widget(widget, *cell);
            regions.grid_cells.push((album.id, *cell));
        }
    }
}

fn render_pagination_footer(
    frame: &mut Frame,
    area: Rect,
    page: usize,
    len: usize,
    end: usize,
    regions: &mut HitRegions,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(8),
            Constraint::Min(0),
            Constraint::Length(8),
        ])
        .split(area);

    if page > 0 {
        let prev = Paragraph::new("← Prev").style(Style::default().fg(Color::Green));
        frame.render_widget(prev, chunks[0]);
        regions.page_prev = chunks[0];
    }

    let indicator = Paragraph::new(format!("Page {}/{}", page + 1, pager::max_page(len) + 1))
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(indicator, chunks[1]);

    if end < len {
        let next = Paragraph::new("Next →").style(Style::default().fg(Color::Green));
        frame.render_widget(next, chunks[2]);
        regions.page_next = chunks[2];
    }
}

pub fn render_genre_list(frame: &mut Frame, area: Rect, model: &AppModel, regions: &mut HitRegions) {
    let block = Block::default().borders(Borders::ALL).title(" Genres ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(1)]; // Hint line
    constraints.extend([Constraint::Length(1); Genre::SELECTABLE.len()]);
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let hint = if model.nav.genre_empty {
        Paragraph::new("No albums found for this genre.").style(Style::default().fg(Color::Red))
    } else {
        Paragraph::new("Click a genre to view albums!").style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(hint.centered(), chunks[0]);

    for (index, genre) in Genre::SELECTABLE.iter().enumerate() {
        let row = chunks[index + 1];
        let widget = Paragraph::new(genre.label())
            .style(Style::default().fg(Color::White))
            .centered();
        frame.render_widget(widget, row);
        regions.genre_rows.push((*genre, row));
    }
}

pub fn render_album_detail(
    frame: &mut Frame,
    area: Rect,
    model: &AppModel,
    album_id: usize,
    regions: &mut HitRegions,
) {
    let Some(album) = model.catalog.album(album_id) else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", album.title, album.genre.label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(1), // Artist and year
        Constraint::Length(1), // Cover art path
        Constraint::Length(2), // Hint
    ];
    constraints.extend(album.tracks.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Return hint
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let header = Paragraph::new(format!("{} - {}", album.artist, album.year))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, chunks[0]);

    let cover = Paragraph::new(format!("[cover: {}]", album.image_path))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(cover, chunks[1]);

    let hint = if album.tracks.is_empty() {
        Paragraph::new("No tracks available for this album.").style(Style::default().fg(Color::Red))
    } else {
        Paragraph::new("Left click to play or right click to add to playlist!")
            .style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(hint, chunks[2]);

    for (index, track) in album.tracks.iter().enumerate() {
        let row = chunks[index + 3];
        let widget = Paragraph::new(format!("{}. {} ({})", index + 1, track.name, track.length));
        frame.render_widget(widget, row);
        regions.track_rows.push((index, row));
    }

    let back = Paragraph::new("← Click anywhere to return")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(back, chunks[chunks.len() - 1]);
}

pub fn render_playlist(frame: &mut Frame, area: Rect, model: &AppModel, regions: &mut HitRegions) {
    let tracks = model
        .playlist
        .as_ref()
        .map(|p| p.tracks.as_slice())
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {PLAYLIST_TITLE} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Buttons only exist for a non-empty playlist.
    if tracks.is_empty() {
        let empty = Paragraph::new("No tracks in playlist.")
            .style(Style::default().fg(Color::DarkGray))
            .centered();
        frame.render_widget(empty, inner);
        return;
    }

    let mut constraints = vec![Constraint::Length(1)]; // Hint
    constraints.extend(tracks.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(3)); // Buttons
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let hint = Paragraph::new("Click a song to play!").style(Style::default().fg(Color::Cyan));
    frame.render_widget(hint, chunks[0]);

    for (index, track) in tracks.iter().enumerate() {
        let row = chunks[index + 1];
        let playing = model.playback.playlist_playing
            && index == model.playback.current_track_index;
        let style = if playing {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let widget =
            Paragraph::new(format!("{}. {} ({})", index + 1, track.name, track.length)).style(style);
        frame.render_widget(widget, row);
        regions.track_rows.push((index, row));
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(13),
            Constraint::Length(11),
            Constraint::Min(0),
        ])
        .split(chunks[chunks.len() - 1]);

    let play = Paragraph::new("Play")
        .style(Style::default().fg(Color::Green))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(play, buttons[0]);
    regions.playlist_play = buttons[0];

    let shuffle = Paragraph::new("Shuffle")
        .style(Style::default().fg(Color::Yellow))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(shuffle, buttons[1]);
    regions.playlist_shuffle = buttons[1];

    let clear = Paragraph::new("Clear")
        .style(Style::default().fg(Color::Red))
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(clear, buttons[2]);
    regions.playlist_clear = buttons[2];
}
