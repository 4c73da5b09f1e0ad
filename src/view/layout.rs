//! Layout rendering (status banner with transport controls, tab bar)

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::types::hit;
use crate::model::{AppModel, HitRegions};

pub fn render_status_banner(
    frame: &mut Frame,
    area: Rect,
    model: &AppModel,
    paused: bool,
    regions: &mut HitRegions,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Now playing
            Constraint::Min(0),         // Status text
            Constraint::Length(9),      // Pause/Play
            Constraint::Length(9),      // Stop
        ])
        .split(area);

    let now_playing = match &model.playback.loaded {
        Some(track) => format!("♪ {}", track.name),
        None => String::new(),
    };
    let playing = Paragraph::new(now_playing)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Now Playing "));
    frame.render_widget(playing, chunks[0]);

    let status = Paragraph::new(model.status.as_str())
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, chunks[1]);

    // Transport buttons only exist while a track is loaded; unrecorded
    // regions stay zero-sized and therefore dead.
    if model.playback.loaded.is_some() {
        let toggle_label = if paused { "Play" } else { "Pause" };
        let toggle = Paragraph::new(toggle_label)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(toggle, chunks[2]);
        regions.transport_toggle = chunks[2];

        let stop = Paragraph::new("Stop")
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(stop, chunks[3]);
        regions.transport_stop = chunks[3];
    }
}

pub fn render_tab_bar(frame: &mut Frame, area: Rect, model: &AppModel, regions: &mut HitRegions) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (tab, chunk) in crate::model::ActiveTab::ALL.iter().zip(chunks.iter()) {
        let hovered = model
            .cursor
            .is_some_and(|(col, row)| hit(*chunk, col, row));
        let style = if *tab == model.nav.active_tab {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if hovered {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };

        let widget = Paragraph::new(tab.label())
            .style(style)
            .centered()
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(widget, *chunk);
        regions.tabs.push((*tab, *chunk));
    }
}
