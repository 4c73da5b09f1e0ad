//! Core type definitions: tabs, playback display state and the semantic
//! click regions recorded by the view on every draw.

use ratatui::layout::Rect;

use crate::catalog::{Genre, Track};

/// Which tab is currently active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveTab {
    Albums,
    Genres,
    Playlist,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [ActiveTab::Albums, ActiveTab::Genres, ActiveTab::Playlist];

    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Albums => "Albums",
            ActiveTab::Genres => "Genres",
            ActiveTab::Playlist => "Playlist",
        }
    }
}

/// Playback-sequencing state. `current_track_index` is only meaningful while
/// `playlist_playing` is true; selecting an individual track leaves it alone.
#[derive(Debug, Default)]
pub struct PlaybackState {
    /// The track currently handed to the transport, if any. `None` means the
    /// transport regions are dead and the completion poll has nothing to do.
    pub loaded: Option<Track>,
    pub current_track_index: usize,
    pub playlist_playing: bool,
}

/// True when the point lies inside the rect. Zero-sized rects (the default)
/// never match, so unrecorded regions are simply dead.
pub fn hit(r: Rect, col: u16, row: u16) -> bool {
    r.width > 0
        && r.height > 0
        && col >= r.x
        && col < r.x + r.width
        && row >= r.y
        && row < r.y + r.height
}

/// Stores the last-drawn layout rects for every semantic click region.
/// Rebuilt from scratch on each draw; the controller hit-tests clicks and the
/// hover recompute against it without redoing any layout math.
#[derive(Clone, Debug, Default)]
pub struct HitRegions {
    pub tabs: Vec<(ActiveTab, Rect)>,
    pub transport_toggle: Rect,
    pub transport_stop: Rect,
    pub page_prev: Rect,
    pub page_next: Rect,
    /// Visible grid cells, each tagged with the album id it shows.
    pub grid_cells: Vec<(usize, Rect)>,
    pub genre_rows: Vec<(Genre, Rect)>,
    /// Track rows of the open album detail or the playlist view, tagged with
    /// their position in the displayed list.
    pub track_rows: Vec<(usize, Rect)>,
    pub playlist_play: Rect,
    pub playlist_shuffle: Rect,
    pub playlist_clear: Rect,
}

impl HitRegions {
    pub fn tab_at(&self, col: u16, row: u16) -> Option<ActiveTab> {
        self.tabs
            .iter()
            .find(|(_, r)| hit(*r, col, row))
            .map(|(tab, _)| *tab)
    }

    pub fn in_tab_bar(&self, col: u16, row: u16) -> bool {
        self.tab_at(col, row).is_some()
    }

    pub fn grid_cell_at(&self, col: u16, row: u16) -> Option<usize> {
        self.grid_cells
            .iter()
            .find(|(_, r)| hit(*r, col, row))
            .map(|(id, _)| *id)
    }

    pub fn genre_row_at(&self, col: u16, row: u16) -> Option<Genre> {
        self.genre_rows
            .iter()
            .find(|(_, r)| hit(*r, col, row))
            .map(|(genre, _)| *genre)
    }

    pub fn track_row_at(&self, col: u16, row: u16) -> Option<usize> {
        self.track_rows
            .iter()
            .find(|(_, r)| hit(*r, col, row))
            .map(|(index, _)| *index)
    }
}
