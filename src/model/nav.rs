//! Navigation state: active tab, open album detail, grid page and the genre
//! filter. All transitions are plain field updates so the controller's
//! dispatch order stays readable.

use crate::catalog::{Catalog, Genre};
use crate::model::pager;
use crate::model::types::ActiveTab;

#[derive(Debug)]
pub struct NavState {
    pub active_tab: ActiveTab,
    /// Album id of the open detail view, if any.
    pub album_view: Option<usize>,
    pub album_page: usize,
    /// Album ids matching the active genre filter, catalog order. Empty means
    /// no filter is active.
    pub filtered_albums: Vec<usize>,
    pub display_genre: Option<Genre>,
    /// Set when the last genre selection matched nothing.
    pub genre_empty: bool,
    /// Recomputed every frame from the cursor position, never persisted
    /// anywhere else.
    pub hovered_album: Option<usize>,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_tab: ActiveTab::Albums,
            album_view: None,
            album_page: 0,
            filtered_albums: Vec::new(),
            display_genre: None,
            genre_empty: false,
            hovered_album: None,
        }
    }
}

impl NavState {
    /// Applies a genre row selection. A genre with matches replaces the
    /// filter; a genre with none only raises the empty flag.
    pub fn select_genre(&mut self, catalog: &Catalog, genre: Genre) {
        let matches = catalog.filter_by_genre(genre);
        if matches.is_empty() {
            self.filtered_albums.clear();
            self.display_genre = None;
            self.genre_empty = true;
        } else {
            self.filtered_albums = matches;
            self.display_genre = Some(genre);
            self.genre_empty = false;
        }
    }

    /// The bail reset: any stray click on the Genres content area drops the
    /// whole filter state.
    pub fn clear_filter(&mut self) {
        self.filtered_albums.clear();
        self.display_genre = None;
        self.genre_empty = false;
        self.album_view = None;
    }

    pub fn next_page(&mut self, len: usize) {
        if self.album_page < pager::max_page(len) {
            self.album_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.album_page = self.album_page.saturating_sub(1);
    }

    /// Tab switches always close an open detail but leave the page and the
    /// genre filter where they were.
    pub fn switch_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
        self.album_view = None;
    }
}
