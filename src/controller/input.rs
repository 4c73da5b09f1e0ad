//! Mouse and keyboard dispatch against the regions recorded by the last
//! draw. Left clicks resolve in a fixed priority order; whatever matches
//! first consumes the click.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::catalog::Track;
use crate::controller::AppController;
use crate::model::ActiveTab;
use crate::model::types::hit;

impl AppController {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.model.should_quit = true;
        }
    }

    pub fn handle_mouse_event(&mut self, event: MouseEvent) {
        match event.kind {
            MouseEventKind::Moved => {
                self.model.cursor = Some((event.column, event.row));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.on_left_click(event.column, event.row);
            }
            MouseEventKind::Down(MouseButton::Right) => {
                self.on_right_click(event.column, event.row);
            }
            _ => {}
        }
    }

    fn on_left_click(&mut self, col: u16, row: u16) {
        // An open context menu consumes the click outright, hit or miss.
        if self.model.menu.is_visible() {
            let option = self.model.menu.hit_option(col, row);
            let album = self.model.menu.bound_album();
            self.model.menu.hide();
            if let (Some(option), Some(album)) = (option, album) {
                self.handle_menu_option(option, album);
            }
            return;
        }

        // Transport buttons are live only while a track is loaded.
        if self.model.playback.loaded.is_some() {
            if hit(self.model.regions.transport_toggle, col, row) {
                self.toggle_transport();
                return;
            }
            if hit(self.model.regions.transport_stop, col, row) {
                self.stop_transport();
                return;
            }
        }

        let detail_open = self.model.nav.album_view.is_some();
        match (self.model.nav.active_tab, detail_open) {
            (ActiveTab::Albums, false) => {
                if hit(self.model.regions.page_prev, col, row) {
                    self.model.nav.prev_page();
                    return;
                }
                if hit(self.model.regions.page_next, col, row) {
                    self.model.nav.next_page(self.model.catalog.len());
                    return;
                }
                if let Some(id) = self.model.regions.grid_cell_at(col, row) {
                    self.model.nav.album_view = Some(id);
                    return;
                }
            }
            (ActiveTab::Genres, false) => {
                // Tab clicks are not part of the Genres content area.
                if !self.model.regions.in_tab_bar(col, row) {
                    self.on_genres_click(col, row);
                    return;
                }
            }
            (ActiveTab::Playlist, _) => {
                if self.on_playlist_click(col, row) {
                    return;
                }
                // Empty space on the playlist page navigates back to Albums.
                self.model.nav.switch_tab(ActiveTab::Albums);
            }
            (ActiveTab::Albums | ActiveTab::Genres, true) => {
                if let Some(index) = self.model.regions.track_row_at(col, row) {
                    self.play_detail_track(index);
                    return;
                }
                // A miss closes the detail, restoring the grid underneath.
                self.model.nav.album_view = None;
            }
        }

        if let Some(tab) = self.model.regions.tab_at(col, row) {
            self.model.nav.switch_tab(tab);
        }
    }

    fn on_genres_click(&mut self, col: u16, row: u16) {
        if self.model.nav.filtered_albums.is_empty() {
            match self.model.regions.genre_row_at(col, row) {
                Some(genre) => {
                    let catalog = &self.model.catalog;
                    self.model.nav.select_genre(catalog, genre);
                }
                None => self.model.nav.clear_filter(),
            }
        } else {
            self.model.nav.genre_empty = false;
            match self.model.regions.grid_cell_at(col, row) {
                Some(id) => self.model.nav.album_view = Some(id),
                None => self.model.nav.clear_filter(),
            }
        }
    }

    /// Returns true when the click was consumed by a row or button.
    fn on_playlist_click(&mut self, col: u16, row: u16) -> bool {
        if let Some(index) = self.model.regions.track_row_at(col, row) {
            let track = self
                .model
                .playlist
                .as_ref()
                .and_then(|p| p.tracks.get(index).cloned());
            if let Some(track) = track {
                self.model.status = "Playing".to_string();
                self.model.playback.playlist_playing = false;
                self.play_track(track);
            }
            return true;
        }
        if hit(self.model.regions.playlist_play, col, row) {
            self.model.playback.playlist_playing = true;
            self.play_playlist();
            return true;
        }
        if hit(self.model.regions.playlist_shuffle, col, row) {
            self.shuffle_playlist();
            return true;
        }
        if hit(self.model.regions.playlist_clear, col, row) {
            self.clear_playlist();
            return true;
        }
        false
    }

    fn play_detail_track(&mut self, index: usize) {
        let track: Option<Track> = self
            .model
            .nav
            .album_view
            .and_then(|id| self.model.catalog.album(id))
            .and_then(|album| album.tracks.get(index).cloned());
        if let Some(track) = track {
            self.model.status = "Playing".to_string();
            self.play_track(track);
        }
    }

    fn on_right_click(&mut self, col: u16, row: u16) {
        if self.model.menu.is_visible() {
            self.model.menu.hide();
            return;
        }

        if self.model.nav.album_view.is_some() {
            if let Some(index) = self.model.regions.track_row_at(col, row) {
                let track: Option<Track> = self
                    .model
                    .nav
                    .album_view
                    .and_then(|id| self.model.catalog.album(id))
                    .and_then(|album| album.tracks.get(index).cloned());
                if let Some(track) = track {
                    self.add_to_playlist(track);
                }
            }
            return;
        }

        // The menu only opens from the Albums grid, not the filtered
        // Genres grid.
        if self.model.nav.active_tab == ActiveTab::Albums {
            if let Some(id) = self.model.regions.grid_cell_at(col, row) {
                self.model.menu.show(col, row, id);
            }
        }
    }
}
