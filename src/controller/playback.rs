//! Transport control and the per-frame tick: hover recompute and
//! advance-on-completion for playlist playback.

use crate::catalog::Track;
use crate::controller::AppController;
use crate::model::ActiveTab;

impl AppController {
    /// Hands a track to the transport and starts it.
    pub fn play_track(&mut self, track: Track) {
        tracing::info!(name = %track.name, location = %track.location.display(), "Playing track");
        self.transport.load(&track.location);
        self.transport.play(false);
        self.model.playback.loaded = Some(track);
    }

    /// Pause/resume for the loaded track.
    pub fn toggle_transport(&mut self) {
        if self.transport.is_paused() {
            self.model.status = "Playing".to_string();
            self.transport.play(false);
        } else {
            self.model.status = "Paused".to_string();
            self.transport.pause();
        }
    }

    pub fn stop_transport(&mut self) {
        self.model.status = "Stopped".to_string();
        self.transport.stop();
        self.model.playback.loaded = None;
    }

    /// Starts playlist playback from the top.
    pub fn play_playlist(&mut self) {
        self.model.playback.current_track_index = 0;
        self.model.status = "Playing Playlist".to_string();
        let first = self
            .model
            .playlist
            .as_ref()
            .and_then(|p| p.tracks.first().cloned());
        if let Some(track) = first {
            self.play_track(track);
        }
    }

    /// The status changes even for an absent playlist; only the track
    /// mutation is skipped.
    pub fn shuffle_playlist(&mut self) {
        if let Some(playlist) = self.model.playlist.as_mut() {
            playlist.shuffle(&mut rand::rng());
        }
        self.model.status = "Shuffled!".to_string();
    }

    pub fn clear_playlist(&mut self) {
        if let Some(playlist) = self.model.playlist.as_mut() {
            playlist.clear();
        }
        self.model.status = "Cleared!".to_string();
    }

    /// Per-frame work: recompute hover from the cursor and poll the transport
    /// for completion. Idempotent when nothing changed.
    pub fn tick(&mut self) {
        self.recompute_hover();

        let finished = self.model.playback.loaded.is_some()
            && !self.transport.is_playing()
            && !self.transport.is_paused();
        if !finished {
            return;
        }

        let playlist_live = self.model.playback.playlist_playing
            && self.model.playlist.as_ref().is_some_and(|p| !p.is_empty());
        if playlist_live {
            self.advance_playlist();
        } else {
            self.model.playback.loaded = None;
        }
    }

    /// Hover only applies to the Albums grid with no detail open.
    fn recompute_hover(&mut self) {
        let hoverable = self.model.nav.active_tab == ActiveTab::Albums
            && self.model.nav.album_view.is_none();
        self.model.nav.hovered_album = if hoverable {
            self.model
                .cursor
                .and_then(|(col, row)| self.model.regions.grid_cell_at(col, row))
        } else {
            None
        };
    }

    /// Moves the playlist cursor forward. The consume step runs after the
    /// advance either way, against the element now under the cursor.
    fn advance_playlist(&mut self) {
        self.model.playback.current_track_index += 1;
        let index = self.model.playback.current_track_index;

        let next = self
            .model
            .playlist
            .as_ref()
            .and_then(|p| p.tracks.get(index).cloned());
        match next {
            Some(track) => {
                self.model.status = "Playing Playlist".to_string();
                self.play_track(track);
            }
            None => {
                self.model.status = "Finished".to_string();
                if let Some(playlist) = self.model.playlist.as_mut() {
                    playlist.clear();
                }
                self.model.playback.playlist_playing = false;
                self.model.playback.loaded = None;
            }
        }

        if let Some(playlist) = self.model.playlist.as_mut() {
            playlist.consume_at_cursor(index);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::audio::Transport;
    use crate::catalog::{Album, Catalog, Genre};
    use crate::model::{AppModel, Playlist};
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    /// In-memory transport whose playing/paused answers are set by the test.
    #[derive(Default)]
    pub struct ScriptedTransport {
        pub state: Rc<RefCell<ScriptedState>>,
    }

    #[derive(Default)]
    pub struct ScriptedState {
        pub playing: bool,
        pub paused: bool,
        pub loads: Vec<PathBuf>,
    }

    impl Transport for ScriptedTransport {
        fn load(&mut self, location: &Path) {
            self.state.borrow_mut().loads.push(location.to_path_buf());
        }
        fn play(&mut self, _looped: bool) {
            let mut state = self.state.borrow_mut();
            state.playing = true;
            state.paused = false;
        }
        fn pause(&mut self) {
            let mut state = self.state.borrow_mut();
            state.playing = false;
            state.paused = true;
        }
        fn stop(&mut self) {
            let mut state = self.state.borrow_mut();
            state.playing = false;
            state.paused = false;
        }
        fn is_playing(&self) -> bool {
            self.state.borrow().playing
        }
        fn is_paused(&self) -> bool {
            self.state.borrow().paused
        }
    }

    pub fn track(name: &str) -> Track {
        Track {
            name: name.into(),
            location: PathBuf::from(format!("sounds/{name}.mp3")),
            length: "3:00".into(),
        }
    }

    pub fn album(id: usize, genre: Genre, track_names: &[&str]) -> Album {
        Album {
            id,
            artist: format!("artist {id}"),
            title: format!("album {id}"),
            year: "2021".into(),
            genre,
            image_path: String::new(),
            tracks: track_names.iter().map(|n| track(n)).collect(),
        }
    }

    pub fn controller_with(
        albums: Vec<Album>,
    ) -> (AppController, Rc<RefCell<ScriptedState>>) {
        let transport = ScriptedTransport::default();
        let state = Rc::clone(&transport.state);
        let model = AppModel::new(Catalog::from_albums(albums));
        (AppController::new(model, Box::new(transport)), state)
    }

    fn queue(controller: &mut AppController, names: &[&str]) {
        let playlist = controller.model.playlist.get_or_insert_with(Playlist::new);
        for name in names {
            playlist.add(track(name));
        }
    }

    fn finish_current(state: &Rc<RefCell<ScriptedState>>) {
        let mut s = state.borrow_mut();
        s.playing = false;
        s.paused = false;
    }

    #[test]
    fn playlist_run_skips_the_track_displaced_by_the_consume() {
        let (mut controller, state) = controller_with(vec![]);
        queue(&mut controller, &["a", "b", "c"]);

        controller.model.playback.playlist_playing = true;
        controller.play_playlist();
        assert_eq!(controller.model.status, "Playing Playlist");
        assert_eq!(
            state.borrow().loads,
            vec![PathBuf::from("sounds/a.mp3")]
        );

        // "a" finishes: cursor moves to 1, "b" plays, then the consume at the
        // cursor removes "b" leaving ["a", "c"].
        finish_current(&state);
        controller.tick();
        assert_eq!(
            state.borrow().loads,
            vec![PathBuf::from("sounds/a.mp3"), PathBuf::from("sounds/b.mp3")]
        );
        let names: Vec<_> = controller.model.playlist.as_ref().unwrap().tracks
            .iter()
            .map(|t| t.name.clone())
            .collect();
        assert_eq!(names, ["a", "c"]);

        // "b" finishes: cursor 2 is out of bounds for ["a", "c"], so the run
        // ends without "c" ever playing.
        finish_current(&state);
        controller.tick();
        assert_eq!(controller.model.status, "Finished");
        assert!(controller.model.playlist.as_ref().unwrap().is_empty());
        assert!(controller.model.playback.loaded.is_none());
        assert!(!controller.model.playback.playlist_playing);
        assert_eq!(state.borrow().loads.len(), 2);
    }

    #[test]
    fn single_track_playlist_finishes_after_one_play() {
        let (mut controller, state) = controller_with(vec![]);
        queue(&mut controller, &["only"]);

        controller.model.playback.playlist_playing = true;
        controller.play_playlist();
        finish_current(&state);
        controller.tick();

        assert_eq!(controller.model.status, "Finished");
        assert!(controller.model.playlist.as_ref().unwrap().is_empty());
        assert_eq!(state.borrow().loads.len(), 1);
    }

    #[test]
    fn direct_track_completion_only_clears_the_loaded_track() {
        let (mut controller, state) = controller_with(vec![]);
        queue(&mut controller, &["a", "b"]);

        controller.play_track(track("solo"));
        controller.model.status = "Playing".to_string();
        finish_current(&state);
        controller.tick();

        assert!(controller.model.playback.loaded.is_none());
        assert_eq!(controller.model.playlist.as_ref().unwrap().len(), 2);
        assert_eq!(state.borrow().loads.len(), 1);
    }

    #[test]
    fn tick_does_nothing_while_paused() {
        let (mut controller, state) = controller_with(vec![]);
        controller.play_track(track("a"));
        {
            let mut s = state.borrow_mut();
            s.playing = false;
            s.paused = true;
        }
        controller.tick();
        assert!(controller.model.playback.loaded.is_some());
    }

    #[test]
    fn toggle_swaps_between_paused_and_playing_status() {
        let (mut controller, _state) = controller_with(vec![]);
        controller.play_track(track("a"));
        controller.toggle_transport();
        assert_eq!(controller.model.status, "Paused");
        controller.toggle_transport();
        assert_eq!(controller.model.status, "Playing");
    }

    #[test]
    fn stop_clears_the_loaded_track() {
        let (mut controller, state) = controller_with(vec![]);
        controller.play_track(track("a"));
        controller.stop_transport();
        assert_eq!(controller.model.status, "Stopped");
        assert!(controller.model.playback.loaded.is_none());
        assert!(!state.borrow().playing);
    }

    #[test]
    fn shuffle_and_clear_never_create_a_playlist() {
        let (mut controller, _state) = controller_with(vec![]);
        controller.shuffle_playlist();
        assert_eq!(controller.model.status, "Shuffled!");
        controller.clear_playlist();
        assert_eq!(controller.model.status, "Cleared!");
        // The status still changes, but no playlist comes into existence.
        assert!(controller.model.playlist.is_none());
    }

    #[test]
    fn hover_only_applies_to_the_albums_grid() {
        use crate::model::HitRegions;
        use ratatui::layout::Rect;

        let (mut controller, _state) = controller_with(vec![album(0, Genre::Pop, &[])]);
        controller.model.regions = HitRegions {
            grid_cells: vec![(0, Rect::new(0, 5, 10, 5))],
            ..Default::default()
        };
        controller.model.cursor = Some((2, 6));

        controller.tick();
        assert_eq!(controller.model.nav.hovered_album, Some(0));

        controller.model.nav.active_tab = ActiveTab::Genres;
        controller.tick();
        assert_eq!(controller.model.nav.hovered_album, None);

        controller.model.nav.active_tab = ActiveTab::Albums;
        controller.model.nav.album_view = Some(0);
        controller.tick();
        assert_eq!(controller.model.nav.hovered_album, None);
    }

    #[test]
    fn clear_empties_an_existing_playlist() {
        let (mut controller, _state) = controller_with(vec![]);
        queue(&mut controller, &["a"]);
        controller.clear_playlist();
        assert_eq!(controller.model.status, "Cleared!");
        assert!(controller.model.playlist.as_ref().unwrap().is_empty());
    }
}
