//! Controller: owns the model and the transport, applies input and the
//! per-frame tick.

pub mod input;
pub mod playback;

use crate::audio::Transport;
use crate::catalog::Track;
use crate::model::{AppModel, MenuOption, Playlist};
use crate::platform;

pub struct AppController {
    pub model: AppModel,
    transport: Box<dyn Transport>,
}

impl AppController {
    pub fn new(model: AppModel, transport: Box<dyn Transport>) -> Self {
        Self { model, transport }
    }

    /// Whether the transport is paused, for the toggle button label.
    pub fn transport_paused(&self) -> bool {
        self.transport.is_paused()
    }

    /// Runs a context-menu option against the album it was opened on.
    pub fn handle_menu_option(&mut self, option: MenuOption, album_id: usize) {
        match option {
            MenuOption::AddAllToPlaylist => {
                let tracks: Vec<Track> = self
                    .model
                    .catalog
                    .album(album_id)
                    .map(|album| album.tracks.clone())
                    .unwrap_or_default();
                for track in tracks {
                    self.add_to_playlist(track);
                }
            }
            MenuOption::Reveal => {
                let title = self
                    .model
                    .catalog
                    .album(album_id)
                    .map(|album| album.title.clone());
                if let Some(title) = title {
                    if let Err(err) = platform::reveal_album_folder(&title) {
                        tracing::warn!(%err, album = album_id, "Failed to reveal album folder");
                    }
                }
            }
            MenuOption::Delete => {
                if self.model.catalog.remove(album_id) {
                    tracing::info!(album = album_id, "Album deleted");
                    self.model.status = "Deleted".to_string();
                }
            }
        }
    }

    pub fn add_to_playlist(&mut self, track: Track) {
        tracing::info!(name = %track.name, "Track added to playlist");
        self.model
            .playlist
            .get_or_insert_with(Playlist::new)
            .add(track);
        self.model.status = "Added to Playlist".to_string();
    }
}
