//! Application state aggregate and its submodules.

pub mod context_menu;
pub mod nav;
pub mod pager;
pub mod playlist;
pub mod types;

pub use context_menu::{ContextMenu, MenuOption};
pub use nav::NavState;
pub use playlist::{PLAYLIST_TITLE, Playlist};
pub use types::{ActiveTab, HitRegions, PlaybackState};

use crate::catalog::Catalog;

/// Everything the view reads and the controller mutates. Owned by the
/// controller; the view gets a shared borrow per frame.
pub struct AppModel {
    pub catalog: Catalog,
    pub nav: NavState,
    /// Absent until the first track is added.
    pub playlist: Option<Playlist>,
    pub menu: ContextMenu,
    pub playback: PlaybackState,
    pub status: String,
    /// Last known mouse position, for hover.
    pub cursor: Option<(u16, u16)>,
    /// Click regions recorded by the most recent draw.
    pub regions: HitRegions,
    pub should_quit: bool,
}

impl AppModel {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            nav: NavState::default(),
            playlist: None,
            menu: ContextMenu::default(),
            playback: PlaybackState::default(),
            status: "Ready".to_string(),
            cursor: None,
            regions: HitRegions::default(),
            should_quit: false,
        }
    }
}
