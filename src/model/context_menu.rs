//! Right-click context menu over album grid cells.

pub const MENU_WIDTH: u16 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOption {
    AddAllToPlaylist,
    Reveal,
    Delete,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [
        MenuOption::AddAllToPlaylist,
        MenuOption::Reveal,
        MenuOption::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::AddAllToPlaylist => "Add All Songs to Playlist",
            MenuOption::Reveal => "Reveal in Explorer",
            MenuOption::Delete => "Delete",
        }
    }
}

/// Overlay state machine: hidden, or visible at an anchor and bound to one
/// album. While visible the menu consumes the next click exclusively, so
/// every path out of it goes through [`ContextMenu::hide`].
#[derive(Debug, Default)]
pub struct ContextMenu {
    visible: bool,
    x: u16,
    y: u16,
    album: Option<usize>,
}

impl ContextMenu {
    pub fn show(&mut self, x: u16, y: u16, album_id: usize) {
        self.visible = true;
        self.x = x;
        self.y = y;
        self.album = Some(album_id);
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.album = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn anchor(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    pub fn bound_album(&self) -> Option<usize> {
        self.album
    }

    /// Resolves a click to a menu option. One row per option, anchored at the
    /// show position; `None` when hidden or outside the menu rectangle.
    pub fn hit_option(&self, col: u16, row: u16) -> Option<MenuOption> {
        if !self.visible || col < self.x || col >= self.x + MENU_WIDTH || row < self.y {
            return None;
        }
        let index = (row - self.y) as usize;
        MenuOption::ALL.get(index).copied()
    }
}
