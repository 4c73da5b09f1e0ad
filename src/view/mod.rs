//! View module - UI rendering
//!
//! All rendering goes through [`AppView::render`], which draws the active
//! view and returns the semantic click regions for this frame:
//!
//! - `layout`: status banner and the tab bar
//! - `content`: album grid, genre list, album detail, playlist view
//! - `overlays`: context-menu overlay

mod content;
mod layout;
mod overlays;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::model::{ActiveTab, AppModel, HitRegions};

pub struct AppView;

impl AppView {
    /// Draws the whole frame. `paused` is the transport snapshot for the
    /// toggle-button label. The returned regions replace last frame's.
    pub fn render(frame: &mut Frame, model: &AppModel, paused: bool) -> HitRegions {
        let mut regions = HitRegions::default();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status banner + transport
                Constraint::Min(0),    // Main content
                Constraint::Length(3), // Tab bar
            ])
            .split(frame.area());

        layout::render_status_banner(frame, chunks[0], model, paused, &mut regions);

        if let Some(album_id) = model.nav.album_view {
            content::render_album_detail(frame, chunks[1], model, album_id, &mut regions);
        } else {
            match model.nav.active_tab {
                ActiveTab::Albums => {
                    content::render_album_grid(frame, chunks[1], model, None, &mut regions);
                }
                ActiveTab::Genres => {
                    if model.nav.filtered_albums.is_empty() {
                        content::render_genre_list(frame, chunks[1], model, &mut regions);
                    } else {
                        content::render_album_grid(
                            frame,
                            chunks[1],
                            model,
                            model.nav.display_genre,
                            &mut regions,
                        );
                    }
                }
                ActiveTab::Playlist => {
                    content::render_playlist(frame, chunks[1], model, &mut regions);
                }
            }
        }

        layout::render_tab_bar(frame, chunks[2], model, &mut regions);

        if model.menu.is_visible() {
            overlays::render_context_menu(frame, &model.menu);
        }

        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Album, Catalog, Genre};
    use ratatui::{Terminal, backend::TestBackend};

    fn catalog(count: usize, genre: Genre) -> Catalog {
        let albums = (0..count)
            .map(|id| Album {
                id,
                artist: format!("artist {id}"),
                title: format!("album {id}"),
                year: "2021".into(),
                genre,
                image_path: String::new(),
                tracks: vec![],
            })
            .collect();
        Catalog::from_albums(albums)
    }

    fn draw(model: &AppModel) -> HitRegions {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        let mut regions = HitRegions::default();
        terminal
            .draw(|frame| {
                regions = AppView::render(frame, model, false);
            })
            .expect("draw");
        regions
    }

    #[test]
    fn albums_grid_records_cells_and_pagination() {
        let mut model = AppModel::new(catalog(10, Genre::Pop));
        model.nav.album_page = 0;

        let regions = draw(&model);
        assert_eq!(regions.grid_cells.len(), 8);
        assert!(regions.page_next.width > 0);
        assert_eq!(regions.page_prev.width, 0);
    }

    #[test]
    fn filtered_grid_shares_the_page_cursor_and_footer() {
        let mut model = AppModel::new(catalog(10, Genre::Pop));
        model.nav.active_tab = ActiveTab::Genres;
        model.nav.select_genre(&model.catalog, Genre::Pop);

        let regions = draw(&model);
        assert_eq!(regions.grid_cells.len(), 8);
        assert!(regions.page_next.width > 0);
        assert_eq!(regions.page_prev.width, 0);

        model.nav.album_page = 1;
        let regions = draw(&model);
        assert_eq!(regions.grid_cells.len(), 2);
        assert!(regions.page_prev.width > 0);
        assert_eq!(regions.page_next.width, 0);
    }
}
