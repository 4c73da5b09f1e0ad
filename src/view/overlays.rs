//! Overlay rendering (context menu)

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Clear, Paragraph},
};

use crate::model::context_menu::{ContextMenu, MENU_WIDTH, MenuOption};

/// Draws the menu anchored where it was opened, one row per option. Hit
/// resolution lives on [`ContextMenu`] and works off the same anchor, so
/// clipping at the frame edge only affects what is visible.
pub fn render_context_menu(frame: &mut Frame, menu: &ContextMenu) {
    let (x, y) = menu.anchor();
    let desired = Rect {
        x,
        y,
        width: MENU_WIDTH,
        height: MenuOption::ALL.len() as u16,
    };
    let popup_area = desired.intersection(frame.area());
    if popup_area.width == 0 || popup_area.height == 0 {
        return;
    }

    frame.render_widget(Clear, popup_area);

    for (index, option) in MenuOption::ALL.iter().enumerate() {
        let row = Rect {
            x: popup_area.x,
            y: popup_area.y + index as u16,
            width: popup_area.width,
            height: 1,
        };
        if row.y >= popup_area.y + popup_area.height {
            break;
        }
        let style = match option {
            MenuOption::Delete => Style::default().fg(Color::Red).bg(Color::Black),
            _ => Style::default().fg(Color::White).bg(Color::Black),
        };
        let widget = Paragraph::new(format!(" {}", option.label())).style(style);
        frame.render_widget(widget, row);
    }
}
