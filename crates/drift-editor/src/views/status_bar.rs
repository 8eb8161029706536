//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message          context │ keys title`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 2 {
            return;
        }

        for x in area.x..area.right() {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        // Right side first, the message gets what is left
        let mut right = area.right().saturating_sub(1);
        for (keys, title) in vm.hints.iter().rev() {
            let title = format!(" {}", title);
            let needed = (keys.chars().count() + title.chars().count() + 2) as u16;
            if right < area.x + needed + 20 {
                break;
            }
            right -= title.chars().count() as u16;
            buf.set_string(right, area.y, &title, vm.hint_style);
            right -= keys.chars().count() as u16;
            buf.set_string(right, area.y, keys, vm.hint_key_style);
            right -= 2;
        }

        let context = format!("{} │", vm.context);
        let context_width = context.chars().count() as u16;
        if right >= area.x + context_width + 20 {
            right -= context_width;
            buf.set_string(right, area.y, &context, vm.metadata_style);
            right -= 1;
        }

        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts_str, vm.metadata_style);
            x += ts_str.len() as u16;
        }

        // Emoji typically renders as 2 cells
        buf.set_string(x, area.y, vm.emoji, vm.message_style);
        x += 3;

        let available = right.saturating_sub(x) as usize;
        if vm.message.chars().count() > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }
    }
}
