//! Placement helpers for floating popups

use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area of `width` x `height` resting on top of `anchor`, indented by
/// `x_offset`
///
/// Shrinks to whatever room exists above the anchor and to the right of the
/// indent, so the popup never spills off screen.
pub fn above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let x_offset = x_offset.min(anchor.width);
    let width = width.min(anchor.width - x_offset);
    let height = height.min(anchor.y);

    Rect {
        x: anchor.x + x_offset,
        y: anchor.y - height,
        width,
        height,
    }
}

/// Blank out whatever was drawn underneath a popup
pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
