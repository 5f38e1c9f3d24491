use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::Studio;

fn dialog_area(area: Rect, height: u16) -> Option<Rect> {
    let width = 50.min(area.width.saturating_sub(4));
    if width < 20 || area.height < height + 2 {
        return None;
    }
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Some(Rect::new(x, y, width, height))
}

pub(super) fn render_input_dialog(studio: &Studio, frame: &mut Frame, area: Rect) {
    let dialog = &studio.store.state().ui.input_dialog;
    if !dialog.visible {
        return;
    }
    let Some(dialog_rect) = dialog_area(area, 5) else {
        return;
    };

    let base = Style::default()
        .bg(studio.theme.dialog_bg)
        .fg(studio.theme.dialog_fg);
    frame.render_widget(Clear, dialog_rect);
    frame.render_widget(Block::new().style(base), dialog_rect);

    let inner = dialog_rect.inner(Margin::new(1, 1));
    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let title = Line::from(Span::styled(
        dialog.title.clone(),
        Style::default()
            .fg(studio.theme.header_fg)
            .add_modifier(Modifier::BOLD),
    ));
    let value = Line::from(Span::raw(dialog.value.as_str()));
    let hint = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(studio.theme.accent_fg)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(studio.theme.muted_fg)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(vec![title, value, hint]).style(base), inner);
}

/// Terminal cursor position inside the open input dialog, if any.
pub(super) fn input_dialog_cursor(studio: &Studio) -> Option<(u16, u16)> {
    let dialog = &studio.store.state().ui.input_dialog;
    if !dialog.visible {
        return None;
    }
    let area = studio.last_render_area?;
    let dialog_rect = dialog_area(area, 5)?;
    let inner = dialog_rect.inner(Margin::new(1, 1));
    if inner.height < 3 {
        return None;
    }

    let prefix_w = dialog.value[..dialog.cursor.min(dialog.value.len())].width() as u16;
    let x = (inner.x + prefix_w).min(inner.right().saturating_sub(1));
    Some((x, inner.y + 1))
}

pub(super) fn render_confirm_dialog(studio: &Studio, frame: &mut Frame, area: Rect) {
    let dialog = &studio.store.state().ui.confirm_dialog;
    if !dialog.visible {
        return;
    }
    let Some(dialog_rect) = dialog_area(area, 6) else {
        return;
    };

    let base = Style::default()
        .bg(studio.theme.dialog_bg)
        .fg(studio.theme.dialog_fg);
    frame.render_widget(Clear, dialog_rect);
    frame.render_widget(Block::new().style(base), dialog_rect);

    let inner = dialog_rect.inner(Margin::new(1, 1));
    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let title = Line::from(Span::styled(
        "Confirm",
        Style::default()
            .fg(studio.theme.header_fg)
            .add_modifier(Modifier::BOLD),
    ));
    let message = Line::from(dialog.message.as_str());
    let hint = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(studio.theme.danger_fg)),
        Span::raw(" Delete  "),
        Span::styled("[Esc]", Style::default().fg(studio.theme.muted_fg)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(vec![title, message, Line::raw(""), hint])
            .style(base)
            .wrap(Wrap { trim: true }),
        inner,
    );
}
