use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::Studio;
use crate::ui::core::geom::Rect as HitRect;
use crate::ui::core::input::DragPayload;
use crate::ui::core::tree::NodeKind;

fn frame_rect(rect: HitRect) -> Rect {
    Rect::new(rect.x, rect.y, rect.w, rect.h)
}

pub(super) fn render_toasts(studio: &Studio, frame: &mut Frame, area: Rect) {
    if studio.toasts.is_empty() {
        return;
    }

    let width = 36.min(area.width.saturating_sub(2));
    if width < 16 {
        return;
    }
    let x = area.right() - width - 1;
    let style = Style::default()
        .bg(studio.theme.toast_bg)
        .fg(studio.theme.toast_fg);

    // Newest toast sits closest to the status bar, older ones stack upwards.
    let mut bottom = area.bottom().saturating_sub(1);
    for toast in studio.toasts.iter().rev() {
        let h = 2;
        if bottom < area.y + h {
            break;
        }
        let rect = Rect::new(x, bottom - h, width, h);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!(" {}", toast.title),
                    style.add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(format!(" {}", toast.detail), style)),
            ])
            .style(style),
            rect,
        );
        bottom = rect.y.saturating_sub(1);
    }
}

pub(super) fn render_drag_overlay(studio: &Studio, frame: &mut Frame, area: Rect) {
    let Some(payload) = studio.ui_runtime.drag_payload() else {
        return;
    };

    // Tint the resolved drop target. The board-wide container gets its
    // promote frame from the board renderer instead, so skip it here.
    if let Some(over) = studio.ui_runtime.drag_over() {
        if let Some(node) = studio.ui_tree.node(over) {
            match node.kind {
                NodeKind::ScreenCard { .. }
                | NodeKind::SubScreenList { .. }
                | NodeKind::SubScreenRow { .. } => {
                    frame.buffer_mut().set_style(
                        frame_rect(node.rect),
                        Style::default()
                            .bg(studio.theme.selected_bg)
                            .fg(studio.theme.selected_fg),
                    );
                }
                _ => {}
            }
        }
    }

    // Ghost label following the pointer.
    let board = &studio.store.state().board;
    let label = match *payload {
        DragPayload::Screen { screen_id, .. } => {
            board.screen(screen_id).map(|s| s.title.to_string())
        }
        DragPayload::SubScreen { sub_id, .. } => board
            .find_sub_screen(sub_id)
            .map(|(_, _, sub)| sub.title.to_string()),
    };
    let (Some(label), Some(pos)) = (label, studio.ui_runtime.last_pos()) else {
        return;
    };

    let text = format!(" {label} ");
    let w = (text.width() as u16).saturating_add(2).min(area.width);
    let h = 3u16;
    if w < 4 || area.height < h {
        return;
    }

    let mut x = pos.x.saturating_add(1);
    let mut y = pos.y.saturating_add(1);
    if x.saturating_add(w) > area.right() {
        x = area.right().saturating_sub(w);
    }
    if y.saturating_add(h) > area.bottom() {
        y = area.bottom().saturating_sub(h);
    }
    x = x.max(area.x);
    y = y.max(area.y);

    let ghost = Rect::new(x, y, w, h);
    let style = Style::default()
        .bg(studio.theme.selected_bg)
        .fg(studio.theme.selected_fg);
    frame.render_widget(Clear, ghost);
    frame.render_widget(
        Block::new()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(studio.theme.focus_border))
            .style(style),
        ghost,
    );
    let inner_y = ghost.y + 1;
    frame.render_widget(
        Paragraph::new(Span::styled(text, style.add_modifier(Modifier::BOLD))),
        Rect::new(ghost.x + 1, inner_y, ghost.width.saturating_sub(2), 1),
    );
}
