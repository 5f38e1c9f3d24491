use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::Studio;
use crate::kernel::Selection;
use crate::ui::core::geom::Rect as HitRect;
use crate::ui::core::id::Id;
use crate::ui::core::tree::{Node, NodeKind, Sense};

mod board;
mod dialogs;
mod overlay;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

pub(super) fn render(studio: &mut Studio, frame: &mut Frame, area: Rect) {
    studio.ui_tree.clear();
    studio.last_render_area = Some(area);

    if area.width < 12 || area.height <= HEADER_HEIGHT + STATUS_HEIGHT {
        return;
    }

    let header_area = Rect::new(area.x, area.y, area.width, HEADER_HEIGHT);
    let status_area = Rect::new(
        area.x,
        area.y + area.height - STATUS_HEIGHT,
        area.width,
        STATUS_HEIGHT,
    );
    let board_area = Rect::new(
        area.x,
        area.y + HEADER_HEIGHT,
        area.width,
        area.height - HEADER_HEIGHT - STATUS_HEIGHT,
    );

    render_header(studio, frame, header_area);
    board::render_board(studio, frame, board_area);
    render_status(studio, frame, status_area);

    overlay::render_toasts(studio, frame, area);
    overlay::render_drag_overlay(studio, frame, area);
    dialogs::render_input_dialog(studio, frame, area);
    dialogs::render_confirm_dialog(studio, frame, area);
}

fn render_header(studio: &mut Studio, frame: &mut Frame, area: Rect) {
    let title = " Screenflow ";
    let button = "[+ Add Screen]";

    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(studio.theme.header_fg)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);

    let button_w = button.width() as u16;
    if area.width > button_w + 1 {
        let button_area = Rect::new(area.right() - button_w - 1, area.y, button_w, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                button,
                Style::default().fg(studio.theme.accent_fg),
            )),
            button_area,
        );
        push_node(
            studio,
            NodeKind::AddScreenButton,
            button_area,
            Sense::HOVER | Sense::CLICK,
        );
    }
}

fn render_status(studio: &Studio, frame: &mut Frame, area: Rect) {
    let state = studio.store.state();
    let muted = Style::default().fg(studio.theme.status_fg);

    let selected = match state.ui.selection {
        Some(Selection::Screen(id)) => state
            .board
            .screen(id)
            .map(|s| format!(" · {}", s.title))
            .unwrap_or_default(),
        Some(Selection::SubScreen { sub, .. }) => state
            .board
            .find_sub_screen(sub)
            .map(|(_, _, s)| format!(" · {}", s.title))
            .unwrap_or_default(),
        None => String::new(),
    };
    let left = format!(
        " {} screens · {} sub-screens{}",
        state.board.screens().len(),
        state.board.sub_screen_count(),
        selected,
    );
    frame.render_widget(Paragraph::new(Span::styled(left.clone(), muted)), area);

    let hints = "a add · s sub · r rename · e desc · p promote · x delete · q quit ";
    let hints_w = hints.width() as u16;
    let left_w = left.width() as u16;
    if area.width > hints_w && area.width - hints_w > left_w {
        let hint_area = Rect::new(area.right() - hints_w, area.y, hints_w, 1);
        frame.render_widget(Paragraph::new(Span::styled(hints, muted)), hint_area);
    }
}

pub(super) fn cursor_position(studio: &Studio) -> Option<(u16, u16)> {
    dialogs::input_dialog_cursor(studio)
}

pub(super) fn hit_rect(rect: Rect) -> HitRect {
    HitRect::new(rect.x, rect.y, rect.width, rect.height)
}

pub(super) fn push_node(studio: &mut Studio, kind: NodeKind, rect: Rect, sense: Sense) {
    studio.ui_tree.push(Node {
        id: node_id(kind),
        rect: hit_rect(rect),
        sense,
        kind,
    });
}

/// Stable per-entity node ids; position changes between frames must not
/// change a node's identity or hover/drag tracking would reset.
pub(super) fn node_id(kind: NodeKind) -> Id {
    match kind {
        NodeKind::ScreenList => Id::of("board", &[]),
        NodeKind::ScreenCard { screen_id, .. } => Id::of("screen_card", &[screen_id.0]),
        NodeKind::SubScreenList { screen_id } => Id::of("sub_list", &[screen_id.0]),
        NodeKind::SubScreenRow {
            screen_id, sub_id, ..
        } => Id::of("sub_row", &[screen_id.0, sub_id.0]),
        NodeKind::AddScreenButton => Id::of("add_screen", &[]),
        NodeKind::AddSubScreenButton { screen_id } => Id::of("add_sub", &[screen_id.0]),
        NodeKind::DeleteScreenButton { screen_id } => Id::of("del_screen", &[screen_id.0]),
        NodeKind::DeleteSubScreenButton { screen_id, sub_id } => {
            Id::of("del_sub", &[screen_id.0, sub_id.0])
        }
    }
}
