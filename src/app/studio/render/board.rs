use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::super::Studio;
use super::{hit_rect, node_id};
use crate::kernel::Selection;
use crate::ui::core::tree::{Node, NodeKind, Sense};

/// Rows a card occupies beyond its sub-screen rows: two border rows, the
/// title row, the description row and the add-sub-screen row.
const CARD_CHROME_ROWS: usize = 5;
const CARD_GAP: u16 = 1;

pub(super) fn render_board(studio: &mut Studio, frame: &mut Frame, area: Rect) {
    if area.width < 8 || area.height < 3 {
        return;
    }

    super::push_node(
        studio,
        NodeKind::ScreenList,
        area,
        Sense::HOVER | Sense::DROP_TARGET,
    );

    // Promote highlight: frame the whole top-level container while a
    // sub-screen hovers over it.
    if studio.preview.promote_target {
        frame.render_widget(
            Block::new().borders(Borders::ALL).border_style(
                Style::default()
                    .fg(studio.theme.drop_target_fg)
                    .bg(studio.theme.drop_target_bg),
            ),
            area,
        );
    }
    let content = area.inner(Margin::new(1, 1));
    if content.width < 6 || content.height < 1 {
        return;
    }

    let state = studio.store.state();
    let theme = &studio.theme;
    let preview = studio.preview;
    let screens = state.board.screens();
    let mut nodes: Vec<Node> = Vec::new();

    if screens.is_empty() {
        let hint = "No screens yet - press 'a' or click [+ Add Screen]";
        let y = content.y + content.height / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(theme.muted_fg)))
                .alignment(ratatui::layout::Alignment::Center),
            Rect::new(content.x, y, content.width, 1),
        );
        return;
    }

    let first = state.ui.scroll.min(screens.len() - 1);
    let mut y = content.y;
    let mut shown = 0usize;

    for (ix, screen) in screens.iter().enumerate().skip(first) {
        let card_h = (screen.sub_screens.len() + CARD_CHROME_ROWS).min(u16::MAX as usize) as u16;
        if y.saturating_add(card_h) > content.bottom() {
            break;
        }
        let card = Rect::new(content.x, y, content.width, card_h);

        let selected_screen = state.ui.selection == Some(Selection::Screen(screen.id));
        let border_style = if selected_screen {
            Style::default().fg(theme.focus_border)
        } else {
            Style::default().fg(theme.border_fg)
        };
        frame.render_widget(
            Block::new().borders(Borders::ALL).border_style(border_style),
            card,
        );

        let inner = card.inner(Margin::new(1, 1));
        nodes.push(Node {
            id: node_id(NodeKind::ScreenCard {
                index: ix,
                screen_id: screen.id,
            }),
            rect: hit_rect(card),
            sense: Sense::HOVER | Sense::CLICK | Sense::DRAG_SOURCE | Sense::DROP_TARGET,
            kind: NodeKind::ScreenCard {
                index: ix,
                screen_id: screen.id,
            },
        });

        // Title row: handle, position, title; delete button on the right.
        let title_row = Rect::new(inner.x, inner.y, inner.width, 1);
        let title_style = if selected_screen {
            Style::default()
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("≡ ", Style::default().fg(theme.muted_fg)),
                Span::styled(format!("{} · {}", ix + 1, screen.title), title_style),
            ])),
            title_row,
        );
        if inner.width > 4 {
            let del = Rect::new(title_row.right() - 3, title_row.y, 3, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "[x]",
                    Style::default().fg(theme.danger_fg),
                )),
                del,
            );
            nodes.push(Node {
                id: node_id(NodeKind::DeleteScreenButton {
                    screen_id: screen.id,
                }),
                rect: hit_rect(del),
                sense: Sense::HOVER | Sense::CLICK,
                kind: NodeKind::DeleteScreenButton {
                    screen_id: screen.id,
                },
            });
        }

        // Description row.
        frame.render_widget(
            Paragraph::new(Span::styled(
                screen.description.as_str(),
                Style::default().fg(theme.muted_fg),
            )),
            Rect::new(inner.x, inner.y + 1, inner.width, 1),
        );

        // Sub-screen container: the rows plus the add-row, so an empty list
        // is still a valid drop target.
        let sub_region = Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            (screen.sub_screens.len() + 1) as u16,
        );
        nodes.push(Node {
            id: node_id(NodeKind::SubScreenList {
                screen_id: screen.id,
            }),
            rect: hit_rect(sub_region),
            sense: Sense::HOVER | Sense::DROP_TARGET,
            kind: NodeKind::SubScreenList {
                screen_id: screen.id,
            },
        });

        for (sub_ix, sub) in screen.sub_screens.iter().enumerate() {
            let row = Rect::new(inner.x, inner.y + 2 + sub_ix as u16, inner.width, 1);
            let selected_sub = state.ui.selection
                == Some(Selection::SubScreen {
                    screen: screen.id,
                    sub: sub.id,
                });
            let row_style = if selected_sub {
                Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
            } else {
                Style::default()
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("  ▪ ", Style::default().fg(theme.muted_fg)),
                    Span::raw(sub.title.as_str()),
                    Span::styled(
                        format!(" - {}", sub.description),
                        Style::default().fg(theme.muted_fg),
                    ),
                ]))
                .style(row_style),
                row,
            );

            let kind = NodeKind::SubScreenRow {
                screen_id: screen.id,
                index: sub_ix,
                sub_id: sub.id,
            };
            nodes.push(Node {
                id: node_id(kind),
                rect: hit_rect(row),
                sense: Sense::HOVER | Sense::CLICK | Sense::DRAG_SOURCE | Sense::DROP_TARGET,
                kind,
            });

            if inner.width > 4 {
                let del = Rect::new(row.right() - 3, row.y, 3, 1);
                frame.render_widget(
                    Paragraph::new(Span::styled(
                        "[x]",
                        Style::default().fg(theme.danger_fg),
                    )),
                    del,
                );
                let kind = NodeKind::DeleteSubScreenButton {
                    screen_id: screen.id,
                    sub_id: sub.id,
                };
                nodes.push(Node {
                    id: node_id(kind),
                    rect: hit_rect(del),
                    sense: Sense::HOVER | Sense::CLICK,
                    kind,
                });
            }
        }

        // Add-sub-screen row.
        let add_row = Rect::new(
            inner.x,
            inner.y + 2 + screen.sub_screens.len() as u16,
            inner.width,
            1,
        );
        let label = "  [+ Add Sub-screen]";
        frame.render_widget(
            Paragraph::new(Span::styled(
                label,
                Style::default().fg(theme.accent_fg),
            )),
            add_row,
        );
        let button = Rect::new(add_row.x, add_row.y, (label.width() as u16).min(add_row.width), 1);
        nodes.push(Node {
            id: node_id(NodeKind::AddSubScreenButton {
                screen_id: screen.id,
            }),
            rect: hit_rect(button),
            sense: Sense::HOVER | Sense::CLICK,
            kind: NodeKind::AddSubScreenButton {
                screen_id: screen.id,
            },
        });

        // Demote highlight: tint this card's sub-screen container while a
        // different screen hovers over it.
        if preview.demote_target == Some(screen.id) {
            frame.buffer_mut().set_style(
                sub_region,
                Style::default()
                    .bg(theme.drop_target_bg)
                    .fg(theme.drop_target_fg),
            );
        }

        y += card_h + CARD_GAP;
        shown += 1;
    }

    // Scroll indicators.
    let muted = Style::default().fg(studio.theme.muted_fg);
    if first > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("↑ {first} more"), muted)),
            Rect::new(content.x, area.y, content.width.min(12), 1),
        );
    }
    let remaining = screens.len() - first - shown;
    if remaining > 0 && content.width > 12 {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("↓ {remaining} more"), muted)),
            Rect::new(
                content.right().saturating_sub(10),
                area.bottom() - 1,
                10,
                1,
            ),
        );
    }

    for node in nodes {
        studio.ui_tree.push(node);
    }
}
