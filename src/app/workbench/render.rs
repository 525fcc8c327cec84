use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::tab_row::{compute_tab_row_layout, ellipsize_title, TabLabel, DIRTY_MARKER};
use super::{Workbench, STATUS_HEIGHT, TAB_ROW_HEIGHT};
use crate::kernel::{Action, Buffer, FocusTarget, NotificationKind};
use crate::models::grapheme_display_width;

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;
const ERROR: Color = Color::Red;
const INFO: Color = Color::Green;
const PANEL_BG: Color = Color::Black;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct WorkbenchLayout {
    pub tab_row: Rect,
    pub gutter: Rect,
    pub text: Rect,
    pub status: Rect,
}

impl Workbench {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = self.layout(area);
        self.sync_text_area(layout.text);

        self.render_tab_row(frame, layout.tab_row);
        self.render_gutter(frame, layout.gutter);
        self.render_text(frame, layout.text);
        self.render_status(frame, layout.status);

        match self.focus() {
            FocusTarget::Editor => self.place_editor_cursor(frame, layout.text),
            FocusTarget::InputDialog => self.render_input_dialog(frame, area),
            FocusTarget::ConfirmDialog => self.render_confirm_dialog(frame, area),
        }
    }

    pub(super) fn layout(&self, area: Rect) -> WorkbenchLayout {
        let tab_height = TAB_ROW_HEIGHT.min(area.height);
        let status_height = STATUS_HEIGHT.min(area.height.saturating_sub(tab_height));
        let body_height = area.height.saturating_sub(tab_height + status_height);

        let state = self.store.state();
        let gutter_width = if state.editor_config.show_line_numbers {
            gutter_width(state.session.current().text().len_lines()).min(area.width)
        } else {
            0
        };

        let body_y = area.y + tab_height;
        WorkbenchLayout {
            tab_row: Rect::new(area.x, area.y, area.width, tab_height),
            gutter: Rect::new(area.x, body_y, gutter_width, body_height),
            text: Rect::new(
                area.x + gutter_width,
                body_y,
                area.width - gutter_width,
                body_height,
            ),
            status: Rect::new(area.x, body_y + body_height, area.width, status_height),
        }
    }

    fn sync_text_area(&mut self, text: Rect) {
        let current = self.store.state().ui.text_area;
        if current.width != text.width || current.height != text.height {
            self.dispatch_kernel(Action::SetTextAreaSize {
                width: text.width,
                height: text.height,
            });
        }
    }

    fn render_tab_row(&mut self, frame: &mut Frame, area: Rect) {
        let session = &self.store.state().session;
        let labels: Vec<TabLabel> = session
            .buffers()
            .iter()
            .map(|buffer| TabLabel {
                title: buffer.title(),
                dirty: buffer.shows_unsaved(),
            })
            .collect();
        let layout = compute_tab_row_layout(area, &labels);
        let active = session.current_index();

        let buf = frame.buffer_mut();
        for slot in &layout.slots {
            let style = if slot.index == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            let slot_area = Rect::new(slot.start, area.y, slot.end - slot.start, 1);
            buf.set_style(slot_area, style);
            if let Some(x) = slot.dirty_x {
                buf.set_string(x, area.y, DIRTY_MARKER, style);
            }
            let title = ellipsize_title(&labels[slot.index].title, slot.title_width);
            buf.set_string(slot.title_x, area.y, title, style);
            if slot.index + 1 < labels.len() && slot.end < area.right() {
                buf.set_string(slot.end, area.y, "│", Style::default().fg(MUTED));
            }
        }

        self.last_tab_row_area = Some(area);
        self.last_tab_layout = layout;
    }

    fn render_gutter(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let buffer = self.store.state().session.current();
        let top = buffer.viewport().top_row;
        let total = buffer.text().len_lines();
        let digits = area.width.saturating_sub(1) as usize;

        let lines: Vec<Line> = (top..total)
            .take(area.height as usize)
            .map(|row| {
                Line::from(Span::styled(
                    format!("{:>digits$} ", row + 1),
                    Style::default().fg(MUTED),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_text(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let state = self.store.state();
        let tab_size = state.editor_config.tab_size as usize;
        let buffer = state.session.current();
        let viewport = buffer.viewport();
        let text = buffer.text();

        let lines: Vec<Line> = (viewport.top_row..text.len_lines())
            .take(area.height as usize)
            .map(|row| {
                let content = text.line_content(row).unwrap_or_default();
                Line::raw(visible_columns(
                    &content,
                    viewport.left_col,
                    area.width as usize,
                    tab_size,
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        let state = self.store.state();

        let line = match &state.ui.notification {
            Some(notification) => {
                let color = match notification.kind {
                    NotificationKind::Info => INFO,
                    NotificationKind::Error => ERROR,
                };
                Line::from(Span::styled(
                    notification.message.as_str(),
                    Style::default().fg(color),
                ))
            }
            None => Line::raw(status_text(state.session.current(), state.session.len())),
        };
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(PANEL_BG)), area);
    }

    fn place_editor_cursor(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let buffer = state.session.current();
        let viewport = buffer.viewport();
        let row = buffer.text().cursor().0;
        let col = buffer
            .text()
            .cursor_display_col(state.editor_config.tab_size as usize);

        let (Some(dy), Some(dx)) = (
            row.checked_sub(viewport.top_row),
            col.checked_sub(viewport.left_col),
        ) else {
            return;
        };
        if dy < area.height as usize && dx < area.width as usize {
            frame.set_cursor_position((area.x + dx as u16, area.y + dy as u16));
        }
    }

    fn render_input_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.input_dialog;
        let popup = centered_rect(60, 4, area);
        if popup.width < 10 || popup.height < 4 {
            return;
        }

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(dialog.title.as_str())
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let before_cursor = UnicodeWidthStr::width(&dialog.value[..dialog.cursor]);
        let width = inner.width as usize;
        let scroll = (before_cursor + 1).saturating_sub(width);
        let value = visible_columns(&dialog.value, scroll, width, 1);

        let footer = match &dialog.error {
            Some(error) => Span::styled(error.as_str(), Style::default().fg(ERROR)),
            None => Span::styled("Enter: accept  Esc: cancel", Style::default().fg(MUTED)),
        };
        frame.render_widget(
            Paragraph::new(vec![Line::raw(value), Line::from(footer)]),
            inner,
        );

        let cursor_x = inner.x + (before_cursor - scroll).min(width.saturating_sub(1)) as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn render_confirm_dialog(&self, frame: &mut Frame, area: Rect) {
        let dialog = &self.store.state().ui.confirm_dialog;
        let popup = centered_rect(60, 5, area);
        if popup.width < 20 || popup.height < 4 {
            return;
        }

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(Span::styled(
                "Confirm",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let hint = Line::from(vec![
            Span::styled("[y]", Style::default().fg(ACCENT)),
            Span::raw(" Yes  "),
            Span::styled("[n]", Style::default().fg(MUTED)),
            Span::raw(" No"),
        ]);
        let content = Paragraph::new(vec![Line::raw(dialog.message.as_str()), hint])
            .wrap(Wrap { trim: true });
        frame.render_widget(content, inner);
    }
}

fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).to_string().len().max(3);
    digits as u16 + 1
}

fn status_text(buffer: &Buffer, tab_count: usize) -> String {
    let (row, col) = buffer.text().cursor();
    let dirty = if buffer.shows_unsaved() { " [+]" } else { "" };
    format!(
        "{}{} | Ln {}, Col {} | {} tab(s)",
        buffer.title(),
        dirty,
        row + 1,
        col + 1,
        tab_count
    )
}

/// `line` 在显示列 `skip..skip + width` 之间的部分
///
/// 制表符展开为空格并对齐到制表位，其他控制字符丢弃；被边缘截断的宽字素不显示
fn visible_columns(line: &str, skip: usize, width: usize, tab_size: usize) -> String {
    let end = skip + width;
    let mut out = String::new();
    let mut col = 0;
    for grapheme in line.graphemes(true) {
        let start = col;
        col += grapheme_display_width(grapheme, start, tab_size);
        if grapheme == "\t" {
            let visible = col.min(end).saturating_sub(start.max(skip));
            out.push_str(&" ".repeat(visible));
            if col >= end {
                break;
            }
            continue;
        }
        if start < skip || grapheme.chars().any(char::is_control) {
            continue;
        }
        if col > end {
            break;
        }
        out.push_str(grapheme);
    }
    out
}

fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (area.width as u32 * width_percent as u32 / 100) as u16;
    let width = width.max(30.min(area.width)).min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
