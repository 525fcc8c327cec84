//! 标签栏布局：绘制和鼠标命中测试共用

use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const PADDING_LEFT: u16 = 1;
const PADDING_RIGHT: u16 = 1;
const DIRTY_WIDTH: u16 = 2;
const DIVIDER_WIDTH: u16 = 1;

pub const DIRTY_MARKER: &str = "●";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    pub title: String,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabRowSlot {
    pub index: usize,
    pub start: u16,
    pub end: u16,
    pub dirty_x: Option<u16>,
    pub title_x: u16,
    pub title_width: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabRowLayout {
    pub slots: Vec<TabRowSlot>,
}

impl TabRowLayout {
    pub fn hit_test(&self, column: u16) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| column >= slot.start && column < slot.end)
            .map(|slot| slot.index)
    }
}

pub fn compute_tab_row_layout(area: Rect, tabs: &[TabLabel]) -> TabRowLayout {
    if area.width == 0 || area.height == 0 || tabs.is_empty() {
        return TabRowLayout::default();
    }

    let preferred: Vec<usize> = tabs
        .iter()
        .map(|tab| UnicodeWidthStr::width(tab.title.as_str()))
        .collect();
    let budget = (area.width as usize).saturating_sub(fixed_width(tabs));
    let title_widths = allocate_title_widths(&preferred, budget);

    let right = area.right();
    let mut x = area.x;
    let mut slots = Vec::with_capacity(tabs.len());

    for (index, tab) in tabs.iter().enumerate() {
        if x >= right {
            break;
        }

        let start = x;
        x = x.saturating_add(PADDING_LEFT).min(right);

        let dirty_x = if tab.dirty && x < right {
            let pos = x;
            x = x.saturating_add(DIRTY_WIDTH).min(right);
            Some(pos)
        } else {
            None
        };

        let title_x = x;
        let wanted = title_widths[index].min(u16::MAX as usize) as u16;
        let title_width = wanted.min(right.saturating_sub(title_x));
        x = x.saturating_add(title_width).min(right);
        x = x.saturating_add(PADDING_RIGHT).min(right);

        slots.push(TabRowSlot {
            index,
            start,
            end: x,
            dirty_x,
            title_x,
            title_width,
        });

        if index + 1 < tabs.len() {
            x = x.saturating_add(DIVIDER_WIDTH).min(right);
        }
    }

    TabRowLayout { slots }
}

/// Shortens `title` to `max_width` columns, ending in `…` when cut.
pub fn ellipsize_title(title: &str, max_width: u16) -> String {
    let max_width = max_width as usize;
    if max_width == 0 {
        return String::new();
    }
    if UnicodeWidthStr::width(title) <= max_width {
        return title.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in title.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > max_width - 1 {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

fn fixed_width(tabs: &[TabLabel]) -> usize {
    let dividers = tabs.len().saturating_sub(1) * DIVIDER_WIDTH as usize;
    tabs.iter().fold(dividers, |total, tab| {
        let dirty = if tab.dirty { DIRTY_WIDTH as usize } else { 0 };
        total + (PADDING_LEFT + PADDING_RIGHT) as usize + dirty
    })
}

/// 先给每个标签分一列，再轮流分配剩余列，直到标题放得下或列数用完
fn allocate_title_widths(preferred: &[usize], budget: usize) -> Vec<usize> {
    let mut widths = vec![0; preferred.len()];
    let mut remaining = budget;

    for width in &mut widths {
        if remaining == 0 {
            return widths;
        }
        *width = 1;
        remaining -= 1;
    }

    let mut needs: Vec<usize> = preferred.iter().map(|p| p.saturating_sub(1)).collect();
    while remaining > 0 {
        let mut progressed = false;
        for (width, need) in widths.iter_mut().zip(needs.iter_mut()) {
            if *need == 0 || remaining == 0 {
                continue;
            }
            *width += 1;
            *need -= 1;
            remaining -= 1;
            progressed = true;
        }
        if !progressed {
            break;
        }
    }

    widths
}

#[cfg(test)]
#[path = "../../../tests/unit/app/tab_row.rs"]
mod tests;
