//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标管理（行 + 字素列）
//! - 行列 ↔ 字符偏移映射

use ropey::{Rope, RopeSlice};
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// 字素从显示列 `col` 开始占用的终端列数
///
/// 制表符展开到下一个 `tab_size` 制表位；其他控制字符不占列
pub fn grapheme_display_width(grapheme: &str, col: usize, tab_size: usize) -> usize {
    if grapheme == "\t" {
        let tab = tab_size.max(1);
        return tab - col % tab;
    }
    if grapheme.chars().any(char::is_control) {
        return 0;
    }
    UnicodeWidthStr::width(grapheme)
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line)
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    /// (行, 字素列)
    cursor: (usize, usize),
    cached_char_pos: Option<usize>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            cached_char_pos: Some(0),
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            cached_char_pos: Some(0),
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// 与快照逐块比较，不分配
    pub fn eq_text(&self, other: &str) -> bool {
        self.rope == other
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// 设置光标，越界时夹到最近的合法位置
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        let row = row.min(self.len_lines().saturating_sub(1));
        let col = col.min(self.line_grapheme_len(row));
        self.cursor = (row, col);
        self.invalidate_char_pos_cache();
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_slice(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row))
        } else {
            None
        }
    }

    /// 不含换行符的行内容
    pub fn line_content(&self, row: usize) -> Option<String> {
        let slice = self.line_slice(row)?;
        let line = slice_to_cow(slice);
        Some(strip_line_ending(&line).to_string())
    }

    pub fn cursor_char_offset(&mut self) -> usize {
        if let Some(pos) = self.cached_char_pos {
            return pos;
        }
        let pos = self.pos_to_char(self.cursor);
        self.cached_char_pos = Some(pos);
        pos
    }

    pub fn pos_to_char(&self, pos: (usize, usize)) -> usize {
        self.rope.line_to_char(pos.0) + self.grapheme_to_char_index(pos.0, pos.1)
    }

    pub fn grapheme_to_char_index(&self, row: usize, grapheme_index: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        strip_line_ending(&line)
            .graphemes(true)
            .take(grapheme_index)
            .map(|g| g.chars().count())
            .sum()
    }

    pub fn line_grapheme_len(&self, row: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        strip_line_ending(&line).graphemes(true).count()
    }

    /// 光标左侧内容的显示宽度（终端列数），制表符按 `tab_size` 对齐
    pub fn cursor_display_col(&self, tab_size: usize) -> usize {
        let (row, col) = self.cursor;
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        strip_line_ending(&line)
            .graphemes(true)
            .take(col)
            .fold(0, |width, g| width + grapheme_display_width(g, width, tab_size))
    }

    fn line_ending_len(&self, row: usize) -> usize {
        let slice = self.rope.line(row);
        let line = slice_to_cow(slice);
        if line.ends_with("\r\n") {
            2
        } else if line.ends_with('\n') {
            1
        } else {
            0
        }
    }

    // ==================== 编辑 ====================

    pub fn insert_char(&mut self, c: char) {
        let (row, col) = self.cursor;
        let char_offset = self.cursor_char_offset();

        self.rope.insert_char(char_offset, c);

        self.cursor = if c == '\n' { (row + 1, 0) } else { (row, col + 1) };
        self.cached_char_pos = Some(char_offset + 1);
    }

    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let (row, col) = self.cursor;
        let char_offset = self.cursor_char_offset();

        self.rope.insert(char_offset, s);

        let newlines = s.matches('\n').count();
        self.cursor = match s.rfind('\n') {
            Some(last_newline) => {
                let tail = &s[last_newline + 1..];
                (row + newlines, tail.graphemes(true).count())
            }
            None => (row, col + s.graphemes(true).count()),
        };
        self.cached_char_pos = Some(char_offset + s.chars().count());
    }

    /// 向后删除（Backspace），缓冲区起点处返回 false
    pub fn delete_backward(&mut self) -> bool {
        let (row, col) = self.cursor;

        if col > 0 {
            let start = self.pos_to_char((row, col - 1));
            let end = self.pos_to_char((row, col));
            self.rope.remove(start..end);
            self.cursor = (row, col - 1);
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            let end = self.rope.line_to_char(row);
            let start = end - self.line_ending_len(row - 1);
            self.rope.remove(start..end);
            self.cursor = (row - 1, prev_len);
        } else {
            return false;
        }

        self.invalidate_char_pos_cache();
        true
    }

    /// 向前删除（Delete），缓冲区末尾返回 false
    pub fn delete_forward(&mut self) -> bool {
        let (row, col) = self.cursor;
        let line_len = self.line_grapheme_len(row);

        let (start, end) = if col < line_len {
            (self.pos_to_char((row, col)), self.pos_to_char((row, col + 1)))
        } else if row + 1 < self.len_lines() {
            let start = self.pos_to_char((row, col));
            (start, start + self.line_ending_len(row))
        } else {
            return false;
        };

        self.rope.remove(start..end);
        self.invalidate_char_pos_cache();
        true
    }

    // ==================== 光标移动 ====================

    pub fn move_left(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            self.set_cursor(row, col - 1);
        } else if row > 0 {
            let prev_len = self.line_grapheme_len(row - 1);
            self.set_cursor(row - 1, prev_len);
        }
    }

    pub fn move_right(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_grapheme_len(row) {
            self.set_cursor(row, col + 1);
        } else if row + 1 < self.len_lines() {
            self.set_cursor(row + 1, 0);
        }
    }

    pub fn move_up(&mut self, lines: usize) {
        let (row, col) = self.cursor;
        self.set_cursor(row.saturating_sub(lines), col);
    }

    pub fn move_down(&mut self, lines: usize) {
        let (row, col) = self.cursor;
        self.set_cursor(row.saturating_add(lines), col);
    }

    pub fn move_line_start(&mut self) {
        self.set_cursor(self.cursor.0, 0);
    }

    pub fn move_line_end(&mut self) {
        let row = self.cursor.0;
        self.set_cursor(row, self.line_grapheme_len(row));
    }

    pub fn move_file_start(&mut self) {
        self.set_cursor(0, 0);
    }

    pub fn move_file_end(&mut self) {
        let row = self.len_lines().saturating_sub(1);
        self.set_cursor(row, self.line_grapheme_len(row));
    }

    fn invalidate_char_pos_cache(&mut self) {
        self.cached_char_pos = None;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
