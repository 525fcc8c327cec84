//! 数据模型层

pub mod text_buffer;

pub use text_buffer::{grapheme_display_width, slice_to_cow, TextBuffer};
