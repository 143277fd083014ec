//! Unicode display width.

mod width;

pub use width::{
    WidthMethod, display_width, display_width_char, display_width_char_with_method,
    display_width_chars, display_width_chars_with_method, display_width_with_method, is_wide,
    is_zero_width, set_width_method, width_method,
};
