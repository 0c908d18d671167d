use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x63, 0x66, 0xf1);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LABEL_TEXT: Color = Color::Rgb(0x64, 0x74, 0x8b);
pub const PAGE_LINK: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const CURRENT_PAGE: Color = Color::Rgb(0xf8, 0xfa, 0xfc);
pub const ROW_STRIPE: Color = Color::Rgb(0x1e, 0x29, 0x3b);
