mod core;
mod text_formatter;

pub use self::core::LogFormatter;
pub use text_formatter::TextFormatter;
