mod file_line_source;

pub use file_line_source::FileLineSource;
