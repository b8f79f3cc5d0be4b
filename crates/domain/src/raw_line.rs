/// A single line as handed out by a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawLine {
    Text(String),
    /// The bytes of the line were not valid UTF-8. `content` is the lossy
    /// decoding of the line, `reason` the decoder's error.
    Undecodable { content: String, reason: String },
}

impl RawLine {
    pub fn text(line: impl Into<String>) -> Self {
        RawLine::Text(line.into())
    }
}
