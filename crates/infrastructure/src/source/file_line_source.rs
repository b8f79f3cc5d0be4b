use async_trait::async_trait;
use bindlog_collector_application::ports::LineSource;
use bindlog_collector_domain::{DomainError, RawLine};
use std::path::{Path, PathBuf};
use tokio::fs::{self, File};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Reads a BIND query log line by line.
///
/// Lines are split on `\n` and decoded one at a time, so a line with invalid
/// UTF-8 is reported as [`RawLine::Undecodable`] without ending the read.
pub struct FileLineSource {
    path: PathBuf,
    reader: BufReader<File>,
    buffer: Vec<u8>,
}

impl FileLineSource {
    /// Opens `path`, which must be an existing regular file.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();

        let metadata = fs::metadata(path)
            .await
            .map_err(|e| unavailable(path, &e))?;

        if !metadata.is_file() {
            return Err(DomainError::SourceUnavailable(format!(
                "The file {} does not exist or is not a file",
                path.display()
            )));
        }

        let file = File::open(path).await.map_err(|e| unavailable(path, &e))?;

        info!(path = %path.display(), size_bytes = metadata.len(), "Opened query log");

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            buffer: Vec::with_capacity(256),
        })
    }
}

#[async_trait]
impl LineSource for FileLineSource {
    async fn next_line(&mut self) -> Result<Option<RawLine>, DomainError> {
        self.buffer.clear();

        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .await
            .map_err(|e| unavailable(&self.path, &e))?;

        if read == 0 {
            debug!(path = %self.path.display(), "Reached end of query log");
            return Ok(None);
        }

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
        }

        let line = match String::from_utf8(std::mem::take(&mut self.buffer)) {
            Ok(text) => RawLine::Text(text),
            Err(e) => RawLine::Undecodable {
                reason: e.utf8_error().to_string(),
                content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
            },
        };

        Ok(Some(line))
    }
}

fn unavailable(path: &Path, error: &std::io::Error) -> DomainError {
    DomainError::SourceUnavailable(format!("{}: {}", path.display(), error))
}
