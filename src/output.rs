// src/output.rs
use crate::error::Result;
use crate::permutator::HANDOFF_CAPACITY;
use crate::types::{HostRecord, OutputConfig, OutputFormat, PermutationRecord, RustPermuteError};
use log::{debug, error};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Owns the output destination. With a file configured, a single blocking
/// task holds the file handle and every job sends it finished lines.
pub struct OutputManager {
    format: OutputFormat,
    queue: Option<mpsc::Sender<String>>,
    writer: Option<JoinHandle<Result<usize>>>,
}

/// Cheap per-job handle for emitting lines.
#[derive(Clone)]
pub struct OutputHandle {
    format: OutputFormat,
    queue: Option<mpsc::Sender<String>>,
}

impl OutputManager {
    pub fn new(config: &OutputConfig) -> Result<Self> {
        let Some(path) = &config.file else {
            return Ok(Self {
                format: config.format,
                queue: None,
                writer: None,
            });
        };

        let file = open_append(path)?;
        let (tx, rx) = mpsc::channel(HANDOFF_CAPACITY);
        let writer = tokio::task::spawn_blocking(move || write_lines(file, rx));
        debug!("Writing permutations to {:?}", path);

        Ok(Self {
            format: config.format,
            queue: Some(tx),
            writer: Some(writer),
        })
    }

    pub fn handle(&self) -> OutputHandle {
        OutputHandle {
            format: self.format,
            queue: self.queue.clone(),
        }
    }

    /// Close the write queue and wait for the writer to flush. Call only
    /// after every handle has been dropped.
    pub async fn finish(mut self) -> Result<usize> {
        drop(self.queue.take());
        match self.writer.take() {
            Some(writer) => writer
                .await
                .map_err(|e| RustPermuteError::OutputError(format!("Writer task failed: {}", e)))?,
            None => Ok(0),
        }
    }
}

impl OutputHandle {
    pub async fn write(&self, record: &HostRecord, candidate: &str) -> Result<()> {
        let line = format_line(self.format, record, candidate)?;
        match &self.queue {
            Some(queue) => queue
                .send(line)
                .await
                .map_err(|_| RustPermuteError::OutputError("Output writer has stopped".to_string())),
            None => write_stdout(&line),
        }
    }
}

fn write_stdout(line: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(line.as_bytes())
        .map_err(|e| RustPermuteError::OutputError(e.to_string()))
}

pub fn format_line(format: OutputFormat, record: &HostRecord, candidate: &str) -> Result<String> {
    let permutation = record.qualify(candidate);
    match format {
        OutputFormat::Text => Ok(format!("{}\n", permutation)),
        OutputFormat::Json => {
            let json = serde_json::to_string(&PermutationRecord {
                host: &record.host,
                permutation: &permutation,
            })
            .map_err(|e| RustPermuteError::OutputError(format!("Failed to serialize JSON: {}", e)))?;
            Ok(format!("{}\n", json))
        }
    }
}

fn open_append(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path).map_err(|source| RustPermuteError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })
}

fn write_lines(file: File, mut rx: mpsc::Receiver<String>) -> Result<usize> {
    let mut writer = BufWriter::new(file);
    let mut written = 0;

    while let Some(line) = rx.blocking_recv() {
        if let Err(e) = writer.write_all(line.as_bytes()) {
            error!("Failed to write permutation: {}", e);
            return Err(RustPermuteError::OutputError(e.to_string()));
        }
        written += 1;
    }

    writer
        .flush()
        .map_err(|e| RustPermuteError::OutputError(e.to_string()))?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::split_host;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_text_line() {
        let record = split_host("foo.example.com");
        let line = format_line(OutputFormat::Text, &record, "dev-foo").unwrap();
        assert_eq!(line, "dev-foo.example.com\n");
    }

    #[test]
    fn test_format_json_line() {
        let record = split_host("foo.example.com");
        let line = format_line(OutputFormat::Json, &record, "foo1").unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(value["host"], "foo.example.com");
        assert_eq!(value["permutation"], "foo1.example.com");
    }

    #[tokio::test]
    async fn test_file_output_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "existing.example.com\n").unwrap();

        let config = OutputConfig {
            format: OutputFormat::Text,
            file: Some(path.clone()),
        };
        let manager = OutputManager::new(&config).unwrap();
        let handle = manager.handle();
        let record = split_host("foo.example.com");
        handle.write(&record, "a").await.unwrap();
        handle.write(&record, "b").await.unwrap();
        drop(handle);

        assert_eq!(manager.finish().await.unwrap(), 2);
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "existing.example.com\na.example.com\nb.example.com\n");
    }

    #[tokio::test]
    async fn test_unopenable_output() {
        let dir = tempdir().unwrap();
        let config = OutputConfig {
            format: OutputFormat::Text,
            file: Some(dir.path().join("missing").join("out.txt")),
        };
        let err = OutputManager::new(&config).err().unwrap();
        assert!(matches!(err, RustPermuteError::OutputOpen { .. }));
    }
}
