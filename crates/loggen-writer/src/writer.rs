//! Log file writer.

use crate::error::WriterError;
use crate::file_name::{candidate_name, file_name_timestamp, MAX_NAME_ATTEMPTS};
use chrono::{DateTime, Local};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for log writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of lines written.
    pub lines_written: u64,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    /// Calculate lines per second.
    pub fn lines_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.lines_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// A log file that has been written and closed.
#[derive(Debug, Clone)]
pub struct WrittenLog {
    /// Path of the created file.
    pub path: PathBuf,
    pub metrics: WriteMetrics,
}

/// Writes generated lines to a freshly named file.
#[derive(Debug, Clone)]
pub struct LogWriter {
    output_dir: PathBuf,
    prefix: String,
    extension: String,
}

impl LogWriter {
    /// Create a new log writer.
    ///
    /// # Arguments
    ///
    /// * `output_dir` - Directory the file is created in
    /// * `prefix` - Text before the timestamp in the file name
    /// * `extension` - Text after the timestamp, including its leading dot
    pub fn new<P: Into<PathBuf>>(
        output_dir: P,
        prefix: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `lines` to a new file named after the current local time.
    pub fn write<S: AsRef<str>>(&self, lines: &[S]) -> Result<WrittenLog, WriterError> {
        self.write_at(lines, Local::now())
    }

    /// Write `lines` to a new file named after `now`.
    ///
    /// Each line is terminated with `\n`. The file is flushed and closed
    /// before this returns.
    pub fn write_at<S: AsRef<str>>(
        &self,
        lines: &[S],
        now: DateTime<Local>,
    ) -> Result<WrittenLog, WriterError> {
        let start_time = Instant::now();
        let mut metrics = WriteMetrics::default();

        let (path, file) = self.create_file(&file_name_timestamp(now))?;
        info!(
            "Writing {} lines to '{}'",
            lines.len(),
            path.display()
        );

        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
            writer.write_all(b"\n")?;
            metrics.lines_written += 1;
        }
        writer.flush()?;
        drop(writer);

        metrics.file_size_bytes = fs::metadata(&path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "Log file complete: {} lines, {} bytes in {:?} ({:.2} lines/sec)",
            metrics.lines_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.lines_per_second()
        );

        Ok(WrittenLog { path, metrics })
    }

    /// Create the output file, never truncating an existing one.
    fn create_file(&self, timestamp: &str) -> Result<(PathBuf, File), WriterError> {
        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = candidate_name(&self.prefix, timestamp, &self.extension, attempt);
            let path = self.output_dir.join(&name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    debug!("'{}' already exists, trying the next name", path.display());
                }
                Err(source) => return Err(WriterError::Create { path, source }),
            }
        }

        Err(WriterError::NameExhausted {
            base: candidate_name(&self.prefix, timestamp, &self.extension, 0),
            attempts: MAX_NAME_ATTEMPTS,
        })
    }
}

/// Read a written log back, one string per line.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WriterError> {
    let file = File::open(path)?;
    let lines = BufReader::new(file).lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}
