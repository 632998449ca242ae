//! Tail-polling of the external command log.
//!
//! [`LogTail`] reads only newly appended, newline-complete content from a
//! growing log file since its last read offset. The offset is explicit state
//! threaded through every poll, never hidden behind buffered readers, so
//! ingestion logic stays unit-testable against plain files.
//!
//! # Design invariants
//!
//! 1. **Graceful degradation**: no poll failure propagates; everything
//!    degrades to "no commands this poll" and is retried next tick.
//! 2. **Line completeness**: an unterminated trailing fragment is never
//!    consumed, so a line is never split across two polls even while the
//!    writer is mid-append.
//! 3. **Offset never exceeds the file size**: a log that shrank (truncated
//!    or replaced) rewinds the offset to zero before reading.
//!
//! # Failure modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Log missing | Offset reset to 0; 0 commands this poll |
//! | Log shrank below offset | Offset reset to 0; same poll continues from start |
//! | Open/read error | Logged at debug; 0 commands this poll |
//! | Malformed line | Logged at debug; line skipped, poll continues |

use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use tinycanvas_core::Device;
use tracing::{debug, info};

use crate::command::{is_ignored, parse_line};

/// Stateful cursor over the append-only command log.
#[derive(Debug, Clone)]
pub struct LogTail {
    path: PathBuf,
    /// Byte offset of the first unconsumed byte.
    offset: u64,
    /// Running total of successfully ingested commands.
    commands_seen: u64,
}

impl LogTail {
    /// Create a tail over `path`, starting from offset zero. The file does
    /// not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            offset: 0,
            commands_seen: 0,
        }
    }

    /// The backing log path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current read offset into the log.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Total commands ingested over the tail's lifetime.
    pub fn commands_seen(&self) -> u64 {
        self.commands_seen
    }

    /// Poll the log for newly appended complete lines and feed each parsed
    /// command to the device.
    ///
    /// Returns the number of commands processed by this call. Never fails:
    /// I/O errors degrade to zero and are retried on the next poll.
    pub fn poll(&mut self, device: &mut Device) -> usize {
        match self.poll_inner(device) {
            Ok(count) => count,
            Err(err) => {
                debug!(path = %self.path.display(), error = %err, "command log unavailable this poll");
                0
            }
        }
    }

    fn poll_inner(&mut self, device: &mut Device) -> io::Result<usize> {
        let size = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.offset = 0;
                return Ok(0);
            }
            Err(err) => return Err(err),
        };

        if size < self.offset {
            info!(
                path = %self.path.display(),
                size,
                offset = self.offset,
                "command log shrank; rewinding to start"
            );
            self.offset = 0;
        }
        if size == self.offset {
            return Ok(0);
        }

        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(self.offset))?;
        let mut buf = Vec::with_capacity((size - self.offset) as usize);
        file.take(size - self.offset).read_to_end(&mut buf)?;

        // Consume only through the last complete line; the unterminated
        // remainder stays for the next poll.
        let Some(consumed) = buf.iter().rposition(|&b| b == b'\n').map(|i| i + 1) else {
            return Ok(0);
        };

        let mut processed = 0usize;
        for raw in buf[..consumed].split(|&b| b == b'\n') {
            if raw.is_empty() {
                continue;
            }
            let line = String::from_utf8_lossy(raw);
            let line = line.trim_end_matches('\r');
            if is_ignored(line) {
                continue;
            }
            match parse_line(line) {
                Some([x, y, status]) => {
                    device.receive_word(x);
                    device.receive_word(y);
                    device.receive_word(status);
                    processed += 1;
                }
                None => debug!(line = %line, "skipping malformed command line"),
            }
        }

        self.offset += consumed as u64;
        self.commands_seen += processed as u64;
        Ok(processed)
    }

    /// Channel-side clear: remove the backing log and rewind the offset, so
    /// stale offsets can never replay prior contents.
    pub fn reset(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
        self.offset = 0;
        Ok(())
    }
}
