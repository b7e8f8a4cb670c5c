use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "isogrid.log";
/// Trim the log once it grows past this size (2 MB)
const MAX_LOG_SIZE: u64 = 2 * 1024 * 1024;
/// Bytes of recent history kept after trimming (512 KB)
const KEEP_SIZE: u64 = 512 * 1024;

/// Drop everything but the last `keep` bytes once the file exceeds `max`.
/// The kept tail starts at a line boundary.
fn trim_log(log_path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    // Keep only the newest `keep` bytes
    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    // Drop the partial line the cut landed in
    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    // Rewrite the file with a marker in front of the tail
    let mut file = File::create(log_path)?;
    file.write_all(b"--- earlier entries trimmed ---\n")?;
    file.write_all(&tail[skip..])?;
    Ok(true)
}

/// Hands out writers that share one append-mode log file
#[derive(Clone)]
struct SharedFile {
    file: Arc<Mutex<File>>,
}

struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl Write for SharedFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileWriter {
            file: self.file.clone(),
        }
    }
}

/// Initialize logging to `{data_dir}/isogrid.log`.
///
/// stdout carries the payload, so nothing is logged there. `RUST_LOG`
/// overrides `level` when set.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    // The data directory may not exist on first run
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);

    // A failed trim shouldn't stop the run
    if let Err(e) = trim_log(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: failed to trim log file: {e}");
    }

    // Append so earlier runs stay in the log
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // RUST_LOG wins over the CLI level
    let default_filter = format!("isogrid={level},isogrid_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    // File-only subscriber, no ANSI colors
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedFile {
                    file: Arc::new(Mutex::new(file)),
                })
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::debug!(log_path = %log_path.display(), "logging initialized");
    Ok(())
}
