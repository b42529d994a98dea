use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use chrono::Local;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Mirrors every log line to the per-run file and to stderr.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        io::stderr().write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        io::stderr().flush()
    }
}

/// Sets up logging to stderr plus a timestamped file under `logs/`. If the
/// logs directory cannot be created the run continues with stderr only.
/// Returns the log file path when one was opened.
pub fn init() -> Option<PathBuf> {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info);

    match open_log_file() {
        Some((path, file)) => {
            builder.target(Target::Pipe(Box::new(Tee { file })));
            builder.init();
            log::info!("Logging initialized. Log file: {:?}", path);
            Some(path)
        }
        None => {
            builder.init();
            log::warn!("Could not open a log file under logs/; logging to stderr only.");
            None
        }
    }
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let log_dir = PathBuf::from("logs");
    fs::create_dir_all(&log_dir).ok()?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = log_dir.join(format!("cvpr_scraper_{}.log", timestamp));
    let file = File::create(&path).ok()?;
    Some((path, file))
}
