use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Task execution result for summary reporting.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    pub name: String,
    pub status: TaskStatus,
    pub message: Option<String>,
}

/// Status of a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Ok,
    NotApplicable,
    Skipped,
    DryRun,
    Failed,
}

/// Structured logger with dry-run awareness and summary collection.
///
/// All messages are always written to a persistent log file at
/// `$XDG_CACHE_HOME/sync-settings/sync.log` (default
/// `~/.cache/sync-settings/sync.log`) with timestamps and ANSI codes
/// stripped, regardless of the verbose flag.
pub struct Logger {
    verbose: bool,
    tasks: std::cell::RefCell<Vec<TaskEntry>>,
    log_file: Option<PathBuf>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("verbose", &self.verbose)
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}

/// Return the log file path under `$XDG_CACHE_HOME/sync-settings/` (or `~/.cache/sync-settings/`).
fn log_file_path() -> Option<PathBuf> {
    let cache_dir = std::env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cache")
        });
    let dir = cache_dir.join("sync-settings");
    fs::create_dir_all(&dir).ok()?;
    Some(dir.join("sync.log"))
}

/// Strip ANSI escape sequences from a string.
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of SGR sequence)
            for inner in chars.by_ref() {
                if inner == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl Logger {
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        let log_file = log_file_path();

        if let Some(ref path) = log_file {
            let version = option_env!("SYNC_SETTINGS_VERSION")
                .unwrap_or(concat!("dev-", env!("CARGO_PKG_VERSION")));
            let header = format!(
                "==========================================\n\
                 sync-settings {version} {}\n\
                 ==========================================\n",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            );
            // Truncate and write header (new run = fresh log)
            let _ = fs::write(path, header);
        }

        Self {
            verbose,
            tasks: std::cell::RefCell::new(Vec::new()),
            log_file,
        }
    }

    /// Append a line to the persistent log file.
    fn write_to_file(&self, level: &str, msg: &str) {
        if let Some(ref path) = self.log_file
            && let Ok(mut f) = fs::OpenOptions::new().append(true).open(path)
        {
            let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let clean = strip_ansi(msg);
            let _ = writeln!(f, "{ts} {level} {clean}");
        }
    }

    /// Return the log file path, if available.
    #[cfg(test)]
    pub fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Test-only constructor writing to a caller-provided log file, so
    /// tests do not race on the shared cache-dir log.
    #[cfg(test)]
    fn with_file(verbose: bool, path: PathBuf) -> Self {
        Self {
            verbose,
            tasks: std::cell::RefCell::new(Vec::new()),
            log_file: Some(path),
        }
    }

    pub fn error(&self, msg: &str) {
        eprintln!("\x1b[31mERROR\x1b[0m {msg}");
        self.write_to_file("ERR", msg);
    }

    pub fn warn(&self, msg: &str) {
        eprintln!("\x1b[33mWARN\x1b[0m  {msg}");
        self.write_to_file("WRN", msg);
    }

    pub fn stage(&self, msg: &str) {
        println!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m");
        self.write_to_file("STG", msg);
    }

    pub fn info(&self, msg: &str) {
        println!("  {msg}");
        self.write_to_file("INF", msg);
    }

    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("  \x1b[2m{msg}\x1b[0m");
        }
        // Always log debug to file, even when not verbose on terminal
        self.write_to_file("DBG", msg);
    }

    pub fn dry_run(&self, msg: &str) {
        println!("  \x1b[33m[DRY RUN]\x1b[0m {msg}");
        self.write_to_file("DRY", msg);
    }

    /// Record a task result for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.tasks.borrow_mut().push(TaskEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }

    /// Number of recorded tasks that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| t.status == TaskStatus::Failed)
            .count()
    }

    /// Whether any recorded task failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Print the summary of all recorded tasks.
    pub fn print_summary(&self) {
        let tasks = self.tasks.borrow();
        if tasks.is_empty() {
            return;
        }

        println!();
        self.stage("Summary");

        let mut ok = 0u32;
        let mut not_applicable = 0u32;
        let mut skipped = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;

        for task in tasks.iter() {
            let (icon, color) = match task.status {
                TaskStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                TaskStatus::NotApplicable => {
                    not_applicable += 1;
                    ("·", "\x1b[2m")
                }
                TaskStatus::Skipped => {
                    skipped += 1;
                    ("○", "\x1b[33m")
                }
                TaskStatus::DryRun => {
                    dry_run += 1;
                    ("~", "\x1b[33m")
                }
                TaskStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = match &task.message {
                Some(msg) => format!(" ({msg})"),
                None => String::new(),
            };

            let line = format!("{icon} {}{suffix}", task.name);
            println!("  {color}{line}\x1b[0m");
            self.write_to_file("INF", &line);
        }

        println!();
        let total = ok + not_applicable + skipped + dry_run + failed;
        let totals = format!(
            "{total} tasks: {ok} ok, {not_applicable} n/a, {skipped} skipped, {dry_run} dry-run, {failed} failed"
        );
        println!(
            "  {total} tasks: \x1b[32m{ok} ok\x1b[0m, {not_applicable} n/a, \x1b[33m{skipped} skipped\x1b[0m, {dry_run} dry-run, \x1b[31m{failed} failed\x1b[0m"
        );
        self.write_to_file("INF", &totals);

        if let Some(path) = &self.log_file {
            println!("  \x1b[2mlog: {}\x1b[0m", path.display());
            self.write_to_file("INF", &format!("log: {}", path.display()));
        }
    }
}
