//! Build progress reporting.
//!
//! User-facing progress is separate from `log` diagnostics: the CLI picks a
//! reporter (console, JSON lines, or nothing) and the executor feeds it
//! events.
//!
//! # Example
//!
//! ```
//! use spritegen::build::{BuildStatus, ConsoleProgress, ProgressEvent, ProgressReporter};
//!
//! let reporter = ConsoleProgress::with_output(std::io::sink());
//! reporter.report(ProgressEvent::BuildStarted { total_targets: 1 });
//! reporter.report(ProgressEvent::TargetCompleted {
//!     target_id: "character:wizard".to_string(),
//!     status: BuildStatus::Success,
//!     duration_ms: 12,
//! });
//! ```

use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use serde_json::json;

use super::result::BuildStatus;

/// Events that can be reported during a build.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    BuildStarted {
        total_targets: usize,
    },
    TargetStarted {
        target_id: String,
    },
    TargetCompleted {
        target_id: String,
        status: BuildStatus,
        duration_ms: u64,
    },
    BuildCompleted {
        success: bool,
        duration_ms: u64,
        succeeded: usize,
        failed: usize,
    },
}

/// Trait for progress reporters.
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);

    /// Whether per-target start lines are wanted.
    fn is_verbose(&self) -> bool {
        false
    }
}

/// A progress reporter that discards all events.
#[derive(Debug, Default)]
pub struct NullProgress;

impl NullProgress {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NullProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Console progress reporter with optional colors.
pub struct ConsoleProgress {
    use_colors: bool,
    verbose: bool,
    current: AtomicUsize,
    total: AtomicUsize,
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleProgress")
            .field("use_colors", &self.use_colors)
            .field("verbose", &self.verbose)
            .field("current", &self.current)
            .field("total", &self.total)
            .finish()
    }
}

impl ConsoleProgress {
    /// Reporter writing to stderr; colors only when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            use_colors: std::io::stderr().is_terminal(),
            verbose: false,
            current: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            output: Mutex::new(Box::new(std::io::stderr())),
        }
    }

    /// Reporter writing to a custom output, without colors.
    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self {
            use_colors: false,
            verbose: false,
            current: AtomicUsize::new(0),
            total: AtomicUsize::new(0),
            output: Mutex::new(Box::new(output)),
        }
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.color(text, "\x1b[32m")
    }

    fn red(&self, text: &str) -> String {
        self.color(text, "\x1b[31m")
    }

    fn cyan(&self, text: &str) -> String {
        self.color(text, "\x1b[36m")
    }

    fn writeln(&self, line: &str) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", line);
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::BuildStarted { total_targets } => {
                self.total.store(total_targets, Ordering::SeqCst);
                self.current.store(0, Ordering::SeqCst);
                if total_targets > 0 {
                    self.writeln(&format!(
                        "{} Generating {} target{}...",
                        self.cyan("[build]"),
                        total_targets,
                        if total_targets == 1 { "" } else { "s" }
                    ));
                }
            }
            ProgressEvent::TargetStarted { target_id } => {
                if self.verbose {
                    self.writeln(&format!("{} started {}", self.cyan("[build]"), target_id));
                }
            }
            ProgressEvent::TargetCompleted { target_id, status, duration_ms } => {
                let current = self.current.fetch_add(1, Ordering::SeqCst) + 1;
                let total = self.total.load(Ordering::SeqCst);

                let status_str = match &status {
                    BuildStatus::Success => self.green("ok"),
                    BuildStatus::Failed(_) => self.red("FAILED"),
                };

                self.writeln(&format!(
                    "{} [{}/{}] {} {} ({})",
                    self.cyan("[build]"),
                    current,
                    total,
                    status_str,
                    target_id,
                    format_duration(duration_ms)
                ));

                if let BuildStatus::Failed(err) = status {
                    self.writeln(&format!("        {}", self.red(&err)));
                }
            }
            ProgressEvent::BuildCompleted { success, duration_ms, succeeded, failed } => {
                if success {
                    self.writeln(&format!(
                        "{} {} {} generated in {}",
                        self.green("[done]"),
                        succeeded,
                        if succeeded == 1 { "target" } else { "targets" },
                        format_duration(duration_ms)
                    ));
                } else {
                    self.writeln(&format!(
                        "{} Build failed: {} succeeded, {} {} in {}",
                        self.red("[error]"),
                        succeeded,
                        failed,
                        if failed == 1 { "failure" } else { "failures" },
                        format_duration(duration_ms)
                    ));
                }
            }
        }
    }

    fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// JSON-lines progress reporter for machine-readable output.
pub struct JsonProgress {
    output: Mutex<Box<dyn Write + Send>>,
}

impl std::fmt::Debug for JsonProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonProgress").finish()
    }
}

impl JsonProgress {
    /// Reporter writing to stdout.
    pub fn new() -> Self {
        Self { output: Mutex::new(Box::new(std::io::stdout())) }
    }

    pub fn with_output<W: Write + Send + 'static>(output: W) -> Self {
        Self { output: Mutex::new(Box::new(output)) }
    }

    fn write_json(&self, value: serde_json::Value) {
        if let Ok(mut output) = self.output.lock() {
            let _ = writeln!(output, "{}", value);
        }
    }
}

impl Default for JsonProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for JsonProgress {
    fn report(&self, event: ProgressEvent) {
        let value = match event {
            ProgressEvent::BuildStarted { total_targets } => {
                json!({ "event": "build_started", "total_targets": total_targets })
            }
            ProgressEvent::TargetStarted { target_id } => {
                json!({ "event": "target_started", "target_id": target_id })
            }
            ProgressEvent::TargetCompleted { target_id, status, duration_ms } => match status {
                BuildStatus::Success => json!({
                    "event": "target_completed",
                    "target_id": target_id,
                    "status": "success",
                    "duration_ms": duration_ms,
                }),
                BuildStatus::Failed(error) => json!({
                    "event": "target_completed",
                    "target_id": target_id,
                    "status": "failed",
                    "duration_ms": duration_ms,
                    "error": error,
                }),
            },
            ProgressEvent::BuildCompleted { success, duration_ms, succeeded, failed } => json!({
                "event": "build_completed",
                "success": success,
                "duration_ms": duration_ms,
                "succeeded": succeeded,
                "failed": failed,
            }),
        };
        self.write_json(value);
    }
}

fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer sharing its buffer with the test.
    #[derive(Clone, Default)]
    struct TestWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl TestWriter {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[test]
    fn test_null_progress() {
        let reporter = NullProgress::new();
        reporter.report(ProgressEvent::BuildStarted { total_targets: 10 });
        reporter.report(ProgressEvent::TargetStarted { target_id: "tiles:tiles".to_string() });
        assert!(!reporter.is_verbose());
    }

    #[test]
    fn test_console_progress_counts_targets() {
        let writer = TestWriter::default();
        let reporter = ConsoleProgress::with_output(writer.clone());
        reporter.report(ProgressEvent::BuildStarted { total_targets: 2 });
        reporter.report(ProgressEvent::TargetCompleted {
            target_id: "character:wizard".to_string(),
            status: BuildStatus::Success,
            duration_ms: 150,
        });
        reporter.report(ProgressEvent::TargetCompleted {
            target_id: "tiles:tiles".to_string(),
            status: BuildStatus::Failed("permission denied".to_string()),
            duration_ms: 1500,
        });

        let text = writer.text();
        assert!(text.contains("Generating 2 targets"));
        assert!(text.contains("[1/2] ok character:wizard (150ms)"));
        assert!(text.contains("[2/2] FAILED tiles:tiles (1.5s)"));
        assert!(text.contains("permission denied"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_console_progress_verbose_start_lines() {
        let writer = TestWriter::default();
        let quiet = ConsoleProgress::with_output(writer.clone());
        quiet.report(ProgressEvent::TargetStarted { target_id: "masks:transition_masks".to_string() });
        assert!(writer.text().is_empty());

        let verbose = ConsoleProgress::with_output(writer.clone()).with_verbose(true);
        verbose.report(ProgressEvent::TargetStarted { target_id: "masks:transition_masks".to_string() });
        assert!(writer.text().contains("started masks:transition_masks"));
    }

    #[test]
    fn test_console_progress_build_completed() {
        let writer = TestWriter::default();
        let reporter = ConsoleProgress::with_output(writer.clone());
        reporter.report(ProgressEvent::BuildCompleted { success: true, duration_ms: 80, succeeded: 14, failed: 0 });
        reporter.report(ProgressEvent::BuildCompleted { success: false, duration_ms: 80, succeeded: 13, failed: 1 });

        let text = writer.text();
        assert!(text.contains("14 targets generated"));
        assert!(text.contains("13 succeeded, 1 failure"));
    }

    #[test]
    fn test_json_progress_lines_parse() {
        let writer = TestWriter::default();
        let reporter = JsonProgress::with_output(writer.clone());
        reporter.report(ProgressEvent::BuildStarted { total_targets: 1 });
        reporter.report(ProgressEvent::TargetCompleted {
            target_id: "character:\"quoted\"".to_string(),
            status: BuildStatus::Failed("bad\nthing".to_string()),
            duration_ms: 3,
        });

        let text = writer.text();
        let lines: Vec<serde_json::Value> = text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["event"], "build_started");
        assert_eq!(lines[1]["target_id"], "character:\"quoted\"");
        assert_eq!(lines[1]["status"], "failed");
        assert_eq!(lines[1]["error"], "bad\nthing");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(999), "999ms");
        assert_eq!(format_duration(2500), "2.5s");
        assert_eq!(format_duration(125_000), "2m 5s");
    }
}
