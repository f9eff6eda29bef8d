use std::io::Write;

use log::{Level, LevelFilter, Log, Metadata, Record};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::general::batch::BatchReport;

/// Console logger: coloured level tag, errors and warnings to stderr,
/// everything else to stdout.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Cyan,
        Level::Debug | Level::Trace => Color::Magenta,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stream = if record.level() <= Level::Warn {
            StandardStream::stderr(ColorChoice::Auto)
        } else {
            StandardStream::stdout(ColorChoice::Auto)
        };
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(level_color(record.level()))).set_bold(true);
        let _ = stream.set_color(&spec);
        let _ = write!(&mut stream, "[{:<5}]", record.level());
        let _ = stream.reset();
        let _ = writeln!(&mut stream, " {}", record.args());
    }

    fn flush(&self) {}
}

/// Install the console logger. `debug` raises the level from info to debug.
/// Calling this twice is harmless; only the level is updated.
pub fn init_logging(debug: bool) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if debug { LevelFilter::Debug } else { LevelFilter::Info });
}

/// Print the end-of-run banner: green when every attempted key was written,
/// red otherwise.
pub fn print_summary(report: &BatchReport) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let color = if report.is_success() { Color::Green } else { Color::Red };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true));
    let _ = writeln!(&mut stdout, "{}", summary_line(report));
    let _ = stdout.reset();
}

pub fn summary_line(report: &BatchReport) -> String {
    let mut line = format!(
        "Transposed {} of {} keys",
        report.succeeded(),
        report.attempted()
    );
    if report.failed() > 0 {
        line.push_str(&format!(" | {} failed", report.failed()));
    }
    if report.skipped > 0 {
        line.push_str(&format!(" | {} skipped", report.skipped));
    }
    if report.halted {
        line.push_str(" | stopped early");
    }
    line
}
