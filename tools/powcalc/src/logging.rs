//! Console logging for powcalc
//!
//! Logs go to stderr so they never mix with calculator output on stdout.
//! Format: `[WARN] message key=value`, with the emitting module added in
//! verbose mode: `[DEBUG] power_calc::engine: integer power base=2`

use anyhow::{Context, Result};
use colored::*;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Bracketed level tag, colored when the writer accepts ANSI escapes
fn level_tag(level: Level, ansi: bool) -> String {
    let tag = format!("[{}]", level);
    if !ansi {
        return tag;
    }
    match level {
        Level::ERROR => tag.red().bold().to_string(),
        Level::WARN => tag.yellow().to_string(),
        Level::INFO => tag.green().to_string(),
        Level::DEBUG => tag.blue().to_string(),
        Level::TRACE => tag.magenta().to_string(),
    }
}

/// Event formatter: `[LEVEL] target: message fields`
struct CliFormat {
    show_target: bool,
}

impl<S, N> FormatEvent<S, N> for CliFormat
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} ",
            level_tag(*metadata.level(), writer.has_ansi_escapes())
        )?;

        if self.show_target {
            write!(writer, "{}: ", metadata.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the console subscriber
///
/// `--verbose` forces `debug` and shows targets; otherwise `RUST_LOG` is
/// honoured and the default is `warn`.
pub fn init(verbose: bool, ansi: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .event_format(CliFormat {
            show_target: verbose,
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
