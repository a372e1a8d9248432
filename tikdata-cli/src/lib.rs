// Shared setup for the tikdata command line tools

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "tikdata_db=info,tikdata_provision=info";

/// Load `.env` and install the tracing subscriber.
///
/// Logs go to stdout next to the text summary. With `machine_output` they
/// go to stderr so stdout carries only the report. Colours are used only
/// when the log stream is a terminal.
pub fn init_tracing(machine_output: bool) {
    dotenv::dotenv().ok();

    let registry = tracing_subscriber::registry().with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
    );

    if machine_output {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(std::io::stdout().is_terminal()),
            )
            .init();
    }
}

/// Numbered listing in the style used by all summaries
pub fn numbered<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a String>,
{
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{:2}. {}", i + 1, item))
        .collect()
}
