use crate::conf::{LogFormat, LoggingConfig};
use crate::prefix::PrefixCache;
use crate::time::Zone;
use anyhow::anyhow;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::SystemTime;
use tracing::{Event, Level, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt as subscriber_fmt};

/// Three-letter severity used in line prefixes.
pub fn level_tag(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERR",
        Level::WARN => "WRN",
        Level::INFO => "INF",
        Level::DEBUG => "DBG",
        _ => "TRC",
    }
}

/// Event format writing `<prefix><target>: <fields>` per line.
///
/// All threads share one [`PrefixCache`] behind a mutex.
pub struct PrefixEventFormat {
    cache: Mutex<PrefixCache>,
}

impl PrefixEventFormat {
    pub fn new(tag: impl Into<String>, zone: Zone) -> Self {
        Self {
            cache: Mutex::new(PrefixCache::new(tag, zone)),
        }
    }
}

impl<S, N> FormatEvent<S, N> for PrefixEventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();

        {
            let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
            writer.write_str(cache.update(level_tag(metadata.level()), SystemTime::now()))?;
        }

        write!(writer, "{}: ", metadata.target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over the configured level. When logging to a directory the
/// returned guard must be held until shutdown so buffered lines are flushed.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let (writer, guard) = match &config.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, format!("{}.log", config.tag));
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stdout), None),
    };

    let builder = subscriber_fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false);

    match config.format {
        LogFormat::Prefix => builder
            .event_format(PrefixEventFormat::new(config.tag.clone(), config.zone))
            .try_init(),
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
    }
    .map_err(|e| anyhow!(e))?;

    Ok(guard)
}
