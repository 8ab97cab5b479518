//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Guard that keeps the logger's root span alive
///
/// The global subscriber stays installed after the guard is dropped; only
/// the `service` root span is exited.
#[derive(Debug)]
pub struct LoggerGuard {
    _root_span: Option<tracing::span::EnteredSpan>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// Fails if the filter string cannot be parsed or a global subscriber is
    /// already installed.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        tracing_subscriber::registry()
            .with(fmt_layer(&self.config))
            .with(filter)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        let root_span = self
            .config
            .service
            .as_deref()
            .map(|service| tracing::info_span!("app", service).entered());

        Ok(LoggerGuard {
            _root_span: root_span,
        })
    }
}

fn fmt_layer(config: &Config) -> BoxedLayer {
    let display = &config.display;
    let writer = config.writer.make_writer();

    match (config.format, display.time) {
        (Format::Pretty, true) => create_fmt_layer!(pretty, display, writer).boxed(),
        (Format::Pretty, false) => create_fmt_layer!(pretty, display, writer)
            .without_time()
            .boxed(),
        (Format::Compact, true) => create_fmt_layer!(compact, display, writer).boxed(),
        (Format::Compact, false) => create_fmt_layer!(compact, display, writer)
            .without_time()
            .boxed(),
        (Format::Json, true) => create_json_layer!(display, writer).boxed(),
        (Format::Json, false) => create_json_layer!(display, writer).without_time().boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = Config {
            level: "tessera_set=loud".to_string(),
            ..Config::test()
        };
        let err = LoggerBuilder::from_config(config).build().unwrap_err();
        assert!(matches!(err, LogError::Filter { .. }));
    }
}
