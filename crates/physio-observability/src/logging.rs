//! Per-request structured logging.
//!
//! Every line carries the request id, workload and route so the operator can
//! follow one submission or page render across the host log.

use std::fmt;
use std::time::{Duration, Instant};

use physio_core::{ConfigSource, RequestId};
use serde::Serialize;
use serde_json::{Map, Value};

/// Log level, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name such as `"warn"`. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a line is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// `[LEVEL] message (Nus) | k=v ...` for local runs.
    Human,
}

impl LogFormat {
    /// Parse `"json"` or `"human"`. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "human" | "text" => Some(Self::Human),
            _ => None,
        }
    }
}

/// One rendered line, borrowing its context from the logger.
#[derive(Debug, Serialize)]
struct LogLine<'a> {
    level: LogLevel,
    message: &'a str,
    request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    workload: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<&'a str>,
    elapsed_us: u64,
    #[serde(flatten)]
    fields: &'a Map<String, Value>,
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({}us)", self.level, self.message, self.elapsed_us)?;
        let mut sep = " | ";
        for (key, value) in self.fields {
            match value {
                Value::String(s) => write!(f, "{}{}={}", sep, key, s)?,
                other => write!(f, "{}{}={}", sep, key, other)?,
            }
            sep = " ";
        }
        Ok(())
    }
}

/// Logger bound to one request.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    started: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            started: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    pub fn with_workload(mut self, workload: impl Into<String>) -> Self {
        self.workload = Some(workload.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Apply the `log_level` and `log_format` variables. Unset or
    /// unrecognized values keep the current setting.
    pub fn with_config(mut self, source: &dyn ConfigSource) -> Self {
        if let Some(level) = source.get("log_level").as_deref().and_then(LogLevel::parse) {
            self.min_level = level;
        }
        if let Some(format) = source.get("log_format").as_deref().and_then(LogFormat::parse) {
            self.format = format;
        }
        self
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Start an entry at the given level.
    pub fn at(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: Map::new(),
        }
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Debug, message)
    }

    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Warn, message)
    }

    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.at(LogLevel::Error, message)
    }

    fn render(&self, level: LogLevel, message: &str, fields: &Map<String, Value>) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }

        let line = LogLine {
            level,
            message,
            request_id: self.request_id.to_string(),
            workload: self.workload.as_deref(),
            route: self.route.as_deref(),
            elapsed_us: self.started.elapsed().as_micros() as u64,
            fields,
        };

        Some(match self.format {
            LogFormat::Json => {
                serde_json::to_string(&line).unwrap_or_else(|_| line.to_string())
            }
            LogFormat::Human => line.to_string(),
        })
    }
}

/// Collects fields for one entry; nothing is written until `emit`.
#[must_use = "call emit() to write the entry"]
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: Map<String, Value>,
}

impl LogBuilder<'_> {
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields.insert(key.to_string(), Value::String(value.into()));
        self
    }

    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Record a duration in whole milliseconds.
    pub fn duration_ms(mut self, key: &str, duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self.fields.insert(key.to_string(), Value::from(millis));
        self
    }

    /// The line `emit` would write, or `None` below the minimum level.
    pub fn render(&self) -> Option<String> {
        self.logger.render(self.level, &self.message, &self.fields)
    }

    /// Write the entry to stderr, which Spin forwards to the host log.
    pub fn emit(self) {
        if let Some(line) = self.render() {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physio_core::MapSource;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("req-1"))
            .with_workload("contact-api")
            .with_route("/api/contact")
    }

    // === Level Tests ===

    #[test]
    fn test_level_parse() {
        assert_eq!(LogLevel::parse("WARN"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse(" debug "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("loud"), None);
    }

    #[test]
    fn test_entries_below_min_level_are_dropped() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(!logger.enabled(LogLevel::Info));
        assert!(logger.info_builder("quiet").render().is_none());
        assert!(logger.error_builder("loud").render().is_some());
    }

    #[test]
    fn test_with_config_reads_variables() {
        let source = MapSource::new()
            .with("log_level", "debug")
            .with("log_format", "human");
        let logger = logger().with_config(&source);

        assert!(logger.enabled(LogLevel::Debug));
        let line = logger.debug_builder("Contact request received").render().unwrap();
        assert!(line.starts_with("[DEBUG] Contact request received"));
    }

    #[test]
    fn test_with_config_keeps_defaults_for_unknown_values() {
        let source = MapSource::new()
            .with("log_level", "loud")
            .with("log_format", "xml");
        let logger = logger().with_config(&source);

        assert!(!logger.enabled(LogLevel::Debug));
        let line = logger.info_builder("ok").render().unwrap();
        assert!(serde_json::from_str::<Value>(&line).is_ok());
    }

    // === Format Tests ===

    #[test]
    fn test_json_entry_carries_context_and_fields() {
        let line = logger()
            .info_builder("Notification sent")
            .field("email_id", "abc")
            .field_bool("has_email", true)
            .duration_ms("took_ms", Duration::from_millis(12))
            .render()
            .unwrap();

        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["message"], "Notification sent");
        assert_eq!(value["request_id"], "req-1");
        assert_eq!(value["workload"], "contact-api");
        assert_eq!(value["route"], "/api/contact");
        assert_eq!(value["email_id"], "abc");
        assert_eq!(value["has_email"], true);
        assert_eq!(value["took_ms"], 12);
        assert!(value["elapsed_us"].is_u64());
    }

    #[test]
    fn test_json_omits_unset_context() {
        let line = StructuredLogger::new(RequestId::from_string("r"))
            .error_builder("boom")
            .render()
            .unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert!(value.get("workload").is_none());
        assert!(value.get("route").is_none());
    }

    #[test]
    fn test_human_format() {
        let line = logger()
            .with_config(&MapSource::new().with("log_format", "human"))
            .warn_builder("Acknowledgment failed")
            .field_i64("status", 422)
            .field("kind", "provider_rejected")
            .render()
            .unwrap();

        assert!(line.starts_with("[WARN] Acknowledgment failed ("));
        assert!(line.ends_with("| kind=provider_rejected status=422"));
    }
}
