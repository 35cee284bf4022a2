//! Leveled logger boundary
//!
//! Host applications hand the library a `Logger` that filters by severity and
//! forwards `(level, message, context)` to a [`LogWriter`]. The text and
//! container helpers never call it; it is here so formatted contexts built
//! with them have somewhere to go.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::container::Mapping;
use crate::core_types::schema::EVENT_LOG;
use crate::errors::{NormError, Result};

/// Severity, most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "LevelRepr")]
#[repr(u8)]
pub enum LogLevel {
    Emergency = 1,
    Alert = 2,
    Critical = 3,
    Error = 4,
    Warn = 5,
    Notice = 6,
    Info = 7,
    Debug = 8,
}

impl LogLevel {
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "emergency",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = NormError;

    fn try_from(value: u8) -> Result<Self> {
        LogLevel::ALL
            .into_iter()
            .find(|level| *level as u8 == value)
            .ok_or_else(|| NormError::InvalidLogLevel {
                level: value.to_string(),
            })
    }
}

impl FromStr for LogLevel {
    type Err = NormError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "warning" => Ok(LogLevel::Warn),
            _ => LogLevel::ALL
                .into_iter()
                .find(|level| level.as_str() == name)
                .ok_or_else(|| NormError::InvalidLogLevel {
                    level: s.to_string(),
                }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(u8),
    Name(String),
}

impl TryFrom<LevelRepr> for LogLevel {
    type Error = NormError;

    fn try_from(repr: LevelRepr) -> Result<Self> {
        match repr {
            LevelRepr::Number(n) => LogLevel::try_from(n),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}

/// Destination for accepted log records
pub trait LogWriter {
    type Output;

    fn write(&self, level: LogLevel, message: &str, context: &Mapping) -> Self::Output;
}

/// Logger settings, merged over defaults from an options mapping
///
/// Both the short keys (`enabled`, `level`, `channel`) and the dotted
/// `log.*` keys (`log.enabled`, `log.level`, `log.name`) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    #[serde(alias = "log.enabled")]
    pub enabled: bool,
    #[serde(alias = "log.level")]
    pub level: LogLevel,
    #[serde(alias = "log.name")]
    pub channel: String,
}

// Dotted option keys and the settings field each one sets
const DOTTED_KEYS: [(&str, &str); 3] = [
    ("log.enabled", "enabled"),
    ("log.level", "level"),
    ("log.name", "channel"),
];

fn is_dotted_key(key: &str) -> bool {
    DOTTED_KEYS.iter().any(|(dotted, _)| *dotted == key)
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::Debug,
            channel: "APP LOGGER".to_string(),
        }
    }
}

impl LoggerSettings {
    /// Build settings from options; missing keys keep their defaults.
    ///
    /// When a setting is given under both its short and its dotted key, the
    /// dotted `log.*` key wins.
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for a wrongly typed value or an unknown level.
    pub fn from_options(options: &Mapping) -> Result<Self> {
        let mut merged: Mapping = options
            .iter()
            .filter(|(key, _)| !is_dotted_key(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        for (dotted, short) in DOTTED_KEYS {
            if let Some(value) = options.get(dotted) {
                merged.insert(short.to_string(), value.clone());
            }
        }

        Ok(serde_json::from_value(Value::Object(merged))?)
    }
}

/// Severity-filtering front end over a [`LogWriter`]
#[derive(Debug, Clone)]
pub struct Logger<W> {
    writer: Option<W>,
    enabled: bool,
    level: LogLevel,
}

impl<W: LogWriter> Logger<W> {
    /// Enabled logger that passes every level to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
            enabled: true,
            level: LogLevel::Debug,
        }
    }

    /// Logger with nothing to write to; every call returns `None`.
    pub fn detached() -> Self {
        Self {
            writer: None,
            enabled: true,
            level: LogLevel::Debug,
        }
    }

    pub fn from_settings(settings: &LoggerSettings, writer: W) -> Self {
        Self {
            writer: Some(writer),
            enabled: settings.enabled,
            level: settings.level,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Least severe level still written.
    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn writer(&self) -> Option<&W> {
        self.writer.as_ref()
    }

    /// Write a record if the logger is enabled, has a writer, and `level` is
    /// at least as severe as the threshold. Returns the writer's output, or
    /// `None` when the record was dropped.
    pub fn log(&self, level: LogLevel, message: &str, context: &Mapping) -> Option<W::Output> {
        match &self.writer {
            Some(writer) if self.enabled && level <= self.level => {
                Some(writer.write(level, message, context))
            }
            _ => None,
        }
    }

    /// [`Logger::log`] for a numeric level (1 = emergency .. 8 = debug).
    ///
    /// # Errors
    ///
    /// Returns `InvalidLogLevel` for any other number, even when the logger is
    /// disabled.
    pub fn log_raw(
        &self,
        level: u8,
        message: &str,
        context: &Mapping,
    ) -> Result<Option<W::Output>> {
        let level = LogLevel::try_from(level)?;
        Ok(self.log(level, message, context))
    }

    pub fn error(&self, message: &str, context: &Mapping) -> Option<W::Output> {
        self.log(LogLevel::Error, message, context)
    }

    pub fn warn(&self, message: &str, context: &Mapping) -> Option<W::Output> {
        self.log(LogLevel::Warn, message, context)
    }

    pub fn info(&self, message: &str, context: &Mapping) -> Option<W::Output> {
        self.log(LogLevel::Info, message, context)
    }

    pub fn debug(&self, message: &str, context: &Mapping) -> Option<W::Output> {
        self.log(LogLevel::Debug, message, context)
    }
}

/// Writer that turns records into `tracing` events
///
/// Emergency through error map to ERROR, notice and info to INFO. The context
/// is attached as a JSON string field.
#[derive(Debug, Clone)]
pub struct TracingWriter {
    channel: String,
}

impl TracingWriter {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    pub fn from_settings(settings: &LoggerSettings) -> Self {
        Self::new(settings.channel.clone())
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

macro_rules! emit {
    ($macro:ident, $channel:expr, $level:expr, $context:expr, $message:expr) => {
        ::tracing::$macro!(
            component = module_path!(),
            op = "log",
            event = EVENT_LOG,
            channel = $channel,
            severity = $level,
            context = $context,
            "{}",
            $message
        )
    };
}

impl LogWriter for TracingWriter {
    type Output = ();

    fn write(&self, level: LogLevel, message: &str, context: &Mapping) {
        let context = serde_json::to_string(context).unwrap_or_default();
        let channel = self.channel.as_str();
        let name = level.as_str();
        let context = context.as_str();

        match level {
            LogLevel::Emergency | LogLevel::Alert | LogLevel::Critical | LogLevel::Error => {
                emit!(error, channel, name, context, message)
            }
            LogLevel::Warn => emit!(warn, channel, name, context, message),
            LogLevel::Notice | LogLevel::Info => emit!(info, channel, name, context, message),
            LogLevel::Debug => emit!(debug, channel, name, context, message),
        }
    }
}
