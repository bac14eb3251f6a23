//! Structured log events shipped to the remote log collector.
//!
//! The collector accepts a closed vocabulary for `stack`, `level` and
//! `package`. The typed enums below make invalid combinations unrepresentable
//! for code inside this crate; [`LogEvent::parse`] covers callers holding raw
//! strings and drops anything outside the vocabulary with a local warning.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed string enum with `as_str`, `Display` and `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every accepted value, in wire order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

wire_enum! {
    /// Which side of the application emitted the event.
    pub enum Stack {
        Backend => "backend",
        Frontend => "frontend",
    }
}

wire_enum! {
    /// Severity of the event.
    pub enum Level {
        Debug => "debug",
        Info => "info",
        Warn => "warn",
        Error => "error",
        Fatal => "fatal",
    }
}

wire_enum! {
    /// Component that emitted the event.
    pub enum Package {
        Cache => "cache",
        Controller => "controller",
        CronJob => "cron_job",
        Db => "db",
        Domain => "domain",
        Handler => "handler",
        Repository => "repository",
        Route => "route",
        Service => "service",
        Api => "api",
        Component => "component",
        Hook => "hook",
        Page => "page",
        State => "state",
        Style => "style",
        Auth => "auth",
        Config => "config",
        Middleware => "middleware",
        Utils => "utils",
    }
}

/// One event as posted to the collector.
///
/// Serializes to `{"stack", "level", "package", "message"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub stack: Stack,
    pub level: Level,
    pub package: Package,
    pub message: String,
}

impl LogEvent {
    pub fn new(stack: Stack, level: Level, package: Package, message: impl Into<String>) -> Self {
        Self {
            stack,
            level,
            package,
            message: message.into(),
        }
    }

    /// Shorthand for a backend event.
    pub fn backend(level: Level, package: Package, message: impl Into<String>) -> Self {
        Self::new(Stack::Backend, level, package, message)
    }

    /// Builds an event from untyped inputs.
    ///
    /// Fields are checked in order `stack`, `level`, `package`. The first
    /// invalid one is reported with a local warning and the event is dropped.
    pub fn parse(
        stack: &str,
        level: &str,
        package: &str,
        message: impl Into<String>,
    ) -> Option<Self> {
        let Ok(stack) = stack.parse::<Stack>() else {
            tracing::warn!("[Logger] Invalid stack: {stack}");
            return None;
        };
        let Ok(level) = level.parse::<Level>() else {
            tracing::warn!("[Logger] Invalid level: {level}");
            return None;
        };
        let Ok(package) = package.parse::<Package>() else {
            tracing::warn!("[Logger] Invalid package: {package}");
            return None;
        };

        Some(Self::new(stack, level, package, message))
    }
}
