use log::Level;
use std::{
    borrow::Cow,
    fmt::{Display, Write},
};

/// Named values substituted into the `{name}` placeholders of an event message.
pub type Fields<'a> = &'a [(&'a str, &'a dyn Display)];

/// Receiver of the events emitted while binding, interpolating and executing.
pub trait Logger: Send + Sync {
    fn log(&self, level: Level, message: &str, fields: Fields);
}

/// Replace every `{name}` in `message` with the matching field. Unknown placeholders are kept as
/// they are.
pub fn render(message: &str, fields: Fields) -> String {
    let mut out = String::with_capacity(message.len());
    let mut rest = message;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let Some(end) = rest.find('}') else {
            break;
        };
        let name = &rest[1..end];
        match fields.iter().find(|(k, _)| *k == name) {
            Some((_, v)) => drop(write!(out, "{}", v)),
            None => out.push_str(&rest[..=end]),
        }
        rest = &rest[end + 1..];
    }
    out.push_str(rest);
    out
}

/// Forwards events to the `log` facade.
#[derive(Debug, Clone)]
pub struct LogLogger {
    target: Cow<'static, str>,
}

impl LogLogger {
    pub fn new() -> Self {
        Self {
            target: Cow::Borrowed("sqltrace"),
        }
    }
    pub fn with_target(target: impl Into<Cow<'static, str>>) -> Self {
        Self {
            target: target.into(),
        }
    }
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LogLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for LogLogger {
    fn log(&self, level: Level, message: &str, fields: Fields) {
        let target: &str = &self.target;
        if log::log_enabled!(target: target, level) {
            log::log!(target: target, level, "{}", render(message, fields));
        }
    }
}

/// Build [`Fields`] from `name = value` pairs.
#[macro_export]
macro_rules! fields {
    ($($name:ident = $value:expr),* $(,)?) => {
        &[$((::std::stringify!($name), &$value as &dyn ::std::fmt::Display)),*]
    };
}
