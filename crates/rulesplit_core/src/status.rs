use std::fmt;

/// A single human-readable progress message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// A source was fetched and appended to the raw cache.
    Fetched { url: String },
    /// A source could not be fetched; it contributes no rules.
    Skipped { url: String, reason: String },
    /// The raw cache was rewritten.
    CacheUpdated,
    /// The normalized cache was rewritten.
    NormalizedCacheUpdated,
    /// An output part is still within its freshness window.
    OutputFresh { name: String },
    /// An output part was written.
    OutputCreated { name: String },
    /// Output base name was empty.
    EmptyBaseName,
    /// No rules were available to normalize or split.
    NoRules,
    /// Reading or writing an artifact failed.
    StoreFailure { name: String, reason: String },
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusEvent::Fetched { url } => write!(f, "Fetched {url}"),
            StatusEvent::Skipped { url, reason } => write!(f, "Skipped {url}: {reason}"),
            StatusEvent::CacheUpdated => write!(f, "Cache updated"),
            StatusEvent::NormalizedCacheUpdated => write!(f, "Cache 2 updated"),
            StatusEvent::OutputFresh { name } => write!(f, "{name} is up to date"),
            StatusEvent::OutputCreated { name } => write!(f, "Created {name}"),
            StatusEvent::EmptyBaseName => write!(f, "Error: empty output base name"),
            StatusEvent::NoRules => write!(f, "Error: no rules available to split"),
            StatusEvent::StoreFailure { name, reason } => {
                write!(f, "Error: could not access {name}: {reason}")
            }
        }
    }
}

impl StatusEvent {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            StatusEvent::EmptyBaseName | StatusEvent::NoRules | StatusEvent::StoreFailure { .. }
        )
    }
}

/// Append-only sequence of status events for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLog {
    events: Vec<StatusEvent>,
}

impl StatusLog {
    pub fn push(&mut self, event: StatusEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl fmt::Display for StatusLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_event() {
        let mut log = StatusLog::default();
        log.push(StatusEvent::Fetched {
            url: "https://a.example".into(),
        });
        log.push(StatusEvent::Skipped {
            url: "https://b.example".into(),
            reason: "timeout".into(),
        });
        log.push(StatusEvent::CacheUpdated);
        assert_eq!(
            log.to_string(),
            "Fetched https://a.example\nSkipped https://b.example: timeout\nCache updated\n"
        );
    }

    #[test]
    fn errors_are_flagged() {
        assert!(StatusEvent::NoRules.is_error());
        assert!(!StatusEvent::CacheUpdated.is_error());
    }
}
