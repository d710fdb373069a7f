//! An explicit channel for debug messages produced while solving.

/// Debug messages collected while a solution runs.
///
/// Whether messages are kept is decided by whoever constructs this, never by process state. When
/// disabled, [`Diagnostics::record`] does not evaluate its message closure.
#[derive(Debug, Default)]
pub struct Diagnostics {
    enabled: bool,
    messages: Vec<String>,
}

impl Diagnostics {
    /// Create diagnostics that keep messages only if `enabled`.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            messages: Vec::new(),
        }
    }

    /// Create diagnostics that drop every message.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a message, built lazily.
    pub fn record<F>(&mut self, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.enabled {
            self.messages.push(message());
        }
    }

    /// Record messages that were already built elsewhere, e.g. by a debug-enabled solver.
    pub fn extend<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = String>,
    {
        if self.enabled {
            self.messages.extend(messages);
        }
    }

    /// Take all recorded messages, leaving none behind.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_drops_messages_without_building_them() {
        let mut diagnostics = Diagnostics::disabled();
        diagnostics.record(|| panic!("message should not be built"));
        diagnostics.extend(vec!["dropped".to_owned()]);
        assert!(diagnostics.take().is_empty());
    }

    #[test]
    fn enabled_keeps_messages_in_order() {
        let mut diagnostics = Diagnostics::new(true);
        diagnostics.record(|| "first".to_owned());
        diagnostics.extend(["second".to_owned(), "third".to_owned()]);
        assert_eq!(diagnostics.take(), ["first", "second", "third"]);
        assert!(diagnostics.take().is_empty());
    }
}
