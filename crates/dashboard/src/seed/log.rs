//! Transcript collector for a seed run.

/// Ordered log lines produced by one seed invocation.
///
/// Each line is also emitted through `tracing`, so the process log and the
/// returned transcript always agree. A collector belongs to exactly one run.
#[derive(Debug, Default, Clone)]
pub struct SeedLog {
    lines: Vec<String>,
}

impl SeedLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Record a progress line.
    pub fn info(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!("{line}");
        self.lines.push(line);
    }

    /// Record a failure line.
    pub fn error(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::error!("{line}");
        self.lines.push(line);
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_order_across_levels() {
        let mut log = SeedLog::new();
        log.info("one");
        log.error(String::from("two"));
        log.info("three");
        assert_eq!(log.lines(), ["one", "two", "three"]);
        assert_eq!(log.into_lines().len(), 3);
    }
}
