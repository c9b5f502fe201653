//! Per-run values shared by every expansion: who generated the files and when.

use chrono::Local;

/// `ctime`-style local time, e.g. `Fri Oct 16 14:03:05 2026`.
pub const TIMESTAMP_FORMAT: &str = "%c";

const FALLBACK_TOOL_NAME: &str = "primgen";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    /// Substituted for `$Tool$`
    pub tool_name: String,
    /// Substituted for `$Date$`
    pub timestamp: String,
}

impl RunContext {
    pub fn new(tool_name: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Build the context for this process. Unset values fall back to the
    /// invocation name and the current local time.
    pub fn resolve(tool_name: Option<String>, timestamp: Option<String>) -> Self {
        let tool_name = tool_name.unwrap_or_else(invocation_name);
        let timestamp = timestamp.unwrap_or_else(now);
        log::debug!("Run context: tool={tool_name:?} date={timestamp:?}");
        Self::new(tool_name, timestamp)
    }
}

/// The program name as it was invoked (`argv[0]`).
fn invocation_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_TOOL_NAME.to_string())
}

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_win() {
        let ctx = RunContext::resolve(Some("gen".into()), Some("yesterday".into()));
        assert_eq!(ctx, RunContext::new("gen", "yesterday"));
    }

    #[test]
    fn test_defaults_are_filled() {
        let ctx = RunContext::resolve(None, None);
        assert!(!ctx.tool_name.is_empty());
        assert!(!ctx.timestamp.is_empty());
        assert!(!ctx.timestamp.contains('%'));
    }

    #[test]
    fn test_timestamp_is_ctime_style() {
        let at = chrono::NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(14, 3, 5)
            .unwrap();
        assert_eq!(
            at.format(TIMESTAMP_FORMAT).to_string(),
            "Fri Oct 16 14:03:05 2026"
        );
    }
}
