use chrono::DateTime;

/// RFC 3339 timestamp captured by the build script.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn page_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-900 text-white",
            Theme::Light => "bg-white text-gray-900",
        }
    }

    /// Stroke colour for particle links.
    pub fn link_color(self) -> &'static str {
        match self {
            Theme::Dark => "#ffffff",
            Theme::Light => "#000000",
        }
    }
}

/// Formats an RFC 3339 timestamp as e.g. `Oct 19 2026`, or `None` if it
/// doesn't parse.
pub fn build_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.format("%b %e %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_date() {
        assert_eq!(
            build_date("2026-10-19T08:30:00+00:00").as_deref(),
            Some("Oct 19 2026")
        );
        assert_eq!(build_date("2026-03-04T00:00:00Z").as_deref(), Some("Mar  4 2026"));
        assert_eq!(build_date("yesterday"), None);
        assert!(build_date(BUILD_TIME).is_some());
    }

    #[test]
    fn test_theme_defaults_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.link_color(), "#ffffff");
        assert!(Theme::Light.page_class().contains("bg-white"));
    }
}
