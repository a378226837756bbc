use crate::error::AppError;

/// Locale used to render dates. Only US English exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateLocale {
    #[default]
    EnUs,
}

impl DateLocale {
    /// Accepts `en`, `en-US` and `en_US` in any case; empty means the default.
    pub fn parse(locale: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = locale else {
            return Ok(DateLocale::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(DateLocale::default());
        }
        let mut parts = trimmed.split(['-', '_']);
        let language = parts.next().unwrap_or(trimmed).to_ascii_lowercase();
        let region = parts.next().map(str::to_ascii_uppercase);

        match (language.as_str(), region.as_deref(), parts.next()) {
            ("en", None | Some("US"), None) => Ok(DateLocale::EnUs),
            _ => Err(AppError::UnsupportedLocale {
                input: trimmed.to_string(),
            }),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            DateLocale::EnUs => "en-US",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_default() {
        assert_eq!(DateLocale::parse(None).unwrap(), DateLocale::EnUs);
    }

    #[test]
    fn parse_empty_returns_default() {
        assert_eq!(DateLocale::parse(Some("  ")).unwrap(), DateLocale::EnUs);
    }

    #[test]
    fn parse_accepts_english_us_spellings() {
        for raw in ["en", "EN", "en-US", "en_us", "En-Us"] {
            assert_eq!(DateLocale::parse(Some(raw)).unwrap(), DateLocale::EnUs);
        }
    }

    #[test]
    fn parse_rejects_other_regions() {
        assert!(DateLocale::parse(Some("en-GB")).is_err());
        assert!(DateLocale::parse(Some("en-US-posix")).is_err());
    }

    #[test]
    fn parse_rejects_other_languages() {
        let err = DateLocale::parse(Some("de")).unwrap_err();
        assert!(err.to_string().contains("de"));
    }

    #[test]
    fn tag_is_bcp47() {
        assert_eq!(DateLocale::EnUs.tag(), "en-US");
    }
}
