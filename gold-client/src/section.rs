//! Navigation sections and their header text

/// A navigable content section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Chat,
    Analytics,
    Portfolio,
    Market,
}

/// Header title/subtitle pair shown for a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Chat, Section::Analytics, Section::Portfolio, Section::Market];

    /// Parse a `data-section` attribute value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "chat" => Some(Section::Chat),
            "analytics" => Some(Section::Analytics),
            "portfolio" => Some(Section::Portfolio),
            "market" => Some(Section::Market),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Chat => "chat",
            Section::Analytics => "analytics",
            Section::Portfolio => "portfolio",
            Section::Market => "market",
        }
    }

    /// Static header lookup
    pub fn header(self) -> SectionHeader {
        match self {
            Section::Chat => SectionHeader {
                title: "Gold Investment Assistant",
                subtitle: "Ask me anything about digital gold",
            },
            Section::Analytics => SectionHeader {
                title: "Platform Analytics",
                subtitle: "Live statistics from the gold platform",
            },
            Section::Portfolio => SectionHeader {
                title: "My Portfolio",
                subtitle: "Track your digital gold holdings",
            },
            Section::Market => SectionHeader {
                title: "Gold Market",
                subtitle: "Live gold prices and market insights",
            },
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for section in Section::ALL {
            assert_eq!(Section::parse(section.as_str()), Some(section));
        }
        assert_eq!(Section::parse("settings"), None);
    }

    #[test]
    fn test_headers_are_distinct() {
        let titles: std::collections::HashSet<_> =
            Section::ALL.iter().map(|s| s.header().title).collect();
        assert_eq!(titles.len(), Section::ALL.len());
    }
}
