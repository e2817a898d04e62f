//! Source orthographies with an embedded ruleset

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A Latin-script source orthography the engine can transliterate from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orthography {
    /// Latvian
    Latvian,
    /// Lithuanian
    Lithuanian,
    /// Polish
    Polish,
    /// Estonian
    Estonian,
}

impl Orthography {
    /// Every supported orthography, ordered by stable id
    pub const ALL: [Orthography; 4] = [
        Orthography::Latvian,
        Orthography::Lithuanian,
        Orthography::Polish,
        Orthography::Estonian,
    ];

    /// Short code used as the ruleset key (`lv`, `lt`, `pl`, `et`)
    pub fn code(&self) -> &'static str {
        match self {
            Orthography::Latvian => "lv",
            Orthography::Lithuanian => "lt",
            Orthography::Polish => "pl",
            Orthography::Estonian => "et",
        }
    }

    /// Human-readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            Orthography::Latvian => "Latvian",
            Orthography::Lithuanian => "Lithuanian",
            Orthography::Polish => "Polish",
            Orthography::Estonian => "Estonian",
        }
    }

    /// Russian display name, as shown to downstream consumers
    pub fn russian_name(&self) -> &'static str {
        match self {
            Orthography::Latvian => "Латвийский",
            Orthography::Lithuanian => "Литовский",
            Orthography::Polish => "Польский",
            Orthography::Estonian => "Эстонский",
        }
    }

    /// Stable small integer identifier shared with downstream bookkeeping
    pub fn id(&self) -> u32 {
        match self {
            Orthography::Latvian => 1,
            Orthography::Lithuanian => 2,
            Orthography::Polish => 3,
            Orthography::Estonian => 4,
        }
    }

    /// Look up an orthography by its stable id
    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.id() == id)
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orthography {
    type Err = Error;

    /// Accepts the code, the English or Russian name (any case) or the numeric id
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        if let Ok(id) = needle.parse::<u32>() {
            return Self::from_id(id).ok_or_else(|| Error::UnsupportedOrthography(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|o| {
                o.code().eq_ignore_ascii_case(needle)
                    || o.as_str().eq_ignore_ascii_case(needle)
                    || o.russian_name().to_lowercase() == needle.to_lowercase()
            })
            .ok_or_else(|| Error::UnsupportedOrthography(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_ids() {
        assert_eq!(Orthography::Latvian.id(), 1);
        assert_eq!(Orthography::Lithuanian.id(), 2);
        assert_eq!(Orthography::Polish.id(), 3);
        assert_eq!(Orthography::Estonian.id(), 4);
    }

    #[test]
    fn test_parse_by_code_name_and_id() {
        assert_eq!("pl".parse::<Orthography>().unwrap(), Orthography::Polish);
        assert_eq!("Estonian".parse::<Orthography>().unwrap(), Orthography::Estonian);
        assert_eq!("LITHUANIAN".parse::<Orthography>().unwrap(), Orthography::Lithuanian);
        assert_eq!("1".parse::<Orthography>().unwrap(), Orthography::Latvian);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "fi".parse::<Orthography>(),
            Err(Error::UnsupportedOrthography("fi".to_string()))
        );
        assert!("9".parse::<Orthography>().is_err());
    }

    #[test]
    fn test_from_id_roundtrip() {
        for orthography in Orthography::ALL {
            assert_eq!(Orthography::from_id(orthography.id()), Some(orthography));
        }
        assert_eq!(Orthography::from_id(0), None);
    }

    #[test]
    fn test_russian_names() {
        assert_eq!(Orthography::Latvian.russian_name(), "Латвийский");
        assert_eq!(Orthography::Lithuanian.russian_name(), "Литовский");
        assert_eq!(Orthography::Polish.russian_name(), "Польский");
        assert_eq!(Orthography::Estonian.russian_name(), "Эстонский");

        assert_eq!("Польский".parse::<Orthography>().unwrap(), Orthography::Polish);
        assert_eq!("эстонский".parse::<Orthography>().unwrap(), Orthography::Estonian);
    }
}
