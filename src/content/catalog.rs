//! Language and proficiency catalog
//!
//! The list of learnable languages with their display metadata, plus the
//! proficiency levels offered during onboarding. Search over the catalog
//! backs the language-selection screen.

/// Difficulty rating shown on language cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Human-readable label for the difficulty badge
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// A learnable language entry in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Stable identifier used in config and history records
    pub id: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub flag: &'static str,
    /// Approximate speaker count, display-only
    pub speakers: &'static str,
    pub difficulty: Difficulty,
    pub region: &'static str,
}

/// All languages offered by the app
pub const LANGUAGES: &[Language] = &[
    Language {
        id: "swahili",
        name: "Swahili",
        native_name: "Kiswahili",
        flag: "🇰🇪",
        speakers: "200M+",
        difficulty: Difficulty::Beginner,
        region: "East Africa",
    },
    Language {
        id: "yoruba",
        name: "Yoruba",
        native_name: "Èdè Yorùbá",
        flag: "🇳🇬",
        speakers: "45M+",
        difficulty: Difficulty::Intermediate,
        region: "West Africa",
    },
    Language {
        id: "zulu",
        name: "Zulu",
        native_name: "isiZulu",
        flag: "🇿🇦",
        speakers: "27M+",
        difficulty: Difficulty::Intermediate,
        region: "Southern Africa",
    },
    Language {
        id: "amharic",
        name: "Amharic",
        native_name: "አማርኛ",
        flag: "🇪🇹",
        speakers: "57M+",
        difficulty: Difficulty::Advanced,
        region: "East Africa",
    },
    Language {
        id: "hausa",
        name: "Hausa",
        native_name: "Harshen Hausa",
        flag: "🇳🇬",
        speakers: "77M+",
        difficulty: Difficulty::Beginner,
        region: "West Africa",
    },
    Language {
        id: "igbo",
        name: "Igbo",
        native_name: "Asụsụ Igbo",
        flag: "🇳🇬",
        speakers: "44M+",
        difficulty: Difficulty::Intermediate,
        region: "West Africa",
    },
    Language {
        id: "oromo",
        name: "Oromo",
        native_name: "Afaan Oromoo",
        flag: "🇪🇹",
        speakers: "37M+",
        difficulty: Difficulty::Intermediate,
        region: "East Africa",
    },
    Language {
        id: "shona",
        name: "Shona",
        native_name: "chiShona",
        flag: "🇿🇼",
        speakers: "14M+",
        difficulty: Difficulty::Beginner,
        region: "Southern Africa",
    },
    Language {
        id: "somali",
        name: "Somali",
        native_name: "Af-Soomaali",
        flag: "🇸🇴",
        speakers: "21M+",
        difficulty: Difficulty::Intermediate,
        region: "East Africa",
    },
    Language {
        id: "xhosa",
        name: "Xhosa",
        native_name: "isiXhosa",
        flag: "🇿🇦",
        speakers: "19M+",
        difficulty: Difficulty::Advanced,
        region: "Southern Africa",
    },
    Language {
        id: "tigrinya",
        name: "Tigrinya",
        native_name: "ትግርኛ",
        flag: "🇪🇷",
        speakers: "9M+",
        difficulty: Difficulty::Advanced,
        region: "East Africa",
    },
    Language {
        id: "akan",
        name: "Akan",
        native_name: "Akan",
        flag: "🇬🇭",
        speakers: "11M+",
        difficulty: Difficulty::Beginner,
        region: "West Africa",
    },
];

/// Look up a language by its stable id
pub fn find(id: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.id == id)
}

/// Filter the catalog by a case-insensitive substring of the name,
/// native name, or region
///
/// # Examples
/// ```
/// use lingafriq::content::catalog::search;
///
/// let hits = search("zu");
/// assert!(hits.iter().any(|l| l.name == "Zulu"));
/// assert!(search("qqq").is_empty());
/// ```
pub fn search(query: &str) -> Vec<&'static Language> {
    let needle = query.to_lowercase();
    LANGUAGES
        .iter()
        .filter(|l| {
            l.name.to_lowercase().contains(&needle)
                || l.native_name.to_lowercase().contains(&needle)
                || l.region.to_lowercase().contains(&needle)
        })
        .collect()
}

/// A proficiency level offered after choosing a language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProficiencyLevel {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

/// Proficiency levels in ascending order
pub const PROFICIENCY_LEVELS: &[ProficiencyLevel] = &[
    ProficiencyLevel {
        id: "beginner",
        title: "Beginner",
        description: "I'm new to this language",
        features: &[
            "Start from the basics",
            "Learn alphabet and pronunciation",
            "Basic vocabulary and phrases",
            "Guided lessons with lots of support",
        ],
    },
    ProficiencyLevel {
        id: "intermediate",
        title: "Intermediate",
        description: "I know some basics already",
        features: &[
            "Build on existing knowledge",
            "Expand vocabulary significantly",
            "Practice conversations",
            "Learn grammar rules and structures",
        ],
    },
    ProficiencyLevel {
        id: "expert",
        title: "Expert",
        description: "I want to achieve fluency",
        features: &[
            "Advanced lessons and content",
            "Master complex grammar",
            "Cultural nuances and idioms",
            "Read and discuss literature",
        ],
    },
];

/// Look up a proficiency level by id
pub fn find_level(id: &str) -> Option<&'static ProficiencyLevel> {
    PROFICIENCY_LEVELS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_by_id() {
        let swahili = find("swahili").expect("swahili should be in the catalog");
        assert_eq!(swahili.name, "Swahili");
        assert!(find("klingon").is_none());
    }

    #[test]
    fn test_search_matches_name_native_name_and_region() {
        // "zu" matches both the name "Zulu" and the native name "isiZulu"
        let hits = search("zu");
        let names: Vec<&str> = hits.iter().map(|l| l.name).collect();
        assert!(names.contains(&"Zulu"));
        assert!(!names.contains(&"Swahili"));

        // Region matches
        let west = search("west africa");
        assert!(west.iter().all(|l| l.region == "West Africa"));
        assert!(west.iter().any(|l| l.name == "Yoruba"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(search("ZULU").len(), search("zulu").len());
        assert!(!search("ZULU").is_empty());
    }

    #[test]
    fn test_search_nonsense_query_matches_nothing() {
        assert!(search("qqq").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(search("").len(), LANGUAGES.len());
    }

    #[test]
    fn test_proficiency_levels() {
        assert_eq!(PROFICIENCY_LEVELS.len(), 3);
        assert_eq!(find_level("beginner").unwrap().title, "Beginner");
        assert!(find_level("wizard").is_none());
    }
}
