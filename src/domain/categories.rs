/// Broad grouping of institutions, used for the task icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Vehicle,
    Tax,
    Council,
    Health,
    Utilities,
    Finance,
    Civic,
    Lifestyle,
    General,
}

/// Checked in order; the first key that matches wins. A key matches an id
/// that equals it or starts with `<key>-`.
const CATEGORY_RULES: &[(&str, Category)] = &[
    ("dvla", Category::Vehicle),
    ("hmrc", Category::Tax),
    ("council", Category::Council),
    ("gp", Category::Health),
    ("dentist", Category::Health),
    ("nhs", Category::Health),
    ("utilities", Category::Utilities),
    ("tv", Category::Utilities),
    ("bank", Category::Finance),
    ("voter", Category::Civic),
    ("clubs", Category::Lifestyle),
    ("gym", Category::Lifestyle),
];

impl Category {
    pub fn for_institution(id: &str) -> Category {
        CATEGORY_RULES
            .iter()
            .find(|(key, _)| {
                id == *key
                    || id
                        .strip_prefix(key)
                        .is_some_and(|rest| rest.starts_with('-'))
            })
            .map(|(_, c)| *c)
            .unwrap_or(Category::General)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Vehicle => "🚗",
            Category::Tax => "🏛",
            Category::Council => "🏢",
            Category::Health => "🩺",
            Category::Utilities => "⚡",
            Category::Finance => "💷",
            Category::Civic => "🗳",
            Category::Lifestyle => "👥",
            Category::General => "📌",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Vehicle => "Vehicle",
            Category::Tax => "Tax",
            Category::Council => "Council",
            Category::Health => "Health",
            Category::Utilities => "Utilities",
            Category::Finance => "Finance",
            Category::Civic => "Civic",
            Category::Lifestyle => "Lifestyle",
            Category::General => "General",
        }
    }
}
