//! Keyword-based category classification.

use crate::models::expense::Category;

/// Keyword table, tested in order; the first category with a keyword hit
/// wins. Matching is case-insensitive and unanchored: OCR output is too
/// noisy for clean word tokenization, so a keyword inside a larger word
/// still counts. The occasional false positive is the accepted cost.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "edeka",
            "rewe",
            "aldi",
            "lidl",
            "kaufland",
            "bäcker",
            "cafe",
            "restaurant",
            "imbiss",
            "essen",
            "snack",
        ],
    ),
    (
        Category::Transport,
        &[
            "bahn", "db", "ticket", "ubahn", "bus", "fahrkarte", "taxi", "moia", "vbb",
        ],
    ),
    (
        Category::Shopping,
        &[
            "h&m",
            "zara",
            "primark",
            "dm",
            "rossmann",
            "media markt",
            "saturn",
            "elektronik",
            "kleidung",
        ],
    ),
    (
        Category::Health,
        &[
            "apotheke",
            "arzt",
            "praxis",
            "rezept",
            "medikament",
            "gesundheit",
            "zahnarzt",
        ],
    ),
];

/// Classify receipt text into a category. Total function: falls back to
/// [`Category::Other`] when no keyword matches.
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return *category;
        }
    }

    Category::Other
}
