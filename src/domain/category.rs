//! Default category suggestions.
//!
//! The set is descriptive, not a validated domain: the ledger accepts any
//! category string, and front ends offer these as the default choices.

pub const DEFAULT_CATEGORIES: [&str; 10] = [
    "Alimentari",
    "Trasporti",
    "Casa",
    "Tempo libero",
    "Abbigliamento",
    "Salute",
    "Istruzione",
    "Lavoro",
    "Viaggi",
    "Altro",
];

/// Exact (case-sensitive) membership in the suggestion list.
pub fn is_default_category(name: &str) -> bool {
    DEFAULT_CATEGORIES.contains(&name)
}
