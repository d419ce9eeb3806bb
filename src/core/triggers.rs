use std::collections::BTreeSet;

/// Clinical terms whose presence in a patient's notes counts as a risk indicator
///
/// Stored lowercase. `vertiges` is listed twice; matches are collected into a
/// set so the duplicate never counts twice.
pub const TRIGGER_TERMS: [&str; 15] = [
    "hémoglobine a1c",
    "microalbumine",
    "taille",
    "poids",
    "fumeur",
    "fumeuse",
    "fumer",
    "anormal",
    "cholestérol",
    "vertiges",
    "vertiges",
    "rechute",
    "réaction",
    "réactions",
    "anticorps",
];

/// Find the distinct trigger terms present anywhere in the given note texts
///
/// Null texts are skipped, the rest are joined with a space and lowercased
/// once. Matching is plain substring containment, so `fumeur` is found
/// inside `fumeurs`.
pub fn find_triggers<'a, I>(texts: I) -> BTreeSet<&'static str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let combined = texts
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if combined.trim().is_empty() {
        return BTreeSet::new();
    }

    let found: BTreeSet<&'static str> = TRIGGER_TERMS
        .iter()
        .copied()
        .filter(|term| combined.contains(term))
        .collect();

    tracing::debug!("Triggers found: {:?}", found);

    found
}

/// Number of distinct trigger terms present in the given note texts
#[inline]
pub fn count_triggers<'a, I>(texts: I) -> usize
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    find_triggers(texts).len()
}
