use super::model::{Catalog, Comic};

// ---------------------------------------------------------------------------
// Inclusion filter – baseline rules applied once per raw load
// ---------------------------------------------------------------------------

/// Placeholder entry the upstream ships without real content. Excluded by
/// exact, case-sensitive title match.
pub const PLACEHOLDER_TITLE: &str = "Marvel Previews (2017)";

/// Keep only comics that pass the baseline rules:
/// * at least one associated character (`characters.available >= 1`)
/// * not the known placeholder entry
///
/// Order-preserving, no side effects, empty in → empty out. Runs exactly once
/// per raw load; statistics and query filtering only ever see its output.
pub fn filter_eligible(raw: Vec<Comic>) -> Vec<Comic> {
    raw.into_iter()
        .filter(|comic| comic.characters.available >= 1 && comic.title != PLACEHOLDER_TITLE)
        .collect()
}

// ---------------------------------------------------------------------------
// Query filter – user-adjustable criteria over the cleaned catalog
// ---------------------------------------------------------------------------

/// The current user-chosen constraints.
///
/// Each field constrains independently and an unset field passes everything,
/// so the default value matches the whole catalog. `None` is "no constraint";
/// a value referencing nothing in the catalog is not an error, it just
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the title.
    pub search_text: String,
    /// Exact match against any *listed* character name (the roster subset,
    /// not the `available` count).
    pub character_name: Option<String>,
    /// Exact match against the format tag.
    pub kind: Option<String>,
}

/// Whether one comic passes the criteria (logical AND of the three clauses).
pub fn matches(comic: &Comic, criteria: &FilterCriteria) -> bool {
    let title_ok = comic
        .title
        .to_lowercase()
        .contains(&criteria.search_text.to_lowercase());

    let character_ok = match &criteria.character_name {
        Some(name) => comic
            .characters
            .items
            .iter()
            .any(|character| character.name == *name),
        None => true,
    };

    let kind_ok = match &criteria.kind {
        Some(kind) => comic.kind == *kind,
        None => true,
    };

    title_ok && character_ok && kind_ok
}

/// Return indices of comics that pass the current criteria.
///
/// Always evaluated against the full cleaned catalog, never against a
/// previously filtered subset; the result preserves catalog order.
pub fn filtered_indices(catalog: &Catalog, criteria: &FilterCriteria) -> Vec<usize> {
    catalog
        .comics
        .iter()
        .enumerate()
        .filter(|(_, comic)| matches(comic, criteria))
        .map(|(i, _)| i)
        .collect()
}
