use std::collections::BTreeMap;
use std::fmt;

use crate::data::model::Comic;

// ---------------------------------------------------------------------------
// Descriptive statistics over the character-count series
// ---------------------------------------------------------------------------

/// Arithmetic mean. `None` for an empty series: the undefined case is made
/// explicit instead of letting a NaN propagate into the display.
pub fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Median over a sorted copy (numeric order, ascending). The input slice is
/// left untouched. An even-length series averages the two middle elements.
/// `None` for an empty series.
pub fn median(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        Some(f64::from(sorted[mid]))
    } else {
        Some((f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0)
    }
}

/// The most frequent value(s) of a series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Exactly one value attains the highest frequency.
    Single(u32),
    /// Several values tie; all of them, ascending.
    Multiple(Vec<u32>),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single(value) => write!(f, "{value}"),
            Mode::Multiple(values) => {
                let joined = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{joined}")
            }
        }
    }
}

/// Most frequent value(s). A tie returns every tied value in ascending
/// order, so the result is deterministic for a given input. `None` for an
/// empty series.
pub fn mode(values: &[u32]) -> Option<Mode> {
    if values.is_empty() {
        return None;
    }
    let mut frequency: BTreeMap<u32, usize> = BTreeMap::new();
    for &value in values {
        *frequency.entry(value).or_insert(0) += 1;
    }
    let max_freq = frequency.values().copied().max()?;
    let modes: Vec<u32> = frequency
        .iter()
        .filter(|&(_, &count)| count == max_freq)
        .map(|(&value, _)| value)
        .collect();

    if modes.len() == 1 {
        Some(Mode::Single(modes[0]))
    } else {
        Some(Mode::Multiple(modes))
    }
}

// ---------------------------------------------------------------------------
// StatsSummary – computed once per data load
// ---------------------------------------------------------------------------

/// Descriptive statistics over the eligible catalog.
///
/// Computed exactly once per data load over the full eligible set, never over
/// a filtered view. The `None`s are the documented empty-dataset result.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    /// Number of eligible comics.
    pub total: usize,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub mode: Option<Mode>,
}

impl StatsSummary {
    /// Summarize a character-count series.
    pub fn from_values(values: &[u32]) -> Self {
        StatsSummary {
            total: values.len(),
            mean: mean(values),
            median: median(values),
            mode: mode(values),
        }
    }
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Comics: {}", self.total)?;
        match self.mean {
            Some(mean) => writeln!(f, "Average Characters per Comic: {mean:.2}")?,
            None => writeln!(f, "Average Characters per Comic: n/a")?,
        }
        match self.median {
            Some(median) => writeln!(f, "Median Characters per Comic: {median}")?,
            None => writeln!(f, "Median Characters per Comic: n/a")?,
        }
        match &self.mode {
            Some(mode) => write!(f, "Mode Characters per Comic: {mode}"),
            None => write!(f, "Mode Characters per Comic: n/a"),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart series – data points handed to the charting collaborator
// ---------------------------------------------------------------------------

/// One chart point: a comic's title against its reported character count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub title: String,
    pub characters: u32,
}

/// Chart-ready series over the cleaned catalog (not the filtered view).
pub fn character_series(comics: &[Comic]) -> Vec<SeriesPoint> {
    comics
        .iter()
        .map(|comic| SeriesPoint {
            title: comic.title.clone(),
            characters: comic.characters.available,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_small_series() {
        assert_eq!(mean(&[3]), Some(3.0));
        assert_eq!(mean(&[1, 2, 3, 4]), Some(2.5));
    }

    #[test]
    fn empty_series_yields_none_not_a_panic() {
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(mode(&[]), None);
    }

    #[test]
    fn median_odd_takes_middle_even_averages() {
        assert_eq!(median(&[5, 1, 3]), Some(3.0));
        assert_eq!(median(&[4, 1, 3, 2]), Some(2.5));
    }

    #[test]
    fn median_sorts_numerically_not_lexicographically() {
        // Lexicographic order would put 10 before 2.
        assert_eq!(median(&[10, 2, 9]), Some(9.0));
    }

    #[test]
    fn median_is_permutation_invariant_and_leaves_input_alone() {
        let original = vec![5, 1, 4, 2, 3];
        let permutations: [&[u32]; 4] = [
            &[5, 1, 4, 2, 3],
            &[3, 2, 4, 1, 5],
            &[1, 2, 3, 4, 5],
            &[5, 4, 3, 2, 1],
        ];
        for perm in permutations {
            assert_eq!(median(perm), Some(3.0));
        }
        assert_eq!(median(&original), Some(3.0));
        assert_eq!(original, vec![5, 1, 4, 2, 3]);
    }

    #[test]
    fn mode_single_winner() {
        assert_eq!(mode(&[1, 1, 2]), Some(Mode::Single(1)));
    }

    #[test]
    fn mode_tie_returns_all_tied_values_ascending() {
        assert_eq!(mode(&[2, 2, 3, 3]), Some(Mode::Multiple(vec![2, 3])));
        // Insertion order must not leak into the result.
        assert_eq!(mode(&[3, 3, 2, 2]), Some(Mode::Multiple(vec![2, 3])));
    }

    #[test]
    fn mode_display_joins_ties_with_commas() {
        assert_eq!(Mode::Single(7).to_string(), "7");
        assert_eq!(Mode::Multiple(vec![2, 3]).to_string(), "2, 3");
    }

    #[test]
    fn summary_bundles_total_and_the_three_statistics() {
        let summary = StatsSummary::from_values(&[3]);
        assert_eq!(summary.total, 1);
        assert_eq!(summary.mean, Some(3.0));
        assert_eq!(summary.median, Some(3.0));
        assert_eq!(summary.mode, Some(Mode::Single(3)));
    }

    #[test]
    fn empty_summary_carries_the_sentinels() {
        let summary = StatsSummary::from_values(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.mean, None);
        assert_eq!(summary.median, None);
        assert_eq!(summary.mode, None);
        // Formatting the sentinels must not panic either.
        assert!(summary.to_string().contains("n/a"));
    }

    #[test]
    fn character_series_preserves_order_and_reports_available() {
        use crate::data::model::CharacterRoster;

        let comics = vec![
            Comic {
                id: 1,
                title: "First".to_string(),
                kind: "comic".to_string(),
                characters: CharacterRoster {
                    available: 4,
                    items: Vec::new(),
                },
                description: None,
                issue_number: 1.0,
                page_count: 32,
                prices: Vec::new(),
                thumbnail: None,
            },
            Comic {
                id: 2,
                title: "Second".to_string(),
                kind: "comic".to_string(),
                characters: CharacterRoster {
                    available: 1,
                    items: Vec::new(),
                },
                description: None,
                issue_number: 2.0,
                page_count: 32,
                prices: Vec::new(),
                thumbnail: None,
            },
        ];

        let series = character_series(&comics);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].title, "First");
        assert_eq!(series[0].characters, 4);
        assert_eq!(series[1].title, "Second");
        assert_eq!(series[1].characters, 1);
    }
}
