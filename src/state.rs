use anyhow::Result;

use crate::data::filter::{FilterCriteria, filter_eligible, filtered_indices};
use crate::data::model::{Catalog, Comic};
use crate::stats::StatsSummary;

// ---------------------------------------------------------------------------
// Aggregator state
// ---------------------------------------------------------------------------

/// Identifies one load request. Only the ticket from the most recent
/// [`CatalogState::begin_load`] is still live; a result delivered under an
/// older ticket is discarded (last write wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass the ticket to complete_load"]
pub struct LoadTicket(u64);

/// The full pipeline state, independent of any presentation layer.
///
/// One instance per session owns the cleaned catalog, the statistics summary
/// and the current criteria. Collaborators read snapshots through the
/// accessors; nothing hands out a mutable reference.
pub struct CatalogState {
    /// Cleaned catalog (None until a load succeeds).
    catalog: Option<Catalog>,

    /// Current user criteria; survive reloads.
    criteria: FilterCriteria,

    /// Indices of comics passing the current criteria (cached).
    visible_indices: Vec<usize>,

    /// Statistics over the full eligible set, recomputed once per load.
    stats: Option<StatsSummary>,

    /// Status / error message for the presentation layer.
    status_message: Option<String>,

    /// Whether a load is in flight.
    loading: bool,

    /// Generation of the most recent `begin_load`.
    load_generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            catalog: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            stats: None,
            status_message: None,
            loading: false,
            load_generation: 0,
        }
    }
}

impl CatalogState {
    // ---- Lifecycle -------------------------------------------------------

    /// Start a load. Any earlier in-flight load is superseded: its result
    /// will be discarded on delivery.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        self.loading = true;
        LoadTicket(self.load_generation)
    }

    /// Deliver the outcome of a load started with [`begin_load`]. Returns
    /// whether the result was applied.
    ///
    /// A stale ticket means a newer load superseded this one; its result is
    /// dropped unseen. On success the whole pipeline (inclusion filter →
    /// catalog indices → statistics → query filter) runs before `loading`
    /// clears, so consumers never observe a half-ingested load. On failure
    /// the previous catalog, statistics and criteria all stay intact.
    pub fn complete_load(&mut self, ticket: LoadTicket, outcome: Result<Vec<Comic>>) -> bool {
        if ticket.0 != self.load_generation {
            log::debug!(
                "discarding stale load result (ticket {}, current generation {})",
                ticket.0,
                self.load_generation
            );
            return false;
        }

        match outcome {
            Ok(raw) => {
                let catalog = Catalog::from_comics(filter_eligible(raw));
                self.stats = Some(StatsSummary::from_values(&catalog.character_counts()));
                self.visible_indices = filtered_indices(&catalog, &self.criteria);
                self.catalog = Some(catalog);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
        self.loading = false;
        true
    }

    /// Synchronous full replacement: [`begin_load`] + [`complete_load`] in
    /// one step. No merge semantics: the previous catalog is dropped.
    ///
    /// [`begin_load`]: CatalogState::begin_load
    /// [`complete_load`]: CatalogState::complete_load
    pub fn load(&mut self, raw: Vec<Comic>) {
        let ticket = self.begin_load();
        self.complete_load(ticket, Ok(raw));
    }

    // ---- Criteria --------------------------------------------------------

    /// Replace the criteria wholesale and recompute the visible set. The
    /// statistics are untouched; they describe the full eligible set.
    pub fn update_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.refilter();
    }

    /// Set the title search text. The observed input delivers one field per
    /// event, so each setter recomputes on its own.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.refilter();
    }

    /// Select a character; an empty name clears the constraint.
    pub fn set_character(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.criteria.character_name = if name.is_empty() { None } else { Some(name) };
        self.refilter();
    }

    /// Select a format tag; an empty tag clears the constraint.
    pub fn set_kind(&mut self, kind: impl Into<String>) {
        let kind = kind.into();
        self.criteria.kind = if kind.is_empty() { None } else { Some(kind) };
        self.refilter();
    }

    /// Recompute `visible_indices` from the stored catalog and criteria.
    fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.visible_indices = filtered_indices(catalog, &self.criteria);
        }
    }

    // ---- Read-only snapshots --------------------------------------------

    /// Cleaned catalog, if a load has succeeded.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Statistics over the full eligible set.
    pub fn stats(&self) -> Option<&StatsSummary> {
        self.stats.as_ref()
    }

    /// The criteria currently applied.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Indices into the catalog passing the current criteria.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    /// The comics passing the current criteria, in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &Comic> {
        let comics = self
            .catalog
            .as_ref()
            .map(|catalog| catalog.comics.as_slice())
            .unwrap_or(&[]);
        self.visible_indices.iter().map(move |&i| &comics[i])
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last load failure, if the most recent load did not succeed.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Character, CharacterRoster};
    use anyhow::anyhow;

    fn comic(id: u64, title: &str, available: u32, names: &[&str]) -> Comic {
        Comic {
            id,
            title: title.to_string(),
            kind: "comic".to_string(),
            characters: CharacterRoster {
                available,
                items: names
                    .iter()
                    .map(|name| Character {
                        id: 0,
                        name: name.to_string(),
                    })
                    .collect(),
            },
            description: None,
            issue_number: 1.0,
            page_count: 32,
            prices: Vec::new(),
            thumbnail: None,
        }
    }

    #[test]
    fn stale_ticket_is_discarded_and_newest_wins() {
        let mut state = CatalogState::default();

        let first = state.begin_load();
        let second = state.begin_load();

        // The newer request resolves first...
        assert!(state.complete_load(second, Ok(vec![comic(2, "New", 1, &[])])));
        // ...then the superseded one arrives and must be dropped.
        assert!(!state.complete_load(first, Ok(vec![comic(1, "Old", 1, &[])])));

        let titles: Vec<&str> = state.visible().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["New"]);
        assert!(!state.is_loading());
    }

    #[test]
    fn failed_load_keeps_previous_state_intact() {
        let mut state = CatalogState::default();
        state.load(vec![comic(1, "Kept", 2, &[])]);
        state.set_search_text("kept");

        let ticket = state.begin_load();
        assert!(state.is_loading());
        assert!(state.complete_load(ticket, Err(anyhow!("connection reset"))));

        assert!(!state.is_loading());
        assert_eq!(state.catalog().unwrap().len(), 1);
        assert_eq!(state.stats().unwrap().total, 1);
        assert_eq!(state.criteria().search_text, "kept");
        let message = state.status_message().unwrap();
        assert!(message.contains("connection reset"));
    }

    #[test]
    fn failure_before_any_load_stays_unloaded() {
        let mut state = CatalogState::default();
        let ticket = state.begin_load();
        state.complete_load(ticket, Err(anyhow!("timeout")));

        assert!(state.catalog().is_none());
        assert!(state.stats().is_none());
        assert!(state.status_message().is_some());
    }

    #[test]
    fn criteria_changes_never_touch_the_statistics() {
        let mut state = CatalogState::default();
        state.load(vec![comic(1, "A", 3, &["Storm"]), comic(2, "B", 5, &[])]);

        let before = state.stats().cloned().unwrap();
        state.set_search_text("a");
        state.set_character("Storm");
        state.update_criteria(FilterCriteria::default());
        let after = state.stats().cloned().unwrap();

        assert_eq!(before, after);
    }

    #[test]
    fn empty_setter_values_clear_their_constraint() {
        let mut state = CatalogState::default();
        state.load(vec![comic(1, "A", 1, &["Storm"])]);

        state.set_character("Storm");
        state.set_kind("comic");
        assert_eq!(state.visible().count(), 1);

        state.set_character("");
        state.set_kind("");
        assert_eq!(state.criteria().character_name, None);
        assert_eq!(state.criteria().kind, None);
        assert_eq!(state.visible().count(), 1);
    }

    #[test]
    fn successful_load_clears_an_earlier_failure_message() {
        let mut state = CatalogState::default();
        let ticket = state.begin_load();
        state.complete_load(ticket, Err(anyhow!("boom")));
        assert!(state.status_message().is_some());

        state.load(vec![comic(1, "A", 1, &[])]);
        assert!(state.status_message().is_none());
    }
}
