use indexmap::IndexMap;

use crate::color::CategoryColors;
use crate::contribute::{ContributionDraft, ContributionKind, Submission, SubmitError};
use crate::data::filter::{FilterState, filter_indices, group_by_category, search_indices};
use crate::data::loader::DataSource;
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// Top-level navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Algorithms,
    Packages,
    Contribute,
    About,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Overview,
        Section::Algorithms,
        Section::Packages,
        Section::Contribute,
        Section::About,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Algorithms => "Algorithms",
            Section::Packages => "Packages",
            Section::Contribute => "Contribute",
            Section::About => "About",
        }
    }
}

// ---------------------------------------------------------------------------
// Contribution workflow state
// ---------------------------------------------------------------------------

/// State of the contribution workflow on the Contribute section.
#[derive(Debug, Default)]
pub struct ContributeState {
    /// The open form, if any. Holds every typed field value.
    pub active: Option<ContributionDraft>,
    /// A submission worker is running; inputs are disabled meanwhile.
    pub submitting: bool,
    /// Last accepted submission, shown in the success modal until closed.
    pub submitted: Option<Submission>,
    /// Last rejection, shown in the error modal. The draft stays in
    /// `active` so a retry needs no re-typing.
    pub error: Option<SubmitError>,
}

impl ContributeState {
    /// Open a blank form of the given kind, discarding any previous draft.
    pub fn open(&mut self, kind: ContributionKind) {
        self.active = Some(ContributionDraft::empty(kind));
        self.error = None;
    }

    /// Close the form and drop its draft.
    pub fn close(&mut self) {
        self.active = None;
        self.error = None;
    }

    /// Record an accepted submission: the form closes and resets.
    pub fn finish_success(&mut self, submission: Submission) {
        self.submitting = false;
        self.submitted = Some(submission);
        self.active = None;
        self.error = None;
    }

    /// Record a rejected submission, keeping the draft for a retry.
    pub fn finish_failure(&mut self, error: SubmitError) {
        self.submitting = false;
        self.error = Some(error);
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Where the catalog documents come from.
    pub source: DataSource,

    /// Loaded catalog (None until the startup fetch resolves, and forever on
    /// a failed load).
    pub catalog: Option<Catalog>,

    /// A catalog fetch is in flight.
    pub loading: bool,

    /// Fatal load failure, rendered as a dismissible banner.
    pub error_banner: Option<String>,

    /// Active navigation section.
    pub section: Section,

    /// Current query and dropdown selections.
    pub filters: FilterState,

    /// Candidate set after the most recent search, before dropdown filters.
    searched_indices: Vec<usize>,

    /// Indices of algorithms passing search and filters (cached).
    pub visible_indices: Vec<usize>,

    /// Per-category badge and chart colours.
    pub colors: CategoryColors,

    /// Algorithm whose detail modal is open.
    pub detail: Option<usize>,

    /// Algorithm whose example modal is open.
    pub example: Option<usize>,

    /// Contribution workflow.
    pub contribute: ContributeState,
}

impl AppState {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            catalog: None,
            loading: true,
            error_banner: None,
            section: Section::Overview,
            filters: FilterState::default(),
            searched_indices: Vec::new(),
            visible_indices: Vec::new(),
            colors: CategoryColors::default(),
            detail: None,
            example: None,
            contribute: ContributeState::default(),
        }
    }

    /// Ingest the loaded catalog and reset every view to its defaults.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.colors = CategoryColors::new(&catalog.categories);
        self.filters = FilterState::default();
        self.searched_indices = (0..catalog.len()).collect();
        self.visible_indices = self.searched_indices.clone();
        self.detail = None;
        self.example = None;
        self.catalog = Some(catalog);
        self.loading = false;
        self.error_banner = None;
    }

    /// Record a fatal load failure. Grids never render without a catalog.
    pub fn set_load_failed(&mut self, message: String) {
        self.loading = false;
        self.catalog = None;
        self.visible_indices.clear();
        self.searched_indices.clear();
        self.error_banner = Some(message);
    }

    /// Mark a reload as started.
    pub fn begin_reload(&mut self) {
        self.loading = true;
        self.error_banner = None;
    }

    /// Run a new search: the candidate baseline is rebuilt from the full
    /// list, then the current dropdown filters are re-applied.
    pub fn set_query(&mut self, query: String) {
        self.filters.query = query;
        if let Some(catalog) = &self.catalog {
            self.searched_indices = search_indices(catalog, &self.filters.query);
        }
        self.refilter();
    }

    /// Change the category dropdown. Narrows the last search result only.
    pub fn set_category(&mut self, category: Option<String>) {
        self.filters.category = category;
        self.refilter();
    }

    /// Change the package dropdown. Narrows the last search result only.
    pub fn set_package(&mut self, package: Option<String>) {
        self.filters.package = package;
        self.refilter();
    }

    /// Clear the query and both dropdowns, restoring the full grid.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        if let Some(catalog) = &self.catalog {
            self.searched_indices = (0..catalog.len()).collect();
        }
        self.refilter();
    }

    fn refilter(&mut self) {
        if let Some(catalog) = &self.catalog {
            self.visible_indices = filter_indices(
                catalog,
                &self.searched_indices,
                self.filters.category.as_deref(),
                self.filters.package.as_deref(),
            );
        }
    }

    /// Visible records grouped per category, in first-seen order.
    pub fn grouped(&self) -> IndexMap<String, Vec<usize>> {
        match &self.catalog {
            Some(catalog) => group_by_category(catalog, &self.visible_indices),
            None => IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AlgorithmRecord, PackageRef};

    fn record(name: &str, category: &str, package: &str) -> AlgorithmRecord {
        AlgorithmRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            packages: vec![PackageRef {
                name: package.to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn state_with_catalog() -> AppState {
        let mut state = AppState::new(DataSource::Remote {
            base_url: "https://example.test/data".to_string(),
        });
        state.set_catalog(Catalog::from_records(
            vec![
                record("NUTS", "hmc", "rstanarm"),
                record("HMC", "hmc", "rstan"),
                record("Gibbs", "gibbs-sampler", "MCMCglmm"),
                record("Metropolis", "non-adaptive-metropolis-hastings", "MCMCpack"),
            ],
            Vec::new(),
        ));
        state
    }

    #[test]
    fn ingesting_a_catalog_shows_everything() {
        let state = state_with_catalog();
        assert!(!state.loading);
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn a_new_search_rebuilds_the_baseline_then_reapplies_filters() {
        let mut state = state_with_catalog();

        state.set_category(Some("hmc".to_string()));
        assert_eq!(state.visible_indices, vec![0, 1]);

        // The search rebuilds the baseline from the full list, then the
        // category filter narrows it again.
        state.set_query("nuts".to_string());
        assert_eq!(state.visible_indices, vec![0]);

        // Searching for something outside the filtered category yields the
        // empty state, not a stale grid.
        state.set_query("gibbs".to_string());
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn filter_changes_narrow_the_last_search_result() {
        let mut state = state_with_catalog();

        state.set_query("m".to_string());
        let after_search = state.visible_indices.clone();

        state.set_package(Some("MCMCpack".to_string()));
        assert!(state.visible_indices.iter().all(|i| after_search.contains(i)));
        assert_eq!(state.visible_indices, vec![3]);

        // Deselecting restores the search result, not the full list.
        state.set_package(None);
        assert_eq!(state.visible_indices, after_search);
    }

    #[test]
    fn clearing_filters_restores_the_full_grid() {
        let mut state = state_with_catalog();
        state.set_query("nuts".to_string());
        state.set_category(Some("hmc".to_string()));
        state.clear_filters();
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
        assert!(!state.filters.is_active());
    }

    #[test]
    fn load_failure_leaves_no_catalog_and_raises_the_banner() {
        let mut state = AppState::new(DataSource::Remote {
            base_url: "https://example.test/data".to_string(),
        });
        state.set_load_failed("GET https://example.test/data/algorithms.json returned 404".into());
        assert!(state.catalog.is_none());
        assert!(state.error_banner.is_some());
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn failed_submission_keeps_the_draft_for_retry() {
        let mut contribute = ContributeState::default();
        contribute.open(ContributionKind::Algorithm);

        if let Some(ContributionDraft::Algorithm(draft)) = contribute.active.as_mut() {
            draft.name = "Zig-Zag".to_string();
            draft.contributor = "Ada".to_string();
        } else {
            panic!("expected an algorithm draft");
        }
        let filled = contribute.active.clone();

        contribute.submitting = true;
        contribute.finish_failure(SubmitError::InvalidRepo("bad repo".to_string()));

        assert!(!contribute.submitting);
        assert!(contribute.error.is_some());
        assert_eq!(contribute.active, filled);
    }

    #[test]
    fn successful_submission_resets_the_form() {
        let mut contribute = ContributeState::default();
        contribute.open(ContributionKind::Package);
        contribute.submitting = true;
        contribute.finish_success(Submission {
            kind: ContributionKind::Package,
            url: "https://github.com/mcmcatlas/mcmcatlas/issues/new?title=x".to_string(),
        });
        assert!(contribute.active.is_none());
        assert!(contribute.submitted.is_some());
        assert!(contribute.error.is_none());
    }
}
