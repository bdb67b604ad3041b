use crate::color::ProviderColors;
use crate::data::model::{Dataset, Release};
use crate::data::stats::{summarize, ViewStats};
use crate::data::view::{build_view, provider_options, SortCriterion, ALL_PROVIDERS};
use crate::export::ExportFormat;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.  The dataset is immutable
/// for the session; `view` is re-derived whenever filter or sort change.
pub struct AppState {
    /// Loaded dataset (None until a load succeeds).
    pub dataset: Option<Dataset>,

    /// Filter selector options: "all" plus distinct providers.
    pub provider_options: Vec<String>,

    /// Current provider selector.
    pub provider_filter: String,

    /// Current sort criterion.
    pub sort: SortCriterion,

    /// Format the next export will use.
    pub export_format: ExportFormat,

    /// Id of the single expanded release, if any.  Transient; cleared on
    /// reload.
    pub selected: Option<String>,

    /// Indices of releases in the current view, filtered and sorted (cached).
    pub view: Vec<usize>,

    /// Summary statistics over the current view.
    pub stats: ViewStats,

    /// Badge colours per provider.
    pub provider_colors: Option<ProviderColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a load operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            provider_options: Vec::new(),
            provider_filter: ALL_PROVIDERS.to_string(),
            sort: SortCriterion::DateAsc,
            export_format: ExportFormat::Json,
            selected: None,
            view: Vec::new(),
            stats: ViewStats::default(),
            provider_colors: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset filter, selection, and colours,
    /// then derive the initial view.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.provider_options = provider_options(&dataset);
        self.provider_filter = ALL_PROVIDERS.to_string();
        self.selected = None;
        self.provider_colors = Some(ProviderColors::new(&self.provider_options[1..]));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.rebuild_view();
    }

    /// Re-derive the view and its statistics from the current filter and
    /// sort.
    pub fn rebuild_view(&mut self) {
        if let Some(ds) = &self.dataset {
            self.view = build_view(ds, &self.provider_filter, self.sort);
            self.stats = summarize(ds, &self.view);
        } else {
            self.view.clear();
            self.stats = ViewStats::default();
        }
    }

    pub fn set_provider_filter(&mut self, provider: String) {
        self.provider_filter = provider;
        self.rebuild_view();
    }

    pub fn set_sort(&mut self, criterion: SortCriterion) {
        self.sort = criterion;
        self.rebuild_view();
    }

    /// Expand a release's detail card, or collapse it when it is already
    /// the expanded one.  At most one card is expanded at a time.
    pub fn toggle_selected(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
    }

    /// Releases of the current view, in view order.
    pub fn view_releases(&self) -> Vec<&Release> {
        match &self.dataset {
            Some(ds) => self.view.iter().map(|&i| &ds.releases[i]).collect(),
            None => Vec::new(),
        }
    }
}
