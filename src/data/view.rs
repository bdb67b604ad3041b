use std::cmp::{Ordering, Reverse};

use chrono::NaiveDate;
use unicode_normalization::UnicodeNormalization;

use super::model::{Dataset, Release};

/// Wildcard provider selector: show every release.
pub const ALL_PROVIDERS: &str = "all";

// ---------------------------------------------------------------------------
// Sort criteria
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    DateAsc,
    DateDesc,
    Name,
    ParamsDesc,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::DateAsc,
        SortCriterion::DateDesc,
        SortCriterion::Name,
        SortCriterion::ParamsDesc,
    ];

    /// Label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::DateAsc => "Oldest First",
            SortCriterion::DateDesc => "Newest First",
            SortCriterion::Name => "Name",
            SortCriterion::ParamsDesc => "Parameters (Largest)",
        }
    }
}

// ---------------------------------------------------------------------------
// Provider options
// ---------------------------------------------------------------------------

/// Distinct providers sorted ascending (case-sensitive), with the leading
/// "all" wildcard.  Recomputed whenever the dataset changes.
pub fn provider_options(dataset: &Dataset) -> Vec<String> {
    let mut providers: Vec<String> = dataset
        .releases
        .iter()
        .map(|r| r.provider.clone())
        .collect();
    providers.sort();
    providers.dedup();

    let mut options = Vec::with_capacity(providers.len() + 1);
    options.push(ALL_PROVIDERS.to_string());
    options.extend(providers);
    options
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Indices of releases matching the provider selector, in source order.
/// `"all"` selects everything.
pub fn filter_by_provider(dataset: &Dataset, provider: &str) -> Vec<usize> {
    dataset
        .releases
        .iter()
        .enumerate()
        .filter(|(_, r)| provider == ALL_PROVIDERS || r.provider == provider)
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Reorder view indices in place.  All sorts are stable so equal keys keep
/// their relative source order.
pub fn sort_view(dataset: &Dataset, indices: &mut [usize], criterion: SortCriterion) {
    let releases = &dataset.releases;
    match criterion {
        SortCriterion::DateAsc => {
            // Unparseable dates rank lowest (None < Some).
            indices.sort_by_key(|&i| date_key(&releases[i]));
        }
        SortCriterion::DateDesc => {
            indices.sort_by_key(|&i| Reverse(date_key(&releases[i])));
        }
        SortCriterion::Name => {
            indices.sort_by(|&a, &b| compare_names(&releases[a], &releases[b]));
        }
        SortCriterion::ParamsDesc => {
            indices.sort_by(|&a, &b| {
                param_magnitude(releases[b].parameters.as_deref())
                    .total_cmp(&param_magnitude(releases[a].parameters.as_deref()))
            });
        }
    }
}

/// Filter then sort: the complete view derivation.  Pure, so identical
/// arguments always reproduce the same index sequence.
pub fn build_view(dataset: &Dataset, provider: &str, criterion: SortCriterion) -> Vec<usize> {
    let mut indices = filter_by_provider(dataset, provider);
    sort_view(dataset, &mut indices, criterion);
    indices
}

fn date_key(release: &Release) -> Option<NaiveDate> {
    release.parsed_date()
}

fn compare_names(a: &Release, b: &Release) -> Ordering {
    name_sort_key(&a.name)
        .cmp(&name_sort_key(&b.name))
        .then_with(|| a.name.cmp(&b.name))
}

/// Collation key: NFD-normalize then lowercase, so accented and mixed-case
/// names order the way a locale-aware compare would.
fn name_sort_key(name: &str) -> String {
    name.nfd().collect::<String>().to_lowercase()
}

// ---------------------------------------------------------------------------
// Parameter magnitude
// ---------------------------------------------------------------------------

/// Normalized parameter magnitude in billions: "1.8T" → 1800, "175B" → 175,
/// "350M" → 0.35.  Missing values and unrecognized units rank lowest at 0.
/// Intentionally lossy; reproduced exactly for export/sort compatibility.
pub fn param_magnitude(parameters: Option<&str>) -> f64 {
    let Some(raw) = parameters else {
        return 0.0;
    };
    let trimmed = raw.trim();
    let numeric: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let Ok(value) = numeric.parse::<f64>() else {
        return 0.0;
    };
    match trimmed[numeric.len()..].trim_start().chars().next() {
        Some('T') => value * 1000.0,
        Some('B') => value,
        Some('M') => value / 1000.0,
        _ => 0.0,
    }
}
