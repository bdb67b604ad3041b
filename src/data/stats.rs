use std::collections::BTreeSet;

use super::model::Dataset;

// ---------------------------------------------------------------------------
// View summary statistics
// ---------------------------------------------------------------------------

/// Summary counts over the current view, shown in the stats bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewStats {
    /// Releases in the view.
    pub count: usize,
    /// Distinct providers in the view.
    pub provider_count: usize,
    /// Distinct modality tags across the view, flattened.
    pub modality_count: usize,
}

/// Compute summary statistics for a view.  Pure and O(n); recomputed on
/// every view change.
pub fn summarize(dataset: &Dataset, view: &[usize]) -> ViewStats {
    let mut providers: BTreeSet<&str> = BTreeSet::new();
    let mut modalities: BTreeSet<&str> = BTreeSet::new();

    for &idx in view {
        let release = &dataset.releases[idx];
        providers.insert(release.provider.as_str());
        for tag in release.modality_tags() {
            modalities.insert(tag.as_str());
        }
    }

    ViewStats {
        count: view.len(),
        provider_count: providers.len(),
        modality_count: modalities.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Release;

    fn release(id: &str, provider: &str, modality: Option<&[&str]>) -> Release {
        Release {
            id: id.to_string(),
            name: id.to_string(),
            provider: provider.to_string(),
            release_date: "2020-01-01".to_string(),
            modality: modality.map(|tags| tags.iter().map(|t| t.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn counts_distinct_providers_and_flattened_modalities() {
        let dataset = Dataset {
            releases: vec![
                release("a", "OpenAI", Some(&["text", "image"])),
                release("b", "OpenAI", Some(&["text"])),
                release("c", "Google", Some(&["text"])),
                release("d", "Anthropic", Some(&["text"])),
                release("e", "Google", None),
            ],
            metadata: serde_json::Map::new(),
        };
        let view: Vec<usize> = (0..dataset.len()).collect();

        let stats = summarize(&dataset, &view);
        assert_eq!(stats.count, 5);
        assert_eq!(stats.provider_count, 3);
        assert_eq!(stats.modality_count, 2);
    }

    #[test]
    fn empty_view_yields_zero_counts() {
        let dataset = Dataset {
            releases: vec![release("a", "OpenAI", Some(&["text"]))],
            metadata: serde_json::Map::new(),
        };
        assert_eq!(summarize(&dataset, &[]), ViewStats::default());
    }
}
