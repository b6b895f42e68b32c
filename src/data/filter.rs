use indexmap::IndexMap;

use super::model::Catalog;

// ---------------------------------------------------------------------------
// FilterState – the query plus the two dropdown selections
// ---------------------------------------------------------------------------

/// The current query/category/package selection driving the algorithm grid.
///
/// Replaced on every input event; never persisted. An empty query and `None`
/// selections mean "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, possibly empty.
    pub query: String,
    /// Selected category key, `None` = all categories.
    pub category: Option<String>,
    /// Selected package name, `None` = all packages.
    pub package: Option<String>,
}

impl FilterState {
    /// Whether any axis narrows the grid at all.
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty() || self.category.is_some() || self.package.is_some()
    }
}

// ---------------------------------------------------------------------------
// Search: query → candidate set
// ---------------------------------------------------------------------------

/// Indices of algorithms matching the free-text query.
///
/// The query is trimmed and lowercased. An empty query restores the full
/// list as the candidate set. A record matches when the query is a
/// case-insensitive substring of its name, its description, any tag, or any
/// referenced package name. Source order is preserved; there is no ranking.
pub fn search_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..catalog.algorithms.len()).collect();
    }
    catalog
        .algorithms
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.matches_query(&needle))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Filter: dropdown selections narrow the candidate set
// ---------------------------------------------------------------------------

/// Restrict `candidates` to records whose category equals `category` (if
/// set) and whose package list contains `package` (if set). Both predicates
/// are conjunctive; a `None` selection leaves that axis unconstrained.
///
/// Filtering is idempotent and the two predicates commute; only a new search
/// resets the candidate baseline.
pub fn filter_indices(
    catalog: &Catalog,
    candidates: &[usize],
    category: Option<&str>,
    package: Option<&str>,
) -> Vec<usize> {
    candidates
        .iter()
        .copied()
        .filter(|&i| {
            let rec = &catalog.algorithms[i];
            category.is_none_or(|c| rec.category == c)
                && package.is_none_or(|p| rec.uses_package(p))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Grouping: visible records → per-category rows
// ---------------------------------------------------------------------------

/// Partition `indices` into per-category groups.
///
/// The returned map iterates in insertion order of first occurrence, and
/// within a group the original relative order is preserved; the grid renders
/// categories in the order the data first mentions them.
pub fn group_by_category(catalog: &Catalog, indices: &[usize]) -> IndexMap<String, Vec<usize>> {
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
    for &i in indices {
        groups
            .entry(catalog.algorithms[i].category.clone())
            .or_default()
            .push(i);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{AlgorithmRecord, PackageRef};

    fn record(
        name: &str,
        category: &str,
        description: &str,
        tags: &[&str],
        packages: &[&str],
    ) -> AlgorithmRecord {
        AlgorithmRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            packages: packages
                .iter()
                .map(|p| PackageRef {
                    name: p.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    /// Mixed fixture. Record 3 ("Block Gibbs") deliberately contains no `h`
    /// in any searched field.
    fn fixture() -> Catalog {
        Catalog::from_records(
            vec![
                record(
                    "NUTS",
                    "hmc",
                    "Adaptive Hamiltonian sampler tuning its own path length",
                    &["gradient", "adaptive"],
                    &["rstanarm"],
                ),
                record(
                    "HMC",
                    "hmc",
                    "Leapfrog integration of auxiliary momentum dynamics",
                    &["gradient"],
                    &["rstan"],
                ),
                record(
                    "Block Gibbs",
                    "gibbs-sampler",
                    "Samples parameter blocks in turn from full conditionals",
                    &["conditional"],
                    &["MCMCglmm", "coda"],
                ),
                record(
                    "Random-walk Metropolis",
                    "non-adaptive-metropolis-hastings",
                    "Fixed Gaussian proposal accepted by likelihood ratio",
                    &["proposal"],
                    &["MCMCpack", "coda"],
                ),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn empty_query_restores_full_candidate_set() {
        let catalog = fixture();
        assert_eq!(search_indices(&catalog, ""), vec![0, 1, 2, 3]);
        assert_eq!(search_indices(&catalog, "   "), vec![0, 1, 2, 3]);
    }

    #[test]
    fn every_match_contains_the_needle_somewhere() {
        let catalog = fixture();
        for query in ["h", "gibbs", "CODA", "sampler", "gradient", "metropolis"] {
            let needle = query.to_lowercase();
            for i in search_indices(&catalog, query) {
                let rec = &catalog.algorithms[i];
                let hit = rec.name.to_lowercase().contains(&needle)
                    || rec.description.to_lowercase().contains(&needle)
                    || rec.tags.iter().any(|t| t.to_lowercase().contains(&needle))
                    || rec
                        .packages
                        .iter()
                        .any(|p| p.name.to_lowercase().contains(&needle));
                assert!(hit, "{query:?} returned non-matching record {}", rec.name);
            }
        }
    }

    #[test]
    fn search_matches_tags_and_package_names() {
        let catalog = fixture();
        // "coda" only appears as a package name.
        assert_eq!(search_indices(&catalog, "coda"), vec![2, 3]);
        // "conditional" only appears as a tag (and inside "conditionals").
        assert_eq!(search_indices(&catalog, "conditional"), vec![2]);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let catalog = fixture();
        assert_eq!(
            search_indices(&catalog, "  GIBBS "),
            search_indices(&catalog, "gibbs")
        );
    }

    #[test]
    fn category_filter_keeps_exact_matches_only() {
        let catalog = fixture();
        let all: Vec<usize> = (0..catalog.len()).collect();
        let gibbs = filter_indices(&catalog, &all, Some("gibbs-sampler"), None);
        assert_eq!(gibbs, vec![2]);
        // Substrings of the category key do not match.
        assert!(filter_indices(&catalog, &all, Some("gibbs"), None).is_empty());
    }

    #[test]
    fn package_filter_narrows_conjunctively() {
        let catalog = fixture();
        let all: Vec<usize> = (0..catalog.len()).collect();
        let coda = filter_indices(&catalog, &all, None, Some("coda"));
        assert_eq!(coda, vec![2, 3]);
        let both = filter_indices(&catalog, &all, Some("gibbs-sampler"), Some("coda"));
        assert_eq!(both, vec![2]);
    }

    #[test]
    fn filters_commute_and_are_idempotent() {
        let catalog = fixture();
        let all: Vec<usize> = (0..catalog.len()).collect();

        let category_first = filter_indices(
            &catalog,
            &filter_indices(&catalog, &all, Some("hmc"), None),
            None,
            Some("rstan"),
        );
        let package_first = filter_indices(
            &catalog,
            &filter_indices(&catalog, &all, None, Some("rstan")),
            Some("hmc"),
            None,
        );
        let combined = filter_indices(&catalog, &all, Some("hmc"), Some("rstan"));
        assert_eq!(category_first, combined);
        assert_eq!(package_first, combined);

        let twice = filter_indices(&catalog, &combined, Some("hmc"), Some("rstan"));
        assert_eq!(twice, combined);
    }

    #[test]
    fn search_then_filter_scenario_from_literal_data() {
        let catalog = fixture();
        // "NUTS" matches "h" through its description ("Hamiltonian"), "HMC"
        // through its name; "Block Gibbs" has no "h" in any searched field.
        let candidates = search_indices(&catalog, "h");
        assert!(candidates.contains(&0));
        assert!(candidates.contains(&1));
        assert!(!candidates.contains(&2));

        let visible = filter_indices(&catalog, &candidates, Some("hmc"), None);
        assert_eq!(visible, vec![0, 1]);
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let catalog = Catalog::from_records(
            vec![
                record("First A", "a", "", &[], &[]),
                record("Only B", "b", "", &[], &[]),
                record("Second A", "a", "", &[], &[]),
            ],
            Vec::new(),
        );
        let groups = group_by_category(&catalog, &[0, 1, 2]);

        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(groups["a"], vec![0, 2]);
        assert_eq!(groups["b"], vec![1]);
    }

    #[test]
    fn empty_result_is_a_state_not_an_error() {
        let catalog = fixture();
        let none = search_indices(&catalog, "no such algorithm anywhere");
        assert!(none.is_empty());
        assert!(group_by_category(&catalog, &none).is_empty());
    }
}
