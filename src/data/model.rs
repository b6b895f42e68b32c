use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record types – rows of algorithms.json and packages.json
// ---------------------------------------------------------------------------

/// Reference from an algorithm to a package implementing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageRef {
    pub name: String,
    /// Entry-point function inside the package (e.g. `MCMCmetrop1R`).
    pub function: String,
    pub description: String,
}

/// A tunable parameter documented for an algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Parameter {
    pub name: String,
    /// Value type as free text (`numeric`, `matrix`, …). `type` in the JSON.
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// One algorithm entry (a row of `algorithms.json`).
///
/// Every field may be absent in the source data; absent fields deserialize to
/// their default and render as empty text rather than failing the load.
/// Records are immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlgorithmRecord {
    pub id: String,
    pub name: String,
    /// Grouping key, e.g. `gibbs-sampler` or `hamiltonian-monte-carlo`.
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Packages implementing this algorithm, in source order.
    pub packages: Vec<PackageRef>,
    pub long_description: Option<String>,
    pub complexity: Option<String>,
    pub parameters: Vec<Parameter>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub use_cases: Vec<String>,
    pub example_code: Option<String>,
    pub contributor: Option<String>,
    pub date_added: Option<String>,
}

impl AlgorithmRecord {
    /// Case-insensitive substring match over name, description, tags and
    /// referenced package names. `needle` must already be lowercased.
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self
                .packages
                .iter()
                .any(|p| p.name.to_lowercase().contains(needle))
    }

    /// Whether `package` appears among this record's package references.
    /// Exact name match, case-sensitive like the dropdown values.
    pub fn uses_package(&self, package: &str) -> bool {
        self.packages.iter().any(|p| p.name == package)
    }
}

/// One software package entry (a row of `packages.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub description: String,
    pub maintainer: String,
    pub categories: Vec<String>,
    pub cran_url: Option<String>,
    pub documentation_url: Option<String>,
    pub github_url: Option<String>,
    pub contributor: Option<String>,
    pub date_added: Option<String>,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Both record lists plus pre-computed dropdown indices.
///
/// Built once at load time and read-only afterwards; re-loading replaces the
/// whole catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All algorithm records, in source order.
    pub algorithms: Vec<AlgorithmRecord>,
    /// All package records, in source order.
    pub packages: Vec<PackageRecord>,
    /// Sorted unique non-empty algorithm categories (category dropdown).
    pub categories: Vec<String>,
    /// Sorted unique package names referenced by algorithms (package dropdown).
    pub package_names: Vec<String>,
}

/// Headline numbers for the Overview and About sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub algorithms: usize,
    pub packages: usize,
    pub categories: usize,
    pub contributors: usize,
}

impl Catalog {
    /// Build the dropdown indices from the loaded records.
    pub fn from_records(algorithms: Vec<AlgorithmRecord>, packages: Vec<PackageRecord>) -> Self {
        let categories: BTreeSet<String> = algorithms
            .iter()
            .filter(|a| !a.category.is_empty())
            .map(|a| a.category.clone())
            .collect();

        let package_names: BTreeSet<String> = algorithms
            .iter()
            .flat_map(|a| a.packages.iter())
            .filter(|p| !p.name.is_empty())
            .map(|p| p.name.clone())
            .collect();

        Catalog {
            algorithms,
            packages,
            categories: categories.into_iter().collect(),
            package_names: package_names.into_iter().collect(),
        }
    }

    /// Number of algorithm records.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// Whether the catalog holds no algorithms.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Number of algorithms referencing `package` in their package list.
    pub fn algorithms_using(&self, package: &str) -> usize {
        self.algorithms
            .iter()
            .filter(|a| a.uses_package(package))
            .count()
    }

    /// Algorithm count per category, in sorted category order.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|cat| {
                let n = self
                    .algorithms
                    .iter()
                    .filter(|a| a.category == *cat)
                    .count();
                (cat.clone(), n)
            })
            .collect()
    }

    /// Headline statistics. Contributors are counted once across both record
    /// lists; records without a contributor do not count.
    pub fn stats(&self) -> CatalogStats {
        let contributors: BTreeSet<&str> = self
            .algorithms
            .iter()
            .filter_map(|a| a.contributor.as_deref())
            .chain(self.packages.iter().filter_map(|p| p.contributor.as_deref()))
            .filter(|c| !c.trim().is_empty())
            .collect();

        CatalogStats {
            algorithms: self.algorithms.len(),
            packages: self.packages.len(),
            categories: self.categories.len(),
            contributors: contributors.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(name: &str, category: &str, packages: &[&str]) -> AlgorithmRecord {
        AlgorithmRecord {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
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

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let rec: AlgorithmRecord =
            serde_json::from_str(r#"{"name": "NUTS", "category": "hmc"}"#).unwrap();
        assert_eq!(rec.name, "NUTS");
        assert_eq!(rec.description, "");
        assert!(rec.tags.is_empty());
        assert!(rec.packages.is_empty());
        assert_eq!(rec.example_code, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let rec: AlgorithmRecord =
            serde_json::from_str(r#"{"name": "HMC", "nonsense": {"a": 1}}"#).unwrap();
        assert_eq!(rec.name, "HMC");
    }

    #[test]
    fn parameter_type_field_maps_to_kind() {
        let p: Parameter =
            serde_json::from_str(r#"{"name": "V", "type": "matrix", "description": "d"}"#).unwrap();
        assert_eq!(p.kind, "matrix");
    }

    #[test]
    fn dropdown_indices_are_sorted_and_unique() {
        let catalog = Catalog::from_records(
            vec![
                algorithm("B", "zeta", &["nimble", "coda"]),
                algorithm("A", "alpha", &["coda"]),
                algorithm("C", "zeta", &[]),
                algorithm("D", "", &[]),
            ],
            Vec::new(),
        );
        assert_eq!(catalog.categories, vec!["alpha", "zeta"]);
        assert_eq!(catalog.package_names, vec!["coda", "nimble"]);
    }

    #[test]
    fn algorithms_using_counts_package_references() {
        let catalog = Catalog::from_records(
            vec![
                algorithm("A", "x", &["coda", "nimble"]),
                algorithm("B", "x", &["coda"]),
                algorithm("C", "y", &[]),
            ],
            Vec::new(),
        );
        assert_eq!(catalog.algorithms_using("coda"), 2);
        assert_eq!(catalog.algorithms_using("nimble"), 1);
        assert_eq!(catalog.algorithms_using("rstan"), 0);
    }

    #[test]
    fn stats_count_distinct_contributors_across_both_lists() {
        let mut a = algorithm("A", "x", &[]);
        a.contributor = Some("Alice".to_string());
        let mut b = algorithm("B", "y", &[]);
        b.contributor = Some("Bob".to_string());
        let c = algorithm("C", "y", &[]);

        let pkg = PackageRecord {
            name: "coda".to_string(),
            contributor: Some("Alice".to_string()),
            ..Default::default()
        };

        let stats = Catalog::from_records(vec![a, b, c], vec![pkg]).stats();
        assert_eq!(stats.algorithms, 3);
        assert_eq!(stats.packages, 1);
        assert_eq!(stats.categories, 2);
        assert_eq!(stats.contributors, 2);
    }
}
