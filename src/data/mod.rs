/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  algorithms.json + packages.json  (HTTP or local directory)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch both documents in parallel → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  algorithm + package records, dropdown indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  search → filter → group → visible indices
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
