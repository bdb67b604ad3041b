/// Data layer: core types, loading, view derivation, and statistics.
///
/// Architecture:
/// ```text
///  timeline API ──► fallback snapshot
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch / read → parse → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Release> + opaque metadata
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   view    │  provider filter + stable sort → index sequence
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  count / providers / modalities
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
pub mod stats;
pub mod view;
