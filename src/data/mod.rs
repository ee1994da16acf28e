/// Data layer: DAT parsing, sampling, loading, filtering and export.
///
/// Architecture:
/// ```text
///   bytes of a .dat file
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  name / extension gate, UTF-8 decode
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ splitter  │  split on '&' → raw section texts
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  per line: (x, y) point or metadata
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  sampler  │  ≤ 10 points spread across the section
///   └──────────┘
///        │
///        ▼
///   DatDocument  →  filter (viewer) / export (csv, json, text)
/// ```

pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
pub mod sampler;
pub mod splitter;
