//! Data layer: core types, loading, and filtering.
//!
//! Architecture:
//! ```text
//!  .json / .csv snapshot
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse snapshot → Vec<Comic>
//!   └──────────┘
//!        │
//!        ▼  filter_eligible (baseline rules, once per load)
//!   ┌──────────┐
//!   │  Catalog  │  Vec<Comic>, option indices
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  apply user criteria → visible indices
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod filter;
