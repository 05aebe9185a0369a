/// Data layer: record types, CSV loading, and the stateless transforms the
/// screens are built on.
///
/// Architecture:
/// ```text
///  assets/*.csv  /  File → Open
///        │
///        ▼
///   ┌────────┐
///   │ loader │  parse CSV → Catalog + warnings
///   └────────┘
///        │
///        ▼
///   ┌─────────┐
///   │ Catalog │  Vec<HardwareRecord>, unique-value indexes
///   └─────────┘
///        │
///        ├──► filter    criteria → visible indices
///        ├──► paginate  prefix page + has_more
///        ├──► compare   two records → normalized ratios
///        └──► fields    typed spec-table accessors
/// ```
///
/// Everything below `loader` is pure; `numeric` holds the one canonical
/// extractor for the dataset's unit-suffixed cells.
pub mod compare;
pub mod fields;
pub mod filter;
pub mod loader;
pub mod model;
pub mod numeric;
pub mod paginate;
