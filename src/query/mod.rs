mod criteria;
pub mod facilitator;
pub mod predicates;
pub mod sorter;

pub use criteria::{Criteria, CriterionValue, FilterKind, QueryError};
pub use sorter::{sort_by_kind, top_n, SortKind};
