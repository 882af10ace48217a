//! Wire types shared with the catalog backend plus the pure catalog logic
//! (grouping, filter options, card building) used by the frontend.

pub mod domain;
pub mod projections;
pub mod shared;
pub mod system;
