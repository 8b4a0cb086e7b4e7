//! Wire contracts shared by the order desk frontend and the order service.
//!
//! Everything that crosses HTTP lives here so both sides agree on
//! field names, status codes and money representation.

pub mod domain;
pub mod shared;
