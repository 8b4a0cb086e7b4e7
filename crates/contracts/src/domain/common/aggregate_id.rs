use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate: a server-assigned integer whose string form
/// goes into URL paths.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Ord + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Raw database value
    fn value(&self) -> i32;

    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.value().to_string()
    }
}
