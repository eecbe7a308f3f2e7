use serde::{Deserialize, Serialize};

/// A to-do entry as laid out in the `testdb` schema.
///
/// Nothing reads or writes this table yet; the struct only records its shape.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
    pub created_at: i64, // unix seconds
}
