mod get_by_key;
pub use get_by_key::GetByKey;

mod insert;
pub use insert::Insert;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create a record in a list
    Insert(Insert),

    /// Fetch one record by its key
    GetByKey(GetByKey),
}

impl Operation {
    /// The list the operation addresses.
    pub fn list(&self) -> &str {
        match self {
            Operation::Insert(op) => &op.list,
            Operation::GetByKey(op) => &op.list,
        }
    }

    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Operation::Insert(op) => Some(op),
            _ => None,
        }
    }

    pub fn as_get_by_key(&self) -> Option<&GetByKey> {
        match self {
            Operation::GetByKey(op) => Some(op),
            _ => None,
        }
    }
}
