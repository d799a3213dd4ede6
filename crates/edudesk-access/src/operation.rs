//! CRUD operations and operation sets.
//!
//! An [`OperationSet`] is the set of operations a role may perform on one
//! resource. It is a 4-bit set, so membership is unique and order-irrelevant
//! by construction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::error::AccessError;

/// One of the four operations a permission can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CrudOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl CrudOperation {
    /// All operations in canonical order.
    pub const ALL: [CrudOperation; 4] = [
        CrudOperation::Create,
        CrudOperation::Read,
        CrudOperation::Update,
        CrudOperation::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrudOperation::Create => "create",
            CrudOperation::Read => "read",
            CrudOperation::Update => "update",
            CrudOperation::Delete => "delete",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            CrudOperation::Create => 0b0001,
            CrudOperation::Read => 0b0010,
            CrudOperation::Update => 0b0100,
            CrudOperation::Delete => 0b1000,
        }
    }
}

impl fmt::Display for CrudOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrudOperation {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(CrudOperation::Create),
            "read" => Ok(CrudOperation::Read),
            "update" => Ok(CrudOperation::Update),
            "delete" => Ok(CrudOperation::Delete),
            other => Err(AccessError::UnknownOperation(other.to_string())),
        }
    }
}

/// Set of [`CrudOperation`]s allowed on a single resource.
///
/// Serialized as a list of operation names in canonical order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OperationSet(u8);

impl OperationSet {
    pub const EMPTY: OperationSet = OperationSet(0);
    pub const READ: OperationSet = OperationSet(CrudOperation::Read.bit());
    pub const CR: OperationSet = OperationSet(CrudOperation::Create.bit() | CrudOperation::Read.bit());
    pub const RU: OperationSet = OperationSet(CrudOperation::Read.bit() | CrudOperation::Update.bit());
    pub const CRU: OperationSet = OperationSet(
        CrudOperation::Create.bit() | CrudOperation::Read.bit() | CrudOperation::Update.bit(),
    );
    pub const CRUD: OperationSet = OperationSet(0b1111);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn contains(&self, operation: CrudOperation) -> bool {
        self.0 & operation.bit() != 0
    }

    pub fn insert(&mut self, operation: CrudOperation) {
        self.0 |= operation.bit();
    }

    #[must_use]
    pub fn with(mut self, operation: CrudOperation) -> Self {
        self.insert(operation);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_full(&self) -> bool {
        *self == Self::CRUD
    }

    /// Operations in canonical order (create, read, update, delete).
    pub fn iter(&self) -> impl Iterator<Item = CrudOperation> + '_ {
        CrudOperation::ALL
            .into_iter()
            .filter(move |op| self.contains(*op))
    }

    /// Compact `CRUD`-style rendering used by the CLI matrix, `-` for absent operations.
    pub fn to_flags(&self) -> String {
        CrudOperation::ALL
            .iter()
            .map(|op| {
                if self.contains(*op) {
                    op.as_str()[..1].to_ascii_uppercase()
                } else {
                    "-".to_string()
                }
            })
            .collect()
    }
}

impl FromIterator<CrudOperation> for OperationSet {
    fn from_iter<I: IntoIterator<Item = CrudOperation>>(iter: I) -> Self {
        let mut set = OperationSet::EMPTY;
        for op in iter {
            set.insert(op);
        }
        set
    }
}

impl fmt::Debug for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|op| op.as_str()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

impl Serialize for OperationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for OperationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ops: Vec<CrudOperation> = Vec::deserialize(deserializer)?;
        Ok(ops.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_round_trip_names() {
        for op in CrudOperation::ALL {
            assert_eq!(op.as_str().parse::<CrudOperation>().unwrap(), op);
        }
        assert!("publish".parse::<CrudOperation>().is_err());
        assert!("Read".parse::<CrudOperation>().is_err());
    }

    #[test]
    fn test_set_is_unique_and_order_irrelevant() {
        let a: OperationSet = [CrudOperation::Update, CrudOperation::Read, CrudOperation::Read]
            .into_iter()
            .collect();
        let b = OperationSet::new()
            .with(CrudOperation::Read)
            .with(CrudOperation::Update);
        assert_eq!(a, b);
        assert_eq!(a, OperationSet::RU);
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_iter_is_canonical_order() {
        let ops: Vec<_> = OperationSet::CRUD.iter().collect();
        assert_eq!(ops, CrudOperation::ALL.to_vec());
        assert!(OperationSet::CRUD.is_full());
        assert!(OperationSet::EMPTY.is_empty());
    }

    #[test]
    fn test_flags() {
        assert_eq!(OperationSet::CRUD.to_flags(), "CRUD");
        assert_eq!(OperationSet::READ.to_flags(), "-R--");
        assert_eq!(OperationSet::EMPTY.to_flags(), "----");
    }

    #[test]
    fn test_serde_as_list() {
        let json = serde_json::to_string(&OperationSet::CR).unwrap();
        assert_eq!(json, r#"["create","read"]"#);

        let set: OperationSet = serde_json::from_str(r#"["delete","read","delete"]"#).unwrap();
        assert!(set.contains(CrudOperation::Delete));
        assert!(set.contains(CrudOperation::Read));
        assert_eq!(set.len(), 2);

        assert!(serde_json::from_str::<OperationSet>(r#"["approve"]"#).is_err());
    }
}
