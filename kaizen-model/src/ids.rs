use crate::error::ModelError;
use uuid::Uuid;

/// Strongly typed ID for catalog products
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProductID(pub Uuid);

impl Default for ProductID {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductID {
    /// Time-ordered so ids sort roughly by creation.
    pub fn new() -> Self {
        ProductID(Uuid::now_v7())
    }

    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        Uuid::parse_str(raw.trim())
            .map(ProductID)
            .map_err(|e| ModelError::InvalidId(format!("{raw}: {e}")))
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ProductID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ProductID {
    fn from(value: Uuid) -> Self {
        ProductID(value)
    }
}

impl std::fmt::Display for ProductID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to a category record. Categories are owned elsewhere; products
/// only carry the optional pointer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CategoryID(pub Uuid);

impl CategoryID {
    pub fn new() -> Self {
        CategoryID(Uuid::now_v7())
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CategoryID {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CategoryID {
    fn from(value: Uuid) -> Self {
        CategoryID(value)
    }
}

impl std::fmt::Display for CategoryID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
