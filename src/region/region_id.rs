use std::{fmt, sync::Arc};

use serde::{Deserialize, Deserializer};

/// Stable key shared by geometry and statistics records.
/// Numeric ids (e.g. FIPS `1001`) are kept as their decimal text so both documents
/// compare equal regardless of whether they encode the id as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(Arc<str>);

impl RegionId {
    #[inline] pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self { Self(Arc::from(id)) }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self { Self(Arc::from(id)) }
}

impl From<u64> for RegionId {
    fn from(id: u64) -> Self { Self(Arc::from(id.to_string())) }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

impl<'de> Deserialize<'de> for RegionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(id) => RegionId::from(id.to_string()),
            Raw::Float(id) if id.fract() == 0.0 => RegionId::from(format!("{id:.0}")),
            Raw::Float(id) => RegionId::from(id.to_string()),
            Raw::Text(id) => RegionId::from(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_ids_compare_equal() {
        let a: RegionId = serde_json::from_str("1001").unwrap();
        let b: RegionId = serde_json::from_str("\"1001\"").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn whole_floats_drop_the_fraction() {
        let id: RegionId = serde_json::from_str("53073.0").unwrap();
        assert_eq!(id.as_str(), "53073");
    }

    #[test]
    fn leading_zeros_are_preserved_in_text_ids() {
        let id: RegionId = serde_json::from_str("\"01001\"").unwrap();
        assert_eq!(id.to_string(), "01001");
    }
}
