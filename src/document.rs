//! Typed form of a share document.
//!
//! ```text
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     ...
//! }
//! ```
//!
//! Every integer field may be written as a JSON integer, a float or a
//! decimal string. [`Coerced`] folds all three into one `i64`, truncating
//! floats toward zero, so nothing past this module sees a loose number.
//!
//! Share entries are parsed leniently: an entry that does not have the
//! `{ base, value }` shape is kept as [`Entry::Malformed`] so one bad entry
//! drops one point instead of the whole document.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::ReconstructError;
use crate::ShareIndex;

/// An integer field after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Coerced(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Coerced {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match LooseNumber::deserialize(deserializer)? {
            LooseNumber::Int(value) => Ok(Coerced(value)),
            LooseNumber::Float(value) => {
                let truncated = value.trunc();
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated <= i64::MAX as f64
                {
                    Ok(Coerced(truncated as i64))
                } else {
                    Err(de::Error::custom(format!("number {} is out of range", value)))
                }
            }
            LooseNumber::Text(text) => text
                .parse::<i64>()
                .map(Coerced)
                .map_err(|e| de::Error::custom(format!("invalid integer {:?}: {}", text, e))),
        }
    }
}

impl Coerced {
    pub fn value(self) -> i64 {
        self.0
    }
}

/// The `keys` record: declared share count `n` and threshold `k`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub n: Coerced,
    pub k: Coerced,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Parameters {
    pub threshold: usize,   //k
    pub share_count: usize, //n
}

impl Keys {
    /// Validates the declared values. `k > n` is accepted here; it shows up
    /// as insufficient points once the shares are decoded.
    pub fn parameters(&self) -> Result<Parameters, ReconstructError> {
        let invalid = || ReconstructError::InvalidParameters {
            share_count: self.n.value(),
            threshold: self.k.value(),
        };
        if self.k.value() < 1 {
            return Err(invalid());
        }
        let share_count = usize::try_from(self.n.value()).map_err(|_| invalid())?;
        let threshold = usize::try_from(self.k.value()).map_err(|_| invalid())?;
        Ok(Parameters {
            threshold,
            share_count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawShare {
    pub base: Coerced,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Share(RawShare),
    Malformed(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareDocument {
    pub keys: Keys,
    #[serde(flatten)]
    pub entries: BTreeMap<String, Entry>,
}

impl ShareDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReconstructError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ReconstructError::DocumentLoad {
            path: path.to_path_buf(),
            source,
        })?;
        json.parse()
    }

    /// The entry stored under the decimal key of `index`, if any.
    pub fn entry(&self, index: ShareIndex) -> Option<&Entry> {
        self.entries.get(&index.to_string())
    }
}

impl FromStr for ShareDocument {
    type Err = ReconstructError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(json)?)
    }
}
