// lib/src/config/config_serializers.rs

use std::str::FromStr;

use regex::Regex;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serializer};

use crate::config::config_structs::StorageEngineType;

/// Writes the engine type as a plain scalar (`sled`, `in_memory`) and reads
/// it back through `FromStr`, so every spelling the CLI accepts also works
/// in the config file.
pub mod storage_engine_type_serde {
    use super::*;

    pub fn serialize<S>(engine_type: &StorageEngineType, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&engine_type.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<StorageEngineType, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // Strip one layer of stray quotes left by hand-edited files.
        let re = Regex::new(r#"^['"](.*)['"]$"#).map_err(|e| D::Error::custom(format!("Regex error: {}", e)))?;
        let sanitized = re.replace_all(s.trim(), "$1");
        StorageEngineType::from_str(&sanitized).map_err(D::Error::custom)
    }
}
