use serde::{Deserialize, Deserializer, Serialize};

use crate::convert::interface_to_string_list;

/// One element of the `subnet` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct IpSubnetAttr {
    #[serde(deserialize_with = "non_empty_strings")]
    pub ip_addresses: Vec<String>,
    pub prefix_length: i64,
}

/// Decode a generic list, keeping only non-empty strings.
fn non_empty_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(|values| interface_to_string_list(&values)).unwrap_or_default())
}
