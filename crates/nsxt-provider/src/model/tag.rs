use serde::{Deserialize, Serialize};

/// One element of the `tag` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TagAttr {
    pub scope: String,
    pub tag: String,
}
