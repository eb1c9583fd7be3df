use serde::{Deserialize, Serialize};

/// One element of a resource reference list or set.
///
/// `is_valid` and `target_display_name` are computed by the manager; the
/// user only sets `target_id` and `target_type`. The same block shape backs
/// service bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceReferenceAttr {
    pub is_valid: bool,
    pub target_display_name: String,
    pub target_id: String,
    pub target_type: String,
}
