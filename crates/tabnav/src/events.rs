use serde::{Deserialize, Serialize};

/// Payload of the will/did-change callbacks fired around a tab switch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabChangeEvent {
    pub tab: String,
}
