//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Badge variant used to render a status chip in the dashboard.
///
/// The dashboard maps variants to colors; the names follow the design
/// system of the original admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Success,
    Warning,
    Destructive,
    Default,
}
