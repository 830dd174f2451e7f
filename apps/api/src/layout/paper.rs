//! Paper sizes and page templates published to the export collaborator.
//!
//! Dimensions are in PostScript points (1/72 inch), portrait orientation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaperDimensions {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    pub fn dimensions(self) -> PaperDimensions {
        match self {
            PageSize::A4 => PaperDimensions {
                width_pt: 595.28,
                height_pt: 841.89,
            },
            PageSize::Letter => PaperDimensions {
                width_pt: 612.0,
                height_pt: 792.0,
            },
        }
    }
}

/// Page template. `TripleColumn` stacks a page's problems in three regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperTemplate {
    #[default]
    Standard,
    TripleColumn,
}
