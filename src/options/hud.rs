use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "HUD", inline)]
#[serde(default)]
/// On-screen feedback while a rotation session runs.
pub struct HudOptions {
    /// Draw the pivot lines and the angle readout.
    #[schemars(title = "Use HUD")]
    pub enabled: bool,
    /// RGBA of the pivot→initial pointer line.
    #[schemars(skip)]
    pub initial_color: [f32; 4],
    /// RGBA of the pivot→current pointer line.
    #[schemars(skip)]
    pub current_color: [f32; 4],
    /// Line width in pixels.
    #[schemars(title = "Line Width", range(min = 1.0, max = 8.0), extend("step" = 0.5))]
    pub line_width: f32,
    /// Angle label anchor in region pixels.
    #[schemars(skip)]
    pub label_position: [f32; 2],
    /// Angle label font size in points.
    #[schemars(title = "Label Size", range(min = 8.0, max = 48.0), extend("step" = 1.0))]
    pub label_size: f32,
}

impl Default for HudOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            initial_color: [0.5, 0.5, 0.8, 0.6],
            current_color: [0.3, 0.7, 0.2, 0.5],
            line_width: 2.0,
            label_position: [15.0, 30.0],
            label_size: 20.0,
        }
    }
}
