//! Generator and output settings.

/// Process-wide tunables for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSettings {
    /// Canvas width used to center pixels-from-center X values.
    pub canvas_width: f32,
    /// Canvas height used for pixels-from-center and pixels-from-bottom Y values.
    pub canvas_height: f32,
    /// Divide non-proportional pixel literals by the device density.
    pub adjust_for_density: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            canvas_width: 480.0,
            canvas_height: 854.0,
            adjust_for_density: true,
        }
    }
}

/// Per-element output options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementOutputSettings {
    /// Namespace wrapping the generated class.
    pub namespace: Option<String>,
    /// Using statements emitted after the project-wide ones.
    pub usings: Option<String>,
}

/// Project-wide output options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectOutputSettings {
    /// Using statements emitted at the top of every element unit.
    pub common_usings: Option<String>,
}
