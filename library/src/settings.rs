use serde::{Deserialize, Serialize};

/// Appearance and hit-testing parameters of the overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Handle radius in window pixels when the box is large enough.
    pub reference_radius: f64,
    /// Lower bound for the handle radius; also sets the minimal box size.
    pub minimal_radius: f64,
    /// Grey level of the handle glow.
    pub glow: f64,
    /// Width of the box outline in window pixels.
    pub outline_width: f64,
    pub outline_shade: f64,
    pub outline_hovered_shade: f64,
    pub outline_alpha: f64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            reference_radius: 15.0,
            minimal_radius: 5.0,
            glow: 0.9,
            outline_width: 16.0,
            outline_shade: 0.3,
            outline_hovered_shade: 0.65,
            outline_alpha: 0.6,
        }
    }
}

impl OverlaySettings {
    /// Clamp values that would break hit-testing or the minimal-size math.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.minimal_radius > 0.0) {
            log::warn!(
                "Invalid minimal_radius {}, using {}",
                self.minimal_radius,
                defaults.minimal_radius
            );
            self.minimal_radius = defaults.minimal_radius;
        }
        if self.reference_radius < self.minimal_radius {
            log::warn!(
                "reference_radius {} is below minimal_radius {}",
                self.reference_radius,
                self.minimal_radius
            );
            self.reference_radius = self.minimal_radius;
        }
        if !(self.outline_width >= 0.0) {
            self.outline_width = defaults.outline_width;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_restores_broken_radii() {
        let settings = OverlaySettings {
            minimal_radius: -1.0,
            reference_radius: 2.0,
            ..OverlaySettings::default()
        }
        .sanitized();
        assert_eq!(settings.minimal_radius, 5.0);
        assert_eq!(settings.reference_radius, 5.0);
    }

    #[test]
    fn defaults_are_already_sane() {
        assert_eq!(OverlaySettings::default().sanitized(), OverlaySettings::default());
    }
}
