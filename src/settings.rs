// =========================
// Simulator Configuration
// =========================

use derive_builder::Builder;

/// Runtime parameters of the host loop and of the input bindings.
///
/// Built through `SimulatorSettingsBuilder`; every field has a default.
#[derive(Clone, Builder, Debug, PartialEq)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct SimulatorSettings {
    /// Duration of one frame (ms), i.e. the simulation clock step
    #[builder(default = "1000.0 / 60.0")]
    pub frame_interval_ms: f64,

    /// Sleep between frames to match `frame_interval_ms`
    #[builder(default = "true")]
    pub realtime: bool,

    /// Stop the loop after this many frames (runs forever when `None`)
    #[builder(default = "None")]
    pub max_frames: Option<u64>,

    /// Rockets fired by the launch button
    #[builder(default = "9")]
    pub button_show_count: usize,

    /// Rockets in a default grand show
    #[builder(default = "8")]
    pub default_show_count: usize,

    /// Rockets in the gentle show fired after page load
    #[builder(default = "5")]
    pub load_show_count: usize,

    /// Delay before the page-load show (ms)
    #[builder(default = "800.0")]
    pub load_show_delay_ms: f64,

    /// Seconds between two metrics summaries in the log
    #[builder(default = "5.0")]
    pub log_interval_secs: f32,
}

/// Keep backward compatibility with `.default()`
impl Default for SimulatorSettings {
    fn default() -> Self {
        SimulatorSettingsBuilder::default()
            .build()
            .unwrap_or_else(|_| unreachable!("every field has a default"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builder() {
        let s = SimulatorSettings::default();
        assert!((s.frame_interval_ms - 16.666).abs() < 0.01);
        assert!(s.realtime);
        assert_eq!(s.max_frames, None);
        assert_eq!(s.button_show_count, 9);
        assert_eq!(s.default_show_count, 8);
        assert_eq!(s.load_show_count, 5);
        assert_eq!(s.load_show_delay_ms, 800.0);
    }

    #[test]
    fn test_builder_overrides() -> anyhow::Result<()> {
        let s = SimulatorSettingsBuilder::default()
            .realtime(false)
            .max_frames(Some(10))
            .button_show_count(3)
            .build()?;
        assert!(!s.realtime);
        assert_eq!(s.max_frames, Some(10));
        assert_eq!(s.button_show_count, 3);
        Ok(())
    }
}
