//! Tunables for the network background and stat counters.

use neura_tween::Ease;
use serde::{Deserialize, Serialize};

/// How link endpoints are kept attached to moving nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncStrategy {
    /// Once per frame, rewrite every node and then every link.
    #[default]
    GlobalPass,
    /// Whenever a node's tween updates, rewrite only the links touching it.
    PerPoint,
}

/// How in-flight node motion reacts to a viewport resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeMode {
    /// Point the running wander tween at a new target.
    #[default]
    Redirect,
    /// Ease into the new bounds first, then start a fresh wander tween.
    TwoPhase,
}

/// Glow drawing treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GlowTreatment {
    /// Pick by node count.
    #[default]
    Auto,
    /// A halo per node. Costly.
    PerElement,
    /// One shared glow color for everything.
    Shared,
}

impl GlowTreatment {
    /// Resolve `Auto` against the node count. Large networks get `Shared`.
    pub fn resolve(self, nodes: usize, auto_limit: usize) -> Self {
        match self {
            GlowTreatment::Auto if nodes > auto_limit => GlowTreatment::Shared,
            GlowTreatment::Auto => GlowTreatment::PerElement,
            other => other,
        }
    }
}

/// Network background configuration.
///
/// Ranges are `(min, max)` pairs sampled uniformly from `[min, max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub nodes: usize,
    pub links: usize,
    pub sync: SyncStrategy,
    /// Never connect a node to itself.
    pub distinct_endpoints: bool,
    pub resize: ResizeMode,
    pub glow: GlowTreatment,
    /// Node count above which `Auto` glow becomes `Shared`.
    pub glow_auto_limit: usize,
    pub radius: (f32, f32),
    /// Seconds for one wander leg.
    pub drift_secs: (f32, f32),
    /// Seconds for one opacity pulse.
    pub pulse_secs: (f32, f32),
    /// Maximum random delay before a link starts pulsing.
    pub pulse_delay_secs: f32,
    pub opacity: (f32, f32),
    pub initial_opacity: f32,
    /// Seconds for the settle phase of a two-phase resize.
    pub transition_secs: f32,
    /// Fixed seed for reproducible layouts.
    pub seed: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl NetworkConfig {
    /// The classic page-section background: sparse, direct redirect on resize.
    pub fn classic() -> Self {
        Self {
            nodes: 30,
            links: 40,
            sync: SyncStrategy::GlobalPass,
            distinct_endpoints: false,
            resize: ResizeMode::Redirect,
            glow: GlowTreatment::Auto,
            glow_auto_limit: 40,
            radius: (2.0, 5.0),
            drift_secs: (15.0, 35.0),
            pulse_secs: (1.0, 4.0),
            pulse_delay_secs: 2.0,
            opacity: (0.1, 0.5),
            initial_opacity: 0.3,
            transition_secs: 1.5,
            seed: None,
        }
    }

    /// Denser network tuned to stay cheap per frame.
    pub fn optimized() -> Self {
        Self {
            nodes: 60,
            links: 80,
            sync: SyncStrategy::PerPoint,
            distinct_endpoints: true,
            resize: ResizeMode::TwoPhase,
            glow: GlowTreatment::Shared,
            ..Self::classic()
        }
    }

    /// Glow treatment with `Auto` resolved.
    pub fn glow_treatment(&self) -> GlowTreatment {
        self.glow.resolve(self.nodes, self.glow_auto_limit)
    }
}

/// Stat counter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_secs: f32,
    pub ease: Ease,
    /// Visible fraction of the counter that starts the animation.
    pub threshold: f32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_secs: 3.0,
            ease: Ease::Power3Out,
            threshold: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_glow_switches_to_shared_for_large_networks() {
        assert_eq!(GlowTreatment::Auto.resolve(30, 40), GlowTreatment::PerElement);
        assert_eq!(GlowTreatment::Auto.resolve(41, 40), GlowTreatment::Shared);
        assert_eq!(
            GlowTreatment::PerElement.resolve(500, 40),
            GlowTreatment::PerElement
        );
    }

    #[test]
    fn test_presets() {
        let classic = NetworkConfig::classic();
        assert_eq!((classic.nodes, classic.links), (30, 40));
        assert!(!classic.distinct_endpoints);
        assert_eq!(classic.sync, SyncStrategy::GlobalPass);

        let optimized = NetworkConfig::optimized();
        assert!(optimized.distinct_endpoints);
        assert_eq!(optimized.sync, SyncStrategy::PerPoint);
        assert_eq!(optimized.resize, ResizeMode::TwoPhase);
        assert_eq!(optimized.glow_treatment(), GlowTreatment::Shared);
    }
}
