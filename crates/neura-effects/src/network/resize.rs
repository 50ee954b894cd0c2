//! Steer node motion into a new viewport.

use neura_core::Viewport;
use neura_tween::{Ease, Tween};
use rand::Rng;

use super::generate::{random_point, wander};
use super::{Motion, Network};
use crate::{NetworkConfig, ResizeMode};

/// Adopt `viewport` and point every node at a target inside it.
///
/// Each node ends up driven by exactly one tween.
pub(super) fn retarget(
    network: &mut Network,
    viewport: Viewport,
    config: &NetworkConfig,
    rng: &mut impl Rng,
) {
    network.viewport = viewport;
    for index in 0..network.nodes.len() {
        match config.resize {
            ResizeMode::Redirect => redirect(network, index, config, rng),
            ResizeMode::TwoPhase => settle(network, index, config, rng),
        }
    }
}

fn redirect(network: &mut Network, index: usize, config: &NetworkConfig, rng: &mut impl Rng) {
    // A yoyo anchored outside the bounds would keep swinging back out.
    if !network.viewport.contains(network.nodes[index].position) {
        settle(network, index, config, rng);
        return;
    }
    let node = &network.nodes[index];
    let running = node
        .tween
        .filter(|_| node.motion == Motion::Wander)
        .and_then(|id| network.node_tweens.get_mut(id));
    match running {
        Some(tween) => {
            let from = node.position;
            tween.redirect(from, random_point(rng, network.viewport));
        }
        None => wander(network, index, config, rng),
    }
}

fn settle(network: &mut Network, index: usize, config: &NetworkConfig, rng: &mut impl Rng) {
    network.node_tweens.kill_target(index);
    let from = network.nodes[index].position;
    let ease = match config.resize {
        ResizeMode::Redirect => Ease::SineInOut,
        ResizeMode::TwoPhase => Ease::Power1Out,
    };
    let transition =
        Tween::new(from, random_point(rng, network.viewport), config.transition_secs).ease(ease);
    let id = network.node_tweens.spawn(index, transition);
    let node = &mut network.nodes[index];
    node.motion = Motion::Settling;
    node.tween = Some(id);
}
