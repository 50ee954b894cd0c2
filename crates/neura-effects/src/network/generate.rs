//! Procedural layout of nodes and links.

use neura_core::{Vec2, Viewport};
use neura_tween::{Ease, Repeat, Tween};
use rand::Rng;
use tracing::warn;

use super::{Link, Motion, Network, Node};
use crate::{NetworkConfig, NetworkView};

/// Shortest cycle of an endless tween; a zero-length one would finish at once.
const MIN_LOOP_SECS: f32 = 0.1;

/// Lay out a fresh network and start its tweens.
pub(super) fn generate(config: &NetworkConfig, viewport: Viewport, rng: &mut impl Rng) -> Network {
    let node_count = config.nodes;
    let mut link_count = config.links;
    if link_count > 0 && (node_count == 0 || (config.distinct_endpoints && node_count < 2)) {
        warn!(
            nodes = node_count,
            links = link_count,
            distinct = config.distinct_endpoints,
            "not enough nodes to connect, generating no links"
        );
        link_count = 0;
    }

    let mut network = Network::empty(viewport);
    network.nodes.reserve(node_count);
    network.adjacency = vec![Vec::new(); node_count];

    for index in 0..node_count {
        network.nodes.push(Node {
            position: random_point(rng, viewport),
            radius: sample(rng, config.radius),
            motion: Motion::Wander,
            tween: None,
        });
        wander(&mut network, index, config, rng);
    }

    for index in 0..link_count {
        let a = rng.random_range(0..node_count);
        let mut b = rng.random_range(0..node_count);
        if config.distinct_endpoints {
            while b == a {
                b = rng.random_range(0..node_count);
            }
        }
        network.links.push(Link {
            a,
            b,
            opacity: config.initial_opacity,
        });
        network.adjacency[a].push(index);
        if b != a {
            network.adjacency[b].push(index);
        }

        let pulse = Tween::new(
            config.initial_opacity,
            sample(rng, config.opacity),
            sample(rng, config.pulse_secs).max(MIN_LOOP_SECS),
        )
        .ease(Ease::SineInOut)
        .repeat(Repeat::Forever)
        .yoyo(true)
        .delay(sample(rng, (0.0, config.pulse_delay_secs)));
        network.link_tweens.spawn(index, pulse);
    }

    network
}

/// Send node `index` drifting between its position and a random target.
pub(super) fn wander(network: &mut Network, index: usize, config: &NetworkConfig, rng: &mut impl Rng) {
    let Some(from) = network.nodes.get(index).map(|n| n.position) else {
        return;
    };
    network.node_tweens.kill_target(index);
    let drift = Tween::new(
        from,
        random_point(rng, network.viewport),
        sample(rng, config.drift_secs).max(MIN_LOOP_SECS),
    )
    .ease(Ease::SineInOut)
    .repeat(Repeat::Forever)
    .yoyo(true);
    let id = network.node_tweens.spawn(index, drift);
    let node = &mut network.nodes[index];
    node.motion = Motion::Wander;
    node.tween = Some(id);
}

/// Create the visual elements for every node and link.
pub(super) fn populate(network: &Network, view: &mut impl NetworkView) {
    for (index, node) in network.nodes.iter().enumerate() {
        view.add_node(index, node.position, node.radius);
    }
    for (index, link) in network.links.iter().enumerate() {
        view.add_link(
            index,
            network.nodes[link.a].position,
            network.nodes[link.b].position,
            link.opacity,
        );
    }
}

/// Uniform point in `[0, width) x [0, height)`.
pub(super) fn random_point(rng: &mut impl Rng, viewport: Viewport) -> Vec2 {
    Vec2::new(
        sample(rng, (0.0, viewport.width)),
        sample(rng, (0.0, viewport.height)),
    )
}

/// Uniform value in `[min, max)`; an empty range yields `min`.
pub(super) fn sample(rng: &mut impl Rng, (min, max): (f32, f32)) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}
