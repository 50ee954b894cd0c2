//! The drifting node network.
//!
//! [`NetworkEffect`] owns one network instance together with the view it
//! draws into. Nothing is shared between instances, so several pages can
//! host their own network at the same time.

mod generate;
mod resize;
mod sync;

use neura_core::{Vec2, Viewport};
use neura_tween::{Timeline, TweenId};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{NetworkConfig, NetworkView, SyncStrategy};

/// What a node's tween is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    /// Endless yoyo between two points.
    Wander,
    /// Easing into the bounds after a resize.
    Settling,
}

/// A point of the network.
#[derive(Debug, Clone)]
pub struct Node {
    pub position: Vec2,
    pub radius: f32,
    motion: Motion,
    tween: Option<TweenId>,
}

/// A segment connecting two nodes by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Nodes, links and the tweens driving them.
#[derive(Debug, Clone)]
pub struct Network {
    viewport: Viewport,
    nodes: Vec<Node>,
    links: Vec<Link>,
    /// Per node, the links it is an endpoint of.
    adjacency: Vec<Vec<usize>>,
    node_tweens: Timeline<Vec2>,
    link_tweens: Timeline<f32>,
}

impl Network {
    fn empty(viewport: Viewport) -> Self {
        Self {
            viewport,
            nodes: Vec::new(),
            links: Vec::new(),
            adjacency: Vec::new(),
            node_tweens: Timeline::new(),
            link_tweens: Timeline::new(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Indices of the links touching node `index`.
    pub fn links_of(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map_or(&[], Vec::as_slice)
    }

    /// Where node `index` is currently headed.
    pub fn node_target(&self, index: usize) -> Option<Vec2> {
        let id = self.nodes.get(index)?.tween?;
        self.node_tweens.get(id).map(|tween| tween.to_value())
    }

    /// Number of tweens currently driving node `index`.
    pub fn node_tween_count(&self, index: usize) -> usize {
        self.node_tweens.count_target(index)
    }

    /// Number of live tweens, nodes and links together.
    pub fn active_tweens(&self) -> usize {
        self.node_tweens.len() + self.link_tweens.len()
    }

    fn halt(&mut self) {
        self.node_tweens.clear();
        self.link_tweens.clear();
        for node in &mut self.nodes {
            node.tween = None;
        }
    }
}

#[derive(Debug)]
struct Mounted<V> {
    view: V,
    network: Network,
}

/// A network background bound to a host view.
#[derive(Debug)]
pub struct NetworkEffect<V> {
    config: NetworkConfig,
    rng: StdRng,
    mounted: Option<Mounted<V>>,
}

impl<V: NetworkView> NetworkEffect<V> {
    pub fn new(config: NetworkConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            rng,
            mounted: None,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Build the network inside `host` and start animating it.
    ///
    /// Without a host this does nothing. An already active effect is torn
    /// down first.
    pub fn activate(&mut self, host: Option<V>, viewport: Viewport) {
        let Some(mut view) = host else {
            debug!("no host for network effect, staying idle");
            return;
        };
        self.teardown();

        view.set_viewport(viewport);
        view.set_glow(self.config.glow_treatment());
        let network = generate::generate(&self.config, viewport, &mut self.rng);
        generate::populate(&network, &mut view);
        debug!(
            nodes = network.nodes.len(),
            links = network.links.len(),
            width = viewport.width,
            height = viewport.height,
            "network effect activated"
        );
        self.mounted = Some(Mounted { view, network });
    }

    /// Advance all animations by `dt` seconds and bring the view up to date.
    pub fn tick(&mut self, dt: f32) {
        let Self {
            config,
            rng,
            mounted,
        } = self;
        let Some(Mounted { view, network }) = mounted.as_mut() else {
            return;
        };

        let mut settled = Vec::new();
        {
            let Network {
                nodes,
                links,
                adjacency,
                node_tweens,
                link_tweens,
                ..
            } = network;

            node_tweens.advance(dt, |event| {
                let node = &mut nodes[event.target];
                node.position = event.value;
                if event.finished {
                    node.tween = None;
                    if node.motion == Motion::Settling {
                        settled.push(event.target);
                    }
                }
                if config.sync == SyncStrategy::PerPoint {
                    sync::sync_node(nodes, links, &adjacency[event.target], event.target, view);
                }
            });

            if config.sync == SyncStrategy::GlobalPass {
                sync::sync_all(nodes, links, view);
            }

            link_tweens.advance(dt, |event| {
                links[event.target].opacity = event.value;
                view.set_link_opacity(event.target, event.value);
            });
        }

        for index in settled {
            generate::wander(network, index, config, rng);
        }
    }

    /// React to a new viewport size. Ignored while inactive.
    pub fn resize(&mut self, viewport: Viewport) {
        let Some(Mounted { view, network }) = self.mounted.as_mut() else {
            return;
        };
        if network.viewport == viewport {
            return;
        }
        view.set_viewport(viewport);
        resize::retarget(network, viewport, &self.config, &mut self.rng);
        debug!(
            width = viewport.width,
            height = viewport.height,
            mode = ?self.config.resize,
            "network effect resized"
        );
    }

    /// Halt every tween and clear the view, handing the host back.
    ///
    /// Safe to call at any time, any number of times.
    pub fn teardown(&mut self) -> Option<V> {
        let Mounted { mut view, mut network } = self.mounted.take()?;
        network.halt();
        view.clear();
        debug!("network effect torn down");
        Some(view)
    }

    pub fn is_active(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn view(&self) -> Option<&V> {
        self.mounted.as_ref().map(|m| &m.view)
    }

    pub fn network(&self) -> Option<&Network> {
        self.mounted.as_ref().map(|m| &m.network)
    }

    /// Live tweens; zero while inactive.
    pub fn active_tweens(&self) -> usize {
        self.network().map_or(0, Network::active_tweens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ResizeMode, Scene};

    const DT: f32 = 1.0 / 60.0;

    fn seeded(config: NetworkConfig, seed: u64) -> NetworkConfig {
        NetworkConfig {
            seed: Some(seed),
            ..config
        }
    }

    fn mounted(config: NetworkConfig) -> NetworkEffect<Scene> {
        let mut effect = NetworkEffect::new(config);
        effect.activate(Some(Scene::new()), Viewport::new(1920.0, 1080.0));
        effect
    }

    fn assert_synced(effect: &NetworkEffect<Scene>) {
        let network = effect.network().expect("active");
        let scene = effect.view().expect("active");
        for (index, node) in network.nodes().iter().enumerate() {
            assert_eq!(scene.nodes()[index].position, node.position);
        }
        for (index, link) in network.links().iter().enumerate() {
            let drawn = scene.links()[index];
            assert_eq!(drawn.from, network.nodes()[link.a].position, "link {index}");
            assert_eq!(drawn.to, network.nodes()[link.b].position, "link {index}");
            assert_eq!(drawn.opacity, link.opacity);
        }
    }

    #[test]
    fn test_counts_and_indices() {
        for (nodes, links) in [(1, 0), (1, 5), (30, 40), (60, 80), (5, 200)] {
            let config = NetworkConfig {
                nodes,
                links,
                ..seeded(NetworkConfig::classic(), 7)
            };
            let effect = mounted(config);
            let network = effect.network().expect("active");
            assert_eq!(network.nodes().len(), nodes);
            assert_eq!(network.links().len(), links);
            for link in network.links() {
                assert!(link.a < nodes && link.b < nodes);
            }
            assert_eq!(effect.view().map(|v| v.child_count()), Some(nodes + links));
        }
    }

    #[test]
    fn test_distinct_endpoints() {
        for seed in 0..20 {
            let config = NetworkConfig {
                nodes: 3,
                links: 50,
                ..seeded(NetworkConfig::optimized(), seed)
            };
            let effect = mounted(config);
            for link in effect.network().expect("active").links() {
                assert_ne!(link.a, link.b);
            }
        }
    }

    #[test]
    fn test_degenerate_configs_generate_no_links() {
        let config = NetworkConfig {
            nodes: 0,
            links: 10,
            ..seeded(NetworkConfig::classic(), 1)
        };
        let effect = mounted(config);
        assert!(effect.network().expect("active").links().is_empty());

        let config = NetworkConfig {
            nodes: 1,
            links: 10,
            ..seeded(NetworkConfig::optimized(), 1)
        };
        let effect = mounted(config);
        let network = effect.network().expect("active");
        assert_eq!(network.nodes().len(), 1);
        assert!(network.links().is_empty());
    }

    #[test]
    fn test_initial_positions_within_viewport() {
        let effect = mounted(seeded(NetworkConfig::classic(), 3));
        let network = effect.network().expect("active");
        for (index, node) in network.nodes().iter().enumerate() {
            assert!(network.viewport().contains(node.position));
            assert!((2.0..5.0).contains(&node.radius));
            let target = network.node_target(index).expect("wandering");
            assert!(network.viewport().contains(target));
        }
    }

    #[test]
    fn test_adjacency_matches_links() {
        let effect = mounted(seeded(NetworkConfig::classic(), 11));
        let network = effect.network().expect("active");
        for (index, link) in network.links().iter().enumerate() {
            assert!(network.links_of(link.a).contains(&index));
            assert!(network.links_of(link.b).contains(&index));
        }
    }

    #[test]
    fn test_global_pass_keeps_links_attached() {
        let mut effect = mounted(seeded(NetworkConfig::classic(), 5));
        for _ in 0..240 {
            effect.tick(DT);
            assert_synced(&effect);
        }
    }

    #[test]
    fn test_per_point_keeps_links_attached() {
        let mut effect = mounted(seeded(NetworkConfig::optimized(), 5));
        for _ in 0..240 {
            effect.tick(DT);
            assert_synced(&effect);
        }
    }

    #[test]
    fn test_nodes_actually_move() {
        let mut effect = mounted(seeded(NetworkConfig::classic(), 9));
        let before: Vec<Vec2> = effect
            .network()
            .expect("active")
            .nodes()
            .iter()
            .map(|n| n.position)
            .collect();
        effect.tick(2.0);
        let after = effect.network().expect("active").nodes();
        assert!(before.iter().zip(after).any(|(b, a)| *b != a.position));
    }

    fn assert_targets_within(effect: &NetworkEffect<Scene>, viewport: Viewport) {
        let network = effect.network().expect("active");
        for index in 0..network.nodes().len() {
            let target = network.node_target(index).expect("moving");
            assert!(viewport.contains(target), "node {index} -> {target:?}");
            assert_eq!(network.node_tween_count(index), 1, "node {index}");
        }
    }

    #[test]
    fn test_redirect_resize_targets_new_bounds() {
        let mut effect = mounted(seeded(NetworkConfig::classic(), 21));
        effect.tick(1.0);
        let small = Viewport::new(800.0, 600.0);
        effect.resize(small);
        assert_eq!(effect.view().map(|v| v.viewport()), Some(small));
        assert_targets_within(&effect, small);
    }

    #[test]
    fn test_redirect_resize_keeps_nodes_inside_new_bounds() {
        let config = seeded(NetworkConfig::classic(), 21);
        let transition = config.transition_secs;
        let mut effect = mounted(config);
        effect.tick(1.0);
        let small = Viewport::new(800.0, 600.0);
        effect.resize(small);
        effect.tick(transition + 0.1);

        // Two minutes spans several drift cycles in both directions.
        for frame in 0..120 * 60 {
            effect.tick(DT);
            let network = effect.network().expect("active");
            let outside = network
                .nodes()
                .iter()
                .filter(|node| !small.contains(node.position))
                .count();
            assert_eq!(outside, 0, "frame {frame}");
        }
        assert_eq!(effect.active_tweens(), 70);
        assert_synced(&effect);
    }

    #[test]
    fn test_zero_durations_keep_animating() {
        let config = NetworkConfig {
            drift_secs: (0.0, 0.0),
            pulse_secs: (0.0, 0.0),
            ..seeded(NetworkConfig::classic(), 6)
        };
        let mut effect = mounted(config);
        for _ in 0..120 {
            effect.tick(DT);
        }
        assert_eq!(effect.active_tweens(), 70);
        let network = effect.network().expect("active");
        for index in 0..network.nodes().len() {
            assert_eq!(network.node_tween_count(index), 1, "node {index}");
        }
    }

    #[test]
    fn test_two_phase_resize_targets_new_bounds() {
        let config = NetworkConfig {
            resize: ResizeMode::TwoPhase,
            ..seeded(NetworkConfig::optimized(), 21)
        };
        let transition = config.transition_secs;
        let mut effect = mounted(config);
        effect.tick(1.0);
        let small = Viewport::new(800.0, 600.0);
        effect.resize(small);
        assert_targets_within(&effect, small);

        // Past the settle phase every node is wandering again, inside the
        // new bounds, and still driven by exactly one tween.
        effect.tick(transition + 0.1);
        assert_targets_within(&effect, small);
        let network = effect.network().expect("active");
        for node in network.nodes() {
            assert!(small.contains(node.position));
        }
        assert_synced(&effect);
    }

    #[test]
    fn test_resize_before_activation_is_ignored() {
        let mut effect: NetworkEffect<Scene> = NetworkEffect::new(NetworkConfig::classic());
        effect.resize(Viewport::new(800.0, 600.0));
        effect.tick(DT);
        assert!(!effect.is_active());
        assert_eq!(effect.active_tweens(), 0);
    }

    #[test]
    fn test_missing_host_is_a_no_op() {
        let mut effect: NetworkEffect<Scene> = NetworkEffect::new(NetworkConfig::classic());
        effect.activate(None, Viewport::new(800.0, 600.0));
        assert!(!effect.is_active());
        assert!(effect.teardown().is_none());
    }

    #[test]
    fn test_teardown_releases_everything() {
        let mut effect = mounted(seeded(NetworkConfig::classic(), 2));
        effect.tick(0.5);
        assert_eq!(effect.active_tweens(), 70);

        let host = effect.teardown().expect("was active");
        assert_eq!(host.child_count(), 0);
        assert_eq!(effect.active_tweens(), 0);
        assert!(effect.network().is_none());

        assert!(effect.teardown().is_none());
        effect.tick(DT);
        assert_eq!(effect.active_tweens(), 0);
    }

    #[test]
    fn test_reactivation_replaces_previous_network() {
        let mut effect = mounted(seeded(NetworkConfig::classic(), 4));
        effect.activate(Some(Scene::new()), Viewport::new(640.0, 480.0));
        assert_eq!(effect.active_tweens(), 70);
        assert_eq!(effect.view().map(|v| v.child_count()), Some(70));
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = mounted(seeded(NetworkConfig::classic(), 8));
        let second = mounted(seeded(NetworkConfig::classic(), 8));
        first.resize(Viewport::new(400.0, 300.0));
        first.tick(1.0);
        let second_network = second.network().expect("active");
        assert_eq!(second_network.viewport(), Viewport::new(1920.0, 1080.0));
    }
}
