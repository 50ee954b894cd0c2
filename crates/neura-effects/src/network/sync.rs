//! Keep link endpoints attached to their nodes.

use super::{Link, Node};
use crate::NetworkView;

/// Write every node, then every link. Nodes first so links read fresh
/// positions.
pub(super) fn sync_all(nodes: &[Node], links: &[Link], view: &mut impl NetworkView) {
    for (index, node) in nodes.iter().enumerate() {
        view.set_node_position(index, node.position);
    }
    for (index, link) in links.iter().enumerate() {
        view.set_link_endpoints(index, nodes[link.a].position, nodes[link.b].position);
    }
}

/// Write node `index` and only the links in `touching`.
pub(super) fn sync_node(
    nodes: &[Node],
    links: &[Link],
    touching: &[usize],
    index: usize,
    view: &mut impl NetworkView,
) {
    view.set_node_position(index, nodes[index].position);
    for &link_index in touching {
        let link = links[link_index];
        view.set_link_endpoints(link_index, nodes[link.a].position, nodes[link.b].position);
    }
}
