//! Reverse ancestor traversal

use crate::graph::Graph;
use crate::node::Node;
use crate::path::{Path, PathNode};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use uuid::Uuid;

/// Reverse-traversal engine.
///
/// Given a destination node, walks backward along edges toward predecessors
/// and produces the ordered chain of every node that can reach the
/// destination, annotated with a hop level.
pub struct PathFinder;

impl PathFinder {
    /// Resolve the ancestor chain of `destination` against `graph`.
    ///
    /// The work list is operated last-in-first-out. A node can be pushed
    /// more than once via different predecessor edges before it is first
    /// popped; its level is fixed at pop time from whatever the tentative
    /// map last recorded, so levels follow edge-processing order rather
    /// than shortest graph distance. The visited set bounds the walk on
    /// cyclic sender/recipient references.
    pub fn find(graph: &Graph, destination: &Arc<Node>) -> Path {
        let mut path = Path::new();
        let mut stack: Vec<PathNode> = Vec::new();
        let mut visited: HashSet<Uuid> = HashSet::new();
        let mut tentative: HashMap<Uuid, i32> = HashMap::new();

        tentative.insert(destination.id, 1);
        stack.push(PathNode::new(Arc::clone(destination)));

        while let Some(mut item) = stack.pop() {
            let id = item.node.id;
            if !visited.insert(id) {
                continue;
            }
            item.level = tentative.get(&id).copied().unwrap_or(0);
            let level = item.level;

            let sources: Vec<Arc<Node>> = graph
                .incoming_to(&item.node)
                .into_iter()
                .map(|edge| Arc::clone(&edge.from))
                .collect();
            path.push(item);

            for source in sources {
                tentative.insert(source.id, level + 1);
                stack.push(PathNode {
                    level,
                    via: Some(id),
                    node: source,
                });
            }
        }

        tracing::debug!(
            destination = %destination.id,
            hops = path.len(),
            "resolved ancestor chain"
        );
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::warehouse::WarehouseKind;

    fn node(name: &str) -> Arc<Node> {
        Arc::new(Node {
            id: Uuid::new_v4(),
            kind: WarehouseKind::Free,
            name: name.to_string(),
            code: String::new(),
            address: String::new(),
            descriptor_group: String::new(),
            time_zone: None,
            available_for_balance: false,
            only_stock_pickup_allowed: false,
        })
    }

    fn chain_graph() -> (Graph, Arc<Node>, Arc<Node>, Arc<Node>) {
        // A -> B -> C
        let mut graph = Graph::new();
        let a = node("A");
        let b = node("B");
        let c = node("C");
        graph.add_node(Arc::clone(&a));
        graph.add_node(Arc::clone(&b));
        graph.add_node(Arc::clone(&c));
        graph.add_edge(&a, &b, 0);
        graph.add_edge(&b, &c, 0);
        (graph, a, b, c)
    }

    #[test]
    fn test_chain_levels() {
        let (graph, a, b, c) = chain_graph();
        let path = PathFinder::find(&graph, &c);

        let hops: Vec<_> = path.iter().map(|n| (n.node.name.as_str(), n.level)).collect();
        assert_eq!(hops, vec![("C", 1), ("B", 2), ("A", 3)]);
        assert!(path.contains(&c.id));
        assert!(path.contains(&b.id));
        assert!(path.contains(&a.id));
    }

    #[test]
    fn test_destination_always_contained() {
        let (graph, _, b, _) = chain_graph();
        let path = PathFinder::find(&graph, &b);
        assert!(path.contains(&b.id));
        assert_eq!(path.first().unwrap().node.id, b.id);
        assert_eq!(path.first().unwrap().level, 1);
    }

    #[test]
    fn test_isolated_node() {
        let mut graph = Graph::new();
        let only = node("only");
        graph.add_node(Arc::clone(&only));

        let path = PathFinder::find(&graph, &only);
        assert_eq!(path.len(), 1);
        assert_eq!(path.first().unwrap().level, 1);
        assert!(path.first().unwrap().via.is_none());
    }

    #[test]
    fn test_two_parents_pop_order() {
        // A -> C, B -> C: both parents land at level 2; the parent pushed
        // last (B's edge was inserted second) is popped first.
        let mut graph = Graph::new();
        let a = node("A");
        let b = node("B");
        let c = node("C");
        graph.add_node(Arc::clone(&a));
        graph.add_node(Arc::clone(&b));
        graph.add_node(Arc::clone(&c));
        graph.add_edge(&a, &c, 0);
        graph.add_edge(&b, &c, 0);

        let path = PathFinder::find(&graph, &c);
        let hops: Vec<_> = path.iter().map(|n| (n.node.name.as_str(), n.level)).collect();
        assert_eq!(hops, vec![("C", 1), ("B", 2), ("A", 2)]);
    }

    #[test]
    fn test_levels_follow_stack_order_not_distance() {
        // A -> D directly, plus the longer A -> B -> D. A is pushed at
        // tentative level 2 through the direct edge, but B is popped first
        // and overwrites A's tentative level with 3 before A is finalized.
        // The assigned level is a function of push/pop order, not shortest
        // graph distance.
        let mut graph = Graph::new();
        let a = node("A");
        let b = node("B");
        let d = node("D");
        for n in [&a, &b, &d] {
            graph.add_node(Arc::clone(n));
        }
        graph.add_edge(&a, &d, 0);
        graph.add_edge(&a, &b, 0);
        graph.add_edge(&b, &d, 0);

        let path = PathFinder::find(&graph, &d);
        let hops: Vec<_> = path.iter().map(|n| (n.node.name.as_str(), n.level)).collect();
        assert_eq!(hops, vec![("D", 1), ("B", 2), ("A", 3)]);
    }

    #[test]
    fn test_cycle_terminates() {
        // A -> B and B -> A. The visited set keeps the walk finite.
        let mut graph = Graph::new();
        let a = node("A");
        let b = node("B");
        graph.add_node(Arc::clone(&a));
        graph.add_node(Arc::clone(&b));
        graph.add_edge(&a, &b, 0);
        graph.add_edge(&b, &a, 0);

        let path = PathFinder::find(&graph, &b);
        let hops: Vec<_> = path.iter().map(|n| (n.node.name.as_str(), n.level)).collect();
        assert_eq!(hops, vec![("B", 1), ("A", 2)]);
    }

    #[test]
    fn test_via_links_point_toward_destination() {
        let (graph, a, b, c) = chain_graph();
        let path = PathFinder::find(&graph, &c);

        let by_id: HashMap<Uuid, &PathNode> =
            path.iter().map(|n| (n.node.id, n)).collect();
        assert_eq!(by_id[&c.id].via, None);
        assert_eq!(by_id[&b.id].via, Some(c.id));
        assert_eq!(by_id[&a.id].via, Some(b.id));
    }
}
