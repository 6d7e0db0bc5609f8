//! Directed warehouse graph and its edge index

use crate::node::Node;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// A directed sender -> recipient relationship between two nodes.
///
/// The weight is reserved for cost-sensitive routing; nothing consumes it
/// yet and the service always records 0.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: Arc<Node>,
    pub to: Arc<Node>,
    pub weight: i32,
}

/// Combined incoming/outgoing edge index.
///
/// Every edge is appended to the bucket of both endpoints; a directional
/// query reads one bucket and filters for entries where the queried node
/// actually sits on the asked-for side. One map instead of two, at the
/// price of a second entry per edge.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    buckets: HashMap<Uuid, Vec<Edge>>,
}

impl EdgeIndex {
    pub fn add(&mut self, from: Arc<Node>, to: Arc<Node>, weight: i32) {
        let edge = Edge { from, to, weight };
        self.buckets
            .entry(edge.to.id)
            .or_default()
            .push(edge.clone());
        self.buckets.entry(edge.from.id).or_default().push(edge);
    }

    /// Edges whose destination is `node`
    pub fn incoming_to(&self, node: &Node) -> Vec<&Edge> {
        match self.buckets.get(&node.id) {
            Some(edges) => edges.iter().filter(|e| e.to.id == node.id).collect(),
            None => Vec::new(),
        }
    }

    /// Edges whose source is `node`
    pub fn outgoing_from(&self, node: &Node) -> Vec<&Edge> {
        match self.buckets.get(&node.id) {
            Some(edges) => edges.iter().filter(|e| e.from.id == node.id).collect(),
            None => Vec::new(),
        }
    }

    /// The raw bucket for `node`: every edge touching it, either direction
    pub fn edges(&self, node: &Node) -> Option<&[Edge]> {
        self.buckets.get(&node.id).map(|edges| edges.as_slice())
    }
}

/// Directed graph of warehouse nodes
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<Uuid, Arc<Node>>,
    edges: EdgeIndex,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if its id is new. Re-adding an existing id is a no-op;
    /// the first insertion wins.
    pub fn add_node(&mut self, node: Arc<Node>) {
        if self.nodes.contains_key(&node.id) {
            return;
        }
        self.nodes.insert(node.id, node);
    }

    /// Record a directed edge. Endpoints are not required to be registered
    /// in the node set; an edge referencing an unregistered node is legal
    /// and simply never surfaces through `find` for that endpoint.
    pub fn add_edge(&mut self, from: &Arc<Node>, to: &Arc<Node>, weight: i32) {
        self.edges.add(Arc::clone(from), Arc::clone(to), weight);
    }

    pub fn find(&self, id: &Uuid) -> Option<Arc<Node>> {
        self.nodes.get(id).cloned()
    }

    /// Nodes reachable via a single forward edge from `node`
    pub fn outgoing(&self, node: &Node) -> Vec<Arc<Node>> {
        self.edges
            .outgoing_from(node)
            .into_iter()
            .map(|e| Arc::clone(&e.to))
            .collect()
    }

    pub fn incoming_to(&self, node: &Node) -> Vec<&Edge> {
        self.edges.incoming_to(node)
    }

    pub fn outgoing_from(&self, node: &Node) -> Vec<&Edge> {
        self.edges.outgoing_from(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
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

    #[test]
    fn test_add_node_idempotent() {
        let mut graph = Graph::new();
        let a = node("A");
        let duplicate = Arc::new(Node {
            name: "A again".to_string(),
            ..(*a).clone()
        });

        graph.add_node(Arc::clone(&a));
        graph.add_node(duplicate);

        assert_eq!(graph.node_count(), 1);
        // First insertion wins
        assert_eq!(graph.find(&a.id).unwrap().name, "A");
    }

    #[test]
    fn test_find_missing() {
        let graph = Graph::new();
        assert!(graph.find(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_directional_queries() {
        let mut graph = Graph::new();
        let u = node("U");
        let v = node("V");
        graph.add_node(Arc::clone(&u));
        graph.add_node(Arc::clone(&v));
        graph.add_edge(&u, &v, 0);

        let out_u = graph.outgoing_from(&u);
        assert_eq!(out_u.len(), 1);
        assert_eq!(out_u[0].to.id, v.id);

        let in_v = graph.incoming_to(&v);
        assert_eq!(in_v.len(), 1);
        assert_eq!(in_v[0].from.id, u.id);

        // The edge lands in both buckets but must not answer the
        // opposite-direction queries.
        assert!(graph.outgoing_from(&v).is_empty());
        assert!(graph.incoming_to(&u).is_empty());
    }

    #[test]
    fn test_hub_fanout() {
        let mut graph = Graph::new();
        let hub = node("hub");
        let spokes: Vec<_> = ["A", "B", "C", "D"].iter().map(|n| node(n)).collect();

        graph.add_node(Arc::clone(&hub));
        for spoke in &spokes {
            graph.add_node(Arc::clone(spoke));
            graph.add_edge(&hub, spoke, 0);
        }

        assert_eq!(graph.outgoing(&hub).len(), 4);
        for spoke in &spokes {
            let incoming = graph.incoming_to(spoke);
            assert_eq!(incoming.len(), 1);
            assert_eq!(incoming[0].from.id, hub.id);
        }
    }

    #[test]
    fn test_edge_to_unregistered_node() {
        let mut graph = Graph::new();
        let known = node("known");
        let ghost = node("ghost");
        graph.add_node(Arc::clone(&known));
        graph.add_edge(&ghost, &known, 0);

        // The edge is queryable through the registered endpoint even though
        // its source was never added to the node set.
        let incoming = graph.incoming_to(&known);
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].from.id, ghost.id);
        assert!(graph.find(&ghost.id).is_none());
    }

    #[test]
    fn test_bucket_holds_both_directions() {
        let mut graph = Graph::new();
        let a = node("A");
        let b = node("B");
        let c = node("C");
        graph.add_node(Arc::clone(&a));
        graph.add_node(Arc::clone(&b));
        graph.add_node(Arc::clone(&c));
        graph.add_edge(&a, &b, 0);
        graph.add_edge(&b, &c, 0);

        // B's bucket carries the incoming edge from A and the outgoing edge
        // to C in one shared structure.
        let bucket = graph.edges.edges(&b).unwrap();
        assert_eq!(bucket.len(), 2);
        assert_eq!(graph.incoming_to(&b).len(), 1);
        assert_eq!(graph.outgoing_from(&b).len(), 1);
    }
}
