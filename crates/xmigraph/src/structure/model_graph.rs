use std::collections::HashMap;

use log::{debug, trace};
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use serde::Serialize;

use xmigraph_core::{identifier::Id, model::Model};

/// The kind of entity a graph node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Component,
    Interface,
}

/// A component-to-interface edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    Realizes,
    Uses,
}

#[derive(Debug, Clone, Copy)]
struct Node {
    id: Id,
    kind: NodeKind,
}

/// A derived component-to-component dependency.
///
/// `consumer` uses `interface`, which `provider` realizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Wire {
    consumer: Id,
    provider: Id,
    interface: Id,
}

impl Wire {
    pub fn consumer(&self) -> Id {
        self.consumer
    }

    pub fn provider(&self) -> Id {
        self.provider
    }

    pub fn interface(&self) -> Id {
        self.interface
    }
}

/// Directed graph of components and interfaces.
///
/// Nodes are added in model order, interfaces first, and every edge points
/// from a component to an interface. Query results follow node order, so
/// they are stable across runs.
#[derive(Debug)]
pub struct ModelGraph {
    graph: DiGraph<Node, Relation>,
    node_id_map: HashMap<(NodeKind, Id), NodeIndex>,
}

impl ModelGraph {
    /// Build the graph for `model`.
    pub fn from_model(model: &Model) -> Self {
        let mut graph = DiGraph::new();
        let mut node_id_map = HashMap::new();

        for interface in model.interfaces() {
            let node = Node {
                id: interface.id(),
                kind: NodeKind::Interface,
            };
            node_id_map.insert((NodeKind::Interface, interface.id()), graph.add_node(node));
        }
        for component in model.components() {
            let node = Node {
                id: component.id(),
                kind: NodeKind::Component,
            };
            node_id_map.insert((NodeKind::Component, component.id()), graph.add_node(node));
        }

        for component in model.components() {
            let Some(&source) = node_id_map.get(&(NodeKind::Component, component.id())) else {
                continue;
            };
            let edges = component
                .realizes()
                .map(|id| (id, Relation::Realizes))
                .chain(component.uses().map(|id| (id, Relation::Uses)));

            for (interface, relation) in edges {
                if let Some(&target) = node_id_map.get(&(NodeKind::Interface, interface)) {
                    trace!(component:% = component.id(), interface:% = interface, relation:?; "Adding edge");
                    graph.add_edge(source, target, relation);
                }
            }
        }

        debug!(nodes = graph.node_count(), edges = graph.edge_count(); "Model graph built");
        Self { graph, node_id_map }
    }

    pub fn nodes_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edges_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges as `(component, interface, relation)`, in insertion order.
    pub fn relations(&self) -> impl Iterator<Item = (Id, Id, Relation)> + '_ {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].id,
                self.graph[edge.target()].id,
                *edge.weight(),
            )
        })
    }

    /// Components realizing `interface`.
    pub fn realizers(&self, interface: Id) -> Vec<Id> {
        self.sources(interface, Relation::Realizes)
            .into_iter()
            .map(|idx| self.graph[idx].id)
            .collect()
    }

    /// Components using `interface`.
    pub fn consumers(&self, interface: Id) -> Vec<Id> {
        self.sources(interface, Relation::Uses)
            .into_iter()
            .map(|idx| self.graph[idx].id)
            .collect()
    }

    /// Component-to-component wiring through shared interfaces.
    ///
    /// One wire per usage and realizer of the used interface, ordered by
    /// consumer, then usage, then provider. A component that uses an
    /// interface it realizes itself is wired to itself.
    pub fn wiring(&self) -> Vec<Wire> {
        let mut usages: Vec<_> = self
            .graph
            .edge_references()
            .filter(|edge| *edge.weight() == Relation::Uses)
            .map(|edge| (edge.source(), edge.target()))
            .collect();
        usages.sort();

        let mut wires = Vec::new();
        for (consumer, interface) in usages {
            let interface_id = self.graph[interface].id;
            for provider in self.sources(interface_id, Relation::Realizes) {
                wires.push(Wire {
                    consumer: self.graph[consumer].id,
                    provider: self.graph[provider].id,
                    interface: interface_id,
                });
            }
        }
        wires
    }

    /// Interfaces that are used but realized by no component.
    pub fn unrealized_interfaces(&self) -> Vec<Id> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph[idx].kind == NodeKind::Interface)
            .filter(|&idx| {
                let incoming = || self.graph.edges_directed(idx, Direction::Incoming);
                incoming().any(|edge| *edge.weight() == Relation::Uses)
                    && !incoming().any(|edge| *edge.weight() == Relation::Realizes)
            })
            .map(|idx| self.graph[idx].id)
            .collect()
    }

    /// Source nodes of `relation` edges into `interface`, in node order.
    fn sources(&self, interface: Id, relation: Relation) -> Vec<NodeIndex> {
        let Some(&target) = self.node_id_map.get(&(NodeKind::Interface, interface)) else {
            return Vec::new();
        };

        let mut sources: Vec<NodeIndex> = self
            .graph
            .edges_directed(target, Direction::Incoming)
            .filter(|edge| *edge.weight() == relation)
            .map(|edge| edge.source())
            .collect();
        sources.sort();
        sources.dedup();
        sources
    }
}
