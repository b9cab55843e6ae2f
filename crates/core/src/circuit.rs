//! Circuit graph and net resolution.
//!
//! A [`Circuit`] owns an ordered collection of components, an arena of
//! terminal pins, and the disjoint-set tracking which pins are wired
//! together. [`Circuit::resolve_nodes`] turns the pin partition into a
//! canonical node numbering: every net reachable from a ground terminal
//! maps to node 0, everything else gets a dense positive id. Resolved ids
//! live in a table owned by the circuit and are read through
//! [`Circuit::node_id`]; components are never written back to.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::debug;

use crate::component::Component;
use crate::disjoint::DisjointSet;
use crate::errors::{CircuitError, Result};
use crate::node::NodeId;

/// Index of a component within one circuit. Minted by [`Circuit::add`];
/// not meaningful for any other circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A pin reference: a component plus one of its terminal names.
pub type PinRef<'a> = (ComponentId, &'a str);

#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// Components keyed by name, in insertion order.
    components: IndexMap<String, Component>,
    /// First pin key of each component's terminals, parallel to `components`.
    pin_base: Vec<usize>,
    /// One disjoint-set entry per registered terminal pin.
    pins: DisjointSet,
    /// Pin key -> resolved node id. Valid only while `resolved` is set.
    node_table: Vec<NodeId>,
    resolved: bool,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component, registering one pin per terminal. If a component
    /// with the same name is already present, its id is returned and the
    /// circuit is unchanged.
    pub fn add(&mut self, component: Component) -> ComponentId {
        if let Some(idx) = self.components.get_index_of(component.name()) {
            return ComponentId(idx);
        }
        self.pin_base.push(self.pins.len());
        for _ in component.terminals() {
            self.pins.push();
        }
        let (idx, _) = self
            .components
            .insert_full(component.name().to_string(), component);
        self.resolved = false;
        ComponentId(idx)
    }

    /// Wire two pins together. Symmetric; declaring the same connection
    /// twice is a no-op. Fails fast when either terminal name does not
    /// exist on its component.
    pub fn connect(&mut self, a: PinRef<'_>, b: PinRef<'_>) -> Result<()> {
        let pin_a = self.pin_key(a.0, a.1)?;
        let pin_b = self.pin_key(b.0, b.1)?;
        self.pins.union(pin_a, pin_b);
        self.resolved = false;
        Ok(())
    }

    /// Recompute the node numbering from scratch.
    ///
    /// Deterministic for a given sequence of `add`/`connect` calls: roots
    /// are numbered in pin-insertion order. Re-invoking without intervening
    /// edits yields the identical assignment.
    pub fn resolve_nodes(&mut self) {
        let mut ground_roots = HashSet::new();
        for idx in 0..self.components.len() {
            if !self.components[idx].is_ground() {
                continue;
            }
            let base = self.pin_base[idx];
            for offset in 0..self.components[idx].terminals().len() {
                let root = self.pins.find(base + offset);
                ground_roots.insert(root);
            }
        }

        let mut assigned: HashMap<usize, NodeId> = HashMap::new();
        let mut next = 1u32;
        let mut table = Vec::with_capacity(self.pins.len());
        for pin in 0..self.pins.len() {
            let root = self.pins.find(pin);
            let id = *assigned.entry(root).or_insert_with(|| {
                if ground_roots.contains(&root) {
                    NodeId::GROUND
                } else {
                    let id = NodeId(next);
                    next += 1;
                    id
                }
            });
            table.push(id);
        }

        debug!(
            "resolved {} pins into {} nodes ({} ground roots)",
            table.len(),
            next - 1,
            ground_roots.len()
        );
        self.node_table = table;
        self.resolved = true;
    }

    /// Resolved node id of a pin. Errors on an unknown terminal, or when
    /// the circuit has been edited since the last [`Circuit::resolve_nodes`]
    /// (there is no sentinel value to misread; an unresolved pin is an
    /// explicit error, not node 0).
    pub fn node_id(&self, id: ComponentId, terminal: &str) -> Result<NodeId> {
        let pin = self.pin_key(id, terminal)?;
        if !self.resolved {
            let component = self.components[id.0].name().to_string();
            return Err(CircuitError::Unresolved {
                component,
                terminal: terminal.to_string(),
            });
        }
        Ok(self.node_table[pin])
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Number of distinct non-ground nodes in the last resolution pass.
    pub fn node_count(&self) -> usize {
        if !self.resolved {
            return 0;
        }
        self.node_table
            .iter()
            .filter(|n| !n.is_ground())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn component(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }

    pub fn find(&self, name: &str) -> Option<ComponentId> {
        self.components.get_index_of(name).map(ComponentId)
    }

    pub fn components(&self) -> impl Iterator<Item = (ComponentId, &Component)> {
        self.components
            .values()
            .enumerate()
            .map(|(idx, c)| (ComponentId(idx), c))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn pin_key(&self, id: ComponentId, terminal: &str) -> Result<usize> {
        let component = &self.components[id.0];
        let offset = component.terminal_index(terminal).ok_or_else(|| {
            CircuitError::UnknownTerminal {
                component: component.name().to_string(),
                terminal: terminal.to_string(),
                available: component.terminals().to_vec(),
            }
        })?;
        Ok(self.pin_base[id.0] + offset)
    }
}
