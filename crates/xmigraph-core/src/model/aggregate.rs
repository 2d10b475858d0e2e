//! The finished, resolved model.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::{
    identifier::Id,
    model::{Component, Interface},
};

/// The resolved graph of components and interfaces.
///
/// A `Model` is produced by [`ModelBuilder::build`](crate::model::ModelBuilder::build)
/// and is read-only afterwards. Entities keep the order in which they were
/// declared in the source document.
///
/// Every identifier stored on an edge is guaranteed to name an entity of the
/// right kind, so the edge-following accessors (e.g.
/// [`Model::realized_interfaces`]) never skip anything for a component or
/// interface obtained from the same model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Model {
    #[serde(serialize_with = "serialize_values")]
    components: IndexMap<Id, Component>,
    #[serde(serialize_with = "serialize_values")]
    interfaces: IndexMap<Id, Interface>,
}

impl Model {
    pub(crate) fn new(
        components: IndexMap<Id, Component>,
        interfaces: IndexMap<Id, Interface>,
    ) -> Self {
        Self {
            components,
            interfaces,
        }
    }

    /// Iterate over all components in declaration order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Iterate over all interfaces in declaration order.
    pub fn interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.interfaces.values()
    }

    /// Look up a component by identifier.
    pub fn component(&self, id: Id) -> Option<&Component> {
        self.components.get(&id)
    }

    /// Look up an interface by identifier.
    pub fn interface(&self, id: Id) -> Option<&Interface> {
        self.interfaces.get(&id)
    }

    /// Number of components.
    pub fn components_count(&self) -> usize {
        self.components.len()
    }

    /// Number of interfaces.
    pub fn interfaces_count(&self) -> usize {
        self.interfaces.len()
    }

    /// Returns `true` if the model contains no entities at all.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.interfaces.is_empty()
    }

    /// Interfaces realized by `component`.
    pub fn realized_interfaces<'a>(
        &'a self,
        component: &'a Component,
    ) -> impl Iterator<Item = &'a Interface> {
        component.realizes().filter_map(|id| self.interfaces.get(&id))
    }

    /// Interfaces used by `component`.
    pub fn used_interfaces<'a>(
        &'a self,
        component: &'a Component,
    ) -> impl Iterator<Item = &'a Interface> {
        component.uses().filter_map(|id| self.interfaces.get(&id))
    }

    /// Components realizing `interface`.
    pub fn realizing_components<'a>(
        &'a self,
        interface: &'a Interface,
    ) -> impl Iterator<Item = &'a Component> {
        interface
            .realized_by()
            .filter_map(|id| self.components.get(&id))
    }

    /// Components using `interface`.
    pub fn using_components<'a>(
        &'a self,
        interface: &'a Interface,
    ) -> impl Iterator<Item = &'a Component> {
        let id = interface.id();
        self.components
            .values()
            .filter(move |component| component.does_use(id))
    }
}

fn serialize_values<V, S>(map: &IndexMap<Id, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    V: Serialize,
    S: Serializer,
{
    serializer.collect_seq(map.values())
}
