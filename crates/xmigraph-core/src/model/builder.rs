//! Incremental construction of a [`Model`].
//!
//! The builder doubles as the forward-reference directory used while a
//! document is resolved: entities are registered first, relationships are
//! linked afterwards by identifier, so a relationship may name an entity that
//! was declared later in the document.

use std::fmt;

use indexmap::IndexMap;
use log::trace;
use thiserror::Error;

use crate::{
    identifier::Id,
    model::{Component, Interface, Model},
};

/// Which endpoint(s) of a relationship could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEndpoint {
    /// The component side is unknown.
    Component,
    /// The interface side is unknown.
    Interface,
    /// Neither side is known.
    Both,
}

impl MissingEndpoint {
    fn detect(has_component: bool, has_interface: bool) -> Option<Self> {
        match (has_component, has_interface) {
            (true, true) => None,
            (false, true) => Some(Self::Component),
            (true, false) => Some(Self::Interface),
            (false, false) => Some(Self::Both),
        }
    }

    /// Returns `true` if the component side is missing.
    pub fn component(self) -> bool {
        matches!(self, Self::Component | Self::Both)
    }

    /// Returns `true` if the interface side is missing.
    pub fn interface(self) -> bool {
        matches!(self, Self::Interface | Self::Both)
    }
}

impl fmt::Display for MissingEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component => write!(f, "component"),
            Self::Interface => write!(f, "interface"),
            Self::Both => write!(f, "component and interface"),
        }
    }
}

/// A relationship named an entity that is not registered in the builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("could not find interface for realization: {component} -> {interface}")]
    Realization {
        component: Id,
        interface: Id,
        missing: MissingEndpoint,
    },

    #[error("could not find source or target for usage: {component} -> {interface}")]
    Usage {
        component: Id,
        interface: Id,
        missing: MissingEndpoint,
    },
}

impl LinkError {
    /// The endpoint(s) that failed to resolve.
    pub fn missing(&self) -> MissingEndpoint {
        match self {
            Self::Realization { missing, .. } | Self::Usage { missing, .. } => *missing,
        }
    }
}

/// Builder collecting entities and linking relationships between them.
///
/// # Example
///
/// ```
/// use xmigraph_core::{
///     identifier::Id,
///     model::{Component, Interface, ModelBuilder, Operation},
/// };
///
/// let mut builder = ModelBuilder::new();
/// builder.add_component(Component::new(Id::new("C1"), "GreeterImpl"));
/// builder.add_interface(Interface::new(
///     Id::new("I1"),
///     "Greeter",
///     vec![Operation::new(Id::new("O1"), "greet")],
/// ));
/// builder.link_realization(Id::new("C1"), Id::new("I1")).unwrap();
///
/// let model = builder.build();
/// let greeter = model.interface(Id::new("I1")).unwrap();
/// assert!(greeter.is_realized_by(Id::new("C1")));
/// ```
#[derive(Debug, Default)]
pub struct ModelBuilder {
    components: IndexMap<Id, Component>,
    interfaces: IndexMap<Id, Interface>,
}

impl ModelBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component.
    ///
    /// A component with the same identifier is replaced and returned; the
    /// replacement keeps the earlier declaration position.
    pub fn add_component(&mut self, component: Component) -> Option<Component> {
        self.components.insert(component.id(), component)
    }

    /// Register an interface.
    ///
    /// An interface with the same identifier is replaced and returned; the
    /// replacement keeps the earlier declaration position.
    pub fn add_interface(&mut self, interface: Interface) -> Option<Interface> {
        self.interfaces.insert(interface.id(), interface)
    }

    /// Returns `true` if a component with `id` is registered.
    pub fn contains_component(&self, id: Id) -> bool {
        self.components.contains_key(&id)
    }

    /// Returns `true` if an interface with `id` is registered.
    pub fn contains_interface(&self, id: Id) -> bool {
        self.interfaces.contains_key(&id)
    }

    /// Record that `component` realizes `interface`.
    ///
    /// Both directions ("realizes" on the component, "realized by" on the
    /// interface) are updated together, and only after both endpoints were
    /// found. Linking the same pair twice has no further effect.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Realization`] if either endpoint is unknown.
    pub fn link_realization(&mut self, component: Id, interface: Id) -> Result<(), LinkError> {
        match (
            self.components.get_mut(&component),
            self.interfaces.get_mut(&interface),
        ) {
            (Some(source), Some(target)) => {
                let added = source.add_realized(interface);
                target.add_realizer(component);
                trace!(component:% = component, interface:% = interface, added; "Linked realization");
                Ok(())
            }
            (source, target) => Err(LinkError::Realization {
                component,
                interface,
                missing: MissingEndpoint::detect(source.is_some(), target.is_some())
                    .unwrap_or(MissingEndpoint::Both),
            }),
        }
    }

    /// Record that `component` uses `interface`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Usage`] if either endpoint is unknown.
    pub fn link_usage(&mut self, component: Id, interface: Id) -> Result<(), LinkError> {
        let has_interface = self.interfaces.contains_key(&interface);
        match self.components.get_mut(&component) {
            Some(source) if has_interface => {
                let added = source.add_used(interface);
                trace!(component:% = component, interface:% = interface, added; "Linked usage");
                Ok(())
            }
            source => Err(LinkError::Usage {
                component,
                interface,
                missing: MissingEndpoint::detect(source.is_some(), has_interface)
                    .unwrap_or(MissingEndpoint::Both),
            }),
        }
    }

    /// Finish building and return the immutable [`Model`].
    pub fn build(self) -> Model {
        Model::new(self.components, self.interfaces)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::model::Operation;

    fn greeter_builder() -> ModelBuilder {
        let mut builder = ModelBuilder::new();
        builder.add_interface(Interface::new(
            Id::new("I1"),
            "Greeter",
            vec![Operation::new(Id::new("O1"), "greet")],
        ));
        builder.add_component(Component::new(Id::new("C1"), "GreeterImpl"));
        builder
    }

    #[test]
    fn test_link_realization_updates_both_sides() {
        let mut builder = greeter_builder();
        builder
            .link_realization(Id::new("C1"), Id::new("I1"))
            .expect("both endpoints exist");

        let model = builder.build();
        let component = model.component(Id::new("C1")).unwrap();
        let interface = model.interface(Id::new("I1")).unwrap();

        assert!(component.does_realize(Id::new("I1")));
        assert!(interface.is_realized_by(Id::new("C1")));
        assert_eq!(
            model
                .realized_interfaces(component)
                .map(Interface::name)
                .collect::<Vec<_>>(),
            ["Greeter"]
        );
        assert_eq!(
            model
                .realizing_components(interface)
                .map(Component::name)
                .collect::<Vec<_>>(),
            ["GreeterImpl"]
        );
    }

    #[test]
    fn test_link_realization_twice_is_idempotent() {
        let mut builder = greeter_builder();
        builder.link_realization(Id::new("C1"), Id::new("I1")).unwrap();
        builder.link_realization(Id::new("C1"), Id::new("I1")).unwrap();

        let model = builder.build();
        assert_eq!(model.component(Id::new("C1")).unwrap().realizes().count(), 1);
        assert_eq!(model.interface(Id::new("I1")).unwrap().realized_by().count(), 1);
    }

    #[test]
    fn test_link_realization_unknown_interface_leaves_component_untouched() {
        let mut builder = greeter_builder();
        let err = builder
            .link_realization(Id::new("C1"), Id::new("I9"))
            .unwrap_err();

        assert_eq!(err.missing(), MissingEndpoint::Interface);
        assert_eq!(
            err.to_string(),
            "could not find interface for realization: C1 -> I9"
        );

        let model = builder.build();
        assert_eq!(model.component(Id::new("C1")).unwrap().realizes().count(), 0);
    }

    #[test]
    fn test_link_realization_rejects_swapped_kinds() {
        let mut builder = greeter_builder();
        let err = builder
            .link_realization(Id::new("I1"), Id::new("C1"))
            .unwrap_err();

        assert_eq!(err.missing(), MissingEndpoint::Both);
    }

    #[test]
    fn test_link_usage() {
        let mut builder = greeter_builder();
        builder.link_usage(Id::new("C1"), Id::new("I1")).unwrap();

        let model = builder.build();
        let component = model.component(Id::new("C1")).unwrap();
        let interface = model.interface(Id::new("I1")).unwrap();
        assert!(component.does_use(Id::new("I1")));
        assert!(!component.does_realize(Id::new("I1")));
        assert_eq!(model.using_components(interface).count(), 1);
        assert_eq!(model.realizing_components(interface).count(), 0);
    }

    #[test]
    fn test_link_usage_unknown_component() {
        let mut builder = greeter_builder();
        let err = builder.link_usage(Id::new("C2"), Id::new("I1")).unwrap_err();

        assert_eq!(err.missing(), MissingEndpoint::Component);
        assert!(err.missing().component());
        assert!(!err.missing().interface());
        assert_eq!(
            err.to_string(),
            "could not find source or target for usage: C2 -> I1"
        );
    }

    #[test]
    fn test_replacing_entity_keeps_position() {
        let mut builder = ModelBuilder::new();
        builder.add_component(Component::new(Id::new("A"), "First"));
        builder.add_component(Component::new(Id::new("B"), "Second"));
        let replaced = builder.add_component(Component::new(Id::new("A"), "Renamed"));

        assert_eq!(replaced.map(|c| c.name().to_string()), Some("First".into()));

        let model = builder.build();
        let names: Vec<_> = model.components().map(Component::name).collect();
        assert_eq!(names, ["Renamed", "Second"]);
    }

    fn check_realizations_are_symmetric(pairs: &[(usize, usize)]) -> Result<(), TestCaseError> {
        let mut builder = ModelBuilder::new();
        for i in 0..4 {
            builder.add_component(Component::new(Id::new(&format!("pc{i}")), format!("C{i}")));
            builder.add_interface(Interface::new(
                Id::new(&format!("pi{i}")),
                format!("I{i}"),
                Vec::new(),
            ));
        }
        for (c, i) in pairs {
            builder
                .link_realization(Id::new(&format!("pc{c}")), Id::new(&format!("pi{i}")))
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
        }

        let model = builder.build();
        for component in model.components() {
            for interface in model.realized_interfaces(component) {
                prop_assert!(interface.is_realized_by(component.id()));
            }
        }
        for interface in model.interfaces() {
            for component in model.realizing_components(interface) {
                prop_assert!(component.does_realize(interface.id()));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn realizations_are_symmetric(pairs in prop::collection::vec((0usize..4, 0usize..4), 0..16)) {
            check_realizations_are_symmetric(&pairs)?;
        }
    }
}
