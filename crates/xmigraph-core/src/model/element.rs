//! Entity types of the structural model.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

use crate::identifier::Id;

/// A named behavior declared by an [`Interface`] (`ownedOperation`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    id: Id,
    name: String,
}

impl Operation {
    /// Create a new operation.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Get the operation identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the operation name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named contract comprising an ordered list of operations.
///
/// The set of components realizing the interface is filled in during
/// resolution and is always the mirror image of [`Component::realizes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    id: Id,
    name: String,
    operations: Vec<Operation>,
    realized_by: IndexSet<Id>,
}

impl Interface {
    /// Create a new interface without any realizing components.
    pub fn new(id: Id, name: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            id,
            name: name.into(),
            operations,
            realized_by: IndexSet::new(),
        }
    }

    /// Get the interface identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the interface name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the declared operations in document order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Identifiers of the components realizing this interface.
    pub fn realized_by(&self) -> impl Iterator<Item = Id> + '_ {
        self.realized_by.iter().copied()
    }

    /// Returns `true` if the component with `id` realizes this interface.
    pub fn is_realized_by(&self, id: Id) -> bool {
        self.realized_by.contains(&id)
    }

    pub(crate) fn add_realizer(&mut self, component: Id) -> bool {
        self.realized_by.insert(component)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// An implementing unit that realizes and uses interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    id: Id,
    name: String,
    realizes: IndexSet<Id>,
    uses: IndexSet<Id>,
}

impl Component {
    /// Create a new component without relationships.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            realizes: IndexSet::new(),
            uses: IndexSet::new(),
        }
    }

    /// Get the component identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifiers of the interfaces this component realizes ("extends").
    pub fn realizes(&self) -> impl Iterator<Item = Id> + '_ {
        self.realizes.iter().copied()
    }

    /// Identifiers of the interfaces this component uses.
    pub fn uses(&self) -> impl Iterator<Item = Id> + '_ {
        self.uses.iter().copied()
    }

    /// Returns `true` if this component realizes the interface with `id`.
    pub fn does_realize(&self, id: Id) -> bool {
        self.realizes.contains(&id)
    }

    /// Returns `true` if this component uses the interface with `id`.
    pub fn does_use(&self, id: Id) -> bool {
        self.uses.contains(&id)
    }

    pub(crate) fn add_realized(&mut self, interface: Id) -> bool {
        self.realizes.insert(interface)
    }

    pub(crate) fn add_used(&mut self, interface: Id) -> bool {
        self.uses.insert(interface)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_keeps_operation_order() {
        let interface = Interface::new(
            Id::new("I1"),
            "Greeter",
            vec![
                Operation::new(Id::new("O1"), "greet"),
                Operation::new(Id::new("O2"), "farewell"),
            ],
        );

        let names: Vec<_> = interface.operations().iter().map(Operation::name).collect();
        assert_eq!(names, ["greet", "farewell"]);
        assert_eq!(interface.realized_by().count(), 0);
    }

    #[test]
    fn test_component_sets_ignore_duplicates() {
        let mut component = Component::new(Id::new("C1"), "GreeterImpl");

        assert!(component.add_realized(Id::new("I1")));
        assert!(!component.add_realized(Id::new("I1")));
        assert!(component.add_used(Id::new("I1")));

        assert_eq!(component.realizes().count(), 1);
        assert!(component.does_realize(Id::new("I1")));
        assert!(component.does_use(Id::new("I1")));
    }

    #[test]
    fn test_display_shows_name_and_id() {
        let component = Component::new(Id::new("C7"), "Billing");
        assert_eq!(component.to_string(), "Billing (C7)");
    }
}
