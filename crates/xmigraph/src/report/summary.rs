//! Plain-text summary report.
//!
//! ```text
//! interfaces: 1
//!   Greeter (I1)
//!     operation greet (O1)
//!     realized by GreeterImpl (C1)
//! components: 1
//!   GreeterImpl (C1)
//!     realizes Greeter (I1)
//!     uses Greeter (I1)
//! wiring: 1
//!   GreeterImpl -> GreeterImpl via Greeter
//! ```

use std::fmt::{self, Write as _};

use xmigraph_core::{identifier::Id, model::Model};

use super::{Error, Reporter};
use crate::structure::ModelGraph;

/// Renders an indented plain-text summary.
#[derive(Debug, Clone, Copy)]
pub struct SummaryReporter {
    include_operations: bool,
    include_wiring: bool,
}

impl SummaryReporter {
    pub fn new(include_operations: bool, include_wiring: bool) -> Self {
        Self {
            include_operations,
            include_wiring,
        }
    }
}

fn component_name(model: &Model, id: Id) -> String {
    model
        .component(id)
        .map_or_else(|| id.to_string(), |component| component.name().to_string())
}

fn interface_name(model: &Model, id: Id) -> String {
    model
        .interface(id)
        .map_or_else(|| id.to_string(), |interface| interface.name().to_string())
}

impl SummaryReporter {
    fn write_summary(&self, out: &mut String, model: &Model, graph: &ModelGraph) -> fmt::Result {
        writeln!(out, "interfaces: {}", model.interfaces_count())?;
        for interface in model.interfaces() {
            writeln!(out, "  {interface}")?;
            if self.include_operations {
                for operation in interface.operations() {
                    writeln!(out, "    operation {} ({})", operation.name(), operation.id())?;
                }
            }
            for component in model.realizing_components(interface) {
                writeln!(out, "    realized by {component}")?;
            }
        }

        writeln!(out, "components: {}", model.components_count())?;
        for component in model.components() {
            writeln!(out, "  {component}")?;
            for interface in model.realized_interfaces(component) {
                writeln!(out, "    realizes {interface}")?;
            }
            for interface in model.used_interfaces(component) {
                writeln!(out, "    uses {interface}")?;
            }
        }

        if self.include_wiring {
            let wires = graph.wiring();
            writeln!(out, "wiring: {}", wires.len())?;
            for wire in wires {
                writeln!(
                    out,
                    "  {} -> {} via {}",
                    component_name(model, wire.consumer()),
                    component_name(model, wire.provider()),
                    interface_name(model, wire.interface())
                )?;
            }
        }

        let unrealized = graph.unrealized_interfaces();
        if !unrealized.is_empty() {
            writeln!(out, "unrealized: {}", unrealized.len())?;
            for id in unrealized {
                match model.interface(id) {
                    Some(interface) => writeln!(out, "  {interface}")?,
                    None => writeln!(out, "  {id}")?,
                }
            }
        }

        Ok(())
    }
}

impl Reporter for SummaryReporter {
    fn render(&self, model: &Model, graph: &ModelGraph) -> Result<String, Error> {
        let mut out = String::new();
        self.write_summary(&mut out, model, graph)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<uml:Model xmi:version="20131001" name="greeter">
  <packagedElement xmi:type="uml:Interface" xmi:id="I1" name="Greeter">
    <ownedOperation xmi:id="O1" name="greet"/>
  </packagedElement>
  <packagedElement xmi:type="uml:Interface" xmi:id="I2" name="Clock">
  </packagedElement>
  <packagedElement xmi:type="uml:Component" xmi:id="C1" name="GreeterImpl">
    <interfaceRealization xmi:id="R1" client="C1" supplier="I1" contract="I1"/>
    <packagedElement xmi:type="uml:Usage" xmi:id="U1" client="C1" supplier="I1"/>
    <packagedElement xmi:type="uml:Usage" xmi:id="U2" client="C1" supplier="I2"/>
  </packagedElement>
</uml:Model>
"#;

    fn render(reporter: SummaryReporter) -> String {
        let model = xmigraph_parser::parse(GREETER).expect("greeter parses");
        let graph = ModelGraph::from_model(&model);
        reporter.render(&model, &graph).expect("summary renders")
    }

    #[test]
    fn test_full_summary() {
        let expected = "\
interfaces: 2
  Greeter (I1)
    operation greet (O1)
    realized by GreeterImpl (C1)
  Clock (I2)
components: 1
  GreeterImpl (C1)
    realizes Greeter (I1)
    uses Greeter (I1)
    uses Clock (I2)
wiring: 1
  GreeterImpl -> GreeterImpl via Greeter
unrealized: 1
  Clock (I2)
";
        assert_eq!(render(SummaryReporter::new(true, true)), expected);
    }

    #[test]
    fn test_wiring_names_follow_entity_kind() {
        let source = r#"<uml:Model>
  <packagedElement xmi:type="uml:Interface" xmi:id="X" name="Api">
  </packagedElement>
  <packagedElement xmi:type="uml:Component" xmi:id="X" name="Server">
    <interfaceRealization xmi:id="R1" client="X" supplier="X" contract="X"/>
    <packagedElement xmi:type="uml:Usage" xmi:id="U1" client="X" supplier="X"/>
  </packagedElement>
</uml:Model>"#;
        let model = xmigraph_parser::parse(source).expect("shared id parses");
        let graph = ModelGraph::from_model(&model);
        let text = SummaryReporter::new(false, true)
            .render(&model, &graph)
            .expect("summary renders");

        assert!(text.contains("wiring: 1\n  Server -> Server via Api\n"));
        assert!(text.contains("  Server (X)\n    realizes Api (X)\n"));
    }

    #[test]
    fn test_summary_without_operations_or_wiring() {
        let text = render(SummaryReporter::new(false, false));

        assert!(!text.contains("operation greet"));
        assert!(!text.contains("wiring:"));
        assert!(text.contains("realized by GreeterImpl (C1)"));
    }
}
