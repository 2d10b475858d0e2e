//! JSON report.

use serde::Serialize;

use xmigraph_core::{identifier::Id, model::Model};

use super::{Error, Reporter};
use crate::structure::{ModelGraph, Wire};

/// Renders the model, its wiring and unrealized interfaces as pretty JSON.
#[derive(Debug, Clone, Copy)]
pub struct JsonReporter {
    include_wiring: bool,
}

impl JsonReporter {
    pub fn new(include_wiring: bool) -> Self {
        Self { include_wiring }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    model: &'a Model,
    #[serde(skip_serializing_if = "Option::is_none")]
    wiring: Option<Vec<Wire>>,
    unrealized_interfaces: Vec<Id>,
}

impl Reporter for JsonReporter {
    fn render(&self, model: &Model, graph: &ModelGraph) -> Result<String, Error> {
        let report = JsonReport {
            model,
            wiring: self.include_wiring.then(|| graph.wiring()),
            unrealized_interfaces: graph.unrealized_interfaces(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    const SOURCE: &str = r#"<uml:Model>
  <packagedElement xmi:type="uml:Interface" xmi:id="I1" name="Greeter">
    <ownedOperation xmi:id="O1" name="greet"/>
  </packagedElement>
  <packagedElement xmi:type="uml:Component" xmi:id="C1" name="GreeterImpl">
    <interfaceRealization xmi:id="R1" client="C1" supplier="I1" contract="I1"/>
  </packagedElement>
  <packagedElement xmi:type="uml:Component" xmi:id="C2" name="Client">
    <packagedElement xmi:type="uml:Usage" xmi:id="U1" client="C2" supplier="I1"/>
  </packagedElement>
</uml:Model>"#;

    fn render(include_wiring: bool) -> Value {
        let model = xmigraph_parser::parse(SOURCE).expect("model parses");
        let graph = ModelGraph::from_model(&model);
        let text = JsonReporter::new(include_wiring)
            .render(&model, &graph)
            .expect("json renders");
        serde_json::from_str(&text).expect("valid json")
    }

    #[test]
    fn test_json_report_contents() {
        let value = render(true);

        assert_eq!(value["model"]["interfaces"][0]["name"], "Greeter");
        assert_eq!(
            value["model"]["interfaces"][0]["operations"],
            json!([{ "id": "O1", "name": "greet" }])
        );
        assert_eq!(value["model"]["interfaces"][0]["realized_by"], json!(["C1"]));
        assert_eq!(value["model"]["components"][1]["uses"], json!(["I1"]));
        assert_eq!(
            value["wiring"],
            json!([{ "consumer": "C2", "provider": "C1", "interface": "I1" }])
        );
        assert_eq!(value["unrealized_interfaces"], json!([]));
    }

    #[test]
    fn test_json_report_without_wiring() {
        let value = render(false);
        assert!(value.get("wiring").is_none());
    }
}
