//! xmigraph - Component/interface graphs from UML model-interchange documents.
//!
//! Parsing, graph construction and reporting for XMI documents that declare
//! components, interfaces, interface realizations and usages.

pub mod config;
pub mod report;
pub mod structure;

mod error;

pub use xmigraph_core::{identifier, model};

pub use error::XmiGraphError;

use log::{debug, info, trace};

use config::AppConfig;
use model::Model;
use structure::ModelGraph;

/// Pipeline for parsing and reporting on model-interchange documents.
///
/// # Examples
///
/// ```rust
/// use xmigraph::{Pipeline, config::AppConfig};
///
/// let source = r#"<uml:Model>
///   <packagedElement xmi:type="uml:Interface" xmi:id="I1" name="Greeter">
///   </packagedElement>
/// </uml:Model>"#;
///
/// let pipeline = Pipeline::new(AppConfig::default());
///
/// // Parse source to the resolved model
/// let model = pipeline.parse(source).expect("Failed to parse");
///
/// // Render the configured report
/// let report = pipeline.report(&model).expect("Failed to render");
/// assert!(report.contains("Greeter (I1)"));
///
/// // Or use default config
/// let pipeline = Pipeline::default();
/// ```
#[derive(Default)]
pub struct Pipeline {
    config: AppConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a document into a resolved model.
    ///
    /// # Errors
    ///
    /// Returns [`XmiGraphError::Parse`] carrying the document text when the
    /// document is rejected.
    pub fn parse(&self, source: &str) -> Result<Model, XmiGraphError> {
        info!(bytes = source.len(); "Parsing document");

        let model = xmigraph_parser::parse(source)
            .map_err(|err| XmiGraphError::new_parse_error(err, source))?;

        debug!(
            components = model.components_count(),
            interfaces = model.interfaces_count();
            "Document parsed successfully"
        );
        trace!(model:?; "Parsed model");

        Ok(model)
    }

    /// Build the dependency graph of a model.
    pub fn graph(&self, model: &Model) -> ModelGraph {
        ModelGraph::from_model(model)
    }

    /// Render the report selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`XmiGraphError::Report`] if the report cannot be encoded.
    pub fn report(&self, model: &Model) -> Result<String, XmiGraphError> {
        let graph = self.graph(model);
        let report_config = self.config.report();
        info!(format:? = report_config.format(); "Rendering report");

        let output = report::reporter(report_config).render(model, &graph)?;

        debug!(bytes = output.len(); "Report rendered");
        Ok(output)
    }
}
