//! Application services for task extraction.

mod model;
mod parser;

pub use model::{
    ModelExtractionError, ModelExtractor, ModelFailureKind, ModelFields, SchemaError,
    parse_model_response,
};
pub use parser::{DiagnosticParse, ExtractionConfig, ExtractionSource, ParseReport, TaskParser};
