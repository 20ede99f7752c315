use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    diagnostics::{collect_diagnostics, Diagnostic},
    error::ConvertError,
    gen_dart::compile_class_to_dart,
    parser::parse_declaration,
    segmenter::segment_declarations,
    types::{GeneratedClass, TransformOptions},
    utils::is_dart_identifier,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub class:       GeneratedClass,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compile raw Django field declarations into a `GeneratedClass`.
/// Returns `Err(ConvertError)` on the first malformed declaration; nothing
/// is produced in that case.
pub fn compile_model(text: &str, options: &TransformOptions) -> Result<Compilation, ConvertError> {
    if !is_dart_identifier(&options.class_name) {
        return Err(ConvertError::InvalidClassName(options.class_name.clone()));
    }

    let spans = segment_declarations(text)?;
    let mut fields = Vec::with_capacity(spans.len());
    for span in &spans {
        if let Some(field) = parse_declaration(&span.text, span.line, options.use_camel_case)? {
            fields.push(field);
        }
    }

    let diagnostics = collect_diagnostics(&fields);
    for diagnostic in &diagnostics {
        warn!("{}", diagnostic);
    }
    debug!(class = %options.class_name, fields = fields.len(), "compiled model");

    Ok(Compilation {
        class: GeneratedClass {
            name: options.class_name.clone(),
            fields,
        },
        diagnostics,
    })
}

/// Turn raw Django field declarations into the source of a Dart class.
pub fn transform(raw_text: &str, class_name: &str, use_camel_case: bool) -> Result<String, ConvertError> {
    let compilation = compile_model(raw_text, &TransformOptions::new(class_name, use_camel_case))?;
    Ok(compile_class_to_dart(&compilation.class))
}
