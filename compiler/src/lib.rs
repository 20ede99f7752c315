//! django2dart-compiler
//!
//! This crate implements:
//!  1) A depth-counting segmenter that splits raw text into declaration spans,
//!  2) A parser for `name = models.SomeField(...)` declarations,
//!  3) The Django field type → Dart type lookup table,
//!  4) Code generation (`compile_class_to_dart` → `String`),
//!  5) Error types (`ConvertError`) and non-fatal `Diagnostic`s.

pub mod error;
pub mod types;
pub mod utils;
pub mod segmenter;
pub mod parser;
pub mod type_map;
pub mod diagnostics;
pub mod compiler;
pub mod gen_dart;

pub use compiler::compile_model;
pub use compiler::transform;
pub use gen_dart::compile_class_to_dart;
pub use types::TransformOptions;
