pub mod diagram;
pub mod error;
pub mod locate;
pub mod outline;
pub mod parse;
pub mod position;
pub mod validate;
pub mod wasm;
pub mod yaql;

pub use error::{Diagnostic, DiagnosticKind};
pub use position::{Position, Range};
pub use validate::validate_document;
