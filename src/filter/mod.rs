//! Filter scripts: shader source annotated with `#param`, `#paramprop`, `#texture`,
//! `#setting` and `#keybinding` directives.

pub mod coerce;
pub mod compiler;
pub mod definition;
pub mod directive;
pub mod error;
pub mod key;
pub mod library;
pub mod loader;
pub mod parameter;
pub mod tokenizer;

pub use compiler::{ShaderCompiler, ShaderStage};
pub use definition::FilterDefinition;
pub use error::{DirectiveError, FilterError};
pub use key::Key;
pub use loader::{load_file, parse_str, FilterLoader};
pub use parameter::{
    Action, ActionType, ModificationType, Parameter, ParameterData, ParameterKind,
    ParameterValue, TextureParameter, ValueKind,
};
