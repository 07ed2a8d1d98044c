use serde::Serialize;
use std::collections::BTreeMap;

use super::parameter::{Parameter, TextureParameter};

/// A fully parsed filter script. Directive lines are blank in `source`, so line
/// numbers reported by the shader compiler match the original file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterDefinition {
    pub name: String,
    pub description: String,
    pub is_separable: bool,
    pub is_single_invocation: bool,
    pub parameters: Vec<Parameter>,
    pub textures: Vec<TextureParameter>,
    pub source: String,
}

impl FilterDefinition {
    /// First parameter declared with `name`.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Texture name to resource slot.
    pub fn texture_bindings(&self) -> BTreeMap<&str, i32> {
        self.textures
            .iter()
            .map(|t| (t.name.as_str(), t.binding))
            .collect()
    }

    pub fn line_count(&self) -> usize {
        self.source.lines().count()
    }
}
