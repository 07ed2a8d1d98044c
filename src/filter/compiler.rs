use anyhow::Result;

use super::definition::FilterDefinition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Pixel,
    Compute,
}

impl ShaderStage {
    /// Target profile passed to the compiler.
    pub fn profile(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_5_0",
            ShaderStage::Pixel => "ps_5_0",
            ShaderStage::Compute => "cs_5_0",
        }
    }
}

/// Turns shader source into a GPU module. Implemented by the rendering backend.
pub trait ShaderCompiler {
    type Module;

    fn compile(&self, stage: ShaderStage, source: &str, debug_name: &str) -> Result<Self::Module>;
}

impl FilterDefinition {
    /// Compile the filter's source as a compute shader.
    pub fn compile_with<C: ShaderCompiler>(&self, compiler: &C) -> Result<C::Module> {
        log::debug!(
            "Compiling '{}' ({})",
            self.name,
            ShaderStage::Compute.profile()
        );
        compiler
            .compile(ShaderStage::Compute, &self.source, &self.name)
            .map_err(|e| anyhow::anyhow!("{} compilation failed: {:#}", self.name, e))
    }
}
