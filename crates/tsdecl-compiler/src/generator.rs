//! High-level facade: roots in, TypeScript out.

use tsdecl_core::MetadataProvider;

use crate::mapper::{ClassDescriptor, DeclarationMapper};
use crate::transform::{ClassTransformer, TransformerPipeline};
use crate::typegen::typescript::{self, Emission, Emitter};
use crate::walker::{ClassGraphWalker, DiscoveredClassSet};
use crate::{Config, Result};

/// Runs discovery, mapping and emission over one metadata provider.
///
/// Holds no state between calls, so one generator can serve any number of
/// root sets.
///
/// ```
/// use tsdecl_compiler::Generator;
/// use tsdecl_core::{ClassMetadata, ClassRegistry, PropertyMetadata, TypeDescriptor};
///
/// let registry = ClassRegistry::new().with(
///     ClassMetadata::new("com.example.Point")
///         .property(PropertyMetadata::new("x", TypeDescriptor::primitive("int"))),
/// );
/// let out = Generator::new(&registry).generate(["com.example.Point"]).unwrap();
/// assert_eq!(out.text, "interface Point {\n    x: number;\n}\n");
/// ```
pub struct Generator<'a> {
    provider: &'a dyn MetadataProvider,
    config: Config,
    typescript: typescript::Config,
    transformers: TransformerPipeline,
}

impl<'a> Generator<'a> {
    pub fn new(provider: &'a dyn MetadataProvider) -> Self {
        Self {
            provider,
            config: Config::default(),
            typescript: typescript::Config::default(),
            transformers: TransformerPipeline::new(),
        }
    }

    /// Set the engine configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the TypeScript emission configuration.
    pub fn typescript(mut self, config: typescript::Config) -> Self {
        self.typescript = config;
        self
    }

    /// Append a class transformer; transformers run in the order added.
    pub fn transformer(mut self, transformer: impl ClassTransformer + 'static) -> Self {
        self.transformers.push(transformer);
        self
    }

    pub fn discover<I, S>(&self, roots: I) -> Result<DiscoveredClassSet<'a>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassGraphWalker::new(self.provider, &self.config, &self.transformers).discover(roots)
    }

    pub fn map(&self, discovered: &DiscoveredClassSet<'_>) -> Result<Vec<ClassDescriptor>> {
        DeclarationMapper::new(self.provider, &self.config, &self.transformers).map(discovered)
    }

    pub fn emit(&self, classes: &[ClassDescriptor]) -> Result<Emission> {
        Emitter::new(self.provider, &self.config, &self.typescript).emit(classes)
    }

    /// Discover, map and emit in one go.
    pub fn generate<I, S>(&self, roots: I) -> Result<Emission>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let discovered = self.discover(roots)?;
        let classes = self.map(&discovered)?;
        self.emit(&classes)
    }
}
