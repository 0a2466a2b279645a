//! Region module host boundary.
//!
//! Module discovery and dynamic loading live outside this crate. The
//! contract here is narrow: given a module identifier, produce an
//! initialized instance or nothing. Instances are handed a reference to the
//! owning simulation context exactly once, before first use.

use uuid::Uuid;

/// The owning simulation context handed to modules at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneContext {
    pub region_id: Uuid,
    pub region_name: String,
}

/// An extension module running inside a region.
pub trait RegionModule: Send {
    /// Human-readable module name.
    fn name(&self) -> &str;

    /// Called exactly once, before any other use of the module.
    fn initialize(&mut self, scene: &SceneContext);
}

/// Produces module instances from identifiers.
///
/// A factory that does not recognize the identifier returns `None`; the
/// registry then tries the next factory.
pub trait ModuleFactory: Send + Sync {
    fn create(&self, module_id: &str) -> Option<Box<dyn RegionModule>>;
}

/// Ordered collection of module factories.
#[derive(Default)]
pub struct ModuleRegistry {
    factories: Vec<Box<dyn ModuleFactory>>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory. Factories are consulted in registration order.
    pub fn register<F: ModuleFactory + 'static>(&mut self, factory: F) {
        self.factories.push(Box::new(factory));
    }

    /// Produce an initialized instance of the named module, or `None` if no
    /// registered factory recognizes the identifier.
    pub fn instantiate(
        &self,
        module_id: &str,
        scene: &SceneContext,
    ) -> Option<Box<dyn RegionModule>> {
        for factory in &self.factories {
            if let Some(mut module) = factory.create(module_id) {
                tracing::debug!(module_id, module = module.name(), "initializing region module");
                module.initialize(scene);
                return Some(module);
            }
        }
        tracing::debug!(module_id, "no factory recognized module identifier");
        None
    }
}
