//! Shared handler state.

use crate::BridgeConfig;
use scorpion_error::ScorpionResult;
use scorpion_generator::{CommandGenerator, MediaGenerator};
use scorpion_storage::{AssetResolver, BlockLoader, BlockStore, StorageRoots};
use std::sync::Arc;

/// Services the handlers delegate to.
///
/// Holds no content: every request reads the filesystem afresh.
#[derive(Clone)]
pub struct AppState {
    store: Arc<BlockStore>,
    resolver: Arc<AssetResolver>,
    loader: Arc<BlockLoader>,
    generator: Arc<dyn MediaGenerator>,
}

impl AppState {
    /// Creates state over `roots` using `generator` for `/generate`.
    pub fn new(roots: StorageRoots, generator: Arc<dyn MediaGenerator>) -> Self {
        Self {
            store: Arc::new(BlockStore::new(roots.clone())),
            resolver: Arc::new(AssetResolver::new(roots.clone())),
            loader: Arc::new(BlockLoader::new(roots)),
            generator,
        }
    }

    /// Creates state with the subprocess generator described by `config`.
    pub fn from_config(config: &BridgeConfig) -> ScorpionResult<Self> {
        let generator = CommandGenerator::new(config.generator_config())?;
        Ok(Self::new(config.storage_roots(), Arc::new(generator)))
    }

    pub(crate) fn store(&self) -> &BlockStore {
        &self.store
    }

    pub(crate) fn resolver(&self) -> &AssetResolver {
        &self.resolver
    }

    pub(crate) fn loader(&self) -> &BlockLoader {
        &self.loader
    }

    pub(crate) fn generator(&self) -> &dyn MediaGenerator {
        self.generator.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("roots", self.store.roots())
            .field("generator", &self.generator.describe())
            .finish()
    }
}
