//! Tag name → constructor bindings for tags without a built-in element type.
//!
//! Bindings are meant to be registered once at startup. The process-wide registry is read on
//! every transform of an unknown tag, so reads only take the shared side of the lock.

use crate::Result;
use crate::element::Element;
use crate::node::RawNode;
use rustc_hash::FxHashMap;
use std::sync::{OnceLock, RwLock};

/// Builds an element from a raw node and its already-transformed children.
pub type ElementConstructor = fn(node: &RawNode, children: &[Element]) -> Result<Element>;

#[derive(Debug, Clone, Default)]
pub struct ElementRegistry {
    constructors: FxHashMap<String, ElementConstructor>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>, constructor: ElementConstructor) {
        self.constructors.insert(tag.into(), constructor);
    }

    pub fn get(&self, tag: &str) -> Option<ElementConstructor> {
        self.constructors.get(tag).copied()
    }

    pub fn remove(&mut self, tag: &str) -> Option<ElementConstructor> {
        self.constructors.remove(tag)
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

fn global() -> &'static RwLock<ElementRegistry> {
    static REGISTRY: OnceLock<RwLock<ElementRegistry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(ElementRegistry::new()))
}

/// Binds `tag` in the process-wide registry, replacing any previous binding.
pub fn register_element(tag: impl Into<String>, constructor: ElementConstructor) {
    let tag = tag.into();
    tracing::debug!(tag = tag.as_str(), "registering element constructor");
    // A panic while holding the lock cannot leave the map half-updated.
    let mut registry = global().write().unwrap_or_else(|e| e.into_inner());
    registry.insert(tag, constructor);
}

pub fn unregister_element(tag: &str) -> Option<ElementConstructor> {
    let mut registry = global().write().unwrap_or_else(|e| e.into_inner());
    registry.remove(tag)
}

pub fn registered_constructor(tag: &str) -> Option<ElementConstructor> {
    let registry = global().read().unwrap_or_else(|e| e.into_inner());
    registry.get(tag)
}
