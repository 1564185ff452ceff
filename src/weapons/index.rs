use crate::weapons::definition::WeaponDefinition;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Immutable, insertion-ordered collection of compiled definitions.
/// Insertion order is the documented first-match order for fallback
/// identity resolution.
#[derive(Debug, Default, Clone)]
pub struct WeaponIndex {
    definitions: Vec<WeaponDefinition>,
    by_id: HashMap<String, usize>,
    by_persistent_key: HashMap<String, usize>,
}

impl WeaponIndex {
    pub fn insert(&mut self, definition: WeaponDefinition) -> Result<(), String> {
        if self.by_id.contains_key(&definition.id) {
            return Err(format!("weapon id '{}' already exists", definition.id));
        }
        let slot = self.definitions.len();
        self.by_id.insert(definition.id.clone(), slot);
        // First definition claims a shared persistent key.
        self.by_persistent_key
            .entry(definition.persistent_key.clone())
            .or_insert(slot);
        self.definitions.push(definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&WeaponDefinition> {
        self.by_id.get(id).map(|slot| &self.definitions[*slot])
    }

    pub fn get_by_persistent_key(&self, key: &str) -> Option<&WeaponDefinition> {
        self.by_persistent_key
            .get(key)
            .map(|slot| &self.definitions[*slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponDefinition> {
        self.definitions.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|definition| definition.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Published definition set. Reload builds a complete new index and swaps
/// the reference; readers keep whatever snapshot they already cloned.
#[derive(Debug, Default)]
pub struct WeaponStore {
    current: RwLock<Arc<WeaponIndex>>,
}

impl WeaponStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Arc<WeaponIndex> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    pub fn publish(&self, index: WeaponIndex) {
        let index = Arc::new(index);
        match self.current.write() {
            Ok(mut guard) => *guard = index,
            Err(poisoned) => *poisoned.into_inner() = index,
        }
    }
}
