use crate::items::factory::{render_lore, render_name};
use crate::items::material::Material;
use crate::items::stack::ItemStack;
use crate::text::style::strip_style_codes;
use crate::weapons::index::WeaponIndex;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

const RESOLVE_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResolveKey {
    material: Material,
    display_name: Option<String>,
    lore: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64) / (total as f64)
        }
    }
}

struct ResolveCache {
    cache: LruCache<ResolveKey, Option<String>>,
    stats: CacheStats,
}

/// Maps arbitrary item instances back to weapon ids. The identity tag is
/// authoritative; items that never passed through the factory (other
/// plugins, pre-tag legacy items) fall back to rendered-appearance
/// matching, memoized in a bounded LRU. A resolver is built per published
/// index so cached renders never outlive a reload.
pub struct IdentityResolver {
    fallback: Mutex<ResolveCache>,
}

impl Default for IdentityResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::with_capacity(RESOLVE_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("non-zero capacity");
        Self {
            fallback: Mutex::new(ResolveCache {
                cache: LruCache::new(capacity),
                stats: CacheStats::default(),
            }),
        }
    }

    pub fn resolve(&self, index: &WeaponIndex, item: &ItemStack) -> Option<String> {
        if let Some(tag) = item.weapon_tag() {
            if let Some(definition) = index.get_by_persistent_key(tag) {
                return Some(definition.id.clone());
            }
        }
        self.resolve_by_appearance(index, item)
    }

    fn resolve_by_appearance(&self, index: &WeaponIndex, item: &ItemStack) -> Option<String> {
        let key = ResolveKey {
            material: item.material,
            display_name: item.display_name.clone(),
            lore: item.lore.clone(),
        };
        if let Ok(mut fallback) = self.fallback.lock() {
            let fallback = &mut *fallback;
            if let Some(cached) = fallback.cache.get(&key) {
                fallback.stats.hits += 1;
                return cached.clone();
            }
        }

        let resolved = scan_definitions(index, item);
        if let Ok(mut fallback) = self.fallback.lock() {
            fallback.stats.misses += 1;
            fallback.cache.put(key, resolved.clone());
        }
        resolved
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.fallback
            .lock()
            .map(|fallback| fallback.stats)
            .unwrap_or_default()
    }
}

/// First definition whose rendered appearance matches wins; definitions
/// that render identically are indistinguishable by design.
fn scan_definitions(index: &WeaponIndex, item: &ItemStack) -> Option<String> {
    for definition in index.iter() {
        if definition.material != item.material {
            continue;
        }
        let expected_name = render_name(definition);
        if !matches_text(item.display_name.as_deref(), expected_name.as_deref()) {
            continue;
        }
        let expected_lore = render_lore(definition);
        if !matches_lore(&item.lore, &expected_lore) {
            continue;
        }
        return Some(definition.id.clone());
    }
    None
}

fn matches_text(actual: Option<&str>, expected: Option<&str>) -> bool {
    let (Some(actual), Some(expected)) = (actual, expected) else {
        return false;
    };
    actual == expected || strip_style_codes(actual) == strip_style_codes(expected)
}

fn matches_lore(actual: &[String], expected: &[String]) -> bool {
    if expected.is_empty() || actual.len() != expected.len() {
        return false;
    }
    actual
        .iter()
        .zip(expected)
        .all(|(actual, expected)| matches_text(Some(actual), Some(expected)))
}
