use super::types::Root;
use dashmap::DashMap;

/// Word or stem → root. Append-only: the first root stored for a stem is kept.
#[derive(Default)]
pub struct RootCache {
    roots: DashMap<String, Root>,
}

impl RootCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Root> {
        self.roots.get(key).map(|root| root.value().clone())
    }

    /// Returns the root that ends up cached, which is the earlier one when
    /// two lookups for the same key race.
    pub fn insert(&self, key: String, root: Root) -> Root {
        self.roots.entry(key).or_insert(root).value().clone()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_write_wins() {
        let cache = RootCache::new();
        assert_eq!(cache.insert("беж".into(), "бег".into()), "бег");
        assert_eq!(cache.insert("беж".into(), "беж".into()), "бег");
        assert_eq!(cache.get("беж").as_deref(), Some("бег"));
        assert_eq!(cache.len(), 1);
    }
}
