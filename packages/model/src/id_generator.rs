use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Capability for minting section identifiers.
///
/// Passed explicitly wherever sections are created, so tests can substitute
/// a deterministic source.
pub trait IdGenerator {
    /// Generate the next identifier.
    fn new_id(&self) -> String;
}

/// Random 128-bit identifiers (UUID v4).
///
/// Collision-resistant across the process lifetime and across reloads, so
/// documents can be copied or merged without re-keying their sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Seeded sequential generator for deterministic tests
#[derive(Debug)]
pub struct SequentialIdGenerator {
    seed: String,
    count: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            count: AtomicU64::new(0),
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn new_id(&self) -> String {
        let next = self.count.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.seed, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("cv");

        let id1 = ids.new_id();
        let id2 = ids.new_id();
        let id3 = ids.new_id();

        assert_eq!(id1, "cv-1");
        assert_eq!(id2, "cv-2");
        assert_eq!(id3, "cv-3");
        assert!(id1.starts_with(ids.seed()));
    }

    #[test]
    fn test_random_ids_unique() {
        let ids = RandomIdGenerator;

        let minted: HashSet<String> = (0..1000).map(|_| ids.new_id()).collect();
        assert_eq!(minted.len(), 1000);
    }
}
