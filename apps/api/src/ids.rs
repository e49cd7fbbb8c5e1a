use uuid::Uuid;

/// Issues opaque ids for list entries and sub-items.
/// Every id returned must be unique among all ids issued in the session.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Production generator backed by random UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: `id-1`, `id-2`, ...
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            + 1;
        format!("id-{n}")
    }
}
