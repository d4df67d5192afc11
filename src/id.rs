//! Clip-path id generation.
//!
//! Each arrow defines a `<clipPath>` that its stroke layer references by id.
//! Two arrows in one document must never share an id, so ids come from an
//! injected generator rather than a global counter.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::log::debug;
use crate::render::defaults;

/// Source of document-unique clip-path ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Deterministic ids: `prefix-0`, `prefix-1`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(defaults::CLIP_ID_PREFIX)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Random ids that are retried until unused within the document.
///
/// Ids already present in the document (from other renderers) can be
/// registered with [`RandomIds::reserve`].
#[derive(Debug)]
pub struct RandomIds {
    rng: StdRng,
    in_use: HashSet<String>,
}

impl RandomIds {
    /// Generator seeded from the operating system's entropy source.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            in_use: HashSet::new(),
        }
    }

    /// Mark an id as taken so it is never handed out.
    pub fn reserve(&mut self, id: impl Into<String>) {
        self.in_use.insert(id.into());
    }

    pub fn is_in_use(&self, id: &str) -> bool {
        self.in_use.contains(id)
    }

    fn candidate(&mut self) -> String {
        let n: u32 = self.rng.r#gen();
        format!("{}-{:08x}", defaults::CLIP_ID_PREFIX, n)
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> String {
        loop {
            let id = self.candidate();
            if self.in_use.insert(id.clone()) {
                return id;
            }
            debug!(%id, "clip id already in use, retrying");
        }
    }
}
