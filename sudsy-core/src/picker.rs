//! Non-repeating thought picker.
//!
//! The picker keeps a "bag": a shuffled permutation of the eligible pool and a
//! read cursor. Each pick takes the item under the cursor. The bag is
//! reshuffled when the eligible pool's id-set changes (filters changed) or when
//! every item has been shown once, so within one filter configuration each
//! eligible thought appears exactly once per pass.

use std::collections::HashSet;

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::types::{Filter, Thought};

/// Picks thoughts from a fixed list without immediate repeats.
pub struct Picker<R = ThreadRng> {
    thoughts: Vec<Thought>,
    /// Indices into `thoughts`, in shuffled order
    bag: Vec<usize>,
    cursor: usize,
    /// Index of the most recently returned thought
    last: Option<usize>,
    rng: R,
}

impl Picker<ThreadRng> {
    /// Create a picker backed by the thread-local RNG.
    pub fn new(thoughts: Vec<Thought>) -> Result<Self> {
        Self::with_rng(thoughts, rand::rng())
    }
}

impl<R: Rng> Picker<R> {
    /// Create a picker with an explicit random source.
    ///
    /// The initial bag is a shuffle of the whole list.
    pub fn with_rng(thoughts: Vec<Thought>, rng: R) -> Result<Self> {
        if thoughts.is_empty() {
            return Err(Error::EmptyContent);
        }

        let all: Vec<usize> = (0..thoughts.len()).collect();
        let mut picker = Self {
            thoughts,
            bag: Vec::new(),
            cursor: 0,
            last: None,
            rng,
        };
        picker.refill(all);
        Ok(picker)
    }

    /// The full content list.
    pub fn thoughts(&self) -> &[Thought] {
        &self.thoughts
    }

    /// Indices of thoughts matching `filter`, or of every thought when none match.
    pub fn eligible_pool(&self, filter: &Filter) -> Vec<usize> {
        let eligible: Vec<usize> = self
            .thoughts
            .iter()
            .enumerate()
            .filter(|(_, t)| t.matches(filter))
            .map(|(i, _)| i)
            .collect();

        if eligible.is_empty() {
            (0..self.thoughts.len()).collect()
        } else {
            eligible
        }
    }

    /// Pick the next thought for `filter`.
    pub fn pick(&mut self, filter: &Filter) -> &Thought {
        let pool = self.eligible_pool(filter);

        if !self.bag_matches(&pool) {
            tracing::debug!(
                category = %filter.category_key,
                vibe = %filter.vibe_key,
                spice = filter.spice_level,
                pool = pool.len(),
                "Eligible pool changed, rebuilding bag"
            );
            self.refill(pool);
        } else if self.cursor >= self.bag.len() {
            self.refill(pool);
        }

        let index = self.bag[self.cursor];
        self.cursor += 1;
        self.last = Some(index);
        &self.thoughts[index]
    }

    /// Ids currently in the bag.
    pub fn bag_ids(&self) -> HashSet<&str> {
        self.bag
            .iter()
            .map(|&i| self.thoughts[i].id.as_str())
            .collect()
    }

    /// Number of picks left before the bag is reshuffled.
    pub fn remaining_in_pass(&self) -> usize {
        self.bag.len().saturating_sub(self.cursor)
    }

    fn bag_matches(&self, pool: &[usize]) -> bool {
        let pool_ids: HashSet<&str> = pool
            .iter()
            .map(|&i| self.thoughts[i].id.as_str())
            .collect();
        pool_ids == self.bag_ids()
    }

    /// Shuffle `pool` into a new bag. A fresh bag never opens with the
    /// thought just shown, so pools of two or more never repeat back-to-back.
    fn refill(&mut self, mut pool: Vec<usize>) {
        pool.shuffle(&mut self.rng);
        if pool.len() >= 2 && self.last == Some(pool[0]) {
            let swap = self.rng.random_range(1..pool.len());
            pool.swap(0, swap);
        }
        self.bag = pool;
        self.cursor = 0;
    }
}
