//! Determinism testing utilities.
//!
//! Provides a harness for verifying that the decision engine produces
//! identical orders given identical inputs.
//!
//! # Testing Strategy
//!
//! Turn decisions must be 100% reproducible so recorded turns can be
//! replayed. Sources of non-determinism include:
//!
//! - **Floating-point math**: scores use fixed-point via
//!   [`warlord_core::math::Fixed`].
//!
//! - **HashMap iteration order**: the engine only walks snapshot vectors.
//!
//! - **System randomness**: the engine has none; damage rolls live elsewhere.
//!
//! # Test Levels
//!
//! 1. **Unit tests**: individual scanner queries and tiers
//! 2. **Property tests**: random worlds must still produce identical orders
//! 3. **Parallel tests**: deciding the same turn on N threads all match
//! 4. **Serialization tests**: a binary round-trip of the snapshot changes nothing

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use warlord_core::ids::KingdomId;
use warlord_core::planner::orders_hash;
use warlord_core::scheduler::DecisionEngine;
use warlord_core::world::WorldSnapshot;

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each run.
    pub hashes: Vec<u64>,
}

impl DeterminismResult {
    fn from_hashes(hashes: Vec<u64>) -> Self {
        let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);
        Self {
            is_deterministic,
            hashes,
        }
    }

    /// Get all unique hashes (should be 1 for deterministic decisions).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that the runs were deterministic, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different hashes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "Decisions are non-deterministic!\n\
                 Runs: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                unique.len(),
                self.hashes
            );
        }
    }
}

/// Run a computation multiple times from fresh setup and compare hashes.
///
/// # Arguments
///
/// * `runs` - Number of times to run
/// * `setup` - Function to create the input state
/// * `run` - Function producing the output to compare
/// * `hash` - Function to hash the output
pub fn verify_determinism<S, O, Setup, Run, HashFn>(
    runs: usize,
    setup: Setup,
    run: Run,
    hash: HashFn,
) -> DeterminismResult
where
    Setup: Fn() -> S,
    Run: Fn(&S) -> O,
    HashFn: Fn(&O) -> u64,
{
    let hashes = (0..runs)
        .map(|_| {
            let state = setup();
            hash(&run(&state))
        })
        .collect();
    let result = DeterminismResult::from_hashes(hashes);
    if !result.is_deterministic {
        tracing::warn!(
            runs,
            unique = result.unique_hashes().len(),
            "runs produced different hashes"
        );
    }
    result
}

/// Decide one kingdom's turn `runs` times from freshly built worlds.
///
/// # Example
///
/// ```
/// use warlord_core::scheduler::DecisionEngine;
/// use warlord_test_utils::determinism::verify_decision_determinism;
/// use warlord_test_utils::fixtures::{kid, skirmish};
///
/// let result = verify_decision_determinism(&DecisionEngine::default(), skirmish, &kid("f"), 5);
/// result.assert_deterministic();
/// ```
pub fn verify_decision_determinism<F>(
    engine: &DecisionEngine,
    setup_fn: F,
    kingdom: &KingdomId,
    runs: usize,
) -> DeterminismResult
where
    F: Fn() -> WorldSnapshot,
{
    verify_determinism(
        runs,
        setup_fn,
        |world| engine.decide(world, kingdom),
        |orders| orders_hash(orders),
    )
}

/// Decide the same turn on `num_threads` scoped threads sharing one world.
///
/// Catches hidden shared state that would only show up under concurrency.
pub fn run_parallel_decisions(
    engine: &DecisionEngine,
    world: &WorldSnapshot,
    kingdom: &KingdomId,
    num_threads: usize,
) -> DeterminismResult {
    let hashes = thread::scope(|s| {
        let handles: Vec<_> = (0..num_threads)
            .map(|_| s.spawn(|| orders_hash(&engine.decide(world, kingdom))))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("decision thread panicked"))
            .collect()
    });

    DeterminismResult::from_hashes(hashes)
}

/// Verify that a binary round-trip of the snapshot leaves decisions unchanged.
pub fn verify_serialization_determinism(
    engine: &DecisionEngine,
    world: &WorldSnapshot,
    kingdom: &KingdomId,
) -> bool {
    let before = engine.decide(world, kingdom);

    let Ok(bytes) = world.to_bytes() else {
        return false;
    };
    let Ok(restored) = WorldSnapshot::from_bytes(&bytes) else {
        return false;
    };

    before == engine.decide(&restored, kingdom)
}

/// Compute a simple hash for any hashable value.
pub fn compute_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
