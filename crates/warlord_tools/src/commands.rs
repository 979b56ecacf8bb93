//! Command implementations behind the `warlord-tools` binary.
//!
//! Each command works on an already loaded snapshot and returns data rather
//! than printing, so the binary only has to render.

use std::path::Path;

use rayon::prelude::*;
use warlord_core::assignment::Assignment;
use warlord_core::disposition::{classify_disposition_with, Disposition};
use warlord_core::error::{Result, WarlordError};
use warlord_core::ids::{GeneralId, KingdomId};
use warlord_core::planner::{ai_kingdom_ids, plan_turns, KingdomTurn, TurnPlan};
use warlord_core::record::TurnRecord;
use warlord_core::scheduler::DecisionEngine;
use warlord_core::world::{WorldSnapshot, WorldView};

fn require_kingdom(world: &WorldSnapshot, kingdom: &KingdomId) -> Result<()> {
    if world.kingdom(kingdom).is_none() {
        return Err(WarlordError::UnknownEntity {
            kind: "kingdom",
            id: kingdom.to_string(),
        });
    }
    Ok(())
}

/// Decide one kingdom's turn.
///
/// # Errors
///
/// Returns [`WarlordError::UnknownEntity`] if the kingdom is not in the
/// snapshot. A player-controlled kingdom is not an error; it gets no orders.
pub fn decide(
    world: &WorldSnapshot,
    kingdom: &KingdomId,
    engine: &DecisionEngine,
) -> Result<Vec<Assignment>> {
    require_kingdom(world, kingdom)?;
    let orders = engine.decide(world, kingdom);
    tracing::info!(%kingdom, orders = orders.len(), "turn decided");
    Ok(orders)
}

/// Plan every AI kingdom's turn, optionally spreading kingdoms over threads.
///
/// Both paths produce the same plan: kingdoms are independent and the
/// parallel results are collected back in snapshot order.
pub fn plan(world: &WorldSnapshot, engine: &DecisionEngine, parallel: bool) -> TurnPlan {
    if !parallel {
        return plan_turns(world, engine);
    }

    let kingdoms = ai_kingdom_ids(world);
    let turns: Vec<KingdomTurn> = {
        let _span = tracing::info_span!("kingdoms_parallel", count = kingdoms.len()).entered();
        kingdoms
            .into_par_iter()
            .map(|kingdom| {
                let orders = engine.decide(world, &kingdom);
                KingdomTurn { kingdom, orders }
            })
            .collect()
    };
    let plan = TurnPlan::from_turns(turns);
    tracing::info!(
        kingdoms = plan.turns().len(),
        orders = plan.order_count(),
        hash = plan.plan_hash(),
        "world turn planned in parallel"
    );
    plan
}

/// Classify what `captor` would do with `general` after a capture.
///
/// # Errors
///
/// Returns [`WarlordError::UnknownEntity`] if either id is missing.
pub fn disposition(
    world: &WorldSnapshot,
    general: &GeneralId,
    captor: &KingdomId,
    engine: &DecisionEngine,
) -> Result<Disposition> {
    require_kingdom(world, captor)?;
    let captive = world
        .general(general)
        .ok_or_else(|| WarlordError::UnknownEntity {
            kind: "general",
            id: general.to_string(),
        })?;
    Ok(classify_disposition_with(captive, captor, engine.config()))
}

/// Decide a kingdom's turn and write the record to `out`.
///
/// # Errors
///
/// Returns an error if the kingdom is unknown or the record cannot be written.
pub fn record(
    world: &WorldSnapshot,
    kingdom: &KingdomId,
    engine: &DecisionEngine,
    out: &Path,
) -> Result<TurnRecord> {
    require_kingdom(world, kingdom)?;
    let record = TurnRecord::capture(world, kingdom, engine)?;
    record.save(out)?;
    tracing::info!(
        %kingdom,
        path = %out.display(),
        orders = record.orders.len(),
        hash = record.orders_hash,
        "turn recorded"
    );
    Ok(record)
}

/// Load a turn record and replay it.
///
/// # Errors
///
/// Returns an error if the record cannot be read or the replay diverges.
pub fn verify(path: &Path) -> Result<TurnRecord> {
    let record = TurnRecord::load(path)?;
    record.verify()?;
    tracing::info!(
        kingdom = %record.kingdom,
        hash = record.orders_hash,
        "turn record replayed identically"
    );
    Ok(record)
}
