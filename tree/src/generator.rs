//! Randomized dungeon construction
//!
//! Trees are built depth-first. Each call either becomes an exit (a biased
//! coin, or the depth cap) or a room whose three slots are filled one after
//! another: known hazard, else hidden-hazard overlay on a fresh subtree, else
//! a plain subtree. The exit chance is multiplied by the scaling factor at
//! each level, so deeper rooms are more likely to be exits.
//!
//! Each recursive call returns its own `GenerationMetrics`, which the caller
//! merges, instead of bumping shared counters.

use crate::config::DungeonConfig;
use crate::random::RandomSource;
use dungeon_engine::{
    find_shortest_safe_path, Direction, DungeonError, DungeonTree, GenerationMetrics, NodeId,
    Result, Session, Warning,
};
use tracing::debug;

/// A validated tree together with how it was produced
#[derive(Debug, Clone)]
pub struct GeneratedDungeon {
    pub tree: DungeonTree,
    /// Counters for the accepted tree only
    pub metrics: GenerationMetrics,
    /// Candidate trees built, including the accepted one
    pub attempts: u32,
    /// Rooms counted while building the discarded candidates
    pub discarded_rooms: u64,
}

/// Builds dungeon trees from a validated configuration.
#[derive(Debug, Clone)]
pub struct TreeGenerator {
    config: DungeonConfig,
}

impl TreeGenerator {
    /// Validate `config` once; generation itself cannot fail on bad input.
    pub fn new(config: DungeonConfig) -> Result<Self> {
        config.validate()?;
        Ok(TreeGenerator { config })
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Build candidates until the root is neither an exit nor a hazard.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<GeneratedDungeon> {
        self.generate_until(rng, |_| true)
    }

    /// Like [`TreeGenerator::generate`], but also require a safe route from
    /// the root to some exit.
    pub fn generate_playable<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GeneratedDungeon> {
        self.generate_until(rng, |tree| {
            !find_shortest_safe_path(tree, DungeonTree::ROOT).is_empty()
        })
    }

    /// Build one candidate tree with no acceptance check.
    pub fn build_candidate<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> (DungeonTree, GenerationMetrics) {
        let mut builder = Builder {
            config: &self.config,
            rng,
            tree: DungeonTree::new(),
        };
        let (_, metrics) = builder.subtree(None, self.config.starting_exit_probability, 0);
        (builder.tree, metrics)
    }

    fn generate_until<R, F>(&self, rng: &mut R, accept: F) -> Result<GeneratedDungeon>
    where
        R: RandomSource + ?Sized,
        F: Fn(&DungeonTree) -> bool,
    {
        let mut discarded_rooms = 0u64;
        for attempt in 1..=self.config.max_attempts {
            let (tree, metrics) = self.build_candidate(rng);
            let root = &tree.nodes[DungeonTree::ROOT as usize];
            if root.is_terminal() {
                debug!(attempt = attempt, "discarding candidate with terminal root");
                discarded_rooms += metrics.rooms;
                continue;
            }
            if !accept(&tree) {
                debug!(
                    attempt = attempt,
                    nodes = tree.len(),
                    "discarding candidate without safe route"
                );
                discarded_rooms += metrics.rooms;
                continue;
            }
            debug!(
                attempts = attempt,
                nodes = tree.len(),
                rooms = metrics.rooms,
                known_hazards = metrics.known_hazards,
                hidden_hazards = metrics.hidden_hazards,
                discarded_rooms = discarded_rooms,
                "dungeon generated"
            );
            return Ok(GeneratedDungeon {
                tree,
                metrics,
                attempts: attempt,
                discarded_rooms,
            });
        }
        Err(DungeonError::GenerationExhausted {
            attempts: self.config.max_attempts,
        })
    }
}

/// Validate `config` and build a tree with a playable root.
pub fn generate_dungeon<R: RandomSource + ?Sized>(
    config: &DungeonConfig,
    rng: &mut R,
) -> Result<(DungeonTree, GenerationMetrics)> {
    let generated = TreeGenerator::new(config.clone())?.generate(rng)?;
    Ok((generated.tree, generated.metrics))
}

/// Generate a dungeon with a safe route from the root and start a session on it.
pub fn new_session<R: RandomSource + ?Sized>(
    config: &DungeonConfig,
    rng: &mut R,
) -> Result<(Session, GenerationMetrics)> {
    let generated = TreeGenerator::new(config.clone())?.generate_playable(rng)?;
    Ok((Session::new(generated.tree), generated.metrics))
}

/// Name the hazardous direction plus one of the other two, in random order.
pub fn synthesize_warning<R: RandomSource + ?Sized>(hazard: Direction, rng: &mut R) -> Warning {
    let companion = Direction::ALL
        .into_iter()
        .filter(|&d| d != hazard)
        .nth(rng.pick(2))
        .unwrap_or(hazard);
    if rng.pick(2) == 0 {
        Warning {
            first: hazard,
            second: companion,
        }
    } else {
        Warning {
            first: companion,
            second: hazard,
        }
    }
}

struct Builder<'a, R: ?Sized> {
    config: &'a DungeonConfig,
    rng: &'a mut R,
    tree: DungeonTree,
}

impl<R: RandomSource + ?Sized> Builder<'_, R> {
    fn subtree(
        &mut self,
        parent: Option<NodeId>,
        exit_probability: f64,
        depth: usize,
    ) -> (NodeId, GenerationMetrics) {
        let mut metrics = GenerationMetrics {
            rooms: 1,
            ..Default::default()
        };
        let id = self.tree.push_room(parent, depth);

        if depth >= self.config.max_depth || self.rng.coin_flip(exit_probability) {
            // Exits have always been counted as two rooms.
            metrics.rooms += 1;
            self.tree.nodes[id as usize].is_exit = true;
            return (id, metrics);
        }

        let next_probability = exit_probability * self.config.exit_probability_scaling;
        for direction in Direction::ALL {
            let child = if self.rng.coin_flip(self.config.hazard_probability) {
                let child = self.tree.push_room(Some(id), depth + 1);
                self.tree.nodes[child as usize].is_known_hazard = true;
                metrics.rooms += 1;
                metrics.known_hazards += 1;
                child
            } else if self.rng.coin_flip(self.config.hidden_hazard_probability) {
                let (child, sub) = self.subtree(Some(id), next_probability, depth + 1);
                self.tree.nodes[child as usize].is_hidden_hazard = true;
                metrics += sub;
                metrics.rooms += 1;
                metrics.hidden_hazards += 1;
                child
            } else {
                let (child, sub) = self.subtree(Some(id), next_probability, depth + 1);
                metrics += sub;
                child
            };
            self.tree.nodes[id as usize].children[direction.index()] = Some(child);
        }

        self.tree.nodes[id as usize].warning = self.warning_for(id);
        (id, metrics)
    }

    /// Warning for a finished room, naming its last hazardous slot.
    fn warning_for(&mut self, id: NodeId) -> Option<Warning> {
        let nodes = &self.tree.nodes;
        let hazard = Direction::ALL.into_iter().rev().find(|&d| {
            nodes[id as usize]
                .child(d)
                .is_some_and(|c| nodes[c as usize].is_hazard())
        })?;
        Some(synthesize_warning(hazard, self.rng))
    }
}
