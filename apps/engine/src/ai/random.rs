//! Random bot - picks uniformly among the legal actions.
//!
//! [`RandomBot`] is the reference implementation of
//! [`BotDecisionProvider`](super::BotDecisionProvider): it only ever chooses
//! from [`BotContext::legal_actions`] and is seedable for reproducible tests.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, BotDecisionProvider};
use crate::domain::player_view::BotContext;
use crate::domain::Action;

pub struct RandomBot {
    /// `decide` takes `&self`, so the RNG lives behind a lock.
    rng: Mutex<StdRng>,
}

impl RandomBot {
    pub const NAME: &'static str = "RandomBot";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` gives reproducible choices; `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl BotDecisionProvider for RandomBot {
    fn decide(&self, ctx: &BotContext) -> Result<Action, AiError> {
        if ctx.legal_actions.is_empty() {
            return Err(AiError::InvalidMove("No legal actions available".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        ctx.legal_actions
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random action".into()))
    }
}
