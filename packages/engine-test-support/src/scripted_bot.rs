//! Bots with predictable decisions.

use std::collections::VecDeque;
use std::sync::Mutex;

use truco_engine::{Action, AiError, BotContext, BotDecisionProvider};

/// Returns queued actions in order, whatever the context.
///
/// Every context it is asked about is kept for later assertions. Runs out
/// with `AiError::Internal`.
#[derive(Debug, Default)]
pub struct ScriptedBot {
    script: Mutex<VecDeque<Action>>,
    seen: Mutex<Vec<BotContext>>,
}

impl ScriptedBot {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: Mutex::new(actions.into_iter().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, action: Action) {
        self.script.lock().expect("script lock").push_back(action);
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().expect("script lock").len()
    }

    /// Contexts passed to `decide`, oldest first.
    pub fn seen(&self) -> Vec<BotContext> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl BotDecisionProvider for ScriptedBot {
    fn decide(&self, ctx: &BotContext) -> Result<Action, AiError> {
        self.seen.lock().expect("seen lock").push(ctx.clone());
        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .ok_or_else(|| AiError::Internal("script exhausted".into()))
    }
}

/// Always takes the first legal action, which is playing the first card
/// whenever a card may be played.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalBot;

impl BotDecisionProvider for FirstLegalBot {
    fn decide(&self, ctx: &BotContext) -> Result<Action, AiError> {
        ctx.legal_actions
            .first()
            .copied()
            .ok_or_else(|| AiError::InvalidMove("no legal actions".into()))
    }
}
