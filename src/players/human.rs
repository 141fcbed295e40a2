use super::Player;
use crate::PROMPT;
use crate::moves::Move;
use dialoguer::Input;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::num::NonZeroUsize;

/// Interactive terminal prompt.
#[derive(Default)]
pub struct Human {
    attempts: Option<NonZeroUsize>,
}

impl Human {
    pub fn new(attempts: Option<NonZeroUsize>) -> Self {
        Self { attempts }
    }

    fn ask() -> anyhow::Result<Option<String>> {
        println!("{}\n{}", PROMPT, Move::menu());
        let raw = Input::<String>::new()
            .with_prompt("Move")
            .allow_empty(true)
            .report(false)
            .interact_text()?;
        Ok(Some(raw))
    }
}

impl Player for Human {
    fn choose(&mut self) -> Option<Move> {
        super::retry(self.attempts, Self::ask)
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}
