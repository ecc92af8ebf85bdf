//! The linear story: intro, setup, background, Yaztromo, and the shop.

use std::fmt;

use fod_core::{Player, Potion, catalog, generate_stats, shop};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::FictionResult;
use crate::prompt::{SpecialHandler, prompt};
use crate::shop::run_shop;
use crate::store::{SaveStore, Session, save_load_handlers};
use crate::text;

/// A checkpoint in the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The invitation into Darkwood Forest.
    Intro,
    /// Rolling attributes and choosing a potion.
    Setup,
    /// Bigleg's story.
    Background,
    /// Arriving at Yaztromo's tower.
    Yaztromo,
    /// Shopping from Yaztromo's slate.
    Shop,
    /// The adventure ended early.
    GameOver,
    /// The end of the written story.
    Continue,
}

impl Stage {
    /// Lowercase stage name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Setup => "setup",
            Self::Background => "background",
            Self::Yaztromo => "yaztromo",
            Self::Shop => "shop",
            Self::GameOver => "game_over",
            Self::Continue => "continue",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One play-through of the story.
pub struct Game<C, S> {
    console: C,
    session: Session<S>,
    rng: StdRng,
    fast: bool,
    handlers: Vec<SpecialHandler<Session<S>>>,
}

impl<C: Console, S: SaveStore + 'static> Game<C, S> {
    /// Create a game for `player`, talking through `console` and saving to `store`.
    pub fn new(console: C, player: Player, store: S, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            console,
            session: Session::new(player, store),
            rng,
            fast: config.fast,
            handlers: save_load_handlers(),
        }
    }

    /// The console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.session.player
    }

    /// The save store.
    pub fn store(&self) -> &S {
        &self.session.store
    }

    /// Give back the player, console, and store.
    pub fn into_parts(self) -> (Player, C, S) {
        (self.session.player, self.console, self.session.store)
    }

    /// Play from the intro to the end, returning the stage the story ended in.
    ///
    /// End of input and interrupts are returned as errors.
    pub fn run(&mut self) -> FictionResult<Stage> {
        let mut stage = Stage::Intro;
        while let Some(next) = self.step(stage)? {
            log::debug!("stage {stage} -> {next}");
            stage = next;
        }
        Ok(stage)
    }

    /// Play one stage and return the next, or `None` when the story ends.
    pub fn step(&mut self, stage: Stage) -> FictionResult<Option<Stage>> {
        match stage {
            Stage::Intro => self.intro(),
            Stage::Setup => self.setup().map(|()| Some(Stage::Background)),
            Stage::Background => self.background().map(|()| Some(Stage::Yaztromo)),
            Stage::Yaztromo => self.yaztromo().map(Some),
            Stage::Shop => self.shop().map(|()| Some(Stage::Continue)),
            Stage::GameOver => {
                self.narrate(text::GAME_OVER, false)?;
                Ok(None)
            }
            Stage::Continue => {
                self.narrate(text::TO_BE_CONTINUED, false)?;
                Ok(None)
            }
        }
    }

    fn ask(&mut self, question: &str, options: &[&str]) -> FictionResult<String> {
        prompt(
            &mut self.console,
            question,
            options,
            &mut self.handlers,
            &mut self.session,
        )
    }

    fn narrate(&mut self, passage: &str, pause: bool) -> FictionResult<()> {
        self.console.narrate(passage, pause && !self.fast)
    }

    fn show_status(&mut self) {
        self.console.say("");
        self.console.say(&self.session.player.status());
    }

    fn intro(&mut self) -> FictionResult<Option<Stage>> {
        self.narrate(text::INTRO, true)?;
        if self.ask(text::INTRO_PROMPT, &["yes", "no"])? == "yes" {
            self.narrate(text::QUEST, true)?;
            Ok(Some(Stage::Setup))
        } else {
            self.narrate(text::DECLINED, false)?;
            Ok(None)
        }
    }

    fn setup(&mut self) -> FictionResult<()> {
        self.ask(text::READY_PROMPT, &["ready"])?;
        generate_stats(&mut self.session.player, &mut self.rng);
        self.show_status();

        self.narrate(text::POTIONS, true)?;
        let keywords: Vec<&str> = Potion::ALL.iter().map(Potion::keyword).collect();
        let choice = self.ask(text::POTION_PROMPT, &keywords)?;
        if let Some(potion) = Potion::parse(&choice) {
            let message = if self.session.player.choose_potion(potion) {
                format!("A potion of {} has been added to your pack.", potion.keyword())
            } else {
                let carried = self.session.player.potion.unwrap_or(potion);
                log::debug!("potion already chosen, keeping {carried:?}");
                format!("You already carry a potion of {}.", carried.keyword())
            };
            self.narrate(&message, true)?;
        }
        self.show_status();
        Ok(())
    }

    fn background(&mut self) -> FictionResult<()> {
        self.narrate(text::BACKGROUND, true)?;
        let gold = self.session.player.gold();
        self.narrate(
            &format!("You have added {gold} Gold and a map to your backpack."),
            true,
        )
    }

    fn yaztromo(&mut self) -> FictionResult<Stage> {
        self.narrate(text::YAZTROMO, true)?;
        self.narrate(text::YAZTROMO_TURNS, false)?;
        if self.ask(text::YAZTROMO_PROMPT, &["follow", "attack"])? == "follow" {
            self.narrate(text::FOLLOW, true)?;
            catalog::stock_slate(&mut self.session.player);
            Ok(Stage::Shop)
        } else {
            self.narrate(text::ATTACK, false)?;
            Ok(Stage::GameOver)
        }
    }

    fn shop(&mut self) -> FictionResult<()> {
        catalog::stock_slate(&mut self.session.player);
        self.console.say(&shop::list(&self.session.player));
        run_shop(&mut self.console, &mut self.session)
    }
}
