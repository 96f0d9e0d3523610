//! Life engine - main entry point for playing a life

use lifesim_logic::activities::{self, ActivityChoice, Crime};
use lifesim_logic::character::{new_life, Character, Tone};
use lifesim_logic::classmates;
use lifesim_logic::config::{validate_config, LifeConfig};
use lifesim_logic::constants::{ages, odds, relationship};
use lifesim_logic::dice::Dice;
use lifesim_logic::effects::{self, DeathCause};
use lifesim_logic::eras;
use lifesim_logic::events::{coworker, Event, EventDescriptor, EventKind};
use lifesim_logic::family::{self, FamilyMember};
use lifesim_logic::interactions::classmate::ClassmateAction;
use lifesim_logic::interactions::coworker::CoworkerAction;
use lifesim_logic::interactions::family::FamilyAction;
use lifesim_logic::interactions::{self, InteractionOutcome, Target};
use lifesim_logic::inventory::{self, ItemUse};
use lifesim_logic::jobs;
use lifesim_logic::occupation;
use lifesim_logic::selector;
use lifesim_logic::stats::clamp_percent;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::state::{TurnOutcome, TurnState};

/// Plays one life at a time.
///
/// All randomness comes from `D`; the default is a [`StdRng`] seeded from
/// the config (or from entropy when no seed is set).
pub struct LifeEngine<D: Dice = StdRng> {
    config: LifeConfig,
    character: Character,
    state: TurnState,
    /// Append-only narrative for the current life.
    log: Vec<String>,
    dice: D,
}

impl LifeEngine<StdRng> {
    /// Validate `config` and begin a new life.
    pub fn new(config: LifeConfig) -> Result<Self, EngineError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_dice(config, rng)
    }
}

impl<D: Dice> LifeEngine<D> {
    /// Validate `config` and begin a new life drawn from `dice`.
    pub fn with_dice(config: LifeConfig, mut dice: D) -> Result<Self, EngineError> {
        let errors = validate_config(&config);
        if !errors.is_empty() {
            return Err(EngineError::InvalidConfig(errors));
        }
        let born = new_life(&config, &mut dice);
        info!(
            name = %born.character.full_name(),
            class = born.character.social_class.name(),
            year = born.character.current_year,
            "new life"
        );
        Ok(Self {
            config,
            character: born.character,
            state: TurnState::Idle,
            log: born.intro,
            dice,
        })
    }

    /// Continue play with an existing character, idle between turns.
    pub fn from_character(config: LifeConfig, character: Character, dice: D) -> Self {
        Self {
            config,
            character,
            state: TurnState::Idle,
            log: Vec::new(),
            dice,
        }
    }

    // ── Views ──────────────────────────────────────────────────────────

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Narrative lines for the current life, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn state(&self) -> &TurnState {
        &self.state
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// The event waiting for a choice, as the player sees it.
    pub fn pending(&self) -> Option<EventDescriptor> {
        self.state.pending_event().map(|e| e.descriptor())
    }

    // ── Turn ───────────────────────────────────────────────────────────

    /// Run the next year up to the first point that needs the player.
    pub fn advance_year(&mut self) -> Result<TurnOutcome, EngineError> {
        if !self.state.is_idle() {
            warn!(state = self.state.name(), "advance_year refused");
            return Err(EngineError::TurnInProgress);
        }

        let c = &mut self.character;
        c.age += 1;
        c.current_year += 1;
        debug!(age = c.age, year = c.current_year, "turn begins");
        self.log
            .push(format!("── Age {}, the year {} ──", c.age, c.current_year));

        let previous = c.era;
        c.era = eras::era_for(&c.location, c.current_year).map(|e| e.id);
        if let Some(era) = eras::era_transition(&c.location, previous, c.current_year) {
            if previous.is_some() {
                info!(era = era.name, year = c.current_year, "era change");
                let notice = format!("A new age dawns: {}. {}", era.name, era.description);
                self.narrate(notice, Tone::Neutral);
            }
        }

        for notice in family::age_family(&mut self.character, &mut self.dice) {
            info!(age = self.character.age, "{notice}");
            self.narrate(notice, Tone::Fail);
        }
        if !self.character.family.is_alive() && !self.character.flags.is_orphan {
            self.character.flags.is_orphan = true;
            self.character.flags.living_with = "relatives".to_string();
            self.narrate("With both parents gone, you are an orphan.", Tone::Fail);
        }

        if self.character.age == ages::CLASSMATES {
            if let Some(line) = classmates::enroll(&mut self.character, &mut self.dice) {
                self.narrate(line, Tone::Neutral);
            }
        }

        if self.character.age == ages::ADULTHOOD {
            self.come_of_age();
        }

        let job_title = self.character.job.as_ref().map(|j| j.title.clone());
        if let Some(year) = jobs::apply_annual_effects(&mut self.character) {
            for line in year.lines {
                self.narrate(line, Tone::Neutral);
            }
            if year.exhausted {
                let job = job_title.unwrap_or_default();
                return Ok(self.die(DeathCause::Exhaustion { job }));
            }
        }

        if let Some(event) = coworker::roll_reactive(&self.character, &mut self.dice) {
            debug!(event = %event.id, "coworker event");
            return Ok(self.present(event));
        }

        if self.character.family.can_have_children() && self.dice.chance(odds::SIBLING_BIRTH) {
            let sibling = family::add_sibling(
                &mut self.character,
                relationship::NEUTRAL,
                true,
                &mut self.dice,
            );
            info!(sibling = %sibling, "sibling born");
            self.narrate(
                format!("Your mother has given birth. Welcome {sibling} to the family!"),
                Tone::Success,
            );
            self.state = TurnState::AwaitingBirthAck {
                sibling: sibling.clone(),
            };
            return Ok(TurnOutcome::Birth { sibling });
        }

        Ok(self.select_event())
    }

    /// Answer the pending event with `choice_id`.
    ///
    /// An unknown id leaves the event pending.
    pub fn resolve_choice(&mut self, choice_id: &str) -> Result<TurnOutcome, EngineError> {
        let event = match &self.state {
            TurnState::AwaitingChoice(event) => event,
            TurnState::AwaitingDeathAck { .. } => {
                warn!(choice = choice_id, "resolve_choice after death");
                return Err(EngineError::CharacterDead);
            }
            _ => {
                warn!(
                    state = self.state.name(),
                    choice = choice_id,
                    "resolve_choice with nothing pending"
                );
                return Err(EngineError::NothingPending);
            }
        };
        let Some(choice) = event.choice(choice_id).cloned() else {
            warn!(event = %event.id, choice = choice_id, "unknown choice");
            return Err(EngineError::UnknownChoice(choice_id.to_string()));
        };
        let kind = event.kind.clone();

        if let EventKind::Coworker { coworker_id } = kind {
            return self.resolve_coworker(&coworker_id, choice_id);
        }

        self.state = TurnState::Idle;
        let report = effects::apply_choice(&mut self.character, &choice, &mut self.dice);
        for line in report.lines {
            self.narrate(line, Tone::Neutral);
        }
        if let Some(cause) = report.death {
            return Ok(self.die(cause));
        }
        if let Some(name) = report.new_sibling {
            info!(sibling = %name, "sibling joined the family");
        }
        debug!(age = self.character.age, "turn complete");
        Ok(TurnOutcome::YearComplete)
    }

    /// Acknowledge a birth (the year continues) or a death (a new life begins).
    pub fn acknowledge(&mut self) -> Result<TurnOutcome, EngineError> {
        match self.state {
            TurnState::AwaitingBirthAck { .. } => Ok(self.select_event()),
            TurnState::AwaitingDeathAck { .. } => {
                let born = new_life(&self.config, &mut self.dice);
                info!(
                    name = %born.character.full_name(),
                    class = born.character.social_class.name(),
                    "new life"
                );
                self.character = born.character;
                self.log = born.intro;
                self.state = TurnState::Idle;
                Ok(TurnOutcome::Reborn)
            }
            _ => {
                warn!(state = self.state.name(), "acknowledge with nothing to acknowledge");
                Err(EngineError::NotAwaitingAck)
            }
        }
    }

    // ── Player actions ─────────────────────────────────────────────────

    pub fn interact_family(
        &mut self,
        who: FamilyMember,
        action: FamilyAction,
    ) -> Result<InteractionOutcome, EngineError> {
        self.ensure_alive("interact_family")?;
        let outcome = interactions::family::interact(&self.character, &who, action, &mut self.dice);
        Ok(self.settle(Target::Family(who), outcome))
    }

    pub fn interact_coworker(
        &mut self,
        coworker_id: &str,
        action: CoworkerAction,
    ) -> Result<InteractionOutcome, EngineError> {
        self.ensure_alive("interact_coworker")?;
        let outcome =
            interactions::coworker::interact(&self.character, coworker_id, action, &mut self.dice);
        Ok(self.settle(Target::Coworker(coworker_id.to_string()), outcome))
    }

    pub fn interact_classmate(
        &mut self,
        classmate_id: &str,
        action: ClassmateAction,
    ) -> Result<InteractionOutcome, EngineError> {
        self.ensure_alive("interact_classmate")?;
        let outcome = interactions::classmate::interact(
            &self.character,
            classmate_id,
            action,
            &mut self.dice,
        );
        Ok(self.settle(Target::Classmate(classmate_id.to_string()), outcome))
    }

    /// Take a job. `Ok(false)` when refused; the reason is logged.
    pub fn take_job(&mut self, job_id: &str) -> Result<bool, EngineError> {
        self.ensure_alive("take_job")?;
        match jobs::hire(&mut self.character, job_id, &mut self.dice) {
            Ok(job) => {
                let names: Vec<_> = job.coworkers.iter().map(|w| w.name.as_str()).collect();
                let line = format!(
                    "You take up work as {}. You will labour alongside {}.",
                    job.title,
                    names.join(", ")
                );
                info!(job = job_id, "job taken");
                self.narrate(line, Tone::Success);
                Ok(true)
            }
            Err(refusal) => {
                self.log.push(refusal.to_string());
                Ok(false)
            }
        }
    }

    /// Leave the current job. `Ok(false)` when unemployed.
    pub fn resign_job(&mut self) -> Result<bool, EngineError> {
        self.ensure_alive("resign_job")?;
        match jobs::resign(&mut self.character) {
            Ok(job) => {
                info!(job = %job.id, "job left");
                self.narrate(format!("You leave your post as {}.", job.title), Tone::Neutral);
                Ok(true)
            }
            Err(refusal) => {
                self.log.push(refusal.to_string());
                Ok(false)
            }
        }
    }

    /// Put in a year's work for the household.
    pub fn work(&mut self) -> Result<InteractionOutcome, EngineError> {
        self.ensure_alive("work")?;
        let outcome = occupation::work(&self.character, &mut self.dice);
        Ok(self.settle(Target::Player, outcome))
    }

    pub fn do_activity(
        &mut self,
        activity_id: &str,
        choice: ActivityChoice,
    ) -> Result<InteractionOutcome, EngineError> {
        self.ensure_alive("do_activity")?;
        let outcome = activities::perform(&self.character, activity_id, choice);
        Ok(self.settle(Target::Player, outcome))
    }

    pub fn commit_crime(&mut self, crime: Crime) -> Result<InteractionOutcome, EngineError> {
        self.ensure_alive("commit_crime")?;
        let outcome = activities::commit_crime(&self.character, crime, &mut self.dice);
        Ok(self.settle(Target::Player, outcome))
    }

    pub fn use_item(
        &mut self,
        item_id: &str,
        how: ItemUse,
    ) -> Result<InteractionOutcome, EngineError> {
        self.ensure_alive("use_item")?;
        let outcome = inventory::use_item(&self.character, item_id, how);
        Ok(self.settle(Target::Player, outcome))
    }

    // ── Internals ──────────────────────────────────────────────────────

    /// Log to the narrative and to this year's event log.
    fn narrate(&mut self, line: impl Into<String>, tone: Tone) {
        let line = line.into();
        self.character.record(line.clone(), tone);
        self.log.push(line);
    }

    fn ensure_alive(&self, call: &'static str) -> Result<(), EngineError> {
        if self.state.is_dead() {
            warn!(call, "action after death");
            return Err(EngineError::CharacterDead);
        }
        Ok(())
    }

    /// Apply an interaction outcome. Refusals are logged and change nothing.
    fn settle(&mut self, target: Target, outcome: InteractionOutcome) -> InteractionOutcome {
        self.log.push(outcome.message.clone());
        if !outcome.changed() {
            return outcome;
        }
        let died = interactions::apply(&mut self.character, &target, &outcome, &mut self.dice);
        if died {
            self.die(DeathCause::Injuries {
                account: outcome.message.clone(),
            });
        }
        outcome
    }

    fn come_of_age(&mut self) {
        let class = self.character.social_class;
        let openings = jobs::available_jobs(class)
            .map(|j| j.title)
            .collect::<Vec<_>>()
            .join(", ");
        info!(age = self.character.age, "came of age");
        self.narrate("You have come of age. Childhood is behind you.", Tone::Success);
        self.narrate(
            format!("Work open to one of the {}: {openings}.", class.name()),
            Tone::Neutral,
        );
    }

    /// Step 8 of the turn: the year's ordinary event.
    fn select_event(&mut self) -> TurnOutcome {
        let event = selector::select_or_fallback(&self.character, &mut self.dice);
        selector::mark_selected(&mut self.character, &event);
        debug!(event = %event.id, kind = ?event.kind, "event selected");
        self.present(event)
    }

    fn present(&mut self, event: Event) -> TurnOutcome {
        self.narrate(format!("{}: {}", event.title, event.description), Tone::Neutral);
        let descriptor = event.descriptor();
        self.state = TurnState::AwaitingChoice(event);
        TurnOutcome::Choose(descriptor)
    }

    fn resolve_coworker(
        &mut self,
        coworker_id: &str,
        choice_id: &str,
    ) -> Result<TurnOutcome, EngineError> {
        let coworker = self
            .character
            .job
            .as_ref()
            .and_then(|j| j.coworker(coworker_id))
            .cloned();
        let Some(coworker) = coworker else {
            self.narrate(
                "They are no longer your colleague; the matter is dropped.",
                Tone::Neutral,
            );
            return Ok(self.select_event());
        };
        let resolution = coworker::resolve(&self.character, &coworker, choice_id, &mut self.dice);
        let Some(resolution) = resolution else {
            warn!(choice = choice_id, "unknown coworker choice");
            return Err(EngineError::UnknownChoice(choice_id.to_string()));
        };

        self.state = TurnState::Idle;
        self.narrate(resolution.message.clone(), resolution.tone);
        let changes = effects::apply_deltas(&mut self.character, &resolution.effect);
        if !changes.is_empty() {
            self.narrate(changes.join(", "), Tone::Neutral);
        }
        if let (Some(delta), Some(w)) = (
            resolution.effect.relationship,
            self.character.job.as_mut().and_then(|j| j.coworker_mut(coworker_id)),
        ) {
            w.relationship = clamp_percent(w.relationship, delta);
        }

        if self.character.is_dead() {
            return Ok(self.die(DeathCause::Injuries {
                account: resolution.message,
            }));
        }
        Ok(self.select_event())
    }

    fn die(&mut self, cause: DeathCause) -> TurnOutcome {
        let c = &mut self.character;
        c.stats.health = 0;
        info!(
            age = c.age,
            year = c.current_year,
            cause = %cause.describe(),
            "character died"
        );
        let epitaph = format!(
            "{} {} at the age of {}, in the year {}.",
            c.full_name(),
            cause.describe(),
            c.age,
            c.current_year
        );
        self.narrate(epitaph, Tone::Fail);
        self.narrate("── Your life is over ──", Tone::Fail);
        self.state = TurnState::AwaitingDeathAck {
            cause: cause.clone(),
        };
        TurnOutcome::Died(cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifesim_logic::character::SocialClass;
    use lifesim_logic::dice::ScriptedDice;

    fn seeded(seed: u64) -> LifeEngine {
        let config = LifeConfig {
            seed: Some(seed),
            ..LifeConfig::default()
        };
        LifeEngine::new(config).unwrap()
    }

    fn scripted(age: u32, dice: ScriptedDice) -> LifeEngine<ScriptedDice> {
        let mut rng = StdRng::seed_from_u64(5);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.age = age;
        c.stats.health = 80;
        LifeEngine::from_character(LifeConfig::default(), c, dice)
    }

    #[test]
    fn test_engine_creation() {
        let engine = seeded(1);
        assert_eq!(engine.character().age, 0);
        assert_eq!(engine.character().current_year, 1500);
        assert!(engine.state().is_idle());
        assert!(!engine.log().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = LifeConfig {
            location: "Atlantis".into(),
            ..LifeConfig::default()
        };
        assert!(matches!(
            LifeEngine::new(config),
            Err(EngineError::InvalidConfig(errors)) if !errors.is_empty()
        ));
    }

    #[test]
    fn test_same_seed_same_life() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..10 {
            let (oa, ob) = (a.advance_year(), b.advance_year());
            assert_eq!(oa, ob);
            if a.acknowledge().is_ok() {
                b.acknowledge().unwrap();
            }
            if let Some(event) = a.pending() {
                let id = event.choices[0].id.clone();
                assert_eq!(a.resolve_choice(&id), b.resolve_choice(&id));
            }
        }
        assert_eq!(a.character(), b.character());
        assert_eq!(a.log(), b.log());
    }

    #[test]
    fn test_advance_blocked_while_pending() {
        let mut engine = scripted(20, ScriptedDice::never());
        let first = engine.advance_year().unwrap();
        assert!(matches!(first, TurnOutcome::Choose(_)));
        let before = engine.character().clone();
        assert_eq!(engine.advance_year(), Err(EngineError::TurnInProgress));
        assert_eq!(engine.character(), &before);
        assert_eq!(engine.character().age, 21);
    }

    #[test]
    fn test_unknown_choice_keeps_event_pending() {
        let mut engine = scripted(20, ScriptedDice::never());
        engine.advance_year().unwrap();
        let pending = engine.pending().unwrap();
        assert_eq!(
            engine.resolve_choice("no_such_choice"),
            Err(EngineError::UnknownChoice("no_such_choice".into()))
        );
        assert_eq!(engine.pending(), Some(pending));
    }

    #[test]
    fn test_resolve_without_event() {
        let mut engine = scripted(20, ScriptedDice::never());
        assert_eq!(engine.resolve_choice("x"), Err(EngineError::NothingPending));
        assert_eq!(engine.acknowledge(), Err(EngineError::NotAwaitingAck));
    }

    #[test]
    fn test_year_completes() {
        let mut engine = scripted(20, ScriptedDice::never());
        let TurnOutcome::Choose(event) = engine.advance_year().unwrap() else {
            panic!("expected an event");
        };
        let outcome = engine.resolve_choice(&event.choices[0].id).unwrap();
        assert!(matches!(outcome, TurnOutcome::YearComplete | TurnOutcome::Died(_)));
        if outcome == TurnOutcome::YearComplete {
            assert!(engine.state().is_idle());
            assert!(engine.advance_year().is_ok());
        }
    }

    #[test]
    fn test_classmates_join_at_six() {
        let mut engine = scripted(5, ScriptedDice::never());
        engine.advance_year().unwrap();
        let class = engine.character().social_class;
        assert_eq!(engine.character().classmates.len(), classmates::cohort_size(class));
    }

    #[test]
    fn test_orphaned_when_both_parents_die() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut c = new_life(&LifeConfig::default(), &mut rng).character;
        c.age = 20;
        c.family.father.alive = false;
        c.family.mother.age = 100;
        let mut engine =
            LifeEngine::from_character(LifeConfig::default(), c, ScriptedDice::never());
        engine.advance_year().unwrap();
        assert!(!engine.character().family.mother.alive);
        assert!(engine.character().flags.is_orphan);
        assert!(engine.log().iter().any(|l| l.contains("orphan")));
    }

    #[test]
    fn test_tantrum_can_kill() {
        let mut engine = scripted(4, ScriptedDice::never());
        engine.character.stats.health = 2;
        let outcome = engine
            .interact_family(FamilyMember::Mother, FamilyAction::Tantrum)
            .unwrap();
        assert!(outcome.changed());
        assert!(engine.state().is_dead());
        assert_eq!(engine.character().stats.health, 0);
        assert_eq!(
            engine.interact_family(FamilyMember::Father, FamilyAction::Chat),
            Err(EngineError::CharacterDead)
        );
    }

    #[test]
    fn test_death_ack_starts_new_life() {
        let mut engine = scripted(4, ScriptedDice::never());
        engine.character.stats.health = 1;
        engine
            .interact_family(FamilyMember::Father, FamilyAction::Tantrum)
            .unwrap();
        assert!(engine.state().is_dead());
        assert_eq!(engine.advance_year(), Err(EngineError::TurnInProgress));

        assert_eq!(engine.acknowledge(), Ok(TurnOutcome::Reborn));
        assert!(engine.state().is_idle());
        assert_eq!(engine.character().age, 0);
        assert!(engine.character().stats.health > 0);
        assert!(engine.log().iter().all(|l| !l.contains("life is over")));
    }

    #[test]
    fn test_take_and_leave_job() {
        let mut engine = scripted(16, ScriptedDice::never());
        engine.character.social_class = SocialClass::Peasant;
        engine.character.stats.strength = 40;
        assert_eq!(engine.take_job("field_plower"), Ok(true));
        assert!(engine.character().job.is_some());
        assert_eq!(engine.take_job("shepherd"), Ok(false));
        assert_eq!(engine.resign_job(), Ok(true));
        assert_eq!(engine.resign_job(), Ok(false));
    }

    #[test]
    fn test_refused_job_logged_without_change() {
        let mut engine = scripted(10, ScriptedDice::never());
        let before = engine.character().clone();
        assert_eq!(engine.take_job("court_advisor"), Ok(false));
        assert_eq!(engine.character(), &before);
        assert!(!engine.log().is_empty());
    }
}
