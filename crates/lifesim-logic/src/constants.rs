//! Game constants: milestone ages, odds, and costs.
//!
//! Plain values shared by several rule modules and the engine.

pub mod ages {
    /// Classmate cohort is formed on this birthday.
    pub const CLASSMATES: u32 = 6;
    /// Adulthood milestone; jobs, money requests and allowances open here.
    pub const ADULTHOOD: u32 = 13;
    /// Last age at which childhood events and child actions apply.
    pub const CHILDHOOD_MAX: u32 = 12;
    /// Up to this age the quiet filler is a "calm day".
    pub const CALM_DAY_MAX: u32 = 4;
    /// Minimum age for chatting with family.
    pub const CHAT_MIN: u32 = 5;
    /// Minimum age for child work and helping at work.
    pub const WORK_MIN: u32 = 6;
    /// Minimum age for petty crime.
    pub const CRIME_MIN: u32 = 10;
    /// Mothers of this age or older bear no more children.
    pub const MOTHER_FERTILE_BELOW: u32 = 45;
    /// NPCs younger than this still gain strength.
    pub const PRIME_BELOW: u32 = 30;
    /// NPCs older than this decline.
    pub const OLD_AGE: u32 = 50;
    /// NPCs older than this die.
    pub const MAX_AGE: u32 = 100;
}

pub mod odds {
    /// Per-coworker chance of a reactive event each year.
    pub const COWORKER_EVENT: f64 = 0.20;
    /// Yearly chance of a sibling while the mother is fertile.
    pub const SIBLING_BIRTH: f64 = 0.15;
    /// Yearly chance an NPC suffers an unexpected expense.
    pub const NPC_EXPENSE: f64 = 0.20;
    /// Chance child work introduces a new classmate.
    pub const NEW_CLASSMATE_AT_WORK: f64 = 0.10;
    /// Chance an insult turns into a fight.
    pub const INSULT_FIGHT: f64 = 0.30;
    /// Chance sabotage goes unnoticed.
    pub const SABOTAGE_SUCCESS: f64 = 0.50;
    /// Chance a crushing duel loss is near-fatal.
    pub const DUEL_NEAR_FATAL: f64 = 0.30;
    /// Toy request denial for peasant parents.
    pub const TOY_DENIAL_PEASANT: f64 = 0.80;
    /// Toy request denial for everyone else.
    pub const TOY_DENIAL_OTHER: f64 = 0.20;
    pub const PICKPOCKET_EASY: f64 = 0.70;
    pub const PICKPOCKET_HARD: f64 = 0.25;
    pub const POACHING: f64 = 0.50;
}

pub mod costs {
    /// A round at the tavern with a coworker.
    pub const TAVERN_ROUND: u32 = 5;
    /// The same round when the coworker invites you.
    pub const TAVERN_INVITE: u32 = 3;
    /// What a coworker asks to borrow.
    pub const COWORKER_LOAN: u32 = 5;
}

pub mod relationship {
    /// Starting relationship for coworkers and siblings born in a turn.
    pub const NEUTRAL: u8 = 50;
    /// Starting relationship for a sibling arriving through an event choice.
    pub const DOTING: u8 = 100;
    /// Starting relationship for a classmate met at work.
    pub const ACQUAINTANCE: u8 = 25;
    /// Coworker relationship needed to borrow money.
    pub const LOAN_ABOVE: u8 = 80;
    /// Coworker relationship needed to ask for help.
    pub const HELP_ABOVE: u8 = 60;
}

/// Years in which accusing a coworker of heresy carries weight.
pub const HERESY_YEARS: std::ops::RangeInclusive<u32> = 1500..=1700;
