//! Skill installation.
//!
//! Installing a skill resolves a target directory, then runs an ordered
//! list of strategies until one materializes the skill:
//!
//! 1. [`ExternalStrategy`] - repository-backed skills are generated by an
//!    external [`Generator`] (by default the `skill-seekers` tool) in a
//!    scratch directory and moved into place
//! 2. [`SimpleStrategy`] - a single `SKILL.md` rendered from catalog metadata
//!
//! A failed external generation falls back to the simple path. The install
//! registry is updated only after a strategy succeeds.

pub mod generator;
pub mod installer;
pub mod skill_md;
pub mod strategy;
pub mod target;

pub use generator::{GenerateRequest, Generator, GeneratorRun, SkillSeekersGenerator};
pub use installer::{
    InstallOptions, InstallOutcome, InstallReport, InstalledSkill, Installer, REMOVED_FROM_INDEX,
};
pub use skill_md::{render as render_skill_md, SKILL_MD};
pub use strategy::{
    ExternalStrategy, Generated, InstallStrategy, SimpleStrategy, StrategyContext,
    StrategyOutcome, MAX_LISTED_FILES,
};
pub use target::TargetResolver;
