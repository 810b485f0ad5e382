//! Content libraries for Arcana.
//!
//! Bundled JSON libraries of mindfulness exercises, CBT and DBT skills,
//! journal prompts, and gamification data, exposed through a
//! [`ContentFacade`] of simple lookups. Also carries the personality-type
//! profiles used to relate readings to a querent's MBTI type.

pub mod error;
pub mod facade;
pub mod library;
pub mod mbti;

pub use error::{ContentError, ContentResult};
pub use facade::ContentFacade;
pub use library::{ContentItem, ContentKind, ContentLibrary};
pub use mbti::{PersonalityProfile, PersonalityType};
