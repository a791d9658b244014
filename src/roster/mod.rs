//! Roster search: decoding, skill resolution, composition and projection.

pub mod compose;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod resolver;
pub mod view;

pub use model::{ComposedPerson, ContactEntry, PersonRecord, PersonView, SkillEntry, SlackStatus};
pub use pipeline::{Explanation, SearchPipeline};
pub use view::Project;
