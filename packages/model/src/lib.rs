pub mod id_generator;
pub mod section;
pub mod tree;

pub use id_generator::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use section::{Document, Section, SectionKind, SectionStyle};
pub use tree::SectionPatch;
