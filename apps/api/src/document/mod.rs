// Document core: typed resume record, identity generator, field addresses,
// and the reducer that is the document's sole mutation path.

pub mod address;
pub mod ids;
pub mod model;
pub mod reducer;

pub use address::{FieldAddress, SectionLabel};
pub use model::{ActiveTab, EducationEntry, ExperienceEntry, ResumeDocument, Template};
pub use reducer::{reduce, Action};
