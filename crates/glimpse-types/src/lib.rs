pub mod facts;
pub mod style;
pub mod subject;
pub mod util;
pub mod view;

pub use facts::{Ancestry, TypeFacts};
pub use style::{DisplayStyle, StructuralKind};
pub use subject::{FieldScan, Subject, SubjectId};
pub use util::display_name;
pub use view::{Child, View};
