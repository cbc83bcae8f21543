pub mod marks;

pub use marks::{MarkContext, MarkLayer, NoMarks};
