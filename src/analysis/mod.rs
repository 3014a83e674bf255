// Signal confluence analysis
pub mod alignment;

pub use alignment::{AlignmentVerdict, evaluate};
