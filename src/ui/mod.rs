pub mod icons;
pub mod reporter;

pub use reporter::{ColorChoice, Reporter};
