//! Public types for the chavruta API.

mod daf;
mod generate;
mod style;
mod topics;

pub use daf::{DafInfo, DafRef};
pub use generate::{GenerateOptions, GenerateResponse};
pub use style::{Language, Style};
pub use topics::PopularTopics;
