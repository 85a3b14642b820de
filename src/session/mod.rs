pub mod context;
pub mod extractor;

pub use context::Session;
pub use extractor::CurrentUser;
