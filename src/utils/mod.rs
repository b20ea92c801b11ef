pub mod errors;
pub mod output;
pub mod paths;
pub mod settings;
pub mod tools;

pub use errors::*;
pub use output::*;
pub use paths::*;
pub use settings::*;
pub use tools::*;
