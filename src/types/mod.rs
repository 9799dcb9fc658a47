mod decision;
mod declaration;
mod environment;
mod platform;

pub use decision::*;
pub use declaration::*;
pub use environment::*;
pub use platform::*;
