mod alias;
mod assign;
mod context;
mod icon;
mod resolve;

pub use alias::*;
pub use assign::*;
pub use context::*;
pub use icon::*;
pub use resolve::*;
