pub mod election;
pub use election::*;

pub mod events;
pub use events::*;

pub mod voter;
pub use voter::*;
