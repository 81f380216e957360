pub mod error;
pub mod host;
pub mod memory;
pub mod selectors;
pub mod toggler;

// Toggle crate: one-way description -> documentation panel switch.
pub use error::*;
pub use host::*;
pub use memory::*;
pub use selectors::*;
pub use toggler::*;
