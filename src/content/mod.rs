//! Built-in generated content: the prophecy catalog and story event graph
//! produced for a character at journey start. Both generators are pure;
//! content branches on the character at generation time and is never
//! regenerated mid-journey.

mod events;
mod prophecies;

pub use events::generate_events;
pub use prophecies::generate_prophecies;
