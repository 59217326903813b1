//! Reply selection for parley.
//!
//! [`Responder::get_response`] is the whole contract offered to front ends:
//! a string in, a non-empty string out.

pub mod policy;
pub mod random;
pub mod replies;
pub mod responder;
pub mod session;

pub use policy::{Intent, Reply, ResponsePolicy};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use responder::Responder;
pub use session::{ChatSession, ends_conversation};
