//! General-purpose helpers shared by the graph code and its tests.

mod iter;
mod set;
pub mod testing;
mod text;

pub use iter::{markovian, sorted_by_key, sorted_by_key_with, Markovian, SeqExt, Uniq};
pub use set::Set;
pub use text::indent;
