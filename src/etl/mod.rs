//! Core extraction abstractions
//!
//! Every source in a run (a table or the user roster) is an [`Extractor`];
//! reshaping fetched items is a [`Transformer`].

mod extract;
mod transform;

pub use extract::Extractor;
pub use transform::Transformer;
