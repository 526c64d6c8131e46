//! Conversion between the external representation of instances and solutions and the library's entities.
//!
//! Instances are stored in the text format of Brandão & Pedroso:
//! ```text
//! d                   number of dimensions
//! C_1 ... C_d         capacities of the bins
//! n                   number of item types
//! w_1 ... w_d demand  requirements of an item type, followed by its number of copies
//! ```

pub mod ext_repr;

mod export;
mod import;
mod parse;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use parse::{parse, write};
