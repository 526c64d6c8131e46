mod bin;
mod instance;
mod item;
mod packing_state;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use bin::BinId;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use instance::lower_bound;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::ItemId;

#[doc(inline)]
pub use packing_state::PackingState;
