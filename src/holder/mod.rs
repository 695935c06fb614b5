/* src/holder/mod.rs */

mod entry;
mod kind;

pub use entry::AttributeHolder;
pub use kind::HolderKind;
