//! LTO Public Node Client
//!
//! REST client for the subset of the public node API used by wallet script
//! management: reading an address's script, compiling script source, and
//! broadcasting signed set-script transactions.

pub mod models;
mod public_node;

pub use public_node::PublicNode;
