//! Lossless semantic trees for Java and JavaScript sources.
//!
//! Trees are immutable and shared through `Arc`. Visitors produce new trees that
//! reuse every unchanged subtree, and the RPC codec moves a tree (or the
//! difference against the copy the peer already holds) across a process boundary.

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod logging;
pub mod rpc;
pub mod tree;
pub mod types;
pub mod visitor;

pub use error::RpcError;
pub use tree::{Identical, Kind, Tree, TreeBase};
pub use types::JavaType;
pub use visitor::{Cursor, JavaVisitor};
