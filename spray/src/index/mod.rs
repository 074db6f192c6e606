//! The indexing engine.
//!
//! An [`Indexer`] assigns each tracked host node a path identifier built from
//! its ancestry below the nearest anchor:
//!
//! - a segment is the node's base identifier (its input attribute, or its
//!   lower-cased kind), suffixed with its zero-based position among same-kind
//!   siblings when there is more than one of them (or always, with
//!   `force_index`);
//! - the identifier is the anchor followed by every segment, joined with the
//!   configured separator, e.g. `body/div[1]/p`.
//!
//! Tracked nodes are mirrored in a [`ShadowTree`]. Inserting or removing a node
//! renumbers its sibling group and rewrites the identifiers of every tracked
//! node whose path changed as a result.

mod derive;
mod indexer;
mod shadow;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use derive::{base_identifier, derive_path, is_anchor, same_kind_children, DerivedPath};
pub use indexer::Indexer;
pub use shadow::{ShadowId, ShadowTree};
