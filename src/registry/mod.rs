//! Section registries and the catalog of sections.
//!
//! A `Section` owns an ordered list of field descriptors plus the named
//! cross-field rules that cannot be expressed on a single descriptor.
//! A `Catalog` is the ordered set of sections that make up one document.

mod catalog;
mod section;


pub use catalog::{Catalog, KeyCollision, Overlay};
pub use section::{CrossFieldRule, RuleFn, Section};
