//! Module and header name resolution.
//!
//! A [`Resolver`] turns the raw names a scanned file mentions into concrete
//! prerequisites: module names become object targets, header names become
//! header paths. All existence checks go through the [`SourceTree`], so a
//! name only ever resolves to a file that is really there.

mod include;
mod module;

pub use module::module_candidates;

use crate::options::AnalysisOptions;
use crate::paths::PathMapper;
use crate::tree::SourceTree;

/// Borrowed view of everything resolution needs.
pub struct Resolver<'a, T: SourceTree + ?Sized> {
    tree: &'a T,
    mapper: &'a PathMapper,
    options: &'a AnalysisOptions,
}

impl<'a, T: SourceTree + ?Sized> Resolver<'a, T> {
    pub fn new(tree: &'a T, mapper: &'a PathMapper, options: &'a AnalysisOptions) -> Self {
        Self {
            tree,
            mapper,
            options,
        }
    }

    pub fn mapper(&self) -> &PathMapper {
        self.mapper
    }
}
