use crate::block::BlockId;
use std::collections::HashMap;
use taxsheet_traits::ObjectHandle;
use taxsheet_types::Size;

/// A block drawn into a reusable object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedBlock {
    pub handle: ObjectHandle,
    /// Size the object was created with; later edits to the block do not change it.
    pub size: Size,
}

/// Maps each rendered block to the reusable object holding its drawing.
///
/// Entries live as long as the document render and are never invalidated.
#[derive(Debug, Default)]
pub struct BlockCache {
    entries: HashMap<BlockId, RenderedBlock>,
    hits: usize,
    misses: usize,
}

impl BlockCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a block and counts the hit or miss.
    pub fn lookup(&mut self, id: &BlockId) -> Option<RenderedBlock> {
        match self.entries.get(id) {
            Some(rendered) => {
                self.hits += 1;
                Some(*rendered)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, id: BlockId, rendered: RenderedBlock) {
        self.entries.insert(id, rendered);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
