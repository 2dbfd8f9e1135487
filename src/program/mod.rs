//! The user's program: an ordered list of blocks copied from the palette

pub use action::Action;
pub use block::{Block, BlockDef, BlockId, BlockType, Category, Param, ParamError, ParamType, ParamValue};
pub use capabilities::Capabilities;
pub use settings::Settings;

pub mod action;
pub mod block;
pub mod capabilities;
pub mod palette;
pub mod settings;

#[derive(Clone, Debug, Default)]
pub struct Program {
    blocks: Vec<Block>,
    /// Ids are never reused within a session
    next_id: u64,
}

impl Program {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    /// Copy `def` to the end of the program under a fresh id
    pub fn append(&mut self, def: &BlockDef) -> BlockId {
        self.next_id += 1;
        let id = BlockId(self.next_id);
        self.blocks.push(Block { id, def: def.clone() });
        id
    }

    /// No-op if there is no such block
    pub fn remove(&mut self, id: BlockId) -> Option<Block> {
        let index = self.position(id)?;
        Some(self.blocks.remove(index))
    }

    /// Take the block at `from` and reinsert it at `to`, both must be
    /// valid indices into the current list, otherwise nothing happens
    /// and false is returned
    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        let len = self.blocks.len();
        if from >= len || to >= len {
            return false;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        true
    }

    pub fn set_param(&mut self, id: BlockId, name: &str, value: ParamValue) -> Result<(), ParamError> {
        self.blocks
            .iter_mut()
            .find(|block| block.id == id)
            .ok_or(ParamError::UnknownBlock { id })?
            .set_param(name, value)
    }
}
