use std::fmt::{self, Debug, Formatter};

use itertools::Itertools;

use crate::program::action::Action;
use crate::program::Program;

/// Which actions are present in a program, computed once when play
/// starts so the simulation doesn't rescan the block list every tick
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Capabilities(u16);

impl Capabilities {
    pub fn from_program(program: &Program) -> Self {
        program.blocks().iter().filter_map(|block| block.action()).collect()
    }

    #[inline(always)]
    pub fn has(self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }

    #[must_use]
    pub fn with(self, action: Action) -> Self {
        Self(self.0 | action.bit())
    }

    /// Keyboard input changes direction only with both blocks present
    pub fn can_steer(self) -> bool {
        self.has(Action::KeyPress) && self.has(Action::ChangeDirection)
    }

    pub fn iter(self) -> impl Iterator<Item = Action> {
        Action::ALL.into_iter().filter(move |action| self.has(*action))
    }
}

impl FromIterator<Action> for Capabilities {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        iter.into_iter().fold(Self::default(), Self::with)
    }
}

impl Debug for Capabilities {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::block::{BlockDef, BlockType, Category};
    use crate::program::palette::def_for;

    #[test]
    fn presence_ignores_order_and_duplicates() {
        let mut program = Program::default();
        program.append(def_for(Action::GameOver));
        program.append(def_for(Action::MoveSnake));
        program.append(def_for(Action::MoveSnake));

        let caps = Capabilities::from_program(&program);
        assert!(caps.has(Action::MoveSnake));
        assert!(caps.has(Action::GameOver));
        assert!(!caps.has(Action::CheckWall));
        assert_eq!(caps.iter().count(), 2);
    }

    #[test]
    fn unknown_codes_are_inert() {
        let mut program = Program::default();
        let mut def = BlockDef::new(BlockType::Control, Category::Logic, "Jump", Action::MoveSnake);
        def.code = "JUMP".to_string();
        program.append(&def);

        assert_eq!(Capabilities::from_program(&program), Capabilities::default());
    }

    #[test]
    fn steering_needs_both_blocks() {
        let key_press = Capabilities::default().with(Action::KeyPress);
        assert!(!key_press.can_steer());
        assert!(!Capabilities::default().with(Action::ChangeDirection).can_steer());
        assert!(key_press.with(Action::ChangeDirection).can_steer());
    }
}
