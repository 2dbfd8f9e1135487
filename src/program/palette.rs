use crate::color::Color;
use crate::program::action::Action;
use crate::program::block::{BlockDef, BlockType, Category, Param};

pub struct Section {
    pub name: &'static str,
    pub color: Color,
    pub defs: Vec<BlockDef>,
}

lazy_static! {
    /// Every block a user can add, grouped the way they are displayed
    pub static ref PALETTE: Vec<Section> = {
        use Action::*;
        use BlockType::Event;
        let action = |category, label, action| BlockDef::new(BlockType::Action, category, label, action);

        vec![
            Section {
                name: "Events",
                color: Color::from_rgb(234, 179, 8),
                defs: vec![
                    BlockDef::new(Event, Category::Events, "When game starts", GameStart),
                    BlockDef::new(Event, Category::Events, "Handle key press", KeyPress),
                ],
            },
            Section {
                name: "Movement",
                color: Color::from_rgb(59, 130, 246),
                defs: vec![
                    action(Category::Movement, "Move snake", MoveSnake),
                    action(Category::Movement, "Change direction", ChangeDirection),
                    action(Category::Movement, "Set speed", SetSpeed)
                        .param(Param::number("speed", 100.)),
                ],
            },
            Section {
                name: "Game Logic",
                color: Color::from_rgb(34, 197, 94),
                defs: vec![
                    action(Category::Logic, "Check food collision", CheckFood),
                    action(Category::Logic, "Grow snake", GrowSnake),
                    action(Category::Logic, "Check wall collision", CheckWall),
                    action(Category::Logic, "Check self collision", CheckSelf),
                    action(Category::Logic, "Game over", GameOver),
                ],
            },
            Section {
                name: "Customization",
                color: Color::from_rgb(168, 85, 247),
                defs: vec![
                    action(Category::Custom, "Set snake color", SetSnakeColor)
                        .param(Param::string("color", "#4CAF50")),
                    action(Category::Custom, "Set food color", SetFoodColor)
                        .param(Param::string("color", "#F44336")),
                    action(Category::Custom, "Set grid size", SetGridSize)
                        .param(Param::number("size", 20.)),
                ],
            },
        ]
    };
}

/// Flat view of the palette in display order
pub fn entries() -> impl Iterator<Item = &'static BlockDef> {
    PALETTE.iter().flat_map(|section| section.defs.iter())
}

/// The palette entry enabling `action`
pub fn def_for(action: Action) -> &'static BlockDef {
    entries()
        .find(|def| def.action() == Some(action))
        .unwrap_or_else(|| panic!("palette has no block for {}", action))
}

pub fn section_color(category: Category) -> Color {
    let index = match category {
        Category::Events => 0,
        Category::Movement => 1,
        Category::Logic => 2,
        Category::Custom => 3,
    };
    PALETTE[index].color
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn palette_covers_every_action_once() {
        let actions = entries().filter_map(BlockDef::action).collect_vec();
        assert_eq!(actions.len(), Action::ALL.len());
        for action in Action::ALL {
            assert_eq!(def_for(action).action(), Some(action));
        }
    }

    #[test]
    fn section_colors_match_categories() {
        for section in PALETTE.iter() {
            for def in &section.defs {
                assert_eq!(section_color(def.category), section.color, "{}", def.label);
            }
        }
    }

    #[test]
    fn setting_blocks_carry_defaults() {
        let speed = def_for(Action::SetSpeed);
        assert_eq!(speed.params[0].value.as_number(), Some(100.));
        let size = def_for(Action::SetGridSize);
        assert_eq!(size.params[0].value.as_number(), Some(20.));
        let snake = def_for(Action::SetSnakeColor);
        assert_eq!(snake.params[0].value.as_str(), Some("#4CAF50"));
    }
}
