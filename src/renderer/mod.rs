//! Presentation contract
//!
//! The simulation never draws. After each tick a front end asks for a
//! `DrawList` and turns it into pixels, a vertex batch, or text.
//! Respawning pursuers and eaten items are simply absent.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

use crate::sim::{Body, Heading, Outcome, Sprite, World};
use vertex::colors;

/// What to paint for one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    Sprite(Sprite),
    /// Plain filled rectangle
    Fill([f32; 4]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub visual: Visual,
    pub pos: Vec2,
    pub size: Vec2,
}

impl DrawItem {
    fn from_body(body: &Body) -> Self {
        Self {
            visual: body
                .sprite
                .map(Visual::Sprite)
                .unwrap_or(Visual::Fill(colors::FOOD)),
            pos: body.pos,
            size: body.size(),
        }
    }
}

/// On-screen text
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub lives: u8,
    pub score_anchor: Vec2,
    pub lives_anchor: Vec2,
}

impl Hud {
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }

    /// Each HUD string with the point it is drawn at
    pub fn labels(&self) -> [(Vec2, String); 2] {
        [
            (self.score_anchor, self.score_text()),
            (self.lives_anchor, self.lives_text()),
        ]
    }
}

/// Everything a frame needs, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
    pub hud: Hud,
    pub outcome: Option<Outcome>,
}

/// Build the frame: walls, food, power items, active pursuers, agent
pub fn draw_list(world: &World) -> DrawList {
    let mut items = Vec::with_capacity(
        world.walls.len() + world.foods.len() + world.power_items.len() + world.pursuers.len() + 1,
    );

    items.extend(world.walls.iter().map(DrawItem::from_body));
    items.extend(world.foods.iter().map(|food| DrawItem {
        visual: Visual::Fill(colors::FOOD),
        pos: food.pos,
        size: food.size(),
    }));
    items.extend(world.power_items.iter().map(DrawItem::from_body));
    items.extend(
        world
            .pursuers
            .iter()
            .filter(|p| p.is_active())
            .map(|p| DrawItem::from_body(p.body())),
    );
    items.push(DrawItem::from_body(world.agent.body()));

    DrawList {
        items,
        hud: Hud {
            score: world.state.score,
            lives: world.state.lives,
            score_anchor: Vec2::new(20.0, 30.0),
            lives_anchor: Vec2::new(world.geometry.board_width() - 100.0, 30.0),
        },
        outcome: world.state.outcome,
    }
}

fn agent_glyph(heading: Heading) -> char {
    match heading {
        Heading::Up => '^',
        Heading::Down => 'v',
        Heading::Left => '<',
        Heading::Right => '>',
    }
}

/// Character grid of the board, one char per cell, plus a HUD line.
///
/// `X` wall, `.` food, `O` power item, pursuer symbols (`~` when scared),
/// agent as an arrow. Anything in the tunnel off the board is left out.
pub fn text_frame(world: &World) -> String {
    let geometry = &world.geometry;
    let mut grid = vec![vec![' '; geometry.columns]; geometry.rows];

    let mut plot = |body: &Body, glyph: char| {
        if let Some((row, col)) = geometry.cell_at(body.pos + body.size() / 2.0) {
            grid[row][col] = glyph;
        }
    };

    for wall in &world.walls {
        plot(wall, 'X');
    }
    for food in &world.foods {
        plot(food, '.');
    }
    for item in &world.power_items {
        plot(item, 'O');
    }
    for pursuer in world.pursuers.iter().filter(|p| p.is_active()) {
        let glyph = if pursuer.vulnerable {
            '~'
        } else {
            pursuer.identity.symbol()
        };
        plot(pursuer.body(), glyph);
    }
    plot(world.agent.body(), agent_glyph(world.agent.heading()));

    let mut out = String::with_capacity((geometry.columns + 1) * (geometry.rows + 1));
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out.push_str(&format!(
        "Score: {}  Lives: {}",
        world.state.score, world.state.lives
    ));
    if let Some(outcome) = world.state.outcome {
        out.push_str(match outcome {
            Outcome::Won => "  YOU WIN",
            Outcome::Lost => "  GAME OVER",
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GridGeometry, Layout};

    fn small_world() -> World {
        let rows = ["XXXXX", "XPO X", "XrXXX"];
        World::new(
            Layout::parse(&rows, GridGeometry::new(32.0, 3, 5)).unwrap(),
            1,
        )
    }

    #[test]
    fn test_draw_order_and_contents() {
        let world = small_world();
        let list = draw_list(&world);
        let walls = world.walls.len();
        assert_eq!(list.items.len(), walls + 1 + 1 + 1 + 1);
        assert_eq!(list.items[0].visual, Visual::Sprite(Sprite::Wall));
        // Food is a filled square, not a sprite
        assert_eq!(list.items[walls].visual, Visual::Fill(colors::FOOD));
        assert_eq!(list.items[walls].size, Vec2::splat(4.0));
        assert_eq!(list.items[walls + 1].visual, Visual::Sprite(Sprite::CherryAlt));
        assert_eq!(
            list.items.last().map(|i| i.visual),
            Some(Visual::Sprite(Sprite::Agent(Heading::Right)))
        );
        assert_eq!(
            list.hud.labels(),
            [
                (Vec2::new(20.0, 30.0), "Score: 0".to_string()),
                (Vec2::new(60.0, 30.0), "Lives: 3".to_string()),
            ]
        );
    }

    #[test]
    fn test_respawning_pursuer_not_drawn() {
        let mut world = small_world();
        let before = draw_list(&world).items.len();
        world.pursuers[0].start_respawn(0);
        assert_eq!(draw_list(&world).items.len(), before - 1);
    }

    #[test]
    fn test_batch_has_six_vertices_per_item() {
        let world = small_world();
        let list = draw_list(&world);
        assert_eq!(shapes::batch(&list).len(), list.items.len() * 6);
    }

    #[test]
    fn test_text_frame() {
        let world = small_world();
        let frame = text_frame(&world);
        let lines: Vec<&str> = frame.lines().collect();
        assert_eq!(lines[0], "XXXXX");
        assert_eq!(lines[1], "X>O.X");
        assert_eq!(lines[2], "XrXXX");
        assert_eq!(lines[3], "Score: 0  Lives: 3");
    }
}
