// Graphics editor scene: dots and circles grouped under compound graphics.

use crate::composite::tree::{Component, NodeId, Tree};
use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Graphic {
    Dot { x: i32, y: i32 },
    Circle { x: i32, y: i32, radius: u32 },
    Compound { name: String },
}

impl Graphic {
    /// `None` when a coordinate would leave the `i32` range.
    fn shifted(&self, dx: i32, dy: i32) -> Option<Graphic> {
        let moved = match self {
            Graphic::Dot { x, y } => Graphic::Dot {
                x: x.checked_add(dx)?,
                y: y.checked_add(dy)?,
            },
            Graphic::Circle { x, y, radius } => Graphic::Circle {
                x: x.checked_add(dx)?,
                y: y.checked_add(dy)?,
                radius: *radius,
            },
            Graphic::Compound { .. } => self.clone(),
        };
        Some(moved)
    }

    fn draw_line(&self, child_count: usize) -> String {
        match self {
            Graphic::Dot { x, y } => format!("dot at ({x}, {y})"),
            Graphic::Circle { x, y, radius } => {
                format!("circle at ({x}, {y}) radius {radius}")
            }
            Graphic::Compound { name } => format!("compound '{name}' with {child_count} children"),
        }
    }
}

impl Component for Graphic {
    fn name(&self) -> &str {
        match self {
            Graphic::Dot { .. } => "dot",
            Graphic::Circle { .. } => "circle",
            Graphic::Compound { name } => name,
        }
    }

    fn accepts_children(&self) -> bool {
        matches!(self, Graphic::Compound { .. })
    }
}

pub type Scene = Tree<Graphic>;

impl Tree<Graphic> {
    pub fn add_dot(&mut self, x: i32, y: i32) -> NodeId {
        self.insert(Graphic::Dot { x, y })
    }

    pub fn add_circle(&mut self, x: i32, y: i32, radius: u32) -> NodeId {
        self.insert(Graphic::Circle { x, y, radius })
    }

    pub fn add_compound(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(Graphic::Compound { name: name.into() })
    }

    /// Moves the graphic and everything under it; returns how many nodes were visited.
    ///
    /// Every new position is computed before any is written, so a move that would
    /// overflow a coordinate fails and leaves the scene as it was.
    pub fn move_by(&mut self, id: NodeId, dx: i32, dy: i32) -> Result<usize> {
        let order = self.preorder(id)?;
        let mut moved = Vec::with_capacity(order.len());
        for &node in &order {
            let graphic = self
                .get(node)
                .ok_or_else(|| PatternError::not_found("tree nodes", node.to_string()))?;
            let shifted = graphic.shifted(dx, dy).ok_or_else(|| {
                PatternError::contract_violation(
                    graphic.name(),
                    format!("move by ({dx}, {dy}) within i32 coordinates"),
                )
            })?;
            moved.push((node, shifted));
        }

        for (node, shifted) in moved {
            if let Some(graphic) = self.get_mut(node) {
                *graphic = shifted;
            }
        }
        Ok(order.len())
    }

    /// One line per node, parent before children, children in insertion order.
    pub fn draw(&self, id: NodeId) -> Result<Vec<String>> {
        self.preorder(id)?
            .into_iter()
            .map(|node| {
                let graphic = self
                    .get(node)
                    .ok_or_else(|| PatternError::not_found("tree nodes", node.to_string()))?;
                let indent = "  ".repeat(self.depth(node) - self.depth(id));
                Ok(format!("{indent}{}", graphic.draw_line(self.children(node).len())))
            })
            .collect()
    }
}

/// The editor's demo scene: a dot and a circle grouped together.
pub fn sample_scene() -> Result<(Scene, NodeId)> {
    let mut scene = Scene::new();
    let all = scene.add_compound("all");
    let dot = scene.add_dot(1, 2);
    let circle = scene.add_circle(5, 3, 10);
    scene.attach(all, dot)?;
    scene.attach(all, circle)?;
    Ok((scene, all))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_then_draw() {
        let (mut scene, all) = sample_scene().unwrap();
        assert_eq!(scene.move_by(all, 1, 2).unwrap(), 3);
        assert_eq!(
            scene.draw(all).unwrap(),
            vec![
                "compound 'all' with 2 children",
                "  dot at (2, 4)",
                "  circle at (6, 5) radius 10",
            ]
        );
    }

    #[test]
    fn test_move_leaf_only() {
        let (mut scene, all) = sample_scene().unwrap();
        let dot = scene.children(all)[0];
        assert_eq!(scene.move_by(dot, -1, -2).unwrap(), 1);
        assert_eq!(scene.get(dot), Some(&Graphic::Dot { x: 0, y: 0 }));
        assert_eq!(
            scene.get(scene.children(all)[1]),
            Some(&Graphic::Circle { x: 5, y: 3, radius: 10 })
        );
    }

    #[test]
    fn test_overflowing_move_changes_nothing() {
        let (mut scene, all) = sample_scene().unwrap();
        let edge = scene.add_dot(i32::MAX, 0);
        scene.attach(all, edge).unwrap();
        let before = scene.clone();

        let err = scene.move_by(all, 1, 0).unwrap_err();
        assert_eq!(
            err,
            PatternError::contract_violation("dot", "move by (1, 0) within i32 coordinates")
        );
        assert_eq!(scene, before);

        assert!(scene.move_by(all, i32::MAX, 0).is_err());
        assert_eq!(scene, before);

        assert_eq!(scene.move_by(all, -1, 0).unwrap(), 4);
        assert_eq!(scene.get(edge), Some(&Graphic::Dot { x: i32::MAX - 1, y: 0 }));
    }

    #[test]
    fn test_nested_compounds() {
        let (mut scene, all) = sample_scene().unwrap();
        let group = scene.add_compound("group");
        let inner = scene.add_dot(0, 0);
        scene.attach(group, inner).unwrap();
        scene.attach(all, group).unwrap();

        let lines = scene.draw(all).unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "  compound 'group' with 1 children");
        assert_eq!(lines[4], "    dot at (0, 0)");

        let err = scene.attach(group, all).unwrap_err();
        assert!(matches!(err, PatternError::Cycle { .. }));
    }

    #[test]
    fn test_dot_rejects_children() {
        let (mut scene, all) = sample_scene().unwrap();
        let dot = scene.children(all)[0];
        let stray = scene.add_dot(9, 9);
        assert!(matches!(
            scene.attach(dot, stray).unwrap_err(),
            PatternError::ContractViolation { .. }
        ));
    }
}
