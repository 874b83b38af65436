// Index arena holding a forest of components.

use std::fmt;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub trait Component {
    fn name(&self) -> &str;
    /// Leaves answer `false`; attaching under them is a contract violation.
    fn accepts_children(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq)]
struct Slot<T> {
    value: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Every node has at most one parent and no node is its own ancestor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T: Component> Tree<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a detached node.
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            value,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.0).map(|slot| &slot.value)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.0).map(|slot| &mut slot.value)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.slots.get(id.0).and_then(|slot| slot.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.slots.get(id.0) {
            Some(slot) => &slot.children,
            None => &[],
        }
    }

    pub fn roots(&self) -> Vec<NodeId> {
        (0..self.slots.len())
            .map(NodeId)
            .filter(|id| self.slots[id.0].parent.is_none())
            .collect()
    }

    /// True when `ancestor` lies on the parent chain of `node` (a node is not its own ancestor).
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }

    fn slot(&self, id: NodeId) -> Result<&Slot<T>> {
        self.slots
            .get(id.0)
            .ok_or_else(|| PatternError::not_found("tree nodes", id.to_string()))
    }

    /// Appends `child` to `parent`'s children, moving it if it already had a parent.
    ///
    /// Fails without touching the tree when `parent` is a leaf or when `child` is
    /// `parent` itself or one of its ancestors.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_slot = self.slot(parent)?;
        self.slot(child)?;

        if !parent_slot.value.accepts_children() {
            return Err(PatternError::contract_violation(
                parent_slot.value.name(),
                "hold children",
            ));
        }
        if child == parent || self.is_ancestor(child, parent) {
            tracing::warn!(%parent, %child, "attach rejected: would create a cycle");
            return Err(PatternError::Cycle {
                parent: parent.0,
                child: child.0,
            });
        }

        if let Some(old_parent) = self.slots[child.0].parent.take() {
            self.slots[old_parent.0].children.retain(|&id| id != child);
        }
        self.slots[child.0].parent = Some(parent);
        self.slots[parent.0].children.push(child);
        tracing::debug!(%parent, %child, "node attached");
        Ok(())
    }

    /// Removes `child` from `parent`; the child stays in the arena as a root.
    pub fn detach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.slot(parent)?;
        if self.slot(child)?.parent != Some(parent) {
            return Err(PatternError::not_found(
                format!("children of {parent}"),
                child.to_string(),
            ));
        }
        self.slots[parent.0].children.retain(|&id| id != child);
        self.slots[child.0].parent = None;
        tracing::debug!(%parent, %child, "node detached");
        Ok(())
    }

    /// `root` first, then each child subtree in insertion order.
    pub fn preorder(&self, root: NodeId) -> Result<Vec<NodeId>> {
        self.slot(root)?;
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.slots[id.0].children.iter().rev().copied());
        }
        Ok(order)
    }
}
