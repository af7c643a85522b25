use std::rc::Rc;

use crate::grid::Cell;

/// One step of a robot's path history.
///
/// Chains are singly linked with the newest cell at the head; `child` points at the
/// previous step. `path_cost` is the depth of the chain below this node, so a lone
/// start node costs 0.
#[derive(Debug, Clone)]
pub struct PathNode {
    pub position: Cell,
    pub child: Option<Rc<PathNode>>,
    pub path_cost: u32,
}

impl PathNode {
    /// A chain holding only the starting cell
    pub fn start(position: Cell) -> Rc<Self> {
        Rc::new(PathNode {
            position,
            child: None,
            path_cost: 0,
        })
    }

    /// Push `position` on top of `head`, sharing the existing chain
    pub fn extend(head: &Rc<Self>, position: Cell) -> Rc<Self> {
        Rc::new(PathNode {
            position,
            child: Some(Rc::clone(head)),
            path_cost: head.path_cost + 1,
        })
    }

    /// Positions from newest to oldest
    pub fn iter(&self) -> PathIter<'_> {
        PathIter { next: Some(self) }
    }

    pub fn len(&self) -> usize {
        self.path_cost as usize + 1
    }
}

// Unlink the chain one node at a time so long histories don't recurse on drop.
// Stops at the first node still shared with another chain.
impl Drop for PathNode {
    fn drop(&mut self) {
        let mut next = self.child.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut node) => node.child.take(),
                Err(_) => None,
            };
        }
    }
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

pub struct PathIter<'a> {
    next: Option<&'a PathNode>,
}

impl<'a> Iterator for PathIter<'a> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let node = self.next?;
        self.next = node.child.as_deref();
        Some(node.position)
    }
}
