use super::types::{ListEntry, ListItem};

/// A list node stored by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub entry: ListEntry,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// Flat storage for a list forest.
///
/// Nodes refer to each other by index, so the builder's stack holds plain
/// indices instead of references into the tree it is growing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArena {
    nodes: Vec<ListNode>,
    roots: Vec<usize>,
}

impl ListArena {
    /// Builds the forest in one pass over the lines.
    ///
    /// The stack starts empty, standing in for a virtual root at level -1.
    /// For each item, entries at the same or a deeper level are popped; the
    /// item becomes a child of whatever remains on top (or a root) and is
    /// pushed. Skipped levels therefore nest under the nearest shallower item.
    /// Unparsable lines are skipped.
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut arena = Self::default();
        let mut stack: Vec<usize> = Vec::new();

        for line in lines {
            let line = line.as_ref();
            let Some(entry) = ListEntry::parse(line) else {
                log::trace!("skipping list line without item content: {line:?}");
                continue;
            };

            while let Some(&top) = stack.last() {
                if arena.nodes[top].entry.level >= entry.level {
                    stack.pop();
                } else {
                    break;
                }
            }

            let idx = arena.nodes.len();
            let parent = stack.last().copied();
            match parent {
                Some(p) => arena.nodes[p].children.push(idx),
                None => arena.roots.push(idx),
            }
            arena.nodes.push(ListNode {
                entry,
                parent,
                children: vec![],
            });
            stack.push(idx);
        }

        arena
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, idx: usize) -> Option<&ListNode> {
        self.nodes.get(idx)
    }

    /// Converts the arena into owned trees, preserving source order.
    pub fn to_forest(&self) -> Vec<ListItem> {
        self.roots.iter().map(|&idx| self.materialize(idx)).collect()
    }

    fn materialize(&self, idx: usize) -> ListItem {
        let node = &self.nodes[idx];
        ListItem {
            level: node.entry.level,
            is_ordered: node.entry.is_ordered,
            content: node.entry.content.clone(),
            children: node
                .children
                .iter()
                .map(|&child| self.materialize(child))
                .collect(),
        }
    }
}
