
use crate::rbtree::{Color, Direction, Forest, NodeId};
use simplelog::{Config, LevelFilter, TestLogger};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Capture the trace of the repair steps. Quiet unless `RB_TEST_LOG` names a level
fn init_logger() {
    let level = std::env::var("RB_TEST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn);
    let _ = TestLogger::init(level, Config::default());
}

/// Compact description of a tree, for instance `1B(0R,2B(.,3R))`:
/// value and color of each node, followed by its children when it has any
fn render<T: Display>(forest: &Forest<T>, node: Option<NodeId>) -> String {
    let id = match node {
        None => return ".".to_string(),
        Some(id) => id,
    };
    let color = match forest.color(id) {
        Color::Black => 'B',
        Color::Red => 'R',
    };
    match (forest.left(id), forest.right(id)) {
        (None, None) => format!("{}{}", forest[id], color),
        (left, right) => format!(
            "{}{}({},{})",
            forest[id],
            color,
            render(forest, left),
            render(forest, right)
        ),
    }
}

/// Nodes of the tree in in-order sequence, without recursion
fn in_order<T>(forest: &Forest<T>, root: NodeId) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut stack = Vec::new();
    let mut current = Some(root);
    loop {
        while let Some(node) = current {
            stack.push(node);
            current = forest.left(node);
        }
        match stack.pop() {
            None => return nodes,
            Some(node) => {
                nodes.push(node);
                current = forest.right(node);
            }
        }
    }
}

/// A tree of distinct integers, where nodes are addressed by their value
struct Tree {
    forest: Forest<i32>,
    ids: BTreeMap<i32, NodeId>,
    root: NodeId,
}

impl Tree {
    fn new(root_value: i32) -> Tree {
        init_logger();
        let mut forest = Forest::new();
        let root = forest.create(root_value);
        let mut ids = BTreeMap::new();
        ids.insert(root_value, root);
        Tree { forest, ids, root }
    }

    fn id(&self, value: i32) -> NodeId {
        self.ids[&value]
    }

    fn insert(&mut self, parent: i32, dir: Direction, value: i32) {
        let parent = self.id(parent);
        let node = self.forest.create(value);
        self.ids.insert(value, node);
        self.forest.insert(parent, node, dir);
        self.root = self.forest.root(node);
    }

    fn remove(&mut self, value: i32) {
        let node = self.ids.remove(&value).unwrap();
        self.forest.remove(node);
        assert!(self.forest.node(node).is_free());
        assert_eq!(self.forest.destroy(node), value);
        if let Some(&other) = self.ids.values().next() {
            self.root = self.forest.root(other);
        }
    }

    fn render(&self) -> String {
        render(&self.forest, Some(self.root))
    }

    fn values(&self) -> Vec<i32> {
        in_order(&self.forest, self.root)
            .into_iter()
            .map(|id| self.forest[id])
            .collect()
    }

    fn check(&self) -> usize {
        match self.forest.check(self.root) {
            Ok(black_height) => black_height,
            Err(err) => panic!("{} in {}", err, self.render()),
        }
    }
}
