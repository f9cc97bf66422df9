use std::cmp::max;
use std::fmt::Write;

const ALLOWED_IMBALANCE: i32 = 1;

struct Node<T> {
    value: T,
    height: i32,
    left: Option<usize>,
    right: Option<usize>,
}

struct NodePool<T> {
    nodes: Vec<Node<T>>,
    free_list: Vec<usize>,
}

impl<T> NodePool<T> {
    fn new() -> Self {
        NodePool {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }

    fn alloc(&mut self, value: T) -> usize {
        let node = Node {
            value,
            height: 0,
            left: None,
            right: None,
        };
        if let Some(idx) = self.free_list.pop() {
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    fn free(&mut self, idx: usize) {
        self.free_list.push(idx);
    }

    fn len(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }
}

/// An ordered set backed by an AVL tree.
///
/// Nodes live in an index-addressed arena with free-list reuse, so removing
/// and reinserting elements does not grow the backing storage. An
/// inconsistent `Ord` on `T` can scramble the set's contents but never
/// causes memory unsafety.
pub struct AvlTree<T: Ord + Clone> {
    pool: NodePool<T>,
    root: Option<usize>,
}

impl<T: Ord + Clone> AvlTree<T> {
    pub fn new() -> Self {
        AvlTree {
            pool: NodePool::new(),
            root: None,
        }
    }

    /// Number of elements in the set.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: 0 for a single node, -1 for an empty tree.
    pub fn height(&self) -> i32 {
        self.height_of(self.root)
    }

    fn height_of(&self, idx: Option<usize>) -> i32 {
        idx.map_or(-1, |i| self.pool.nodes[i].height)
    }

    fn update_height(&mut self, idx: usize) {
        let lh = self.height_of(self.pool.nodes[idx].left);
        let rh = self.height_of(self.pool.nodes[idx].right);
        self.pool.nodes[idx].height = max(lh, rh) + 1;
    }

    fn rotate_right(&mut self, idx: usize) -> usize {
        let l = self.pool.nodes[idx].left.expect("rotate_right on None");
        let lr = self.pool.nodes[l].right;
        self.pool.nodes[l].right = Some(idx);
        self.pool.nodes[idx].left = lr;
        self.update_height(idx);
        self.update_height(l);
        l
    }

    fn rotate_left(&mut self, idx: usize) -> usize {
        let r = self.pool.nodes[idx].right.expect("rotate_left on None");
        let rl = self.pool.nodes[r].left;
        self.pool.nodes[r].left = Some(idx);
        self.pool.nodes[idx].right = rl;
        self.update_height(idx);
        self.update_height(r);
        r
    }

    fn balance(&mut self, idx: usize) -> usize {
        let left = self.pool.nodes[idx].left;
        let right = self.pool.nodes[idx].right;
        if self.height_of(left) - self.height_of(right) > ALLOWED_IMBALANCE {
            let l = left.expect("left-heavy node without a left child");
            // equal grandchild heights must take the single rotation
            if self.height_of(self.pool.nodes[l].left) >= self.height_of(self.pool.nodes[l].right)
            {
                return self.rotate_right(idx);
            }
            self.pool.nodes[idx].left = Some(self.rotate_left(l));
            return self.rotate_right(idx);
        }
        if self.height_of(right) - self.height_of(left) > ALLOWED_IMBALANCE {
            let r = right.expect("right-heavy node without a right child");
            if self.height_of(self.pool.nodes[r].right) >= self.height_of(self.pool.nodes[r].left)
            {
                return self.rotate_left(idx);
            }
            self.pool.nodes[idx].right = Some(self.rotate_right(r));
            return self.rotate_left(idx);
        }
        self.update_height(idx);
        idx
    }

    fn insert_node(&mut self, idx: Option<usize>, value: T) -> usize {
        if let Some(i) = idx {
            if value < self.pool.nodes[i].value {
                let l = self.insert_node(self.pool.nodes[i].left, value);
                self.pool.nodes[i].left = Some(l);
            } else if value > self.pool.nodes[i].value {
                let r = self.insert_node(self.pool.nodes[i].right, value);
                self.pool.nodes[i].right = Some(r);
            }
            // equal: already present, the tree is left untouched
            self.balance(i)
        } else {
            self.pool.alloc(value)
        }
    }

    /// Inserts `value` into the set. Values already present are silently
    /// ignored.
    pub fn insert(&mut self, value: T) {
        let r = self.insert_node(self.root, value);
        self.root = Some(r);
    }

    fn min_node(&self, mut idx: usize) -> usize {
        while let Some(l) = self.pool.nodes[idx].left {
            idx = l;
        }
        idx
    }

    /// The smallest element, or `None` if the set is empty.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|r| &self.pool.nodes[self.min_node(r)].value)
    }

    fn remove_node(&mut self, idx: Option<usize>, value: &T) -> Option<usize> {
        if let Some(i) = idx {
            match value.cmp(&self.pool.nodes[i].value) {
                std::cmp::Ordering::Less => {
                    self.pool.nodes[i].left = self.remove_node(self.pool.nodes[i].left, value)
                }
                std::cmp::Ordering::Greater => {
                    self.pool.nodes[i].right = self.remove_node(self.pool.nodes[i].right, value)
                }
                std::cmp::Ordering::Equal => {
                    match (self.pool.nodes[i].left, self.pool.nodes[i].right) {
                        (Some(_), Some(r)) => {
                            // two children: take the payload of the in-order
                            // successor, then remove the successor from the
                            // right subtree
                            let succ = self.min_node(r);
                            let succ_value = self.pool.nodes[succ].value.clone();
                            self.pool.nodes[i].right = self.remove_node(Some(r), &succ_value);
                            self.pool.nodes[i].value = succ_value;
                        }
                        (child, None) | (None, child) => {
                            // at most one child: the child, already balanced,
                            // takes this node's place
                            self.pool.free(i);
                            return child;
                        }
                    }
                }
            }
            Some(self.balance(i))
        } else {
            None
        }
    }

    /// Removes `value` from the set. Removing a value that is not present is
    /// a no-op.
    pub fn remove(&mut self, value: &T) {
        self.root = self.remove_node(self.root, value);
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cur = self.root;
        while let Some(i) = cur {
            if value < &self.pool.nodes[i].value {
                cur = self.pool.nodes[i].left;
            } else if value > &self.pool.nodes[i].value {
                cur = self.pool.nodes[i].right;
            } else {
                return true;
            }
        }
        false
    }
}

impl<T: Ord + Clone + std::fmt::Display> AvlTree<T> {
    /// Indented in-order rendering: one value per line, two spaces per level
    /// of depth.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_node(self.root, 0, &mut out);
        out
    }

    fn render_node(&self, idx: Option<usize>, level: usize, out: &mut String) {
        if let Some(i) = idx {
            self.render_node(self.pool.nodes[i].left, level + 1, out);
            writeln!(out, "{}{}", "  ".repeat(level), self.pool.nodes[i].value)
                .expect("writing to String cannot fail");
            self.render_node(self.pool.nodes[i].right, level + 1, out);
        }
    }
}
