//! Integer-keyed disjoint-set (union-find) with path compression.

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    pub fn new() -> Self {
        Self { parent: Vec::new() }
    }

    /// Register a new element in its own singleton set and return its key.
    pub fn push(&mut self) -> usize {
        let key = self.parent.len();
        self.parent.push(key);
        key
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `i`, compressing the path on the way up.
    pub fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]);
        }
        self.parent[i]
    }

    /// Merge the sets containing `i` and `j`. Symmetric; a no-op when they
    /// are already in the same set.
    pub fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i != root_j {
            self.parent[root_j] = root_i;
        }
    }

    pub fn same_set(&mut self, i: usize, j: usize) -> bool {
        self.find(i) == self.find(j)
    }
}
