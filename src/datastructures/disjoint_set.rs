use crate::graph::Vertex;

/// Union-find over the vertices $0,\ldots,n-1$ with path compression and union by rank.
///
/// Every vertex starts out in its own set. `find` and `union` run in amortised
/// $O(\alpha(n))$ time.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u32>,
    sets: usize
}

impl DisjointSet {
    pub fn new(n:usize) -> Self {
        DisjointSet {
            parent: (0..n as Vertex).collect(),
            rank: vec![0; n],
            sets: n
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn num_sets(&self) -> usize {
        self.sets
    }

    pub fn rank(&self, v:Vertex) -> u32 {
        self.rank[v as usize]
    }

    /// Returns the representative of `v`'s set. Every vertex on the path from `v`
    /// to the representative is afterwards a direct child of it.
    pub fn find(&mut self, v:Vertex) -> Vertex {
        let mut root = v;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut curr = v;
        while curr != root {
            let next = self.parent[curr as usize];
            self.parent[curr as usize] = root;
            curr = next;
        }

        root
    }

    pub fn same(&mut self, i:Vertex, j:Vertex) -> bool {
        self.find(i) == self.find(j)
    }

    /// Merges the sets containing `i` and `j`. Returns `false` if both already
    /// share a set, in which case nothing changes.
    ///
    /// The root of lower rank is attached to the other root. On equal ranks
    /// `j`'s root goes below `i`'s root, whose rank then grows by one.
    pub fn union(&mut self, i:Vertex, j:Vertex) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return false
        }

        let (ri, rj) = (root_i as usize, root_j as usize);
        if self.rank[ri] < self.rank[rj] {
            self.parent[ri] = root_j;
        } else {
            self.parent[rj] = root_i;
            if self.rank[ri] == self.rank[rj] {
                self.rank[ri] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    #[cfg(test)]
    fn parent(&self, v:Vertex) -> Vertex {
        self.parent[v as usize]
    }
}



//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn singletons() {
        let mut dsets = DisjointSet::new(5);
        assert_eq!(dsets.len(), 5);
        assert_eq!(dsets.num_sets(), 5);
        for v in 0..5 {
            assert_eq!(dsets.find(v), v);
            assert_eq!(dsets.rank(v), 0);
        }
        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn union_with_itself() {
        let mut dsets = DisjointSet::new(3);
        assert!(!dsets.union(1, 1));
        assert!(dsets.union(0, 1));
        assert!(!dsets.union(1, 1));
        assert!(!dsets.union(1, 0));
        assert_eq!(dsets.num_sets(), 2);
    }

    #[test]
    fn tie_break() {
        let mut dsets = DisjointSet::new(4);

        // Equal ranks: second root goes below the first one
        assert!(dsets.union(2, 3));
        assert_eq!(dsets.find(3), 2);
        assert_eq!(dsets.rank(2), 1);

        // Lower rank goes below higher rank, regardless of argument order
        assert!(dsets.union(0, 3));
        assert_eq!(dsets.find(0), 2);
        assert_eq!(dsets.rank(2), 1);
        assert_eq!(dsets.rank(0), 0);
    }

    #[test]
    fn find_is_idempotent() {
        let mut dsets = DisjointSet::new(8);
        for (i, j) in [(0,1), (2,3), (1,3), (4,5), (6,7), (5,7), (3,7)] {
            dsets.union(i, j);
        }
        for v in 0..8 {
            let root = dsets.find(v);
            assert_eq!(dsets.find(v), root);
        }
        assert_eq!(dsets.num_sets(), 1);
    }

    #[test]
    fn path_compression() {
        let n = 10_000;
        let mut dsets = DisjointSet::new(n);

        // Building a chain by hand is not possible through `union`, so we merge
        // pairwise which yields trees of logarithmic height.
        let mut step = 1;
        while step < n {
            for i in (0..n).step_by(2*step) {
                if i + step < n {
                    dsets.union(i as Vertex, (i + step) as Vertex);
                }
            }
            step *= 2;
        }
        assert_eq!(dsets.num_sets(), 1);

        let deepest = (n - 1) as Vertex;
        let root = dsets.find(deepest);
        assert_eq!(dsets.parent(deepest), root);
        for v in 0..n as Vertex {
            let r = dsets.find(v);
            assert_eq!(r, root);
            assert_eq!(dsets.parent(v), root);
        }
    }
}
