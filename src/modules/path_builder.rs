use super::node::{Coordinate, NodeId, SearchNode};

/// Owns every node created by one search. Nodes point at their origin by
/// index, so chains are walked without shared references.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn new() -> NodeArena {
        NodeArena { nodes: Vec::new() }
    }

    pub(crate) fn insert(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id]
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Walk origin links back from `goal` and return the route from
    /// `origin` to `goal`, both inclusive.
    ///
    /// The root of the chain is not collected; `origin` stands in for it,
    /// which also covers a goal that is itself the root.
    pub(crate) fn build(&self, goal: NodeId, origin: Coordinate) -> Vec<Coordinate> {
        let mut output: Vec<Coordinate> = Vec::new();
        let mut node = self.get(goal);

        while let Some(previous) = node.get_origin() {
            output.push(node.get_position());
            node = self.get(previous);
        }
        output.push(origin);

        output.reverse();
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i32, column: i32) -> Coordinate {
        Coordinate::new(row, column)
    }

    #[test]
    fn it_builds_path() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::new(at(1, 1), 0, None));
        let second = arena.insert(SearchNode::new(at(2, 1), 1, Some(root)));
        let third = arena.insert(SearchNode::new(at(2, 2), 2, Some(second)));
        let goal = arena.insert(SearchNode::new(at(3, 2), 3, Some(third)));

        assert_eq!(
            vec![at(1, 1), at(2, 1), at(2, 2), at(3, 2)],
            arena.build(goal, at(1, 1))
        );
    }

    #[test]
    fn it_builds_single_cell_path_from_root() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::new(at(5, 5), 0, None));

        assert_eq!(vec![at(5, 5)], arena.build(root, at(5, 5)));
    }

    #[test]
    fn it_follows_rerouted_origins() {
        let mut arena = NodeArena::new();
        let root = arena.insert(SearchNode::new(at(0, 0), 0, None));
        let detour = arena.insert(SearchNode::new(at(0, 1), 1, Some(root)));
        let far = arena.insert(SearchNode::new(at(1, 1), 2, Some(detour)));
        let goal = arena.insert(SearchNode::new(at(1, 2), 3, Some(far)));

        arena.get_mut(goal).reroute(2, detour);

        assert_eq!(vec![at(0, 0), at(0, 1), at(1, 2)], arena.build(goal, at(0, 0)));
    }
}
