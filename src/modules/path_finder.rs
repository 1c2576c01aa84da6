use super::error::{Error, Result};
use super::node::{Coordinate, NodeId, SearchNode};
use super::path_builder::NodeArena;
use super::path_map::PathMap;
use keyed_priority_queue::KeyedPriorityQueue;
use log::{debug, trace};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Neighbor offsets in relaxation order: south, east, north, west.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Running cost, then insertion sequence. Equal costs pop first-in first-out.
type Priority = Reverse<(u32, u64)>;

/// A strategy for finding a route between a map's first origin and first
/// destination.
pub trait PathFinder {
    /// Route from origin to destination, both inclusive. Empty when the
    /// destination cannot be reached.
    fn find_path(&mut self) -> Vec<Coordinate>;

    /// Distinct coordinates newly opened by every search this finder ran.
    fn coordinates_explored(&self) -> usize;
}

/// Uniform-cost search where every move costs one step.
///
/// The open set is a keyed min-heap over arena nodes with a coordinate index
/// beside it, so a cheaper route to an open coordinate re-prioritises the
/// existing entry instead of scanning for it. Closed coordinates are never
/// reopened, which is only sound while every step costs the same.
pub struct DijkstraPathFinder<'a, M: PathMap + ?Sized> {
    map: &'a M,
    origin: Coordinate,
    destination: Coordinate,
    arena: NodeArena,
    // set to min-heap
    heap: KeyedPriorityQueue<NodeId, Priority>,
    open: HashMap<Coordinate, NodeId>,
    closed: HashSet<Coordinate>,
    expanded: Vec<NodeId>,
    sequence: u64,
    coordinates_explored: usize,
}

impl<'a, M: PathMap + ?Sized> DijkstraPathFinder<'a, M> {
    pub fn new(map: &'a M) -> Result<DijkstraPathFinder<'a, M>> {
        let origin = *map
            .origin_cells()
            .first()
            .ok_or(Error::InvalidMap("no origin cells"))?;
        let destination = *map
            .dest_cells()
            .first()
            .ok_or(Error::InvalidMap("no destination cells"))?;

        Ok(DijkstraPathFinder {
            map,
            origin,
            destination,
            arena: NodeArena::new(),
            heap: KeyedPriorityQueue::<NodeId, Priority>::new(),
            open: HashMap::new(),
            closed: HashSet::new(),
            expanded: Vec::new(),
            sequence: 0,
            coordinates_explored: 0,
        })
    }

    /// Nodes closed by the last search, in the order they were closed, with
    /// their final cost.
    pub fn expanded(&self) -> impl Iterator<Item = (Coordinate, u32)> + '_ {
        let arena = &self.arena;
        self.expanded.iter().map(move |&id| {
            let node = arena.get(id);
            (node.get_position(), node.get_cost())
        })
    }

    fn search(&mut self) -> Option<NodeId> {
        let mut current = self.arena.insert(SearchNode::new(self.origin, 0, None));
        let target = SearchNode::new(self.destination, 0, None);

        while !self.arena.get(current).same_coordinate(&target) {
            let position = self.arena.get(current).get_position();

            for direction in DIRECTIONS {
                if let Some(neighbor) = position.offset(direction) {
                    self.relax(neighbor, current);
                }
            }

            // close current node and move to the cheapest open one
            let (next, _) = self.heap.pop()?;
            self.close(current);
            self.open.remove(&self.arena.get(next).get_position());
            current = next;
        }

        Some(current)
    }

    fn relax(&mut self, candidate: Coordinate, current: NodeId) {
        if !self
            .map
            .is_passable(candidate.get_row(), candidate.get_column())
        {
            return;
        }
        if self.closed.contains(&candidate) {
            return;
        }

        let cost = self.arena.get(current).get_cost() + 1;

        match self.open.get(&candidate).copied() {
            None => {
                let id = self
                    .arena
                    .insert(SearchNode::new(candidate, cost, Some(current)));
                let priority = self.next_priority(cost);
                self.heap.push(id, priority);
                self.open.insert(candidate, id);
                self.coordinates_explored += 1;
            }
            Some(existing) if self.arena.get(existing).get_cost() > cost => {
                self.arena.get_mut(existing).reroute(cost, current);
                // pushing a present key replaces its priority
                let priority = self.next_priority(cost);
                self.heap.push(existing, priority);
            }
            Some(_) => {}
        }
    }

    fn close(&mut self, id: NodeId) {
        let node = self.arena.get(id);
        trace!(
            "closing {:?} at cost {}",
            node.get_position(),
            node.get_cost()
        );
        self.closed.insert(node.get_position());
        self.expanded.push(id);
    }

    fn next_priority(&mut self, cost: u32) -> Priority {
        self.sequence += 1;
        Reverse((cost, self.sequence))
    }

    fn cleanup(&mut self) {
        self.arena.clear();
        self.heap = KeyedPriorityQueue::<NodeId, Priority>::new();
        self.open.clear();
        self.closed.clear();
        self.expanded.clear();
        self.sequence = 0;
    }
}

impl<M: PathMap + ?Sized> PathFinder for DijkstraPathFinder<'_, M> {
    fn find_path(&mut self) -> Vec<Coordinate> {
        self.cleanup();
        let explored_before = self.coordinates_explored;

        let path = match self.search() {
            Some(goal) => self.arena.build(goal, self.origin),
            None => Vec::new(),
        };

        debug!(
            "search {:?} -> {:?}: {} ({} cells explored, {} closed)",
            self.origin,
            self.destination,
            if path.is_empty() {
                "unreachable".to_string()
            } else {
                format!("{} steps", path.len() - 1)
            },
            self.coordinates_explored - explored_before,
            self.expanded.len()
        );

        path
    }

    fn coordinates_explored(&self) -> usize {
        self.coordinates_explored
    }
}
