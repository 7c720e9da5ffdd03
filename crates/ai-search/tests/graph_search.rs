use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};

use ai_search::{
    a_star_search, breadth_first_search, depth_first_search, uniform_cost_search, GraphSearch,
    GraphSearchConfig, NullHeuristic, SearchError, SearchProblem, Successor,
};

type Node = char;
/// An edge label: `(from, to)`.
type Edge = (Node, Node);

/// Directed weighted graph that records how often each state is expanded.
struct Graph {
    start: Node,
    goals: Vec<Node>,
    edges: BTreeMap<Node, Vec<(Node, f64)>>,
    expansions: RefCell<HashMap<Node, usize>>,
}

impl Graph {
    fn new(start: Node, goals: &[Node], edges: &[(Node, Node, f64)]) -> Self {
        let mut adjacency: BTreeMap<Node, Vec<(Node, f64)>> = BTreeMap::new();
        for &(from, to, cost) in edges {
            adjacency.entry(from).or_default().push((to, cost));
        }
        Self {
            start,
            goals: goals.to_vec(),
            edges: adjacency,
            expansions: RefCell::new(HashMap::new()),
        }
    }

    fn edge_cost(&self, from: Node, to: Node) -> Option<f64> {
        self.edges
            .get(&from)?
            .iter()
            .find(|(next, _)| *next == to)
            .map(|(_, cost)| *cost)
    }

    fn max_expansions_of_any_state(&self) -> usize {
        self.expansions.borrow().values().copied().max().unwrap_or(0)
    }

    /// Reference shortest action count, computed independently.
    fn brute_force_hops(&self) -> Option<usize> {
        let mut dist: HashMap<Node, usize> = HashMap::new();
        let mut queue = VecDeque::from([self.start]);
        dist.insert(self.start, 0);
        while let Some(n) = queue.pop_front() {
            let hops = dist[&n];
            if self.goals.contains(&n) {
                return Some(hops);
            }
            for (next, _) in self.edges.get(&n).into_iter().flatten() {
                if !dist.contains_key(next) {
                    dist.insert(*next, hops + 1);
                    queue.push_back(*next);
                }
            }
        }
        None
    }
}

impl SearchProblem for Graph {
    type State = Node;
    type Action = Edge;

    fn starting_state(&self) -> Node {
        self.start
    }

    fn is_goal(&self, state: &Node) -> bool {
        self.goals.contains(state)
    }

    fn successor_states(&self, state: &Node) -> Vec<Successor<Node, Edge>> {
        *self.expansions.borrow_mut().entry(*state).or_insert(0) += 1;
        self.edges
            .get(state)
            .into_iter()
            .flatten()
            .map(|&(to, cost)| Successor::new(to, (*state, to), cost))
            .collect()
    }

    fn actions_cost(&self, actions: &[Edge]) -> f64 {
        let mut at = self.start;
        let mut total = 0.0;
        for &(from, to) in actions {
            match self.edge_cost(from, to) {
                Some(cost) if from == at => total += cost,
                _ => return 999_999.0,
            }
            at = to;
        }
        total
    }
}

fn replay_ends_at_goal(graph: &Graph, actions: &[Edge]) -> bool {
    let mut at = graph.start;
    for &(from, to) in actions {
        if from != at || graph.edge_cost(from, to).is_none() {
            return false;
        }
        at = to;
    }
    graph.goals.contains(&at)
}

/// Unit-cost graph with a cycle and two routes of different length to `G`.
fn unit_graph() -> Graph {
    Graph::new(
        'S',
        &['G'],
        &[
            ('S', 'A', 1.0),
            ('S', 'B', 1.0),
            ('A', 'C', 1.0),
            ('C', 'D', 1.0),
            ('D', 'G', 1.0),
            ('B', 'E', 1.0),
            ('E', 'G', 1.0),
            ('E', 'S', 1.0),
            ('C', 'A', 1.0),
        ],
    )
}

/// Weighted graph whose cheapest route is S-A-C-G (cost 3) vs S-B-G (cost 6).
fn weighted_graph() -> Graph {
    Graph::new(
        'S',
        &['G'],
        &[
            ('S', 'A', 1.0),
            ('S', 'B', 5.0),
            ('A', 'C', 1.0),
            ('C', 'G', 1.0),
            ('B', 'G', 1.0),
        ],
    )
}

#[test]
fn breadth_first_returns_shortest_path() {
    let graph = unit_graph();
    let actions = breadth_first_search(&graph).expect("path");

    assert!(replay_ends_at_goal(&graph, &actions));
    assert_eq!(Some(actions.len()), graph.brute_force_hops());
    assert_eq!(actions, vec![('S', 'B'), ('B', 'E'), ('E', 'G')]);
}

#[test]
fn depth_first_expands_most_recent_discovery_first() {
    let graph = unit_graph();
    let actions = depth_first_search(&graph).expect("path");

    assert!(replay_ends_at_goal(&graph, &actions));
    // `B` is pushed after `A`, so it is popped first.
    assert_eq!(actions.first(), Some(&('S', 'B')));
}

#[test]
fn uniform_cost_returns_minimum_cost_path() {
    let graph = weighted_graph();
    let solution = GraphSearch::new().uniform_cost(&graph).expect("path");

    assert_eq!(solution.actions, vec![('S', 'A'), ('A', 'C'), ('C', 'G')]);
    assert_eq!(solution.cost, 3.0);
    assert_eq!(graph.actions_cost(&solution.actions), 3.0);
}

#[test]
fn uniform_cost_keeps_first_discovered_route_to_a_state() {
    // `G` is discovered through the expensive edge A-G before the cheaper S-B-G
    // route is expanded; states are never re-opened once pushed.
    let graph = Graph::new(
        'S',
        &['G'],
        &[
            ('S', 'A', 1.0),
            ('S', 'B', 4.0),
            ('A', 'G', 10.0),
            ('B', 'G', 2.0),
        ],
    );
    let solution = GraphSearch::new().uniform_cost(&graph).expect("path");

    assert_eq!(solution.actions, vec![('S', 'A'), ('A', 'G')]);
    assert_eq!(solution.cost, 11.0);
}

#[test]
fn a_star_with_null_heuristic_matches_uniform_cost() {
    let graph = weighted_graph();
    let ucs = GraphSearch::new().uniform_cost(&graph).expect("ucs");
    let astar = GraphSearch::new()
        .a_star(&graph, &NullHeuristic)
        .expect("astar");

    assert_eq!(ucs.actions, astar.actions);
    assert_eq!(ucs.expanded, astar.expanded);
    assert_eq!(ucs.generated, astar.generated);
}

#[test]
fn a_star_with_admissible_heuristic_matches_uniform_cost_cost() {
    let graph = weighted_graph();
    // Exact remaining distances are an admissible estimate.
    let remaining = |state: &Node, _: &Graph| match *state {
        'S' => 3.0,
        'A' => 2.0,
        'B' | 'C' => 1.0,
        _ => 0.0,
    };

    let astar = GraphSearch::new().a_star(&graph, &remaining).expect("astar");
    let ucs = GraphSearch::new().uniform_cost(&graph).expect("ucs");

    assert_eq!(astar.cost, ucs.cost);
    assert!(astar.expanded <= ucs.expanded);
}

#[test]
fn a_star_with_inadmissible_heuristic_degrades_silently() {
    let graph = Graph::new(
        'S',
        &['G'],
        &[
            ('S', 'A', 1.0),
            ('S', 'B', 1.0),
            ('A', 'G', 1.0),
            ('B', 'G', 5.0),
        ],
    );
    let overestimate = |state: &Node, _: &Graph| if *state == 'A' { 100.0 } else { 0.0 };

    let actions = a_star_search(&graph, &overestimate).expect("still finds a path");
    assert!(replay_ends_at_goal(&graph, &actions));
    assert_eq!(graph.actions_cost(&actions), 6.0);

    let optimal = uniform_cost_search(&graph).expect("ucs");
    assert_eq!(graph.actions_cost(&optimal), 2.0);
}

#[test]
fn no_state_is_expanded_twice() {
    type Search = fn(&GraphSearch, &Graph) -> ai_search::Result<ai_search::Solution<Edge>>;
    let searches: [(&str, Search); 3] = [
        ("dfs", |s, g| s.depth_first(g)),
        ("bfs", |s, g| s.breadth_first(g)),
        ("ucs", |s, g| s.uniform_cost(g)),
    ];

    for (name, search) in searches {
        // No goal reachable: the whole graph is explored.
        let graph = Graph::new(
            'S',
            &['Z'],
            &[
                ('S', 'A', 1.0),
                ('S', 'B', 2.0),
                ('A', 'B', 1.0),
                ('B', 'A', 1.0),
                ('A', 'S', 1.0),
                ('B', 'C', 3.0),
                ('C', 'S', 1.0),
            ],
        );
        let err = search(&GraphSearch::new(), &graph).unwrap_err();
        assert_eq!(err, SearchError::NoSolution { expanded: 4 }, "{name}");
        assert_eq!(graph.max_expansions_of_any_state(), 1, "{name}");
    }
}

#[test]
fn disconnected_graph_has_no_solution_for_every_algorithm() {
    let graph = Graph::new('S', &['G'], &[]);

    assert!(matches!(
        depth_first_search(&graph),
        Err(SearchError::NoSolution { .. })
    ));
    assert!(matches!(
        breadth_first_search(&graph),
        Err(SearchError::NoSolution { .. })
    ));
    assert!(matches!(
        uniform_cost_search(&graph),
        Err(SearchError::NoSolution { .. })
    ));
    assert!(matches!(
        a_star_search(&graph, &NullHeuristic),
        Err(SearchError::NoSolution { .. })
    ));
}

#[test]
fn start_already_at_goal_yields_empty_path() {
    let graph = Graph::new('G', &['G'], &[('G', 'A', 1.0)]);

    let solution = GraphSearch::new().breadth_first(&graph).expect("trivial");
    assert!(solution.actions.is_empty());
    assert_eq!(solution.expanded, 0);
    assert_eq!(solution.cost, 0.0);
}

#[test]
fn expansion_limit_is_reported_explicitly() {
    let graph = unit_graph();
    let search = GraphSearch::new().with_config(GraphSearchConfig::default().with_max_expansions(2));

    let err = search.breadth_first(&graph).unwrap_err();
    assert_eq!(err, SearchError::ExpansionLimit { limit: 2 });
}
