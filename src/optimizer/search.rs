use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::{BarError, Result};
use crate::optimizer::relation::Relation;

/// Resource ceiling for one exact search.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum branch nodes to explore before giving up on certification.
    pub max_nodes: u64,

    /// Optional wall-clock budget for the whole search.
    pub time_budget: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: 5_000_000,
            time_budget: None,
        }
    }
}

/// Outcome of one search: an exactly-k shelf and how good it is.
#[derive(Debug, Clone)]
pub struct Selection {
    /// The chosen ingredients, in the search's frequency ordering.
    pub ingredients: Vec<String>,

    /// Number of cocktails fully mixable from the shelf.
    pub covered_count: usize,

    /// False when the search hit its ceiling before proving optimality.
    pub certified_optimal: bool,

    /// Branch nodes explored.
    pub nodes_explored: u64,
}

/// Best shelf found so far, monotonically improving.
///
/// Passed explicitly through the recursion rather than living in ambient
/// state, so a future sharding of the top-level branches across workers
/// only needs to put a lock around it.
struct Incumbent {
    covered: usize,
    shelf: Vec<usize>,
}

/// Relation reindexed for the search: ingredients become indices ordered
/// by descending cocktail frequency (ties by name), requirement sets
/// become index vectors.
struct Indexed {
    names: Vec<String>,
    recipes: Vec<Vec<usize>>,
}

fn index_relation(relation: &Relation) -> Indexed {
    let mut frequency: HashMap<&str, usize> = relation
        .universe()
        .iter()
        .map(|ing| (ing.as_str(), 0))
        .collect();

    for required in relation.requirements().values() {
        for ingredient in required {
            if let Some(count) = frequency.get_mut(ingredient.as_str()) {
                *count += 1;
            }
        }
    }

    let mut names: Vec<String> = relation.universe().iter().cloned().collect();
    names.sort_by(|a, b| {
        frequency[b.as_str()]
            .cmp(&frequency[a.as_str()])
            .then_with(|| a.cmp(b))
    });

    let position: HashMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    let recipes = relation
        .requirements()
        .values()
        .map(|required| required.iter().map(|ing| position[ing.as_str()]).collect())
        .collect();

    Indexed { names, recipes }
}

struct Search<'a> {
    recipes: &'a [Vec<usize>],
    ingredient_count: usize,
    budget: usize,
    limits: &'a SearchLimits,
    started: Instant,
    nodes: u64,
    exhausted: bool,
    shelf: Vec<usize>,
    on_shelf: Vec<bool>,
}

impl<'a> Search<'a> {
    fn new(indexed: &'a Indexed, budget: usize, limits: &'a SearchLimits) -> Self {
        Self {
            recipes: &indexed.recipes,
            ingredient_count: indexed.names.len(),
            budget,
            limits,
            started: Instant::now(),
            nodes: 0,
            exhausted: false,
            shelf: Vec::with_capacity(budget),
            on_shelf: vec![false; indexed.names.len()],
        }
    }

    fn hit_ceiling(&self) -> bool {
        if self.nodes > self.limits.max_nodes {
            return true;
        }
        // Checking the clock every node would dominate small searches.
        if self.nodes % 256 == 0 {
            if let Some(budget) = self.limits.time_budget {
                return self.started.elapsed() >= budget;
            }
        }
        false
    }

    /// Cocktails fully mixable from the committed shelf.
    fn count_covered(&self) -> usize {
        self.recipes
            .iter()
            .filter(|required| required.iter().all(|&i| self.on_shelf[i]))
            .count()
    }

    /// Admissible upper bound on coverage reachable below this node.
    ///
    /// A cocktail still has a chance iff every required ingredient not yet
    /// on the shelf is undecided (index >= depth) and the missing count
    /// fits in the remaining budget.
    fn relaxed_bound(&self, depth: usize) -> usize {
        let remaining = self.budget - self.shelf.len();
        self.recipes
            .iter()
            .filter(|required| {
                let mut missing = 0;
                for &i in required.iter() {
                    if self.on_shelf[i] {
                        continue;
                    }
                    if i < depth {
                        return false;
                    }
                    missing += 1;
                }
                missing <= remaining
            })
            .count()
    }

    /// Branch on including or excluding the ingredient at `depth`.
    fn descend(&mut self, depth: usize, best: &mut Incumbent) {
        self.nodes += 1;
        if self.hit_ceiling() {
            self.exhausted = true;
            return;
        }

        if self.shelf.len() == self.budget {
            let covered = self.count_covered();
            if covered > best.covered {
                best.covered = covered;
                best.shelf = self.shelf.clone();
            }
            return;
        }

        // Not enough undecided ingredients left to fill the shelf.
        if self.shelf.len() + (self.ingredient_count - depth) < self.budget {
            return;
        }

        if self.relaxed_bound(depth) <= best.covered {
            return;
        }

        self.shelf.push(depth);
        self.on_shelf[depth] = true;
        self.descend(depth + 1, best);
        self.shelf.pop();
        self.on_shelf[depth] = false;
        if self.exhausted {
            return;
        }

        self.descend(depth + 1, best);
    }
}

/// Exact search for the exactly-`budget` shelf covering the most cocktails.
///
/// Branch-and-bound over ingredients in descending-frequency order. The
/// incumbent is seeded with the greedy top-`budget` shelf, so even a search
/// cut short by `limits` returns a feasible best-found selection, flagged
/// `certified_optimal = false` instead of being passed off as the optimum.
pub fn find_best_shelf(
    relation: &Relation,
    budget: usize,
    limits: &SearchLimits,
) -> Result<Selection> {
    let universe_size = relation.ingredient_count();
    if budget > universe_size {
        return Err(BarError::InvalidBudget(budget, universe_size));
    }
    if universe_size == 0 && budget > 0 {
        return Err(BarError::EmptyUniverse);
    }

    let indexed = index_relation(relation);
    let mut search = Search::new(&indexed, budget, limits);

    // Greedy seed: the `budget` most-used ingredients.
    let seed: Vec<usize> = (0..budget).collect();
    for &i in &seed {
        search.on_shelf[i] = true;
    }
    let seed_covered = search.count_covered();
    for &i in &seed {
        search.on_shelf[i] = false;
    }
    let mut best = Incumbent {
        covered: seed_covered,
        shelf: seed,
    };

    search.descend(0, &mut best);

    Ok(Selection {
        ingredients: best
            .shelf
            .iter()
            .map(|&i| indexed.names[i].clone())
            .collect(),
        covered_count: best.covered,
        certified_optimal: !search.exhausted,
        nodes_explored: search.nodes,
    })
}
