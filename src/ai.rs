//! Targeting engine: placement heatmap, hit clusters, depth-1 shot scoring.
//!
//! Everything here is a pure function of a [`KnowledgeGrid`] and a list of
//! ship lengths. Nothing is cached between calls.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{ADJACENCY_BONUS, HUNT_CANDIDATES, PARITY_FACTOR, STANDARD_SHIPS};
use crate::knowledge::{orthogonal_neighbors, Knowledge, KnowledgeGrid};
use crate::ship::{Orientation, Placement};

/// A maximal 4-connected group of hit cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitCluster {
    cells: BTreeSet<(usize, usize)>,
    orientation: Option<Orientation>,
}

impl HitCluster {
    fn new(cells: BTreeSet<(usize, usize)>) -> Self {
        let orientation = if cells.len() < 2 {
            None
        } else {
            let mut iter = cells.iter();
            let &(r0, c0) = iter.next().unwrap_or(&(0, 0));
            let (mut same_row, mut same_col) = (true, true);
            for &(r, c) in iter {
                same_row &= r == r0;
                same_col &= c == c0;
            }
            if same_row {
                Some(Orientation::Horizontal)
            } else if same_col {
                Some(Orientation::Vertical)
            } else {
                None
            }
        };
        HitCluster { cells, orientation }
    }

    /// Member cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// `None` for singletons and bent shapes.
    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }
}

/// Connected components of hit cells, discovered in row-major order.
pub fn hit_clusters(knowledge: &KnowledgeGrid) -> Vec<HitCluster> {
    let size = knowledge.size();
    let mut visited = alloc::vec![false; size * size];
    let mut clusters = Vec::new();

    for ((r, c), k) in knowledge.iter() {
        if k != Knowledge::Hit || visited[r * size + c] {
            continue;
        }
        visited[r * size + c] = true;
        let mut stack = alloc::vec![(r, c)];
        let mut comp = BTreeSet::new();
        while let Some((rr, cc)) = stack.pop() {
            comp.insert((rr, cc));
            for (nr, nc) in orthogonal_neighbors(size, rr, cc) {
                if !visited[nr * size + nc] && knowledge.is_hit(nr, nc) {
                    visited[nr * size + nc] = true;
                    stack.push((nr, nc));
                }
            }
        }
        clusters.push(HitCluster::new(comp));
    }
    clusters
}

/// Whether a placement could be the ship behind the known hit clusters.
///
/// The placement may touch at most one cluster. If it touches one, the
/// cluster must fit the ship, lie entirely inside the placement, and share
/// its orientation when that is known.
pub fn placement_consistent(placement: &Placement, clusters: &[HitCluster]) -> bool {
    let mut intersected = 0;
    for cluster in clusters {
        if !cluster.cells().any(|(r, c)| placement.contains(r, c)) {
            continue;
        }
        intersected += 1;
        if intersected > 1 || cluster.len() > placement.length {
            return false;
        }
        if !cluster.cells().all(|(r, c)| placement.contains(r, c)) {
            return false;
        }
        if let Some(orient) = cluster.orientation() {
            if orient != placement.orientation {
                return false;
            }
        }
    }
    true
}

/// Per-cell count of consistent ship placements, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Heatmap {
    size: usize,
    values: Vec<u32>,
}

impl Heatmap {
    pub fn new(size: usize) -> Self {
        Heatmap {
            size,
            values: alloc::vec![0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Heat at (row, col); zero when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        if row < self.size && col < self.size {
            self.values[row * self.size + col]
        } else {
            0
        }
    }

    fn add(&mut self, row: usize, col: usize, amount: u32) {
        self.values[row * self.size + col] += amount;
    }

    /// Sum of every cell's heat.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }

    /// Every cell with its heat, row-major.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), u32)> + '_ {
        let size = self.size;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| ((i / size, i % size), v))
    }
}

impl fmt::Debug for Heatmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heatmap<{}>:", self.size)?;
        for row in self.values.chunks(self.size.max(1)) {
            for v in row {
                write!(f, "{:4}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Count, for every cell, how many placements of the remaining ships are
/// still possible given the known hits, misses and hit clusters.
///
/// Unknown cells get [`ADJACENCY_BONUS`] once for every hit they touch. While hunting (no
/// hits at all, smallest ship at least 2 long) odd-parity cells are scaled
/// by [`PARITY_FACTOR`].
pub fn heatmap(knowledge: &KnowledgeGrid, remaining: &[usize]) -> Heatmap {
    let size = knowledge.size();
    let mut heat = Heatmap::new(size);
    let clusters = hit_clusters(knowledge);

    for &length in remaining.iter().filter(|&&len| len > 0 && len <= size) {
        for placement in Placement::all(size, length) {
            if placement.cells().any(|(r, c)| knowledge.is_miss(r, c)) {
                continue;
            }
            if !placement_consistent(&placement, &clusters) {
                continue;
            }
            for (r, c) in placement.cells() {
                heat.add(r, c, 1);
            }
        }
    }

    for ((r, c), k) in knowledge.iter() {
        if k != Knowledge::Hit {
            continue;
        }
        for (nr, nc) in orthogonal_neighbors(size, r, c) {
            if knowledge.is_unknown(nr, nc) {
                heat.add(nr, nc, ADJACENCY_BONUS);
            }
        }
    }

    let hunting = !knowledge.any_hit();
    if hunting && remaining.iter().min().is_some_and(|&min| min >= 2) {
        for (i, v) in heat.values.iter_mut().enumerate() {
            if (i / size + i % size) % 2 == 1 {
                *v = libm::trunc(f64::from(*v) * PARITY_FACTOR) as u32;
            }
        }
    }

    heat
}

fn push_unique(
    out: &mut Vec<(usize, usize)>,
    seen: &mut BTreeSet<(usize, usize)>,
    cell: (usize, usize),
) {
    if seen.insert(cell) {
        out.push(cell);
    }
}

/// Target-mode candidates around open hit clusters.
///
/// Clusters without a known orientation offer every unknown neighbour.
/// Oriented clusters offer only the single cell just past each end of their
/// line, and only if that cell is unknown. Empty when no hit exists.
pub fn candidate_targets(knowledge: &KnowledgeGrid) -> Vec<(usize, usize)> {
    let size = knowledge.size();
    let mut out = Vec::new();
    let mut seen = BTreeSet::new();

    for cluster in hit_clusters(knowledge) {
        match cluster.orientation() {
            None => {
                for (r, c) in cluster.cells() {
                    for (nr, nc) in orthogonal_neighbors(size, r, c) {
                        if knowledge.is_unknown(nr, nc) {
                            push_unique(&mut out, &mut seen, (nr, nc));
                        }
                    }
                }
            }
            Some(orientation) => {
                // cells() is row-major, so first/last are the two ends of the line
                let (Some(first), Some(last)) = (cluster.cells().next(), cluster.cells().last())
                else {
                    continue;
                };
                let (before, after) = match orientation {
                    Orientation::Horizontal => (
                        first.1.checked_sub(1).map(|c| (first.0, c)),
                        Some((last.0, last.1 + 1)),
                    ),
                    Orientation::Vertical => (
                        first.0.checked_sub(1).map(|r| (r, first.1)),
                        Some((last.0 + 1, last.1)),
                    ),
                };
                for (r, c) in [before, after].into_iter().flatten() {
                    if knowledge.is_unknown(r, c) {
                        push_unique(&mut out, &mut seen, (r, c));
                    }
                }
            }
        }
    }
    out
}

/// The `k` hottest unknown cells, hottest first. Ties go to the larger
/// (row, col). Zero-heat cells are dropped unless nothing in the top `k` is
/// warm, in which case the whole top `k` is returned.
pub fn top_heat_candidates(
    heat: &Heatmap,
    knowledge: &KnowledgeGrid,
    k: usize,
) -> Vec<(usize, usize)> {
    let mut cells: Vec<(u32, usize, usize)> = knowledge
        .unknown_cells()
        .map(|(r, c)| (heat.get(r, c), r, c))
        .collect();
    cells.sort_unstable_by(|a, b| b.cmp(a));
    cells.truncate(k);

    let warm: Vec<(usize, usize)> = cells
        .iter()
        .filter(|(v, _, _)| *v > 0)
        .map(|&(_, r, c)| (r, c))
        .collect();
    if warm.is_empty() {
        cells.into_iter().map(|(_, r, c)| (r, c)).collect()
    } else {
        warm
    }
}

/// Opponent's best single-shot hit chance against us next turn, in `[0, 1]`.
pub fn estimate_opponent_counter_gain(
    opponent_view: &KnowledgeGrid,
    own_remaining: &[usize],
) -> f64 {
    let heat = heatmap(opponent_view, own_remaining);
    let total = heat.total();
    if total == 0 {
        return 0.0;
    }
    let best = opponent_view
        .unknown_cells()
        .map(|(r, c)| heat.get(r, c))
        .max()
        .unwrap_or(0);
    best as f64 / total as f64
}

/// Computer opponent state: the enemy ship lengths not yet confirmed sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetingEngine {
    remaining: Vec<usize>,
}

impl TargetingEngine {
    pub fn new(ships: &[usize]) -> Self {
        TargetingEngine {
            remaining: ships.to_vec(),
        }
    }

    /// Engine tracking the standard five-ship fleet.
    pub fn standard() -> Self {
        Self::new(&STANDARD_SHIPS)
    }

    /// Enemy ship lengths still believed afloat.
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Drop one ship of `length` from the tracked fleet; ignores unknown lengths.
    pub fn notify_sunk(&mut self, length: usize) {
        if let Some(idx) = self.remaining.iter().position(|&l| l == length) {
            self.remaining.remove(idx);
        } else {
            log::debug!("sink of untracked length {} ignored", length);
        }
    }

    /// Pick the next shot against the opponent.
    ///
    /// Candidates come from open hit clusters (target mode) or, failing that,
    /// the hottest unknown cells (hunt mode). Each is scored as its share of
    /// total heat minus the opponent's best counter-shot chance; the first
    /// strictly best candidate wins.
    pub fn choose_shot(
        &self,
        enemy_view: &KnowledgeGrid,
        own_view: &KnowledgeGrid,
        own_remaining: &[usize],
    ) -> (usize, usize) {
        let heat = heatmap(enemy_view, &self.remaining);
        let mut candidates = candidate_targets(enemy_view);
        let mode = if candidates.is_empty() {
            candidates = top_heat_candidates(&heat, enemy_view, HUNT_CANDIDATES);
            "hunt"
        } else {
            "target"
        };

        if candidates.is_empty() {
            return enemy_view.unknown_cells().next().unwrap_or((0, 0));
        }

        let opponent_gain = estimate_opponent_counter_gain(own_view, own_remaining);
        let total = heat.total();
        let mut best = candidates[0];
        let mut best_score = f64::NEG_INFINITY;
        for &(r, c) in &candidates {
            let p_hit = if total == 0 {
                0.0
            } else {
                f64::from(heat.get(r, c)) / total as f64
            };
            let score = p_hit - opponent_gain;
            if score > best_score {
                best_score = score;
                best = (r, c);
            }
        }
        log::debug!(
            "{} mode: {} candidates, chose {:?} (score {:.4}, counter gain {:.4})",
            mode,
            candidates.len(),
            best,
            best_score,
            opponent_gain
        );
        best
    }
}

impl Default for TargetingEngine {
    fn default() -> Self {
        Self::standard()
    }
}
