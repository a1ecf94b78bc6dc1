//! Dependency-tree probability model.
//!
//! A [`DependencyTree`] is a tree-structured distribution over discrete
//! variables: the root has a marginal distribution and every other
//! variable is conditioned on exactly one parent. The tree maximizing the
//! total pairwise mutual information is found with Prim's algorithm
//! (Chow & Liu, 1968).
//!
//! The model is plain data: an arena of [`TreeNode`]s in topological order,
//! each holding its parent index and probability table. A new tree is
//! estimated from scratch every time; nothing is updated in place.
//!
//! All probabilities use additive smoothing with weight `m`, so no value is
//! ever impossible. Tables are stored sparsely: only observed values carry
//! counts, and the smoothing mass is spread evenly over the whole range.

use rand::Rng;

/// Smoothed distribution over the values of one variable.
///
/// `P(v) = (count(v) + m) / (total + m * range)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    observed: Vec<(usize, f64)>,
    observed_total: f64,
    range: usize,
    smoothing: f64,
}

impl ProbabilityRow {
    /// Builds a row from `(value, count)` pairs.
    fn new(observed: Vec<(usize, f64)>, range: usize, smoothing: f64) -> Self {
        let observed_total = observed.iter().map(|&(_, c)| c).sum();
        Self {
            observed,
            observed_total,
            range,
            smoothing,
        }
    }

    fn normalizer(&self) -> f64 {
        self.observed_total + self.smoothing * self.range as f64
    }

    /// Probability of `value`.
    pub fn probability(&self, value: usize) -> f64 {
        if value >= self.range {
            return 0.0;
        }
        let count = self
            .observed
            .iter()
            .find(|&&(v, _)| v == value)
            .map_or(0.0, |&(_, c)| c);
        (count + self.smoothing) / self.normalizer()
    }

    /// Draws a value.
    ///
    /// The observed mass is walked explicitly; the smoothing mass is
    /// uniform over the range, so it reduces to a uniform draw.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        let mut u = rng.random::<f64>() * self.normalizer();
        if u < self.observed_total {
            for &(value, count) in &self.observed {
                if u < count {
                    return value;
                }
                u -= count;
            }
            if let Some(&(value, _)) = self.observed.last() {
                return value; // floating-point fallback
            }
        }
        rng.random_range(0..self.range)
    }
}

/// Distribution attached to a tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbabilityTable {
    /// Root variable: unconditional distribution.
    Marginal(ProbabilityRow),

    /// Child variable: one row per value of the parent variable.
    Conditional {
        parent: usize,
        rows: Vec<ProbabilityRow>,
    },
}

/// One variable in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// Index of the variable this node models.
    pub variable: usize,

    /// The node's distribution.
    pub table: ProbabilityTable,
}

impl TreeNode {
    /// Variable index of the parent, `None` for the root.
    pub fn parent(&self) -> Option<usize> {
        match self.table {
            ProbabilityTable::Marginal(_) => None,
            ProbabilityTable::Conditional { parent, .. } => Some(parent),
        }
    }

    /// The row that applies given the values assigned so far.
    fn row(&self, x: &[usize]) -> &ProbabilityRow {
        match &self.table {
            ProbabilityTable::Marginal(row) => row,
            ProbabilityTable::Conditional { parent, rows } => &rows[x[*parent]],
        }
    }
}

/// Tree-structured distribution over discrete vectors.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyTree {
    /// Nodes in topological order (root first, parents before children).
    nodes: Vec<TreeNode>,
    ranges: Vec<usize>,
}

impl DependencyTree {
    /// Estimates the maximum mutual-information tree from `samples`.
    ///
    /// Variable 0 is the root. With no samples every table is uniform.
    ///
    /// # Panics
    /// Panics if a range is zero or a sample has the wrong length or an
    /// out-of-range value.
    pub fn estimate<S: AsRef<[usize]>>(samples: &[S], ranges: &[usize], smoothing: f64) -> Self {
        assert!(ranges.iter().all(|&r| r > 0), "variable ranges must be positive");
        for s in samples {
            let s = s.as_ref();
            assert_eq!(s.len(), ranges.len(), "sample length must match ranges");
            assert!(
                s.iter().zip(ranges).all(|(&v, &r)| v < r),
                "sample value out of range: {s:?}"
            );
        }

        let n = ranges.len();
        if n == 0 {
            return Self {
                nodes: Vec::new(),
                ranges: Vec::new(),
            };
        }

        let stats = SampleStats::new(samples, ranges);
        let mut weights = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let mi = stats.mutual_information(samples, i, j, smoothing);
                weights[i][j] = mi;
                weights[j][i] = mi;
            }
        }

        let order = maximum_spanning_tree(&weights);

        let nodes = order
            .into_iter()
            .map(|(variable, parent)| {
                let table = match parent {
                    None => ProbabilityTable::Marginal(ProbabilityRow::new(
                        stats.observed(variable),
                        ranges[variable],
                        smoothing,
                    )),
                    Some(p) => ProbabilityTable::Conditional {
                        parent: p,
                        rows: conditional_rows(samples, p, variable, ranges, smoothing),
                    },
                };
                TreeNode { variable, table }
            })
            .collect();

        Self {
            nodes,
            ranges: ranges.to_vec(),
        }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Parent of `variable`, or `None` for the root (or an unknown index).
    pub fn parent_of(&self, variable: usize) -> Option<usize> {
        self.nodes
            .iter()
            .find(|node| node.variable == variable)
            .and_then(TreeNode::parent)
    }

    /// Draws a vector, sampling each variable after its parent.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut x = vec![0usize; self.ranges.len()];
        for node in &self.nodes {
            x[node.variable] = node.row(&x).sample(rng);
        }
        x
    }

    /// Probability the model assigns to `x`.
    pub fn probability(&self, x: &[usize]) -> f64 {
        self.nodes
            .iter()
            .map(|node| node.row(x).probability(x[node.variable]))
            .product()
    }
}

/// Per-variable value counts over the sample set.
struct SampleStats {
    counts: Vec<Vec<f64>>,
    distinct: Vec<Vec<usize>>,
    ranges: Vec<usize>,
    total: f64,
}

impl SampleStats {
    fn new<S: AsRef<[usize]>>(samples: &[S], ranges: &[usize]) -> Self {
        let mut counts: Vec<Vec<f64>> = ranges.iter().map(|&r| vec![0.0; r]).collect();
        for s in samples {
            for (var, &v) in s.as_ref().iter().enumerate() {
                counts[var][v] += 1.0;
            }
        }
        let distinct = counts
            .iter()
            .map(|c| (0..c.len()).filter(|&v| c[v] > 0.0).collect())
            .collect();
        Self {
            counts,
            distinct,
            ranges: ranges.to_vec(),
            total: samples.len() as f64,
        }
    }

    fn observed(&self, var: usize) -> Vec<(usize, f64)> {
        self.distinct[var]
            .iter()
            .map(|&v| (v, self.counts[var][v]))
            .collect()
    }

    /// Mutual information between variables `i` and `j` under the smoothed
    /// joint `P(a, b) = (count(a, b) + m) / (K + m * r_i * r_j)`.
    ///
    /// Marginals are taken from the smoothed joint so the result is a true
    /// mutual information. Unobserved cells share one probability, so their
    /// contribution is summed in closed form and the cost is O(K log K)
    /// rather than O(r_i * r_j).
    fn mutual_information<S: AsRef<[usize]>>(
        &self,
        samples: &[S],
        i: usize,
        j: usize,
        m: f64,
    ) -> f64 {
        let ri = self.ranges[i] as f64;
        let rj = self.ranges[j] as f64;
        let d = self.total + m * ri * rj;
        let empty_cell = m / d;

        let ln_pi = |a: usize| ((self.counts[i][a] + m * rj) / d).ln();
        let ln_pj = |b: usize| ((self.counts[j][b] + m * ri) / d).ln();

        // Σ over the whole range of ln P_i(a), and likewise for j.
        let sum_ln_pi = self.distinct[i].iter().map(|&a| ln_pi(a)).sum::<f64>()
            + (ri - self.distinct[i].len() as f64) * (m * rj / d).ln();
        let sum_ln_pj = self.distinct[j].iter().map(|&b| ln_pj(b)).sum::<f64>()
            + (rj - self.distinct[j].len() as f64) * (m * ri / d).ln();

        let mut cells: Vec<(usize, usize)> = samples
            .iter()
            .map(|s| (s.as_ref()[i], s.as_ref()[j]))
            .collect();
        cells.sort_unstable();

        let mut mi = 0.0;
        let mut observed_cells = 0usize;
        let mut observed_ln_marginals = 0.0;
        for group in cells.chunk_by(|x, y| x == y) {
            let (a, b) = group[0];
            let p = (group.len() as f64 + m) / d;
            let ln_marginals = ln_pi(a) + ln_pj(b);
            mi += p * (p.ln() - ln_marginals);
            observed_cells += 1;
            observed_ln_marginals += ln_marginals;
        }

        let empty_cells = ri * rj - observed_cells as f64;
        let empty_ln_marginals = rj * sum_ln_pi + ri * sum_ln_pj - observed_ln_marginals;
        mi += empty_cell * (empty_cells * empty_cell.ln() - empty_ln_marginals);
        mi
    }
}

/// Smoothed conditional rows `P(child | parent = a)` for every `a`.
fn conditional_rows<S: AsRef<[usize]>>(
    samples: &[S],
    parent: usize,
    child: usize,
    ranges: &[usize],
    smoothing: f64,
) -> Vec<ProbabilityRow> {
    let mut pairs: Vec<(usize, usize)> = samples
        .iter()
        .map(|s| (s.as_ref()[parent], s.as_ref()[child]))
        .collect();
    pairs.sort_unstable();

    let mut observed: Vec<Vec<(usize, f64)>> = vec![Vec::new(); ranges[parent]];
    for group in pairs.chunk_by(|x, y| x == y) {
        let (a, b) = group[0];
        observed[a].push((b, group.len() as f64));
    }

    observed
        .into_iter()
        .map(|obs| ProbabilityRow::new(obs, ranges[child], smoothing))
        .collect()
}

/// Prim's algorithm on a dense weight matrix, maximizing total weight.
///
/// Returns `(variable, parent)` pairs in insertion order, rooted at
/// variable 0. Ties go to the lowest variable index.
fn maximum_spanning_tree(weights: &[Vec<f64>]) -> Vec<(usize, Option<usize>)> {
    let n = weights.len();
    let mut in_tree = vec![false; n];
    let mut best_weight = vec![f64::NEG_INFINITY; n];
    let mut best_parent = vec![0usize; n];
    let mut order = Vec::with_capacity(n);

    in_tree[0] = true;
    order.push((0, None));
    for v in 1..n {
        best_weight[v] = weights[0][v];
    }

    for _ in 1..n {
        let next = (0..n)
            .filter(|&v| !in_tree[v])
            .fold(None, |acc: Option<usize>, v| match acc {
                Some(b) if best_weight[b] >= best_weight[v] => Some(b),
                _ => Some(v),
            });
        let Some(v) = next else { break };

        in_tree[v] = true;
        order.push((v, Some(best_parent[v])));

        for u in 0..n {
            if !in_tree[u] && weights[v][u] > best_weight[u] {
                best_weight[u] = weights[v][u];
                best_parent[u] = v;
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn row_total(row: &ProbabilityRow) -> f64 {
        (0..row.range).map(|v| row.probability(v)).sum()
    }

    #[test]
    fn test_row_probabilities_sum_to_one() {
        let row = ProbabilityRow::new(vec![(1, 3.0), (4, 1.0)], 5, 0.1);
        assert!((row_total(&row) - 1.0).abs() < 1e-12);
        assert!((row.probability(1) - 3.1 / 4.5).abs() < 1e-12);
        assert!((row.probability(0) - 0.1 / 4.5).abs() < 1e-12);
        assert_eq!(row.probability(5), 0.0);
    }

    #[test]
    fn test_row_sampling_frequencies() {
        let mut rng = create_rng(42);
        let row = ProbabilityRow::new(vec![(2, 9.0)], 4, 0.25);
        // P(2) = 9.25 / 10, every other value 0.25 / 10
        let draws = 20_000;
        let hits = (0..draws).filter(|_| row.sample(&mut rng) == 2).count();
        let freq = hits as f64 / draws as f64;
        assert!((freq - 0.925).abs() < 0.01, "observed frequency {freq}");
    }

    #[test]
    fn test_empty_row_is_uniform() {
        let mut rng = create_rng(1);
        let row = ProbabilityRow::new(Vec::new(), 3, 0.1);
        assert!((row.probability(2) - 1.0 / 3.0).abs() < 1e-12);
        for _ in 0..100 {
            assert!(row.sample(&mut rng) < 3);
        }
    }

    #[test]
    fn test_mutual_information_detects_dependence() {
        // var1 copies var0; var2 is constant.
        let samples: Vec<Vec<usize>> = (0..20).map(|k| vec![k % 4, k % 4, 0]).collect();
        let ranges = vec![4, 4, 4];
        let stats = SampleStats::new(&samples, &ranges);

        let copied = stats.mutual_information(&samples, 0, 1, 0.1);
        let constant = stats.mutual_information(&samples, 0, 2, 0.1);

        assert!(copied > 0.8, "copied MI too small: {copied}");
        assert!(constant.abs() < 1e-9, "constant MI should be ~0: {constant}");
        assert!(copied > constant);
    }

    #[test]
    fn test_mutual_information_matches_dense_sum() {
        let mut rng = create_rng(7);
        let ranges = vec![3, 5];
        let samples: Vec<Vec<usize>> = (0..12)
            .map(|_| vec![rng.random_range(0..3), rng.random_range(0..5)])
            .collect();
        let m = 0.1;
        let stats = SampleStats::new(&samples, &ranges);
        let fast = stats.mutual_information(&samples, 0, 1, m);

        let d = samples.len() as f64 + m * 15.0;
        let mut joint = vec![vec![m; 5]; 3];
        for s in &samples {
            joint[s[0]][s[1]] += 1.0;
        }
        let pa: Vec<f64> = (0..3).map(|a| joint[a].iter().sum::<f64>() / d).collect();
        let pb: Vec<f64> = (0..5)
            .map(|b| (0..3).map(|a| joint[a][b]).sum::<f64>() / d)
            .collect();
        let mut dense = 0.0;
        for a in 0..3 {
            for b in 0..5 {
                let p = joint[a][b] / d;
                dense += p * (p / (pa[a] * pb[b])).ln();
            }
        }
        assert!((fast - dense).abs() < 1e-10, "fast {fast} vs dense {dense}");
    }

    #[test]
    fn test_tree_links_dependent_variables() {
        // Variables 0-1 and 2-3 are copies; the pairs are independent.
        let mut rng = create_rng(3);
        let samples: Vec<Vec<usize>> = (0..40)
            .map(|_| {
                let a = rng.random_range(0..5);
                let b = rng.random_range(0..5);
                vec![a, a, b, b]
            })
            .collect();
        let tree = DependencyTree::estimate(&samples, &[5, 5, 5, 5], 0.1);

        assert_eq!(tree.nodes().len(), 4);
        assert_eq!(tree.nodes()[0].variable, 0);
        assert_eq!(tree.parent_of(0), None);
        assert_eq!(tree.parent_of(1), Some(0));
        assert!(tree.parent_of(3) == Some(2) || tree.parent_of(2) == Some(3));
    }

    #[test]
    fn test_nodes_are_topologically_ordered() {
        let mut rng = create_rng(11);
        let samples: Vec<Vec<usize>> = (0..20)
            .map(|_| (0..8).map(|_| rng.random_range(0..6)).collect())
            .collect();
        let tree = DependencyTree::estimate(&samples, &[6; 8], 0.1);

        let mut seen = [false; 8];
        for node in tree.nodes() {
            if let Some(p) = node.parent() {
                assert!(seen[p], "parent {p} of {} not yet placed", node.variable);
            }
            seen[node.variable] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_sampling_reproduces_strong_dependence() {
        let samples: Vec<Vec<usize>> = (0..20).map(|k| vec![k % 3, k % 3]).collect();
        let tree = DependencyTree::estimate(&samples, &[3, 3], 0.01);
        let mut rng = create_rng(5);
        let agree = (0..2000)
            .map(|_| tree.sample(&mut rng))
            .filter(|x| x[0] == x[1])
            .count();
        assert!(agree > 1900, "only {agree} of 2000 samples kept the copy");
    }

    #[test]
    fn test_probability_sums_to_one() {
        let samples = vec![vec![0, 1, 1], vec![1, 1, 0], vec![0, 0, 1]];
        let tree = DependencyTree::estimate(&samples, &[2, 2, 2], 0.1);
        let mut total = 0.0;
        for a in 0..2 {
            for b in 0..2 {
                for c in 0..2 {
                    total += tree.probability(&[a, b, c]);
                }
            }
        }
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_samples_gives_uniform_model() {
        let samples: Vec<Vec<usize>> = Vec::new();
        let tree = DependencyTree::estimate(&samples, &[4, 4, 4], 0.1);
        assert!((tree.probability(&[1, 2, 3]) - 1.0 / 64.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_domain() {
        let samples: Vec<Vec<usize>> = vec![Vec::new()];
        let tree = DependencyTree::estimate(&samples, &[], 0.1);
        let mut rng = create_rng(1);
        assert!(tree.nodes().is_empty());
        assert!(tree.sample(&mut rng).is_empty());
    }
}
