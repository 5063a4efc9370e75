//! Combinatorial tables driving the unranking engine.
//!
//! Every table is a pure function of the size bound `M` fixed at engine
//! construction. After construction the tables are immutable, so any number
//! of threads may query them concurrently.
//!
//! ## Table inventory
//!
//! - `pow3[b] = 3^b` — operator choices for `b` binary nodes.
//! - `bell[n]` — Bell numbers (set partitions of `n` leaves), through `M+1`.
//! - `shapes[s][b]` — tree shapes of total size `s` with exactly `b` binary
//!   nodes.
//! - `weight[b] = bell[b+1] * pow3[b]` — labelings times operator tuples for
//!   a single shape with `b` binaries.
//! - `shape_count[s]`, `shape_weight[s]`, `cum_weight[s]` — per-layer
//!   aggregates; the grand total is `cum_weight[M]`.
//! - `block_weight[s][ls]`, `row_weight[s][ls][b1]` — weights of binary-root
//!   sub-ranges, used to peel a layer offset down to one shape.
//! - `rgs[len][k]` — restricted-growth-string completions of length `len`
//!   with running maximum `k`; `rgs[n][0]` equals `bell[n]`.

use log::debug;

use crate::bignat::BigNat;

/// Immutable DP tables for a fixed size bound.
#[derive(Debug)]
pub struct Tables {
    max_size: usize,
    pow3: Vec<BigNat>,
    bell: Vec<BigNat>,
    shapes: Vec<Vec<BigNat>>,
    weight: Vec<BigNat>,
    shape_count: Vec<BigNat>,
    shape_weight: Vec<BigNat>,
    cum_weight: Vec<BigNat>,
    block_weight: Vec<Vec<BigNat>>,
    row_weight: Vec<Vec<Vec<BigNat>>>,
    rgs: Vec<Vec<BigNat>>,
}

impl Tables {
    pub(crate) fn new(max_size: usize) -> Self {
        assert!(max_size >= 1, "size bound must be positive");
        let m = max_size;
        let three = BigNat::from(3u64);

        let mut pow3 = Vec::with_capacity(m + 1);
        pow3.push(BigNat::one());
        for b in 1..=m {
            let next = &pow3[b - 1] * &three;
            pow3.push(next);
        }

        // Bell triangle; weight[b] needs bell[b + 1], hence the extra index.
        let mut bell = vec![BigNat::one()];
        let mut row = vec![BigNat::one()];
        for _ in 1..=m + 1 {
            let mut next = Vec::with_capacity(row.len() + 1);
            next.push(row[row.len() - 1].clone());
            for k in 1..=row.len() {
                let v = &next[k - 1] + &row[k - 1];
                next.push(v);
            }
            bell.push(next[0].clone());
            row = next;
        }

        // shapes[s][b]: binary-root shapes split s-1 nodes between the two
        // subtrees; unary-root shapes wrap every shape of size s-1.
        let mut shapes = vec![vec![BigNat::zero(); m + 1]; m + 1];
        shapes[1][0] = BigNat::one();
        for s in 2..=m {
            for ls in 1..=s - 2 {
                let rs = s - 1 - ls;
                for b1 in 0..=ls {
                    if shapes[ls][b1].is_zero() {
                        continue;
                    }
                    for b2 in 0..=rs {
                        if shapes[rs][b2].is_zero() {
                            continue;
                        }
                        let add = &shapes[ls][b1] * &shapes[rs][b2];
                        shapes[s][b1 + b2 + 1] += &add;
                    }
                }
            }
            for b in 0..=m {
                let add = shapes[s - 1][b].clone();
                shapes[s][b] += &add;
            }
        }

        let mut weight = Vec::with_capacity(m + 1);
        for b in 0..=m {
            weight.push(&bell[b + 1] * &pow3[b]);
        }

        let mut shape_count = vec![BigNat::zero()];
        let mut shape_weight = vec![BigNat::zero()];
        let mut cum_weight = vec![BigNat::zero()];
        for s in 1..=m {
            let mut count = BigNat::zero();
            let mut w = BigNat::zero();
            for b in 0..=m {
                count += &shapes[s][b];
                let t = &shapes[s][b] * &weight[b];
                w += &t;
            }
            let cum = &cum_weight[s - 1] + &w;
            cum_weight.push(cum);
            shape_count.push(count);
            shape_weight.push(w);
        }

        let mut block_weight = vec![vec![BigNat::zero(); m + 1]; m + 1];
        let mut row_weight = vec![vec![vec![BigNat::zero(); m + 1]; m + 1]; m + 1];
        for s in 2..=m {
            for ls in 1..=s - 2 {
                let rs = s - 1 - ls;
                let mut bw = BigNat::zero();
                for b1 in 0..=m {
                    if shapes[ls][b1].is_zero() {
                        continue;
                    }
                    let mut rowsum = BigNat::zero();
                    for b2 in 0..=m {
                        if shapes[rs][b2].is_zero() {
                            continue;
                        }
                        let t = &shapes[rs][b2] * &weight[b1 + b2 + 1];
                        rowsum += &t;
                    }
                    let contrib = &shapes[ls][b1] * &rowsum;
                    bw += &contrib;
                    row_weight[s][ls][b1] = rowsum;
                }
                block_weight[s][ls] = bw;
            }
        }

        // Columns run to 2m+1 so that every entry with len + k <= 2m + 1 is
        // exact; unranking reads satisfy len + k < leaf count <= m.
        let cols = 2 * m + 2;
        let mut rgs = vec![vec![BigNat::zero(); cols]; m + 1];
        for k in 0..cols {
            rgs[0][k] = BigNat::one();
        }
        for len in 1..=m {
            for k in 0..cols - 1 {
                let mut sum = BigNat::zero();
                for v in 0..=k + 1 {
                    sum += &rgs[len - 1][v.max(k)];
                }
                rgs[len][k] = sum;
            }
        }

        debug!("tables ready: max_size={}, total={}", m, cum_weight[m]);

        Tables {
            max_size: m,
            pow3,
            bell,
            shapes,
            weight,
            shape_count,
            shape_weight,
            cum_weight,
            block_weight,
            row_weight,
            rgs,
        }
    }

    /// The size bound `M` these tables were built for.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// `3^b`, for `b <= M`.
    pub fn pow3(&self, binaries: usize) -> &BigNat {
        &self.pow3[binaries]
    }

    /// Bell number `B(n)`, for `n <= M + 1`.
    pub fn bell(&self, n: usize) -> &BigNat {
        &self.bell[n]
    }

    /// Number of shapes of total size `size` with exactly `binaries` binary
    /// nodes.
    pub fn shapes(&self, size: usize, binaries: usize) -> &BigNat {
        &self.shapes[size][binaries]
    }

    /// `W[b] = Bell[b+1] * 3^b`: variants of one shape with `b` binaries.
    pub fn weight(&self, binaries: usize) -> &BigNat {
        &self.weight[binaries]
    }

    /// Number of shapes of total size `size` (0 for size 0).
    pub fn shape_count(&self, size: usize) -> &BigNat {
        &self.shape_count[size]
    }

    /// Total weight of the size-`size` layer.
    pub fn shape_weight(&self, size: usize) -> &BigNat {
        &self.shape_weight[size]
    }

    /// Cumulative weight of layers `1..=size`; `cumulative(0)` is 0.
    pub fn cumulative(&self, size: usize) -> &BigNat {
        &self.cum_weight[size]
    }

    /// Grand total `T = cumulative(M)`.
    pub fn total(&self) -> &BigNat {
        &self.cum_weight[self.max_size]
    }

    /// Weight of all binary-root shapes of size `size` whose left subtree
    /// has size `left_size`.
    pub fn block_weight(&self, size: usize, left_size: usize) -> &BigNat {
        &self.block_weight[size][left_size]
    }

    /// Within that block, the weight contributed per left shape once the
    /// left subtree's binary count is fixed to `left_binaries`.
    pub fn row_weight(&self, size: usize, left_size: usize, left_binaries: usize) -> &BigNat {
        &self.row_weight[size][left_size][left_binaries]
    }

    /// Completions of a restricted-growth string: `len` symbols still to
    /// place with running maximum `max`. `rgs_count(n, 0)` is `Bell(n)`.
    pub fn rgs_count(&self, len: usize, max: usize) -> &BigNat {
        &self.rgs[len][max]
    }

    /// Number of binary-root shapes of size `size`.
    pub(crate) fn binary_shape_count(&self, size: usize) -> BigNat {
        &self.shape_count[size] - &self.shape_count[size - 1]
    }
}
