//! The five union-find strategies and their `connect` step.
//!
//! Each strategy is a plain function over the counted `id` array and the
//! (uncounted) size array. The engine validates inputs and handles `p == q`
//! before dispatching here, so every function below may assume `p != q`
//! and both sites in range.

use std::fmt;
use std::str::FromStr;

use crate::sites::Sites;

/// Which union-find algorithm an engine runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Variant {
    /// Eager class labels; O(1) query, O(N) merge.
    QuickFind,
    /// Parent forest, `p`'s root is linked under `q`'s root.
    QuickUnion,
    /// Parent forest with union by size.
    WeightedQuickUnion,
    /// Union by size plus path halving during every find.
    WeightedHalving,
    /// Union by size plus full path compression after each merge.
    WeightedFullCompression,
}

/// Result of a single `connect` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    AlreadyConnected,
    Merged,
}

impl Outcome {
    pub fn is_merged(self) -> bool {
        self == Outcome::Merged
    }
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::QuickFind,
        Variant::QuickUnion,
        Variant::WeightedQuickUnion,
        Variant::WeightedHalving,
        Variant::WeightedFullCompression,
    ];

    /// Short name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Variant::QuickFind => "qf",
            Variant::QuickUnion => "qu",
            Variant::WeightedQuickUnion => "wqu",
            Variant::WeightedHalving => "wqu-ph",
            Variant::WeightedFullCompression => "wqu-pc",
        }
    }

    /// Whether the variant keeps a size array.
    pub fn is_weighted(self) -> bool {
        matches!(
            self,
            Variant::WeightedQuickUnion
                | Variant::WeightedHalving
                | Variant::WeightedFullCompression
        )
    }

    /// Whether `id` is a parent forest (everything except quick-find).
    pub fn is_forest(self) -> bool {
        self != Variant::QuickFind
    }

    pub(crate) fn connect(
        self,
        sites: &mut Sites,
        sizes: &mut [usize],
        p: usize,
        q: usize,
    ) -> Outcome {
        match self {
            Variant::QuickFind => quick_find(sites, p, q),
            Variant::QuickUnion => quick_union(sites, p, q),
            Variant::WeightedQuickUnion => weighted(sites, sizes, p, q),
            Variant::WeightedHalving => weighted_halving(sites, sizes, p, q),
            Variant::WeightedFullCompression => weighted_full_compression(sites, sizes, p, q),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant '{0}' (expected one of qf, qu, wqu, wqu-ph, wqu-pc)")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "qf" | "quick-find" => Ok(Variant::QuickFind),
            "qu" | "quick-union" => Ok(Variant::QuickUnion),
            "wqu" | "weighted" => Ok(Variant::WeightedQuickUnion),
            "wqu-ph" | "halving" => Ok(Variant::WeightedHalving),
            "wqu-pc" | "full-compression" => Ok(Variant::WeightedFullCompression),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = UnknownVariant;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Variant> for String {
    fn from(v: Variant) -> String {
        v.name().to_string()
    }
}

/// Quick-find: relabel every member of `p`'s class with `q`'s label.
fn quick_find(sites: &mut Sites, p: usize, q: usize) -> Outcome {
    if sites.get(p) == sites.get(q) {
        return Outcome::AlreadyConnected;
    }
    let label = sites.get(p);
    for i in 0..sites.len() {
        if sites.get(i) == label {
            let target = sites.get(q);
            sites.set(i, target);
        }
    }
    Outcome::Merged
}

fn quick_union(sites: &mut Sites, p: usize, q: usize) -> Outcome {
    let i = find(sites, p);
    let j = find(sites, q);
    if i == j {
        return Outcome::AlreadyConnected;
    }
    sites.set(i, j);
    Outcome::Merged
}

fn weighted(sites: &mut Sites, sizes: &mut [usize], p: usize, q: usize) -> Outcome {
    let i = find(sites, p);
    let j = find(sites, q);
    if i == j {
        return Outcome::AlreadyConnected;
    }
    link_by_size(sites, sizes, i, j);
    Outcome::Merged
}

fn weighted_halving(sites: &mut Sites, sizes: &mut [usize], p: usize, q: usize) -> Outcome {
    let i = find_halving(sites, p);
    let j = find_halving(sites, q);
    if i == j {
        return Outcome::AlreadyConnected;
    }
    link_by_size(sites, sizes, i, j);
    Outcome::Merged
}

fn weighted_full_compression(
    sites: &mut Sites,
    sizes: &mut [usize],
    p: usize,
    q: usize,
) -> Outcome {
    let i = find(sites, p);
    let j = find(sites, q);
    if i == j {
        return Outcome::AlreadyConnected;
    }
    let root = link_by_size(sites, sizes, i, j);
    compress(sites, p, root);
    compress(sites, q, root);
    Outcome::Merged
}

/// Walk parents to the root. A path of `d` hops costs `2d + 1` accesses.
fn find(sites: &mut Sites, mut x: usize) -> usize {
    while sites.get(x) != x {
        x = sites.get(x);
    }
    x
}

/// Walk to the root, pointing each visited site at its grandparent.
/// Each hop costs five accesses: the loop test, the three-touch halving
/// step, and the re-read that advances `x`.
fn find_halving(sites: &mut Sites, mut x: usize) -> usize {
    while sites.get(x) != x {
        let parent = sites.get(x);
        let grandparent = sites.get(parent);
        sites.set(x, grandparent);
        x = sites.get(x);
    }
    x
}

/// Union by size. Strictly smaller trees go under the larger root; on a tie
/// `p`'s root survives. Returns the surviving root.
fn link_by_size(sites: &mut Sites, sizes: &mut [usize], i: usize, j: usize) -> usize {
    if sizes[i] < sizes[j] {
        sites.set(i, j);
        sizes[j] += sizes[i];
        j
    } else {
        sites.set(j, i);
        sizes[i] += sizes[j];
        i
    }
}

/// Re-walk from `x` to `root`, pointing every site on the way at `root`.
fn compress(sites: &mut Sites, mut x: usize, root: usize) {
    while sites.get(x) != x {
        let parent = sites.get(x);
        sites.set(x, root);
        x = parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sites_from(id: &[usize]) -> Sites {
        let mut sites = Sites::new(id.len());
        for (i, &v) in id.iter().enumerate() {
            sites.set(i, v);
        }
        sites.accesses_mut().take_delta();
        sites
    }

    fn total(sites: &Sites) -> u64 {
        sites.accesses().total() - (sites.len() as u64)
    }

    #[test]
    fn parse_names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.name().parse::<Variant>(), Ok(v));
        }
        assert_eq!("WQU-PH".parse::<Variant>(), Ok(Variant::WeightedHalving));
        assert!("wqu-xx".parse::<Variant>().is_err());
    }

    #[test]
    fn only_weighted_variants_keep_sizes() {
        assert!(!Variant::QuickFind.is_weighted());
        assert!(!Variant::QuickUnion.is_weighted());
        assert!(Variant::WeightedQuickUnion.is_weighted());
        assert!(Variant::WeightedHalving.is_weighted());
        assert!(Variant::WeightedFullCompression.is_weighted());
        assert!(!Variant::QuickFind.is_forest());
    }

    #[test]
    fn find_costs_two_per_hop_plus_one() {
        // 0 -> 1 -> 2 (root)
        let mut sites = sites_from(&[1, 2, 2]);
        assert_eq!(find(&mut sites, 0), 2);
        assert_eq!(total(&sites), 5);
    }

    #[test]
    fn find_halving_points_at_grandparents() {
        // 0 -> 1 -> 2 -> 3 -> 4 (root)
        let mut sites = sites_from(&[1, 2, 3, 4, 4]);
        assert_eq!(find_halving(&mut sites, 0), 4);
        // 0 skips to 2, then 2 skips to 4.
        assert_eq!(sites.as_slice(), &[2, 2, 4, 4, 4]);
        // Two hops at five accesses each, plus the final root test.
        assert_eq!(total(&sites), 11);
    }

    #[test]
    fn quick_find_relabels_with_q_label() {
        let mut sites = Sites::new(4);
        assert_eq!(quick_find(&mut sites, 0, 1), Outcome::Merged);
        assert_eq!(quick_find(&mut sites, 1, 2), Outcome::Merged);
        assert_eq!(sites.as_slice(), &[2, 2, 2, 3]);
        assert_eq!(quick_find(&mut sites, 0, 2), Outcome::AlreadyConnected);
    }

    #[test]
    fn quick_union_links_p_root_under_q_root() {
        let mut sites = Sites::new(3);
        quick_union(&mut sites, 0, 1);
        assert_eq!(sites.as_slice(), &[1, 1, 2]);
        quick_union(&mut sites, 2, 0);
        assert_eq!(sites.as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn link_by_size_tie_keeps_p_root() {
        let mut sites = Sites::new(2);
        let mut sizes = vec![1, 1];
        assert_eq!(link_by_size(&mut sites, &mut sizes, 0, 1), 0);
        assert_eq!(sites.as_slice(), &[0, 0]);
        assert_eq!(sizes[0], 2);
    }

    #[test]
    fn link_by_size_smaller_goes_under_larger() {
        let mut sites = Sites::new(3);
        let mut sizes = vec![1, 2, 1];
        assert_eq!(link_by_size(&mut sites, &mut sizes, 0, 1), 1);
        assert_eq!(sites.as_slice()[0], 1);
        assert_eq!(sizes[1], 3);
    }

    #[test]
    fn compress_costs_three_per_hop_plus_one() {
        // 0 -> 1 -> 2 -> 3 (root)
        let mut sites = sites_from(&[1, 2, 3, 3]);
        compress(&mut sites, 0, 3);
        assert_eq!(sites.as_slice(), &[3, 3, 3, 3]);
        assert_eq!(total(&sites), 3 * 3 + 1);
    }
}
