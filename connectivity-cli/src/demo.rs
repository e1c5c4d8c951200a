//! The textbook exercise inputs, replayed on the variants they illustrate.

use connectivity::Variant;

/// Figure 1.1.
const FIG_1_1: &[(usize, usize)] = &[(0, 2), (1, 4), (2, 5), (3, 6), (0, 4), (6, 0), (1, 3)];

/// Figures 1.7 and 1.9 share this input.
const FIG_1_7: &[(usize, usize)] = &[
    (3, 4),
    (4, 9),
    (8, 0),
    (2, 3),
    (5, 6),
    (5, 9),
    (7, 3),
    (8, 4),
    (6, 1),
];

/// Figure 1.8.
const FIG_1_8: &[(usize, usize)] = &[
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    (8, 9),
    (0, 2),
    (4, 6),
    (0, 4),
    (6, 8),
];

pub const SITES: usize = 10;

pub struct Exercise {
    pub title: &'static str,
    pub variant: Variant,
    pub pairs: &'static [(usize, usize)],
}

pub const EXERCISES: &[Exercise] = &[
    Exercise {
        title: "Quick-find (fig. 1.1)",
        variant: Variant::QuickFind,
        pairs: FIG_1_1,
    },
    Exercise {
        title: "Quick-union (fig. 1.1)",
        variant: Variant::QuickUnion,
        pairs: FIG_1_1,
    },
    Exercise {
        title: "Weighted quick-union (fig. 1.7)",
        variant: Variant::WeightedQuickUnion,
        pairs: FIG_1_7,
    },
    Exercise {
        title: "Weighted quick-union (fig. 1.8)",
        variant: Variant::WeightedQuickUnion,
        pairs: FIG_1_8,
    },
    Exercise {
        title: "Weighted quick-union (fig. 1.1)",
        variant: Variant::WeightedQuickUnion,
        pairs: FIG_1_1,
    },
    Exercise {
        title: "Weighted quick-union, path halving (fig. 1.1)",
        variant: Variant::WeightedHalving,
        pairs: FIG_1_1,
    },
    Exercise {
        title: "Weighted quick-union, full path compression (fig. 1.9)",
        variant: Variant::WeightedFullCompression,
        pairs: FIG_1_7,
    },
];
