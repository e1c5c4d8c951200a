/// The primary `id` array with access accounting.
///
/// Every `get` and every `set` counts as one access. A read-modify-write
/// such as `id[x] = id[id[x]]` is three calls and therefore three accesses.
#[derive(Debug, Clone)]
pub struct Sites {
    id: Vec<usize>,
    accesses: Accesses,
}

/// Cumulative access total plus the mark of the last report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accesses {
    total: u64,
    reported: u64,
}

impl Accesses {
    /// Accesses since the counter was created or reset.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Accesses since the last call to [`Accesses::take_delta`].
    pub fn delta(&self) -> u64 {
        self.total - self.reported
    }

    /// Return the pending delta and start a new reporting window.
    pub fn take_delta(&mut self) -> u64 {
        let delta = self.delta();
        self.reported = self.total;
        delta
    }

    fn tick(&mut self) {
        self.total += 1;
    }
}

impl Sites {
    /// `n` singletons: `id[i] = i`, counters zeroed.
    pub fn new(n: usize) -> Self {
        Self {
            id: (0..n).collect(),
            accesses: Accesses::default(),
        }
    }

    pub fn reset(&mut self, n: usize) {
        self.id.clear();
        self.id.extend(0..n);
        self.accesses = Accesses::default();
    }

    pub fn len(&self) -> usize {
        self.id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }

    /// Counted read of `id[i]`.
    #[inline]
    pub fn get(&mut self, i: usize) -> usize {
        self.accesses.tick();
        self.id[i]
    }

    /// Counted write of `id[i]`.
    #[inline]
    pub fn set(&mut self, i: usize, value: usize) {
        self.accesses.tick();
        self.id[i] = value;
    }

    /// Uncounted view of the whole array, for observers and diagnostics.
    pub fn as_slice(&self) -> &[usize] {
        &self.id
    }

    pub fn accesses(&self) -> &Accesses {
        &self.accesses
    }

    pub fn accesses_mut(&mut self) -> &mut Accesses {
        &mut self.accesses
    }
}
