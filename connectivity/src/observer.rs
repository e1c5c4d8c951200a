use crate::variant::Outcome;

/// Everything an observer sees after one successful `connect`.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    pub pair: (usize, usize),
    pub outcome: Outcome,
    /// The settled `id` array.
    pub ids: &'a [usize],
    /// The size array, for weighted variants only. Entries are meaningful
    /// only at roots.
    pub sizes: Option<&'a [usize]>,
    /// Accesses spent since the previous report.
    pub accesses: u64,
}

/// Per-step reporting hook, called synchronously after every `connect`.
pub trait Observer {
    fn observe(&mut self, step: &Step<'_>);
}

/// The default observer: discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Observer for Silent {
    #[inline]
    fn observe(&mut self, _step: &Step<'_>) {}
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn observe(&mut self, step: &Step<'_>) {
        (**self).observe(step);
    }
}

impl<O: Observer + ?Sized> Observer for Box<O> {
    fn observe(&mut self, step: &Step<'_>) {
        (**self).observe(step);
    }
}

/// Owned copy of a [`Step`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    pub p: usize,
    pub q: usize,
    pub outcome: Outcome,
    pub ids: Vec<usize>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sizes: Option<Vec<usize>>,
    pub accesses: u64,
}

impl From<&Step<'_>> for StepRecord {
    fn from(step: &Step<'_>) -> Self {
        StepRecord {
            p: step.pair.0,
            q: step.pair.1,
            outcome: step.outcome,
            ids: step.ids.to_vec(),
            sizes: step.sizes.map(<[usize]>::to_vec),
            accesses: step.accesses,
        }
    }
}

/// Observer that keeps a [`StepRecord`] for every step.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub steps: Vec<StepRecord>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<Outcome> {
        self.steps.iter().map(|s| s.outcome).collect()
    }
}

impl Observer for Recorder {
    fn observe(&mut self, step: &Step<'_>) {
        self.steps.push(StepRecord::from(step));
    }
}
