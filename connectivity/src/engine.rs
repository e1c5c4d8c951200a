use crate::error::{DomainError, InvariantViolation};
use crate::observer::{Observer, Silent, Step};
use crate::sites::Sites;
use crate::variant::{Outcome, Variant};

/// A dynamic connectivity engine over the sites `0..N`.
///
/// The engine owns the `id` array, the size array (weighted variants only),
/// the access counter and the observer. `N` is fixed until the next
/// [`Engine::reset`].
///
/// The observer type is static. Use `Engine<Box<dyn Observer>>` to swap
/// observers of different types at runtime.
#[derive(Debug, Clone)]
pub struct Engine<O = Silent> {
    variant: Variant,
    sites: Sites,
    sizes: Vec<usize>,
    observer: O,
}

impl Engine<Silent> {
    /// Create an engine of `n` singletons with the no-op observer.
    pub fn new(variant: Variant, n: usize) -> Result<Self, DomainError> {
        Engine::with_observer(variant, n, Silent)
    }
}

impl<O: Observer> Engine<O> {
    /// Create an engine of `n` singletons reporting to `observer`.
    pub fn with_observer(variant: Variant, n: usize, observer: O) -> Result<Self, DomainError> {
        if n == 0 {
            return Err(DomainError::EmptyUniverse);
        }
        let mut engine = Engine {
            variant,
            sites: Sites::new(0),
            sizes: Vec::new(),
            observer,
        };
        engine.reset(n);
        Ok(engine)
    }

    /// Replace the observer, returning the previous one.
    pub fn set_observer(&mut self, observer: O) -> O {
        std::mem::replace(&mut self.observer, observer)
    }

    /// Move the current state under an observer of a different type.
    pub fn map_observer<P: Observer>(self, observer: P) -> Engine<P> {
        Engine {
            variant: self.variant,
            sites: self.sites,
            sizes: self.sizes,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of sites `N`.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Uncounted view of `id`.
    pub fn ids(&self) -> &[usize] {
        self.sites.as_slice()
    }

    /// Uncounted view of `sz`, or `None` for unweighted variants.
    pub fn sizes(&self) -> Option<&[usize]> {
        self.variant.is_weighted().then_some(self.sizes.as_slice())
    }

    pub fn total_accesses(&self) -> u64 {
        self.sites.accesses().total()
    }

    /// Back to `n` singletons with zeroed counters. An empty universe is
    /// allowed here; every subsequent `connect` then fails.
    pub fn reset(&mut self, n: usize) {
        self.sites.reset(n);
        self.sizes.clear();
        if self.variant.is_weighted() {
            self.sizes.resize(n, 1);
        }
    }

    fn check(&self, site: usize) -> Result<(), DomainError> {
        if site < self.len() {
            Ok(())
        } else {
            Err(DomainError::SiteOutOfRange {
                site,
                len: self.len(),
            })
        }
    }

    /// Connect `p` and `q`, merging their components if they differ.
    ///
    /// `p == q` is always `AlreadyConnected` and touches nothing. On error
    /// the state is unchanged and the observer is not called.
    pub fn connect(&mut self, p: usize, q: usize) -> Result<Outcome, DomainError> {
        self.check(p)?;
        self.check(q)?;

        let outcome = if p == q {
            Outcome::AlreadyConnected
        } else {
            self.variant.connect(&mut self.sites, &mut self.sizes, p, q)
        };

        let accesses = self.sites.accesses_mut().take_delta();
        let step = Step {
            pair: (p, q),
            outcome,
            ids: self.sites.as_slice(),
            sizes: self.variant.is_weighted().then_some(self.sizes.as_slice()),
            accesses,
        };
        self.observer.observe(&step);

        Ok(outcome)
    }

    /// Root of `i` (its label for quick-find). Uncounted and non-mutating.
    pub fn find_root(&self, i: usize) -> Result<usize, DomainError> {
        self.check(i)?;
        Ok(self.root_of(i))
    }

    fn root_of(&self, mut i: usize) -> usize {
        let id = self.sites.as_slice();
        if !self.variant.is_forest() {
            return id[i];
        }
        while id[i] != i {
            i = id[i];
        }
        i
    }

    /// Whether `p` and `q` are in the same component. Uncounted.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, DomainError> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.root_of(p) == self.root_of(q))
    }

    /// Parent hops from `i` to its root; always 0 for quick-find.
    pub fn depth(&self, mut i: usize) -> Result<usize, DomainError> {
        self.check(i)?;
        if !self.variant.is_forest() {
            return Ok(0);
        }
        let id = self.sites.as_slice();
        let mut hops = 0;
        while id[i] != i {
            i = id[i];
            hops += 1;
        }
        Ok(hops)
    }

    /// Largest [`Engine::depth`] over all sites.
    pub fn max_depth(&self) -> usize {
        (0..self.len())
            .filter_map(|i| self.depth(i).ok())
            .max()
            .unwrap_or(0)
    }

    /// Number of components.
    pub fn component_count(&self) -> usize {
        let id = self.sites.as_slice();
        if self.variant.is_forest() {
            return id.iter().enumerate().filter(|&(i, &p)| i == p).count();
        }
        let mut seen = vec![false; id.len()];
        let mut count = 0;
        for &label in id {
            if !seen[label] {
                seen[label] = true;
                count += 1;
            }
        }
        count
    }

    /// Check every structural invariant, returning the first violation.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let id = self.sites.as_slice();
        let len = id.len();

        for (site, &value) in id.iter().enumerate() {
            if value >= len {
                return Err(InvariantViolation::SiteOutOfRange { site, value, len });
            }
        }
        if !self.variant.is_forest() {
            return Ok(());
        }

        let mut members = vec![0usize; len];
        for site in 0..len {
            let mut x = site;
            let mut hops = 0;
            while id[x] != x {
                x = id[x];
                hops += 1;
                if hops > len {
                    return Err(InvariantViolation::Cycle { site });
                }
            }
            members[x] += 1;
        }

        if self.variant.is_weighted() {
            let mut sum = 0;
            for root in (0..len).filter(|&r| id[r] == r) {
                let recorded = self.sizes[root];
                if recorded != members[root] {
                    return Err(InvariantViolation::SizeMismatch {
                        root,
                        recorded,
                        actual: members[root],
                    });
                }
                sum += recorded;
            }
            if sum != len {
                return Err(InvariantViolation::SizeSum { sum, len });
            }
        }
        Ok(())
    }
}
