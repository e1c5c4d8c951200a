//! Plain-text per-step trace, one line per `connect`.

use std::io::{self, Write};

use connectivity::{Observer, Outcome, Step};

/// Render one step as
/// `input p,q<TAB>merge<TAB>id: 2 1 2 ...<TAB>accesses: 15`.
/// Weighted variants show each cell as `id(sz)`.
pub fn format_step(step: &Step<'_>) -> String {
    let verdict = match step.outcome {
        Outcome::AlreadyConnected => "found",
        Outcome::Merged => "merge",
    };
    let mut line = format!("input {},{}\t{verdict}\tid:", step.pair.0, step.pair.1);
    for (i, id) in step.ids.iter().enumerate() {
        match step.sizes {
            Some(sizes) => line.push_str(&format!(" {id}({})", sizes[i])),
            None => line.push_str(&format!(" {id}")),
        }
    }
    line.push_str(&format!("\taccesses: {}", step.accesses));
    line
}

/// Observer that writes [`format_step`] lines to `out`.
///
/// The first write error is kept and returned by [`TextTrace::finish`];
/// later steps are dropped.
pub struct TextTrace<W: Write> {
    out: W,
    failed: Option<io::Error>,
}

impl<W: Write> TextTrace<W> {
    pub fn new(out: W) -> Self {
        Self { out, failed: None }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.failed.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> Observer for TextTrace<W> {
    fn observe(&mut self, step: &Step<'_>) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{}", format_step(step)) {
            self.failed = Some(e);
        }
    }
}
