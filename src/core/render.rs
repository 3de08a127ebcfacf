//! Pure tally-mark renderer.
//!
//! Maps a non-negative count to descriptor bundles in the classic convention:
//! four plain strokes crossed by a fifth closing stroke per bundle, plus a
//! partial bundle for the remainder. No I/O, no shared state; identical
//! inputs always produce the identical descriptor sequence.

pub const BUNDLE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    /// A vertical stroke.
    Plain,
    /// The fifth, crossing stroke completing a bundle; rendered in the
    /// group color.
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub kind: MarkKind,
    pub color: Option<String>,
    pub newly_added: bool,
}

impl Mark {
    fn plain() -> Self {
        Self {
            kind: MarkKind::Plain,
            color: None,
            newly_added: false,
        }
    }

    fn closing(color: &str) -> Self {
        Self {
            kind: MarkKind::Closing,
            color: Some(color.to_string()),
            newly_added: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub marks: Vec<Mark>,
}

impl Bundle {
    pub fn is_full(&self) -> bool {
        self.marks.len() == BUNDLE_SIZE
    }
}

/// Render `count` as full bundles of five plus an optional partial bundle.
///
/// With `animate_last`, exactly one mark is flagged as newly added: the
/// closing mark of the last full bundle when the remainder is zero and at
/// least one full bundle exists, otherwise the last plain mark of the
/// partial bundle. A count of zero yields no bundles and no flag.
pub fn render_marks(count: usize, color: &str, animate_last: bool) -> Vec<Bundle> {
    let full_bundles = count / BUNDLE_SIZE;
    let remainder = count % BUNDLE_SIZE;

    let mut bundles = Vec::with_capacity(full_bundles + usize::from(remainder > 0));
    for _ in 0..full_bundles {
        let mut marks = vec![Mark::plain(); BUNDLE_SIZE - 1];
        marks.push(Mark::closing(color));
        bundles.push(Bundle { marks });
    }
    if remainder > 0 {
        bundles.push(Bundle {
            marks: vec![Mark::plain(); remainder],
        });
    }

    if animate_last
        && count > 0
        && let Some(mark) = bundles.last_mut().and_then(|b| b.marks.last_mut())
    {
        mark.newly_added = true;
    }

    bundles
}

/// Number of full (closed) bundles in a rendered sequence.
pub fn full_bundle_count(bundles: &[Bundle]) -> usize {
    bundles.iter().filter(|b| b.is_full()).count()
}
