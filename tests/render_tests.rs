use rtally::core::render::{BUNDLE_SIZE, MarkKind, full_bundle_count, render_marks};

#[test]
fn bundle_arithmetic_holds_for_small_counts() {
    for n in 0..=17 {
        let bundles = render_marks(n, "#1e90ff", false);
        assert_eq!(full_bundle_count(&bundles), n / BUNDLE_SIZE, "count {}", n);

        let remainder = n % BUNDLE_SIZE;
        let partial: Vec<_> = bundles.iter().filter(|b| !b.is_full()).collect();
        if remainder == 0 {
            assert!(partial.is_empty(), "count {} should have no partial", n);
        } else {
            assert_eq!(partial.len(), 1);
            assert_eq!(partial[0].marks.len(), remainder);
            assert!(
                partial[0].marks.iter().all(|m| m.kind == MarkKind::Plain),
                "partial bundle of count {} must be all plain marks",
                n
            );
        }

        let total: usize = bundles.iter().map(|b| b.marks.len()).sum();
        assert_eq!(total, n);
    }
}

#[test]
fn full_bundles_are_four_plain_plus_one_closing() {
    let bundles = render_marks(10, "#27ae60", false);
    assert_eq!(bundles.len(), 2);
    for bundle in &bundles {
        let plain = bundle
            .marks
            .iter()
            .filter(|m| m.kind == MarkKind::Plain)
            .count();
        let closing: Vec<_> = bundle
            .marks
            .iter()
            .filter(|m| m.kind == MarkKind::Closing)
            .collect();
        assert_eq!(plain, 4);
        assert_eq!(closing.len(), 1);
        assert_eq!(closing[0].color.as_deref(), Some("#27ae60"));
        assert_eq!(bundle.marks.last().map(|m| m.kind), Some(MarkKind::Closing));
    }
}

#[test]
fn renderer_is_deterministic() {
    let a = render_marks(13, "#c62fa0", true);
    let b = render_marks(13, "#c62fa0", true);
    assert_eq!(a, b);
}

#[test]
fn animate_last_flags_last_plain_mark_of_partial_bundle() {
    let bundles = render_marks(6, "#1e90ff", true);
    assert_eq!(bundles.len(), 2);

    let flagged: Vec<(usize, usize)> = bundles
        .iter()
        .enumerate()
        .flat_map(|(bi, b)| {
            b.marks
                .iter()
                .enumerate()
                .filter(|(_, m)| m.newly_added)
                .map(move |(mi, _)| (bi, mi))
        })
        .collect();
    assert_eq!(flagged, vec![(1, 0)]);
    assert_eq!(bundles[1].marks[0].kind, MarkKind::Plain);
}

#[test]
fn animate_last_flags_closing_mark_when_remainder_is_zero() {
    let bundles = render_marks(10, "#1e90ff", true);
    assert_eq!(bundles.len(), 2);

    let last = bundles[1].marks.last().expect("closing mark");
    assert_eq!(last.kind, MarkKind::Closing);
    assert!(last.newly_added);

    let flagged = bundles
        .iter()
        .flat_map(|b| b.marks.iter())
        .filter(|m| m.newly_added)
        .count();
    assert_eq!(flagged, 1);
}

#[test]
fn count_zero_renders_nothing_even_when_animated() {
    assert!(render_marks(0, "#1e90ff", false).is_empty());
    assert!(render_marks(0, "#1e90ff", true).is_empty());
}

#[test]
fn without_animate_no_mark_is_flagged() {
    let bundles = render_marks(12, "#ffeb3b", false);
    assert!(
        bundles
            .iter()
            .flat_map(|b| b.marks.iter())
            .all(|m| !m.newly_added)
    );
}
