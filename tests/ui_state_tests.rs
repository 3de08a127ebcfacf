use rtally::ui::state::{LabelEdit, PickerState};

#[test]
fn begin_edit_prefills_the_current_label() {
    let session = LabelEdit::begin("Chores");
    assert_eq!(
        session,
        LabelEdit::Editing {
            draft: "Chores".to_string()
        }
    );
}

#[test]
fn commit_yields_the_trimmed_draft() {
    let committed = LabelEdit::begin("Old").type_draft("  New name  ").commit();
    assert_eq!(committed.as_deref(), Some("New name"));
}

#[test]
fn commit_of_a_whitespace_draft_yields_nothing() {
    assert_eq!(LabelEdit::begin("Old").type_draft("   ").commit(), None);
}

#[test]
fn cancel_returns_to_display_and_discards_the_draft() {
    let session = LabelEdit::begin("Old").type_draft("half-typed");
    assert_eq!(session.cancel(), LabelEdit::Display);
}

#[test]
fn typing_in_display_state_is_a_no_op() {
    assert_eq!(LabelEdit::Display.type_draft("ignored"), LabelEdit::Display);
}

#[test]
fn picker_toggles_between_hidden_and_visible() {
    let picker = PickerState::default();
    assert_eq!(picker, PickerState::Hidden);
    assert_eq!(picker.toggle(), PickerState::Visible);
    assert_eq!(picker.toggle().toggle(), PickerState::Hidden);
}
