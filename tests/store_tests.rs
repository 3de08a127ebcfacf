//! Store document behavior: defaults, full-replacement writes and the
//! revision-stamped compare-and-swap.

use rtally::core::username::{FALLBACK_TITLE, UsernameLogic};
use rtally::errors::AppError;
use rtally::models::group::Group;
use rtally::store::Store;
use std::env;
use std::fs;
use std::path::PathBuf;

fn test_store(name: &str) -> Store {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtally_store.json", name));
    fs::remove_file(&path).ok();
    Store::new(&path.to_string_lossy())
}

#[test]
fn missing_file_reads_as_defaults() {
    let store = test_store("defaults");
    let doc = store.read().unwrap();
    assert_eq!(doc.revision, 0);
    assert!(doc.username.is_none());
    assert!(doc.tally_groups.is_empty());
    assert_eq!(doc.next_group_id, 1);
}

#[test]
fn update_bumps_the_revision_on_every_write() {
    let store = test_store("revision_bump");
    store
        .update(|doc| {
            doc.username = Some("Ada".to_string());
            Ok(())
        })
        .unwrap();
    store
        .update(|doc| {
            doc.tally_groups
                .push(Group::new(doc.next_group_id, "A".into(), "#1e90ff".into()));
            doc.next_group_id += 1;
            Ok(())
        })
        .unwrap();

    let doc = store.read().unwrap();
    assert_eq!(doc.revision, 2);
    assert_eq!(doc.username.as_deref(), Some("Ada"));
    assert_eq!(doc.tally_groups.len(), 1);
}

#[test]
fn commit_rejects_a_stale_base_revision() {
    let store = test_store("stale_commit");

    // Base snapshot at revision 0.
    let stale = store.read().unwrap();

    // Someone else wins the race and moves the store to revision 1.
    store
        .update(|doc| {
            doc.username = Some("First".to_string());
            Ok(())
        })
        .unwrap();

    // Replaying the stale snapshot must be rejected, not silently win.
    let mut lost = stale.clone();
    lost.username = Some("Second".to_string());
    let err = store.commit(lost, stale.revision).unwrap_err();
    assert!(matches!(err, AppError::StaleWrite { base: 0, found: 1 }));

    assert_eq!(store.read().unwrap().username.as_deref(), Some("First"));
}

#[test]
fn update_survives_a_conflicting_write_between_read_and_commit() {
    let store = test_store("retry");
    let racer = Store::new(&store.path().to_string_lossy());

    let mut raced = false;
    store
        .update(|doc| {
            // Sneak in a conflicting write on the first attempt only; the
            // retry re-reads and must then see the racer's group.
            if !raced {
                raced = true;
                racer
                    .update(|other| {
                        other
                            .tally_groups
                            .push(Group::new(1, "Racer".into(), "#f44336".into()));
                        Ok(())
                    })
                    .unwrap();
            }
            doc.username = Some("Calm".to_string());
            Ok(())
        })
        .unwrap();

    let doc = store.read().unwrap();
    assert_eq!(doc.username.as_deref(), Some("Calm"));
    assert_eq!(doc.tally_groups.len(), 1, "racer's write must survive");
}

#[test]
fn username_header_prompts_once_and_persists_non_empty_answers() {
    let store = test_store("username_prompt");

    let mut asked = 0;
    let mut ask = || {
        asked += 1;
        Some("  Grace  ".to_string())
    };
    let header = UsernameLogic::header(&store, Some(&mut ask)).unwrap();
    assert_eq!(header, "Grace's Tally Marks");
    assert_eq!(asked, 1);
    assert_eq!(store.read().unwrap().username.as_deref(), Some("Grace"));

    // Persisted now: no further prompting.
    let mut ask_again = || panic!("must not prompt once persisted");
    let header = UsernameLogic::header(&store, Some(&mut ask_again)).unwrap();
    assert_eq!(header, "Grace's Tally Marks");
}

#[test]
fn username_header_falls_back_on_empty_answer_without_saving() {
    let store = test_store("username_fallback");

    let mut ask = || Some("   ".to_string());
    let header = UsernameLogic::header(&store, Some(&mut ask)).unwrap();
    assert_eq!(header, FALLBACK_TITLE);
    assert!(store.read().unwrap().username.is_none());

    let header = UsernameLogic::header(&store, None).unwrap();
    assert_eq!(header, FALLBACK_TITLE);
}
