//! Session behavior as seen from the command language.

use hexdemo_cli::parse::parse_line;
use hexdemo_cli::session::{Panel, Reply, Session, SessionConfig, SessionError};
use hexdemo_model::{HexColor, HexItem};
use hexdemo_store::{HexStore, Outcome, StoreError};

fn session(capacity: usize) -> Session {
    Session::new(SessionConfig { capacity })
}

fn exec(session: &mut Session, line: &str) -> Result<Reply, SessionError> {
    let command = parse_line(line)
        .expect("valid command")
        .expect("non-empty command");
    session.execute(&command)
}

fn run_all(session: &mut Session, script: &str) {
    for line in script.lines() {
        if let Ok(Some(command)) = parse_line(line) {
            let _ = session.execute(&command);
        }
    }
}

#[test]
fn state_snapshot_after_mixed_operations() {
    let mut session = session(3);
    run_all(
        &mut session,
        "hex set B:blue
         array insert 0
         hex set C:green
         array insert 0
         list add
         hex null
         list add
         array remove-shift 5",
    );
    insta::assert_json_snapshot!(session.state(), @r###"
    {
      "capacity": 3,
      "array_count": 2,
      "array": [
        {
          "letter": "C",
          "color": "#00ff00"
        },
        {
          "letter": "B",
          "color": "#0000ff"
        },
        null
      ],
      "list": [
        {
          "letter": "C",
          "color": "#00ff00"
        },
        null
      ],
      "spinner": 5,
      "selected": null,
      "last_error": "array remove-shift: index 5 out of range 0..2"
    }
    "###);
}

#[test]
fn fifth_front_insert_fills_capacity_and_sixth_fails() {
    let mut session = session(5);
    exec(&mut session, "hex set A:red").unwrap();
    for _ in 0..5 {
        exec(&mut session, "array insert 0").unwrap();
    }
    let error = exec(&mut session, "array insert 0").unwrap_err();
    assert_eq!(
        error,
        SessionError::Store {
            panel: "array",
            op: "insert",
            source: StoreError::CapacityExceeded { capacity: 5 },
        }
    );
    assert_eq!(session.array().count(), 5);
}

#[test]
fn count_and_index_of_write_the_spinner() {
    let mut session = session(4);
    exec(&mut session, "array insert 0").unwrap();
    exec(&mut session, "array insert 0").unwrap();
    let reply = exec(&mut session, "array count").unwrap();
    assert_eq!(
        reply,
        Reply::Ran {
            panel: Panel::Array,
            op: "count",
            outcome: Outcome::Count(2),
        }
    );
    assert_eq!(session.spinner(), 2);

    exec(&mut session, "list index-of").unwrap();
    assert_eq!(session.spinner(), -1);
}

#[test]
fn get_replaces_the_selection() {
    let mut session = session(4);
    exec(&mut session, "hex set Q:#123456").unwrap();
    exec(&mut session, "list add").unwrap();
    exec(&mut session, "hex new").unwrap();
    exec(&mut session, "list get 0").unwrap();
    assert_eq!(
        session.selected(),
        Some(HexItem::new('Q', HexColor::rgb(0x12, 0x34, 0x56)).unwrap())
    );
    exec(&mut session, "array get 3").unwrap();
    assert_eq!(session.selected(), None);
}

#[test]
fn list_scenario_from_add_to_remove() {
    let mut session = session(4);
    run_all(
        &mut session,
        "hex set B:blue
         list add
         hex set C:green
         list add",
    );
    exec(&mut session, "list index-of").unwrap();
    assert_eq!(session.spinner(), 1);
    exec(&mut session, "list remove 0").unwrap();
    exec(&mut session, "list get 0").unwrap();
    assert_eq!(
        session.selected(),
        Some(HexItem::new('C', HexColor::rgb(0, 255, 0)).unwrap())
    );
    let reply = exec(&mut session, "list contains").unwrap();
    assert_eq!(
        reply,
        Reply::Ran {
            panel: Panel::List,
            op: "contains",
            outcome: Outcome::Flag(true),
        }
    );
}

#[test]
fn failures_leave_stores_untouched() {
    let mut session = session(2);
    exec(&mut session, "array set 1").unwrap();
    let before = session.state();
    assert!(exec(&mut session, "array get -1").is_err());
    assert!(exec(&mut session, "array insert 2").is_err());
    assert!(exec(&mut session, "list set 0").is_err());
    let after = session.state();
    assert_eq!(after.array, before.array);
    assert_eq!(after.list, before.list);
    assert_eq!(session.array().entries().len(), 2);
    assert!(session.last_error().unwrap().starts_with("list set:"));
}

#[test]
fn edit_updates_letter_and_color() {
    let mut session = session(2);
    let reply = exec(&mut session, "hex edit zulu orange").unwrap();
    let expected = HexItem::new('Z', HexColor::rgb(255, 200, 0)).unwrap();
    assert_eq!(reply, Reply::Selected(Some(expected)));
    let error = exec(&mut session, "hex edit 9").unwrap_err();
    assert!(matches!(error, SessionError::Item(_)));
    assert_eq!(session.selected(), Some(expected));
}

#[test]
fn spinner_commands_clamp() {
    let mut session = session(2);
    assert_eq!(exec(&mut session, "spin 250").unwrap(), Reply::Spinner(100));
    assert_eq!(exec(&mut session, "spin -9").unwrap(), Reply::Spinner(-1));
}

#[test]
fn removal_reports_entry_without_touching_selection() {
    let mut session = session(3);
    exec(&mut session, "hex set R:red").unwrap();
    exec(&mut session, "array insert 0").unwrap();
    exec(&mut session, "hex set G:green").unwrap();
    let removed = HexItem::new('R', HexColor::rgb(255, 0, 0)).unwrap();
    let reply = exec(&mut session, "array remove-shift 0").unwrap();
    assert_eq!(
        reply,
        Reply::Ran {
            panel: Panel::Array,
            op: "remove-shift",
            outcome: Outcome::Displaced(Some(removed)),
        }
    );
    assert_eq!(
        session.selected(),
        Some(HexItem::new('G', HexColor::rgb(0, 255, 0)).unwrap())
    );
    assert_eq!(session.array().count(), 0);
}
