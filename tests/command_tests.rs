//! End-to-end tests of the text command stream

use binomial_forest::command::{Script, ScriptError};
use binomial_forest::ElementId;

fn replay(input: &str) -> Result<String, ScriptError> {
    let script: Script = input.parse()?;
    let mut out = Vec::new();
    script.run(&mut out)?;
    Ok(String::from_utf8(out).expect("output is ascii"))
}

#[test]
fn test_one_based_heaps() {
    let input = "
        2 12
        0 1 5
        0 1 3
        0 2 8
        4 1
        1 2 1
        4 1
        4 2
        3 1 1
        4 1
        2 2
        4 1
        5 1
    ";
    assert_eq!(replay(input).unwrap(), "3\n3\n-1\n1\n1\n");
}

#[test]
fn test_delete_and_extract() {
    let input = "
        1 9
        0 0 7
        0 0 2
        0 0 9
        0 0 4
        2 2
        4 0
        5 0
        4 0
        2 2
    ";
    assert_eq!(replay(input).unwrap(), "4\n7\n");
}

#[test]
fn test_update_of_deleted_identity_is_ignored() {
    let input = "
        1 6
        0 1 10
        0 1 20
        5 1
        3 1 1
        4 1
        2 1
    ";
    assert_eq!(replay(input).unwrap(), "20\n");
}

#[test]
fn test_self_move_keeps_elements() {
    let input = "1 4 0 1 6 0 1 2 1 1 1 4 1";
    assert_eq!(replay(input).unwrap(), "2\n");
}

#[test]
fn test_trailing_input_is_ignored() {
    assert_eq!(replay("1 1 4 0 garbage").unwrap(), "-1\n");
}

#[test]
fn test_truncated_stream_is_rejected() {
    let err = replay("3 2 0 1 5 0 1").unwrap_err();
    assert_eq!(err.to_string(), "input ended while reading value");
}

#[test]
fn test_final_state_is_consistent() {
    let script: Script = "3 7 0 1 9 0 2 8 0 3 7 1 1 2 1 3 2 3 2 7 5 2"
        .parse()
        .unwrap();
    let heaps = script.run(&mut std::io::sink()).unwrap();
    // Element 2 was lowered to tie with element 3 and wins the tie on extraction.
    assert_eq!(heaps.len(2), Ok(2));
    assert_eq!(heaps.get_min(2), Ok(Some(7)));
    assert!(!heaps.contains(ElementId(2)));
    assert!(heaps.contains(ElementId(3)));
    assert!(heaps.is_empty(1).unwrap() && heaps.is_empty(3).unwrap());
    assert_eq!(heaps.check_invariants(), Ok(()));
}
