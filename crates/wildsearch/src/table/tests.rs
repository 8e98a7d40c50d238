use super::*;

#[test]
fn test_table_new() {
    let table = Table::new(3, 7);
    assert_eq!(table.row(0), &[7, 7, 7]);
}

#[test]
fn test_table_first_row_has_no_predecessor() {
    let mut table = Table::new(2, 0);
    let (prev, cur) = table.rows(0);
    assert!(prev.is_none());
    assert_eq!(cur, &mut [0, 0]);
}

#[test]
fn test_table_advance() {
    let mut table = Table::new(3, 0);

    let (_, cur) = table.rows(0);
    cur.copy_from_slice(&[1, 2, 3]);

    table.advance(9);
    assert_eq!(table.row(0), &[1, 2, 3]);
    assert_eq!(table.row(1), &[9, 9, 9]);

    let (prev, cur) = table.rows(1);
    assert_eq!(prev, Some(&[1, 2, 3][..]));
    cur[2] = 4;

    table.advance(0);
    assert_eq!(table.row(1), &[9, 9, 4]);
    assert_eq!(table.row(2), &[0, 0, 0]);
}

#[test]
fn test_table_advance_resets_reused_row() {
    let mut table = Table::new(1, String::new());
    table.rows(0).1[0] = "a".into();
    table.advance(String::new());
    table.rows(1).1[0] = "b".into();
    table.advance(String::from("-"));
    assert_eq!(table.row(1), &["b".to_string()]);
    assert_eq!(table.row(2), &["-".to_string()]);
}

#[test]
#[should_panic(expected = "row 0 is out of the window at row 2")]
fn test_table_stale_row() {
    let mut table = Table::new(1, 0);
    table.advance(0);
    table.advance(0);
    table.row(0);
}

#[test]
#[should_panic(expected = "row 3 is out of the window at row 1")]
fn test_table_future_row() {
    let mut table = Table::new(1, 0);
    table.advance(0);
    table.row(3);
}

#[test]
#[should_panic(expected = "row 0 is not the current row")]
fn test_table_write_previous_row() {
    let mut table = Table::new(1, 0);
    table.advance(0);
    table.rows(0);
}
