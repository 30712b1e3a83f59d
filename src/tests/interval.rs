use crate::*;

#[test]
fn interval_forms_select_expected_blocks() {
    let a = Matrix::from(&[
        [11.0, 12.0, 13.0, 14.0],
        [21.0, 22.0, 23.0, 24.0],
        [31.0, 32.0, 33.0, 34.0],
    ]);

    // every range form addressed against the same matrix
    let cases: Vec<(Interval, &[usize])> = vec![
        (Interval::from(1), &[1]),
        (Interval::from(0..2), &[0, 1]),
        (Interval::from(0..=2), &[0, 1, 2]),
        (Interval::from(..2), &[0, 1]),
        (Interval::from(..=1), &[0, 1]),
        (Interval::from(1..), &[1, 2]),
        (Interval::from(..), &[0, 1, 2]),
    ];

    for (iv, rows) in cases {
        let block = a.block(iv, ..).unwrap();
        assert_eq!(block.nrows(), rows.len());
        for (bi, &ai) in rows.iter().enumerate() {
            assert_eq!(block.row_slice(bi), a.row_slice(ai));
        }
    }
}

#[test]
fn interval_out_of_range_is_reported() {
    let a = Matrix::<f64>::zeros((3, 4));

    assert_eq!(a.block(3, ..), Err(MatrixError::IndexOutOfBounds));
    assert_eq!(a.block(.., 0..=4), Err(MatrixError::IndexOutOfBounds));
    assert_eq!(a.block(2..=3, ..), Err(MatrixError::IndexOutOfBounds));

    // empty selections are rejected rather than yielding 0-size output
    assert_eq!(a.block(1..1, ..), Err(MatrixError::IndexOutOfBounds));
    assert_eq!(a.block(Interval::EMPTY, ..), Err(MatrixError::IndexOutOfBounds));
}

#[test]
fn slicing_roundtrip_preserves_data() {
    let mut a = Matrix::from(&[
        [1.0, 2.0, 3.0], //
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);
    let orig = a.clone();

    // read a block out and write it straight back
    let b = a.block(0..=1, 1..=2).unwrap();
    a.set_block(0..=1, 1..=2, &b).unwrap();
    assert_eq!(a, orig);

    // move a block elsewhere and verify both read paths agree
    let b = a.block(.., 0..=1).unwrap();
    a.set_block(.., 1..=2, &b).unwrap();
    assert_eq!(a.col(1).unwrap(), orig.col(0).unwrap());
    assert_eq!(a.col(2).unwrap(), orig.col(1).unwrap());
}
