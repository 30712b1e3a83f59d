#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use matlite::{Interval, Matrix};
    use std::io::{Seek, SeekFrom};

    let a = Matrix::from(&[
        [1.0, 2.5, -3.0], //
        [0.0, 4.0, 1e-9],
    ]);

    // write the matrix to a file
    let mut file = tempfile::tempfile().unwrap();
    serde_json::to_writer(&mut file, &a).unwrap();

    // read it back and compare
    file.seek(SeekFrom::Start(0)).unwrap();
    let b: Matrix<f64> = serde_json::from_reader(&mut file).unwrap();
    assert_eq!(a, b);

    // intervals serialize alongside matrix data
    let iv = Interval::from(1..=4);
    let text = serde_json::to_string(&iv).unwrap();
    let back: Interval = serde_json::from_str(&text).unwrap();
    assert_eq!(iv, back);
}
