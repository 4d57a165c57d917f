use exact_linalg::dense_store::SquareMatrix;

fn main() {
    env_logger::init();

    let a = SquareMatrix::from_data(vec![1_i64, 2, 3, 4]).expect("four entries fill a 2x2 matrix");
    let b = SquareMatrix::from_data(vec![5_i64, 4, 3, 2]).expect("four entries fill a 2x2 matrix");
    let c = SquareMatrix::from_data(vec![9_i64, 1, 1, 0]).expect("four entries fill a 2x2 matrix");
    let d = SquareMatrix::from_data(vec![3_i64, 2, 1, 1]).expect("four entries fill a 2x2 matrix");

    // `!` transposes
    let combined = !a.clone() + b.clone() * 4 - !c.clone() * 5;
    println!("{combined}");

    let mut matrices = vec![a, b, c, d];
    matrices.sort_by_key(SquareMatrix::determinant);
    for matrix in &matrices {
        println!("{matrix}");
    }
}
