use lib::chess::Board;
use rayon::prelude::*;
use test_strategy::proptest;

fn perft(board: &Board, depth: u8) -> usize {
    let moves = board.clone().moves(board.turn);

    match depth {
        0 => 1,
        1 => moves.len(),
        d => moves
            .into_par_iter()
            .map(|m| {
                let mut next = board.clone();
                assert_eq!(next.move_piece(m).map(|_| ()), Ok(()));
                perft(&next, d - 1)
            })
            .sum(),
    }
}

#[cfg(not(tarpaulin))]
#[proptest(cases = 1)]
fn perft_expands_expected_number_of_nodes() {
    // https://www.chessprogramming.org/Perft_Results#Initial_Position
    assert_eq!(perft(&Board::default(), 1), 20);
    assert_eq!(perft(&Board::default(), 2), 400);
    assert_eq!(perft(&Board::default(), 3), 8902);

    // https://www.chessprogramming.org/Perft_Results#Position_2
    let board = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1".parse()?;
    assert_eq!(perft(&board, 1), 48);
}
