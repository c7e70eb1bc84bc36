use rod_cut::{cross_check, solve_memo, solve_table, EngineKind, SolveResult};

#[test]
fn base_case_single_piece() {
    for kind in EngineKind::ALL {
        let r = kind.solve(1, &[9u32]).unwrap();
        assert_eq!(r, SolveResult::new(9, vec![1]));
        assert_eq!(r.cut_count, 0);
    }
}

#[test]
fn selling_whole_is_optimal() {
    for kind in EngineKind::ALL {
        let r = kind.solve(3, &[1u32, 3, 8]).unwrap();
        assert_eq!(r.max_profit, 8);
        assert_eq!(r.cuts, vec![3]);
        assert_eq!(r.cut_count, 0);
    }
}

#[test]
fn uniform_unit_pieces() {
    let prices = [3u32, 5, 6, 7];
    for kind in EngineKind::ALL {
        let r = kind.solve(4, &prices).unwrap();
        assert_eq!(r.max_profit, 12);
        assert_eq!(r.cuts.iter().sum::<usize>(), 4);
        assert!(r.is_consistent_with(4, &prices));
    }
}

#[test]
fn textbook_prices() {
    let prices = [2u32, 5, 7, 8, 10];
    let memo = solve_memo(5, &prices).unwrap();
    let table = solve_table(5, &prices).unwrap();
    assert_eq!(memo, table);
    assert_eq!(memo.max_profit, 12);
    // f(4) = [2, 2] is extended by the smallest first piece that reaches 12.
    assert_eq!(memo.cuts, vec![2, 2, 1]);
    assert_eq!(memo.cut_count, 2);
    assert!(memo.is_consistent_with(5, &prices));
}

#[test]
fn clrs_price_table() {
    let prices = [1u64, 5, 8, 9, 10, 17, 17, 20, 24, 30];
    let expected = [1u64, 5, 8, 10, 13, 17, 18, 22, 25, 30];
    for (n, &want) in expected.iter().enumerate() {
        let len = n + 1;
        let check = cross_check(len as i64, &prices[..len]).unwrap();
        assert!(check.agree(), "engines disagree at length {len}");
        assert_eq!(check.memo.max_profit, want, "length {len}");
    }
}

#[test]
fn ties_prefer_smallest_first_piece() {
    // At length 3, first pieces 1, 2 and 3 all reach 6.
    let prices = [1u32, 5, 6];
    for kind in EngineKind::ALL {
        let r = kind.solve(3, &prices).unwrap();
        assert_eq!(r.max_profit, 6);
        assert_eq!(r.cuts, vec![2, 1]);
        assert_eq!(r.cuts.last(), Some(&1));
    }

    // Selling whole ties with two unit pieces; the unit piece is scanned first.
    for kind in EngineKind::ALL {
        let r = kind.solve(2, &[2u32, 4]).unwrap();
        assert_eq!(r.cuts, vec![1, 1]);
        assert_eq!(r.cut_count, 1);
    }
}

#[test]
fn float_prices_agree_bitwise() {
    let prices = [0.1f64, 0.25, 0.3, 0.55, 0.6, 0.8];
    let check = cross_check(6, &prices).unwrap();
    assert_eq!(
        check.memo.max_profit.to_bits(),
        check.table.max_profit.to_bits()
    );
    assert_eq!(check.memo.cuts, check.table.cuts);
    assert!(check.memo.is_consistent_with(6, &prices));
}
