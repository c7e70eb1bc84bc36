//! Example: rod cutting with both engines.
//!
//! Run with:
//! `cargo run --example rod_cutting`

use rod_cut::{cross_check, EngineKind};

fn main() {
    let cases: [(&str, Vec<u32>); 3] = [
        ("Textbook prices", vec![2, 5, 7, 8, 10]),
        ("Selling whole is best", vec![1, 3, 8]),
        ("Unit pieces are best", vec![3, 5, 6, 7]),
    ];

    for (name, prices) in cases {
        let length = prices.len() as i64;
        println!("{name}: length {length}, prices {prices:?}");

        for kind in EngineKind::ALL {
            match kind.solve(length, &prices) {
                Ok(r) => println!(
                    "  {kind:>5}: profit {}, cuts {:?}, cut points {}",
                    r.max_profit, r.cuts, r.cut_count
                ),
                Err(err) => println!("  {kind:>5}: {err}"),
            }
        }

        match cross_check(length, &prices) {
            Ok(check) if check.agree() => println!("  engines agree"),
            Ok(_) => println!("  engines DISAGREE"),
            Err(err) => println!("  rejected: {err}"),
        }
    }
}
