extern crate sepa_pnk;

use sepa_pnk::*;

// Pass `--debug` to also log construction and exhaustion of each enumerator.
pub fn main() {
    if std::env::args().any(|arg| arg == "--debug") {
        init_debug_log();
    } else {
        init_default_log();
    }

    let mut benchmark = Benchmark::named("P(n,k) enumeration");

    for &(n, k) in &[(10, 3), (10, 5), (10, 7), (9, 9)] {
        let pnk = Pnk::new(n, k).unwrap();
        let mut count = 0;
        let _ = benchmark.bench(&format!("P({}, {})", n, k), || {
            count = pnk.iter().count();
        });
        // Every selection is reached exactly once.
        assert_eq!(Some(count), pnk.len());
    }

    benchmark.write_report(&mut std::io::stdout()).unwrap();
}
