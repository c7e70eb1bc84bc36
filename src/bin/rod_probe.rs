use std::collections::BTreeMap;
use std::env;
use std::time::Instant;

use rod_cut::{cross_check, CrossCheck};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const LENGTHS: &[usize] = &[8, 16, 32, 64, 128, 256, 512, 1024, 2048];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("rod_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Rod-cutting probe: engine agreement and scaling");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each length is solved by both engines and checked for:");
    eprintln!("  • Agreement: memoized and tabulated results are identical");
    eprintln!(
        "  • Correctness: profit matches a profit-only baseline (up to length {})",
        options.verify_limit
    );
    eprintln!("  • Consistency: cuts sum to the length and their prices to the profit");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Integer price tables...");
    measurements.extend(run_scenario("integer_prices", &options, &mut sys, integer_prices));
    eprintln!();

    eprintln!("[2/2] Floating-point price tables...");
    measurements.extend(run_scenario("float_prices", &options, &mut sys, float_prices));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("rod_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_length: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;
        let mut max_length = 1024usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = value.parse()?;
            } else if arg == "--format" {
                format = next_value(&mut args, "--format")?.parse()?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_usize(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                verify_limit = parse_usize(&next_value(&mut args, "--verify-limit")?, "verify limit")?;
            } else if let Some(value) = arg.strip_prefix("--max-length=") {
                max_length = parse_usize(value, "max length")?;
            } else if arg == "--max-length" {
                max_length = parse_usize(&next_value(&mut args, "--max-length")?, "max length")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            max_length,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin rod_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest rod length checked against the baseline (default: 512)
  --max-length <N>              Largest rod length to solve (default: 1024)
  -h, --help                    Print this help message

Examples:
  cargo run --bin rod_probe
  cargo run --bin rod_probe -- --format table --max-length 2048
"
        );
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

fn parse_usize(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a positive integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    length: usize,
    pieces: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

/// Price types the probe can generate and print.
trait ProbePrice: rod_cut::Price + std::fmt::Display {}
impl ProbePrice for u64 {}
impl ProbePrice for f64 {}

fn run_scenario<P, G>(
    scenario: &'static str,
    options: &Options,
    sys: &mut System,
    generate: G,
) -> Vec<Measurement>
where
    P: ProbePrice,
    G: Fn(usize) -> Vec<P>,
{
    let lengths: Vec<usize> = LENGTHS
        .iter()
        .copied()
        .filter(|&len| len <= options.max_length)
        .collect();
    let total = lengths.len();

    lengths
        .into_iter()
        .enumerate()
        .map(|(idx, len)| {
            eprint!("      [{}/{}] Testing length {}... ", idx + 1, total, len);
            let prices = generate(len);
            let mut profit = None;
            let m = measure(scenario, len, sys, || match cross_check(len as i64, &prices) {
                Ok(check) => {
                    profit = Some(check.memo.max_profit);
                    let pieces = check.memo.piece_count();
                    (pieces, verify(&check, len, &prices, options.verify_limit))
                }
                Err(err) => (0, (VerificationStatus::Failed, Some(err.to_string()))),
            });
            eprintln!(
                "{} profit={}, pieces={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                profit.map(|p| p.to_string()).unwrap_or_else(|| "-".into()),
                m.pieces,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn verify<P: ProbePrice>(
    check: &CrossCheck<P>,
    len: usize,
    prices: &[P],
    verify_limit: usize,
) -> (VerificationStatus, Option<String>) {
    if !check.agree() {
        return (
            VerificationStatus::Failed,
            Some(format!(
                "memo {:?}/{:?} vs table {:?}/{:?}",
                check.memo.max_profit, check.memo.cuts, check.table.max_profit, check.table.cuts
            )),
        );
    }
    if !check.memo.is_consistent_with(len, prices) {
        return (
            VerificationStatus::Failed,
            Some("cuts do not reproduce length and profit".to_string()),
        );
    }
    if len > verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = baseline_profit(len, prices);
    if baseline == check.memo.max_profit {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {}", check.memo.max_profit)),
        )
    }
}

/// Profit-only tabulation with no cut tracking.
fn baseline_profit<P: ProbePrice>(len: usize, prices: &[P]) -> P {
    let mut best = vec![P::ZERO; len + 1];
    for n in 1..=len {
        for piece in 1..=n {
            let candidate = best[n - piece] + prices[piece - 1];
            if candidate > best[n] {
                best[n] = candidate;
            }
        }
    }
    best[len]
}

fn integer_prices(len: usize) -> Vec<u64> {
    (1..=len as u64)
        .map(|i| 3 * i + (i * 2_654_435_761 % 17))
        .collect()
}

fn float_prices(len: usize) -> Vec<f64> {
    (1..=len)
        .map(|i| i as f64 * 1.7 + ((i * 31) % 13) as f64 * 0.25)
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Probe Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let count = |status: VerificationStatus| {
        measurements
            .iter()
            .filter(|m| m.verification_status == status)
            .count()
    };
    let passed = count(VerificationStatus::Passed);
    let failed = count(VerificationStatus::Failed);
    let not_checked = count(VerificationStatus::NotChecked);
    let total = measurements.len().max(1);

    eprintln!("Verification Results:");
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total as f64);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total as f64);
    eprintln!(
        "  ○ Not checked (length > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total as f64
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if m.verification_status == VerificationStatus::Failed {
                eprintln!("  ✗ {} (length={})", m.scenario, m.length);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {}", detail);
                }
            }
        }
        eprintln!();
    }

    eprintln!("Timing by Scenario:");
    let mut by_scenario: BTreeMap<&str, Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        by_scenario.entry(m.scenario).or_default().push(m);
    }
    for (scenario, ms) in &by_scenario {
        let min_time = ms.iter().map(|m| m.wall_s).fold(f64::INFINITY, f64::min);
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);
        eprintln!("  {}:", scenario);
        eprintln!("    Runs: {}", ms.len());
        eprintln!("    Time: min={:.3}s, max={:.3}s", min_time, max_time);
        eprintln!("    Memory: max_delta={} KiB", max_mem);
    }
    eprintln!();

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All runs passed.");
    } else {
        eprintln!("✗ {} run(s) failed. Please review the errors above.", failed);
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, length: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> (usize, (VerificationStatus, Option<String>)),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (pieces, (status, detail)) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        length,
        pieces,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,length,pieces,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.length,
            m.pieces,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    println!(
        "{:<col1$}  {:>8}  {:>8}  {:>10}  {:>14}  {:>12}  {}",
        "scenario", "length", "pieces", "wall_s", "rss_delta_kib", "status", "detail"
    );
    println!(
        "{:-<col1$}  {:-<8}  {:-<8}  {:-<10}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>8}  {:>10.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.length,
            m.pieces,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"length\":{},\"pieces\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.length,
            m.pieces,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
