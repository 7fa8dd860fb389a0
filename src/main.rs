use std::{
    env,
    fs::File,
    io::{self, BufRead, Write},
    path::Path,
    process,
    time::Instant,
};

use itertools::Itertools;
use kgcore::{
    find_kg_core, load_hypergraph, DiagonalIndex, Hypergraph, JumpIndex, KgCoreError, NaiveIndex,
    OneLevelIndex, VertexSet,
};
use tracing::error;

enum Mode {
    Stats,
    TestCore,
    TestNaive,
    TestOneLevel,
    TestJump,
    TestDiagonal,
    Benchmark,
    Interactive,
}

struct Options {
    file: String,
    mode: Mode,
    k: usize,
    g: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let arguments: Vec<String> = env::args().skip(1).collect();

    if arguments.is_empty() {
        print_usage();

        return;
    }

    let options = parse_arguments(&arguments);

    if let Err(error) = run(&options) {
        error!("{error}");
        process::exit(-1);
    }
}

fn parse_arguments(arguments: &[String]) -> Options {
    let mut options = Options {
        file: String::from("network.dat"),
        mode: Mode::Stats,
        k: 1,
        g: 1,
    };

    for argument in arguments {
        if let Some(path) = argument.strip_prefix("--file=") {
            options.file = path.to_owned();
        } else if argument == "--test-core" {
            options.mode = Mode::TestCore;
        } else if argument == "--test-naive" || argument == "--build=naive" {
            options.mode = Mode::TestNaive;
        } else if argument == "--test-one-level" || argument == "--build=one-level" {
            options.mode = Mode::TestOneLevel;
        } else if argument == "--test-jump" || argument == "--build=jump" {
            options.mode = Mode::TestJump;
        } else if argument == "--test-diagonal" || argument == "--build=diagonal" {
            options.mode = Mode::TestDiagonal;
        } else if argument == "--benchmark" {
            options.mode = Mode::Benchmark;
        } else if argument == "--interactive" {
            options.mode = Mode::Interactive;
        } else if let Some(k) = argument.strip_prefix("k=") {
            options.k = k.parse().unwrap_or(1);
        } else if let Some(g) = argument.strip_prefix("g=") {
            options.g = g.parse().unwrap_or(1);
        } else {
            eprintln!("Ignoring unknown argument {argument:?}");
        }
    }

    options
}

fn print_usage() {
    println!("Usage: kgcore --file=PATH MODE");
    println!();
    println!("Modes:");
    println!("  --test-core [k=K] [g=G]   compute a single (k,g)-core from scratch");
    println!("  --test-naive              build the naive index and report statistics");
    println!("  --test-one-level          build the one-level index and report statistics");
    println!("  --test-jump               build the jump index and report statistics");
    println!("  --test-diagonal           build the diagonal index and report statistics");
    println!("  --benchmark               build everything, time queries, write a CSV row");
    println!("  --interactive             build everything and serve queries from stdin");
    println!();
    println!("Examples:");
    println!("  kgcore --file=real/contact/network.hyp --test-core k=2 g=1");
    println!("  kgcore --file=real/contact/network.hyp --benchmark");
}

fn run(options: &Options) -> Result<(), KgCoreError> {
    println!("Loading hypergraph from {}", options.file);

    let hypergraph = load_hypergraph(&options.file)?;

    if hypergraph.count_vertices() == 0 {
        return Err(KgCoreError::InputOpen {
            path: options.file.clone().into(),
            source: io::Error::new(io::ErrorKind::InvalidData, "empty hypergraph"),
        });
    }

    println!(
        "Loaded {} vertices and {} hyperedges",
        hypergraph.count_vertices(),
        hypergraph.count_hyperedges()
    );

    match options.mode {
        Mode::Stats => print_statistics(&hypergraph),
        Mode::TestCore => test_core(&hypergraph, options.k, options.g),
        Mode::TestNaive => test_naive(&hypergraph),
        Mode::TestOneLevel => test_one_level(&hypergraph),
        Mode::TestJump => test_jump(&hypergraph),
        Mode::TestDiagonal => test_diagonal(&hypergraph),
        Mode::Benchmark => benchmark(&hypergraph, &options.file)?,
        Mode::Interactive => interactive(&hypergraph)?,
    }

    println!("Done");

    Ok(())
}

fn print_statistics(hypergraph: &Hypergraph) {
    let distribution = hypergraph
        .edge_size_distribution()
        .into_iter()
        .collect_vec();

    println!("Hyperedge size distribution:");

    for (size, count) in distribution {
        println!("  size {size}: {count} edges");
    }

    println!("Pick a mode to build an index; run without arguments for usage.");
}

fn format_core(core: &VertexSet) -> String {
    let sample = core
        .iter()
        .map(|vertex| vertex.0)
        .sorted_unstable()
        .take(20)
        .join(", ");

    if core.len() > 20 {
        format!("{{{sample}, ...}}")
    } else {
        format!("{{{sample}}}")
    }
}

fn test_core(hypergraph: &Hypergraph, k: usize, g: usize) {
    println!("Computing the ({k},{g})-core from scratch");

    let start = Instant::now();
    let core = find_kg_core(hypergraph, k, g);
    let elapsed = start.elapsed().as_secs_f64();

    println!("({k},{g})-core: {} vertices in {elapsed:.6}s", core.len());
    println!(
        "Density: {:.2}%",
        core.len() as f64 / hypergraph.count_vertices() as f64 * 100.0
    );

    if core.is_empty() {
        println!("No vertex satisfies the ({k},{g})-core condition, try smaller thresholds");
    } else {
        println!("Core vertices: {}", format_core(&core));
    }
}

fn report_grid(max_g: usize, max_k: impl Fn(usize) -> usize) {
    println!("Available query ranges:");

    for g in 1..=max_g {
        let max_k = max_k(g);

        if max_k > 0 {
            println!("  g={g}: k can be 1 to {max_k}");
        }
    }
}

fn test_naive(hypergraph: &Hypergraph) {
    let start = Instant::now();
    let index = NaiveIndex::build(hypergraph);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Naive index built in {elapsed:.6}s");
    println!("Levels (g-values): {}", index.max_g());
    println!("Stored vertex references: {}", index.entry_count());
    println!(
        "Storage overhead: {:.2}x the vertex count",
        index.entry_count() as f64 / hypergraph.count_vertices() as f64
    );
    report_grid(index.max_g(), |g| index.max_k(g));
}

fn test_one_level(hypergraph: &Hypergraph) {
    let start = Instant::now();
    let index = OneLevelIndex::build(hypergraph);
    let elapsed = start.elapsed().as_secs_f64();

    println!("One-level index built in {elapsed:.6}s");
    println!("Levels (g-values): {}", index.max_g());
    println!("Stored vertex references: {}", index.entry_count());
    report_grid(index.max_g(), |g| index.max_k(g));
}

fn test_jump(hypergraph: &Hypergraph) {
    let start = Instant::now();
    let index = JumpIndex::build(hypergraph);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Jump index built in {elapsed:.6}s");
    println!("Levels (g-values): {}", index.max_g());
    println!("Stored vertex references: {}", index.entry_count());
    report_grid(index.max_g(), |g| index.max_k(g));
}

fn test_diagonal(hypergraph: &Hypergraph) {
    let start = Instant::now();
    let index = DiagonalIndex::build(hypergraph);
    let elapsed = start.elapsed().as_secs_f64();

    println!("Diagonal index built in {elapsed:.6}s");
    println!("Levels (g-values): {}", index.max_g());
    println!("Stored vertex references (aux included): {}", index.entry_count());
    report_grid(index.max_g(), |g| index.max_k(g));
}

/// Picks one (k,g) query per size percentile of the naive leaves, so the
/// benchmark spans the whole result-size spectrum. Deduplicated, hence at
/// most a hundred queries.
fn select_percentile_queries(index: &NaiveIndex) -> Vec<(usize, usize)> {
    let leaves = index
        .leaf_sizes()
        .into_iter()
        .sorted_unstable_by_key(|&(_, _, size)| size)
        .collect_vec();

    if leaves.is_empty() {
        return Vec::new();
    }

    let mut queries = (1..=100)
        .map(|percentile| {
            let position = (percentile as f64 / 100.0 * (leaves.len() - 1) as f64).round();
            let (k, g, _) = leaves[position as usize];

            (k, g)
        })
        .collect_vec();

    queries.sort_unstable();
    queries.dedup();

    queries
}

fn benchmark(hypergraph: &Hypergraph, file: &str) -> Result<(), KgCoreError> {
    println!("Benchmark: building all four indexes");

    let start = Instant::now();
    let naive = NaiveIndex::build(hypergraph);
    let naive_construction = start.elapsed().as_secs_f64();
    println!("  naive:     {naive_construction:.6}s");

    let start = Instant::now();
    let one_level = OneLevelIndex::build(hypergraph);
    let one_level_construction = start.elapsed().as_secs_f64();
    println!("  one-level: {one_level_construction:.6}s");

    let start = Instant::now();
    let jump = JumpIndex::build(hypergraph);
    let jump_construction = start.elapsed().as_secs_f64();
    println!("  jump:      {jump_construction:.6}s");

    let start = Instant::now();
    let diagonal = DiagonalIndex::build(hypergraph);
    let diagonal_construction = start.elapsed().as_secs_f64();
    println!("  diagonal:  {diagonal_construction:.6}s");

    let queries = select_percentile_queries(&naive);

    println!("Selected {} percentile queries", queries.len());

    let mut peel_total = 0.0;
    let mut naive_total = 0.0;
    let mut one_level_total = 0.0;
    let mut jump_total = 0.0;
    let mut diagonal_total = 0.0;

    for &(k, g) in &queries {
        let start = Instant::now();
        let _ = find_kg_core(hypergraph, k, g);
        peel_total += start.elapsed().as_secs_f64();

        let start = Instant::now();
        let _ = naive.query(k, g);
        naive_total += start.elapsed().as_secs_f64();

        let start = Instant::now();
        let _ = one_level.query(k, g);
        one_level_total += start.elapsed().as_secs_f64();

        let start = Instant::now();
        let _ = jump.query(k, g);
        jump_total += start.elapsed().as_secs_f64();

        let start = Instant::now();
        let _ = diagonal.query(k, g);
        diagonal_total += start.elapsed().as_secs_f64();
    }

    println!("Query totals over {} queries:", queries.len());

    let mut rankings = vec![
        ("find_kg_core", peel_total),
        ("naive", naive_total),
        ("one-level", one_level_total),
        ("jump", jump_total),
        ("diagonal", diagonal_total),
    ];

    rankings.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (position, (method, total)) in rankings.iter().enumerate() {
        println!("  {}. {method}: {total:.6}s", position + 1);
    }

    let path = Path::new(file);
    let directory = path.parent().unwrap_or_else(|| Path::new("."));
    let dataset = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("dataset");
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset");
    let csv_path = directory.join(format!("{stem}_benchmark.csv"));

    let format =
        time::macros::format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let timestamp = time::OffsetDateTime::now_local()
        .unwrap_or_else(|_| time::OffsetDateTime::now_utc())
        .format(&format)
        .unwrap_or_default();

    let mut csv = File::create(&csv_path)?;

    writeln!(
        csv,
        "dataset,naive_index_construction_time,one_level_construction_time,\
         jump_construction_time,diagonal_construction_time,find_kg_core_total_time,\
         naive_query_total_time,one_level_query_total_time,jump_query_total_time,\
         diagonal_query_total_time,total_queries,timestamp"
    )?;
    writeln!(
        csv,
        "{dataset},{naive_construction:.6},{one_level_construction:.6},\
         {jump_construction:.6},{diagonal_construction:.6},{peel_total:.6},\
         {naive_total:.6},{one_level_total:.6},{jump_total:.6},{diagonal_total:.6},\
         {},{timestamp}",
        queries.len()
    )?;

    println!("Results saved to {}", csv_path.display());

    Ok(())
}

fn parse_query(parameters: &str) -> Option<(usize, usize)> {
    let (k, g) = parameters
        .split_once(',')
        .or_else(|| parameters.split_once(' '))?;

    let k = k.trim().parse().ok()?;
    let g = g.trim().parse().ok()?;

    if k == 0 || g == 0 {
        return None;
    }

    Some((k, g))
}

fn interactive(hypergraph: &Hypergraph) -> Result<(), KgCoreError> {
    println!("Building all four indexes");

    let naive = NaiveIndex::build(hypergraph);
    let one_level = OneLevelIndex::build(hypergraph);
    let jump = JumpIndex::build(hypergraph);
    let diagonal = DiagonalIndex::build(hypergraph);

    report_grid(naive.max_g(), |g| naive.max_k(g));

    println!("Commands:");
    println!("  <method> k,g   query with method 1-4 or naive/one/jump/diag");
    println!("  compare k,g    run all four methods on the same query");
    println!("  ranges         show valid k,g ranges");
    println!("  help           show this help");
    println!("  quit           exit");

    let stdin = io::stdin();
    let mut query_count = 0usize;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "exit" || input == "q" {
            break;
        }

        if input == "help" || input == "h" {
            println!("  <method> k,g   e.g. 'naive 2,1' or '3 2,1'");
            println!("  compare k,g    e.g. 'compare 2,1'");
            continue;
        }

        if input == "ranges" || input == "range" {
            report_grid(naive.max_g(), |g| naive.max_k(g));
            continue;
        }

        if let Some(parameters) = input.strip_prefix("compare") {
            let Some((k, g)) = parse_query(parameters.trim()) else {
                println!("Invalid format, use 'compare k,g'");
                continue;
            };

            println!("Comparing all methods for the ({k},{g})-core");

            let mut results = Vec::new();

            for (method, query) in [
                ("naive", Box::new(|| naive.query(k, g)) as Box<dyn Fn() -> VertexSet + '_>),
                ("one-level", Box::new(|| one_level.query(k, g))),
                ("jump", Box::new(|| jump.query(k, g))),
                ("diagonal", Box::new(|| diagonal.query(k, g))),
            ] {
                let start = Instant::now();
                let core = query();
                let elapsed = start.elapsed().as_secs_f64();

                println!("  {method}: {elapsed:.6}s, {} vertices", core.len());
                results.push(core);
            }

            if results.iter().all(|core| core == &results[0]) {
                println!("All methods agree");
            } else {
                println!("WARNING: methods disagree, this is a bug");
            }

            query_count += 1;
            continue;
        }

        let Some((method, parameters)) = input.split_once(char::is_whitespace) else {
            println!("Invalid format, type 'help' for usage");
            continue;
        };

        let Some((k, g)) = parse_query(parameters.trim()) else {
            println!("Invalid parameters, use 'k,g' with positive integers");
            continue;
        };

        let start = Instant::now();
        let core = match method {
            "1" | "naive" => naive.query(k, g),
            "2" | "one" | "one-level" => one_level.query(k, g),
            "3" | "jump" => jump.query(k, g),
            "4" | "diag" | "diagonal" => diagonal.query(k, g),
            _ => {
                println!("Unknown method {method:?}, use 1-4 or naive/one/jump/diag");
                continue;
            }
        };
        let elapsed = start.elapsed().as_secs_f64();

        query_count += 1;

        if core.is_empty() {
            println!("No vertex in the ({k},{g})-core, type 'ranges' for valid ranges");
        } else {
            println!(
                "({k},{g})-core: {} vertices in {elapsed:.6}s: {}",
                core.len(),
                format_core(&core)
            );
        }
    }

    println!("Session ended after {query_count} queries");

    Ok(())
}
