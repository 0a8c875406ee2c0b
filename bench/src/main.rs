use std::time::Instant;

use wordgraph_core::{nodes_at_hops, shortest_path, BigramCounts, WordGraph};

type Corpus = Vec<Vec<String>>;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let sentence_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: wordgraph-bench [mode] [sentence_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  zipf     Power-law word choice (a few very frequent words)");
        println!("  chain    Sentences walking a long word chain (deep paths)");
        println!("  topics   Two vocabularies joined by rare bridge sentences");
        println!("  random   Uniform word choice");
        println!();
        println!("Default sentence_count: 200000");
        return;
    }

    println!("wordgraph-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, fn(u64) -> Corpus)> = match mode {
        "zipf" => vec![("Zipf vocabulary", gen_zipf)],
        "chain" => vec![("Word chain", gen_chain)],
        "topics" => vec![("Two topics + bridge", gen_topics)],
        "random" => vec![("Uniform random", gen_random)],
        "all" => vec![
            ("Zipf vocabulary", gen_zipf as fn(u64) -> Corpus),
            ("Word chain", gen_chain),
            ("Two topics + bridge", gen_topics),
            ("Uniform random", gen_random),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, sentence_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Corpus, sentence_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} sentences", sentence_count);

    let t = Instant::now();
    let corpus = generator(sentence_count);
    let tokens: usize = corpus.iter().map(Vec::len).sum();
    println!(
        "Generated in {:.2}s, {} sentences, {} tokens",
        t.elapsed().as_secs_f64(),
        corpus.len(),
        tokens
    );

    let t = Instant::now();
    let bigrams = BigramCounts::from_sentences(&corpus);
    let count_time = t.elapsed();

    let t = Instant::now();
    let graph = WordGraph::from_bigrams(&bigrams);
    let build_time = t.elapsed();
    println!(
        "Bigrams in {:.1}ms, graph in {:.1}ms, {} nodes, {} edges, ~{:.0}MB",
        count_time.as_secs_f64() * 1000.0,
        build_time.as_secs_f64() * 1000.0,
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let Some(first) = graph.nodes().next().map(str::to_string) else {
        println!("(empty graph)");
        println!();
        return;
    };
    let last = graph.nodes().last().map(str::to_string).unwrap_or_else(|| first.clone());

    // Exact-hop layers from the smallest word
    println!();
    println!("{:>8} {:>12} {:>12} {:>10}", "hops", "found", "visited", "time");
    println!("{:->8} {:->12} {:->12} {:->10}", "", "", "", "");

    for hops in [1, 2, 3, 5, 10, 20, 50] {
        let t = Instant::now();
        let result = nodes_at_hops(&graph, &first, hops);
        let elapsed = t.elapsed();
        println!(
            "{:>8} {:>12} {:>12} {:>8.1}ms",
            hops,
            result.words.len(),
            result.nodes_visited,
            elapsed.as_secs_f64() * 1000.0
        );
        if result.nodes_visited >= graph.node_count() {
            println!("{:>8} (entire graph reached)", "");
            break;
        }
    }

    // Weighted path: smallest word to largest word
    println!();
    let t = Instant::now();
    let path = shortest_path(&graph, &first, &last);
    let elapsed = t.elapsed();
    match path {
        Ok(p) => println!(
            "Shortest path {} → {}: {} hops, cost {:.3} in {:.1}ms",
            first,
            last,
            p.hops(),
            p.cost,
            elapsed.as_secs_f64() * 1000.0
        ),
        Err(e) => println!("Shortest path: {} ({:.1}ms)", e, elapsed.as_secs_f64() * 1000.0),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Zero-padded so word order matches numeric order.
fn word(prefix: &str, i: u64) -> String {
    format!("{}{:07}", prefix, i)
}

fn sentence_len(rng: &mut FastRng) -> u64 {
    4 + rng.next(12)
}

/// Power-law word choice: index = vocab^u for uniform u, so low indices
/// dominate the way function words dominate real text.
fn gen_zipf(sentence_count: u64) -> Corpus {
    let vocab = (sentence_count / 4).max(100) as f64;
    let mut rng = FastRng::new(42);

    (0..sentence_count)
        .map(|_| {
            let len = sentence_len(&mut rng);
            (0..len)
                .map(|_| {
                    let idx = vocab.powf(rng.next_f64()) as u64;
                    word("w", idx)
                })
                .collect()
        })
        .collect()
}

/// Each sentence is a short walk along one long chain of words, so reaching
/// the far end takes many hops.
fn gen_chain(sentence_count: u64) -> Corpus {
    let vocab = (sentence_count * 2).max(10);
    let mut rng = FastRng::new(12345);

    (0..sentence_count)
        .map(|i| {
            let len = sentence_len(&mut rng);
            let start = (i * 2) % vocab;
            (0..len).map(|j| word("c", (start + j) % vocab)).collect()
        })
        .collect()
}

/// Two disjoint vocabularies; one sentence in a thousand mixes them.
fn gen_topics(sentence_count: u64) -> Corpus {
    let vocab = (sentence_count / 8).max(50);
    let mut rng = FastRng::new(67890);

    (0..sentence_count)
        .map(|i| {
            let len = sentence_len(&mut rng);
            let bridge = i % 1000 == 999;
            let topic = if rng.next(2) == 0 { "a" } else { "b" };
            (0..len)
                .map(|j| {
                    let prefix = if bridge && j >= len / 2 {
                        if topic == "a" { "b" } else { "a" }
                    } else {
                        topic
                    };
                    word(prefix, rng.next(vocab))
                })
                .collect()
        })
        .collect()
}

/// Uniform word choice. Baseline with no structure.
fn gen_random(sentence_count: u64) -> Corpus {
    let vocab = (sentence_count / 2).max(100);
    let mut rng = FastRng::new(54321);

    (0..sentence_count)
        .map(|_| {
            let len = sentence_len(&mut rng);
            (0..len).map(|_| word("r", rng.next(vocab))).collect()
        })
        .collect()
}
