//! Probkit CLI
//!
//! Command-line front end for the probability coursework kernels. Each
//! subcommand reproduces one of the classroom demos as terminal output.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use tracing::info;

use probkit::cipher;
use probkit::combinatorics::{diagonal_sums, pascal_triangle};
use probkit::config::DemoConfig;
use probkit::rsa::{ciphertext_to_csv, KeyPair};
use probkit::simulation::{
    bernoulli_sequence, empirical_frequencies, expected_final_scores, running_frequency,
    to_random_walk, NormalSource, PathSpec, PoissonApproximation, UniformSource,
};
use probkit::statistics::{batch_moments, RunningMoments};

#[derive(Parser)]
#[command(name = "probkit", version, about = "Probability coursework demos")]
struct Cli {
    /// TOML configuration file with demo defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed phrase for reproducible simulations (empty: OS entropy)
    #[arg(long, global = true)]
    seed: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Stream comma-separated observations through the moments engine
    Stats {
        /// Observations, e.g. "1.5,2,2.5,100"
        values: String,
    },
    /// Simulate Brownian motion paths
    Brownian {
        /// Time horizon T
        #[arg(long)]
        horizon: Option<f64>,
        /// Discretization steps
        #[arg(long)]
        steps: Option<usize>,
        /// Number of independent paths
        #[arg(long)]
        paths: Option<usize>,
    },
    /// Approximate a Poisson counting distribution
    Poisson {
        /// Process rate λ
        #[arg(long)]
        rate: Option<f64>,
        /// Simulation runs
        #[arg(long)]
        runs: Option<usize>,
    },
    /// Bernoulli random walks with their binomial overlay
    Walk {
        /// Steps per trajectory
        #[arg(long)]
        trials: Option<usize>,
        /// Per-step success probability
        #[arg(long)]
        probability: Option<f64>,
        /// Number of trajectories
        #[arg(long)]
        simulations: Option<usize>,
    },
    /// Print Pascal's triangle and its Fibonacci diagonal sums
    Pascal {
        /// Number of rows
        #[arg(long, default_value_t = 10)]
        rows: usize,
    },
    /// Generate toy RSA keys and round-trip a message
    Rsa {
        /// Message to encrypt
        message: String,
        /// First prime
        #[arg(long)]
        p: Option<u64>,
        /// Second prime
        #[arg(long)]
        q: Option<u64>,
    },
    /// Caesar-encrypt text, or crack it by frequency analysis
    Caesar {
        /// Input text
        text: String,
        /// Encryption shift (ignored with --crack)
        #[arg(long, default_value_t = 3)]
        shift: i32,
        /// Recover the shift instead of encrypting
        #[arg(long)]
        crack: bool,
    },
    /// Law-of-large-numbers die-roll running average
    Lln {
        /// Number of rolls
        #[arg(long, default_value_t = 1000)]
        rolls: usize,
    },
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    info!("Probkit v{}", probkit::VERSION);

    let config = match &cli.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    let seed = cli.seed.clone().unwrap_or_else(|| config.seed.clone());
    let uniforms = UniformSource::from_phrase(&seed);

    match cli.command {
        Command::Stats { values } => run_stats(&values),
        Command::Brownian {
            horizon,
            steps,
            paths,
        } => run_brownian(
            horizon.unwrap_or(config.brownian.horizon),
            steps.unwrap_or(config.brownian.steps),
            paths.unwrap_or(config.brownian.paths),
            uniforms,
        ),
        Command::Poisson { rate, runs } => run_poisson(
            rate.unwrap_or(config.poisson.rate),
            config.poisson.subintervals,
            runs.unwrap_or(config.poisson.runs),
            uniforms,
        ),
        Command::Walk {
            trials,
            probability,
            simulations,
        } => run_walk(
            trials.unwrap_or(config.walk.trials),
            probability.unwrap_or(config.walk.probability),
            simulations.unwrap_or(config.walk.simulations),
            uniforms,
        ),
        Command::Pascal { rows } => {
            run_pascal(rows);
            Ok(())
        }
        Command::Rsa { message, p, q } => run_rsa(
            &message,
            p.unwrap_or(config.rsa.p),
            q.unwrap_or(config.rsa.q),
        ),
        Command::Caesar { text, shift, crack } => {
            run_caesar(&text, shift, crack);
            Ok(())
        }
        Command::Lln { rolls } => run_lln(rolls, uniforms),
    }
}

/// Parses a comma-separated list of observations.
fn parse_values(text: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    text.split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            field
                .parse::<f64>()
                .map_err(|_| format!("not a number: {field:?}").into())
        })
        .collect()
}

fn run_stats(values: &str) -> Result<(), Box<dyn Error>> {
    let values = parse_values(values)?;

    let mut moments = RunningMoments::new();
    for &value in &values {
        let snapshot = moments.update(value)?;
        println!(
            "after {:>4} value(s): mean = {:.6}, variance = {:.6}",
            snapshot.count, snapshot.mean, snapshot.variance
        );
    }

    let reference = batch_moments(&values);
    println!(
        "two-pass reference:     mean = {:.6}, variance = {:.6}",
        reference.mean, reference.variance
    );
    Ok(())
}

fn run_brownian(
    horizon: f64,
    steps: usize,
    paths: usize,
    uniforms: UniformSource,
) -> Result<(), Box<dyn Error>> {
    let spec = PathSpec::new(horizon, steps)?;
    let mut normals = NormalSource::new(uniforms);

    info!(horizon, steps, paths, "Simulating Brownian paths");

    let mut increments = RunningMoments::new();
    for (index, path) in spec.sample_paths(paths, &mut normals).iter().enumerate() {
        for pair in path.windows(2) {
            increments.update(pair[1] - pair[0])?;
        }
        println!(
            "path {:>3}: final W(T) = {:+.6}",
            index + 1,
            path.last().copied().unwrap_or_default()
        );
    }

    println!(
        "increments: n = {}, mean = {:+.3e}, var = {:.3e} (theoretical var = dt = {:.3e})",
        increments.count(),
        increments.mean(),
        increments.variance(),
        spec.dt()
    );
    Ok(())
}

fn run_poisson(
    rate: f64,
    subintervals: usize,
    runs: usize,
    mut uniforms: UniformSource,
) -> Result<(), Box<dyn Error>> {
    let approx = PoissonApproximation::new(rate, subintervals)?;
    let counts = approx.simulate_counts(runs, &mut uniforms);

    println!("k   empirical  theoretical");
    for (count, frequency) in empirical_frequencies(&counts) {
        println!("{count:<3} {frequency:<10.4} {:.4}", approx.pmf(count));
    }
    Ok(())
}

fn run_walk(
    trials: usize,
    probability: f64,
    simulations: usize,
    mut uniforms: UniformSource,
) -> Result<(), Box<dyn Error>> {
    let mut finals = Vec::with_capacity(simulations);
    for _ in 0..simulations {
        let sequence = bernoulli_sequence(trials, probability, &mut uniforms)?;
        let walk = to_random_walk(&sequence);
        finals.push(*walk.last().unwrap_or(&0));
    }

    // One extra sequence to show the LLN convergence series
    let sequence = bernoulli_sequence(trials, probability, &mut uniforms)?;
    let frequency = running_frequency(&sequence);
    println!(
        "single run: success frequency after {trials} trials = {:.4} (p = {probability})",
        frequency.last().copied().unwrap_or_default()
    );

    println!("score  observed  expected");
    for (score, pmf) in expected_final_scores(trials, probability) {
        let observed = finals.iter().filter(|&&f| f == score).count();
        let expected = pmf * simulations as f64;
        if observed > 0 || expected >= 0.05 {
            println!("{score:>+5}  {observed:<8}  {expected:.2}");
        }
    }
    Ok(())
}

fn run_pascal(rows: usize) {
    let triangle = pascal_triangle(rows);
    for row in &triangle {
        let cells: Vec<String> = row.iter().map(|value| value.to_string()).collect();
        println!("{:^width$}", cells.join(" "), width = rows * 6);
    }
    let sums = diagonal_sums(&triangle);
    println!(
        "diagonal sums: {}",
        sums.iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn run_rsa(message: &str, p: u64, q: u64) -> Result<(), Box<dyn Error>> {
    let keys = KeyPair::generate(&BigUint::from(p), &BigUint::from(q))?;

    println!("public key:  (n = {}, e = {})", keys.modulus(), keys.public_exponent());
    println!("private key: (n = {}, d = {})", keys.modulus(), keys.private_exponent());

    let ciphertext = keys.encrypt(message)?;
    println!("ciphertext:  {}", ciphertext_to_csv(&ciphertext));

    let recovered = keys.decrypt(&ciphertext)?;
    println!("decrypted:   {recovered}");

    // The per-character weakness, quantified the way the lecture slides do
    let plain_chi = cipher::english_chi_squared(&cipher::letter_frequencies(message));
    println!("plaintext χ² against English: {plain_chi:.2}");
    Ok(())
}

fn run_caesar(text: &str, shift: i32, crack: bool) {
    if crack {
        let decoded = cipher::auto_decode(text);
        println!("best shift: {} (χ² = {:.2})", decoded.shift, decoded.score);
        println!("{}", decoded.plaintext);
    } else {
        println!("{}", cipher::transform(text, shift));
    }
}

fn run_lln(rolls: usize, mut uniforms: UniformSource) -> Result<(), Box<dyn Error>> {
    let mut average = RunningMoments::new();
    for _ in 0..rolls {
        let face = (uniforms.next_unit() * 6.0).floor() as i32 + 1;
        average.update(f64::from(face))?;
    }
    println!(
        "{} roll(s): running average = {:.4} (expected value 3.5)",
        average.count(),
        average.mean()
    );
    Ok(())
}
