use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use freqcrack::{
    frequency::ENGLISH_TARGET,
    poly::random_key,
    samples::{DEMO_KEY, SCIENCE_PLAINTEXT, SHIFT_CIPHERTEXT},
    Alphabet, FrequencyModel, Solver,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let solver = cli.solver()?;
    match &cli.command {
        Command::Shift { input } => {
            let ciphertext = input.read_ciphertext(&solver)?;
            let solution = solver.solve_shift(&ciphertext)?;
            println!("{}", solution.plaintext);
            println!(
                "\nkey: {} (squared frequency {:.4})",
                solution.key, solution.score
            );
        }
        Command::Period { input, max_period } => {
            let ciphertext = input.read_ciphertext(&solver)?;
            println!("{}", solver.recover_period(&ciphertext, *max_period)?);
        }
        Command::Break { input, max_period } => {
            let ciphertext = input.read_ciphertext(&solver)?;
            let solution = solver.solve_poly(&ciphertext, *max_period)?;
            println!("{}", solution.plaintext);
            println!("\nperiod: {}", solution.period);
            println!("key: {}", solution.key);
        }
        Command::Encrypt { input, key } => {
            let plaintext = input.read_plaintext(&solver)?;
            let ciphertext = match (&key.key, key.shift, key.random_key) {
                (Some(key), _, _) => solver.encrypt_poly(&plaintext, key)?,
                (_, Some(shift), _) => solver.encrypt_shift(&plaintext, shift)?,
                (_, _, Some(len)) => {
                    let size = solver.plain_alphabet().len();
                    let residues = random_key(&mut rand::thread_rng(), len, size)?;
                    let key = solver.plain_alphabet().decode_all(&residues)?;
                    eprintln!("key: {key}");
                    solver.encrypt_poly(&plaintext, &key)?
                }
                (None, None, None) => unreachable!("clap requires one key option"),
            };
            println!("{ciphertext}");
        }
        Command::Decrypt { input, key } => {
            let ciphertext = input.read_ciphertext(&solver)?;
            let plaintext = match (&key.key, key.shift) {
                (Some(key), _) => solver.decrypt_poly(&ciphertext, key)?,
                (_, Some(shift)) => solver.decrypt_shift(&ciphertext, shift)?,
                (None, None) => unreachable!("clap requires one key option"),
            };
            println!("{plaintext}");
        }
        Command::Demo => run_demo(&solver)?,
    }

    Ok(())
}

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(io::stderr)
            .init();
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Frequency-analysis attacks on shift and Vigenere ciphers")]
struct Cli {
    /// Log candidate scores to stderr
    #[arg(long, global = true)]
    debug: bool,

    /// CSV letter-frequency table (`letter,frequency` with a header line) for a-z
    #[arg(long, global = true)]
    freq_table: Option<PathBuf>,

    /// Expected sum of squared letter frequencies for the language
    #[arg(long, global = true, default_value_t = ENGLISH_TARGET)]
    target: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recover the key of a shift cipher and print the plaintext
    Shift {
        #[command(flatten)]
        input: Input,
    },

    /// Estimate the key length of a Vigenere ciphertext
    Period {
        #[command(flatten)]
        input: Input,

        /// Largest key length to consider
        #[arg(short, long, default_value_t = 10)]
        max_period: usize,
    },

    /// Break a Vigenere ciphertext and print the plaintext
    Break {
        #[command(flatten)]
        input: Input,

        /// Largest key length to consider
        #[arg(short, long, default_value_t = 10)]
        max_period: usize,
    },

    /// Encrypt lowercase plaintext
    Encrypt {
        #[command(flatten)]
        input: Input,

        #[command(flatten)]
        key: EncryptKey,
    },

    /// Decrypt uppercase ciphertext with a known key
    Decrypt {
        #[command(flatten)]
        input: Input,

        #[command(flatten)]
        key: DecryptKey,
    },

    /// Run both attacks on the bundled sample texts
    Demo,
}

#[derive(Args, Debug)]
struct Input {
    /// Optional path to a file that contains the text
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Text passed directly on the command line
    text: Option<String>,

    /// Fold case and drop every character outside the alphabet
    #[arg(short, long)]
    clean: bool,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct EncryptKey {
    /// Repeating key, e.g. `queen`
    #[arg(short, long)]
    key: Option<String>,

    /// Shift amount for a Caesar cipher
    #[arg(short, long)]
    shift: Option<usize>,

    /// Generate a random repeating key of this length
    #[arg(short, long)]
    random_key: Option<usize>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct DecryptKey {
    /// Repeating key, e.g. `queen`
    #[arg(short, long)]
    key: Option<String>,

    /// Shift amount for a Caesar cipher
    #[arg(short, long)]
    shift: Option<usize>,
}

impl Cli {
    fn solver(&self) -> Result<Solver> {
        let plain = Alphabet::latin_lowercase();
        let model = match &self.freq_table {
            Some(path) => {
                let table = fs::read_to_string(path)
                    .wrap_err_with(|| format!("failed to read frequency table {:?}", path))?;
                FrequencyModel::from_csv(&table, &plain, self.target)
                    .wrap_err_with(|| format!("invalid frequency table {:?}", path))?
            }
            None => FrequencyModel::english_with_target(self.target)?,
        };
        Ok(Solver::new(Alphabet::latin_uppercase(), plain, model)?)
    }
}

impl Input {
    fn read_input(&self) -> Result<String> {
        if let Some(path) = &self.file {
            return fs::read_to_string(path).wrap_err_with(|| format!("failed to read {:?}", path));
        }

        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read text from stdin")?;
        Ok(buffer)
    }

    fn read_ciphertext(&self, solver: &Solver) -> Result<String> {
        let raw = self.read_input()?;
        Ok(if self.clean {
            solver.cipher_alphabet().retain_members(&raw.to_uppercase())
        } else {
            raw.trim().to_string()
        })
    }

    fn read_plaintext(&self, solver: &Solver) -> Result<String> {
        let raw = self.read_input()?;
        Ok(if self.clean {
            solver.plain_alphabet().retain_members(&raw.to_lowercase())
        } else {
            raw.trim().to_string()
        })
    }
}

fn run_demo(solver: &Solver) -> Result<()> {
    println!("=== Statistical attack on shift cipher ===");
    let shift = solver.solve_shift(SHIFT_CIPHERTEXT)?;
    println!("Best-guess candidate squared frequency: {:.4}", shift.score);
    println!("Decrypted text for best candidate:\n{}", shift.plaintext);

    println!("\n=== Statistical attack on Vigenere cipher ===");
    let ciphertext = solver.encrypt_poly(SCIENCE_PLAINTEXT, DEMO_KEY)?;
    println!(
        "Encrypted {} letters with key {:?}",
        ciphertext.len(),
        DEMO_KEY
    );
    let poly = solver.solve_poly(&ciphertext, 10)?;
    println!("Recovered period: {}", poly.period);
    println!("Recovered key: {}", poly.key);
    println!("Plaintext recovered: {}", poly.plaintext == SCIENCE_PLAINTEXT);
    println!("\n{}", poly.plaintext);
    Ok(())
}
