//! Command-line configuration for the `plum_fen` binary.
//!
//! Flags may appear anywhere after the subcommand. The generator seed can also
//! come from the `PLUM_FEN_SEED` environment variable; an explicit `--seed`
//! wins over the environment.

pub const SEED_ENV_VAR: &str = "PLUM_FEN_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Decode a FEN and print the board plus decoded fields.
    Parse(String),
    /// Decode a FEN, re-encode it, and report whether the text survived.
    RoundTrip(String),
    /// Print one or more random Chess960 start positions.
    Chess960,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub count: usize,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            command: Command::Help,
            count: 1,
            seed: None,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Build a config from the process arguments and environment.
    pub fn from_env() -> Result<Self, String> {
        let env_seed = std::env::var(SEED_ENV_VAR).ok();
        Self::from_args(std::env::args().skip(1), env_seed.as_deref())
    }

    /// Build a config from arguments (program name already stripped).
    pub fn from_args<I, S>(args: I, env_seed: Option<&str>) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = CliConfig {
            seed: env_seed.map(parse_seed).transpose()?,
            ..CliConfig::default()
        };
        let mut positional: Vec<String> = Vec::new();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--verbose" | "-v" => config.verbose = true,
                "--count" | "-n" => {
                    let value = args.next().ok_or("--count requires a value")?;
                    config.count = value
                        .parse::<usize>()
                        .map_err(|_| format!("Invalid --count value: {value}"))?;
                }
                "--seed" => {
                    let value = args.next().ok_or("--seed requires a value")?;
                    config.seed = Some(parse_seed(&value)?);
                }
                "--help" | "-h" => positional.insert(0, "help".to_owned()),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        config.command = match positional.next().as_deref() {
            None | Some("help") => Command::Help,
            Some("chess960") => Command::Chess960,
            Some(name @ ("parse" | "roundtrip")) => {
                let rest: Vec<String> = positional.collect();
                if rest.is_empty() {
                    return Err(format!("{name} requires a FEN argument"));
                }
                // An unquoted FEN arrives as several arguments.
                let fen = rest.join(" ");
                if name == "parse" {
                    Command::Parse(fen)
                } else {
                    Command::RoundTrip(fen)
                }
            }
            Some(other) => return Err(format!("Unknown command: {other}")),
        };

        Ok(config)
    }
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| format!("Invalid seed: {value}"))
}

pub fn usage() -> &'static str {
    "usage: plum_fen <command> [options]\n\
     \n\
     commands:\n\
     \x20 parse <fen>       decode a FEN and show the position\n\
     \x20 roundtrip <fen>   decode and re-encode a FEN\n\
     \x20 chess960          print random Chess960 start positions\n\
     \x20 help              show this message\n\
     \n\
     options:\n\
     \x20 -n, --count <N>   number of Chess960 positions (default 1)\n\
     \x20 --seed <S>        seed for reproducible generation (env PLUM_FEN_SEED)\n\
     \x20 -v, --verbose     print diagnostic info lines"
}
