use clap::{Parser, Subcommand};

/// Static usage summary, printed for `-h`, `-help`, `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: fridge <COMMAND> [FLAGS]

Commands:
  add       add items to fridge
  list      show all items in fridge
  remove    remove an item from the fridge

Flags:
  add     -name <NAME>          name of the item (required)
          -qty <QUANTITY>       quantity of the item (default 1)
          -exp <YYYY-MM-DD>     expiration date (default today + 7 days)
  list    -id <ID>              id of the item to show (optional)
  remove  -id <ID>              id of the item to remove (required)

Options:
  -h, -help, --help             print this help
";

#[derive(Parser, Debug)]
#[command(
    name = "fridge",
    bin_name = "fridge",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Keep track of what is in the fridge", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Values are kept as text and parsed by the handlers, so malformed input is a
/// validation error rather than a clap usage error.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add items to fridge
    Add {
        /// Name of the item
        #[arg(long, allow_hyphen_values = true)]
        name: Option<String>,

        /// Quantity of the item
        #[arg(long = "qty", allow_hyphen_values = true)]
        quantity: Option<String>,

        /// Expiration date (YYYY-MM-DD)
        #[arg(long = "exp", allow_hyphen_values = true)]
        expiration: Option<String>,
    },

    /// Show all items in fridge, or a single one
    List {
        /// ID of the item to show
        #[arg(long, allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Remove an item from the fridge
    Remove {
        /// ID of the item to remove
        #[arg(long, allow_hyphen_values = true)]
        id: Option<String>,
    },

    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Flags whose next token is always their value.
const VALUE_FLAGS: [&str; 4] = ["name", "qty", "exp", "id"];

/// Rewrites single-dash long flags (`-name`, `-qty`, `-help`) into clap's
/// double-dash form. Short flags, negative numbers, flag values and everything
/// after a bare `--` pass through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    let mut expects_value = false;
    args.into_iter()
        .enumerate()
        .map(|(pos, arg)| {
            if pos == 0 || passthrough {
                return arg;
            }
            if std::mem::take(&mut expects_value) {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            expects_value = takes_separate_value(&arg);
            if is_single_dash_long(&arg) {
                format!("-{arg}")
            } else {
                arg
            }
        })
        .collect()
}

fn takes_separate_value(arg: &str) -> bool {
    let flag = arg.trim_start_matches('-');
    arg.starts_with('-') && !flag.contains('=') && VALUE_FLAGS.contains(&flag)
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') || rest.chars().count() < 2 {
        return false;
    }
    let flag = rest.split('=').next().unwrap_or(rest);
    rest.parse::<f64>().is_err() && flag.chars().all(|c| c.is_ascii_alphabetic())
}
