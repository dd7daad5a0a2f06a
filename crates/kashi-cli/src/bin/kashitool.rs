use std::path::Path;

use clap::{Parser, Subcommand};

use kashi_cli::commands::{config_ops, lexicon_ops, lyrics_ops};
use kashi_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "kashitool", about = "Reading aids for Japanese lyrics")]
struct Cli {
    /// Lexicon file: .tsv, SudachiDict .csv, or compiled (default: embedded seed lexicon)
    #[arg(long, global = true)]
    lexicon: Option<String>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom kana table TOML
    #[arg(long, global = true)]
    kana_table: Option<String>,
    /// Write JSON trace events to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<String>,
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every view of each input line
    Process {
        /// Input file (default: stdin)
        file: Option<String>,
        /// Output one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Show a single view: original, hiragana, katakana, romaji or furigana
    View {
        #[arg(short, long)]
        format: String,
        /// Input file (default: stdin)
        file: Option<String>,
    },
    /// Inline ruby annotation, e.g. 食(た)べる
    Annotate {
        /// Input file (default: stdin)
        file: Option<String>,
    },
    /// Two-line display with readings above their kanji
    Ruby {
        /// Input file (default: stdin)
        file: Option<String>,
    },
    /// Dump segmentation as surface(reading) | ...
    Segment {
        /// Input file (default: stdin)
        file: Option<String>,
    },
    /// Transliterate a kana string
    Romaji {
        /// Hiragana or katakana input
        kana: String,
    },
    /// All reading forms of each line as JSON
    Readings {
        /// Input file (default: stdin)
        file: Option<String>,
    },
    /// Lexicon tools
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export the default kana table as TOML
    KanaExport,
    /// Validate a custom kana table TOML file
    KanaValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// Compile a text lexicon into the binary format
    Compile {
        /// Source format
        #[arg(long, default_value = "tsv")]
        source: String,
        /// Input file
        input_file: String,
        /// Output file
        output_file: String,
    },
    /// Show surface and entry counts
    Stats {
        /// Lexicon file
        file: String,
    },
    /// Look up a surface (exact match)
    Lookup {
        /// Surface form
        surface: String,
    },
    /// Common-prefix search (all surfaces that are prefixes of the query)
    Prefix {
        /// Query text
        query: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref().map(Path::new), cli.verbose);
    config_ops::apply_overrides(cli.settings.as_deref(), cli.kana_table.as_deref());

    let lexicon = cli.lexicon.as_deref();
    let composer = || lyrics_ops::composer(lexicon_ops::open_segmenter(lexicon));

    match cli.command {
        Command::Process { file, json } => lyrics_ops::process(&composer(), file.as_deref(), json),
        Command::View { format, file } => {
            lyrics_ops::view(&composer(), &format, file.as_deref())
        }
        Command::Annotate { file } => lyrics_ops::annotate(&composer(), file.as_deref()),
        Command::Ruby { file } => lyrics_ops::ruby(&composer(), file.as_deref()),
        Command::Segment { file } => lyrics_ops::segment(&composer(), file.as_deref()),
        Command::Romaji { kana } => lyrics_ops::romaji(&kana),
        Command::Readings { file } => lyrics_ops::readings(&composer(), file.as_deref()),
        Command::Lexicon { action } => match action {
            LexiconAction::Compile {
                source,
                input_file,
                output_file,
            } => lexicon_ops::compile(&source, &input_file, &output_file),
            LexiconAction::Stats { file } => lexicon_ops::stats(&file),
            LexiconAction::Lookup { surface } => lexicon_ops::lookup(lexicon, &surface),
            LexiconAction::Prefix { query } => lexicon_ops::prefix(lexicon, &query),
        },
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::KanaExport => config_ops::kana_export(),
        Command::KanaValidate { file } => config_ops::kana_validate(&file),
    }
}
