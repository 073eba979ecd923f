// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `prepare` and `clean`
// and all their configurable flags.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{ArgGroup, Args, Subcommand};

use crate::application::prepare_use_case::PrepareConfig;
use crate::data::{
    archive::{ArchiveSpec, NEWS20_URL},
    decode::DecodePolicy,
};
use crate::domain::category::CategorySet;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download (if needed), clean and split the newsgroup corpus
    Prepare(PrepareArgs),

    /// Clean a single string or file and print the result
    Clean(CleanArgs),
}

/// All arguments for the `prepare` command.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Data root the archive is downloaded to and extracted in
    #[arg(long, default_value = "data")]
    pub root: String,

    /// URL of the gzip tarball
    #[arg(long, default_value = NEWS20_URL)]
    pub url: String,

    /// File name of the archive inside the data root
    #[arg(long, default_value = "20news-bydate.tar.gz")]
    pub archive_file: String,

    /// Directory under the root that is split into train/dev
    #[arg(long, default_value = "20news-bydate-train")]
    pub train_dir: String,

    /// Directory under the root to load as a test set, e.g. 20news-bydate-test
    #[arg(long)]
    pub test_dir: Option<String>,

    /// Comma-separated category directories, used as labels
    #[arg(long, default_value = "alt.atheism,comp.graphics,sci.med,soc.religion.christian")]
    pub categories: CategorySet,

    /// Fraction of the train directory held out as dev, taken from the end
    #[arg(long, default_value_t = 0.1)]
    pub dev_ratio: f64,

    /// What to do with malformed UTF-8: replace, drop or fail
    #[arg(long, default_value = "drop")]
    pub decode: DecodePolicy,

    /// Shuffle with this seed before the dev split (default: keep directory order)
    #[arg(long)]
    pub shuffle_seed: Option<u64>,

    /// Write train/dev/test JSON and the run config to this directory
    #[arg(long)]
    pub export_dir: Option<String>,
}

/// Convert CLI PrepareArgs into the application-layer PrepareConfig.
/// The application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        // The sentinel that marks an extracted archive is the train directory
        let archive = ArchiveSpec {
            url:      a.url,
            filename: a.archive_file,
            dirname:  a.train_dir.clone(),
        };

        PrepareConfig {
            root:         a.root,
            archive,
            train_dir:    a.train_dir,
            test_dir:     a.test_dir,
            categories:   a.categories,
            dev_ratio:    a.dev_ratio,
            decode:       a.decode,
            shuffle_seed: a.shuffle_seed,
            export_dir:   a.export_dir,
        }
    }
}

/// All arguments for the `clean` command
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
pub struct CleanArgs {
    /// Text to clean
    #[arg(long)]
    pub text: Option<String>,

    /// File whose content should be cleaned
    #[arg(long)]
    pub file: Option<String>,

    /// What to do with malformed UTF-8 in --file: replace, drop or fail
    #[arg(long, default_value = "drop")]
    pub decode: DecodePolicy,
}
