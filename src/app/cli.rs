use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Concatenate a source tree into a single context file"
)]
pub struct Cli {
    /// Use a predefined set of options from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Directory to scan (default: ./server)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// File to write the context dump to (default: project_context.txt)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// File extensions to collect (e.g., '.go' 'proto')
    #[arg(long = "ext", num_args = 1..)]
    pub extensions: Option<Vec<String>>,

    /// Directory names to skip at any depth (e.g., 'vendor' '.git')
    #[arg(long = "ignore-dir", num_args = 1..)]
    pub ignore_dirs: Option<Vec<String>>,

    /// Visit directory entries in file name order for reproducible output
    #[arg(long)]
    pub sorted: bool,

    /// Only report errors that abort the run
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_leaves_everything_unset() {
        let cli = Cli::try_parse_from(["project_context"]).unwrap();
        assert!(cli.root.is_none());
        assert!(cli.output.is_none());
        assert!(cli.extensions.is_none());
        assert!(cli.ignore_dirs.is_none());
        assert!(!cli.sorted);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn list_flags_take_multiple_values() {
        let cli = Cli::try_parse_from([
            "project_context",
            "--ext",
            ".rs",
            "toml",
            "--ignore-dir",
            "target",
            "-o",
            "out.txt",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.extensions, Some(vec![".rs".into(), "toml".into()]));
        assert_eq!(cli.ignore_dirs, Some(vec!["target".into()]));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["project_context", "-q", "-v"]).is_err());
    }
}
