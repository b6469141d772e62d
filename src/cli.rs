use clap::Parser;
use std::path::PathBuf;

pub const HELP_KEYS: &str = "\
Key Bindings:
  q / Esc            : Quit
  j / Right / Space  : Next image
  k / Left           : Previous image

Images (.png, .jpg, .jpeg) are shrunk to fit the primary monitor.
Set RUST_LOG=debug to trace navigation.
";

#[derive(Parser, Debug)]
#[command(name = "dirview", about = "A minimal borderless image viewer", after_help = HELP_KEYS)]
pub struct Cli {
    /// Directory to browse (defaults to the current directory)
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_defaults_to_cwd() {
        let cli = Cli::try_parse_from(["dirview"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("."));
    }

    #[test]
    fn directory_is_positional() {
        let cli = Cli::try_parse_from(["dirview", "/tmp/photos"]).unwrap();
        assert_eq!(cli.directory, PathBuf::from("/tmp/photos"));
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["dirview", "a", "b"]).is_err());
    }
}
