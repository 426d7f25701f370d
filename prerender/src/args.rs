use std::path::{Path, PathBuf};

use clap::Parser;

/// Render the site footer to static HTML.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[clap(name = "prerender")]
pub struct PrerenderArgs {
    /// Where to write the HTML. Stdout when absent or `-`.
    pub output: Option<PathBuf>,

    /// Wrap the fragment in a complete HTML document.
    #[arg(long)]
    pub document: bool,

    /// Keep the markers Yew needs to hydrate the fragment.
    #[arg(long)]
    pub hydratable: bool,
}

impl PrerenderArgs {
    /// The file to write, or `None` for stdout.
    pub fn destination(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<PrerenderArgs, clap::Error> {
        PrerenderArgs::try_parse_from(
            std::iter::once("prerender").chain(args.iter().copied()),
        )
    }

    #[test]
    fn no_arguments_writes_fragment_to_stdout() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, PrerenderArgs::default());
        assert_eq!(args.destination(), None);
    }

    #[test]
    fn flags_and_output_in_any_order() {
        let args = parse(&["--hydratable", "dist/footer.html", "--document"])
            .unwrap();
        assert_eq!(args, PrerenderArgs {
            output: Some(PathBuf::from("dist/footer.html")),
            document: true,
            hydratable: true,
        });
        assert_eq!(args.destination(), Some(Path::new("dist/footer.html")));
    }

    #[test]
    fn dash_means_stdout() {
        let args = parse(&["-"]).unwrap();
        assert_eq!(args.destination(), None);
    }

    #[test]
    fn help_is_available() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("--document"));
    }

    #[test]
    fn rejects_unknown_flags() {
        let err = parse(&["--minify"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn rejects_second_output() {
        assert!(parse(&["a.html", "b.html"]).is_err());
    }
}
