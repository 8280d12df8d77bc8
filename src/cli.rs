use clap::Parser;

/// Raw command line; `-d`/`-f` are resolved from the tokens by [`Flags::scan`].
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "mkentry",
    version,
    about = "Create directories and append numbered, timestamped entries to text files",
    override_usage = "mkentry [-d SEGMENT...] [-f FILE]"
)]
pub struct Cli {
    /// `-d SEGMENT...` joins segments into a directory; `-f FILE` appends to a file in it.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// True when the command line carried no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn flags(&self) -> Flags {
        Flags::scan(&self.args)
    }
}

#[derive(Clone, Copy, Debug)]
enum Arity {
    UntilNextFlag,
    Single,
}

#[derive(Clone, Copy, Debug)]
struct FlagSpec {
    token: &'static str,
    arity: Arity,
}

const DIRS: FlagSpec = FlagSpec {
    token: "-d",
    arity: Arity::UntilNextFlag,
};

const FILE: FlagSpec = FlagSpec {
    token: "-f",
    arity: Arity::Single,
};

impl FlagSpec {
    /// Values following the first literal occurrence of the flag, or `None`
    /// when the flag is absent. Any token starting with `-` ends the group.
    fn values(&self, tokens: &[String]) -> Option<Vec<String>> {
        let start = tokens.iter().position(|token| token == self.token)? + 1;
        let limit = match self.arity {
            Arity::UntilNextFlag => usize::MAX,
            Arity::Single => 1,
        };
        Some(
            tokens[start..]
                .iter()
                .take_while(|token| !token.starts_with('-'))
                .take(limit)
                .cloned()
                .collect(),
        )
    }
}

/// Flag groups found on the command line. `None` means the flag was absent;
/// `Some(empty)` means it was present without a usable value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub dirs: Option<Vec<String>>,
    pub file: Option<Option<String>>,
}

impl Flags {
    pub fn scan(tokens: &[String]) -> Self {
        Self {
            dirs: DIRS.values(tokens),
            file: FILE
                .values(tokens)
                .map(|values| values.into_iter().next()),
        }
    }
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("mkentry").chain(args.iter().copied())).unwrap()
    }

    fn flags(args: &[&str]) -> Flags {
        parse_from(args).flags()
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn no_arguments_is_empty() {
        let cli = parse_from(&[]);
        assert!(cli.is_empty());
        assert_eq!(cli.flags(), Flags::default());
    }

    #[test]
    fn dir_flag_collects_until_next_flag() {
        let parsed = flags(&["-d", "a", "b", "c", "-f", "notes.txt"]);
        assert_eq!(parsed.dirs, Some(strings(&["a", "b", "c"])));
        assert_eq!(parsed.file, Some(Some("notes.txt".to_owned())));
    }

    #[test]
    fn group_order_does_not_matter() {
        let forward = flags(&["-d", "a", "b", "-f", "x.txt"]);
        let reversed = flags(&["-f", "x.txt", "-d", "a", "b"]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn dir_flag_at_end_has_no_segments() {
        let parsed = flags(&["-f", "x.txt", "-d"]);
        assert_eq!(parsed.dirs, Some(Vec::new()));
    }

    #[test]
    fn file_flag_followed_by_flag_has_no_value() {
        let parsed = flags(&["-f", "-d", "a"]);
        assert_eq!(parsed.file, Some(None));
        assert_eq!(parsed.dirs, Some(strings(&["a"])));
    }

    #[test]
    fn stray_token_is_kept_but_resolves_nothing() {
        let cli = parse_from(&["foo"]);
        assert!(!cli.is_empty());
        assert_eq!(cli.flags(), Flags::default());
    }

    #[test]
    fn file_flag_takes_only_the_next_token() {
        let parsed = flags(&["-f", "a.txt", "b.txt"]);
        assert_eq!(parsed.file, Some(Some("a.txt".to_owned())));
        assert_eq!(parsed.dirs, None);
    }

    #[test]
    fn unknown_flag_ends_dir_group_and_is_ignored() {
        let parsed = flags(&["-d", "a", "-x", "-f", "n.txt"]);
        assert_eq!(parsed.dirs, Some(strings(&["a"])));
        assert_eq!(parsed.file, Some(Some("n.txt".to_owned())));
    }

    #[test]
    fn bare_dash_ends_dir_group() {
        let parsed = flags(&["-d", "a", "-", "b"]);
        assert_eq!(parsed.dirs, Some(strings(&["a"])));
    }

    #[test]
    fn only_first_dir_group_is_used() {
        let parsed = flags(&["-d", "a", "-d", "b"]);
        assert_eq!(parsed.dirs, Some(strings(&["a"])));
    }

    #[test]
    fn attached_values_are_not_flags() {
        assert_eq!(flags(&["-da"]), Flags::default());
        assert_eq!(flags(&["-fname"]), Flags::default());
        assert_eq!(flags(&["-da", "-f", "x.txt"]).dirs, None);
    }
}
