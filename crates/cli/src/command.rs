/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Any plain line replaces the search box contents
    Query(String),
    /// `:search` re-runs the search for the current query
    Search,
    /// `:select <id|number>` picks a candidate
    Select(String),
    /// `:chart <path>` writes the chart SVG
    Chart(String),
    /// `:help`
    Help,
    /// `:quit` / `:q`
    Quit,
    /// Unrecognised `:` command
    Unknown(String),
}

pub const HELP: &str = "\
Type to search (at least 2 characters).
  :select <id|number>  pick a candidate
  :search              search again for the current text
  :chart <path>        save the price chart as SVG
  :help                show this help
  :quit                exit";

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Query(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match (name, arg) {
            ("search", _) => Command::Search,
            ("select" | "s", arg) if !arg.is_empty() => Command::Select(arg.to_string()),
            ("chart", arg) if !arg.is_empty() => Command::Chart(arg.to_string()),
            ("help" | "h", _) => Command::Help,
            ("quit" | "q", _) => Command::Quit,
            _ => Command::Unknown(line.to_string()),
        }
    }
}
