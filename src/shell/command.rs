/// One of the six single-letter menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Load,
    Add,
    List,
    Delete,
    Save,
    Exit,
}

impl MenuCommand {
    /// Parses a menu choice as typed by the user.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// anything other than the six menu letters is `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::List),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_letters() {
        assert_eq!(MenuCommand::parse("l"), Some(MenuCommand::Load));
        assert_eq!(MenuCommand::parse("a"), Some(MenuCommand::Add));
        assert_eq!(MenuCommand::parse("i"), Some(MenuCommand::List));
        assert_eq!(MenuCommand::parse("d"), Some(MenuCommand::Delete));
        assert_eq!(MenuCommand::parse("s"), Some(MenuCommand::Save));
        assert_eq!(MenuCommand::parse("x"), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(MenuCommand::parse("X"), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::parse("A"), Some(MenuCommand::Add));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(MenuCommand::parse("  s \n"), Some(MenuCommand::Save));
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        assert_eq!(MenuCommand::parse(""), None);
        assert_eq!(MenuCommand::parse("q"), None);
        assert_eq!(MenuCommand::parse("list"), None);
        assert_eq!(MenuCommand::parse("xx"), None);
    }
}
