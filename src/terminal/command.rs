use crate::data::skills::SkillCatalog;

pub trait Executable: Send + Sync {
    fn execute(&self, catalog: &SkillCatalog, args: Vec<&str>) -> CommandRes;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRes {
    /// Lines appended after the echoed prompt.
    Output(Vec<String>),
    /// Wipe the transcript. Nothing is echoed.
    Clear,
}

impl CommandRes {
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Output(lines.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cmd {
    Help,
    Levels,
    Clear,
    Ls,
    Cat,
    Unknown,
}

impl From<&str> for Cmd {
    fn from(value: &str) -> Self {
        match value {
            "help" => Self::Help,
            "levels" => Self::Levels,
            "clear" => Self::Clear,
            "ls" => Self::Ls,
            "cat" => Self::Cat,
            _ => Self::Unknown,
        }
    }
}

impl Cmd {
    pub fn all() -> Vec<&'static str> {
        vec!["cat", "clear", "help", "levels", "ls"]
    }
}
