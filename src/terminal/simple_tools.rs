use super::command::{CommandRes, Executable};
use crate::data::skills::SkillCatalog;

const HELP_TEXT: [&str; 6] = [
    "Available commands:",
    "  ls <category>     - List skills in a category",
    "  cat <skill>       - Show skill details",
    "  levels            - Show proficiency levels",
    "  clear             - Clear terminal",
    "  help              - Show this help",
];

const LEVELS_TEXT: [&str; 5] = [
    "Proficiency Levels:",
    "  Beginner (30%)     - Basic understanding",
    "  Intermediate (60%) - Practical experience",
    "  Advanced (85%)     - Production usage",
    "  Expert (100%)      - Deep expertise",
];

pub struct HelpCommand;

impl Executable for HelpCommand {
    fn execute(&self, _catalog: &SkillCatalog, _args: Vec<&str>) -> CommandRes {
        CommandRes::lines(HELP_TEXT)
    }
}

pub struct LevelsCommand;

impl Executable for LevelsCommand {
    fn execute(&self, _catalog: &SkillCatalog, _args: Vec<&str>) -> CommandRes {
        CommandRes::lines(LEVELS_TEXT)
    }
}

pub struct ClearCommand;

impl Executable for ClearCommand {
    fn execute(&self, _catalog: &SkillCatalog, _args: Vec<&str>) -> CommandRes {
        CommandRes::Clear
    }
}

pub struct UnknownCommand {
    line: String,
}

impl UnknownCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    pub fn run(&self) -> CommandRes {
        CommandRes::Output(vec![
            format!("Command not found: {}", self.line),
            r#"Type "help" for available commands."#.to_string(),
        ])
    }
}
