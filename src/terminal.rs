mod command;
mod simple_tools;
mod skill_tools;

pub use command::{Cmd, CommandRes};

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use command::Executable;
use simple_tools::{ClearCommand, HelpCommand, LevelsCommand, UnknownCommand};
use skill_tools::{CatCommand, LsCommand};

use crate::config::Timings;
use crate::data::skills::{SkillCatalog, SkillCategory};
use crate::timer::{Schedule, TimerDriven, TimerSlot, TimerToken};

static HISTORY_SIZE: usize = 100;

pub const WELCOME: &str = "Welcome to Skills Explorer. Type 'help' to see available commands.";

/// Buttons under the terminal: `(command, description)`.
pub const QUICK_COMMANDS: [(&str, &str); 4] = [
    ("help", "Show commands"),
    ("ls cloud", "Cloud skills"),
    ("levels", "Proficiency guide"),
    ("cat Docker", "Skill details"),
];

/// How a transcript line is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Prompt,
    Error,
    Output,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.starts_with('$') {
            Self::Prompt
        } else if line.contains("Command not found") {
            Self::Error
        } else {
            Self::Output
        }
    }
}

#[derive(Debug, Clone)]
struct HistState {
    prefix: String,
    opts: Vec<String>,
    index: usize,
}

/// The skills explorer: a transcript, an input line and a small command set
/// over a [`SkillCatalog`]. Commands run after a simulated latency.
pub struct SkillTerminal {
    catalog: SkillCatalog,
    commands: HashMap<Cmd, Box<dyn Executable>>,
    transcript: Vec<String>,
    input: String,
    pending: Option<String>,
    latency: Duration,
    slot: TimerSlot,
    history: VecDeque<String>,
    hist_state: Option<HistState>,
}

impl Default for SkillTerminal {
    fn default() -> Self {
        Self::new(SkillCatalog::default(), Timings::default().command_latency)
    }
}

impl SkillTerminal {
    pub fn new(catalog: SkillCatalog, latency: Duration) -> Self {
        let mut terminal = Self {
            catalog,
            commands: HashMap::new(),
            transcript: Vec::new(),
            input: String::new(),
            pending: None,
            latency,
            slot: TimerSlot::new(),
            history: VecDeque::new(),
            hist_state: None,
        };
        terminal.initialize_commands();
        terminal
    }

    fn initialize_commands(&mut self) {
        self.commands.insert(Cmd::Help, Box::new(HelpCommand));
        self.commands.insert(Cmd::Levels, Box::new(LevelsCommand));
        self.commands.insert(Cmd::Clear, Box::new(ClearCommand));
        self.commands.insert(Cmd::Ls, Box::new(LsCommand));
        self.commands.insert(Cmd::Cat, Box::new(CatCommand));
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input buffer. Ends any history recall in progress.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
        self.hist_state = None;
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Submits the current input buffer.
    pub fn submit_input(&mut self) -> Option<Schedule> {
        let input = self.input.clone();
        self.submit(&input)
    }

    /// Accepts a command line and schedules its execution. Blank lines and
    /// submissions while a command is still running are rejected.
    pub fn submit(&mut self, input: &str) -> Option<Schedule> {
        let line = input.trim();
        if line.is_empty() || self.is_processing() {
            return None;
        }
        log::debug!("terminal: queued `{line}`");
        self.hist_state = None;
        self.history.push_back(line.to_string());
        if self.history.len() > HISTORY_SIZE {
            self.history.pop_front();
        }
        self.pending = Some(input.to_string());
        Some(self.slot.arm(self.latency))
    }

    /// Puts a quick command into the input buffer; the user still submits it.
    pub fn load_command(&mut self, cmd: &str) {
        self.set_input(cmd);
    }

    /// Runs a line against the command set without touching the transcript.
    pub fn handle_command(&self, input: &str) -> CommandRes {
        let line = input.trim().to_lowercase();
        let mut parts = line.split_whitespace();
        let Some(cmd_text) = parts.next() else {
            return CommandRes::Output(Vec::new());
        };
        let cmd = Cmd::from(cmd_text);
        log::debug!("terminal: dispatch {cmd:?}");
        match self.commands.get(&cmd) {
            Some(command) => command.execute(&self.catalog, parts.collect()),
            None => UnknownCommand::new(line.as_str()).run(),
        }
    }

    fn finish(&mut self, line: String) {
        match self.handle_command(&line) {
            CommandRes::Clear => self.transcript.clear(),
            CommandRes::Output(lines) => {
                self.transcript.push(format!("$ {line}"));
                self.transcript.extend(lines);
                self.transcript.push(String::new());
            }
        }
        self.input.clear();
    }

    /// Steps back through history entries that start with the text typed
    /// when recall began. Returns false when there is nothing older.
    pub fn history_prev(&mut self) -> bool {
        let mut state = match self.hist_state.take() {
            Some(state) => state,
            None => {
                let prefix = self.input.clone();
                let opts: Vec<String> = self
                    .history
                    .iter()
                    .filter(|s| s.starts_with(prefix.as_str()))
                    .cloned()
                    .collect();
                let index = opts.len();
                HistState {
                    prefix,
                    opts,
                    index,
                }
            }
        };
        if state.index == 0 {
            if !state.opts.is_empty() {
                self.hist_state = Some(state);
            }
            return false;
        }
        state.index -= 1;
        self.input = state.opts[state.index].clone();
        self.hist_state = Some(state);
        true
    }

    /// Steps forward; walking past the newest entry restores the prefix.
    pub fn history_next(&mut self) -> bool {
        let Some(mut state) = self.hist_state.take() else {
            return false;
        };
        state.index += 1;
        if state.index >= state.opts.len() {
            self.input = state.prefix;
            return true;
        }
        self.input = state.opts[state.index].clone();
        self.hist_state = Some(state);
        true
    }

    /// Completion candidates for `input`, sorted.
    pub fn complete(&self, input: &str) -> Vec<String> {
        self.completion(input).1
    }

    /// Applies a unique completion to the input buffer; otherwise leaves
    /// the buffer alone and returns every candidate.
    pub fn tab(&mut self) -> Vec<String> {
        let (head, opts) = self.completion(&self.input);
        if let [only] = opts.as_slice() {
            self.set_input(format!("{head}{only}"));
        }
        opts
    }

    fn completion(&self, input: &str) -> (String, Vec<String>) {
        let lowered = input.trim_start().to_lowercase();
        let Some((cmd_text, rest)) = lowered.split_once(' ') else {
            if lowered.is_empty() {
                return (String::new(), Vec::new());
            }
            let opts = Cmd::all()
                .into_iter()
                .filter(|c| c.starts_with(lowered.as_str()))
                .map(String::from)
                .collect();
            return (String::new(), opts);
        };
        let rest = rest.trim_start();
        let head = format!("{cmd_text} ");
        let mut opts: Vec<String> = match Cmd::from(cmd_text) {
            Cmd::Ls if !rest.contains(' ') => SkillCategory::all()
                .into_iter()
                .map(|c| c.id())
                .filter(|id| id.starts_with(rest))
                .map(String::from)
                .collect(),
            Cmd::Cat => self
                .catalog
                .skills()
                .iter()
                .map(|s| s.name.to_lowercase())
                .filter(|name| name.starts_with(rest))
                .collect(),
            _ => Vec::new(),
        };
        opts.sort();
        (head, opts)
    }
}

impl TimerDriven for SkillTerminal {
    fn on_timer(&mut self, token: TimerToken) -> Option<Schedule> {
        if !self.slot.fire(token) {
            return None;
        }
        if let Some(line) = self.pending.take() {
            self.finish(line);
        }
        None
    }

    fn cancel_timers(&mut self) {
        self.slot.cancel();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::skills::Skill;
    use crate::timer::VirtualClock;

    const LATENCY: Duration = Duration::from_millis(500);

    fn run(terminal: &mut SkillTerminal, clock: &mut VirtualClock, line: &str) {
        let schedule = terminal.submit(line);
        assert!(schedule.is_some(), "`{line}` was rejected");
        clock.schedule(schedule);
        clock.run_until_idle(terminal);
    }

    fn terminal() -> (SkillTerminal, VirtualClock) {
        (
            SkillTerminal::new(SkillCatalog::default(), LATENCY),
            VirtualClock::new(),
        )
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let (mut terminal, _) = terminal();
        assert!(terminal.submit("   ").is_none());
        assert!(!terminal.is_processing());
        assert_eq!(terminal.history().count(), 0);
    }

    #[test]
    fn test_output_appears_after_latency() {
        let (mut terminal, mut clock) = terminal();
        terminal.set_input("help");
        clock.schedule(terminal.submit_input());
        assert!(terminal.is_processing());

        clock.advance(&mut terminal, Duration::from_millis(499));
        assert!(terminal.transcript().is_empty());
        assert_eq!(terminal.input(), "help");

        clock.advance(&mut terminal, Duration::from_millis(1));
        assert!(!terminal.is_processing());
        assert_eq!(terminal.input(), "");
        let t = terminal.transcript();
        assert_eq!(t.first().map(String::as_str), Some("$ help"));
        assert_eq!(t[1], "Available commands:");
        assert_eq!(t.last().map(String::as_str), Some(""));
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn test_submit_while_processing_is_rejected() {
        let (mut terminal, mut clock) = terminal();
        clock.schedule(terminal.submit("levels"));
        assert!(terminal.submit("help").is_none());
        clock.run_until_idle(&mut terminal);
        assert_eq!(terminal.transcript()[0], "$ levels");
        assert_eq!(terminal.transcript()[1], "Proficiency Levels:");
        assert_eq!(terminal.transcript().len(), 7);
    }

    #[test]
    fn test_ls_lists_categories_regardless_of_history() {
        let (mut terminal, mut clock) = terminal();
        run(&mut terminal, &mut clock, "cat docker");
        run(&mut terminal, &mut clock, "ls");
        let start = terminal
            .transcript()
            .iter()
            .position(|l| l == "$ ls")
            .unwrap();
        let ids: Vec<&str> = terminal.transcript()[start + 2..start + 8]
            .iter()
            .filter_map(|l| l.trim_start().split(" - ").next())
            .collect();
        assert_eq!(
            ids,
            vec!["cloud", "containers", "infrastructure", "devops", "development", "database"]
        );
    }

    #[test]
    fn test_ls_category_over_custom_catalog() {
        let catalog = SkillCatalog::new(vec![
            Skill::new("AWS", "aws.svg", SkillCategory::Cloud, 90),
            Skill::new("OCI", "oci.svg", SkillCategory::Cloud, 90),
        ]);
        let mut terminal = SkillTerminal::new(catalog, LATENCY);
        let mut clock = VirtualClock::new();
        run(&mut terminal, &mut clock, "ls cloud");
        assert_eq!(
            terminal.transcript(),
            &["$ ls cloud", "Cloud Platforms:", "  AWS (90%)", "  OCI (90%)", ""]
        );
    }

    #[test]
    fn test_clear_wipes_without_echo() {
        let (mut terminal, mut clock) = terminal();
        run(&mut terminal, &mut clock, "help");
        run(&mut terminal, &mut clock, "levels");
        assert!(!terminal.transcript().is_empty());
        run(&mut terminal, &mut clock, "clear");
        assert!(terminal.transcript().is_empty());
        assert!(!terminal.is_processing());
    }

    #[test]
    fn test_unknown_command() {
        let (mut terminal, mut clock) = terminal();
        run(&mut terminal, &mut clock, "FooBar");
        assert_eq!(
            terminal.transcript(),
            &[
                "$ FooBar",
                "Command not found: foobar",
                r#"Type "help" for available commands."#,
                ""
            ]
        );
        assert_eq!(LineKind::of(&terminal.transcript()[1]), LineKind::Error);
        assert_eq!(terminal.catalog.skills().len(), crate::data::skills::SKILLS.len());
    }

    #[test]
    fn test_cat_is_case_insensitive() {
        let (mut terminal, mut clock) = terminal();
        run(&mut terminal, &mut clock, "cat Docker");
        assert_eq!(terminal.transcript()[1], "Skill: Docker");
        assert_eq!(terminal.transcript()[2], "Category: containers");
        assert_eq!(terminal.transcript()[3], "Proficiency: 90%");
    }

    #[test]
    fn test_echo_keeps_raw_input() {
        let (mut terminal, mut clock) = terminal();
        run(&mut terminal, &mut clock, "  HELP  ");
        assert_eq!(terminal.transcript()[0], "$   HELP  ");
        assert_eq!(terminal.transcript()[1], "Available commands:");
        assert_eq!(terminal.history().last(), Some("HELP"));
    }

    #[test]
    fn test_quick_command_only_fills_input() {
        let (mut terminal, _) = terminal();
        for (cmd, _) in QUICK_COMMANDS {
            terminal.load_command(cmd);
            assert_eq!(terminal.input(), cmd);
            assert!(terminal.transcript().is_empty());
            assert!(!terminal.is_processing());
        }
        assert_eq!(terminal.history().count(), 0);
    }

    #[test]
    fn test_teardown_drops_pending_command() {
        let (mut terminal, mut clock) = terminal();
        clock.schedule(terminal.submit("help"));
        terminal.cancel_timers();
        clock.run_until_idle(&mut terminal);
        assert!(terminal.transcript().is_empty());
        assert_eq!(terminal.input(), "");
        assert!(!terminal.is_processing());
    }

    #[test]
    fn test_history_recall_with_prefix() {
        let (mut terminal, mut clock) = terminal();
        for line in ["ls cloud", "help", "ls devops"] {
            run(&mut terminal, &mut clock, line);
        }
        terminal.set_input("ls");
        assert!(terminal.history_prev());
        assert_eq!(terminal.input(), "ls devops");
        assert!(terminal.history_prev());
        assert_eq!(terminal.input(), "ls cloud");
        assert!(!terminal.history_prev());
        assert_eq!(terminal.input(), "ls cloud");
        assert!(terminal.history_next());
        assert_eq!(terminal.input(), "ls devops");
        assert!(terminal.history_next());
        assert_eq!(terminal.input(), "ls");
        assert!(!terminal.history_next());
    }

    #[test]
    fn test_history_is_bounded() {
        let (mut terminal, mut clock) = terminal();
        for i in 0..=HISTORY_SIZE {
            run(&mut terminal, &mut clock, &format!("cat skill{i}"));
        }
        assert_eq!(terminal.history().count(), HISTORY_SIZE);
        assert_eq!(terminal.history().next(), Some("cat skill1"));
    }

    #[test]
    fn test_tab_completion() {
        let (mut terminal, _) = terminal();
        assert_eq!(terminal.complete("c"), vec!["cat", "clear"]);
        assert_eq!(terminal.complete("ls d"), vec!["database", "development", "devops"]);
        assert_eq!(terminal.complete("cat git"), vec!["git", "github actions", "gitlab ci"]);
        assert!(terminal.complete("help me").is_empty());
        assert!(terminal.complete("").is_empty());

        terminal.set_input("ls con");
        assert_eq!(terminal.tab(), vec!["containers"]);
        assert_eq!(terminal.input(), "ls containers");

        terminal.set_input("cat github a");
        terminal.tab();
        assert_eq!(terminal.input(), "cat github actions");
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(LineKind::of("$ ls"), LineKind::Prompt);
        assert_eq!(LineKind::of("  AWS (85%)"), LineKind::Output);
    }
}
