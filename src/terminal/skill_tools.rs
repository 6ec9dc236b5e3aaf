use super::command::{CommandRes, Executable};
use crate::data::skills::{SkillCatalog, SkillCategory};

pub struct LsCommand;

impl LsCommand {
    fn categories() -> Vec<String> {
        std::iter::once("Available categories:".to_string())
            .chain(
                SkillCategory::all()
                    .into_iter()
                    .map(|c| format!("  {} - {}", c.id(), c.title())),
            )
            .collect()
    }
}

impl Executable for LsCommand {
    /// Only the first argument is looked at; anything that is not a
    /// category id falls back to the category listing.
    fn execute(&self, catalog: &SkillCatalog, args: Vec<&str>) -> CommandRes {
        let category = args.first().and_then(|a| a.parse::<SkillCategory>().ok());
        let Some(category) = category else {
            return CommandRes::Output(Self::categories());
        };
        let mut out = vec![format!("{}:", category.title())];
        out.extend(
            catalog
                .in_category(category)
                .map(|s| format!("  {} ({}%)", s.name, s.level)),
        );
        CommandRes::Output(out)
    }
}

pub struct CatCommand;

impl Executable for CatCommand {
    fn execute(&self, catalog: &SkillCatalog, args: Vec<&str>) -> CommandRes {
        let name = args.join(" ");
        match catalog.find(&name) {
            Some(skill) => CommandRes::Output(vec![
                format!("Skill: {}", skill.name),
                format!("Category: {}", skill.category),
                format!("Proficiency: {}%", skill.level),
                String::new(),
                format!("Icon: {}", skill.icon),
            ]),
            None => CommandRes::Output(vec![format!(r#"Skill "{name}" not found"#)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::skills::Skill;

    fn out(res: CommandRes) -> Vec<String> {
        match res {
            CommandRes::Output(lines) => lines,
            CommandRes::Clear => panic!("expected output"),
        }
    }

    #[test]
    fn test_ls_unknown_category_lists_ids() {
        let catalog = SkillCatalog::default();
        let lines = out(LsCommand.execute(&catalog, vec!["nope"]));
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Available categories:");
        assert_eq!(lines[1], "  cloud - Cloud Platforms");
        assert_eq!(lines[6], "  database - Databases");
        assert_eq!(out(LsCommand.execute(&catalog, vec![])), lines);
    }

    #[test]
    fn test_ls_empty_category_prints_only_title() {
        let catalog = SkillCatalog::new(vec![Skill::new("AWS", "x", SkillCategory::Cloud, 90)]);
        let lines = out(LsCommand.execute(&catalog, vec!["database"]));
        assert_eq!(lines, vec!["Databases:"]);
    }

    #[test]
    fn test_cat_joins_multi_word_names() {
        let catalog = SkillCatalog::default();
        let lines = out(CatCommand.execute(&catalog, vec!["github", "actions"]));
        assert_eq!(lines[0], "Skill: GitHub Actions");
        assert_eq!(lines[1], "Category: devops");
        assert_eq!(lines[2], "Proficiency: 85%");
        assert_eq!(lines[3], "");
        assert!(lines[4].starts_with("Icon: https://"));
    }

    #[test]
    fn test_cat_without_name() {
        let catalog = SkillCatalog::default();
        let lines = out(CatCommand.execute(&catalog, vec![]));
        assert_eq!(lines, vec![r#"Skill "" not found"#]);
    }
}
