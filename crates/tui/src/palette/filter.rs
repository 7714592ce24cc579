//! Search filtering over palette groups.
//!
//! Matching is a case-insensitive substring test on the entry title. The
//! registry is never mutated; every call produces a fresh `PaletteView`.

use crate::palette::registry::{ACCOUNTS_GROUP, CommandEntry, CommandGroup, HELP_GROUP};

/// The filtered, display-ready palette contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteView {
    /// Static groups that still have entries, in registry order.
    pub groups: Vec<CommandGroup>,
    /// Matching account-switch commands.
    pub accounts: Vec<CommandEntry>,
}

impl PaletteView {
    /// Sections in display order: static groups, then accounts, then help.
    pub fn sections(&self) -> Vec<(&str, &[CommandEntry])> {
        let mut sections: Vec<(&str, &[CommandEntry])> = self
            .groups
            .iter()
            .filter(|g| g.name != HELP_GROUP)
            .map(|g| (g.name.as_str(), g.entries.as_slice()))
            .collect();
        if !self.accounts.is_empty() {
            sections.push((ACCOUNTS_GROUP, self.accounts.as_slice()));
        }
        sections.extend(
            self.groups
                .iter()
                .filter(|g| g.name == HELP_GROUP)
                .map(|g| (g.name.as_str(), g.entries.as_slice())),
        );
        sections
    }

    /// Entries flattened in display order.
    pub fn entries(&self) -> Vec<&CommandEntry> {
        self.sections()
            .into_iter()
            .flat_map(|(_, entries)| entries.iter())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum::<usize>() + self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry at a flattened display index.
    pub fn entry_at(&self, index: usize) -> Option<&CommandEntry> {
        self.entries().into_iter().nth(index)
    }
}

fn matches(entry: &CommandEntry, term: &str) -> bool {
    entry.title.to_lowercase().contains(term)
}

/// Narrow groups and account commands to titles containing `search`.
pub fn filter(groups: &[CommandGroup], accounts: &[CommandEntry], search: &str) -> PaletteView {
    let term = search.to_lowercase();

    let groups = groups
        .iter()
        .map(|g| CommandGroup {
            name: g.name.clone(),
            entries: g
                .entries
                .iter()
                .filter(|e| matches(e, &term))
                .cloned()
                .collect(),
        })
        .filter(|g| !g.entries.is_empty())
        .collect();

    let accounts = accounts
        .iter()
        .filter(|e| matches(e, &term))
        .cloned()
        .collect();

    PaletteView { groups, accounts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::registry::{CommandTarget, build_groups, navigation_config};
    use mailzero_config::BindingSet;

    fn account(email: &str) -> CommandEntry {
        CommandEntry {
            title: format!("Switch to {email}"),
            group: ACCOUNTS_GROUP.to_string(),
            target: CommandTarget::SwitchAccount {
                connection_id: format!("id-{email}"),
                email: email.to_string(),
            },
            icon: None,
            shortcut_hint: None,
        }
    }

    fn registry() -> Vec<CommandGroup> {
        build_groups(&navigation_config(), "/mail/inbox", &BindingSet::defaults())
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let groups = registry();
        let accounts = vec![account("me@home.example.com")];
        let view = filter(&groups, &accounts, "");

        assert_eq!(view.groups, groups);
        assert_eq!(view.accounts, accounts);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let view = filter(&registry(), &[], "INB");

        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].name, "Mail");
        assert_eq!(view.groups[0].entries[0].title, "Inbox");
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let view = filter(&registry(), &[], "docs");

        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].name, HELP_GROUP);
    }

    #[test]
    fn test_accounts_filtered_by_title() {
        let accounts = vec![account("me@home.example.com"), account("boss@corp.example.com")];

        let view = filter(&registry(), &accounts, "home");
        assert_eq!(view.accounts.len(), 1);

        let view = filter(&registry(), &accounts, "switch");
        assert_eq!(view.accounts.len(), 2);
    }

    #[test]
    fn test_registry_is_untouched() {
        let groups = registry();
        let before = groups.clone();
        let _ = filter(&groups, &[], "nothing matches this");
        assert_eq!(groups, before);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let view = filter(&registry(), &[account("a@b.c")], "zzz");
        assert!(view.is_empty());
        assert!(view.entry_at(0).is_none());
    }

    #[test]
    fn test_sections_put_accounts_before_help() {
        let view = filter(&registry(), &[account("me@home.example.com")], "");
        let names: Vec<&str> = view.sections().iter().map(|(n, _)| *n).collect();

        assert_eq!(
            names,
            vec!["", "Mail", "Settings", "Categories", "Accounts", "Help"]
        );
        assert_eq!(view.entries().len(), view.len());
        assert_eq!(view.entry_at(0).unwrap().title, "Compose message");
    }
}
