//! Command registry: static navigation config plus dynamic account commands.
//!
//! Responsibilities:
//! - Define the typed navigation table (`NavSection` → `NavGroup` → `NavItem`).
//! - Aggregate navigation items, compose and help commands into ordered groups.
//! - Build one "Switch to ..." command per non-active connection.
//!
//! Does NOT handle:
//! - Search filtering (see `palette::filter`).
//! - Executing commands (see `palette::dispatch`).
//!
//! Invariants:
//! - Group order: compose, Mail, Settings, one group per `Other` section, Help.
//! - Back-navigation items appear only while the current route is under `/settings`.
//! - The active connection never appears as a switch target.

use mailzero_client::{Connection, Session};
use mailzero_config::BindingSet;
use mailzero_config::constants::DOCS_URL;
use mailzero_config::types::{HELP_ACTION, NEW_EMAIL_ACTION};

/// Heading of the unnamed compose group.
pub const COMPOSE_GROUP: &str = "";
pub const MAIL_GROUP: &str = "Mail";
pub const SETTINGS_GROUP: &str = "Settings";
pub const ACCOUNTS_GROUP: &str = "Accounts";
pub const HELP_GROUP: &str = "Help";

/// Route of the shortcuts settings screen.
pub const SHORTCUTS_ROUTE: &str = "/settings/shortcuts";

/// Which palette group a navigation section feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Mail,
    Settings,
    /// Any other section; rendered as its own group under this name.
    Other(&'static str),
}

/// A navigable destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Option<&'static str>,
    pub shortcut: Option<&'static str>,
    /// "Back to ..." entries shown only inside the section they leave.
    pub is_back_button: bool,
}

impl NavItem {
    pub const fn new(title: &'static str, url: &'static str) -> Self {
        Self {
            title,
            url,
            icon: None,
            shortcut: None,
            is_back_button: false,
        }
    }

    pub const fn icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub const fn shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub const fn back(mut self) -> Self {
        self.is_back_button = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub kind: SectionKind,
    pub groups: Vec<NavGroup>,
}

impl NavSection {
    fn items(&self) -> impl Iterator<Item = &NavItem> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }
}

/// The built-in navigation table.
pub fn navigation_config() -> Vec<NavSection> {
    vec![
        NavSection {
            kind: SectionKind::Mail,
            groups: vec![
                NavGroup {
                    title: "Core",
                    items: vec![
                        NavItem::new("Inbox", "/mail/inbox").icon("▤"),
                        NavItem::new("Drafts", "/mail/draft").icon("✎"),
                        NavItem::new("Sent", "/mail/sent").icon("➤"),
                    ],
                },
                NavGroup {
                    title: "Management",
                    items: vec![
                        NavItem::new("Spam", "/mail/spam").icon("!"),
                        NavItem::new("Archive", "/mail/archive").icon("▣"),
                        NavItem::new("Bin", "/mail/bin").icon("✕"),
                    ],
                },
            ],
        },
        NavSection {
            kind: SectionKind::Settings,
            groups: vec![NavGroup {
                title: "Settings",
                items: vec![
                    NavItem::new("Back to Mail", "/mail/inbox").icon("←").back(),
                    NavItem::new("General", "/settings/general").icon("⚙"),
                    NavItem::new("Connections", "/settings/connections").icon("⇄"),
                    NavItem::new("Security", "/settings/security").icon("⚿"),
                    NavItem::new("Appearance", "/settings/appearance").icon("◐"),
                    NavItem::new("Shortcuts", SHORTCUTS_ROUTE).icon("⌨"),
                ],
            }],
        },
        NavSection {
            kind: SectionKind::Other("Categories"),
            groups: vec![NavGroup {
                title: "Categories",
                items: vec![
                    NavItem::new("Primary", "/mail/inbox?category=primary"),
                    NavItem::new("Important", "/mail/inbox?category=important"),
                    NavItem::new("Personal", "/mail/inbox?category=personal"),
                    NavItem::new("Updates", "/mail/inbox?category=updates"),
                    NavItem::new("Promotions", "/mail/inbox?category=promotions"),
                ],
            }],
        },
    ]
}

/// What a command does when executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandTarget {
    Navigate(String),
    OpenUrl(String),
    Compose,
    SwitchAccount { connection_id: String, email: String },
}

/// A single palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub title: String,
    pub group: String,
    pub target: CommandTarget,
    pub icon: Option<&'static str>,
    pub shortcut_hint: Option<String>,
}

impl CommandEntry {
    fn from_nav(item: &NavItem, group: &str) -> Self {
        Self {
            title: item.title.to_string(),
            group: group.to_string(),
            target: CommandTarget::Navigate(item.url.to_string()),
            icon: item.icon,
            shortcut_hint: item.shortcut.map(String::from),
        }
    }
}

/// A named list of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandGroup {
    pub name: String,
    pub entries: Vec<CommandEntry>,
}

/// Aggregate every static command into display-ordered groups.
pub fn build_groups(
    sections: &[NavSection],
    current_path: &str,
    bindings: &BindingSet,
) -> Vec<CommandGroup> {
    let in_settings = current_path.starts_with("/settings");

    let compose = CommandGroup {
        name: COMPOSE_GROUP.to_string(),
        entries: vec![CommandEntry {
            title: "Compose message".to_string(),
            group: COMPOSE_GROUP.to_string(),
            target: CommandTarget::Compose,
            icon: Some("✎"),
            shortcut_hint: bindings.display_for(NEW_EMAIL_ACTION),
        }],
    };

    let mut mail = Vec::new();
    let mut settings = Vec::new();
    let mut others = Vec::new();
    for section in sections {
        match section.kind {
            SectionKind::Mail => {
                mail.extend(section.items().map(|i| CommandEntry::from_nav(i, MAIL_GROUP)));
            }
            SectionKind::Settings => settings.extend(
                section
                    .items()
                    .filter(|i| in_settings || !i.is_back_button)
                    .map(|i| CommandEntry::from_nav(i, SETTINGS_GROUP)),
            ),
            SectionKind::Other(name) => others.push(CommandGroup {
                name: name.to_string(),
                entries: section
                    .items()
                    .map(|i| CommandEntry::from_nav(i, name))
                    .collect(),
            }),
        }
    }

    let help = CommandGroup {
        name: HELP_GROUP.to_string(),
        entries: vec![
            CommandEntry {
                title: HELP_ACTION.to_string(),
                group: HELP_GROUP.to_string(),
                target: CommandTarget::Navigate(SHORTCUTS_ROUTE.to_string()),
                icon: Some("?"),
                shortcut_hint: bindings.display_for(HELP_ACTION),
            },
            CommandEntry {
                title: "Go to docs".to_string(),
                group: HELP_GROUP.to_string(),
                target: CommandTarget::OpenUrl(DOCS_URL.to_string()),
                icon: Some("↗"),
                shortcut_hint: None,
            },
        ],
    };

    let mut groups = vec![
        compose,
        CommandGroup {
            name: MAIL_GROUP.to_string(),
            entries: mail,
        },
        CommandGroup {
            name: SETTINGS_GROUP.to_string(),
            entries: settings,
        },
    ];
    groups.extend(others);
    groups.push(help);
    groups
}

/// One "Switch to {email}" command per connection other than the active one.
///
/// Empty when there is no signed-in session.
pub fn build_account_commands(
    session: Option<&Session>,
    connections: &[Connection],
) -> Vec<CommandEntry> {
    let Some(session) = session else {
        return Vec::new();
    };

    connections
        .iter()
        .filter(|c| session.connection_id.as_deref() != Some(c.id.as_str()))
        .map(|c| CommandEntry {
            title: format!("Switch to {}", c.email),
            group: ACCOUNTS_GROUP.to_string(),
            target: CommandTarget::SwitchAccount {
                connection_id: c.id.clone(),
                email: c.email.clone(),
            },
            icon: Some("●"),
            shortcut_hint: None,
        })
        .collect()
}
