//! Command palette: registry, search filter, popup state and dispatch.
//!
//! Data flow: `registry` builds groups from the navigation table and the
//! live session/connection data, `filter` narrows them by the search text,
//! `state` tracks the popup, and `dispatch` maps the chosen entry to an Action.

pub mod dispatch;
pub mod filter;
pub mod registry;
pub mod state;

pub use dispatch::{dispatch, dispatch_entry};
pub use filter::{PaletteView, filter};
pub use registry::{
    CommandEntry, CommandGroup, CommandTarget, NavGroup, NavItem, NavSection, SectionKind,
    build_account_commands, build_groups, navigation_config,
};
pub use state::PaletteState;
