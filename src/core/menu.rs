//! # Menu Catalog
//!
//! The fixed list of things the user can pick, and the job each one
//! dispatches. Nothing here is configurable at runtime.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Install,
    SetupSystem,
    Configure,
    Validate,
    SaveLogs,
    Exit,
}

pub const MENU: [MenuItem; 6] = [
    MenuItem::Install,
    MenuItem::SetupSystem,
    MenuItem::Configure,
    MenuItem::Validate,
    MenuItem::SaveLogs,
    MenuItem::Exit,
];

/// Work handed to the setup layer. `SaveLogs` carries the log buffer as it
/// was when the user picked the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Install,
    SetupSystem,
    Configure,
    Validate,
    SaveLogs(Vec<String>),
}

impl MenuItem {
    /// Menu label, e.g. "Install Niri". `name` is the compositor's display name.
    pub fn label(self, name: &str) -> String {
        match self {
            MenuItem::Install => format!("Install {name}"),
            MenuItem::SetupSystem => "Setup System".to_string(),
            MenuItem::Configure => format!("Configure {name}"),
            MenuItem::Validate => "Validate Config".to_string(),
            MenuItem::SaveLogs => "Save Logs".to_string(),
            MenuItem::Exit => "Exit".to_string(),
        }
    }

    /// Text shown on the busy screen while the job runs.
    /// `None` for the install screen, which shows live logs instead.
    pub fn busy_message(self, name: &str) -> Option<String> {
        match self {
            MenuItem::Install | MenuItem::Exit => None,
            MenuItem::SetupSystem => Some("Setting up system services...".to_string()),
            MenuItem::Configure => Some(format!("Configuring {name}...")),
            MenuItem::Validate => Some(format!("Validating {name} config...")),
            MenuItem::SaveLogs => Some("Saving logs...".to_string()),
        }
    }

    /// Only a successful install clears the log buffer on return.
    pub fn clears_logs(self) -> bool {
        matches!(self, MenuItem::Install)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_use_compositor_name() {
        let labels: Vec<String> = MENU.iter().map(|m| m.label("Niri")).collect();
        assert_eq!(
            labels,
            vec![
                "Install Niri",
                "Setup System",
                "Configure Niri",
                "Validate Config",
                "Save Logs",
                "Exit"
            ]
        );
    }

    #[test]
    fn test_only_install_clears_logs() {
        let clearing: Vec<MenuItem> = MENU.into_iter().filter(|m| m.clears_logs()).collect();
        assert_eq!(clearing, vec![MenuItem::Install]);
    }
}
