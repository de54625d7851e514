use serde::{Deserialize, Serialize};

/// Drawing/placement tool selected in the sidebar. Exactly one is active
/// at a time; the id strings double as the wire/query identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Select,
    Room,
    Wall,
    Surface,
    Door,
    Window,
    Column,
    Beam,
}

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Select,
        Tool::Room,
        Tool::Wall,
        Tool::Surface,
        Tool::Door,
        Tool::Window,
        Tool::Column,
        Tool::Beam,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Room => "room",
            Tool::Wall => "wall",
            Tool::Surface => "surface",
            Tool::Door => "door",
            Tool::Window => "window",
            Tool::Column => "column",
            Tool::Beam => "beam",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Room => "Room",
            Tool::Wall => "Wall",
            Tool::Surface => "Surface",
            Tool::Door => "Door",
            Tool::Window => "Window",
            Tool::Column => "Column",
            Tool::Beam => "Beam",
        }
    }

    pub fn from_id(id: &str) -> Option<Tool> {
        Tool::ALL.iter().copied().find(|tool| tool.id() == id)
    }
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Select
    }
}

/// Projection the canvas renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

impl ViewMode {
    pub fn id(&self) -> &'static str {
        match self {
            ViewMode::TwoD => "2d",
            ViewMode::ThreeD => "3d",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::TwoD => "2D",
            ViewMode::ThreeD => "3D",
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::TwoD
    }
}

/// Entry in the sidebar's icon rail. Selecting a tab swaps which panel
/// renders next to the rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarTab {
    Project,
    Build,
    Info,
    Objects,
    Styles,
    Finishes,
    Export,
    Help,
}

impl SidebarTab {
    pub const ALL: [SidebarTab; 8] = [
        SidebarTab::Project,
        SidebarTab::Build,
        SidebarTab::Info,
        SidebarTab::Objects,
        SidebarTab::Styles,
        SidebarTab::Finishes,
        SidebarTab::Export,
        SidebarTab::Help,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SidebarTab::Project => "project",
            SidebarTab::Build => "build",
            SidebarTab::Info => "info",
            SidebarTab::Objects => "objects",
            SidebarTab::Styles => "styles",
            SidebarTab::Finishes => "finishes",
            SidebarTab::Export => "export",
            SidebarTab::Help => "help",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SidebarTab::Project => "Project",
            SidebarTab::Build => "Build",
            SidebarTab::Info => "Info",
            SidebarTab::Objects => "Objects",
            SidebarTab::Styles => "Styles",
            SidebarTab::Finishes => "Finishes",
            SidebarTab::Export => "Export",
            SidebarTab::Help => "Help",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SidebarTab::Project => "\u{25A4}",
            SidebarTab::Build => "\u{25EB}",
            SidebarTab::Info => "\u{24D8}",
            SidebarTab::Objects => "\u{25A6}",
            SidebarTab::Styles => "\u{25D0}",
            SidebarTab::Finishes => "\u{25D2}",
            SidebarTab::Export => "\u{2197}",
            SidebarTab::Help => "?",
        }
    }

    pub fn from_id(id: &str) -> Option<SidebarTab> {
        SidebarTab::ALL.iter().copied().find(|tab| tab.id() == id)
    }
}

impl Default for SidebarTab {
    fn default() -> Self {
        SidebarTab::Build
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_ids_round_trip() {
        for tool in Tool::ALL {
            assert_eq!(Tool::from_id(tool.id()), Some(tool));
        }
        assert_eq!(Tool::from_id("lamp"), None);
    }

    #[test]
    fn tab_ids_round_trip() {
        for tab in SidebarTab::ALL {
            assert_eq!(SidebarTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(SidebarTab::from_id(""), None);
    }

    #[test]
    fn startup_defaults() {
        assert_eq!(Tool::default(), Tool::Select);
        assert_eq!(ViewMode::default(), ViewMode::TwoD);
        assert_eq!(SidebarTab::default(), SidebarTab::Build);
    }

    #[test]
    fn view_mode_ids() {
        assert_eq!(ViewMode::TwoD.id(), "2d");
        assert_eq!(ViewMode::ThreeD.id(), "3d");
        assert_eq!(ViewMode::TwoD.label(), "2D");
    }

    #[test]
    fn serde_uses_id_strings() {
        let json = serde_json::to_string(&Tool::Wall).unwrap();
        assert_eq!(json, "\"wall\"");
        let mode: ViewMode = serde_json::from_str("\"2d\"").unwrap();
        assert_eq!(mode, ViewMode::TwoD);
    }
}
