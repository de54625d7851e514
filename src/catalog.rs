use crate::types::Tool;

/// One selectable entry in the tools panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolEntry {
    pub tool: Tool,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Ordered group of tools rendered as one section of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolCategory {
    pub name: &'static str,
    pub tools: &'static [ToolEntry],
}

const STRUCTURE: &[ToolEntry] = &[
    ToolEntry {
        tool: Tool::Select,
        label: "Select",
        icon: "\u{2196}",
    },
    ToolEntry {
        tool: Tool::Room,
        label: "Room",
        icon: "\u{25A1}",
    },
    ToolEntry {
        tool: Tool::Wall,
        label: "Wall",
        icon: "\u{2015}",
    },
    ToolEntry {
        tool: Tool::Surface,
        label: "Surface",
        icon: "\u{25A8}",
    },
];

const OPENINGS: &[ToolEntry] = &[
    ToolEntry {
        tool: Tool::Door,
        label: "Door",
        icon: "\u{25E7}",
    },
    ToolEntry {
        tool: Tool::Window,
        label: "Window",
        icon: "\u{229E}",
    },
];

const STRUCTURAL: &[ToolEntry] = &[
    ToolEntry {
        tool: Tool::Column,
        label: "Column",
        icon: "\u{25CB}",
    },
    ToolEntry {
        tool: Tool::Beam,
        label: "Beam",
        icon: "\u{25AD}",
    },
];

const CATEGORIES: [ToolCategory; 3] = [
    ToolCategory {
        name: "Structure",
        tools: STRUCTURE,
    },
    ToolCategory {
        name: "Openings",
        tools: OPENINGS,
    },
    ToolCategory {
        name: "Structural",
        tools: STRUCTURAL,
    },
];

/// The compiled-in tool catalog, in panel order. Never mutated at runtime.
pub fn categories() -> &'static [ToolCategory] {
    &CATEGORIES
}

/// Category a tool is listed under.
pub fn category_of(tool: Tool) -> Option<&'static ToolCategory> {
    CATEGORIES
        .iter()
        .find(|category| category.tools.iter().any(|entry| entry.tool == tool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_categories_in_panel_order() {
        let names: Vec<&str> = categories().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Structure", "Openings", "Structural"]);
    }

    #[test]
    fn tool_ids_are_unique() {
        let mut seen = Vec::new();
        for category in categories() {
            for entry in category.tools {
                assert!(
                    !seen.contains(&entry.tool.id()),
                    "duplicate tool id {}",
                    entry.tool.id()
                );
                seen.push(entry.tool.id());
            }
        }
    }

    #[test]
    fn every_tool_is_reachable_from_the_panel() {
        for tool in Tool::ALL {
            assert!(
                category_of(tool).is_some(),
                "{} missing from catalog",
                tool.id()
            );
        }
    }

    #[test]
    fn category_lookup() {
        assert_eq!(category_of(Tool::Door).unwrap().name, "Openings");
        assert_eq!(category_of(Tool::Beam).unwrap().name, "Structural");
        assert_eq!(category_of(Tool::Select).unwrap().name, "Structure");
    }
}
