use yew::prelude::*;

use crate::types::{Tool, ViewMode};

const SURFACE_WIDTH: f64 = 960.0;
const SURFACE_HEIGHT: f64 = 640.0;
const GRID_SPACING: f64 = 40.0;

#[derive(Properties, PartialEq)]
pub struct CanvasProps {
    pub active_tool: Tool,
    pub view: ViewMode,
    pub grid_visible: bool,
}

/// Line positions along one axis: 0, spacing, 2*spacing, up to extent.
pub fn grid_lines(extent: f64, spacing: f64) -> Vec<f64> {
    if spacing <= 0.0 || extent < 0.0 {
        return Vec::new();
    }
    let mut positions = Vec::new();
    let mut step = 0u32;
    loop {
        let pos = f64::from(step) * spacing;
        if pos > extent {
            break;
        }
        positions.push(pos);
        step += 1;
    }
    positions
}

/// Placeholder drawing surface. Renders the grid and reflects the active
/// tool and view; the drawing engine plugs in behind this seam.
#[function_component(Canvas)]
pub fn canvas(props: &CanvasProps) -> Html {
    let grid = if props.grid_visible {
        let verticals: Html = grid_lines(SURFACE_WIDTH, GRID_SPACING)
            .iter()
            .enumerate()
            .map(|(i, x)| {
                html! {
                    <line
                        key={format!("grid-v-{}", i)}
                        x1={format!("{}", x)}
                        y1="0"
                        x2={format!("{}", x)}
                        y2={format!("{}", SURFACE_HEIGHT)}
                        stroke="#e5e7eb"
                        stroke-width="1"
                    />
                }
            })
            .collect();
        let horizontals: Html = grid_lines(SURFACE_HEIGHT, GRID_SPACING)
            .iter()
            .enumerate()
            .map(|(i, y)| {
                html! {
                    <line
                        key={format!("grid-h-{}", i)}
                        x1="0"
                        y1={format!("{}", y)}
                        x2={format!("{}", SURFACE_WIDTH)}
                        y2={format!("{}", y)}
                        stroke="#e5e7eb"
                        stroke-width="1"
                    />
                }
            })
            .collect();

        html! {
            <>
                {verticals}
                {horizontals}
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="relative flex-1 overflow-auto bg-gray-50 p-6">
            <svg
                class="bg-white border border-gray-300 shadow-sm"
                width={format!("{}", SURFACE_WIDTH)}
                height={format!("{}", SURFACE_HEIGHT)}
                viewBox={format!("0 0 {} {}", SURFACE_WIDTH, SURFACE_HEIGHT)}
            >
                {grid}
            </svg>

            <div class="absolute bottom-8 left-8 px-3 py-1 rounded bg-white border border-gray-200 text-xs text-gray-500 shadow-sm">
                {format!("{} \u{00B7} {}", props.view.label(), props.active_tool.label())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_cover_the_extent_inclusively() {
        assert_eq!(grid_lines(120.0, 40.0), vec![0.0, 40.0, 80.0, 120.0]);
    }

    #[test]
    fn last_line_never_passes_the_extent() {
        assert_eq!(grid_lines(100.0, 40.0), vec![0.0, 40.0, 80.0]);
    }

    #[test]
    fn degenerate_spacing_yields_no_lines() {
        assert!(grid_lines(100.0, 0.0).is_empty());
        assert!(grid_lines(100.0, -5.0).is_empty());
        assert!(grid_lines(-1.0, 40.0).is_empty());
    }

    #[test]
    fn surface_grid_is_nonempty() {
        assert!(!grid_lines(SURFACE_WIDTH, GRID_SPACING).is_empty());
        assert!(!grid_lines(SURFACE_HEIGHT, GRID_SPACING).is_empty());
    }
}
