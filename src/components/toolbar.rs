use yew::prelude::*;

use crate::types::{Tool, ViewMode};

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    pub view: ViewMode,
    pub on_view_change: Callback<ViewMode>,
    pub active_tool: Tool,
    pub grid_visible: bool,
    pub on_toggle_grid: Callback<()>,
}

/// View controls above the canvas: 2D/3D switch, grid toggle, and the
/// active-tool readout. Controlled component.
#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let view_switch: Html = [ViewMode::TwoD, ViewMode::ThreeD]
        .iter()
        .map(|mode| {
            let is_active = *mode == props.view;
            let on_view_change = props.on_view_change.clone();
            let mode = *mode;
            let onclick = Callback::from(move |_: MouseEvent| {
                on_view_change.emit(mode);
            });

            html! {
                <button
                    key={mode.id()}
                    {onclick}
                    class={classes!(
                        "px-3",
                        "py-1",
                        "text-sm",
                        "rounded",
                        "cursor-pointer",
                        if is_active {
                            "bg-blue-500 text-white"
                        } else {
                            "bg-white text-gray-600 hover:bg-gray-100"
                        }
                    )}
                >
                    {mode.label()}
                </button>
            }
        })
        .collect();

    let on_toggle_grid = {
        let on_toggle_grid = props.on_toggle_grid.clone();
        Callback::from(move |_: MouseEvent| {
            on_toggle_grid.emit(());
        })
    };

    html! {
        <div class="flex items-center gap-4 px-4 py-2 bg-white border-b border-gray-300">
            <div class="flex gap-1 p-1 bg-gray-100 rounded-lg">
                {view_switch}
            </div>

            <button
                onclick={on_toggle_grid}
                class={classes!(
                    "px-3",
                    "py-1",
                    "text-sm",
                    "rounded",
                    "border",
                    "cursor-pointer",
                    if props.grid_visible {
                        "bg-blue-50 border-blue-300 text-blue-600"
                    } else {
                        "bg-white border-gray-200 text-gray-500 hover:bg-gray-100"
                    }
                )}
            >
                {if props.grid_visible { "Grid on" } else { "Grid off" }}
            </button>

            <span class="ml-auto text-sm text-gray-500">
                {format!("Tool: {}", props.active_tool.label())}
            </span>
        </div>
    }
}
