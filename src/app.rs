use yew::prelude::*;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;

use crate::components::{Canvas, Sidebar, Toolbar};
use crate::types::{SidebarTab, Tool, ViewMode};

/// Root view. Owns the four pieces of UI state and threads them down as
/// value + callback pairs; children never mutate anything directly.
#[function_component(App)]
pub fn app() -> Html {
    let active_tool = use_state(Tool::default);
    let view_mode = use_state(ViewMode::default);
    let grid_visible = use_state(|| true);
    let active_tab = use_state(SidebarTab::default);

    // Keyboard shortcuts: `g` toggles the grid, Escape returns to select.
    {
        let grid_visible = grid_visible.clone();
        let active_tool = active_tool.clone();
        use_effect_with(*grid_visible, move |grid_on| {
            let grid_on = *grid_on;
            let document = gloo::utils::document();

            let listener = EventListener::new(&document, "keydown", move |event| {
                if let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                    match keyboard_event.key().as_str() {
                        "g" => grid_visible.set(!grid_on),
                        "Escape" => active_tool.set(Tool::Select),
                        _ => {}
                    }
                }
            });

            move || drop(listener)
        });
    }

    let on_tool_change = {
        let active_tool = active_tool.clone();
        Callback::from(move |tool: Tool| active_tool.set(tool))
    };

    let on_tab_change = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: SidebarTab| active_tab.set(tab))
    };

    let on_view_change = {
        let view_mode = view_mode.clone();
        Callback::from(move |mode: ViewMode| view_mode.set(mode))
    };

    let on_toggle_grid = {
        let grid_visible = grid_visible.clone();
        Callback::from(move |_: ()| grid_visible.set(!*grid_visible))
    };

    html! {
        <div class="flex h-screen bg-gray-50">
            <Sidebar
                active_tab={*active_tab}
                on_tab_change={on_tab_change}
                active_tool={*active_tool}
                on_tool_change={on_tool_change.clone()}
            />

            <div class="flex flex-col flex-1 min-w-0">
                <Toolbar
                    view={*view_mode}
                    on_view_change={on_view_change}
                    active_tool={*active_tool}
                    grid_visible={*grid_visible}
                    on_toggle_grid={on_toggle_grid}
                />
                <Canvas
                    active_tool={*active_tool}
                    view={*view_mode}
                    grid_visible={*grid_visible}
                />
            </div>
        </div>
    }
}
