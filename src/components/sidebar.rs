use yew::prelude::*;

use crate::catalog;
use crate::types::{SidebarTab, Tool};

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub active_tab: SidebarTab,
    pub on_tab_change: Callback<SidebarTab>,
    pub active_tool: Tool,
    pub on_tool_change: Callback<Tool>,
}

/// Icon-tab rail plus, for the build tab, the static tool catalog.
/// Controlled component: all state lives in the parent.
#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let rail: Html = SidebarTab::ALL
        .iter()
        .map(|tab| {
            let is_active = *tab == props.active_tab;
            let on_tab_change = props.on_tab_change.clone();
            let tab = *tab;
            let onclick = Callback::from(move |_: MouseEvent| {
                on_tab_change.emit(tab);
            });

            html! {
                <button
                    key={tab.id()}
                    {onclick}
                    title={tab.label()}
                    class={classes!(
                        "flex",
                        "flex-col",
                        "items-center",
                        "gap-1",
                        "w-full",
                        "py-3",
                        "text-xs",
                        "cursor-pointer",
                        "border-l-2",
                        if is_active {
                            "border-blue-500 bg-blue-50 text-blue-600"
                        } else {
                            "border-transparent text-gray-500 hover:bg-gray-100"
                        }
                    )}
                >
                    <span class="text-lg leading-none">{tab.icon()}</span>
                    <span>{tab.label()}</span>
                </button>
            }
        })
        .collect();

    html! {
        <div class="flex h-full flex-none bg-white border-r border-gray-300">
            <nav class="w-16 flex-none border-r border-gray-200 overflow-y-auto">
                {rail}
            </nav>

            // Only the build tab has a panel so far.
            if props.active_tab == SidebarTab::Build {
                <ToolsPanel
                    active_tool={props.active_tool}
                    on_tool_change={props.on_tool_change.clone()}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToolsPanelProps {
    active_tool: Tool,
    on_tool_change: Callback<Tool>,
}

#[function_component(ToolsPanel)]
fn tools_panel(props: &ToolsPanelProps) -> Html {
    html! {
        <div class="w-56 p-4 overflow-y-auto">
            <h2 class="text-lg font-semibold pb-3 mb-4 border-b border-gray-200">{"Build"}</h2>
            {
                catalog::categories().iter().map(|category| {
                    html! {
                        <div key={category.name} class="mb-4">
                            <h3 class="text-xs font-medium uppercase text-gray-400 mb-2">
                                {category.name}
                            </h3>
                            <div class="grid grid-cols-2 gap-2">
                                {
                                    category.tools.iter().map(|entry| {
                                        let is_active = entry.tool == props.active_tool;
                                        let on_tool_change = props.on_tool_change.clone();
                                        let tool = entry.tool;
                                        let onclick = Callback::from(move |_: MouseEvent| {
                                            on_tool_change.emit(tool);
                                        });

                                        html! {
                                            <button
                                                key={entry.tool.id()}
                                                {onclick}
                                                class={classes!(
                                                    "flex",
                                                    "flex-col",
                                                    "items-center",
                                                    "gap-1",
                                                    "p-2",
                                                    "rounded",
                                                    "border",
                                                    "text-sm",
                                                    "cursor-pointer",
                                                    if is_active {
                                                        "bg-blue-100 border-blue-300 text-blue-700"
                                                    } else {
                                                        "bg-white border-gray-200 hover:bg-gray-100 hover:border-gray-300"
                                                    }
                                                )}
                                            >
                                                <span class="text-base leading-none">{entry.icon}</span>
                                                <span>{entry.label}</span>
                                            </button>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
