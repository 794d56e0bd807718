//! Floating options menu for the step targeted by an options click.
//!
//! While mounted, the menu listens on the window for mouse-downs outside its
//! panel and for Escape; either requests closure. Both listeners are removed
//! when the menu unmounts.

#[cfg(test)]
#[path = "step_options_menu_test.rs"]
mod step_options_menu_test;

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::steps::MenuPosition;

/// Operations offered by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    SetFirst,
    Rename,
    Copy,
    Duplicate,
    Delete,
}

#[derive(Clone, Copy)]
struct MenuItem {
    action: MenuAction,
    label: &'static str,
    icon: &'static str,
}

const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { action: MenuAction::SetFirst, label: "Set as first page", icon: "/icons/flag.svg" },
    MenuItem { action: MenuAction::Rename, label: "Rename", icon: "/icons/rename.svg" },
    MenuItem { action: MenuAction::Copy, label: "Copy", icon: "/icons/copy.svg" },
    MenuItem { action: MenuAction::Duplicate, label: "Duplicate", icon: "/icons/duplicate.svg" },
    MenuItem { action: MenuAction::Delete, label: "Delete", icon: "/icons/delete.svg" },
];

impl MenuAction {
    /// Destructive actions are styled as warnings.
    pub fn is_destructive(self) -> bool {
        self == Self::Delete
    }
}

/// Inline positioning for the menu panel.
pub fn menu_style(position: MenuPosition) -> String {
    format!("position: fixed; left: {}px; top: {}px;", position.x, position.y)
}

#[component]
pub fn StepOptionsMenu(position: MenuPosition, on_action: Callback<MenuAction>, on_close: Callback<()>) -> impl IntoView {
    let menu_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let on_outside = window_event_listener(leptos::ev::mousedown, move |ev| {
            let Some(menu) = menu_ref.get_untracked() else {
                return;
            };
            if !crate::util::dom::event_target_inside(&ev, &menu) {
                on_close.run(());
            }
        });
        let on_escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                ev.prevent_default();
                on_close.run(());
            }
        });
        on_cleanup(move || {
            on_outside.remove();
            on_escape.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = on_close;

    view! {
        <div class="step-options-menu" role="menu" node_ref=menu_ref style=menu_style(position)>
            <div class="step-options-menu__header">"Settings"</div>
            {MENU_ITEMS
                .iter()
                .map(|item| {
                    let action = item.action;
                    let class = if action.is_destructive() {
                        "step-options-menu__item step-options-menu__item--danger"
                    } else {
                        "step-options-menu__item"
                    };
                    view! {
                        <button class=class type="button" role="menuitem" on:click=move |_| on_action.run(action)>
                            <Icon src=Some(item.icon.to_owned()) size=14/>
                            <span>{item.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
