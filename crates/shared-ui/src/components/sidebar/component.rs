use dioxus::prelude::*;

/// Left-hand navigation column of a dashboard.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Header section inside the Sidebar.
#[component]
pub fn SidebarHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div { class: "sidebar-header",
            h1 { class: "sidebar-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "sidebar-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn SidebarNav(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-nav",
            ul { {children} }
        }
    }
}

/// One tab entry. The active entry is marked with `data-active`.
#[component]
pub fn SidebarNavItem(active: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        li {
            button {
                class: "sidebar-nav-item",
                r#type: "button",
                "data-active": if active { "true" } else { "false" },
                aria_current: if active { "page" } else { "false" },
                onclick: move |evt| onclick.call(evt),
                {children}
            }
        }
    }
}

/// Footer pinned to the bottom of the Sidebar.
#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}
