use leptos::prelude::*;

/// Icon served from `public/icons`
#[component]
pub fn Icon(
    /// Icon name, without the `.svg` extension
    name: &'static str,
    #[prop(default = "icon")] class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHECK: &str = "check";
    pub const CLIPBOARD: &str = "clipboard";
    pub const HOME: &str = "home";
    pub const MENU: &str = "menu";
    pub const PLAY: &str = "play";
    pub const X: &str = "x";
}
