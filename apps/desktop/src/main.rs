//! jsonsift Desktop — Dioxus-powered JSON filter form.

use dioxus::prelude::*;

mod app;
mod form;
mod results;
mod state;

use app::App;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jsonsift_core=info".parse().unwrap())
                .add_directive("jsonsift_desktop=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((12, 12, 12, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("jsonsift")
                            .with_inner_size(LogicalSize::new(760.0, 680.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 420.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
