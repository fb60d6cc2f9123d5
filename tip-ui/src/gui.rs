use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions, px,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    components::{AppWindow, TipForm, WindowPreferences},
    config::TipConfig,
    quit,
};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Tip Time".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centered, at the configured size.
pub fn open_main_window(
    config: &TipConfig,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let preferences = WindowPreferences::new(px(config.window.width), px(config.window.height));
    let bounds = Bounds::centered(None, preferences.size, app_cx);
    let calculator = config.initial_calculator();
    info!(locale = %calculator.currency().locale, "opening main window");

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Tip Time".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let form = cx.new(|cx| TipForm::new(calculator, window, cx));
        let app_window = cx.new(|cx| AppWindow::new(form, cx));
        let view: AnyView = app_window.into();
        cx.new(|cx| Root::new(view, window, cx))
    })?;

    Ok(())
}
