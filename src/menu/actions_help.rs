use gtk4::prelude::*;
use gtk4::{AboutDialog, Application, ApplicationWindow, ButtonsType, License, MessageDialog, MessageType};

const CONTROLS_TEXT: &str = "Left / Right: previous / next step\n\
Space: pause or resume\n\
Mouse wheel: zoom\n\
Ctrl+O: open molecule (.json, .xyz, .txt)\n\
Ctrl+E: export current frame\n\
Ctrl+R: restart animation\n\
Ctrl+0: reset zoom\n\
Ctrl+S: save settings";

pub fn setup(app: &Application, window: &ApplicationWindow) {

    // --- ABOUT ACTION ---
    let about_action = gtk4::gio::SimpleAction::new("about", None);
    let win_weak = window.downgrade();

    about_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak.upgrade() {
            let dialog = AboutDialog::builder()
                .transient_for(&win)
                .modal(true)
                .program_name("molanim")
                .version(env!("CARGO_PKG_VERSION"))
                .comments("Ball-and-stick molecule viewer with scripted animation steps.")
                .license_type(License::MitX11)
                .logo_icon_name("applications-science")
                .build();

            dialog.present();
        }
    });
    app.add_action(&about_action);

    // --- CONTROLS ACTION ---
    let controls_action = gtk4::gio::SimpleAction::new("help_controls", None);
    let win_weak_c = window.downgrade();

    controls_action.connect_activate(move |_, _| {
        if let Some(win) = win_weak_c.upgrade() {
            let dialog = MessageDialog::builder()
                .transient_for(&win)
                .modal(true)
                .message_type(MessageType::Info)
                .buttons(ButtonsType::Close)
                .text("Controls & Shortcuts")
                .secondary_text(CONTROLS_TEXT)
                .build();
            dialog.connect_response(|d, _| d.close());
            dialog.present();
        }
    });
    app.add_action(&controls_action);
}
