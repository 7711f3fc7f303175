use helpdesk_ui::app::App;
use leptos::mount_to_body;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to init logger");

    mount_to_body(App);
}
