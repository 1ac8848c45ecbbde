use gloo_console::error;
use gloo_utils::window;
use run_tracker_lib::notice::{Notice, Notifier};

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&mut self, notice: &Notice) {
        if let Err(err) = window().alert_with_message(&notice.to_string()) {
            error!(err);
        }
    }
}
