/// Modal notification shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub body: &'static str,
}

/// Raised when a class search fails, whatever the reason.
pub const SEARCH_FAILED_ALERT: Alert = Alert {
    title: "Ocorreu um erro",
    body: "Verifique os dados e tente novamente",
};

/// Presents alerts to the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, alert: &Alert);
}

/// Notifier that only logs, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, alert: &Alert) {
        tracing::warn!(title = alert.title, body = alert.body, "Alert raised");
    }
}
