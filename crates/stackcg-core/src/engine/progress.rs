/// Events emitted while a search runs.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// Number of assignment orders about to be explored.
    OrdersPlanned { total: u64 },
    /// One assignment order has been exhausted after enumerating `candidates` placements.
    OrderExplored { candidates: u64 },
    OrdersFinished,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards search events to an optional host callback; silent when none is set.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn is_silent(&self) -> bool {
        self.callback.is_none()
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Reports a message built lazily, so silent reporters skip the formatting.
    pub fn message(&self, build: impl FnOnce() -> String) {
        if !self.is_silent() {
            self.report(Progress::Message(build()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn silent_reporter_never_builds_messages() {
        let reporter = ProgressReporter::new();
        assert!(reporter.is_silent());
        reporter.message(|| panic!("message must not be built"));
    }

    #[test]
    fn callback_receives_events_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            seen.lock().unwrap().push(event);
        }));
        reporter.report(Progress::OrdersPlanned { total: 2 });
        reporter.message(|| "hello".to_string());
        drop(reporter);
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                Progress::OrdersPlanned { total: 2 },
                Progress::Message("hello".to_string())
            ]
        );
    }
}
