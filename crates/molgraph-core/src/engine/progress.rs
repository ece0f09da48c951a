/// Progress events emitted while deriving a bond set.
///
/// The pair scan is O(n²) in the atom count, so interactive front-ends want
/// feedback: one `ScanStart` with the number of outer-loop rows, a
/// `ScanRowDone` per completed row, and a `ScanFinish` when the set is
/// complete. Phases bracket the coarser workflow steps.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    ScanStart { total_rows: u64 },
    ScanRowDone,
    ScanFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards progress events to an optional callback; reporting is purely
/// observational and never affects results.
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
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(format!("{:?}", event));
        }));

        reporter.report(Progress::ScanStart { total_rows: 3 });
        reporter.report(Progress::ScanRowDone);
        reporter.report(Progress::ScanFinish);

        let seen = events.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].contains("ScanStart"));
        assert!(seen[2].contains("ScanFinish"));
    }
}
