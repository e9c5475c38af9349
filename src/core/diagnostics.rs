// Diagnostics
// Strip conditions and the injected sink they are reported to
//
// None of these conditions cross the public widget API as errors: a bad index
// or an unbuilt view just means "no visual change".

use std::cell::RefCell;
use std::rc::Rc;

/// Conditions absorbed by the tab strip
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    /// Index outside the current tab range
    #[error("Tab at position {index} is not initialized (tab count: {count})")]
    TabNotFound { index: usize, count: usize },
    /// Tab exists but its composite view was never built
    #[error("Tab at position {index} has no composite view")]
    ViewNotBuilt { index: usize },
    /// Theme lacks primary colors, neutral colors are used instead
    #[error("Theme colors unavailable, falling back to neutral colors")]
    MissingTheme,
}

/// Receiver for conditions the strip absorbs
pub trait DiagnosticSink {
    fn report(&self, condition: &StripError);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Rc<T> {
    fn report(&self, condition: &StripError) {
        (**self).report(condition)
    }
}

/// Forwards conditions to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, condition: &StripError) {
        match condition {
            StripError::TabNotFound { index, count } => {
                tracing::warn!(target: "badged_tabs", index, count, "{}", condition);
            }
            StripError::ViewNotBuilt { index } => {
                tracing::warn!(target: "badged_tabs", index, "{}", condition);
            }
            StripError::MissingTheme => {
                tracing::debug!(target: "badged_tabs", "{}", condition);
            }
        }
    }
}

/// Keeps reported conditions in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    conditions: RefCell<Vec<StripError>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn conditions(&self) -> Vec<StripError> {
        self.conditions.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.conditions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.conditions.borrow_mut().clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, condition: &StripError) {
        self.conditions.borrow_mut().push(condition.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_through_rc() {
        let sink = Rc::new(RecordingSink::new());
        let shared: Box<dyn DiagnosticSink> = Box::new(sink.clone());

        shared.report(&StripError::ViewNotBuilt { index: 1 });
        assert_eq!(sink.conditions(), vec![StripError::ViewNotBuilt { index: 1 }]);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_error_messages() {
        let err = StripError::TabNotFound { index: 99, count: 3 };
        assert_eq!(err.to_string(), "Tab at position 99 is not initialized (tab count: 3)");
    }
}
