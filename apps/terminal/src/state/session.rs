//! # Split Session
//!
//! Holds the three current inputs and pushes fresh totals to the display
//! whenever one of them changes.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  User Input               InputEvent                 Session Change     │
//! │  ──────────               ──────────                 ──────────────     │
//! │                                                                         │
//! │  amount 50 ─────────────► CheckAmountChanged ──────► check_amount = 50 │
//! │                                                                         │
//! │  tip 15 ────────────────► TipChanged ──────────────► tip = 15%         │
//! │                                                                         │
//! │  pick 0 / people 2 ─────► PartyChanged ────────────► party = 2         │
//! │                                                                         │
//! │  reset ─────────────────► Reset ───────────────────► initial inputs    │
//! │                                                                         │
//! │  Every event: recompute totals ──► DisplaySink::render(snapshot)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never stored. `snapshot()` recomputes them from the current
//! inputs on every call.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wesplit_core::{CheckAmount, DerivedTotals, PartySize, SplitInputs, TipPercentage};

use crate::error::AppResult;

/// A change to exactly one input, or a reset of all of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    CheckAmountChanged(CheckAmount),
    TipChanged(TipPercentage),
    PartyChanged(PartySize),
    Reset,
}

/// Current inputs together with the totals derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitSnapshot {
    pub inputs: SplitInputs,
    pub totals: DerivedTotals,
}

impl From<&SplitInputs> for SplitSnapshot {
    fn from(inputs: &SplitInputs) -> Self {
        SplitSnapshot {
            inputs: *inputs,
            totals: inputs.totals(),
        }
    }
}

/// Receives a snapshot after every input change.
pub trait DisplaySink {
    fn render(&mut self, snapshot: &SplitSnapshot) -> AppResult<()>;
}

/// The live form: owns the inputs, forwards every change to the display.
#[derive(Debug)]
pub struct SplitSession<S> {
    initial: SplitInputs,
    inputs: SplitInputs,
    sink: S,
}

impl<S: DisplaySink> SplitSession<S> {
    /// Creates a session starting from `initial`. Nothing is rendered yet.
    pub fn new(initial: SplitInputs, sink: S) -> Self {
        SplitSession {
            initial,
            inputs: initial,
            sink,
        }
    }

    /// Current inputs.
    pub fn inputs(&self) -> &SplitInputs {
        &self.inputs
    }

    /// Current inputs with freshly computed totals.
    pub fn snapshot(&self) -> SplitSnapshot {
        SplitSnapshot::from(&self.inputs)
    }

    /// Applies one input change, recomputes and renders.
    ///
    /// The change is kept only once the display has accepted the new
    /// snapshot; if rendering fails the previous inputs stay in place.
    pub fn apply(&mut self, event: InputEvent) -> AppResult<SplitSnapshot> {
        let mut inputs = self.inputs;
        match event {
            InputEvent::CheckAmountChanged(amount) => inputs.check_amount = amount,
            InputEvent::TipChanged(tip) => inputs.tip_percentage = tip,
            InputEvent::PartyChanged(party) => inputs.party_size = party,
            InputEvent::Reset => inputs = self.initial,
        }

        let snapshot = SplitSnapshot::from(&inputs);
        debug!(
            ?event,
            grand_total = snapshot.totals.grand_total,
            per_person = snapshot.totals.amount_per_person,
            "Recomputed split"
        );

        self.sink.render(&snapshot)?;
        self.inputs = inputs;
        Ok(snapshot)
    }

    /// Renders the current state without changing anything.
    pub fn refresh(&mut self) -> AppResult<SplitSnapshot> {
        let snapshot = self.snapshot();
        self.sink.render(&snapshot)?;
        Ok(snapshot)
    }

    /// The display this session renders to.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the display, for output that isn't a snapshot.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Ends the session and hands back the display.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, ErrorCode};

    #[derive(Debug, Default)]
    struct RecordingSink {
        rendered: Vec<SplitSnapshot>,
    }

    impl DisplaySink for RecordingSink {
        fn render(&mut self, snapshot: &SplitSnapshot) -> AppResult<()> {
            self.rendered.push(*snapshot);
            Ok(())
        }
    }

    fn session() -> SplitSession<RecordingSink> {
        SplitSession::new(SplitInputs::default(), RecordingSink::default())
    }

    #[test]
    fn test_new_session_renders_nothing() {
        let session = session();
        assert!(session.sink().rendered.is_empty());
        assert_eq!(session.snapshot().totals.grand_total, 0.0);
    }

    #[test]
    fn test_each_event_renders_once() {
        let mut session = session();

        session
            .apply(InputEvent::CheckAmountChanged(CheckAmount::new(50.0).unwrap()))
            .unwrap();
        session
            .apply(InputEvent::TipChanged(TipPercentage::new(15).unwrap()))
            .unwrap();
        session
            .apply(InputEvent::PartyChanged(PartySize::from_picker_index(0).unwrap()))
            .unwrap();

        let rendered = &session.sink().rendered;
        assert_eq!(rendered.len(), 3);

        // $50 at the default 20%
        assert_eq!(rendered[0].totals.grand_total, 60.0);
        assert_eq!(rendered[0].totals.amount_per_person, 30.0);

        // $50 at 15%, two people
        assert_eq!(rendered[2].totals.grand_total, 57.5);
        assert_eq!(rendered[2].totals.amount_per_person, 28.75);
    }

    #[test]
    fn test_rendered_totals_match_inputs() {
        let mut session = session();
        session
            .apply(InputEvent::CheckAmountChanged(CheckAmount::new(123.45).unwrap()))
            .unwrap();
        session
            .apply(InputEvent::PartyChanged(PartySize::new(7).unwrap()))
            .unwrap();

        for snapshot in &session.sink().rendered {
            assert_eq!(snapshot.totals, snapshot.inputs.totals());
        }
    }

    #[test]
    fn test_reset_restores_initial_inputs() {
        let initial = SplitInputs {
            tip_percentage: TipPercentage::new(10).unwrap(),
            ..SplitInputs::default()
        };
        let mut session = SplitSession::new(initial, RecordingSink::default());

        session
            .apply(InputEvent::CheckAmountChanged(CheckAmount::new(99.0).unwrap()))
            .unwrap();
        session
            .apply(InputEvent::TipChanged(TipPercentage::new(30).unwrap()))
            .unwrap();

        let snapshot = session.apply(InputEvent::Reset).unwrap();
        assert_eq!(snapshot.inputs, initial);
        assert_eq!(*session.inputs(), initial);
    }

    /// Refuses any snapshot whose grand total is above a limit.
    #[derive(Debug)]
    struct CappedSink {
        limit: f64,
    }

    impl DisplaySink for CappedSink {
        fn render(&mut self, snapshot: &SplitSnapshot) -> AppResult<()> {
            if snapshot.totals.grand_total > self.limit {
                return Err(AppError::new(ErrorCode::Internal, "too large to show"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_failed_render_keeps_previous_inputs() {
        let mut session = SplitSession::new(SplitInputs::default(), CappedSink { limit: 100.0 });
        session
            .apply(InputEvent::CheckAmountChanged(CheckAmount::new(50.0).unwrap()))
            .unwrap();

        let err = session
            .apply(InputEvent::CheckAmountChanged(CheckAmount::new(500.0).unwrap()))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(session.inputs().check_amount.value(), 50.0);
        assert_eq!(session.snapshot().totals.grand_total, 60.0);
    }

    #[test]
    fn test_refresh_renders_current_state() {
        let mut session = session();
        session
            .apply(InputEvent::CheckAmountChanged(CheckAmount::new(10.0).unwrap()))
            .unwrap();
        let refreshed = session.refresh().unwrap();

        let sink = session.into_sink();
        assert_eq!(sink.rendered.len(), 2);
        assert_eq!(sink.rendered[0], refreshed);
    }
}
