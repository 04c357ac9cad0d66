//! # Divination Engine
//!
//! The stateful orchestrator of one divination session: an explicit
//! per-session state machine that drives three variations per line and six
//! lines per session, then resolves the original and (if any line is
//! changing) the changed hexagram.
//!
//! The engine is turn-based and synchronous: every event consumes one
//! caller-supplied input and returns before the next is accepted. There is
//! no global state — each session is one owned `DivinationEngine` value, so
//! independent sessions never interfere.
//!
//! Events sent in the wrong phase are the one true caller error and fail
//! loudly; a misordered call must never silently corrupt the oracle.

use std::fmt;

use serde::Serialize;

use crate::catalog::{self, HexagramRecord};
use crate::encoder::{self, Aspect};
use crate::primitives::{LINES_PER_HEXAGRAM, VARIATIONS_PER_LINE, WORKING_STALKS};
use crate::split::SplitProvider;
use crate::types::{DayanError, LineValue};
use crate::variation::{clamp_split, count_remainder};

// =============================================================================
// PHASE
// =============================================================================

/// The processing state of a session.
///
/// Always an explicit tagged value carried by the session, never a shared
/// or global field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No session in progress.
    Idle,
    /// Awaiting the symbolic removal of the Taiji stalk.
    TaijiPending,
    /// Awaiting a split of the current pool into two piles.
    SplitPending,
    /// Awaiting the hang of the human stalk from the right pile.
    HeavenPending,
    /// Awaiting the count-by-fours of the left pile.
    LeftCountPending,
    /// Awaiting the count-by-fours of the right pile.
    RightCountPending,
    /// One variation finished; awaiting acknowledgement.
    VariationDone,
    /// One line finished; awaiting acknowledgement.
    LineDone,
    /// All six lines finished; the result is available.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::TaijiPending => "taiji_pending",
            Self::SplitPending => "split_pending",
            Self::HeavenPending => "heaven_pending",
            Self::LeftCountPending => "left_count_pending",
            Self::RightCountPending => "right_count_pending",
            Self::VariationDone => "variation_done",
            Self::LineDone => "line_done",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

// =============================================================================
// PROGRESS SNAPSHOT
// =============================================================================

/// A read-only snapshot of the session, returned by every event.
#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    /// Current phase.
    pub phase: Phase,
    /// Current line index (0 = bottom).
    pub line: usize,
    /// Current variation index within the line (0..=2).
    pub variation: usize,
    /// Stalks available to the in-progress line.
    pub pool: u32,
    /// Left pile after the most recent split.
    pub left: u32,
    /// Right pile after the most recent split and hang.
    pub right: u32,
    /// Left remainder of the most recent count (0 before counting).
    pub left_remainder: u32,
    /// Right remainder of the most recent count (0 before counting or
    /// when the count was skipped).
    pub right_remainder: u32,
    /// Whether the right-pile count of the current variation was
    /// auto-skipped. When true, `count_right` must not be sent.
    pub right_skipped: bool,
    /// Stalks removed by the most recent completed variation.
    pub removed: u32,
    /// Line values derived so far, bottom to top.
    pub lines: Vec<LineValue>,
}

// =============================================================================
// RESULT
// =============================================================================

/// The terminal result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DivinationResult {
    /// The question the session was started with.
    pub question: String,
    /// The six derived line values, bottom to top.
    pub lines: [LineValue; 6],
    /// The hexagram as cast.
    pub original: HexagramRecord,
    /// The hexagram after changing lines flip; absent when no line is
    /// changing.
    pub changed: Option<HexagramRecord>,
}

impl DivinationResult {
    /// Indices (bottom to top) of the changing lines.
    #[must_use]
    pub fn changing_lines(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_changing())
            .map(|(i, _)| i)
            .collect()
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// One divination session.
///
/// Owns all session state exclusively; create one engine per session.
/// The split-point provider is injected at construction and consulted only
/// when `divide` is called without an explicit split point.
pub struct DivinationEngine {
    provider: Box<dyn SplitProvider>,
    question: String,
    phase: Phase,
    line: usize,
    variation: usize,
    pool: u32,
    left: u32,
    right: u32,
    left_remainder: u32,
    right_remainder: u32,
    right_skipped: bool,
    removed: u32,
    lines: Vec<LineValue>,
    result: Option<DivinationResult>,
}

impl fmt::Debug for DivinationEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DivinationEngine")
            .field("phase", &self.phase)
            .field("line", &self.line)
            .field("variation", &self.variation)
            .field("pool", &self.pool)
            .field("lines", &self.lines)
            .finish_non_exhaustive()
    }
}

impl DivinationEngine {
    /// Create an idle engine with the given split-point provider.
    #[must_use]
    pub fn new(provider: Box<dyn SplitProvider>) -> Self {
        Self {
            provider,
            question: String::new(),
            phase: Phase::Idle,
            line: 0,
            variation: 0,
            pool: WORKING_STALKS,
            left: 0,
            right: 0,
            left_remainder: 0,
            right_remainder: 0,
            right_skipped: false,
            removed: 0,
            lines: Vec::new(),
            result: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The question the session was started with.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Snapshot the session state.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            phase: self.phase,
            line: self.line,
            variation: self.variation,
            pool: self.pool,
            left: self.left,
            right: self.right,
            left_remainder: self.left_remainder,
            right_remainder: self.right_remainder,
            right_skipped: self.right_skipped,
            removed: self.removed,
            lines: self.lines.clone(),
        }
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Begin a new session for `question`, discarding any progress.
    ///
    /// The Taiji stalk is set aside symbolically; the working pool for
    /// line 0 is 49.
    pub fn start(&mut self, question: &str) -> Result<Progress, DayanError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DayanError::EmptyQuestion);
        }
        self.reset();
        self.question = question.to_string();
        self.phase = Phase::TaijiPending;
        Ok(self.progress())
    }

    /// Confirm the symbolic Taiji removal. Consumes no pool.
    pub fn confirm_taiji(&mut self) -> Result<Progress, DayanError> {
        self.expect(Phase::TaijiPending, "confirm_taiji")?;
        self.phase = Phase::SplitPending;
        Ok(self.progress())
    }

    /// Split the pool into two piles at `split_point` (the left-pile size).
    ///
    /// `None` defers to the injected provider. Any value is clamped into
    /// [1, pool - 1]; this event never fails on the split itself.
    pub fn divide(&mut self, split_point: Option<u32>) -> Result<Progress, DayanError> {
        self.expect(Phase::SplitPending, "divide")?;
        let requested = match split_point {
            Some(point) => point,
            None => self.provider.split_point(self.pool),
        };
        self.left = clamp_split(self.pool, requested);
        self.right = self.pool - self.left;
        self.left_remainder = 0;
        self.right_remainder = 0;
        self.right_skipped = false;
        self.removed = 0;
        self.phase = Phase::HeavenPending;
        Ok(self.progress())
    }

    /// Hang the single human stalk, removing it from the right pile.
    pub fn designate_heaven_stalk(&mut self) -> Result<Progress, DayanError> {
        self.expect(Phase::HeavenPending, "designate_heaven_stalk")?;
        // The clamp guarantees the right pile is non-empty here.
        self.right -= 1;
        self.phase = Phase::LeftCountPending;
        Ok(self.progress())
    }

    /// Count the left pile by fours.
    ///
    /// When the hang removal emptied the right pile, its count is skipped
    /// entirely (remainder 0) and the variation completes here.
    pub fn count_left(&mut self) -> Result<Progress, DayanError> {
        self.expect(Phase::LeftCountPending, "count_left")?;
        self.left_remainder = count_remainder(self.left);
        if self.right == 0 {
            self.right_skipped = true;
            self.right_remainder = 0;
            self.finish_variation();
        } else {
            self.phase = Phase::RightCountPending;
        }
        Ok(self.progress())
    }

    /// Count the right pile by fours.
    ///
    /// Invalid when the right-pile step was auto-skipped; that is reported
    /// as a wrong-phase event.
    pub fn count_right(&mut self) -> Result<Progress, DayanError> {
        self.expect(Phase::RightCountPending, "count_right")?;
        self.right_remainder = count_remainder(self.right);
        self.finish_variation();
        Ok(self.progress())
    }

    /// Advance past a finished variation or a finished line.
    pub fn acknowledge(&mut self) -> Result<Progress, DayanError> {
        match self.phase {
            Phase::VariationDone => {
                if self.variation + 1 < VARIATIONS_PER_LINE {
                    // Fresh split of the reduced pool, not a reset to 49.
                    self.variation += 1;
                    self.phase = Phase::SplitPending;
                } else {
                    let value = LineValue::from_pool(self.pool)?;
                    self.lines.push(value);
                    self.phase = Phase::LineDone;
                }
                Ok(self.progress())
            }
            Phase::LineDone => {
                if self.line + 1 < LINES_PER_HEXAGRAM {
                    self.line += 1;
                    self.variation = 0;
                    self.pool = WORKING_STALKS;
                    self.phase = Phase::SplitPending;
                } else {
                    self.complete()?;
                }
                Ok(self.progress())
            }
            phase => Err(DayanError::InvalidEvent {
                event: "acknowledge",
                phase,
            }),
        }
    }

    /// Abandon the session unconditionally, from any phase.
    ///
    /// No partial result is salvaged; the engine is equivalent to a
    /// freshly constructed one (the provider is kept).
    pub fn reset(&mut self) {
        self.question.clear();
        self.phase = Phase::Idle;
        self.line = 0;
        self.variation = 0;
        self.pool = WORKING_STALKS;
        self.left = 0;
        self.right = 0;
        self.left_remainder = 0;
        self.right_remainder = 0;
        self.right_skipped = false;
        self.removed = 0;
        self.lines.clear();
        self.result = None;
    }

    /// The terminal result. Valid only once the session is `Complete`.
    pub fn result(&self) -> Result<DivinationResult, DayanError> {
        self.result
            .clone()
            .ok_or(DayanError::ResultNotReady(self.phase))
    }

    /// Drive a started session to `Complete`, using the provider for
    /// every split, and return the result.
    pub fn run_to_completion(&mut self) -> Result<DivinationResult, DayanError> {
        loop {
            match self.phase {
                Phase::Idle => {
                    return Err(DayanError::InvalidEvent {
                        event: "run_to_completion",
                        phase: self.phase,
                    });
                }
                Phase::TaijiPending => self.confirm_taiji()?,
                Phase::SplitPending => self.divide(None)?,
                Phase::HeavenPending => self.designate_heaven_stalk()?,
                Phase::LeftCountPending => self.count_left()?,
                Phase::RightCountPending => self.count_right()?,
                Phase::VariationDone | Phase::LineDone => self.acknowledge()?,
                Phase::Complete => return self.result(),
            };
        }
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    fn expect(&self, want: Phase, event: &'static str) -> Result<(), DayanError> {
        if self.phase == want {
            Ok(())
        } else {
            Err(DayanError::InvalidEvent {
                event,
                phase: self.phase,
            })
        }
    }

    /// Remove the remainders and the hung stalk from the pool.
    fn finish_variation(&mut self) {
        self.removed = self.left_remainder + self.right_remainder + 1;
        self.pool -= self.removed;
        self.phase = Phase::VariationDone;
    }

    /// Resolve both hexagrams and enter `Complete`.
    fn complete(&mut self) -> Result<(), DayanError> {
        let lines: [LineValue; 6] = self
            .lines
            .as_slice()
            .try_into()
            .map_err(|_| DayanError::ResultNotReady(self.phase))?;
        let original = catalog::resolve(&lines, Aspect::Original)?;
        let changed = if encoder::has_changing(&lines) {
            Some(catalog::resolve(&lines, Aspect::Changed)?)
        } else {
            None
        };
        self.result = Some(DivinationResult {
            question: self.question.clone(),
            lines,
            original,
            changed,
        });
        self.phase = Phase::Complete;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::ScriptedSplits;

    fn engine(points: impl IntoIterator<Item = u32>) -> DivinationEngine {
        DivinationEngine::new(Box::new(ScriptedSplits::new(points)))
    }

    #[test]
    fn start_requires_a_question() {
        let mut e = engine([]);
        assert!(matches!(e.start("  "), Err(DayanError::EmptyQuestion)));
        assert_eq!(e.phase(), Phase::Idle);
    }

    #[test]
    fn events_out_of_order_fail_loudly() {
        let mut e = engine([]);
        assert!(matches!(
            e.confirm_taiji(),
            Err(DayanError::InvalidEvent {
                event: "confirm_taiji",
                phase: Phase::Idle,
            })
        ));

        e.start("问前程").expect("start");
        assert!(matches!(
            e.divide(Some(25)),
            Err(DayanError::InvalidEvent {
                event: "divide",
                phase: Phase::TaijiPending,
            })
        ));
        assert!(matches!(
            e.count_left(),
            Err(DayanError::InvalidEvent { .. })
        ));
    }

    #[test]
    fn one_line_follows_the_canonical_trace() {
        // Spec trace: 49 -> 44 -> 36 -> 28, line value 7.
        let mut e = engine([]);
        e.start("问前程").expect("start");
        e.confirm_taiji().expect("taiji");

        for (split, expected_pool) in [(25, 44), (20, 36), (16, 28)] {
            e.divide(Some(split)).expect("divide");
            e.designate_heaven_stalk().expect("hang");
            e.count_left().expect("left");
            let p = e.count_right().expect("right");
            assert_eq!(p.pool, expected_pool);
            assert_eq!(p.phase, Phase::VariationDone);
            e.acknowledge().expect("ack");
        }

        let p = e.progress();
        assert_eq!(p.phase, Phase::LineDone);
        assert_eq!(p.lines, vec![LineValue::new(7).expect("7")]);
    }

    #[test]
    fn pool_continues_within_a_line_and_resets_between_lines() {
        let mut e = engine([25, 20, 16]);
        e.start("问前程").expect("start");
        e.confirm_taiji().expect("taiji");
        for _ in 0..3 {
            e.divide(None).expect("divide");
            e.designate_heaven_stalk().expect("hang");
            e.count_left().expect("left");
            e.count_right().expect("right");
            e.acknowledge().expect("ack");
        }
        assert_eq!(e.progress().pool, 28);

        // Acknowledging the finished line resets the pool to 49.
        let p = e.acknowledge().expect("next line");
        assert_eq!(p.phase, Phase::SplitPending);
        assert_eq!(p.line, 1);
        assert_eq!(p.variation, 0);
        assert_eq!(p.pool, 49);
    }

    #[test]
    fn count_right_rejected_when_step_was_skipped() {
        // Drive one variation into the right-pile-zero edge case is not
        // reachable from 49, so exercise the guard from VariationDone.
        let mut e = engine([25]);
        e.start("问前程").expect("start");
        e.confirm_taiji().expect("taiji");
        e.divide(None).expect("divide");
        e.designate_heaven_stalk().expect("hang");
        e.count_left().expect("left");
        e.count_right().expect("right");
        assert!(matches!(
            e.count_right(),
            Err(DayanError::InvalidEvent {
                event: "count_right",
                phase: Phase::VariationDone,
            })
        ));
    }

    #[test]
    fn boundary_split_is_clamped_not_rejected() {
        let mut e = engine([]);
        e.start("问前程").expect("start");
        e.confirm_taiji().expect("taiji");
        let p = e.divide(Some(0)).expect("divide");
        assert_eq!(p.left, 1);
        assert_eq!(p.right, 48);

        e.reset();
        e.start("问前程").expect("start");
        e.confirm_taiji().expect("taiji");
        let p = e.divide(Some(500)).expect("divide");
        assert_eq!(p.left, 48);
        assert_eq!(p.right, 1);
    }

    #[test]
    fn reset_returns_to_idle_from_any_phase() {
        let mut e = engine([25, 20, 16]);
        e.start("问前程").expect("start");
        e.confirm_taiji().expect("taiji");
        e.divide(None).expect("divide");
        e.reset();

        let p = e.progress();
        assert_eq!(p.phase, Phase::Idle);
        assert_eq!(p.pool, 49);
        assert!(p.lines.is_empty());
        assert!(e.question().is_empty());
        assert!(matches!(e.result(), Err(DayanError::ResultNotReady(_))));
    }

    #[test]
    fn result_before_complete_is_rejected() {
        let mut e = engine([]);
        e.start("问前程").expect("start");
        assert!(matches!(
            e.result(),
            Err(DayanError::ResultNotReady(Phase::TaijiPending))
        ));
    }

    #[test]
    fn full_session_completes_and_resolves() {
        let mut e = engine([]);
        e.start("问前程").expect("start");
        let result = e.run_to_completion().expect("run");

        assert_eq!(e.phase(), Phase::Complete);
        assert_eq!(result.question, "问前程");
        assert_eq!(result.lines.len(), 6);
        assert_eq!(result.original.key.len(), 6);
        // A changed hexagram exists exactly when a line is changing.
        assert_eq!(
            result.changed.is_some(),
            !result.changing_lines().is_empty()
        );
    }

    #[test]
    fn run_to_completion_requires_a_started_session() {
        let mut e = engine([]);
        assert!(matches!(
            e.run_to_completion(),
            Err(DayanError::InvalidEvent {
                event: "run_to_completion",
                phase: Phase::Idle,
            })
        ));
    }
}
