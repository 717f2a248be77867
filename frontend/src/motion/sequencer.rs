//! Beat sequencing for the chat, terminal and timeline scenes.
//!
//! A scene authors a list of [`Beat`]s, each owning a band of global progress.
//! For a given progress the [`Sequencer`] reports every beat's phase, its local
//! progress inside its band and how many characters of its text are typed out.
//! Bands are evaluated independently of one another: overlapping bands make
//! several beats active at once.

use thiserror::Error;

use super::math::{reveal_len, seg};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Them,
    Us,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeatStyle {
    /// Fades in as a whole.
    Bubble,
    /// Typed out character by character.
    Typed,
    /// Typed out in a monospace block.
    Code,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beat {
    pub id: &'static str,
    pub side: Side,
    pub style: BeatStyle,
    pub text: &'static str,
    pub from: f64,
    pub to: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Pending,
    /// Inside the lead-in band right before `from`.
    Typing,
    Active,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeatState {
    pub phase: Phase,
    pub local: f64,
    pub revealed: usize,
}

impl BeatState {
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Active | Phase::Done)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SequencerState {
    pub beats: Vec<BeatState>,
    pub active_index: Option<usize>,
    pub is_typing: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum SequenceError {
    #[error("beat `{id}` has band [{from}, {to}], expected 0 <= from < to <= 1")]
    InvalidBand { id: &'static str, from: f64, to: f64 },
    #[error("typing lead-in must be a non-negative number, got {0}")]
    InvalidLeadIn(f64),
}

/// Relation between two consecutive authored bands.
#[derive(Clone, Debug, PartialEq)]
pub enum BandIssue {
    Overlap { first: &'static str, second: &'static str, by: f64 },
    Gap { first: &'static str, second: &'static str, by: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sequencer {
    beats: Vec<Beat>,
    lead_in: f64,
}

impl Sequencer {
    pub fn new(beats: impl Into<Vec<Beat>>, lead_in: f64) -> Result<Self, SequenceError> {
        let beats = beats.into();
        if !(lead_in >= 0.0) || !lead_in.is_finite() {
            return Err(SequenceError::InvalidLeadIn(lead_in));
        }
        for beat in &beats {
            let ok = beat.from >= 0.0 && beat.from < beat.to && beat.to <= 1.0;
            if !ok {
                return Err(SequenceError::InvalidBand {
                    id: beat.id,
                    from: beat.from,
                    to: beat.to,
                });
            }
        }
        Ok(Self { beats, lead_in })
    }

    pub fn beats(&self) -> &[Beat] {
        &self.beats
    }

    pub fn phase(&self, beat: &Beat, progress: f64) -> Phase {
        if progress >= beat.to {
            Phase::Done
        } else if progress >= beat.from {
            Phase::Active
        } else if self.lead_in > 0.0 && progress >= beat.from - self.lead_in {
            Phase::Typing
        } else {
            Phase::Pending
        }
    }

    pub fn evaluate(&self, progress: f64) -> SequencerState {
        let beats: Vec<BeatState> = self
            .beats
            .iter()
            .map(|beat| {
                let local = seg(progress, beat.from, beat.to);
                BeatState {
                    phase: self.phase(beat, progress),
                    local,
                    revealed: reveal_len(beat.text, local),
                }
            })
            .collect();
        let active_index = beats.iter().position(|b| b.phase == Phase::Active);
        let is_typing = active_index.is_none() && beats.iter().any(|b| b.phase == Phase::Typing);
        SequencerState {
            beats,
            active_index,
            is_typing,
        }
    }

    /// Every beat fully revealed.
    pub fn finished(&self) -> SequencerState {
        SequencerState {
            beats: self
                .beats
                .iter()
                .map(|beat| BeatState {
                    phase: Phase::Done,
                    local: 1.0,
                    revealed: beat.text.chars().count(),
                })
                .collect(),
            active_index: None,
            is_typing: false,
        }
    }

    /// Overlaps and gaps between consecutive bands in authored order.
    /// Reported only; evaluation is unaffected.
    pub fn band_issues(&self) -> Vec<BandIssue> {
        self.beats
            .windows(2)
            .filter_map(|pair| {
                let (a, b) = (&pair[0], &pair[1]);
                let delta = b.from - a.to;
                if delta < -f64::EPSILON {
                    Some(BandIssue::Overlap {
                        first: a.id,
                        second: b.id,
                        by: -delta,
                    })
                } else if delta > f64::EPSILON {
                    Some(BandIssue::Gap {
                        first: a.id,
                        second: b.id,
                        by: delta,
                    })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Build a scene's sequencer, logging rejected or suspicious authoring.
    pub fn for_scene(scene: &str, beats: impl Into<Vec<Beat>>, lead_in: f64) -> Option<Self> {
        match Self::new(beats, lead_in) {
            Ok(seq) => {
                for issue in seq.band_issues() {
                    match issue {
                        BandIssue::Overlap { .. } => log::warn!("{}: {:?}", scene, issue),
                        BandIssue::Gap { .. } => log::debug!("{}: {:?}", scene, issue),
                    }
                }
                Some(seq)
            }
            Err(e) => {
                log::error!("{}: {}", scene, e);
                None
            }
        }
    }
}
