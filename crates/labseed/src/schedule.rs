//! Randomized time-slot schedules.
//!
//! Shuffle the canonical slots, keep a random-length prefix, stamp each kept
//! slot as active with the sampling moment. Session coverage is not
//! guaranteed: a short prefix may hold a single session.

use crate::error::SampleError;
use crate::rng::shuffled_prefix;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse time-of-day label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Session {
    Morning,
    Afternoon,
    Evening,
}

impl Session {
    pub const ALL: [Session; 3] = [Session::Morning, Session::Afternoon, Session::Evening];

    pub fn as_str(self) -> &'static str {
        match self {
            Session::Morning => "MORNING",
            Session::Afternoon => "AFTERNOON",
            Session::Evening => "EVENING",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical `(clock time, session)` slot, e.g. `("08:30", Morning)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub time: String,
    pub session: Session,
}

impl ScheduleSlot {
    pub fn new(time: impl Into<String>, session: Session) -> Self {
        Self {
            time: time.into(),
            session,
        }
    }
}

/// Slot as handed to storage: active, stamped with the sampling moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedSlot {
    pub time: String,
    pub session: Session,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DecoratedSlot {
    pub fn slot(&self) -> ScheduleSlot {
        ScheduleSlot::new(self.time.clone(), self.session)
    }
}

/// [`sample_schedule_at`] stamped with the current time.
pub fn sample_schedule<R: Rng>(
    rng: &mut R,
    slots: &[ScheduleSlot],
    min_count: usize,
    max_count: usize,
) -> Result<Vec<DecoratedSlot>, SampleError> {
    sample_schedule_at(rng, slots, min_count, max_count, Utc::now())
}

/// Shuffle `slots`, keep the first `N ∈ [min_count, max_count]` (capped at
/// `slots.len()`), decorate each with `now`.
pub fn sample_schedule_at<R: Rng>(
    rng: &mut R,
    slots: &[ScheduleSlot],
    min_count: usize,
    max_count: usize,
    now: DateTime<Utc>,
) -> Result<Vec<DecoratedSlot>, SampleError> {
    let picked = shuffled_prefix(rng, slots, min_count, max_count)?;
    Ok(picked
        .into_iter()
        .map(|s| DecoratedSlot {
            time: s.time,
            session: s.session,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::canonical_slots;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn three_to_nine_distinct_canonical() {
        let slots = canonical_slots();
        assert_eq!(slots.len(), 9);
        let canon: HashSet<_> = slots.iter().cloned().collect();
        let mut rng = StdRng::seed_from_u64(31);
        let mut lengths = HashSet::new();
        for _ in 0..500 {
            let got = sample_schedule(&mut rng, &slots, 3, 9).unwrap();
            assert!((3..=9).contains(&got.len()));
            lengths.insert(got.len());
            let picked: HashSet<_> = got.iter().map(DecoratedSlot::slot).collect();
            assert_eq!(picked.len(), got.len());
            assert!(picked.is_subset(&canon));
            assert!(got.iter().all(|d| d.is_active));
        }
        assert_eq!(lengths.len(), 7);
    }

    #[test]
    fn timestamps_are_the_sampling_moment() {
        let now = DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut rng = StdRng::seed_from_u64(2);
        let got = sample_schedule_at(&mut rng, &canonical_slots(), 9, 9, now).unwrap();
        assert_eq!(got.len(), 9);
        assert!(got.iter().all(|d| d.created_at == now && d.updated_at == now));
        let sessions: HashSet<_> = got.iter().map(|d| d.session).collect();
        assert_eq!(sessions.len(), Session::ALL.len());
    }

    #[test]
    fn count_capped_by_slot_list() {
        let slots = vec![
            ScheduleSlot::new("08:30", Session::Morning),
            ScheduleSlot::new("20:00", Session::Evening),
        ];
        let mut rng = StdRng::seed_from_u64(4);
        let got = sample_schedule(&mut rng, &slots, 5, 7).unwrap();
        assert_eq!(got.len(), 2);
        assert!(sample_schedule(&mut rng, &[], 0, 3).unwrap().is_empty());
    }

    #[test]
    fn inverted_counts_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            sample_schedule(&mut rng, &canonical_slots(), 9, 3),
            Err(SampleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn serialized_field_names() {
        let now = DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut rng = StdRng::seed_from_u64(1);
        let slots = [ScheduleSlot::new("13:30", Session::Afternoon)];
        let got = sample_schedule_at(&mut rng, &slots, 1, 1, now).unwrap();
        let v = serde_json::to_value(&got[0]).unwrap();
        assert_eq!(v["time"], "13:30");
        assert_eq!(v["session"], "AFTERNOON");
        assert_eq!(v["isActive"], true);
        assert_eq!(v["createdAt"], "2025-01-02T03:04:05Z");
    }
}
