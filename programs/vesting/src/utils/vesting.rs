//! Cliff + linear vesting math.
//!
//! Vested amount at time `now`:
//! - 0 while no schedule exists (`total_amount == 0`) or after revocation
//! - `total_amount` at or after `start_ts + duration_seconds`
//! - 0 until the cliff is strictly exceeded (exactly at `start_ts +
//!   cliff_seconds` still vests nothing)
//! - otherwise `floor(total_amount * (now - start_ts) / duration_seconds)`
//!
//! Floor division truncates; the remainder is never tracked separately and is
//! recovered by the fully-vested branch returning the exact `total_amount`.

use crate::error::VestingError;
use crate::state::VestingSchedule;

/// Total vested amount at `now_ts`. Total over every reachable schedule
/// state, including absent and revoked; never mutates anything.
pub fn vested_amount(schedule: &VestingSchedule, now_ts: i64) -> Result<u64, VestingError> {
    if schedule.total_amount == 0 || schedule.revoked {
        return Ok(0);
    }
    let vesting_end = schedule
        .start_ts
        .checked_add(schedule.duration_seconds)
        .ok_or(VestingError::MathOverflow)?;
    if now_ts >= vesting_end {
        return Ok(schedule.total_amount);
    }
    let cliff_end = schedule
        .start_ts
        .checked_add(schedule.cliff_seconds)
        .ok_or(VestingError::MathOverflow)?;
    if now_ts <= cliff_end {
        return Ok(0);
    }
    // Past here: start_ts <= cliff_end < now_ts < vesting_end, so elapsed is
    // positive and strictly less than duration_seconds.
    let elapsed = now_ts
        .checked_sub(schedule.start_ts)
        .ok_or(VestingError::MathOverflow)?;
    let vested = (schedule.total_amount as u128)
        .checked_mul(elapsed as u128)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(schedule.duration_seconds as u128)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(vested).map_err(|_| VestingError::MathOverflow)
}

/// Vested minus already claimed. Saturates at zero: after revocation the
/// vested amount drops to 0 while `claimed_amount` keeps its final value.
pub fn claimable_amount(schedule: &VestingSchedule, now_ts: i64) -> Result<u64, VestingError> {
    let vested = vested_amount(schedule, now_ts)?;
    Ok(vested.saturating_sub(schedule.claimed_amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    const DAY: i64 = 86_400;
    const START: i64 = 1_700_000_000;

    fn schedule(total: u64, cliff_days: i64, duration_days: i64) -> VestingSchedule {
        VestingSchedule {
            recipient: Pubkey::new_unique(),
            total_amount: total,
            start_ts: START,
            cliff_seconds: cliff_days * DAY,
            duration_seconds: duration_days * DAY,
            claimed_amount: 0,
            revoked: false,
        }
    }

    #[test]
    fn linear_schedule_timeline() {
        // 1000 units, 30-day cliff, 120-day window.
        let s = schedule(1000, 30, 120);
        assert_eq!(vested_amount(&s, START + 10 * DAY).unwrap(), 0);
        // Exactly at the cliff boundary the cliff is not yet exceeded.
        assert_eq!(vested_amount(&s, START + 30 * DAY).unwrap(), 0);
        assert_eq!(vested_amount(&s, START + 30 * DAY + 1).unwrap(), 250);
        assert_eq!(vested_amount(&s, START + 60 * DAY).unwrap(), 500);
        assert_eq!(vested_amount(&s, START + 120 * DAY).unwrap(), 1000);
        assert_eq!(vested_amount(&s, START + 200 * DAY).unwrap(), 1000);
    }

    #[test]
    fn absent_schedule_vests_nothing() {
        let mut s = schedule(0, 0, 0);
        s.start_ts = 0;
        assert_eq!(vested_amount(&s, START).unwrap(), 0);
        assert_eq!(vested_amount(&s, i64::MAX).unwrap(), 0);
        assert_eq!(claimable_amount(&s, START).unwrap(), 0);
    }

    #[test]
    fn revoked_schedule_vests_nothing_forever() {
        let mut s = schedule(1000, 0, 120);
        s.revoked = true;
        assert_eq!(vested_amount(&s, START + 60 * DAY).unwrap(), 0);
        assert_eq!(vested_amount(&s, START + 500 * DAY).unwrap(), 0);
    }

    #[test]
    fn zero_cliff_still_requires_time_past_start() {
        let s = schedule(1000, 0, 100);
        assert_eq!(vested_amount(&s, START - 1).unwrap(), 0);
        assert_eq!(vested_amount(&s, START).unwrap(), 0);
        assert_eq!(vested_amount(&s, START + 50 * DAY).unwrap(), 500);
    }

    #[test]
    fn floor_truncation_recovered_at_end() {
        // 1000 over 3 seconds: per-second floors sum below the total until
        // the fully-vested branch returns it exactly.
        let mut s = schedule(1000, 0, 0);
        s.duration_seconds = 3;
        assert_eq!(vested_amount(&s, START + 1).unwrap(), 333);
        assert_eq!(vested_amount(&s, START + 2).unwrap(), 666);
        assert_eq!(vested_amount(&s, START + 3).unwrap(), 1000);
    }

    #[test]
    fn vested_amount_is_monotone_and_repeatable() {
        let s = schedule(777, 13, 97);
        let mut prev = 0;
        for d in 0..=120 {
            let now = START + d * DAY;
            let v = vested_amount(&s, now).unwrap();
            assert!(v >= prev, "vested decreased at day {d}");
            assert_eq!(v, vested_amount(&s, now).unwrap());
            prev = v;
        }
        assert_eq!(prev, 777);
    }

    #[test]
    fn claimable_tracks_claims() {
        let mut s = schedule(1000, 30, 120);
        let mid = START + 60 * DAY;
        assert_eq!(claimable_amount(&s, mid).unwrap(), 500);

        // Claim the full delta; nothing further is claimable at the same
        // instant.
        s.claimed_amount += 500;
        assert_eq!(claimable_amount(&s, mid).unwrap(), 0);

        assert_eq!(claimable_amount(&s, START + 90 * DAY).unwrap(), 250);
        assert_eq!(claimable_amount(&s, START + 120 * DAY).unwrap(), 500);
    }

    #[test]
    fn revocation_caps_entitlement_at_vested() {
        let mut s = schedule(1000, 30, 120);
        let mid = START + 60 * DAY;
        s.claimed_amount += claimable_amount(&s, mid).unwrap();
        assert_eq!(s.claimed_amount, 500);

        // Revocation reclaims total minus vested-at-revocation.
        let unvested = s.total_amount - vested_amount(&s, mid).unwrap();
        assert_eq!(unvested, 500);
        s.revoked = true;

        // Post-revocation nothing vests and nothing is claimable, even after
        // full duration.
        assert_eq!(vested_amount(&s, START + 200 * DAY).unwrap(), 0);
        assert_eq!(claimable_amount(&s, START + 200 * DAY).unwrap(), 0);
    }

    #[test]
    fn claimed_never_exceeds_total_over_repeated_claims() {
        let mut s = schedule(999, 7, 53);
        for d in 0..=60 {
            let now = START + d * DAY;
            let delta = claimable_amount(&s, now).unwrap();
            s.claimed_amount += delta;
            assert!(s.claimed_amount <= s.total_amount);
            assert!(s.claimed_amount <= vested_amount(&s, now).unwrap());
        }
        assert_eq!(s.claimed_amount, 999);
    }

    #[test]
    fn large_allocation_does_not_overflow() {
        let mut s = schedule(u64::MAX, 0, 0);
        s.duration_seconds = 400 * DAY;
        let v = vested_amount(&s, START + 100 * DAY).unwrap();
        assert_eq!(v, (u64::MAX as u128 * 100 / 400) as u64);
        assert_eq!(vested_amount(&s, START + 400 * DAY).unwrap(), u64::MAX);
    }
}
