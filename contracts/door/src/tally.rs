//! Attestation tally
//!
//! Exact-match vote counting for one subject (a claim or an account-create
//! destination). Each witness holds at most one live vote. A new vote from
//! the same witness replaces the old one, so repeating a vote never counts
//! twice and changing it moves the witness from one matching set to
//! another. Quorum is reached when the number of distinct witnesses voting
//! the exact same value reaches the threshold.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult};

/// One witness's current vote.
#[cw_serde]
pub struct WitnessVote<T> {
    pub witness: Addr,
    pub vote: T,
}

#[cw_serde]
pub struct Tally<T> {
    pub votes: Vec<WitnessVote<T>>,
}

/// Result of recording a vote.
#[derive(Debug, Clone, PartialEq)]
pub enum TallyOutcome<T> {
    /// No value has reached quorum yet; `matching` is the size of the voted value's set
    Pending { matching: u32 },
    /// `value` reached quorum with exactly these witnesses voting it
    Decided { value: T, witnesses: Vec<Addr> },
}

impl<T> Default for Tally<T> {
    fn default() -> Self {
        Self { votes: vec![] }
    }
}

impl<T: Clone + PartialEq> Tally<T> {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn vote_of(&self, witness: &Addr) -> Option<&T> {
        self.votes
            .iter()
            .find(|v| v.witness == *witness)
            .map(|v| &v.vote)
    }

    /// Witnesses currently voting exactly `value`.
    pub fn matching(&self, value: &T) -> Vec<Addr> {
        self.votes
            .iter()
            .filter(|v| v.vote == *value)
            .map(|v| v.witness.clone())
            .collect()
    }

    /// Drop votes from accounts that are no longer witnesses.
    pub fn prune<F>(&mut self, mut is_witness: F) -> StdResult<()>
    where
        F: FnMut(&Addr) -> StdResult<bool>,
    {
        let mut kept = Vec::with_capacity(self.votes.len());
        for vote in self.votes.drain(..) {
            if is_witness(&vote.witness)? {
                kept.push(vote);
            }
        }
        self.votes = kept;
        Ok(())
    }

    /// Record `value` as the current vote of `witness` and check quorum.
    pub fn record(&mut self, witness: Addr, value: T, threshold: u32) -> TallyOutcome<T> {
        self.votes.retain(|v| v.witness != witness);
        self.votes.push(WitnessVote {
            witness,
            vote: value.clone(),
        });

        let witnesses = self.matching(&value);
        if witnesses.len() as u32 >= threshold {
            TallyOutcome::Decided { value, witnesses }
        } else {
            TallyOutcome::Pending {
                matching: witnesses.len() as u32,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::Uint128;

    type Vote = (u128, &'static str);

    fn w(name: &str) -> Addr {
        Addr::unchecked(name)
    }

    #[test]
    fn test_identical_revote_does_not_double_count() {
        let mut tally: Tally<Vote> = Tally::new();
        assert_eq!(
            tally.record(w("alice"), (5, "d1"), 2),
            TallyOutcome::Pending { matching: 1 }
        );
        assert_eq!(
            tally.record(w("alice"), (5, "d1"), 2),
            TallyOutcome::Pending { matching: 1 }
        );
        assert_eq!(tally.votes.len(), 1);
    }

    #[test]
    fn test_revote_moves_witness_between_sets() {
        let mut tally: Tally<Vote> = Tally::new();
        tally.record(w("alice"), (5, "d1"), 3);
        tally.record(w("bob"), (5, "d1"), 3);
        assert_eq!(tally.matching(&(5, "d1")).len(), 2);

        tally.record(w("alice"), (7, "d2"), 3);
        assert_eq!(tally.matching(&(5, "d1")), vec![w("bob")]);
        assert_eq!(tally.matching(&(7, "d2")), vec![w("alice")]);
        assert_eq!(tally.vote_of(&w("alice")), Some(&(7, "d2")));
    }

    #[test]
    fn test_quorum_reports_exact_matching_set() {
        let mut tally: Tally<Uint128> = Tally::new();
        tally.record(w("alice"), Uint128::new(5), 2);
        tally.record(w("carol"), Uint128::new(7), 2);

        match tally.record(w("bob"), Uint128::new(5), 2) {
            TallyOutcome::Decided { value, witnesses } => {
                assert_eq!(value, Uint128::new(5));
                assert_eq!(witnesses, vec![w("alice"), w("bob")]);
            }
            other => panic!("expected quorum, got {:?}", other),
        }
    }

    #[test]
    fn test_threshold_one_decides_immediately() {
        let mut tally: Tally<Vote> = Tally::new();
        assert_eq!(
            tally.record(w("alice"), (20, "r"), 1),
            TallyOutcome::Decided {
                value: (20, "r"),
                witnesses: vec![w("alice")],
            }
        );
    }

    #[test]
    fn test_prune_removes_stale_witnesses() {
        let mut tally: Tally<Vote> = Tally::new();
        tally.record(w("alice"), (5, "d1"), 3);
        tally.record(w("mallory"), (5, "d1"), 3);

        tally.prune(|addr| Ok(addr.as_str() != "mallory")).unwrap();
        assert_eq!(tally.matching(&(5, "d1")), vec![w("alice")]);

        // Quorum now needs a fresh, still-registered witness
        assert_eq!(
            tally.record(w("bob"), (5, "d1"), 3),
            TallyOutcome::Pending { matching: 2 }
        );
    }

    #[test]
    fn test_prune_propagates_errors() {
        let mut tally: Tally<Vote> = Tally::new();
        tally.record(w("alice"), (5, "d1"), 3);
        let res = tally.prune(|_| Err(cosmwasm_std::StdError::generic_err("querier down")));
        assert!(res.is_err());
    }
}
