//! Twenty-sided die and the champion draw attached to each roll.

use std::ops::RangeInclusive;

use anyhow::{Result, anyhow};
use rand::Rng;
use rand::distributions::{Distribution, Standard};
use rand::seq::SliceRandom;

use crate::champions::{Role, Roster};

/// Number of faces of the die
pub const FACES: u8 = 20;

/// Result of a single d20 throw
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{_0}")]
pub struct D20(u8);

impl D20 {
    pub fn new(value: u8) -> Result<Self> {
        if (1..=FACES).contains(&value) {
            Ok(Self(value))
        } else {
            Err(anyhow!("{value} is not a face of a d{FACES}"))
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Distribution<D20> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> D20 {
        D20(rng.gen_range(1..=FACES))
    }
}

/// Range of rolls sharing the same flavor and the same champion pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Bucket {
    /// 1
    #[display("1")]
    NaturalOne,

    /// 2 to 4
    #[display("2-4")]
    Hide,

    /// 5 to 9
    #[display("5-9")]
    Skirmish,

    /// 10 to 14
    #[display("10-14")]
    Playmaker,

    /// 15 to 19
    #[display("15-19")]
    Engage,

    /// 20
    #[display("20")]
    NaturalTwenty,
}

impl Bucket {
    pub const fn of(die: D20) -> Self {
        match die.value() {
            1 => Self::NaturalOne,
            2..=4 => Self::Hide,
            5..=9 => Self::Skirmish,
            10..=14 => Self::Playmaker,
            15..=19 => Self::Engage,
            _ => Self::NaturalTwenty,
        }
    }

    /// Inclusive range of aggression scores drawn from for this bucket
    pub const fn range(self) -> RangeInclusive<u8> {
        match self {
            Self::NaturalOne => 1..=1,
            Self::Hide => 2..=4,
            Self::Skirmish => 5..=9,
            Self::Playmaker => 10..=14,
            Self::Engage => 15..=19,
            Self::NaturalTwenty => 20..=20,
        }
    }

    pub const fn quotes(self) -> &'static [&'static str] {
        match self {
            Self::NaturalOne => &[
                "Chuck Norris rolled a 1 once. The dice apologized. You? You get benched...",
                "Worst roll I’ve ever seen. Total disaster. People are laughing, believe me.",
                "That’s not a roll, that’s a cry for help. What’re you even doing here?",
                "You know you deserve this...",
                "Natural one. Congratulations. You’ve managed to weaponize incompetence.",
                "Just dodge...",
            ],
            Self::Hide => &[
                "Be nowhere near the enemy this game...",
                "Get down! Stay out of sight till you can pump iron. — Arnold",
                "Your best move? Pretend you’re furniture. Nobody attacks a chair.",
                "Walk away from danger. Keep walking. In fact, don’t stop walking.",
                "The best fight is the one you don't take. — Bruce",
            ],
            Self::Skirmish => &[
                "You get some rope this game. Don't hang yourself with it..",
                "Light skirmishes only. If it bleeds, let your jungler kill it. — Arnold",
            ],
            Self::Playmaker => &["Your team is relying on you to make plays this game. Don't let them down..."],
            Self::Engage => &[
                "YOU ARE THE ENGAGE. BE THE ENGAGE.",
                "Get to the teamfight! You start it. Hasta la vista, backline. — Arnold",
                "Ring the bell. You lead the charge. — Stallone",
            ],
            Self::NaturalTwenty => &["The team fights when you say they fight!"],
        }
    }
}

/// Everything decided by one `/roll`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollOutcome {
    pub die: D20,
    pub bucket: Bucket,
    pub quote: &'static str,
    pub scope: Option<Role>,
    pub champion: Option<String>,
}

impl RollOutcome {
    pub fn scope_label(&self) -> &'static str {
        self.scope.map_or("all roles", Role::key)
    }

    pub fn headline(&self) -> String {
        match &self.champion {
            Some(champion) => format!("Rolled {} — {} champion: {champion}", self.die, self.scope_label()),
            None => format!("Rolled {} — No champions found in {} for this range.", self.die, self.scope_label()),
        }
    }
}

/// Throws the die and draws a champion from the roles in `scope`.
pub fn roll<R: Rng + ?Sized>(roster: &Roster, scope: Option<Role>, rng: &mut R) -> RollOutcome {
    let die: D20 = rng.r#gen();
    roll_value(die, roster, scope, rng)
}

/// Same as [`roll`] with an already thrown die.
pub fn roll_value<R: Rng + ?Sized>(die: D20, roster: &Roster, scope: Option<Role>, rng: &mut R) -> RollOutcome {
    let bucket = Bucket::of(die);
    let quote = bucket.quotes().choose(rng).copied().unwrap_or_default();
    let champion = roster
        .candidates(scope, &bucket.range())
        .choose(rng)
        .map(|name| (*name).to_owned());

    RollOutcome {
        die,
        bucket,
        quote,
        scope,
        champion,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const BUCKETS: [Bucket; 6] =
        [Bucket::NaturalOne, Bucket::Hide, Bucket::Skirmish, Bucket::Playmaker, Bucket::Engage, Bucket::NaturalTwenty];

    fn scopes() -> Vec<Option<Role>> {
        let mut scopes = vec![None];
        scopes.extend(Role::ALL.map(Some));
        scopes
    }

    #[test]
    fn every_face_is_in_exactly_one_bucket() {
        for value in 1..=FACES {
            let die = D20::new(value).unwrap();
            let matching = BUCKETS.iter().filter(|bucket| bucket.range().contains(&value)).count();
            assert_eq!(matching, 1, "{value} is in {matching} buckets");
            assert!(Bucket::of(die).range().contains(&value));
        }
    }

    #[test]
    fn out_of_range_faces_are_rejected() {
        assert!(D20::new(0).is_err());
        assert!(D20::new(21).is_err());
    }

    #[test]
    fn sampled_faces_cover_the_die() {
        let mut rng = StdRng::seed_from_u64(20);
        let faces: Vec<u8> = (0..2000).map(|_| rng.r#gen::<D20>().value()).collect();
        assert!(faces.iter().all(|face| (1..=FACES).contains(face)));
        assert!(faces.contains(&1));
        assert!(faces.contains(&FACES));
    }

    #[test]
    fn drawn_champion_scores_in_bucket_for_some_role_in_scope() {
        let roster = Roster::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for scope in scopes() {
            for _ in 0..200 {
                let outcome = roll(&roster, scope, &mut rng);
                assert!(outcome.bucket.quotes().contains(&outcome.quote));
                let Some(champion) = &outcome.champion else { continue };
                let range = outcome.bucket.range();
                assert!(
                    Roster::roles_in_scope(scope)
                        .into_iter()
                        .filter_map(|role| roster.score(role, champion))
                        .any(|score| range.contains(&score)),
                    "{champion} does not score in {} for {}",
                    outcome.bucket,
                    outcome.scope_label()
                );
            }
        }
    }

    #[test]
    fn natural_twenty_in_top_only_picks_top_twenties() {
        let roster = Roster::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let twenty = D20::new(20).unwrap();
        for _ in 0..50 {
            let outcome = roll_value(twenty, &roster, Some(Role::Top), &mut rng);
            let champion = outcome.champion.unwrap();
            assert_eq!(roster.score(Role::Top, &champion), Some(20));
        }
    }

    #[test]
    fn empty_pool_reports_no_match() {
        let roster = Roster::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = roll_value(D20::new(3).unwrap(), &roster, Some(Role::Top), &mut rng);
        assert_eq!(outcome.bucket, Bucket::Hide);
        assert_eq!(outcome.champion, None);
        assert_eq!(outcome.headline(), "Rolled 3 — No champions found in top for this range.");
    }

    #[test]
    fn headline_names_scope_and_champion() {
        let roster = Roster::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = roll_value(D20::new(1).unwrap(), &roster, None, &mut rng);
        assert_eq!(outcome.headline(), "Rolled 1 — all roles champion: Teemo");
    }
}
