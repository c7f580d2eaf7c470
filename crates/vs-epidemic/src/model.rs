//! The epidemic state machine.

use std::sync::Arc;

use log::trace;
use rustc_hash::FxHashSet;

use vs_core::{Configuration, Distributions, GroupId, IndividualId, Mitigation, SimRng};
use vs_population::PopulationGraph;

use crate::transmission::escape_probability;
use crate::{EpidemicError, EpidemicResult, Episode, HealthStatus, Snapshot};

/// Advances snapshots one day at a time over a shared, read-only population
/// graph.
///
/// The model itself holds no per-day state; the same model can advance any
/// number of independent snapshot histories.
pub struct EpidemicModel {
    graph: Arc<PopulationGraph>,
    dists: Distributions,
    infection_probability_per_minute: f64,
    death_rate: f64,
}

impl EpidemicModel {
    /// Validate `config` and bind the model to `graph`.
    pub fn new(config: &Configuration, graph: Arc<PopulationGraph>) -> EpidemicResult<Self> {
        let dists = config.distributions()?;
        Ok(Self {
            graph,
            dists,
            infection_probability_per_minute: config.infection_probability_per_minute,
            death_rate: config.death_rate,
        })
    }

    pub fn graph(&self) -> &Arc<PopulationGraph> {
        &self.graph
    }

    /// Day 0, everyone susceptible, sized to the graph.
    pub fn initial_snapshot(&self) -> Snapshot {
        Snapshot::initial(self.graph.individual_count())
    }

    // ── Infection ─────────────────────────────────────────────────────────

    /// Infect `id` on the snapshot's current day.
    ///
    /// Draws incubation days, sickness days, and survival (in that order) and
    /// adds `id` to the active-sick set.  Already-sick and deceased
    /// individuals are left untouched and nothing is drawn.  Returns whether
    /// an infection happened.
    pub fn infect(
        &self,
        snapshot: &mut Snapshot,
        id:       IndividualId,
        rng:      &mut SimRng,
    ) -> EpidemicResult<bool> {
        if id.index() >= snapshot.len() {
            return Err(EpidemicError::UnknownIndividual(id));
        }
        if !snapshot.state(id).can_be_infected() {
            return Ok(false);
        }

        let episode = Episode {
            since:           snapshot.day(),
            incubation_days: self.dists.incubation_days.sample_count(rng),
            sickness_days:   self.dists.sickness_days.sample_count(rng),
            will_survive:    rng.gen_bool(1.0 - self.death_rate),
        };
        snapshot.set_status(id, HealthStatus::Sick(episode))?;
        snapshot.changes_mut().infected += 1;
        Ok(true)
    }

    // ── Daily transition ──────────────────────────────────────────────────

    /// Produce the next day's snapshot from `snapshot`.
    ///
    /// `mitigation` is accepted but has no effect on the transition.
    pub fn advance(
        &self,
        snapshot:   &Snapshot,
        mitigation: &Mitigation,
        rng:        &mut SimRng,
    ) -> EpidemicResult<Snapshot> {
        let expected = self.graph.individual_count();
        if snapshot.len() != expected {
            return Err(EpidemicError::PopulationMismatch { expected, got: snapshot.len() });
        }

        let mut next = snapshot.next_day();
        self.resolve(&mut next)?;
        self.transmit(&mut next, rng)?;

        let changes = next.changes();
        trace!(
            "{}: +{} infected, {} recovered, {} died, {} sick (mitigation {:?} not applied)",
            next.day(),
            changes.infected,
            changes.recovered,
            changes.died,
            next.active_sick().len(),
            mitigation,
        );
        Ok(next)
    }

    /// End every episode that has run its course.  No randomness.
    fn resolve(&self, next: &mut Snapshot) -> EpidemicResult<()> {
        let today = next.day();
        let due: Vec<(IndividualId, Episode)> = next
            .active_sick()
            .iter()
            .filter_map(|&id| next.state(id).episode().map(|ep| (id, *ep)))
            .filter(|(_, ep)| today >= ep.resolves_on())
            .collect();

        for (id, ep) in due {
            if ep.will_survive {
                next.set_status(id, HealthStatus::Recovered { last_sick_since: ep.since })?;
                next.changes_mut().recovered += 1;
            } else {
                next.set_status(id, HealthStatus::Deceased { sick_since: ep.since })?;
                next.changes_mut().died += 1;
            }
        }
        Ok(())
    }

    /// Run one day of group meetings and infect whoever caught the disease.
    ///
    /// Groups are visited in ascending order of their first sick member, each
    /// at most once.  A group with `k` sick members gives every susceptible
    /// member `k` independent rolls.
    fn transmit(&self, next: &mut Snapshot, rng: &mut SimRng) -> EpidemicResult<()> {
        let mut visited: FxHashSet<GroupId> = FxHashSet::default();
        let mut marked: Vec<IndividualId> = Vec::new();

        for &sick in next.active_sick() {
            for &group in self.graph.groups_of(sick) {
                if !visited.insert(group) {
                    continue;
                }

                let minutes = self.exposure_minutes(rng);
                let members = self.graph.group_members(group);
                let sick_members = members.iter().filter(|&&m| next.is_sick(m)).count();
                let susceptible: Vec<IndividualId> = members
                    .iter()
                    .copied()
                    .filter(|&m| next.state(m).can_be_infected())
                    .collect();
                if sick_members == 0 || susceptible.is_empty() {
                    continue;
                }

                let escape = escape_probability(self.infection_probability_per_minute, minutes);
                for _ in 0..sick_members {
                    for &member in &susceptible {
                        if rng.random::<f64>() >= escape {
                            marked.push(member);
                        }
                    }
                }
            }
        }

        for id in marked {
            self.infect(next, id, rng)?;
        }
        Ok(())
    }

    /// Total meeting minutes for one group on one day: a meeting count, then
    /// one duration per meeting.
    fn exposure_minutes(&self, rng: &mut SimRng) -> f64 {
        let meetings = self.dists.meetings_per_day.sample_count(rng);
        (0..meetings)
            .map(|_| self.dists.meeting_minutes.sample_clamped(rng))
            .sum()
    }
}
