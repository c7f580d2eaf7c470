//! Population graph representation and builder.
//!
//! # Data layout
//!
//! Individuals, households, and groups live in flat arenas addressed by their
//! typed ids.  The two graphs are stored as index adjacency, never as owned
//! references, so there are no cycles and the whole structure is `Send + Sync`:
//!
//! ```text
//! household_of[individual]      -> HouseholdId   (exactly one)
//! household_members[household]  -> [IndividualId] ascending
//! groups_of[individual]         -> [GroupId]     in join order
//! group_members[group]          -> [IndividualId] ascending
//! ```
//!
//! # Spatial index
//!
//! Two R-trees (via `vs-spatial`) map locations to the nearest households and
//! groups.  They are bulk-loaded by [`PopulationGraphBuilder::build`] and are
//! read-only afterwards.

use vs_core::{GroupId, HouseholdId, IndividualId, Location};
use vs_spatial::SpatialIndex;

use crate::{Group, Household, PopulationError, PopulationResult};

// ── PopulationGraph ───────────────────────────────────────────────────────────

/// Household-membership and group-affinity graphs plus spatial indices.
///
/// Do not construct directly; use [`PopulationGraphBuilder`] or
/// [`generate`](crate::generate).
pub struct PopulationGraph {
    households: Vec<Household>,
    groups:     Vec<Group>,

    household_of:      Vec<HouseholdId>,
    household_members: Vec<Vec<IndividualId>>,
    groups_of:         Vec<Vec<GroupId>>,
    group_members:     Vec<Vec<IndividualId>>,

    household_idx: SpatialIndex<HouseholdId>,
    group_idx:     SpatialIndex<GroupId>,
}

impl PopulationGraph {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn individual_count(&self) -> usize {
        self.household_of.len()
    }

    pub fn household_count(&self) -> usize {
        self.households.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Iterator over all `IndividualId`s in ascending index order.
    pub fn individuals(&self) -> impl Iterator<Item = IndividualId> + '_ {
        (0..self.household_of.len() as u32).map(IndividualId)
    }

    // ── Entity records ────────────────────────────────────────────────────

    pub fn households(&self) -> &[Household] {
        &self.households
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[inline]
    pub fn household(&self, id: HouseholdId) -> &Household {
        &self.households[id.index()]
    }

    #[inline]
    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.index()]
    }

    // ── Household graph ───────────────────────────────────────────────────

    #[inline]
    pub fn household_of(&self, individual: IndividualId) -> HouseholdId {
        self.household_of[individual.index()]
    }

    /// Where `individual` lives; the layout position a renderer uses for them.
    #[inline]
    pub fn home_location(&self, individual: IndividualId) -> Location {
        self.households[self.household_of(individual).index()].location
    }

    #[inline]
    pub fn household_members(&self, household: HouseholdId) -> &[IndividualId] {
        &self.household_members[household.index()]
    }

    // ── Group graph ───────────────────────────────────────────────────────

    /// Groups `individual` belongs to, nearest-first as assigned.
    #[inline]
    pub fn groups_of(&self, individual: IndividualId) -> &[GroupId] {
        &self.groups_of[individual.index()]
    }

    /// Members of `group` in ascending index order.
    #[inline]
    pub fn group_members(&self, group: GroupId) -> &[IndividualId] {
        &self.group_members[group.index()]
    }

    /// Number of group memberships across the whole population.
    pub fn membership_count(&self) -> usize {
        self.groups_of.iter().map(Vec::len).sum()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Up to `k` households nearest to `location`, ascending distance.
    pub fn nearest_households(&self, location: Location, k: usize) -> Vec<HouseholdId> {
        self.household_idx.k_nearest(location, k)
    }

    /// Up to `k` groups nearest to `location`, ascending distance.
    pub fn nearest_groups(&self, location: Location, k: usize) -> Vec<GroupId> {
        self.group_idx.k_nearest(location, k)
    }
}

// ── PopulationGraphBuilder ────────────────────────────────────────────────────

/// Construct a [`PopulationGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// Individuals are numbered sequentially as they are added and must name an
/// existing household.  Membership queries work during construction, which is
/// what the proximity-based group assignment relies on.
///
/// # Example
///
/// ```
/// use vs_core::Location;
/// use vs_population::PopulationGraphBuilder;
///
/// let mut b = PopulationGraphBuilder::new();
/// let home = b.add_household(Location::new(2, 3));
/// let club = b.add_group(Location::new(4, 4));
/// let a = b.add_individual(home).unwrap();
/// let c = b.add_individual(home).unwrap();
/// b.join_group(a, club).unwrap();
/// b.join_group(c, club).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.individual_count(), 2);
/// assert_eq!(graph.group_members(club), &[a, c]);
/// ```
pub struct PopulationGraphBuilder {
    households:        Vec<Household>,
    groups:            Vec<Group>,
    household_of:      Vec<HouseholdId>,
    household_members: Vec<Vec<IndividualId>>,
    groups_of:         Vec<Vec<GroupId>>,
}

impl PopulationGraphBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocate for the expected number of individuals.
    pub fn with_capacity(individuals: usize) -> Self {
        Self {
            households:        Vec::new(),
            groups:            Vec::new(),
            household_of:      Vec::with_capacity(individuals),
            household_members: Vec::new(),
            groups_of:         Vec::with_capacity(individuals),
        }
    }

    /// Add a household and return its `HouseholdId` (sequential from 0).
    pub fn add_household(&mut self, location: Location) -> HouseholdId {
        let id = HouseholdId(self.households.len() as u32);
        self.households.push(Household { id, location });
        self.household_members.push(Vec::new());
        id
    }

    /// Add a group and return its `GroupId` (sequential from 0).
    pub fn add_group(&mut self, location: Location) -> GroupId {
        let id = GroupId(self.groups.len() as u32);
        self.groups.push(Group { id, location });
        id
    }

    /// Add the next individual as a member of `household`.
    pub fn add_individual(&mut self, household: HouseholdId) -> PopulationResult<IndividualId> {
        let members = self
            .household_members
            .get_mut(household.index())
            .ok_or(PopulationError::UnknownHousehold(household))?;
        let id = IndividualId(self.household_of.len() as u32);
        members.push(id);
        self.household_of.push(household);
        self.groups_of.push(Vec::new());
        Ok(id)
    }

    /// Connect `individual` to `group`.  Joining the same group twice is a
    /// no-op.
    pub fn join_group(&mut self, individual: IndividualId, group: GroupId) -> PopulationResult<()> {
        if group.index() >= self.groups.len() {
            return Err(PopulationError::UnknownGroup(group));
        }
        let joined = self
            .groups_of
            .get_mut(individual.index())
            .ok_or(PopulationError::UnknownIndividual(individual))?;
        if !joined.contains(&group) {
            joined.push(group);
        }
        Ok(())
    }

    // ── Queries used while building ───────────────────────────────────────

    pub fn individual_count(&self) -> usize {
        self.household_of.len()
    }

    pub fn household_count(&self) -> usize {
        self.households.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// # Panics
    /// Panics if `individual` has not been added.
    pub fn household_of(&self, individual: IndividualId) -> HouseholdId {
        self.household_of[individual.index()]
    }

    /// # Panics
    /// Panics if `household` has not been added.
    pub fn household_location(&self, household: HouseholdId) -> Location {
        self.households[household.index()].location
    }

    /// # Panics
    /// Panics if `group` has not been added.
    pub fn group_location(&self, group: GroupId) -> Location {
        self.groups[group.index()].location
    }

    /// # Panics
    /// Panics if `household` has not been added.
    pub fn household_members(&self, household: HouseholdId) -> &[IndividualId] {
        &self.household_members[household.index()]
    }

    /// # Panics
    /// Panics if `individual` has not been added.
    pub fn groups_of(&self, individual: IndividualId) -> &[GroupId] {
        &self.groups_of[individual.index()]
    }

    /// Consume the builder and produce a [`PopulationGraph`].
    ///
    /// Inverts the membership lists into per-group member lists (ascending
    /// individual order) and bulk-loads both spatial indices.
    pub fn build(self) -> PopulationGraph {
        let mut group_members: Vec<Vec<IndividualId>> = vec![Vec::new(); self.groups.len()];
        for (i, joined) in self.groups_of.iter().enumerate() {
            for g in joined {
                group_members[g.index()].push(IndividualId(i as u32));
            }
        }

        let household_idx = SpatialIndex::bulk_load(self.households.iter().map(|h| (h.id, h.location)));
        let group_idx = SpatialIndex::bulk_load(self.groups.iter().map(|g| (g.id, g.location)));

        PopulationGraph {
            households: self.households,
            groups: self.groups,
            household_of: self.household_of,
            household_members: self.household_members,
            groups_of: self.groups_of,
            group_members,
            household_idx,
            group_idx,
        }
    }
}

impl Default for PopulationGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
