use super::assignment::Assignment;
use super::distance::{DEFAULT_MAX_DISTANCE, DEFAULT_MIN_DISTANCE, DistanceMatrix};
use super::element::{Element, ExternalContribution, Placement};
use super::error::ModelError;
use super::ids::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inclusive range `[min, max]` that an accepted CG must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgRange {
    pub min: f64,
    pub max: f64,
}

impl CgRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, cg: f64) -> bool {
        self.min <= cg && cg <= self.max
    }
}

/// Immutable input of a placement search.
///
/// Holds the ordered elements (fixed and movable), the external point masses, the
/// minimum and maximum edge-distance matrices indexed by element identity, the enclosure
/// height and the target CG range. A scenario is built once through [`ScenarioBuilder`]
/// and is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    elements: Vec<Element>,
    externals: Vec<ExternalContribution>,
    min_distance: DistanceMatrix,
    max_distance: DistanceMatrix,
    total_height: f64,
    target_cg_range: CgRange,
}

impl Scenario {
    pub fn builder(total_height: f64, target_cg_range: CgRange) -> ScenarioBuilder {
        ScenarioBuilder::new(total_height, target_cg_range)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Retrieves an element by its identity.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this scenario.
    #[inline]
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn element_id(&self, name: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| element.name == name)
            .map(ElementId::new)
    }

    pub fn ids(&self) -> impl Iterator<Item = ElementId> + Clone + '_ {
        (0..self.elements.len()).map(ElementId::new)
    }

    pub fn fixed_ids(&self) -> Vec<ElementId> {
        self.ids()
            .filter(|&id| !self.element(id).is_movable())
            .collect()
    }

    pub fn movable_ids(&self) -> Vec<ElementId> {
        self.ids()
            .filter(|&id| self.element(id).is_movable())
            .collect()
    }

    pub fn externals(&self) -> &[ExternalContribution] {
        &self.externals
    }

    pub fn min_distance(&self) -> &DistanceMatrix {
        &self.min_distance
    }

    pub fn max_distance(&self) -> &DistanceMatrix {
        &self.max_distance
    }

    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    pub fn target_cg_range(&self) -> CgRange {
        self.target_cg_range
    }

    /// Assignment holding every fixed element at its height and every movable one at zero.
    pub fn fixed_assignment(&self) -> Assignment {
        Assignment::from_heights(
            self.elements
                .iter()
                .map(|element| element.fixed_height().unwrap_or(0.0))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy)]
enum PendingPlacement {
    Height(f64),
    Bottom,
    Top,
    Movable,
}

#[derive(Debug, Clone)]
struct PendingElement {
    name: String,
    mass: f64,
    thickness: f64,
    placement: PendingPlacement,
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Min,
    Max,
}

/// Assembles a [`Scenario`], resolving element names into identities.
///
/// Elements keep the order in which they are added. Pairs without an explicit bound take
/// the defaults (`0` and `9999` unless changed with [`ScenarioBuilder::default_distances`]).
#[derive(Debug, Clone)]
pub struct ScenarioBuilder {
    total_height: f64,
    target_cg_range: CgRange,
    elements: Vec<PendingElement>,
    externals: Vec<ExternalContribution>,
    default_min: f64,
    default_max: f64,
    bounds: Vec<(String, String, Bound, f64)>,
}

impl ScenarioBuilder {
    pub fn new(total_height: f64, target_cg_range: CgRange) -> Self {
        Self {
            total_height,
            target_cg_range,
            elements: Vec::new(),
            externals: Vec::new(),
            default_min: DEFAULT_MIN_DISTANCE,
            default_max: DEFAULT_MAX_DISTANCE,
            bounds: Vec::new(),
        }
    }

    fn push(mut self, name: &str, mass: f64, thickness: f64, placement: PendingPlacement) -> Self {
        self.elements.push(PendingElement {
            name: name.to_string(),
            mass,
            thickness,
            placement,
        });
        self
    }

    pub fn fixed(self, name: &str, mass: f64, thickness: f64, height: f64) -> Self {
        self.push(name, mass, thickness, PendingPlacement::Height(height))
    }

    /// Fixed element resting on the floor: its center sits at `thickness / 2`.
    pub fn fixed_bottom(self, name: &str, mass: f64, thickness: f64) -> Self {
        self.push(name, mass, thickness, PendingPlacement::Bottom)
    }

    /// Fixed element touching the ceiling: its center sits at `total_height - thickness / 2`.
    pub fn fixed_top(self, name: &str, mass: f64, thickness: f64) -> Self {
        self.push(name, mass, thickness, PendingPlacement::Top)
    }

    pub fn movable(self, name: &str, mass: f64, thickness: f64) -> Self {
        self.push(name, mass, thickness, PendingPlacement::Movable)
    }

    pub fn external(mut self, name: &str, mass: f64, height: f64) -> Self {
        self.externals
            .push(ExternalContribution::new(name, mass, height));
        self
    }

    pub fn default_distances(mut self, min: f64, max: f64) -> Self {
        self.default_min = min;
        self.default_max = max;
        self
    }

    pub fn min_distance(mut self, a: &str, b: &str, value: f64) -> Self {
        self.bounds
            .push((a.to_string(), b.to_string(), Bound::Min, value));
        self
    }

    pub fn max_distance(mut self, a: &str, b: &str, value: f64) -> Self {
        self.bounds
            .push((a.to_string(), b.to_string(), Bound::Max, value));
        self
    }

    pub fn distance(self, a: &str, b: &str, min: f64, max: f64) -> Self {
        self.min_distance(a, b, min).max_distance(a, b, max)
    }

    pub fn build(self) -> Result<Scenario, ModelError> {
        let mut index: HashMap<&str, ElementId> = HashMap::with_capacity(self.elements.len());
        for (i, pending) in self.elements.iter().enumerate() {
            if index.insert(pending.name.as_str(), ElementId::new(i)).is_some() {
                return Err(ModelError::DuplicateElement(pending.name.clone()));
            }
        }

        let size = self.elements.len();
        let mut min_distance = DistanceMatrix::filled(size, self.default_min);
        let mut max_distance = DistanceMatrix::filled(size, self.default_max);

        for (a, b, bound, value) in &self.bounds {
            let resolve = |name: &String| {
                index
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| ModelError::UnknownElement(name.clone()))
            };
            let (id_a, id_b) = (resolve(a)?, resolve(b)?);
            match bound {
                Bound::Min => min_distance.set(id_a, id_b, *value),
                Bound::Max => max_distance.set(id_a, id_b, *value),
            }
        }

        let total_height = self.total_height;
        let elements = self
            .elements
            .into_iter()
            .map(|pending| {
                let placement = match pending.placement {
                    PendingPlacement::Height(height) => Placement::Fixed(height),
                    PendingPlacement::Bottom => Placement::Fixed(pending.thickness / 2.0),
                    PendingPlacement::Top => {
                        Placement::Fixed(total_height - pending.thickness / 2.0)
                    }
                    PendingPlacement::Movable => Placement::Movable,
                };
                Element {
                    name: pending.name,
                    mass: pending.mass,
                    thickness: pending.thickness,
                    placement,
                }
            })
            .collect();

        Ok(Scenario {
            elements,
            externals: self.externals,
            min_distance,
            max_distance,
            total_height,
            target_cg_range: self.target_cg_range,
        })
    }
}
