// File: crates/chart-core/src/variables.rs
// Summary: Variable-selection store backing the side panel, fed by hover disclosure events.

use crate::disclosure::DisclosureEvent;

pub const CATEGORIES: [&str; 3] = [
    "Environmental Impact",
    "Transportation Metrics",
    "Operations Management",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub category: String,
    pub selected: bool,
    pub description: Option<String>,
}

impl Variable {
    pub fn new(id: &str, name: &str, category: &str, selected: bool, description: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            selected,
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    variables: Vec<Variable>,
    described: Option<String>,
}

impl VariableStore {
    pub fn new(variables: Vec<Variable>) -> Self {
        Self { variables, described: None }
    }

    pub fn sample() -> Self {
        let [env, transport, ops] = CATEGORIES;
        Self::new(vec![
            Variable::new("1", "Carbon Emissions", env, true,
                "Measures the total carbon dioxide equivalent emissions from all fleet vehicles."),
            Variable::new("2", "CO2 Distribution Network", env, true,
                "Analyzes the spatial distribution of carbon emissions across routes and service areas."),
            Variable::new("3", "Fleet Optimization", env, true,
                "Determines the optimal number and type of vehicles needed to meet demand."),
            Variable::new("4", "Parking Utilization Rate", transport, false,
                "Tracks the share of available parking spaces in use across time and locations."),
            Variable::new("5", "Border Crossing Frequency", transport, true,
                "Measures how often vehicles cross predefined service-zone boundaries."),
            Variable::new("6", "Service Request Volume", transport, true,
                "Quantifies the number of service requests received per time period."),
            Variable::new("7", "Route Efficiency Index", transport, false,
                "Composite of route distance, time and fuel use; higher is more optimized."),
            Variable::new("8", "Operational Downtime", ops, true,
                "Total time vehicles or systems are unavailable for service."),
            Variable::new("9", "Resource Allocation Score", ops, false,
                "How effectively vehicles, drivers and maintenance are spread across areas."),
        ])
    }

    pub fn variables(&self) -> &[Variable] { &self.variables }

    pub fn get(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Flip selection; returns the new state, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let v = self.variables.iter_mut().find(|v| v.id == id)?;
        v.selected = !v.selected;
        Some(v.selected)
    }

    pub fn selected(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter().filter(|v| v.selected)
    }

    /// Variables grouped under each known category, in category order.
    pub fn categorized(&self) -> Vec<(&'static str, Vec<&Variable>)> {
        CATEGORIES
            .iter()
            .map(|&c| (c, self.variables.iter().filter(|v| v.category == c).collect()))
            .collect()
    }

    pub fn set_described(&mut self, id: Option<&str>) {
        self.described = id.filter(|id| self.get(id).is_some()).map(str::to_string);
    }

    /// The variable whose description the panel currently shows.
    pub fn described(&self) -> Option<&Variable> {
        self.described.as_deref().and_then(|id| self.get(id))
    }

    pub fn apply_disclosure(&mut self, id: &str, event: DisclosureEvent) {
        match event {
            DisclosureEvent::Show => self.set_described(Some(id)),
            DisclosureEvent::Hide => {
                if self.described.as_deref() == Some(id) {
                    self.described = None;
                }
            }
        }
    }
}
