//! Itinerary derivation, port editing and share tokens.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::catalog::{find_template, template_keys};
use super::model::{ExcursionDetail, ItineraryConfig, Port, PortUpdate};
use crate::error::{Result, WaypointError};
use crate::item::{ItemList, LineItem};

/// A built itinerary: the ship, its ports and the excursions on offer.
///
/// Excursions are the editable rows; each is labelled with its port's name
/// and points back at the port by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPlan {
    pub config: ItineraryConfig,
    pub cruise_line: String,
    pub ship_name: String,
    pub departure_port: String,
    pub duration: u32,
    pub ports: Vec<Port>,
    pub items: ItemList<ExcursionDetail>,
    #[serde(default)]
    next_port_id: u64,
}

/// Loads the sample itinerary named by the configuration.
pub fn derive_itinerary(config: &ItineraryConfig) -> Result<ItineraryPlan> {
    let template = find_template(&config.template).ok_or_else(|| {
        WaypointError::validation(format!(
            "unknown itinerary template '{}' (expected one of: {})",
            config.template,
            template_keys().collect::<Vec<_>>().join(", ")
        ))
    })?;

    let mut plan = ItineraryPlan {
        config: config.clone(),
        cruise_line: config
            .cruise_line
            .clone()
            .unwrap_or_else(|| template.cruise_line.to_string()),
        ship_name: config
            .ship_name
            .clone()
            .unwrap_or_else(|| template.ship_name.to_string()),
        departure_port: config
            .departure_port
            .clone()
            .unwrap_or_else(|| template.departure_port.to_string()),
        duration: template.duration,
        ports: Vec::with_capacity(template.ports.len()),
        items: ItemList::new(),
        next_port_id: 0,
    };

    for port_template in template.ports {
        let port_id = plan.next_port_id();
        for excursion in port_template.excursions {
            plan.items.push_template(
                excursion.name,
                port_template.name,
                ExcursionDetail {
                    port_id: port_id.clone(),
                    duration: excursion.duration.to_string(),
                    price: excursion.price,
                    description: excursion.description.to_string(),
                },
            );
        }
        plan.ports.push(Port {
            id: port_id,
            name: port_template.name.to_string(),
            country: port_template.country.to_string(),
            arrival_time: port_template.arrival_time.to_string(),
            departure_time: port_template.departure_time.to_string(),
            day_number: port_template.day_number,
            description: port_template.description.to_string(),
            top_attractions: port_template
                .top_attractions
                .iter()
                .map(|a| a.to_string())
                .collect(),
        });
    }

    tracing::info!(
        "Built itinerary '{}' with {} ports and {} excursions",
        template.key,
        plan.ports.len(),
        plan.items.len()
    );
    Ok(plan)
}

impl ItineraryPlan {
    fn next_port_id(&mut self) -> String {
        self.next_port_id += 1;
        format!("port-{}", self.next_port_id)
    }

    pub fn port(&self, port_id: &str) -> Option<&Port> {
        self.ports.iter().find(|port| port.id == port_id)
    }

    pub fn port_by_name(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|port| port.name == name)
    }

    /// Appends a port of call, scheduled 8:00 AM to 5:00 PM on day
    /// `ports + 2`.
    pub fn add_port(&mut self, name: &str, country: &str) -> String {
        let id = self.next_port_id();
        let day_number = self.ports.len() as u32 + 2;
        self.ports.push(Port {
            id: id.clone(),
            name: name.trim().to_string(),
            country: country.trim().to_string(),
            arrival_time: "8:00 AM".to_string(),
            departure_time: "5:00 PM".to_string(),
            day_number,
            description: String::new(),
            top_attractions: Vec::new(),
        });
        id
    }

    /// Drops a port together with its excursions.
    pub fn remove_port(&mut self, port_id: &str) -> bool {
        let before = self.ports.len();
        self.ports.retain(|port| port.id != port_id);
        if self.ports.len() == before {
            return false;
        }
        self.items.retain(|item| item.detail.port_id != port_id);
        true
    }

    /// Applies a partial edit. Renaming a port re-labels its excursions.
    pub fn update_port(&mut self, port_id: &str, update: PortUpdate) -> bool {
        let Some(port) = self.ports.iter_mut().find(|port| port.id == port_id) else {
            return false;
        };
        if update.is_empty() {
            return false;
        }

        if let Some(name) = update.name {
            port.name = name.trim().to_string();
            let label = port.name.clone();
            for item in self
                .items
                .iter_mut()
                .filter(|item| item.detail.port_id == port_id)
            {
                item.category = label.clone();
            }
        }
        if let Some(country) = update.country {
            port.country = country;
        }
        if let Some(arrival) = update.arrival_time {
            port.arrival_time = arrival;
        }
        if let Some(departure) = update.departure_time {
            port.departure_time = departure;
        }
        if let Some(day) = update.day_number {
            port.day_number = day;
        }
        if let Some(description) = update.description {
            port.description = description;
        }
        true
    }

    /// Adds a hand-entered excursion at the port with this name.
    ///
    /// Rejected when the name is blank or no port carries that name.
    pub fn add_custom_excursion(&mut self, name: &str, port_name: &str) -> Option<String> {
        let port_id = self.port_by_name(port_name.trim())?.id.clone();
        let id = self.items.add_custom_item(name, port_name)?;
        if let Some(item) = self.items.get_mut(&id) {
            item.detail.port_id = port_id;
        }
        Some(id)
    }

    /// Excursions offered at one port, in list order.
    pub fn excursions_at<'a>(
        &'a self,
        port_id: &'a str,
    ) -> impl Iterator<Item = &'a LineItem<ExcursionDetail>> + 'a {
        self.items
            .iter()
            .filter(move |item| item.detail.port_id == port_id)
    }

    /// Sum of the prices of all selected excursions.
    pub fn total_excursion_cost(&self) -> f64 {
        self.items
            .iter()
            .filter(|item| item.checked)
            .map(|item| item.detail.price)
            .sum()
    }

    /// Encodes the whole itinerary as a base64 token.
    pub fn share_token(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(STANDARD.encode(json))
    }

    /// Restores an itinerary from [`share_token`](Self::share_token) output.
    pub fn from_share_token(token: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(token.trim())
            .map_err(|e| WaypointError::validation(format!("invalid share token: {}", e)))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
