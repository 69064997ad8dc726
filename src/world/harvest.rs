use crate::character::Inventory;
use crate::zones::Zone;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HarvestReport {
    /// (resource name, count) in harvest order.
    pub gathered: Vec<(String, usize)>,
    /// Resources that did not fit and stay in the zone.
    pub left_behind: usize,
}

impl HarvestReport {
    pub fn total(&self) -> usize {
        self.gathered.iter().map(|(_, count)| count).sum()
    }
}

/// Moves as many of the zone's resources into `inventory` as fit.
pub fn harvest(zone: &mut Zone, inventory: &mut Inventory) -> HarvestReport {
    let resources = std::mem::take(&mut zone.resources);
    let mut gathered: Vec<(String, usize)> = Vec::new();
    for item in &resources[..resources.len().min(inventory.free_slots())] {
        match gathered.iter_mut().find(|(name, _)| *name == item.name) {
            Some((_, count)) => *count += 1,
            None => gathered.push((item.name.clone(), 1)),
        }
    }
    zone.resources = inventory.add_all(resources);
    HarvestReport {
        gathered,
        left_behind: zone.resources.len(),
    }
}
