use crate::inventory::Inventory;
use crate::record::{Record, RecordId};
use crate::types::pad;
use serde::{Deserialize, Serialize};

/// A physical machine in the lab inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalResource {
    pub id: RecordId,
    pub name: String,
    /// Free-form description (location, hardware, OS)
    pub info: String,
    /// Management IP address
    pub ip_address: String,
    /// Management MAC address
    pub mac_address: String,
}

impl PhysicalResource {
    pub fn describe(&self, indent: usize) -> String {
        let p = pad(indent);
        format!(
            "{p}Physical Resource ID: {}\n{p}|-name: {}\n{p}|-info: {}\n\
             {p}|-IP address: {}\n{p}|-MAC address: {}\n",
            self.id, self.name, self.info, self.ip_address, self.mac_address
        )
    }
}

impl Record for PhysicalResource {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// A virtual resource hosted on the cloud platform (a VM, virtual
/// router, ...). `name` doubles as the server name on the platform,
/// which is how challenge strategies find their target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudVirtualResource {
    pub id: RecordId,
    pub name: String,
    /// Free-form description
    pub info: String,
    /// Management IP address
    pub ip_address: String,
    /// Management URL
    pub url: String,
    /// Physical resources this virtual resource runs on, if known
    pub related_physical_resource_ids: Vec<RecordId>,
}

impl CloudVirtualResource {
    pub fn describe(&self, inventory: &Inventory, indent: usize) -> String {
        let p = pad(indent);
        let mut out = format!(
            "{p}Cloud Virtual Resource ID: {}\n{p}|-name: {}\n{p}|-info: {}\n\
             {p}|-IP address: {}\n{p}|-URL: {}\n",
            self.id, self.name, self.info, self.ip_address, self.url
        );
        if !self.related_physical_resource_ids.is_empty() {
            out.push_str(&format!("{p}|-related physical resource(s):\n"));
            for id in &self.related_physical_resource_ids {
                if let Some(phys) = inventory.physical_resource(*id) {
                    out.push_str(&phys.describe(indent + 1));
                }
            }
        }
        out
    }
}

impl Record for CloudVirtualResource {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

/// A VNF or end-to-end service under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VnfService {
    pub id: RecordId,
    pub name: String,
    /// Free-form description
    pub info: String,
    /// Management IP address
    pub ip_address: String,
    /// Management URL
    pub url: String,
    /// Physical resources backing the service, if known
    pub related_physical_resource_ids: Vec<RecordId>,
    /// Cloud virtual resources backing the service, if known
    pub related_cloud_resource_ids: Vec<RecordId>,
}

impl VnfService {
    pub fn describe(&self, inventory: &Inventory, indent: usize) -> String {
        let p = pad(indent);
        let mut out = format!(
            "{p}VNF/Service ID: {}\n{p}|-name: {}\n{p}|-info: {}\n\
             {p}|-IP address: {}\n{p}|-URL: {}\n",
            self.id, self.name, self.info, self.ip_address, self.url
        );
        if !self.related_physical_resource_ids.is_empty() {
            out.push_str(&format!("{p}|-related physical resource(s):\n"));
            for id in &self.related_physical_resource_ids {
                if let Some(phys) = inventory.physical_resource(*id) {
                    out.push_str(&phys.describe(indent + 1));
                }
            }
        }
        if !self.related_cloud_resource_ids.is_empty() {
            out.push_str(&format!("{p}|-related cloud virtual resource(s):\n"));
            for id in &self.related_cloud_resource_ids {
                if let Some(cloud) = inventory.cloud_resource(*id) {
                    out.push_str(&cloud.describe(inventory, indent + 1));
                }
            }
        }
        out
    }
}

impl Record for VnfService {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}
