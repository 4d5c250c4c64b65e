use crate::record::{Record, RecordId};
use crate::types::pad;
use serde::{Deserialize, Serialize};

/// A system that receives challenge or test commands: a cloud
/// controller, an orchestrator, a bare-metal host. All detail fields
/// are optional free text; credentials are stored as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: RecordId,
    pub name: String,
    /// Free-form description
    pub info: String,
    /// Version of the receiving system, if known
    pub version_info: String,
    /// Management IP address
    pub access_ip_address: String,
    /// Management URL
    pub access_url: String,
    /// Username for user/password credentials
    pub username: String,
    /// Password for user/password credentials
    pub password: String,
    /// Key-based credentials (e.g. an SSH public key)
    pub key: String,
    /// Description of the recipient's network
    pub network_info: String,
}

impl Recipient {
    pub fn describe(&self, indent: usize) -> String {
        let p = pad(indent);
        let mut out = String::new();
        out.push_str(&format!("{p}Recipient ID: {}\n", self.id));
        out.push_str(&format!("{p}|-name: {}\n", self.name));
        out.push_str(&format!("{p}|-info: {}\n", self.info));
        out.push_str(&format!("{p}|-version info: {}\n", self.version_info));
        out.push_str(&format!("{p}|-IP address: {}\n", self.access_ip_address));
        out.push_str(&format!("{p}|-URL: {}\n", self.access_url));
        out.push_str(&format!("{p}|-username: {}\n", self.username));
        out.push_str(&format!("{p}|-key credentials: {}\n", self.key));
        out.push_str(&format!("{p}|-network info: {}\n", self.network_info));
        out
    }
}

impl Record for Recipient {
    fn id(&self) -> RecordId {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_omits_password() {
        let recipient = Recipient {
            id: 1,
            name: "controller".into(),
            info: String::new(),
            version_info: String::new(),
            access_ip_address: "172.16.10.10".into(),
            access_url: String::new(),
            username: "admin".into(),
            password: "hunter2".into(),
            key: String::new(),
            network_info: String::new(),
        };
        let text = recipient.describe(0);
        assert!(text.contains("|-username: admin"));
        assert!(!text.contains("hunter2"));
    }
}
