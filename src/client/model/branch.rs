use serde::{Deserialize, Serialize};

/// A shop branch, as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub seats: u32,
    pub image_name: String,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decodes_backend_shape() {
        let branches: Vec<Branch> = serde_json::from_str(r#"[
            {"id":"1","name":"Downtown Branch","phone":"123-456-7890","address":"123 Main St, City","seats":10,"imageName":"branch1"}
        ]"#).unwrap();
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].seats, 10);
        assert_eq!(branches[0].image_name, "branch1");
    }
}
