use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One entry in the `actions` map of an action-definitions file. Field
/// names follow the file's camelCase (`energyCost`, `stackWith`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEntry {
    /// Display grouping; the file calls this `type`.
    #[serde(rename = "type", default)]
    pub group: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub energy_cost: i32,
    #[serde(default)]
    pub roll: Option<String>,
    /// Free-text compatibility rule, compiled to a `StackRule` at load.
    #[serde(default)]
    pub stack_with: Option<String>,
    #[serde(default)]
    pub on_hit: Option<String>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub exclusive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    /// Action definitions in file order. The picker grid lays actions out
    /// in the order the file lists them, so deserialization must not
    /// re-sort the map.
    #[serde(deserialize_with = "actions_in_file_order")]
    pub actions: Vec<(String, ActionEntry)>,
    #[serde(default)]
    pub common_actions: Vec<String>,
}

fn actions_in_file_order<'de, D>(deserializer: D) -> Result<Vec<(String, ActionEntry)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ActionsVisitor;

    impl<'de> Visitor<'de> for ActionsVisitor {
        type Value = Vec<(String, ActionEntry)>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of action names to action definitions")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut actions = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                actions.push(entry);
            }
            Ok(actions)
        }
    }

    deserializer.deserialize_map(ActionsVisitor)
}
