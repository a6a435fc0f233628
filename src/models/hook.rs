use serde::{Deserialize, Deserializer};

/// Decode `null` the same way as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HookModel {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct HookWorkspace {
    #[serde(deserialize_with = "null_as_default")]
    pub current_dir: String,
}

/// Payload Claude Code pipes to the statusLine command on stdin.
///
/// Every field is optional; absent or `null` values decode as empty strings.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct StatusInput {
    #[serde(deserialize_with = "null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transcript_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model: HookModel,
    #[serde(deserialize_with = "null_as_default")]
    pub workspace: HookWorkspace,
}
